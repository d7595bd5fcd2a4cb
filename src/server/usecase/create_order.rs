use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use crate::server::model::order::{Order, OrderError, OrderRepository};

#[derive(Debug, Deserialize)]
pub(crate) struct OrderInput {
    pub id: String,
    pub price: f64,
    pub tax: f64,
}

#[derive(Debug, PartialEq, Serialize)]
pub(crate) struct OrderOutput {
    pub id: String,
    pub price: f64,
    pub tax: f64,
    pub final_price: f64,
}

#[derive(Debug, Display, Error)]
pub(crate) enum CreateOrderError<E: std::error::Error + 'static> {
    #[display("{_0}")]
    Invalid(#[error(source)] OrderError),
    #[display("{_0}")]
    Repository(#[error(source)] E),
}

pub(crate) struct CreateOrderUseCase<R: OrderRepository> {
    order_repository: R,
}

impl<R: OrderRepository> CreateOrderUseCase<R> {
    pub fn new(order_repository: R) -> Self {
        Self { order_repository }
    }

    pub async fn execute(&self, input: OrderInput) -> Result<OrderOutput, CreateOrderError<R::Error>> {
        let order = Order::new(input.id, input.price, input.tax).map_err(CreateOrderError::Invalid)?;
        self.order_repository
            .save(&order)
            .await
            .map_err(CreateOrderError::Repository)?;
        Ok(OrderOutput {
            id: order.id,
            price: order.price,
            tax: order.tax,
            final_price: order.final_price,
        })
    }
}
