use serde::Serialize;
use crate::server::model::order::OrderRepository;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct ListOrdersOutput {
    pub id: String,
    pub price: f64,
    pub tax: f64,
    pub final_price: f64,
}

pub(crate) struct ListOrdersUseCase<R: OrderRepository> {
    order_repository: R,
}

impl<R: OrderRepository> ListOrdersUseCase<R> {
    pub fn new(order_repository: R) -> Self {
        Self { order_repository }
    }

    /// Project every stored order, repository errors are returned as is.
    pub async fn execute(&self) -> Result<Vec<ListOrdersOutput>, R::Error> {
        let orders = self.order_repository.get_all().await?;
        Ok(orders
            .into_iter()
            .map(|order| ListOrdersOutput {
                id: order.id,
                price: order.price,
                tax: order.tax,
                final_price: order.final_price,
            })
            .collect())
    }
}
