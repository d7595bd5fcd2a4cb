use std::sync::Arc;
use actix_web::web::Bytes;
use actix_web::HttpResponse;
use log::{error, warn};
use crate::server::controller::error::CustomError;
use crate::server::database::OrderStore;
use crate::server::usecase::create_order::{CreateOrderError, CreateOrderUseCase, OrderInput};
use crate::server::usecase::list_orders::ListOrdersUseCase;
use crate::server::webserver::{handler, HandlerFn};

async fn list(usecase: Arc<ListOrdersUseCase<OrderStore>>) -> Result<HttpResponse, CustomError> {
    match usecase.execute().await {
        Ok(orders) => Ok(HttpResponse::Ok().json(orders)),
        Err(e) => {
            error!("list_orders failed, {}", e);
            Err(e.into())
        }
    }
}

async fn create(usecase: Arc<CreateOrderUseCase<OrderStore>>, body: Bytes) -> Result<HttpResponse, CustomError> {
    let input = serde_json::from_slice::<OrderInput>(&body)
        .map_err(|e| CustomError::BadRequest(e.to_string()))?;
    match usecase.execute(input).await {
        Ok(order) => Ok(HttpResponse::Ok().json(order)),
        Err(e @ CreateOrderError::Invalid(_)) => {
            warn!("create_order rejected, {}", e);
            Err(e.into())
        }
        Err(e) => {
            error!("create_order failed, {}", e);
            Err(e.into())
        }
    }
}

/// GET handler listing every order
pub(crate) fn list_orders(usecase: Arc<ListOrdersUseCase<OrderStore>>) -> HandlerFn {
    handler(move |_, _| {
        let usecase = usecase.clone();
        async move { list(usecase).await.map_err(actix_web::Error::from) }
    })
}

/// POST handler creating an order from a json body
pub(crate) fn create_order(usecase: Arc<CreateOrderUseCase<OrderStore>>) -> HandlerFn {
    handler(move |_, body| {
        let usecase = usecase.clone();
        async move { create(usecase, body).await.map_err(actix_web::Error::from) }
    })
}
