//! main file for the server

mod controller;
mod database;
pub mod model;
mod usecase;
mod webserver;

use std::io;
use std::sync::Arc;
use log::{info, warn};
use crate::server::controller::orders::{create_order, list_orders};
use crate::server::database::memory::MemoryOrderRepository;
use crate::server::database::postgres::{connect, PgOrderRepository};
use crate::server::database::OrderStore;
use crate::server::model::config::ServerConfig;
use crate::server::usecase::create_order::CreateOrderUseCase;
use crate::server::usecase::list_orders::ListOrdersUseCase;
use crate::server::webserver::WebServer;

async fn build_store(db_conn_str: Option<&str>) -> io::Result<OrderStore> {
    match db_conn_str {
        Some(conn_str) => {
            let client = connect(conn_str).await.map_err(io::Error::other)?;
            info!("connected to postgres order store");
            Ok(OrderStore::Postgres(PgOrderRepository::new(client)))
        }
        None => {
            warn!("DB_CONN_STR is not set, orders are kept in memory");
            Ok(OrderStore::Memory(MemoryOrderRepository::default()))
        }
    }
}

/// Run the server
pub async fn run(ServerConfig { addr, db_conn_str }: ServerConfig) -> io::Result<()> {
    let store = build_store(db_conn_str.as_deref()).await?;

    let mut server = WebServer::new(addr.to_string());
    server.register("GET", "/order", list_orders(Arc::new(ListOrdersUseCase::new(store.clone()))));
    server.register("POST", "/order", create_order(Arc::new(CreateOrderUseCase::new(store))));
    info!("registered {} handlers", server.handlers().len());

    server.start().await
}
