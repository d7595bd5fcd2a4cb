//! order persistence

pub(crate) mod memory;
pub(crate) mod postgres;

use derive_more::{Display, Error};
use crate::server::database::memory::MemoryOrderRepository;
use crate::server::database::postgres::PgOrderRepository;
use crate::server::model::order::{Order, OrderRepository};

#[derive(Debug, Display, Error)]
pub(crate) enum RepositoryError {
    #[display("database error: {_0}")]
    Db(#[error(source)] tokio_postgres::Error),
    #[display("order {_0} already exists")]
    Duplicate(#[error(not(source))] String),
}

/// Repository picked at startup.
#[derive(Clone)]
pub(crate) enum OrderStore {
    Postgres(PgOrderRepository),
    Memory(MemoryOrderRepository),
}

impl OrderRepository for OrderStore {
    type Error = RepositoryError;

    async fn get_all(&self) -> Result<Vec<Order>, RepositoryError> {
        match self {
            OrderStore::Postgres(repo) => repo.get_all().await,
            OrderStore::Memory(repo) => repo.get_all().await,
        }
    }

    async fn save(&self, order: &Order) -> Result<(), RepositoryError> {
        match self {
            OrderStore::Postgres(repo) => repo.save(order).await,
            OrderStore::Memory(repo) => repo.save(order).await,
        }
    }
}
