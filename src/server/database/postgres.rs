use std::sync::Arc;
use log::error;
use tokio_postgres::error::SqlState;
use tokio_postgres::types::ToSql;
use tokio_postgres::{Client, NoTls};
use crate::server::database::RepositoryError;
use crate::server::model::order::{Order, OrderRepository};

/// Open a connection and drive it in the background.
pub(crate) async fn connect(conn_str: &str) -> Result<Client, RepositoryError> {
    let (client, conn) = tokio_postgres::connect(conn_str, NoTls)
        .await
        .map_err(RepositoryError::Db)?;
    tokio::spawn(async move {
        if let Err(e) = conn.await {
            error!("connection returned error and aborted, {}", e);
        }
    });
    Ok(client)
}

/// Orders stored in the `orders` table.
#[derive(Clone)]
pub(crate) struct PgOrderRepository {
    client: Arc<Client>,
}

impl PgOrderRepository {
    pub fn new(client: Client) -> Self {
        Self { client: Arc::new(client) }
    }
}

impl OrderRepository for PgOrderRepository {
    type Error = RepositoryError;

    async fn get_all(&self) -> Result<Vec<Order>, RepositoryError> {
        let rows = self
            .client
            .query("SELECT id, price, tax, final_price FROM orders ORDER BY seq", &[])
            .await
            .map_err(RepositoryError::Db)?;
        rows.into_iter()
            .map(|r| -> Result<Order, tokio_postgres::Error> {
                Ok(Order {
                    id: r.try_get("id")?,
                    price: r.try_get("price")?,
                    tax: r.try_get("tax")?,
                    final_price: r.try_get("final_price")?,
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(RepositoryError::Db)
    }

    async fn save(&self, order: &Order) -> Result<(), RepositoryError> {
        let params: &[&(dyn ToSql + Sync); 4] = &[
            &order.id,
            &order.price,
            &order.tax,
            &order.final_price,
        ];
        match self
            .client
            .execute(
                "INSERT INTO orders (id, price, tax, final_price) VALUES ($1, $2, $3, $4)",
                params,
            )
            .await
        {
            Ok(_) => Ok(()),
            Err(e) if e.code() == Some(&SqlState::UNIQUE_VIOLATION) => {
                Err(RepositoryError::Duplicate(order.id.clone()))
            }
            Err(e) => Err(RepositoryError::Db(e)),
        }
    }
}
