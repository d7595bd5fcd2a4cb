use std::sync::Arc;
use tokio::sync::RwLock;
use crate::server::database::RepositoryError;
use crate::server::model::order::{Order, OrderRepository};

/// Orders kept in process memory, in insertion order. Ids are unique.
#[derive(Clone, Default)]
pub(crate) struct MemoryOrderRepository {
    orders: Arc<RwLock<Vec<Order>>>,
}

impl OrderRepository for MemoryOrderRepository {
    type Error = RepositoryError;

    async fn get_all(&self) -> Result<Vec<Order>, RepositoryError> {
        Ok(self.orders.read().await.clone())
    }

    async fn save(&self, order: &Order) -> Result<(), RepositoryError> {
        let mut orders = self.orders.write().await;
        if orders.iter().any(|o| o.id == order.id) {
            return Err(RepositoryError::Duplicate(order.id.clone()));
        }
        orders.push(order.clone());
        Ok(())
    }
}
