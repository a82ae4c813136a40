//! # In-Memory Order Repository
//!
//! `HashMap`-backed implementation of the core `OrderRepository` trait.
//! Useful for the demo binary and for tests; carries no durability.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use payflow_core::{Order, OrderRepository, PayError, PayResult};
use tracing::debug;

/// In-memory order store keyed by `order_id`.
///
/// `Clone` is cheap and shares the underlying store, so a repository
/// handed to the use case and one kept by a test observe the same
/// orders. Lookups hand out owned copies: a caller mutating a loaded
/// order changes nothing in the store until `save` is called.
#[derive(Debug, Clone, Default)]
pub struct InMemoryOrderRepository {
    orders: Arc<RwLock<HashMap<String, Order>>>,
}

impl InMemoryOrderRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored orders
    pub fn len(&self) -> usize {
        self.orders.read().unwrap().len()
    }

    /// Returns true if no orders are stored
    pub fn is_empty(&self) -> bool {
        self.orders.read().unwrap().is_empty()
    }

    /// Returns true if an order with this identity is stored
    pub fn contains(&self, order_id: &str) -> bool {
        self.orders.read().unwrap().contains_key(order_id)
    }

    /// Drop all stored orders (for tests)
    pub fn clear(&self) {
        self.orders.write().unwrap().clear();
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn get_by_id(&self, order_id: &str) -> PayResult<Order> {
        self.orders
            .read()
            .unwrap()
            .get(order_id)
            .cloned()
            .ok_or_else(|| PayError::NotFound {
                order_id: order_id.to_string(),
            })
    }

    async fn save(&self, order: &Order) -> PayResult<()> {
        debug!(order_id = order.order_id(), status = %order.status(), "saving order");
        self.orders
            .write()
            .unwrap()
            .insert(order.order_id().to_string(), order.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use payflow_core::{Currency, Money};

    fn usd(amount: f64) -> Money {
        Money::new(amount, Currency::Usd).unwrap()
    }

    #[tokio::test]
    async fn test_save_and_get_round_trip() {
        let repository = InMemoryOrderRepository::new();
        let mut order = Order::new("order_1", "customer_1");
        order.add_line("Widget", 2, usd(10.0)).unwrap();

        repository.save(&order).await.unwrap();

        let loaded = repository.get_by_id("order_1").await.unwrap();
        assert_eq!(loaded.order_id(), "order_1");
        assert_eq!(loaded.total(), usd(20.0));
        assert_eq!(repository.len(), 1);
        assert!(repository.contains("order_1"));
    }

    #[tokio::test]
    async fn test_get_missing_order_fails_not_found() {
        let repository = InMemoryOrderRepository::new();

        let err = repository.get_by_id("nope").await.unwrap_err();
        assert!(matches!(err, PayError::NotFound { .. }));
        assert_eq!(err.to_string(), "Order not found: nope");
    }

    #[tokio::test]
    async fn test_save_upserts_by_order_id() {
        let repository = InMemoryOrderRepository::new();
        let mut order = Order::new("order_1", "customer_1");
        order.add_line("Widget", 1, usd(10.0)).unwrap();
        repository.save(&order).await.unwrap();

        order.add_line("Gadget", 1, usd(5.0)).unwrap();
        repository.save(&order).await.unwrap();

        assert_eq!(repository.len(), 1);
        let loaded = repository.get_by_id("order_1").await.unwrap();
        assert_eq!(loaded.line_count(), 2);
    }

    #[tokio::test]
    async fn test_loaded_order_is_a_copy() {
        let repository = InMemoryOrderRepository::new();
        let mut order = Order::new("order_1", "customer_1");
        order.add_line("Widget", 1, usd(10.0)).unwrap();
        repository.save(&order).await.unwrap();

        // Mutate a loaded copy without saving it back
        let mut loaded = repository.get_by_id("order_1").await.unwrap();
        loaded.pay().unwrap();

        let stored = repository.get_by_id("order_1").await.unwrap();
        assert!(!stored.is_paid());
    }

    #[tokio::test]
    async fn test_clear() {
        let repository = InMemoryOrderRepository::new();
        repository
            .save(&Order::new("order_1", "customer_1"))
            .await
            .unwrap();

        repository.clear();
        assert!(repository.is_empty());
    }
}
