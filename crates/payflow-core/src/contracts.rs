//! # Collaborator Contracts
//!
//! Abstract contracts for the two external collaborators the core
//! depends on: order storage and the payment network. Concrete
//! implementations live outside the core and are injected into the use
//! case at construction time.
//!
//! ```text
//! ┌──────────────────────────────┐   ┌──────────────────────────────┐
//! │   OrderRepository (trait)    │   │   PaymentGateway (trait)     │
//! │  ├── get_by_id()             │   │  └── charge()                │
//! │  └── save()                  │   │                              │
//! └──────────────────────────────┘   └──────────────────────────────┘
//!              ▲                                   ▲
//!   ┌──────────┴───────────┐            ┌──────────┴──────────┐
//!   │ InMemoryOrderRepo    │            │ FakePaymentGateway  │
//!   │ (payflow-memstore)   │            │ (payflow-memstore)  │
//!   └──────────────────────┘            └─────────────────────┘
//! ```

use crate::error::PayResult;
use crate::money::Money;
use crate::order::Order;
use async_trait::async_trait;
use std::sync::Arc;

/// Storage contract for order aggregates.
///
/// `get_by_id` hands out an owned copy of the stored order; callers
/// never hold a live reference into the store, so a mutated-but-unsaved
/// order leaves the stored state untouched.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Load the order with the given identity.
    ///
    /// Fails with `NotFound` when no such order exists.
    async fn get_by_id(&self, order_id: &str) -> PayResult<Order>;

    /// Persist the order, upserting by its `order_id`. Idempotent.
    async fn save(&self, order: &Order) -> PayResult<()>;
}

/// Payment network contract.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Attempt to charge `amount` for the given order.
    ///
    /// A declined charge is a normal [`ChargeOutcome`], not an error;
    /// `Err` is reserved for faults reaching the gateway at all.
    async fn charge(&self, order_id: &str, amount: Money) -> PayResult<ChargeOutcome>;
}

/// Outcome of a single charge attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChargeOutcome {
    /// Whether the charge cleared
    pub approved: bool,
    /// Gateway transaction identifier; empty when declined
    pub transaction_id: String,
}

impl ChargeOutcome {
    /// An approved charge with its transaction identifier
    pub fn approved(transaction_id: impl Into<String>) -> Self {
        Self {
            approved: true,
            transaction_id: transaction_id.into(),
        }
    }

    /// A declined charge (no transaction identifier)
    pub fn declined() -> Self {
        Self {
            approved: false,
            transaction_id: String::new(),
        }
    }
}

/// Type alias for a shared repository (dynamic dispatch)
pub type BoxedOrderRepository = Arc<dyn OrderRepository>;

/// Type alias for a shared payment gateway (dynamic dispatch)
pub type BoxedPaymentGateway = Arc<dyn PaymentGateway>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_charge_outcome_constructors() {
        let ok = ChargeOutcome::approved("txn_12345678");
        assert!(ok.approved);
        assert_eq!(ok.transaction_id, "txn_12345678");

        let declined = ChargeOutcome::declined();
        assert!(!declined.approved);
        assert!(declined.transaction_id.is_empty());
    }
}
