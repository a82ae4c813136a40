//! # Pay-Order Use Case
//!
//! Orchestrates a single payment attempt for one order: load, domain
//! pay, gateway charge, persist. Every failure along the way is folded
//! into a uniform [`PayOrderOutcome`] so callers branch on `success`
//! only and never handle raw errors.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::contracts::{BoxedOrderRepository, BoxedPaymentGateway};
use crate::error::PayResult;

/// Uniform result of a payment attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayOrderOutcome {
    /// Whether the payment went through end to end
    pub success: bool,
    /// The order the attempt was for
    pub order_id: String,
    /// Gateway transaction identifier; empty on failure
    pub transaction_id: String,
    /// Human-readable failure diagnostic; empty on success
    pub error_message: String,
}

impl PayOrderOutcome {
    /// A successful payment with its gateway transaction id
    pub fn succeeded(order_id: impl Into<String>, transaction_id: impl Into<String>) -> Self {
        Self {
            success: true,
            order_id: order_id.into(),
            transaction_id: transaction_id.into(),
            error_message: String::new(),
        }
    }

    /// A failed payment with a diagnostic message
    pub fn failed(order_id: impl Into<String>, error_message: impl Into<String>) -> Self {
        Self {
            success: false,
            order_id: order_id.into(),
            transaction_id: String::new(),
            error_message: error_message.into(),
        }
    }
}

/// Application-level use case paying a single order.
///
/// Collaborators are injected at construction time; the use case holds
/// no other state. Per `execute` call the side effects are exactly one
/// repository read, at most one domain mutation, at most one gateway
/// call, and at most one repository write, always in that order.
pub struct PayOrderUseCase {
    repository: BoxedOrderRepository,
    gateway: BoxedPaymentGateway,
}

impl PayOrderUseCase {
    /// Create the use case with its two collaborators
    pub fn new(repository: BoxedOrderRepository, gateway: BoxedPaymentGateway) -> Self {
        Self {
            repository,
            gateway,
        }
    }

    /// Attempt to pay the order with the given identity.
    ///
    /// Always returns a [`PayOrderOutcome`]; no error escapes this
    /// boundary. A gateway decline yields a failed outcome and the
    /// mutated order is deliberately not persisted, so a payment that
    /// did not clear is never recorded.
    #[instrument(skip(self))]
    pub async fn execute(&self, order_id: &str) -> PayOrderOutcome {
        match self.try_execute(order_id).await {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!(order_id, error = %err, "payment attempt failed");
                PayOrderOutcome::failed(order_id, err.to_string())
            }
        }
    }

    async fn try_execute(&self, order_id: &str) -> PayResult<PayOrderOutcome> {
        // 1. Load the order
        let mut order = self.repository.get_by_id(order_id).await?;
        debug!(order_id, total = %order.total(), "order loaded");

        // 2. Domain pay transition; on failure the gateway is never contacted
        order.pay()?;

        // 3. Charge the gateway with the total at the moment of charging
        let charge = self.gateway.charge(order_id, order.total()).await?;
        if !charge.approved {
            info!(order_id, "gateway declined the charge");
            return Ok(PayOrderOutcome::failed(
                order_id,
                "Payment gateway declined the transaction",
            ));
        }

        // 4. Persist the paid order only after the charge cleared
        self.repository.save(&order).await?;

        info!(
            order_id,
            transaction_id = %charge.transaction_id,
            "order paid"
        );
        Ok(PayOrderOutcome::succeeded(order_id, charge.transaction_id))
    }
}
