//! # Fake Payment Gateway
//!
//! Configurable `PaymentGateway` implementation that records every
//! charge attempt. Approves by default; can be switched to decline for
//! exercising the failure path.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use payflow_core::{ChargeOutcome, Money, PayResult, PaymentGateway};
use tracing::info;
use uuid::Uuid;

/// A single recorded charge attempt
#[derive(Debug, Clone, PartialEq)]
pub struct ChargeRecord {
    /// The order the charge was for
    pub order_id: String,
    /// The amount presented to the gateway
    pub amount: Money,
}

#[derive(Debug, Default)]
struct GatewayState {
    charges: Vec<ChargeRecord>,
    decline: bool,
}

/// Fake gateway for the demo binary and tests.
///
/// `Clone` shares the recorded state, so the instance handed to the
/// use case and the one kept by a test see the same charge log.
#[derive(Debug, Clone, Default)]
pub struct FakePaymentGateway {
    state: Arc<RwLock<GatewayState>>,
}

impl FakePaymentGateway {
    /// A gateway that approves every charge
    pub fn new() -> Self {
        Self::default()
    }

    /// A gateway that declines every charge
    pub fn declining() -> Self {
        let gateway = Self::default();
        gateway.set_approve(false);
        gateway
    }

    /// Switch between approving and declining subsequent charges
    pub fn set_approve(&self, approve: bool) {
        self.state.write().unwrap().decline = !approve;
    }

    /// Number of charge attempts seen so far
    pub fn charge_count(&self) -> usize {
        self.state.read().unwrap().charges.len()
    }

    /// All recorded charge attempts, in order
    pub fn charges(&self) -> Vec<ChargeRecord> {
        self.state.read().unwrap().charges.clone()
    }
}

#[async_trait]
impl PaymentGateway for FakePaymentGateway {
    async fn charge(&self, order_id: &str, amount: Money) -> PayResult<ChargeOutcome> {
        let mut state = self.state.write().unwrap();
        state.charges.push(ChargeRecord {
            order_id: order_id.to_string(),
            amount,
        });

        if state.decline {
            info!(order_id, %amount, "fake gateway declining charge");
            return Ok(ChargeOutcome::declined());
        }

        let transaction_id = format!("txn_{}", &Uuid::new_v4().simple().to_string()[..8]);
        info!(order_id, %amount, %transaction_id, "fake gateway approved charge");
        Ok(ChargeOutcome::approved(transaction_id))
    }
}
