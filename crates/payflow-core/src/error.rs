//! # Payment Error Types
//!
//! Typed error handling for the payflow order-payment core.
//! All fallible domain and collaborator operations return `Result<T, PayError>`.

use thiserror::Error;

use crate::order::OrderStatus;

/// Core error type for all order-payment operations
#[derive(Debug, Error)]
pub enum PayError {
    /// Constructing a Money value with a negative amount
    #[error("Invalid amount: {amount} (amount cannot be negative)")]
    InvalidAmount { amount: f64 },

    /// Adding Money values of different currencies
    #[error("Cannot add money with different currencies: {expected} vs {found}")]
    CurrencyMismatch { expected: String, found: String },

    /// Mutating line items on an order that is no longer in Created status
    #[error("Cannot modify order in status {status}")]
    OrderLocked { status: OrderStatus },

    /// Paying an order with no line items
    #[error("Cannot pay empty order")]
    EmptyOrder,

    /// Paying an order that has already been paid
    #[error("Order already paid")]
    AlreadyPaid,

    /// Repository lookup miss
    #[error("Order not found: {order_id}")]
    NotFound { order_id: String },

    /// Storage fault in the repository collaborator
    #[error("Storage error: {0}")]
    Storage(String),

    /// Fault communicating with the payment gateway
    #[error("Gateway error: {0}")]
    Gateway(String),
}

impl PayError {
    /// Returns true if this error is a transient collaborator fault
    /// rather than a domain rule violation
    pub fn is_retryable(&self) -> bool {
        matches!(self, PayError::Storage(_) | PayError::Gateway(_))
    }

    /// Returns true if this error is a domain invariant violation
    /// (the request itself is invalid, retrying cannot help)
    pub fn is_domain_violation(&self) -> bool {
        matches!(
            self,
            PayError::InvalidAmount { .. }
                | PayError::CurrencyMismatch { .. }
                | PayError::OrderLocked { .. }
                | PayError::EmptyOrder
                | PayError::AlreadyPaid
        )
    }
}

/// Result type alias for order-payment operations
pub type PayResult<T> = Result<T, PayError>;
