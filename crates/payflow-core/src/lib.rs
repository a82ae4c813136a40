//! # payflow-core
//!
//! Core domain types and the pay-order use case for payflow.
//!
//! This crate provides:
//! - `Money` and `Currency` value objects with currency-matching arithmetic
//! - `Order` aggregate root owning its `OrderLine` items and enforcing
//!   payment invariants
//! - `OrderRepository` and `PaymentGateway` traits for the two external
//!   collaborators
//! - `PayOrderUseCase` orchestrating load, pay, charge, persist into a
//!   uniform `PayOrderOutcome`
//! - `PayError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use payflow_core::{Currency, Money, Order, PayOrderUseCase};
//!
//! // Build an order
//! let mut order = Order::new("order_001", "customer_123");
//! order.add_line("MacBook Pro", 1, Money::new(1999.99, Currency::Usd)?)?;
//! repository.save(&order).await?;
//!
//! // Pay it through the use case
//! let use_case = PayOrderUseCase::new(repository, gateway);
//! let outcome = use_case.execute("order_001").await;
//! assert!(outcome.success);
//! ```

pub mod contracts;
pub mod error;
pub mod money;
pub mod order;
pub mod pay_order;

// Re-exports for convenience
pub use contracts::{
    BoxedOrderRepository, BoxedPaymentGateway, ChargeOutcome, OrderRepository, PaymentGateway,
};
pub use error::{PayError, PayResult};
pub use money::{Currency, Money};
pub use order::{Order, OrderLine, OrderStatus};
pub use pay_order::{PayOrderOutcome, PayOrderUseCase};
