//! # payflow-memstore
//!
//! In-memory implementations of the payflow collaborator contracts:
//!
//! 1. **InMemoryOrderRepository** - `HashMap`-backed order storage
//! 2. **FakePaymentGateway** - configurable approve/decline gateway that
//!    records every charge attempt
//!
//! Both are meant for the demo binary and for tests; neither carries
//! durability or a real payment network behind it.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use payflow_core::PayOrderUseCase;
//! use payflow_memstore::{FakePaymentGateway, InMemoryOrderRepository};
//!
//! let repository = InMemoryOrderRepository::new();
//! let gateway = FakePaymentGateway::new();
//! let use_case = PayOrderUseCase::new(
//!     Arc::new(repository.clone()),
//!     Arc::new(gateway.clone()),
//! );
//!
//! let outcome = use_case.execute("order_001").await;
//! ```

pub mod gateway;
pub mod repository;

// Re-exports
pub use gateway::{ChargeRecord, FakePaymentGateway};
pub use repository::InMemoryOrderRepository;
