//! # Payflow Demo
//!
//! Wires the pay-order use case to the in-memory repository and the
//! fake gateway, then walks through the happy path and the failure
//! scenarios. Carries no business rules of its own.
//!
//! ```bash
//! # Approving gateway (default)
//! payflow
//!
//! # Declining gateway
//! GATEWAY_MODE=decline payflow
//! ```

mod config;

use std::sync::Arc;

use config::{AppConfig, GatewayMode};
use payflow_core::{
    Currency, Money, Order, OrderRepository, PayOrderOutcome, PayOrderUseCase,
};
use payflow_memstore::{FakePaymentGateway, InMemoryOrderRepository};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    print_banner();

    let config = AppConfig::from_env();
    info!("Environment: {}", config.environment);
    info!("Gateway mode: {:?}", config.gateway_mode);

    let repository = InMemoryOrderRepository::new();
    let gateway = match config.gateway_mode {
        GatewayMode::Approve => FakePaymentGateway::new(),
        GatewayMode::Decline => FakePaymentGateway::declining(),
    };
    let use_case = PayOrderUseCase::new(
        Arc::new(repository.clone()),
        Arc::new(gateway.clone()),
    );

    demo_successful_payment(&repository, &use_case).await?;
    demo_empty_order(&repository, &use_case).await?;
    demo_double_payment(&repository, &use_case).await?;

    info!("Charges seen by the gateway: {}", gateway.charge_count());
    Ok(())
}

/// Pay a three-line order end to end
async fn demo_successful_payment(
    repository: &InMemoryOrderRepository,
    use_case: &PayOrderUseCase,
) -> anyhow::Result<()> {
    println!("\n=== Demo 1: paying a three-line order ===");

    let mut order = Order::new("order_001", "customer_123");
    order.add_line("MacBook Pro", 1, Money::new(1999.99, Currency::Usd)?)?;
    order.add_line("Magic Mouse", 2, Money::new(79.99, Currency::Usd)?)?;
    order.add_line("Laptop Case", 1, Money::new(49.99, Currency::Usd)?)?;
    repository.save(&order).await?;

    println!("Created {order}");
    println!("  customer: {}", order.customer_id());
    println!("  lines:    {}", order.line_count());

    let outcome = use_case.execute("order_001").await;
    print_outcome(&outcome)?;

    let stored = repository.get_by_id("order_001").await?;
    println!(
        "Stored order is now {} (paid_at: {:?})",
        stored.status(),
        stored.paid_at()
    );
    Ok(())
}

/// Paying an order with no lines fails before the gateway is reached
async fn demo_empty_order(
    repository: &InMemoryOrderRepository,
    use_case: &PayOrderUseCase,
) -> anyhow::Result<()> {
    println!("\n=== Demo 2: paying an empty order ===");

    repository
        .save(&Order::new("empty_order", "customer_456"))
        .await?;

    let outcome = use_case.execute("empty_order").await;
    print_outcome(&outcome)?;
    Ok(())
}

/// A second payment attempt on the same order is rejected
async fn demo_double_payment(
    repository: &InMemoryOrderRepository,
    use_case: &PayOrderUseCase,
) -> anyhow::Result<()> {
    println!("\n=== Demo 3: paying the same order twice ===");

    let mut order = Order::new("paid_order", "customer_789");
    order.add_line("Widget", 1, Money::new(100.0, Currency::Usd)?)?;
    repository.save(&order).await?;

    let first = use_case.execute("paid_order").await;
    print_outcome(&first)?;

    let second = use_case.execute("paid_order").await;
    print_outcome(&second)?;
    Ok(())
}

fn print_outcome(outcome: &PayOrderOutcome) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(outcome)?);
    Ok(())
}

fn print_banner() {
    println!(
        r#"
  payflow demo
  ------------
  Order-payment workflow walkthrough
  Version: {}
"#,
        env!("CARGO_PKG_VERSION")
    );
}
