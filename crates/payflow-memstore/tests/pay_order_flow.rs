//! End-to-end pay-order flow against the in-memory repository and the
//! fake gateway.

use std::sync::Arc;

use payflow_core::{Currency, Money, Order, OrderRepository, PayOrderUseCase};
use payflow_memstore::{FakePaymentGateway, InMemoryOrderRepository};

fn usd(amount: f64) -> Money {
    Money::new(amount, Currency::Usd).unwrap()
}

fn wire(
    repository: &InMemoryOrderRepository,
    gateway: &FakePaymentGateway,
) -> PayOrderUseCase {
    PayOrderUseCase::new(Arc::new(repository.clone()), Arc::new(gateway.clone()))
}

async fn seed(repository: &InMemoryOrderRepository, order: &Order) {
    repository.save(order).await.unwrap();
}

#[tokio::test]
async fn successful_payment_of_three_line_order() {
    let repository = InMemoryOrderRepository::new();
    let gateway = FakePaymentGateway::new();
    let use_case = wire(&repository, &gateway);

    let mut order = Order::new("order_001", "customer_123");
    order.add_line("MacBook Pro", 1, usd(1999.99)).unwrap();
    order.add_line("Magic Mouse", 2, usd(79.99)).unwrap();
    order.add_line("Laptop Case", 1, usd(49.99)).unwrap();
    assert_eq!(order.total(), usd(2209.96));
    seed(&repository, &order).await;

    let outcome = use_case.execute("order_001").await;

    assert!(outcome.success);
    assert_eq!(outcome.order_id, "order_001");
    assert!(outcome.transaction_id.starts_with("txn_"));
    assert!(!outcome.transaction_id.is_empty());

    let stored = repository.get_by_id("order_001").await.unwrap();
    assert!(stored.is_paid());
    assert!(stored.paid_at().is_some());

    let charges = gateway.charges();
    assert_eq!(charges.len(), 1);
    assert_eq!(charges[0].order_id, "order_001");
    assert_eq!(charges[0].amount, usd(2209.96));
}

#[tokio::test]
async fn empty_order_fails_without_contacting_gateway() {
    let repository = InMemoryOrderRepository::new();
    let gateway = FakePaymentGateway::new();
    let use_case = wire(&repository, &gateway);

    seed(&repository, &Order::new("empty_order", "customer_456")).await;

    let outcome = use_case.execute("empty_order").await;

    assert!(!outcome.success);
    assert!(outcome.error_message.contains("Cannot pay empty order"));
    assert!(outcome.transaction_id.is_empty());
    assert_eq!(gateway.charge_count(), 0);
}

#[tokio::test]
async fn second_payment_attempt_fails_and_does_not_recharge() {
    let repository = InMemoryOrderRepository::new();
    let gateway = FakePaymentGateway::new();
    let use_case = wire(&repository, &gateway);

    let mut order = Order::new("paid_order", "customer_789");
    order.add_line("Widget", 1, usd(100.0)).unwrap();
    seed(&repository, &order).await;

    let first = use_case.execute("paid_order").await;
    assert!(first.success);
    assert_eq!(gateway.charge_count(), 1);

    let second = use_case.execute("paid_order").await;
    assert!(!second.success);
    assert!(second.error_message.contains("already paid"));
    assert_eq!(gateway.charge_count(), 1);
}

#[tokio::test]
async fn declined_charge_is_not_persisted() {
    let repository = InMemoryOrderRepository::new();
    let gateway = FakePaymentGateway::declining();
    let use_case = wire(&repository, &gateway);

    let mut order = Order::new("order_001", "customer_123");
    order.add_line("Widget", 1, usd(100.0)).unwrap();
    seed(&repository, &order).await;

    let outcome = use_case.execute("order_001").await;

    assert!(!outcome.success);
    assert_eq!(
        outcome.error_message,
        "Payment gateway declined the transaction"
    );
    assert_eq!(gateway.charge_count(), 1);

    // Stored order never left Created
    let stored = repository.get_by_id("order_001").await.unwrap();
    assert!(!stored.is_paid());
    assert!(stored.paid_at().is_none());
}

#[tokio::test]
async fn unknown_order_reports_lookup_failure() {
    let repository = InMemoryOrderRepository::new();
    let gateway = FakePaymentGateway::new();
    let use_case = wire(&repository, &gateway);

    let outcome = use_case.execute("order_404").await;

    assert!(!outcome.success);
    assert!(outcome.error_message.contains("Order not found"));
    assert_eq!(gateway.charge_count(), 0);
}

#[tokio::test]
async fn gateway_toggled_back_to_approve_allows_payment() {
    let repository = InMemoryOrderRepository::new();
    let gateway = FakePaymentGateway::declining();
    let use_case = wire(&repository, &gateway);

    let mut order = Order::new("order_001", "customer_123");
    order.add_line("Widget", 1, usd(50.0)).unwrap();
    seed(&repository, &order).await;

    assert!(!use_case.execute("order_001").await.success);

    gateway.set_approve(true);
    let retry = use_case.execute("order_001").await;
    assert!(retry.success);
    assert_eq!(gateway.charge_count(), 2);

    let stored = repository.get_by_id("order_001").await.unwrap();
    assert!(stored.is_paid());
}
