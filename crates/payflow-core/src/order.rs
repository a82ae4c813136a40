//! # Order Aggregate
//!
//! The `Order` aggregate root and its `OrderLine` items.
//!
//! The aggregate owns its line items exclusively and enforces every
//! mutation through its own methods: lines can only change while the
//! order is in `Created` status, and `pay()` is the sole entry point
//! into the `Paid` status.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{PayError, PayResult};
use crate::money::{Currency, Money};

/// Order lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Order is open and its lines may be edited
    Created,
    /// Order has been paid; line items are frozen
    Paid,
    /// Reserved for a future cancellation flow; no transition into or
    /// out of this status exists yet
    Cancelled,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            OrderStatus::Created => "created",
            OrderStatus::Paid => "paid",
            OrderStatus::Cancelled => "cancelled",
        };
        write!(f, "{s}")
    }
}

/// A line item in an order
///
/// Immutable once constructed; owned exclusively by the `Order` that
/// holds it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    /// Product name (denormalized for display)
    pub product_name: String,
    /// Quantity ordered
    pub quantity: u32,
    /// Price per unit
    pub unit_price: Money,
}

impl OrderLine {
    /// Create a new order line
    pub fn new(product_name: impl Into<String>, quantity: u32, unit_price: Money) -> Self {
        Self {
            product_name: product_name.into(),
            quantity,
            unit_price,
        }
    }

    /// Total price for this line (unit price times quantity)
    pub fn total(&self) -> Money {
        self.unit_price.scale(self.quantity)
    }
}

/// The order aggregate root.
///
/// Line storage and status are private: callers read lines through
/// [`Order::lines`], which returns an independent snapshot, and reach
/// `Paid` only through [`Order::pay`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Unique order identity
    order_id: String,
    /// Owning customer
    customer_id: String,
    /// Line items, in insertion order
    lines: Vec<OrderLine>,
    /// Current lifecycle status
    status: OrderStatus,
    /// When the order was created
    created_at: DateTime<Utc>,
    /// When the order was paid, if it has been
    paid_at: Option<DateTime<Utc>>,
}

impl Order {
    /// Create a new order in `Created` status with no lines
    pub fn new(order_id: impl Into<String>, customer_id: impl Into<String>) -> Self {
        Self {
            order_id: order_id.into(),
            customer_id: customer_id.into(),
            lines: Vec::new(),
            status: OrderStatus::Created,
            created_at: Utc::now(),
            paid_at: None,
        }
    }

    /// Append a line item.
    ///
    /// Fails with `OrderLocked` when the order is no longer in
    /// `Created` status.
    pub fn add_line(
        &mut self,
        product_name: impl Into<String>,
        quantity: u32,
        unit_price: Money,
    ) -> PayResult<()> {
        self.ensure_editable()?;
        self.lines
            .push(OrderLine::new(product_name, quantity, unit_price));
        Ok(())
    }

    /// Remove the line at `index`.
    ///
    /// Fails with `OrderLocked` when the order is not in `Created`
    /// status. An out-of-range index is a silent no-op; this lenient
    /// policy is deliberate and pending product-owner confirmation
    /// before it could become a hard error.
    pub fn remove_line(&mut self, index: usize) -> PayResult<()> {
        self.ensure_editable()?;
        if index < self.lines.len() {
            self.lines.remove(index);
        }
        Ok(())
    }

    /// Snapshot of the line items, in insertion order.
    ///
    /// Returns an independent copy so callers can never mutate the
    /// aggregate's internal storage.
    pub fn lines(&self) -> Vec<OrderLine> {
        self.lines.clone()
    }

    /// Number of line items
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Total amount across all lines, recomputed on every call.
    ///
    /// Carries the currency of the first line; an empty order totals to
    /// zero USD (documented default).
    pub fn total(&self) -> Money {
        match self.lines.first() {
            None => Money::zero(Currency::Usd),
            Some(first) => {
                let minor: i64 = self.lines.iter().map(|line| line.total().minor_units()).sum();
                Money::from_minor_units(minor, first.unit_price.currency())
                    .unwrap_or_else(|_| Money::zero(first.unit_price.currency()))
            }
        }
    }

    /// Returns true if the order has no line items
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns true if the order has been paid
    pub fn is_paid(&self) -> bool {
        self.status == OrderStatus::Paid
    }

    /// Unique order identity
    pub fn order_id(&self) -> &str {
        &self.order_id
    }

    /// Owning customer
    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    /// Current lifecycle status
    pub fn status(&self) -> OrderStatus {
        self.status
    }

    /// When the order was created
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// When the order was paid, if it has been
    pub fn paid_at(&self) -> Option<DateTime<Utc>> {
        self.paid_at
    }

    /// Pay the order (domain transition `Created -> Paid`).
    ///
    /// Fails with `EmptyOrder` when there are no lines and with
    /// `AlreadyPaid` when the order is already paid. On success sets
    /// the status to `Paid` and records `paid_at`.
    pub fn pay(&mut self) -> PayResult<()> {
        if self.is_empty() {
            return Err(PayError::EmptyOrder);
        }
        if self.is_paid() {
            return Err(PayError::AlreadyPaid);
        }
        self.status = OrderStatus::Paid;
        self.paid_at = Some(Utc::now());
        Ok(())
    }

    fn ensure_editable(&self) -> PayResult<()> {
        if self.status != OrderStatus::Created {
            return Err(PayError::OrderLocked {
                status: self.status,
            });
        }
        Ok(())
    }
}

impl std::fmt::Display for Order {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Order(id={}, status={}, total={})",
            self.order_id,
            self.status,
            self.total()
        )
    }
}
