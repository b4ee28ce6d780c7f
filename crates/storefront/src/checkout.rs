//! Checkout boundary: turning a cart into an order record.
//!
//! The order store itself is external. The two-step contract is: draft an
//! order from the cart, persist it through whatever store the caller uses,
//! and only then call [`Cart::clear`]. A failed write leaves the cart
//! untouched so the user can retry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use greenbasket_cart::{Cart, CartLine};
use greenbasket_core::{Money, OrderId, ProductId, UserId};

/// Errors that can occur while drafting an order.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    /// The cart has no lines to order.
    #[error("cannot place an order for an empty cart")]
    EmptyCart,
}

/// Snapshot of one cart line at order time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_id: ProductId,
    pub title: String,
    pub unit_price: Money,
    pub quantity: u32,
}

impl From<&CartLine> for OrderLine {
    fn from(line: &CartLine) -> Self {
        Self {
            product_id: line.id.clone(),
            title: line.title.clone(),
            unit_price: line.unit_price,
            quantity: line.quantity,
        }
    }
}

/// The order record handed to the external order store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub lines: Vec<OrderLine>,
    pub total: Money,
    pub created_at: DateTime<Utc>,
}

/// Build an order record from the current cart contents.
///
/// The cart is only read; clearing it after a successful persist is the
/// caller's responsibility.
///
/// # Errors
///
/// Returns [`CheckoutError::EmptyCart`] when the cart holds no lines.
pub fn draft_order(user_id: UserId, cart: &Cart) -> Result<Order, CheckoutError> {
    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }
    let order = Order {
        id: OrderId::new(Uuid::new_v4().to_string()),
        user_id,
        lines: cart.lines().iter().map(OrderLine::from).collect(),
        total: cart.total_price(),
        created_at: Utc::now(),
    };
    debug!(order_id = %order.id, total = %order.total, "order drafted");
    Ok(order)
}
