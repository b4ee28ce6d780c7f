//! The cart aggregate and its operation API.

use greenbasket_core::{Money, ProductId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// A product reference supplied by the catalog collaborator.
///
/// The cart trusts this reference as-is; validating it against a live
/// catalog is the caller's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRef {
    /// Opaque catalog key.
    pub id: ProductId,
    /// Display label.
    pub title: String,
    /// Unit price at the time of selection.
    pub price: Money,
}

impl ProductRef {
    /// Create a product reference.
    #[must_use]
    pub fn new(id: impl Into<ProductId>, title: impl Into<String>, price: Money) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            price,
        }
    }
}

/// One distinct purchasable product selected in the current session.
///
/// At most one line exists per [`ProductId`]; `quantity` is at least 1
/// while the line is present. Title and unit price are fixed by the first
/// add and never overwritten by later merges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// Opaque catalog key.
    pub id: ProductId,
    /// Display label, as seen at first add.
    pub title: String,
    /// Unit price, as seen at first add.
    pub unit_price: Money,
    /// Unit count, always >= 1.
    pub quantity: u32,
}

impl CartLine {
    /// Total for this line (`unit_price * quantity`).
    #[must_use]
    pub fn line_total(&self) -> Money {
        self.unit_price.times(self.quantity)
    }
}

/// Behavior of [`Cart::decrement_quantity`] on a line at quantity 1.
///
/// The two storefront variants disagree here: one removes the line when
/// its quantity would reach zero, the other clamps at 1 and leaves removal
/// to an explicit remove action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartPolicy {
    /// Remove a line whose quantity would drop to zero.
    pub remove_on_zero: bool,
}

impl Default for CartPolicy {
    fn default() -> Self {
        Self {
            remove_on_zero: true,
        }
    }
}

/// Insertion-ordered, deduplicated collection of [`CartLine`]s.
///
/// Created empty at session start, mutated only through the operation API,
/// cleared wholesale on successful checkout, discarded with the session.
/// Every operation is total: it either fully applies or is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
    policy: CartPolicy,
}

impl Cart {
    /// Create an empty cart with the default policy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty cart with an explicit policy.
    #[must_use]
    pub const fn with_policy(policy: CartPolicy) -> Self {
        Self {
            lines: Vec::new(),
            policy,
        }
    }

    /// The policy this cart was created with.
    #[must_use]
    pub const fn policy(&self) -> CartPolicy {
        self.policy
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Add `quantity` units of a product.
    ///
    /// If a line with the same id already exists its quantity grows by
    /// `quantity`; title and unit price keep their first-add values.
    /// Otherwise a new line is appended at the end. A zero quantity is
    /// ignored so the quantity invariant cannot be violated from outside.
    pub fn add_item(&mut self, product: ProductRef, quantity: u32) {
        if quantity == 0 {
            return;
        }
        trace!(id = %product.id, quantity, "add item");
        if let Some(line) = self.line_mut(&product.id) {
            line.quantity = line.quantity.saturating_add(quantity);
        } else {
            self.lines.push(CartLine {
                id: product.id,
                title: product.title,
                unit_price: product.price,
                quantity,
            });
        }
    }

    /// Remove the line with the given id. No-op if absent.
    pub fn remove_item(&mut self, id: &ProductId) {
        trace!(%id, "remove item");
        self.lines.retain(|line| &line.id != id);
    }

    /// Increase the quantity of an existing line by one. No-op if absent.
    pub fn increment_quantity(&mut self, id: &ProductId) {
        if let Some(line) = self.line_mut(id) {
            line.quantity = line.quantity.saturating_add(1);
        }
    }

    /// Decrease the quantity of an existing line by one. No-op if absent.
    ///
    /// At quantity 1 the line is removed when the policy says
    /// `remove_on_zero`, otherwise the quantity stays clamped at 1.
    pub fn decrement_quantity(&mut self, id: &ProductId) {
        let Some(pos) = self.lines.iter().position(|line| &line.id == id) else {
            return;
        };
        let Some(line) = self.lines.get_mut(pos) else {
            return;
        };
        if line.quantity > 1 {
            line.quantity -= 1;
        } else if self.policy.remove_on_zero {
            self.lines.remove(pos);
        }
    }

    /// Set the quantity of an existing line directly (no summing).
    ///
    /// A target of zero behaves as [`Cart::remove_item`]. No-op if absent.
    pub fn set_quantity(&mut self, id: &ProductId, quantity: u32) {
        if quantity == 0 {
            self.remove_item(id);
        } else if let Some(line) = self.line_mut(id) {
            line.quantity = quantity;
        }
    }

    /// Empty the cart unconditionally. Used after successful checkout.
    pub fn clear(&mut self) {
        debug!(lines = self.lines.len(), "cart cleared");
        self.lines.clear();
    }

    // =========================================================================
    // Derived queries
    // =========================================================================

    /// Lines in first-add insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines (not total units).
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.lines.len()
    }

    /// Sum of quantities across all lines.
    #[must_use]
    pub fn total_item_count(&self) -> u64 {
        self.lines
            .iter()
            .map(|line| u64::from(line.quantity))
            .sum()
    }

    /// Sum of `unit_price * quantity` across all lines.
    ///
    /// A cart holds a single currency (the catalog serves one currency per
    /// storefront); the empty cart totals to zero in the default currency.
    #[must_use]
    pub fn total_price(&self) -> Money {
        let currency_code = self
            .lines
            .first()
            .map(|line| line.unit_price.currency_code)
            .unwrap_or_default();
        let amount: Decimal = self
            .lines
            .iter()
            .map(|line| line.unit_price.amount * Decimal::from(line.quantity))
            .sum();
        Money::new(amount, currency_code)
    }

    /// Whether a line with the given id is present.
    #[must_use]
    pub fn contains(&self, id: &ProductId) -> bool {
        self.lines.iter().any(|line| &line.id == id)
    }

    /// Quantity of the line with the given id, if present.
    #[must_use]
    pub fn quantity(&self, id: &ProductId) -> Option<u32> {
        self.lines
            .iter()
            .find(|line| &line.id == id)
            .map(|line| line.quantity)
    }

    fn line_mut(&mut self, id: &ProductId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| &line.id == id)
    }
}
