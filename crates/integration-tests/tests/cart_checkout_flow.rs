//! Full session flow: browse -> cart -> checkout draft -> clear.
//!
//! Exercises the cart aggregator through the same sequence of operations
//! the presentation and checkout collaborators issue, using products
//! decoded from catalog wire JSON rather than hand-built domain values.

#![allow(clippy::unwrap_used)]

use greenbasket_cart::{Cart, CartPolicy};
use greenbasket_core::{CurrencyCode, Money, ProductId, UserId};
use greenbasket_integration_tests::init_tracing;
use greenbasket_storefront::catalog::types::{Product, ProductRecord};
use greenbasket_storefront::{CheckoutError, draft_order};

const CATALOG_PAGE: &str = r#"[
    {
        "id": 1,
        "title": "Fjallraven Backpack",
        "price": 109.95,
        "description": "Fits 15 inch laptops",
        "category": "men's clothing",
        "image": "https://catalog.test/img/backpack.jpg",
        "rating": { "rate": 3.9, "count": 120 }
    },
    {
        "id": 2,
        "title": "Slim Fit T-Shirt",
        "price": 22.3,
        "description": "Lightweight casual fit",
        "category": "men's clothing",
        "image": "https://catalog.test/img/shirt.jpg",
        "rating": { "rate": 4.1, "count": 259 }
    }
]"#;

fn catalog_page() -> Vec<Product> {
    let records: Vec<ProductRecord> = serde_json::from_str(CATALOG_PAGE).unwrap();
    records
        .into_iter()
        .map(|r| Product::from_record(r, CurrencyCode::USD).unwrap())
        .collect()
}

#[test]
fn browse_add_checkout_clear() {
    init_tracing();
    let products = catalog_page();
    let mut cart = Cart::new();

    // The presentation collaborator adds from catalog pages.
    cart.add_item(products[0].cart_ref(), 1);
    cart.add_item(products[1].cart_ref(), 2);
    cart.add_item(products[0].cart_ref(), 1);

    assert_eq!(cart.item_count(), 2);
    assert_eq!(cart.total_item_count(), 4);
    // 109.95 * 2 + 22.30 * 2 = 264.50
    assert_eq!(
        cart.total_price(),
        Money::from_minor_units(26450, CurrencyCode::USD)
    );

    // Checkout drafts an order and, once persisted, clears the cart.
    let order = draft_order(UserId::new("user-7"), &cart).unwrap();
    assert_eq!(order.total, cart.total_price());
    assert_eq!(order.lines.len(), 2);
    cart.clear();

    assert!(cart.is_empty());
    assert_eq!(cart.total_item_count(), 0);
    assert_eq!(
        draft_order(UserId::new("user-7"), &cart),
        Err(CheckoutError::EmptyCart)
    );
}

#[test]
fn quantity_controls_match_presentation_behavior() {
    init_tracing();
    let products = catalog_page();
    let backpack = ProductId::new("1");

    // Default storefront: the minus control removes the last unit.
    let mut cart = Cart::new();
    cart.add_item(products[0].cart_ref(), 1);
    cart.increment_quantity(&backpack);
    cart.decrement_quantity(&backpack);
    cart.decrement_quantity(&backpack);
    assert!(!cart.contains(&backpack));

    // Clamping storefront: the minus control bottoms out at one unit.
    let mut cart = Cart::with_policy(CartPolicy {
        remove_on_zero: false,
    });
    cart.add_item(products[0].cart_ref(), 1);
    cart.decrement_quantity(&backpack);
    cart.decrement_quantity(&backpack);
    assert_eq!(cart.quantity(&backpack), Some(1));

    // Explicit removal works in either storefront.
    cart.remove_item(&backpack);
    assert!(cart.is_empty());
}

#[test]
fn order_snapshot_is_isolated_from_later_cart_edits() {
    init_tracing();
    let products = catalog_page();
    let mut cart = Cart::new();
    cart.add_item(products[0].cart_ref(), 1);

    let order = draft_order(UserId::new("user-7"), &cart).unwrap();
    cart.set_quantity(&ProductId::new("1"), 5);

    assert_eq!(order.lines[0].quantity, 1);
    assert_eq!(cart.quantity(&ProductId::new("1")), Some(5));
}
