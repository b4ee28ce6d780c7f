//! Live smoke tests against the public catalog API.
//!
//! These hit the real network and are ignored by default; run with
//! `cargo test -p greenbasket-integration-tests -- --ignored`.
//! `CATALOG_BASE_URL` can point them at a different deployment.

#![allow(clippy::unwrap_used)]

use greenbasket_integration_tests::init_tracing;
use greenbasket_storefront::{CatalogClient, CatalogConfig};

#[tokio::test]
#[ignore = "requires network access to the public catalog"]
async fn live_catalog_serves_products() {
    init_tracing();
    let config = CatalogConfig::from_env().unwrap();
    let client = CatalogClient::new(&config).unwrap();

    let products = client.products().await.unwrap();
    assert!(!products.is_empty());
    for product in &products {
        assert!(!product.title.is_empty());
        assert!(!product.price.amount.is_sign_negative());
    }
}

#[tokio::test]
#[ignore = "requires network access to the public catalog"]
async fn live_catalog_categories_filter_products() {
    init_tracing();
    let config = CatalogConfig::from_env().unwrap();
    let client = CatalogClient::new(&config).unwrap();

    let categories = client.categories().await.unwrap();
    assert!(!categories.is_empty());

    let first = categories.first().unwrap();
    let filtered = client.products_in_category(first).await.unwrap();
    assert!(filtered.iter().all(|p| &p.category == first));
}
