//! Integration tests for Greenbasket.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p greenbasket-integration-tests
//!
//! # Include the live catalog tests (network access required)
//! cargo test -p greenbasket-integration-tests -- --ignored
//! ```
//!
//! # Test Categories
//!
//! - `cart_checkout_flow` - Full session flow across cart and checkout
//! - `catalog_live` - Live catalog API smoke tests (ignored by default)

#![cfg_attr(not(test), forbid(unsafe_code))]

/// Install a test subscriber so `RUST_LOG` controls tracing output from
/// the crates under test. Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
