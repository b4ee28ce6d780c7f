//! Greenbasket Storefront - the in-process edge of the external collaborators.
//!
//! The cart aggregator in `greenbasket-cart` trusts its callers; this crate
//! is where that trust is earned. It owns the typed boundary to the remote
//! product catalog (loosely-typed wire records are decoded into strict
//! [`catalog::types::Product`] values, rejecting malformed shapes instead of
//! propagating them) and the checkout boundary that turns a cart into an
//! [`checkout::Order`] record for an external order store to persist.
//!
//! # Modules
//!
//! - [`catalog`] - REST client and schemas for the public product catalog
//! - [`checkout`] - Order record construction from a cart
//! - [`config`] - Environment-driven configuration

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod checkout;
pub mod config;

pub use catalog::types::{Product, Rating};
pub use catalog::{CatalogClient, CatalogError};
pub use checkout::{CheckoutError, Order, OrderLine, draft_order};
pub use config::{CatalogConfig, ConfigError};
