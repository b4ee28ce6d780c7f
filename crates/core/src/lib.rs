//! Greenbasket Core - Shared types library.
//!
//! This crate provides common types used across all Greenbasket components:
//! - `cart` - In-memory cart aggregator
//! - `storefront` - Catalog and checkout boundaries
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and money

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
