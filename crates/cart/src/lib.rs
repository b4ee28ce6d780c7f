//! Greenbasket Cart - In-memory cart aggregator.
//!
//! The cart owns the authoritative list of items selected for purchase in
//! the current session and answers derived queries over it. Collaborators
//! (catalog, checkout, presentation) interact with it only through its
//! operation API; no direct field mutation is exposed, which is what keeps
//! the per-id uniqueness and quantity invariants intact.
//!
//! The cart is single-owner by design: it lives behind a `&mut` reference
//! held by the active session, so safe Rust already linearizes operations.
//! Callers embedding it in concurrent event dispatch wrap it in their own
//! mutex or single-writer queue.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;

pub use cart::{Cart, CartLine, CartPolicy, ProductRef};
