//! Atelier
//!
//! Atelier is the cart engine of an artwork marketplace: line items keyed by
//! artwork, a running total kept in step with every command, and the
//! hand-off of a finished cart to an order service.

pub mod artworks;
pub mod cart;
pub mod checkout;
pub mod fixtures;
pub mod prelude;
pub mod pricing;
pub mod store;
pub mod summary;
pub mod utils;
