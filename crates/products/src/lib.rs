//! Products domain module.
//!
//! This crate contains the stock-keeping record and its field rules,
//! implemented purely as deterministic domain logic (no IO, no storage).

pub mod product;

pub use product::{Product, ProductUpdate, validate_name, validate_price, validate_quantity};
