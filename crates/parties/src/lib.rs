//! Parties domain module (suppliers).
//!
//! This crate contains the supplier contact record and its validation rules,
//! implemented purely as deterministic domain logic (no IO, no storage).

pub mod supplier;

pub use supplier::{ContactInfo, Supplier, is_valid_email, is_valid_phone};
