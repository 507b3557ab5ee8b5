//! Inventory domain module.
//!
//! The `Warehouse` owns the product and supplier collections and is the only
//! way to admit, change, sell or remove records. Listing and sale operations
//! return structured results; formatting is left to the caller.

pub mod listing;
pub mod warehouse;

pub use listing::{ProductSortKey, ProductSummary, SupplierSummary};
pub use warehouse::{SaleOutcome, Warehouse};
