//! Inventory events and the transaction notifications built from them.

pub mod event;
pub mod transaction;

pub use event::Event;
pub use transaction::{Transaction, TransactionKind};
