//! Interactive text menu over the inventory domain.
//!
//! The menu parses user input, calls the `Warehouse`, and prints what comes
//! back. It holds no business rules of its own.

pub mod config;
pub mod menu;
pub mod render;

pub use config::CliConfig;
pub use menu::Session;
