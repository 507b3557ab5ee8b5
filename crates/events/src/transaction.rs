//! Transaction notifications.
//!
//! A `Transaction` describes one inventory event so it can be announced to the
//! user. It is formatted once and dropped; nothing keeps a ledger of them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::event::Event;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Receive,
    Update,
    Sell,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub occurred_at: DateTime<Utc>,
    pub kind: TransactionKind,
    pub quantity: i64,
    pub product_name: String,
    pub supplier_name: String,
}

impl Transaction {
    pub fn received(
        product_name: impl Into<String>,
        supplier_name: impl Into<String>,
        quantity: i64,
        occurred_at: DateTime<Utc>,
    ) -> Self {
        Self {
            occurred_at,
            kind: TransactionKind::Receive,
            quantity,
            product_name: product_name.into(),
            supplier_name: supplier_name.into(),
        }
    }

    pub fn updated(product_name: impl Into<String>, occurred_at: DateTime<Utc>) -> Self {
        Self {
            occurred_at,
            kind: TransactionKind::Update,
            quantity: 0,
            product_name: product_name.into(),
            supplier_name: String::new(),
        }
    }

    pub fn sold(
        product_name: impl Into<String>,
        supplier_name: impl Into<String>,
        quantity: i64,
        occurred_at: DateTime<Utc>,
    ) -> Self {
        Self {
            occurred_at,
            kind: TransactionKind::Sell,
            quantity,
            product_name: product_name.into(),
            supplier_name: supplier_name.into(),
        }
    }

    pub fn new_product_message(&self) -> String {
        format!(
            "Received new product: {} from supplier {}.\nQuantity: {}\nDate of arrival: {}",
            self.product_name,
            self.supplier_name,
            self.quantity,
            self.occurred_at.format("%Y-%m-%d"),
        )
    }

    pub fn update_message(&self) -> String {
        format!("Product: {} was updated.", self.product_name)
    }

    pub fn sale_message(&self) -> String {
        format!("Product: {}, was sold.\nQuantity: {}", self.product_name, self.quantity)
    }

    /// The notification text for this transaction's kind.
    pub fn message(&self) -> String {
        match self.kind {
            TransactionKind::Receive => self.new_product_message(),
            TransactionKind::Update => self.update_message(),
            TransactionKind::Sell => self.sale_message(),
        }
    }
}

impl Event for Transaction {
    fn event_type(&self) -> &'static str {
        match self.kind {
            TransactionKind::Receive => "inventory.transaction.receive",
            TransactionKind::Update => "inventory.transaction.update",
            TransactionKind::Sell => "inventory.transaction.sell",
        }
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn test_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 17, 14, 30, 0).unwrap()
    }

    #[test]
    fn receive_message_lists_quantity_and_date() {
        let tx = Transaction::received("Widget", "Acme Corp", 12, test_time());
        assert_eq!(
            tx.message(),
            "Received new product: Widget from supplier Acme Corp.\nQuantity: 12\nDate of arrival: 2024-05-17"
        );
        assert_eq!(tx.event_type(), "inventory.transaction.receive");
    }

    #[test]
    fn update_message_names_product() {
        let tx = Transaction::updated("Widget", test_time());
        assert_eq!(tx.kind, TransactionKind::Update);
        assert_eq!(tx.quantity, 0);
        assert_eq!(tx.message(), "Product: Widget was updated.");
    }

    #[test]
    fn sale_message_includes_quantity() {
        let tx = Transaction::sold("Widget", "Acme Corp", 3, test_time());
        assert_eq!(tx.message(), "Product: Widget, was sold.\nQuantity: 3");
        assert_eq!(tx.event_type(), "inventory.transaction.sell");
        assert_eq!(tx.occurred_at(), test_time());
    }

    #[test]
    fn kind_serializes_lowercase() {
        let json = serde_json::to_string(&TransactionKind::Receive).unwrap();
        assert_eq!(json, "\"receive\"");
    }
}
