use core::cmp::Ordering;
use core::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, Entity, ProductId, SupplierId};
use stockroom_parties::Supplier;
use stockroom_products::Product;

/// Key for sorting the product collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductSortKey {
    Name,
    Quantity,
    Price,
}

impl ProductSortKey {
    /// Ascending comparison of two products by this key.
    pub fn compare(self, a: &Product, b: &Product) -> Ordering {
        match self {
            ProductSortKey::Name => a.name().cmp(b.name()),
            ProductSortKey::Quantity => a.quantity().cmp(&b.quantity()),
            ProductSortKey::Price => a.price().total_cmp(&b.price()),
        }
    }
}

impl FromStr for ProductSortKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(ProductSortKey::Name),
            "quantity" => Ok(ProductSortKey::Quantity),
            "price" => Ok(ProductSortKey::Price),
            other => Err(DomainError::validation(format!("unknown sort key: {other}"))),
        }
    }
}

/// One row of a product listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSummary {
    pub id: ProductId,
    pub name: String,
    pub quantity: i64,
    pub price: f64,
    pub arrival_date: NaiveDate,
    pub supplier_id: SupplierId,
    pub supplier_name: String,
}

impl ProductSummary {
    pub fn new(product: &Product, supplier_name: impl Into<String>) -> Self {
        Self {
            id: product.id(),
            name: product.name().to_string(),
            quantity: product.quantity(),
            price: product.price(),
            arrival_date: product.arrival_date(),
            supplier_id: product.supplier(),
            supplier_name: supplier_name.into(),
        }
    }
}

/// A supplier with the products it supplies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplierSummary {
    pub id: SupplierId,
    pub company_name: String,
    pub email: String,
    pub phone: String,
    /// Empty when the supplier has no stored products.
    pub products: Vec<ProductSummary>,
}

impl SupplierSummary {
    pub fn new(supplier: &Supplier, products: Vec<ProductSummary>) -> Self {
        Self {
            id: supplier.id(),
            company_name: supplier.company_name().to_string(),
            email: supplier.email().to_string(),
            phone: supplier.phone().to_string(),
            products,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_sort_keys() {
        assert_eq!("name".parse::<ProductSortKey>(), Ok(ProductSortKey::Name));
        assert_eq!(" Quantity ".parse::<ProductSortKey>(), Ok(ProductSortKey::Quantity));
        assert_eq!("PRICE".parse::<ProductSortKey>(), Ok(ProductSortKey::Price));
        assert!("arrival_date".parse::<ProductSortKey>().is_err());
    }

    #[test]
    fn price_comparison_is_total() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let supplier = SupplierId::new();
        let cheap = Product::new("a", 1, 1.5, date, supplier);
        let dear = Product::new("b", 1, 9.0, date, supplier);
        assert_eq!(ProductSortKey::Price.compare(&cheap, &dear), Ordering::Less);
        assert_eq!(ProductSortKey::Price.compare(&dear, &dear), Ordering::Equal);
    }
}
