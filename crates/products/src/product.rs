use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, Entity, ProductId, SupplierId};

pub fn validate_name(name: &str) -> DomainResult<()> {
    if name.trim().is_empty() {
        return Err(DomainError::validation("product name cannot be empty"));
    }
    Ok(())
}

pub fn validate_quantity(quantity: i64) -> DomainResult<()> {
    if quantity < 0 {
        return Err(DomainError::validation(format!(
            "quantity cannot be negative (got {quantity})"
        )));
    }
    Ok(())
}

/// Price must be a finite, strictly positive number.
pub fn validate_price(price: f64) -> DomainResult<()> {
    if !price.is_finite() || price <= 0.0 {
        return Err(DomainError::validation(format!(
            "price must be a positive number (got {price})"
        )));
    }
    Ok(())
}

/// The closed set of fields that may change after admission.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductUpdate {
    Quantity(i64),
    Price(f64),
    ArrivalDate(NaiveDate),
}

impl ProductUpdate {
    pub fn validate(&self) -> DomainResult<()> {
        match *self {
            ProductUpdate::Quantity(q) => validate_quantity(q),
            ProductUpdate::Price(p) => validate_price(p),
            ProductUpdate::ArrivalDate(_) => Ok(()),
        }
    }
}

/// A stock-keeping record.
///
/// `Product::new` does not validate; the warehouse binds the supplier and runs
/// [`Product::validate`] on admission. After that every mutation goes through a
/// validating setter, so a stored product never holds an invalid field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    quantity: i64,
    price: f64,
    arrival_date: NaiveDate,
    supplier: SupplierId,
}

impl Product {
    /// Create a product record with a fresh identifier.
    pub fn new(
        name: impl Into<String>,
        quantity: i64,
        price: f64,
        arrival_date: NaiveDate,
        supplier: SupplierId,
    ) -> Self {
        Self::with_id(ProductId::new(), name, quantity, price, arrival_date, supplier)
    }

    pub fn with_id(
        id: ProductId,
        name: impl Into<String>,
        quantity: i64,
        price: f64,
        arrival_date: NaiveDate,
        supplier: SupplierId,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            price,
            arrival_date,
            supplier,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn arrival_date(&self) -> NaiveDate {
        self.arrival_date
    }

    pub fn supplier(&self) -> SupplierId {
        self.supplier
    }

    /// Re-point the product at another supplier.
    pub fn set_supplier(&mut self, supplier: SupplierId) {
        self.supplier = supplier;
    }

    /// Checks name, quantity and price in that order; the first failure wins.
    pub fn validate(&self) -> DomainResult<()> {
        validate_name(&self.name)?;
        validate_quantity(self.quantity)?;
        validate_price(self.price)?;
        Ok(())
    }

    pub fn set_quantity(&mut self, quantity: i64) -> DomainResult<()> {
        validate_quantity(quantity)?;
        self.quantity = quantity;
        Ok(())
    }

    pub fn set_price(&mut self, price: f64) -> DomainResult<()> {
        validate_price(price)?;
        self.price = price;
        Ok(())
    }

    pub fn set_arrival_date(&mut self, arrival_date: NaiveDate) {
        self.arrival_date = arrival_date;
    }

    /// Apply a batch of updates all-or-nothing.
    pub fn apply_updates(&mut self, updates: &[ProductUpdate]) -> DomainResult<()> {
        for update in updates {
            update.validate()?;
        }
        for update in updates {
            match *update {
                ProductUpdate::Quantity(q) => self.set_quantity(q)?,
                ProductUpdate::Price(p) => self.set_price(p)?,
                ProductUpdate::ArrivalDate(d) => self.set_arrival_date(d),
            }
        }
        Ok(())
    }

    pub fn has_stock(&self, amount: u32) -> bool {
        self.quantity >= i64::from(amount)
    }

    /// Remove `amount` units; returns the remaining quantity.
    pub fn decrease_stock(&mut self, amount: u32) -> DomainResult<i64> {
        let remaining = self
            .quantity
            .checked_sub(i64::from(amount))
            .filter(|r| *r >= 0)
            .ok_or_else(|| DomainError::invariant("stock cannot go negative"))?;
        self.quantity = remaining;
        Ok(remaining)
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> ProductId {
        self.id
    }
}
