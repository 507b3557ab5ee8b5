use serde::{Deserialize, Serialize};
use tracing::debug;

use stockroom_core::{DomainError, DomainResult, Entity, ProductId, SupplierId, position_of};
use stockroom_parties::Supplier;
use stockroom_products::{Product, ProductUpdate};

use crate::listing::{ProductSortKey, ProductSummary, SupplierSummary};

/// Result of a sale attempt that passed input validation.
///
/// `InsufficientStock` and `NotFound` are business outcomes, not errors:
/// nothing was mutated and the caller decides how to report them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SaleOutcome {
    Sold {
        product_id: ProductId,
        sold: u32,
        remaining: i64,
    },
    InsufficientStock {
        product_id: ProductId,
        available: i64,
        requested: u32,
    },
    NotFound,
}

impl SaleOutcome {
    pub fn is_sold(&self) -> bool {
        matches!(self, SaleOutcome::Sold { .. })
    }
}

/// Aggregate owning the product and supplier collections.
///
/// Invariants:
/// - every stored product and supplier passed validation on admission and
///   stays valid (updates go through validating setters);
/// - every product's supplier id refers to a stored supplier;
/// - ids are unique within each collection (names are not).
#[derive(Debug, Clone, Default)]
pub struct Warehouse {
    products: Vec<Product>,
    suppliers: Vec<Supplier>,
}

impl Warehouse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Products in their current order (insertion order until sorted).
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn suppliers(&self) -> &[Supplier] {
        &self.suppliers
    }

    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == id)
    }

    pub fn supplier(&self, id: SupplierId) -> Option<&Supplier> {
        self.suppliers.iter().find(|s| s.id() == id)
    }

    /// First product (in collection order) with exactly this name.
    pub fn find_product_by_name(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.name() == name)
    }

    /// First supplier (in insertion order) with exactly this company name.
    pub fn find_supplier_by_name(&self, company_name: &str) -> Option<&Supplier> {
        self.suppliers.iter().find(|s| s.company_name() == company_name)
    }

    pub fn add_supplier(&mut self, supplier: Supplier) -> DomainResult<SupplierId> {
        supplier.validate()?;

        let id = supplier.id();
        if self.supplier(id).is_some() {
            return Err(DomainError::conflict(format!("supplier {id} already exists")));
        }

        debug!(supplier_id = %id, company = supplier.company_name(), "supplier admitted");
        self.suppliers.push(supplier);
        Ok(id)
    }

    /// Admit `product` as supplied by `supplier`.
    ///
    /// The supplier id given here replaces whatever the product was built with.
    pub fn add_product(&mut self, mut product: Product, supplier: SupplierId) -> DomainResult<ProductId> {
        product.set_supplier(supplier);
        product.validate()?;

        if self.supplier(supplier).is_none() {
            return Err(DomainError::invariant(format!(
                "supplier {supplier} is not registered"
            )));
        }

        let id = product.id();
        if self.product(id).is_some() {
            return Err(DomainError::conflict(format!("product {id} already exists")));
        }

        debug!(product_id = %id, name = product.name(), quantity = product.quantity(), "product admitted");
        self.products.push(product);
        Ok(id)
    }

    /// Remove and return the product with `id`; absent ids are a no-op.
    pub fn remove_product(&mut self, id: ProductId) -> Option<Product> {
        let index = position_of(&self.products, id)?;
        let removed = self.products.remove(index);
        debug!(product_id = %id, name = removed.name(), "product removed");
        Some(removed)
    }

    /// Apply `updates` to the product with `id`.
    ///
    /// Returns `Ok(false)` when no such product is stored. Updates are
    /// all-or-nothing: if any is invalid the product is left untouched.
    pub fn update_product_info(
        &mut self,
        id: ProductId,
        updates: impl IntoIterator<Item = ProductUpdate>,
    ) -> DomainResult<bool> {
        let Some(product) = self.products.iter_mut().find(|p| p.id() == id) else {
            debug!(product_id = %id, "update skipped: product not stored");
            return Ok(false);
        };

        let updates: Vec<ProductUpdate> = updates.into_iter().collect();
        product.apply_updates(&updates)?;

        debug!(product_id = %id, changes = updates.len(), "product updated");
        Ok(true)
    }

    /// Sell from the first product named `product_name`.
    ///
    /// Later products with the same name are never reached; use
    /// [`Warehouse::sell_product_by_id`] to target one of them.
    pub fn sell_product(&mut self, product_name: &str, quantity: u32) -> DomainResult<SaleOutcome> {
        let index = self.products.iter().position(|p| p.name() == product_name);
        self.sell_at(index, quantity)
    }

    pub fn sell_product_by_id(&mut self, id: ProductId, quantity: u32) -> DomainResult<SaleOutcome> {
        let index = position_of(&self.products, id);
        self.sell_at(index, quantity)
    }

    fn sell_at(&mut self, index: Option<usize>, quantity: u32) -> DomainResult<SaleOutcome> {
        let Some(product) = index.and_then(|i| self.products.get_mut(i)) else {
            debug!(requested = quantity, "sale: product not found");
            return Ok(SaleOutcome::NotFound);
        };

        if !product.has_stock(quantity) {
            debug!(
                product_id = %product.id(),
                available = product.quantity(),
                requested = quantity,
                "sale: insufficient stock"
            );
            return Ok(SaleOutcome::InsufficientStock {
                product_id: product.id(),
                available: product.quantity(),
                requested: quantity,
            });
        }

        let remaining = product.decrease_stock(quantity)?;
        debug!(product_id = %product.id(), sold = quantity, remaining, "sale completed");
        Ok(SaleOutcome::Sold {
            product_id: product.id(),
            sold: quantity,
            remaining,
        })
    }

    /// List products, first sorting the stored collection by `sort_by` if given.
    ///
    /// The sort is stable and persists: later listings and name lookups see
    /// the new order.
    pub fn list_products(&mut self, sort_by: Option<ProductSortKey>) -> Vec<ProductSummary> {
        if let Some(key) = sort_by {
            self.products.sort_by(|a, b| key.compare(a, b));
        }

        self.products
            .iter()
            .map(|p| ProductSummary::new(p, self.supplier_name(p.supplier())))
            .collect()
    }

    /// Every supplier with the products that reference it.
    pub fn list_suppliers(&self) -> Vec<SupplierSummary> {
        self.suppliers
            .iter()
            .map(|supplier| {
                let products = self
                    .products
                    .iter()
                    .filter(|p| p.supplier() == supplier.id())
                    .map(|p| ProductSummary::new(p, supplier.company_name()))
                    .collect();
                SupplierSummary::new(supplier, products)
            })
            .collect()
    }

    fn supplier_name(&self, id: SupplierId) -> &str {
        self.supplier(id).map(|s| s.company_name()).unwrap_or_default()
    }
}
