//! Text rendering of listings and sale outcomes.

use stockroom_inventory::{ProductSummary, SaleOutcome, SupplierSummary};

pub fn product_line(product: &ProductSummary) -> String {
    format!(
        "Name: {}, Quantity: {}, Price: {}, Arrival Date: {}, Supplier: {}",
        product.name, product.quantity, product.price, product.arrival_date, product.supplier_name
    )
}

pub fn supplier_block(supplier: &SupplierSummary) -> String {
    let mut lines = vec![
        format!("Company Name: {}, Contact Info:", supplier.company_name),
        format!("  Email address: {}", supplier.email),
        format!("  Phone number: {}", supplier.phone),
        "  Products supplied:".to_string(),
    ];

    if supplier.products.is_empty() {
        lines.push("    No products supplied by this supplier.".to_string());
    }
    for product in &supplier.products {
        lines.push(format!(
            "    Name: {}, Quantity: {}, Price: {}, Arrival Date: {}",
            product.name, product.quantity, product.price, product.arrival_date
        ));
    }

    lines.join("\n")
}

pub fn sale_message(product_name: &str, outcome: &SaleOutcome) -> String {
    match outcome {
        SaleOutcome::Sold { sold, .. } => {
            format!("Successfully sold {sold} units of {product_name}.")
        }
        SaleOutcome::InsufficientStock { available, .. } => format!(
            "Not enough stock for {product_name}. Only {available} units available."
        ),
        SaleOutcome::NotFound => format!("Product {product_name} not found."),
    }
}
