//! The interactive menu loop.
//!
//! A `Session` reads one command at a time from any `BufRead` and writes to
//! any `Write`, so it runs the same against a terminal or an in-memory buffer.

use std::io::{self, BufRead, Write};

use chrono::{NaiveDate, Utc};
use thiserror::Error;
use tracing::{info, warn};

use stockroom_core::{DomainError, Entity};
use stockroom_events::{Event, Transaction};
use stockroom_inventory::{ProductSortKey, SaleOutcome, Warehouse};
use stockroom_parties::Supplier;
use stockroom_products::{Product, ProductUpdate};

use crate::render;

const MENU: &str = "\nChoose an option:\n\
1. Add a product\n\
2. Remove a product\n\
3. List products in the warehouse\n\
4. Add a supplier\n\
5. List suppliers\n\
6. Update product information\n\
7. Sell product\n\
8. Exit";

/// User input that could not be turned into a typed value.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("'{0}' is not a whole number")]
    Integer(String),
    #[error("'{0}' is not a number")]
    Number(String),
    #[error("'{0}' is not a date in YYYY-MM-DD format")]
    Date(String),
}

pub fn parse_quantity(raw: &str) -> Result<i64, InputError> {
    raw.trim().parse().map_err(|_| InputError::Integer(raw.trim().to_string()))
}

pub fn parse_sell_quantity(raw: &str) -> Result<u32, InputError> {
    raw.trim().parse().map_err(|_| InputError::Integer(raw.trim().to_string()))
}

pub fn parse_price(raw: &str) -> Result<f64, InputError> {
    raw.trim().parse().map_err(|_| InputError::Number(raw.trim().to_string()))
}

pub fn parse_date(raw: &str) -> Result<NaiveDate, InputError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| InputError::Date(raw.trim().to_string()))
}

/// Why a single menu command stopped early.
#[derive(Debug, Error)]
enum CommandError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("end of input")]
    EndOfInput,
    #[error("invalid input: {0}")]
    Input(#[from] InputError),
    #[error("{0}")]
    Domain(#[from] DomainError),
}

enum Flow {
    Continue,
    Exit,
}

pub struct Session<R, W> {
    input: R,
    output: W,
    warehouse: Warehouse,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self::with_warehouse(input, output, Warehouse::new())
    }

    pub fn with_warehouse(input: R, output: W, warehouse: Warehouse) -> Self {
        Self {
            input,
            output,
            warehouse,
        }
    }

    pub fn warehouse(&self) -> &Warehouse {
        &self.warehouse
    }

    pub fn into_parts(self) -> (Warehouse, W) {
        (self.warehouse, self.output)
    }

    /// Run commands until "Exit" is chosen or input ends.
    ///
    /// Bad input and rejected operations are reported to the user and the
    /// loop continues; only IO failures end it with an error.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.output, "{MENU}")?;
            let choice = match self.read_field("Enter your choice: ") {
                Ok(choice) => choice,
                Err(CommandError::Io(e)) => return Err(e),
                Err(_) => break,
            };

            let result = match choice.as_str() {
                "1" => self.add_product(),
                "2" => self.remove_product(),
                "3" => self.list_products(),
                "4" => self.add_supplier(),
                "5" => self.list_suppliers(),
                "6" => self.update_product(),
                "7" => self.sell_product(),
                "8" => {
                    writeln!(self.output, "Exiting the program.")?;
                    return Ok(());
                }
                _ => {
                    writeln!(self.output, "Invalid option. Please choose again.")?;
                    Ok(())
                }
            };

            match self.settle(result)? {
                Flow::Continue => {}
                Flow::Exit => break,
            }
        }
        Ok(())
    }

    fn settle(&mut self, result: Result<(), CommandError>) -> io::Result<Flow> {
        match result {
            Ok(()) => Ok(Flow::Continue),
            Err(CommandError::Io(e)) => Err(e),
            Err(CommandError::EndOfInput) => Ok(Flow::Exit),
            Err(CommandError::Input(e)) => {
                writeln!(self.output, "Invalid input: {e}")?;
                Ok(Flow::Continue)
            }
            Err(CommandError::Domain(e)) => {
                warn!(error = %e, "operation rejected");
                writeln!(self.output, "Error: {e}")?;
                Ok(Flow::Continue)
            }
        }
    }

    fn read_field(&mut self, label: &str) -> Result<String, CommandError> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(CommandError::EndOfInput);
        }
        Ok(line.trim().to_string())
    }

    fn notify(&mut self, transaction: &Transaction) -> Result<(), CommandError> {
        info!(
            event_type = transaction.event_type(),
            product = %transaction.product_name,
            quantity = transaction.quantity,
            "transaction"
        );
        writeln!(self.output, "{}", transaction.message())?;
        Ok(())
    }

    fn add_product(&mut self) -> Result<(), CommandError> {
        let name = self.read_field("Enter product name: ")?;
        let quantity = parse_quantity(&self.read_field("Enter product quantity: ")?)?;
        let price = parse_price(&self.read_field("Enter product price: ")?)?;
        let arrival_date = parse_date(&self.read_field("Enter arrival date (YYYY-MM-DD): ")?)?;
        let supplier_name = self.read_field("Enter product supplier: ")?;

        let Some(supplier_id) = self
            .warehouse
            .find_supplier_by_name(&supplier_name)
            .map(|s| s.id())
        else {
            writeln!(self.output, "Supplier '{supplier_name}' not found.")?;
            return Ok(());
        };

        let product = Product::new(name.clone(), quantity, price, arrival_date, supplier_id);
        self.warehouse.add_product(product, supplier_id)?;
        writeln!(self.output, "Product added successfully.")?;

        self.notify(&Transaction::received(name, supplier_name, quantity, Utc::now()))
    }

    fn remove_product(&mut self) -> Result<(), CommandError> {
        let name = self.read_field("Enter product name to remove: ")?;

        let removed = self
            .warehouse
            .find_product_by_name(&name)
            .map(|p| p.id())
            .and_then(|id| self.warehouse.remove_product(id));

        match removed {
            Some(_) => writeln!(self.output, "{name} removed successfully.")?,
            None => writeln!(self.output, "Product with name {name} not found.")?,
        }
        Ok(())
    }

    fn list_products(&mut self) -> Result<(), CommandError> {
        writeln!(self.output, "\nList of products in the warehouse:")?;
        writeln!(self.output, "1. Sort by name\n2. Sort by quantity\n3. Sort by price")?;

        let key = match self.read_field("Choose sorting option: ")?.as_str() {
            "1" => ProductSortKey::Name,
            "2" => ProductSortKey::Quantity,
            "3" => ProductSortKey::Price,
            _ => {
                writeln!(self.output, "Invalid sorting option.")?;
                return Ok(());
            }
        };

        let listing = self.warehouse.list_products(Some(key));
        if listing.is_empty() {
            writeln!(self.output, "The warehouse is empty.")?;
        }
        for product in &listing {
            writeln!(self.output, "{}", render::product_line(product))?;
        }
        Ok(())
    }

    fn add_supplier(&mut self) -> Result<(), CommandError> {
        let company_name = self.read_field("Enter supplier's company name: ")?;
        let email = self.read_field("Enter supplier's email(example@gmail.com): ")?;
        let phone = self.read_field("Enter supplier's phone(xxx-xxx-xxxx): ")?;

        self.warehouse
            .add_supplier(Supplier::new(company_name, email, phone))?;
        writeln!(self.output, "Supplier added successfully.")?;
        Ok(())
    }

    fn list_suppliers(&mut self) -> Result<(), CommandError> {
        writeln!(self.output, "\nList of suppliers:")?;

        let listing = self.warehouse.list_suppliers();
        if listing.is_empty() {
            writeln!(self.output, "No suppliers registered.")?;
        }
        for supplier in &listing {
            writeln!(self.output, "{}", render::supplier_block(supplier))?;
        }
        Ok(())
    }

    fn update_product(&mut self) -> Result<(), CommandError> {
        let name = self.read_field("Enter product name to update: ")?;
        let Some(id) = self.warehouse.find_product_by_name(&name).map(|p| p.id()) else {
            writeln!(self.output, "Product with name {name} not found.")?;
            return Ok(());
        };

        writeln!(
            self.output,
            "Select what you want to update:\n1. Quantity\n2. Price\n3. Arrival Date"
        )?;
        let update = match self.read_field("Enter your choice: ")?.as_str() {
            "1" => ProductUpdate::Quantity(parse_quantity(&self.read_field("Enter new quantity: ")?)?),
            "2" => ProductUpdate::Price(parse_price(&self.read_field("Enter new price: ")?)?),
            "3" => ProductUpdate::ArrivalDate(parse_date(
                &self.read_field("Enter new arrival date (YYYY-MM-DD): ")?,
            )?),
            _ => {
                writeln!(self.output, "Invalid option.")?;
                return Ok(());
            }
        };

        if self.warehouse.update_product_info(id, [update])? {
            self.notify(&Transaction::updated(name, Utc::now()))?;
        }
        Ok(())
    }

    fn sell_product(&mut self) -> Result<(), CommandError> {
        let name = self.read_field("Enter product name to sell: ")?;
        let quantity = parse_sell_quantity(&self.read_field("Enter quantity to sell: ")?)?;

        let outcome = self.warehouse.sell_product(&name, quantity)?;
        writeln!(self.output, "{}", render::sale_message(&name, &outcome))?;

        if let SaleOutcome::Sold { product_id, sold, .. } = outcome {
            let supplier_name = self
                .warehouse
                .product(product_id)
                .and_then(|p| self.warehouse.supplier(p.supplier()))
                .map(|s| s.company_name().to_string())
                .unwrap_or_default();
            self.notify(&Transaction::sold(name, supplier_name, i64::from(sold), Utc::now()))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numbers_and_dates() {
        assert_eq!(parse_quantity(" 12 "), Ok(12));
        assert_eq!(parse_quantity("-1"), Ok(-1));
        assert_eq!(parse_quantity("ten"), Err(InputError::Integer("ten".to_string())));

        assert_eq!(parse_sell_quantity("3"), Ok(3));
        assert!(parse_sell_quantity("-3").is_err());

        assert_eq!(parse_price("2.50"), Ok(2.5));
        assert_eq!(parse_price("abc"), Err(InputError::Number("abc".to_string())));

        assert_eq!(parse_date("2024-02-29"), Ok(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()));
        assert!(parse_date("2023-02-29").is_err());
        assert!(parse_date("15/03/2024").is_err());
    }

    #[test]
    fn end_of_input_ends_the_session() {
        let mut session = Session::new(&b""[..], Vec::new());
        session.run().unwrap();
        let (_, output) = session.into_parts();
        assert!(String::from_utf8(output).unwrap().contains("Choose an option:"));
    }
}
