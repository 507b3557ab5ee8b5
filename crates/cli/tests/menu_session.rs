use stockroom_cli::Session;
use stockroom_inventory::Warehouse;

/// Drive a session with one input line per entry and return the final state.
fn run_session(lines: &[&str]) -> (Warehouse, String) {
    let script = lines.iter().map(|l| format!("{l}\n")).collect::<String>();
    let mut session = Session::new(script.as_bytes(), Vec::new());
    session.run().expect("in-memory session should not fail");
    let (warehouse, output) = session.into_parts();
    (warehouse, String::from_utf8(output).expect("utf-8 output"))
}

const ADD_ACME: [&str; 4] = ["4", "Acme Corp", "orders@acme.com", "123-456-7890"];

fn add_product(name: &str, quantity: &str, price: &str) -> Vec<String> {
    ["1", name, quantity, price, "2024-03-15", "Acme Corp"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn script(parts: &[Vec<String>]) -> Vec<String> {
    parts.iter().flatten().cloned().collect()
}

fn acme() -> Vec<String> {
    ADD_ACME.iter().map(|s| s.to_string()).collect()
}

fn lines(owned: &[String]) -> Vec<&str> {
    owned.iter().map(String::as_str).collect()
}

#[test]
fn exit_option_stops_reading() {
    let (warehouse, output) = run_session(&["8", "4", "Never", "x@y.io", "123-456-7890"]);
    assert!(output.contains("Exiting the program."));
    assert!(warehouse.suppliers().is_empty());
}

#[test]
fn invalid_menu_choice_is_reported() {
    let (_, output) = run_session(&["9", "8"]);
    assert!(output.contains("Invalid option. Please choose again."));
}

#[test]
fn adds_supplier_and_product_with_receive_notification() {
    let owned = script(&[acme(), add_product("Widget", "10", "2.5"), vec!["8".into()]]);
    let (warehouse, output) = run_session(&lines(&owned));

    assert!(output.contains("Supplier added successfully."));
    assert!(output.contains("Product added successfully."));
    assert!(output.contains("Received new product: Widget from supplier Acme Corp.\nQuantity: 10"));
    assert_eq!(warehouse.products().len(), 1);
    assert_eq!(warehouse.products()[0].quantity(), 10);
}

#[test]
fn product_for_unknown_supplier_is_not_added() {
    let (warehouse, output) = run_session(&["1", "Widget", "1", "1.0", "2024-03-15", "Globex", "8"]);
    assert!(output.contains("Supplier 'Globex' not found."));
    assert!(warehouse.products().is_empty());
}

#[test]
fn validation_failures_are_reported_and_the_loop_continues() {
    let owned = script(&[
        acme(),
        add_product("Widget", "-1", "2.5"),
        vec!["4".into(), "Bad Co".into(), "bad-email".into(), "123-456-7890".into()],
        vec!["8".into()],
    ]);
    let (warehouse, output) = run_session(&lines(&owned));

    assert!(output.contains("Error: validation failed: quantity cannot be negative"));
    assert!(output.contains("Error: validation failed: contact info must be a valid email address and phone number"));
    assert!(output.contains("Exiting the program."));
    assert!(warehouse.products().is_empty());
    assert_eq!(warehouse.suppliers().len(), 1);
}

#[test]
fn unparsable_input_is_reported() {
    let owned = script(&[acme(), add_product("Widget", "lots", "2.5"), vec!["8".into()]]);
    let (warehouse, output) = run_session(&lines(&owned));
    assert!(output.contains("Invalid input: 'lots' is not a whole number"));
    assert!(warehouse.products().is_empty());
}

#[test]
fn sells_and_reports_shortfall() {
    let owned = script(&[
        acme(),
        add_product("Widget", "3", "2.5"),
        vec!["7".into(), "Widget".into(), "5".into()],
        vec!["7".into(), "Widget".into(), "3".into()],
        vec!["7".into(), "Gizmo".into(), "1".into()],
        vec!["8".into()],
    ]);
    let (warehouse, output) = run_session(&lines(&owned));

    assert!(output.contains("Not enough stock for Widget. Only 3 units available."));
    assert!(output.contains("Successfully sold 3 units of Widget."));
    assert!(output.contains("Product: Widget, was sold.\nQuantity: 3"));
    assert!(output.contains("Product Gizmo not found."));
    assert_eq!(warehouse.products()[0].quantity(), 0);
}

#[test]
fn updates_product_through_sub_menu() {
    let owned = script(&[
        acme(),
        add_product("Widget", "3", "2.5"),
        vec!["6".into(), "Widget".into(), "2".into(), "4.75".into()],
        vec!["6".into(), "Widget".into(), "1".into(), "-8".into()],
        vec!["6".into(), "Widget".into(), "9".into()],
        vec!["8".into()],
    ]);
    let (warehouse, output) = run_session(&lines(&owned));

    assert!(output.contains("Product: Widget was updated."));
    assert!(output.contains("Error: validation failed: quantity cannot be negative"));
    assert!(output.contains("Invalid option."));
    assert_eq!(warehouse.products()[0].price(), 4.75);
    assert_eq!(warehouse.products()[0].quantity(), 3);
    assert_eq!(output.matches("was updated.").count(), 1);
}

#[test]
fn lists_products_sorted_by_price() {
    let owned = script(&[
        acme(),
        add_product("Dear", "1", "9.0"),
        add_product("Cheap", "1", "1.0"),
        vec!["3".into(), "3".into()],
        vec!["8".into()],
    ]);
    let (_, output) = run_session(&lines(&owned));

    let cheap = output
        .find("Name: Cheap, Quantity: 1, Price: 1, Arrival Date: 2024-03-15, Supplier: Acme Corp")
        .expect("cheap listed");
    let dear = output.find("Name: Dear, Quantity: 1, Price: 9,").expect("dear listed");
    assert!(cheap < dear);
}

#[test]
fn selling_zero_units_is_not_an_error() {
    let owned = script(&[
        acme(),
        add_product("Widget", "3", "2.5"),
        vec!["7".into(), "Widget".into(), "0".into()],
        vec!["7".into(), "Gizmo".into(), "0".into()],
        vec!["8".into()],
    ]);
    let (warehouse, output) = run_session(&lines(&owned));

    assert!(output.contains("Successfully sold 0 units of Widget."));
    assert!(output.contains("Product Gizmo not found."));
    assert!(!output.contains("Error:"));
    assert_eq!(warehouse.products()[0].quantity(), 3);
}

#[test]
fn invalid_sort_option_and_empty_warehouse() {
    let (_, output) = run_session(&["3", "7", "3", "1", "8"]);
    assert!(output.contains("Invalid sorting option."));
    assert!(output.contains("The warehouse is empty."));
}

#[test]
fn lists_suppliers_with_their_products() {
    let owned = script(&[
        acme(),
        vec!["4".into(), "Globex".into(), "info@globex.com".into(), "555-010-0199".into()],
        add_product("Widget", "4", "2.5"),
        vec!["5".into()],
        vec!["8".into()],
    ]);
    let (_, output) = run_session(&lines(&owned));

    assert!(output.contains("Company Name: Acme Corp, Contact Info:\n  Email address: orders@acme.com"));
    assert_eq!(output.matches("    Name: Widget, Quantity: 4, Price: 2.5,").count(), 1);
    assert!(output.contains("Company Name: Globex, Contact Info:"));
    assert!(output.contains("No products supplied by this supplier."));
}

#[test]
fn removes_first_product_with_name() {
    let owned = script(&[
        acme(),
        add_product("Widget", "1", "2.5"),
        add_product("Widget", "2", "2.5"),
        vec!["2".into(), "Widget".into()],
        vec!["2".into(), "Gizmo".into()],
        vec!["8".into()],
    ]);
    let (warehouse, output) = run_session(&lines(&owned));

    assert!(output.contains("Widget removed successfully."));
    assert!(output.contains("Product with name Gizmo not found."));
    assert_eq!(warehouse.products().len(), 1);
    assert_eq!(warehouse.products()[0].quantity(), 2);
}

#[test]
fn end_of_input_mid_command_exits_cleanly() {
    let (warehouse, output) = run_session(&["4", "Acme Corp"]);
    assert!(!output.contains("Supplier added successfully."));
    assert!(warehouse.suppliers().is_empty());
}
