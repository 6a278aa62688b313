use std::io::Cursor;

use stockroom_cli::{CliError, Config, Console, InputMode};
use stockroom_core::ProductId;
use stockroom_inventory::{IdPolicy, Inventory};
use stockroom_products::WarrantyPeriod;

const MENU_AND_PROMPT: &str = "Inventory Management System:\n\
1. Add Product\n\
2. Update Product\n\
3. View All Products\n\
4. Update Stock\n\
5. Exit\n\
Enter your choice: ";

struct Session {
    result: Result<(), CliError>,
    output: String,
    inventory: Inventory,
}

fn run_session(input: &str, config: Config) -> Session {
    let mut console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), &config);
    let result = console.run();
    let (inventory, output) = console.into_parts();
    Session {
        result,
        output: String::from_utf8(output).expect("console wrote utf-8"),
        inventory,
    }
}

fn script(lines: &[&str]) -> String {
    lines.iter().map(|l| format!("{l}\n")).collect()
}

const ADD_MILK: &[&str] = &["1", "1", "1", "Milk", "2.50", "10", "2025-01-01"];
const ADD_DRILL: &[&str] = &["1", "2", "2", "Cordless Drill", "89.99", "4", "24"];

#[test]
fn exit_immediately_prints_menu_once() {
    let s = run_session("5\n", Config::default());
    assert!(s.result.is_ok());
    assert_eq!(s.output, MENU_AND_PROMPT);
    assert!(s.inventory.is_empty());
}

#[test]
fn milk_scenario_end_to_end() {
    let mut lines = ADD_MILK.to_vec();
    lines.extend(["3", "4", "1", "-3", "3", "2", "2", "Cheese", "4.0", "1", "5"]);
    let s = run_session(&script(&lines), Config::default());

    assert!(s.result.is_ok());
    assert!(s.output.contains(
        "Product ID: 1, Name: Milk, Price: 2.5, Quantity in stock: 10, Expiry Date: 2025-01-01\n"
    ));
    assert!(s.output.contains(
        "Product ID: 1, Name: Milk, Price: 2.5, Quantity in stock: 7, Expiry Date: 2025-01-01\n"
    ));
    assert!(s.output.contains("Product with ID 2 not found.\n"));

    assert_eq!(s.inventory.len(), 1);
    let milk = s.inventory.find_by_id(ProductId::new(1)).unwrap();
    assert_eq!(milk.name(), "Milk");
    assert_eq!(milk.quantity_in_stock(), 7);
}

#[test]
fn add_flow_prompts_in_order() {
    let mut lines = ADD_MILK.to_vec();
    lines.push("5");
    let s = run_session(&script(&lines), Config::default());

    let expected = format!(
        "{MENU_AND_PROMPT}\
         Enter product type (1 for Perishable, 2 for Non-Perishable): \
         Enter product ID: \
         Enter product name: \
         Enter product price: \
         Enter product quantity in stock: \
         Enter expiry date (yyyy-mm-dd): \
         {MENU_AND_PROMPT}"
    );
    assert_eq!(s.output, expected);
}

#[test]
fn non_perishable_lists_warranty_in_months() {
    let mut lines = ADD_DRILL.to_vec();
    lines.extend(["3", "5"]);
    let s = run_session(&script(&lines), Config::default());

    assert!(s.result.is_ok());
    assert!(s.output.contains("Enter warranty period (in months): "));
    assert!(s.output.contains(
        "Product ID: 2, Name: Cordless Drill, Price: 89.99, Quantity in stock: 4, Warranty Period: 24 months\n"
    ));
}

#[test]
fn unknown_product_type_is_non_perishable() {
    let s = run_session(&script(&["1", "7", "3", "Cable", "5", "100", "0", "5"]), Config::default());
    assert!(s.result.is_ok());
    let cable = s.inventory.find_by_id(ProductId::new(3)).unwrap();
    assert_eq!(cable.kind().warranty(), Some(WarrantyPeriod::months(0)));
}

#[test]
fn update_keeps_id_and_variant_field() {
    let mut lines = ADD_DRILL.to_vec();
    lines.extend(["2", "2", "Hammer Drill", "120", "6", "5"]);
    let s = run_session(&script(&lines), Config::default());

    assert!(s.result.is_ok());
    let drill = s.inventory.find_by_id(ProductId::new(2)).unwrap();
    assert_eq!(drill.name(), "Hammer Drill");
    assert_eq!(drill.price(), 120.0);
    assert_eq!(drill.quantity_in_stock(), 6);
    assert_eq!(drill.kind().warranty(), Some(WarrantyPeriod::months(24)));
}

#[test]
fn stock_update_on_unknown_id_reports_and_continues() {
    let mut lines = ADD_MILK.to_vec();
    lines.extend(["4", "99", "5", "3", "5"]);
    let s = run_session(&script(&lines), Config::default());

    assert!(s.result.is_ok());
    assert!(s.output.contains("Product with ID 99 not found.\n"));
    assert_eq!(
        s.inventory.find_by_id(ProductId::new(1)).unwrap().quantity_in_stock(),
        10
    );
}

#[test]
fn invalid_menu_choice_returns_to_menu() {
    let s = run_session(&script(&["0", "6", "5"]), Config::default());
    assert!(s.result.is_ok());
    assert_eq!(s.output.matches("Invalid choice. Please try again.\n").count(), 2);
    assert_eq!(s.output.matches("Inventory Management System:").count(), 3);
}

#[test]
fn duplicate_ids_are_accepted_by_default() {
    let mut lines = ADD_MILK.to_vec();
    lines.extend(["1", "2", "1", "Bolt", "0.1", "500", "0", "4", "1", "5", "5"]);
    let s = run_session(&script(&lines), Config::default());

    assert!(s.result.is_ok());
    assert_eq!(s.inventory.len(), 2);
    let quantities: Vec<i64> = s.inventory.iter().map(|p| p.quantity_in_stock()).collect();
    assert_eq!(quantities, vec![15, 500]);
}

#[test]
fn duplicate_ids_are_refused_when_unique_ids_is_on() {
    let config = Config {
        id_policy: IdPolicy::RejectDuplicates,
        ..Config::default()
    };
    let mut lines = ADD_MILK.to_vec();
    lines.extend(["1", "2", "1", "Bolt", "0.1", "500", "0", "5"]);
    let s = run_session(&script(&lines), config);

    assert!(s.result.is_ok());
    assert!(s.output.contains("Product with ID 1 already exists.\n"));
    assert_eq!(s.inventory.len(), 1);
}

#[test]
fn malformed_number_aborts_session_by_default() {
    let s = run_session(&script(&["1", "1", "1", "Milk", "cheap", "10", "2025-01-01", "5"]), Config::default());

    match s.result {
        Err(CliError::Parse { field, input, .. }) => {
            assert_eq!(field, "price");
            assert_eq!(input, "cheap");
        }
        other => panic!("expected parse failure, got {other:?}"),
    }
    assert!(s.inventory.is_empty());
    assert!(s.output.ends_with("Enter product price: "));
}

#[test]
fn malformed_date_aborts_session_by_default() {
    let s = run_session(&script(&["1", "1", "1", "Milk", "2.5", "10", "01/01/2025", "5"]), Config::default());
    assert!(matches!(s.result, Err(CliError::Parse { field: "expiry date", .. })));
    assert!(s.inventory.is_empty());
}

#[test]
fn unpadded_or_signed_date_aborts_session_by_default() {
    for date in ["2025-1-1", "+2025-01-01"] {
        let s = run_session(&script(&["1", "1", "1", "Milk", "2.5", "10", date, "5"]), Config::default());
        match s.result {
            Err(CliError::Parse { field, input, .. }) => {
                assert_eq!(field, "expiry date");
                assert_eq!(input, date);
            }
            other => panic!("{date}: expected parse failure, got {other:?}"),
        }
        assert!(s.inventory.is_empty());
    }
}

#[test]
fn quantity_beyond_32_bits_aborts_session_by_default() {
    let s = run_session(&script(&["1", "2", "4", "Crate", "3", "3000000000", "12", "5"]), Config::default());
    assert!(matches!(s.result, Err(CliError::Parse { field: "quantity", .. })));
    assert!(s.inventory.is_empty());
}

#[test]
fn non_numeric_menu_choice_aborts_by_default() {
    let s = run_session("view\n5\n", Config::default());
    assert!(s.result.as_ref().is_err_and(CliError::is_parse));
}

#[test]
fn reprompt_mode_recovers_from_malformed_input() {
    let config = Config {
        input_mode: InputMode::Reprompt,
        ..Config::default()
    };
    let s = run_session(
        &script(&[
            "one", "1", "1", "1", "Milk", "cheap", "2.5", "10", "tomorrow", "2025-01-01", "5",
        ]),
        config,
    );

    assert!(s.result.is_ok());
    assert!(s.output.contains("Invalid choice: 'one'. Please try again.\n"));
    assert!(s.output.contains("Invalid price: 'cheap'. Please try again.\n"));
    assert!(s.output.contains("Invalid expiry date: 'tomorrow'. Please try again.\n"));
    assert_eq!(s.inventory.len(), 1);
    assert_eq!(
        s.inventory.list_all(),
        vec!["Product ID: 1, Name: Milk, Price: 2.5, Quantity in stock: 10, Expiry Date: 2025-01-01"]
    );
}

#[test]
fn input_ending_before_exit_is_an_error() {
    let s = run_session(&script(ADD_MILK), Config::default());
    assert!(matches!(s.result, Err(CliError::UnexpectedEof { field: "choice" })));
    assert_eq!(s.inventory.len(), 1);
}
