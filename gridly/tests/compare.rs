use gridly::{sort_rows, Column, Row, SortOrder, SortType};
use serde_json::{json, Value};

fn row(name: &str, price: i64) -> Row {
    match json!({ "id": name.to_lowercase(), "name": name, "price": price }) {
        Value::Object(map) => map,
        _ => unreachable!(),
    }
}

fn names(rows: &[Row]) -> Vec<&str> {
    rows.iter()
        .map(|r| r.get("name").and_then(Value::as_str).unwrap())
        .collect()
}

// ============================================================================
// Permutation & non-mutation
// ============================================================================

#[test]
fn test_output_is_a_permutation_of_input() {
    let rows = vec![row("Banana", 30), row("apple", 10), row("Cherry", 20)];

    let sorted = sort_rows(&rows, "price", SortType::Number, SortOrder::Asc);

    assert_eq!(sorted.len(), rows.len());
    for original in &rows {
        assert!(sorted.contains(original));
    }
}

#[test]
fn test_input_rows_are_not_mutated() {
    let rows = vec![row("Banana", 30), row("apple", 10)];
    let snapshot = rows.clone();

    let _ = sort_rows(&rows, "name", SortType::String, SortOrder::Desc);

    assert_eq!(rows, snapshot);
}

// ============================================================================
// Direction
// ============================================================================

#[test]
fn test_direction_symmetry() {
    let rows = vec![row("Banana", 30), row("apple", 10), row("Cherry", 20)];

    let asc = sort_rows(&rows, "price", SortType::Number, SortOrder::Asc);
    let mut desc = sort_rows(&rows, "price", SortType::Number, SortOrder::Desc);

    desc.reverse();
    assert_eq!(names(&asc), names(&desc));
}

// ============================================================================
// Scenario: name/price grid
// ============================================================================

#[test]
fn test_price_ascending() {
    let rows = vec![row("Banana", 30), row("apple", 10)];

    let sorted = sort_rows(&rows, "price", SortType::Number, SortOrder::Asc);

    assert_eq!(names(&sorted), vec!["apple", "Banana"]);
}

#[test]
fn test_name_ascending_is_input_order_independent() {
    let forward = vec![row("Banana", 30), row("apple", 10)];
    let backward = vec![row("apple", 10), row("Banana", 30)];

    let a = sort_rows(&forward, "name", SortType::String, SortOrder::Asc);
    let b = sort_rows(&backward, "name", SortType::String, SortOrder::Asc);

    assert_eq!(names(&a), vec!["apple", "Banana"]);
    assert_eq!(names(&a), names(&b));
}

#[test]
fn test_uppercase_sorts_first_on_initial_letter_tie() {
    let rows = vec![row("apple", 1), row("Apple", 2)];

    let sorted = sort_rows(&rows, "name", SortType::String, SortOrder::Asc);

    assert_eq!(names(&sorted), vec!["Apple", "apple"]);
}

// ============================================================================
// Numeric policy
// ============================================================================

#[test]
fn test_missing_numbers_sort_before_any_number() {
    let mut no_price = row("Mystery", 0);
    no_price.remove("price");
    let rows = vec![row("Banana", 30), no_price, row("apple", 10)];

    let sorted = sort_rows(&rows, "price", SortType::Number, SortOrder::Asc);

    assert_eq!(names(&sorted), vec!["Mystery", "apple", "Banana"]);
}

#[test]
fn test_missing_numbers_preserve_relative_order() {
    let mut first = row("First", 0);
    first.remove("price");
    let mut second = row("Second", 0);
    second.remove("price");
    let rows = vec![first, row("apple", 10), second];

    let sorted = sort_rows(&rows, "price", SortType::Number, SortOrder::Asc);

    assert_eq!(names(&sorted), vec!["First", "Second", "apple"]);
}

// ============================================================================
// Column defaults
// ============================================================================

#[test]
fn test_undeclared_sort_type_defaults_to_string() {
    let column = Column::new("name", "Name").sortable();

    assert_eq!(column.sort_type, SortType::String);
}
