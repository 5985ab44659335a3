//! Markup construction for the table subtree.
//!
//! Builds the full subtree (container, header, body) from column
//! configuration and row data. The body is built as an independent list of
//! row elements so it can be replaced in place without touching the header.

use markdom::Element;
use serde_json::Value;

use crate::column::{Column, Row, SortState};
use crate::compare::text_of;

/// Build the whole widget subtree, header marked with the given sort state.
pub(super) fn build_root(columns: &[Column], rows: &[Row], sorted: &SortState) -> Element {
    Element::div()
        .class("products-list__container")
        .data("element", "productsContainer")
        .child(
            Element::div()
                .class("sortable-table")
                .child(build_header(columns, sorted))
                .child(
                    Element::div()
                        .class("sortable-table__body")
                        .data("element", "body")
                        .children(build_rows(columns, rows)),
                ),
        )
}

/// One cell per column; the active cell carries the order and the arrow.
pub(super) fn build_header(columns: &[Column], sorted: &SortState) -> Element {
    let cells = columns.iter().map(|column| {
        let mut cell = Element::div()
            .class("sortable-table__cell")
            .data("id", column.id.clone())
            .data("sortable", column.sortable.to_string())
            .clickable(column.sortable)
            .child(Element::text(column.title.clone()));
        if column.id == sorted.column {
            cell = cell.data("order", sorted.order.as_str()).child(sort_arrow());
        }
        cell
    });

    Element::div()
        .class("sortable-table__header")
        .class("sortable-table__row")
        .data("element", "header")
        .children(cells)
}

/// The singleton sort indicator node.
pub(super) fn sort_arrow() -> Element {
    Element::span()
        .class("sortable-table__sort-arrow")
        .data("element", "arrow")
        .child(Element::span().class("sort-arrow"))
}

/// One anchor-wrapped row per record.
pub(super) fn build_rows(columns: &[Column], rows: &[Row]) -> Vec<Element> {
    rows.iter()
        .map(|row| {
            Element::anchor(row_link(row))
                .class("sortable-table__row")
                .children(columns.iter().filter_map(|column| build_cell(column, row)))
        })
        .collect()
}

fn row_link(row: &Row) -> String {
    let id = row
        .get("id")
        .map(text_of)
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| "#".to_string());
    format!("/products/{id}")
}

/// A cell for one column, `None` for the reserved `id` column.
fn build_cell(column: &Column, row: &Row) -> Option<Element> {
    if column.id == "id" {
        return None;
    }

    let value = row.get(&column.id).unwrap_or(&Value::Null);
    if let Some(template) = &column.template {
        return Some(template(value));
    }

    Some(
        Element::div()
            .class("sortable-table__cell")
            .with_text(text_of(value)),
    )
}
