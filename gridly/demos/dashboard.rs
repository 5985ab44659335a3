//! Sortable Table Demo
//!
//! Builds a bestsellers-style grid, renders it, simulates header clicks,
//! and exercises the remote seam with an in-memory row source.

use std::sync::Arc;

use futures::FutureExt;
use gridly::{
    sort_rows, Column, RemoteSort, Row, SortOrder, SortType, SortableTable, TableConfig,
};
use markdom::{find_element, render_to_string, Element, Event};
use serde_json::{json, Value};
use simplelog::{Config, LevelFilter, SimpleLogger};

/// Create column definitions.
fn create_columns() -> Vec<Column> {
    vec![
        Column::new("id", "ID"),
        Column::new("images", "Image").template(|value| {
            let src = value
                .get(0)
                .and_then(|v| v.get("url"))
                .and_then(Value::as_str)
                .unwrap_or("#");
            Element::div()
                .class("sortable-table__cell")
                .child(Element::span().class("sortable-table__cell-img").attr("title", src))
        }),
        Column::new("title", "Name").sortable(),
        Column::new("quantity", "Quantity").sortable().sort_type(SortType::Number),
        Column::new("price", "Price").sortable().sort_type(SortType::Number),
        Column::new("sales", "Sales").sortable().sort_type(SortType::Number),
    ]
}

/// Create sample bestsellers.
fn create_sample_rows() -> Vec<Row> {
    let titles = [
        ("laptop-pro", "Laptop Pro", 42, 1299, 310),
        ("tv-ultra", "TV Ultra", 17, 899, 120),
        ("phone-mini", "phone mini", 93, 499, 780),
        ("Camera-x", "Camera X", 8, 1599, 45),
        ("headset-air", "headset air", 64, 199, 540),
    ];

    titles
        .iter()
        .map(|(id, title, quantity, price, sales)| {
            match json!({
                "id": id,
                "images": [{ "url": format!("/img/{id}.png") }],
                "title": title,
                "quantity": quantity,
                "price": price,
                "sales": sales,
            }) {
                Value::Object(map) => map,
                _ => unreachable!(),
            }
        })
        .collect()
}

fn press_header(table: &SortableTable, column: &str) -> Event {
    let header_id = table.sub_elements().get("header").expect("header handle");
    let header = find_element(table.element().expect("rendered"), header_id).expect("header node");
    let cell = header
        .child_slice()
        .iter()
        .find(|cell| cell.get_data("id").is_some_and(|v| v == column))
        .expect("header cell");
    Event::press(cell.id.clone())
}

#[tokio::main]
async fn main() {
    let _ = SimpleLogger::init(LevelFilter::Debug, Config::default());

    // Local sorting over in-memory rows.
    let mut table = SortableTable::new(
        TableConfig::new(create_columns()).data(create_sample_rows()),
    )
    .expect("valid config");
    table.render().await.expect("render");

    println!("== initial (title asc) ==");
    println!("{}", render_to_string(table.element().expect("rendered")));

    // A click on the price header sorts descending (inverse of asc).
    let press = press_header(&table, "price");
    table.handle_event(&press).await.expect("sort by price");
    println!("\n== after price click ({}) ==", table.sorted().order);
    println!("{}", render_to_string(table.element().expect("rendered")));

    // Remote seam: an injected strategy serving pages from memory.
    let all_rows = create_sample_rows();
    let remote: Arc<dyn RemoteSort> = Arc::new(
        move |column: &str, order: SortOrder, start: usize, count: usize| {
            let page: Vec<Row> = sort_rows(
                &all_rows,
                column,
                if column == "title" { SortType::String } else { SortType::Number },
                order,
            )
            .into_iter()
            .skip(start)
            .take(count)
            .collect();
            async move { Ok::<_, gridly::RemoteError>(page) }.boxed()
        },
    );

    let mut remote_table = SortableTable::new(
        TableConfig::new(create_columns())
            .locally_sorted(false)
            .remote(remote)
            .page(0, 3),
    )
    .expect("valid config");
    remote_table.render().await.expect("remote render");

    println!("\n== remote page (top 3 by title) ==");
    println!("{}", render_to_string(remote_table.element().expect("rendered")));

    table.destroy();
    remote_table.destroy();
}
