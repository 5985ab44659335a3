//! Dashboard consumer.
//!
//! Composes the range picker, three column charts, and the sortable table,
//! and reacts to the range-selected signal by moving every collaborator's
//! date window and re-issuing a remote sort with the table's current sort
//! state. Routing and page chrome stay with the embedding host.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use log::info;
use markdom::Event;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use crate::column::{Column, SortState};
use crate::error::{RemoteError, TableError};
use crate::fetch::JsonSource;
use crate::table::{SortableTable, TableConfig};

/// An inclusive date window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

impl DateRange {
    pub fn new(from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        Self { from, to }
    }

    /// The trailing month ending now, the page's initial window.
    pub fn trailing_month() -> Self {
        let to = Utc::now();
        Self {
            from: to - Duration::days(30),
            to,
        }
    }
}

/// Errors raised by the dashboard page.
#[derive(Debug, Error)]
pub enum PageError {
    #[error("invalid backend url: {0}")]
    Url(#[from] url::ParseError),

    #[error("invalid date in range signal: {0}")]
    Range(#[from] chrono::ParseError),

    #[error(transparent)]
    Table(#[from] TableError),

    #[error("chart update failed: {0}")]
    Chart(#[source] RemoteError),
}

/// Date-range picker collaborator: a value holder emitting [`DateRange`].
#[derive(Debug, Clone, Copy)]
pub struct RangePicker {
    range: DateRange,
}

impl RangePicker {
    pub fn new(range: DateRange) -> Self {
        Self { range }
    }

    pub fn range(&self) -> DateRange {
        self.range
    }

    /// Record a selection and return it as the signal payload.
    pub fn select(&mut self, range: DateRange) -> DateRange {
        self.range = range;
        range
    }
}

/// Bar-chart collaborator: fetches a date -> value series for its window.
pub struct ColumnChart {
    label: String,
    url: Url,
    client: reqwest::Client,
    range: DateRange,
    values: Vec<f64>,
}

impl ColumnChart {
    pub fn new(label: impl Into<String>, url: Url, range: DateRange) -> Self {
        Self {
            label: label.into(),
            url,
            client: reqwest::Client::new(),
            range,
            values: Vec::new(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Refetch the series for a new window.
    pub async fn update(&mut self, range: DateRange) -> Result<(), RemoteError> {
        self.range = range;
        let mut url = self.url.clone();
        url.query_pairs_mut()
            .clear()
            .append_pair("from", &range.from.to_rfc3339())
            .append_pair("to", &range.to.to_rfc3339());

        let series: BTreeMap<String, f64> = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        self.values = series.into_values().collect();
        Ok(())
    }
}

/// The dashboard page: picker + charts + bestsellers table.
pub struct DashboardPage {
    range_picker: RangePicker,
    orders: ColumnChart,
    sales: ColumnChart,
    customers: ColumnChart,
    table: SortableTable,
    source: Arc<JsonSource>,
}

impl DashboardPage {
    /// Wire all collaborators against `backend`, with the table fetching
    /// its rows from `api/dashboard/bestsellers`.
    pub fn new(backend: &Url, columns: Vec<Column>, range: DateRange) -> Result<Self, PageError> {
        let mut bestsellers = backend.join("api/dashboard/bestsellers")?;
        bestsellers
            .query_pairs_mut()
            .append_pair("from", &range.from.to_rfc3339())
            .append_pair("to", &range.to.to_rfc3339());
        let source = Arc::new(JsonSource::new(bestsellers));
        let remote: Arc<dyn crate::remote::RemoteSort> = source.clone();

        let table = SortableTable::new(TableConfig::new(columns).remote(remote))?;

        Ok(Self {
            range_picker: RangePicker::new(range),
            orders: ColumnChart::new("Orders", backend.join("api/dashboard/orders")?, range),
            sales: ColumnChart::new("Sales", backend.join("api/dashboard/sales")?, range),
            customers: ColumnChart::new(
                "Customers",
                backend.join("api/dashboard/customers")?,
                range,
            ),
            table,
            source,
        })
    }

    pub fn table(&self) -> &SortableTable {
        &self.table
    }

    pub fn table_mut(&mut self) -> &mut SortableTable {
        &mut self.table
    }

    pub fn range(&self) -> DateRange {
        self.range_picker.range()
    }

    /// Render the table, load its first page, and load the initial chart
    /// series.
    pub async fn render(&mut self) -> Result<(), PageError> {
        self.table.render().await?;
        let SortState { column, order } = self.table.sorted().clone();
        let (start, count) = self.table.page_window();
        self.table.sort_on_server(&column, order, start, count).await?;

        let range = self.range_picker.range();
        self.orders.update(range).await.map_err(PageError::Chart)?;
        self.sales.update(range).await.map_err(PageError::Chart)?;
        self.customers.update(range).await.map_err(PageError::Chart)?;
        Ok(())
    }

    /// React to a range selection: update every chart and re-issue a
    /// remote sort with the table's current sort state and page window.
    pub async fn on_date_select(&mut self, range: DateRange) -> Result<(), PageError> {
        info!("date range selected: {} .. {}", range.from, range.to);
        self.range_picker.select(range);
        self.source.set_range(range.from, range.to);

        self.orders.update(range).await.map_err(PageError::Chart)?;
        self.sales.update(range).await.map_err(PageError::Chart)?;
        self.customers.update(range).await.map_err(PageError::Chart)?;

        let SortState { column, order } = self.table.sorted().clone();
        let (start, count) = self.table.page_window();
        self.table.sort_on_server(&column, order, start, count).await?;
        Ok(())
    }

    /// Route a host event: range signals here, pointer presses to the
    /// table. Returns whether anything consumed the event.
    pub async fn handle_event(&mut self, event: &Event) -> Result<bool, PageError> {
        match event {
            Event::RangeSelected { from, to } => {
                let range = DateRange::new(
                    from.parse::<DateTime<Utc>>()?,
                    to.parse::<DateTime<Utc>>()?,
                );
                self.on_date_select(range).await?;
                Ok(true)
            }
            _ => Ok(self.table.handle_event(event).await?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::SortType;

    fn columns() -> Vec<Column> {
        vec![
            Column::new("title", "Name").sortable(),
            Column::new("quantity", "Quantity")
                .sortable()
                .sort_type(SortType::Number),
        ]
    }

    fn window() -> DateRange {
        DateRange::new(
            "2026-07-01T00:00:00Z".parse().unwrap(),
            "2026-08-01T00:00:00Z".parse().unwrap(),
        )
    }

    #[test]
    fn trailing_month_spans_thirty_days() {
        let range = DateRange::trailing_month();
        assert_eq!(range.to - range.from, Duration::days(30));
    }

    #[test]
    fn picker_records_selection() {
        let mut picker = RangePicker::new(window());
        let next = DateRange::new(window().to, window().to + Duration::days(7));

        assert_eq!(picker.select(next), next);
        assert_eq!(picker.range(), next);
    }

    #[test]
    fn page_wires_collaborators_against_backend() {
        let backend = Url::parse("https://shop.example/").unwrap();
        let page = DashboardPage::new(&backend, columns(), window()).unwrap();

        assert_eq!(page.orders.label(), "Orders");
        assert_eq!(
            page.sales.url.as_str(),
            "https://shop.example/api/dashboard/sales"
        );
        let source_url = page.source.url().unwrap();
        assert!(source_url.path().ends_with("api/dashboard/bestsellers"));
        assert!(source_url.query().unwrap().contains("from=2026-07-01"));
        assert_eq!(page.range(), window());
        assert_eq!(page.table().sorted().column, "title");
    }

    #[tokio::test]
    async fn malformed_range_signal_is_rejected() {
        let backend = Url::parse("https://shop.example/").unwrap();
        let mut page = DashboardPage::new(&backend, columns(), window()).unwrap();

        let event = Event::RangeSelected {
            from: "not-a-date".to_string(),
            to: "2026-08-01T00:00:00Z".to_string(),
        };
        assert!(matches!(
            page.handle_event(&event).await,
            Err(PageError::Range(_))
        ));
        assert_eq!(page.range(), window(), "selection not committed");
    }

    #[tokio::test]
    async fn pointer_press_is_forwarded_to_the_table() {
        let backend = Url::parse("https://shop.example/").unwrap();
        let mut page = DashboardPage::new(&backend, columns(), window()).unwrap();

        let consumed = page
            .handle_event(&Event::press("nobody".to_string()))
            .await
            .unwrap();
        assert!(!consumed, "unrendered table has no bindings");
    }
}
