//! Column configuration and row/sort-state values.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use markdom::Element;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::TableError;

/// One data record, field id -> value.
pub type Row = serde_json::Map<String, Value>;

/// Custom cell renderer for a column.
pub type CellTemplate = Arc<dyn Fn(&Value) -> Element + Send + Sync>;

/// How a column's values are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortType {
    /// Locale-aware string collation. Columns without a declared sort type
    /// fall back to this (documented behavior, not an error).
    #[default]
    String,
    /// Numeric ordering; missing or non-numeric values sort before any
    /// number.
    Number,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// The opposite direction; header handlers are bound to this so a
    /// click toggles.
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(TableError::InvalidDirection(other.to_string())),
        }
    }
}

/// The currently active sort column and direction.
///
/// A plain value: the configured initial state is copied into the widget's
/// owned state at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub column: String,
    pub order: SortOrder,
}

impl SortState {
    pub fn new(column: impl Into<String>, order: SortOrder) -> Self {
        Self {
            column: column.into(),
            order,
        }
    }
}

/// Declarative description of one table column.
///
/// `id` doubles as the row-field key; a column with `id == "id"` is never
/// rendered as a cell (it is reserved for the row's link target).
#[derive(Clone)]
pub struct Column {
    pub id: String,
    pub title: String,
    pub sortable: bool,
    pub sort_type: SortType,
    /// Optional custom cell renderer, e.g. for composite/media fields.
    pub template: Option<CellTemplate>,
}

impl Column {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            sortable: false,
            sort_type: SortType::default(),
            template: None,
        }
    }

    /// Make the column sortable.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn sort_type(mut self, sort_type: SortType) -> Self {
        self.sort_type = sort_type;
        self
    }

    /// Override cell rendering with a template.
    pub fn template(mut self, template: impl Fn(&Value) -> Element + Send + Sync + 'static) -> Self {
        self.template = Some(Arc::new(template));
        self
    }
}

impl fmt::Debug for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("sortable", &self.sortable)
            .field("sort_type", &self.sort_type)
            .field("template", &self.template.as_ref().map(|_| "fn"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_order_parses_and_rejects() {
        assert_eq!("asc".parse::<SortOrder>().unwrap(), SortOrder::Asc);
        assert_eq!("desc".parse::<SortOrder>().unwrap(), SortOrder::Desc);
        assert!(matches!(
            "up".parse::<SortOrder>(),
            Err(TableError::InvalidDirection(s)) if s == "up"
        ));
    }

    #[test]
    fn sort_order_toggles() {
        assert_eq!(SortOrder::Asc.toggled(), SortOrder::Desc);
        assert_eq!(SortOrder::Desc.toggled(), SortOrder::Asc);
    }

    #[test]
    fn sort_type_defaults_to_string() {
        let col = Column::new("title", "Title").sortable();
        assert_eq!(col.sort_type, SortType::String);
    }
}
