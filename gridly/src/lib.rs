//! A sortable data-grid widget over a [`markdom`] element tree.
//!
//! The core is [`SortableTable`]: it builds its full markup subtree once,
//! then on every sort patches only the row body, relocates the singleton
//! sort indicator, and rebinds per-column pointer handlers with inverted
//! toggle targets. Sorting is either local (in-memory, stable,
//! non-mutating) or delegated to an injected [`RemoteSort`] strategy.

pub mod column;
pub mod compare;
pub mod dashboard;
pub mod error;
pub mod fetch;
pub mod remote;
pub mod table;

pub use column::{Column, Row, SortOrder, SortState, SortType};
pub use compare::{compare_values, sort_rows};
pub use error::{RemoteError, TableError};
pub use remote::RemoteSort;
pub use table::{SortableTable, TableConfig};
