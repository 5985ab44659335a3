//! Error types

use thiserror::Error;

/// Failure surfaced by a remote sort strategy.
pub type RemoteError = Box<dyn std::error::Error + Send + Sync>;

/// Errors raised by [`SortableTable`](crate::SortableTable) operations.
///
/// Validation failures are returned synchronously from `sort()`; nothing
/// is swallowed internally. A remote rejection leaves the visible tree and
/// the sort state unchanged.
#[derive(Debug, Error)]
pub enum TableError {
    /// Sort requested on an unknown or non-sortable column id.
    #[error("unknown or non-sortable column: {0:?}")]
    InvalidColumn(String),

    /// Sort direction outside {asc, desc}, raised at the parse boundary.
    #[error("invalid sort direction: {0:?} (expected \"asc\" or \"desc\")")]
    InvalidDirection(String),

    /// No sortable column exists to default the initial sort state to.
    #[error("no sortable column to default the sort state to")]
    NoSortableColumn,

    /// The remote path was taken but no strategy was injected.
    #[error("remote sorting is not configured")]
    RemoteNotConfigured,

    /// The remote strategy rejected the request.
    #[error("remote sort failed: {0}")]
    Remote(#[source] RemoteError),

    /// The widget has no rendered subtree (before `render()` or after
    /// `remove()`).
    #[error("table is not rendered")]
    NotRendered,

    /// The widget was destroyed; no further operations are valid.
    #[error("table has been destroyed")]
    Destroyed,
}
