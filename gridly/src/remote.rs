//! Remote sort strategy.
//!
//! The widget never performs network I/O itself. When it is not sorting
//! locally it delegates to a strategy injected at construction; URL
//! construction, query encoding, and transport belong to that collaborator
//! (see [`crate::fetch::JsonSource`] for the JSON-over-HTTP one).

use futures::future::BoxFuture;

use crate::column::{Row, SortOrder};
use crate::error::RemoteError;

/// Supplies a freshly ordered page of rows.
pub trait RemoteSort: Send + Sync {
    /// Request rows sorted by `column`/`order`, windowed to
    /// `page_start..page_start + page_count`.
    fn fetch(
        &self,
        column: &str,
        order: SortOrder,
        page_start: usize,
        page_count: usize,
    ) -> BoxFuture<'static, Result<Vec<Row>, RemoteError>>;
}

impl<F> RemoteSort for F
where
    F: Fn(&str, SortOrder, usize, usize) -> BoxFuture<'static, Result<Vec<Row>, RemoteError>>
        + Send
        + Sync,
{
    fn fetch(
        &self,
        column: &str,
        order: SortOrder,
        page_start: usize,
        page_count: usize,
    ) -> BoxFuture<'static, Result<Vec<Row>, RemoteError>> {
        self(column, order, page_start, page_count)
    }
}
