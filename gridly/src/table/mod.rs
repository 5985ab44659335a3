//! The sortable table widget.
//!
//! Lifecycle: `Unrendered -> Rendered -> Destroyed`. `render()` builds the
//! full subtree, indexes its named sub-elements, performs the initial sort
//! through the orchestrator, and binds header listeners. Every subsequent
//! sort patches only the body, relocates the indicator, and rebinds the
//! listeners with inverted toggle targets.

mod arrow;
mod listeners;
mod markup;

use std::sync::Arc;

use log::debug;
use markdom::{find_element, find_element_mut, index_subtree, Element, Event, MouseButton};
use markdom::index::SubElementMap;

use crate::column::{Column, Row, SortOrder, SortState};
use crate::compare::sort_rows;
use crate::error::TableError;
use crate::remote::RemoteSort;

use arrow::relocate_arrow;
use listeners::{ListenerKey, ListenerSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Unrendered,
    Rendered,
    Destroyed,
}

/// Construction contract for [`SortableTable`].
pub struct TableConfig {
    pub columns: Vec<Column>,
    pub data: Vec<Row>,
    /// Initial sort; defaults to the first sortable column, ascending.
    pub sorted: Option<SortState>,
    /// When false, sorting delegates to the injected remote strategy.
    pub locally_sorted: bool,
    pub remote: Option<Arc<dyn RemoteSort>>,
    pub page_start: usize,
    pub page_count: usize,
}

impl TableConfig {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            data: Vec::new(),
            sorted: None,
            locally_sorted: true,
            remote: None,
            page_start: 0,
            page_count: 20,
        }
    }

    pub fn data(mut self, data: Vec<Row>) -> Self {
        self.data = data;
        self
    }

    pub fn sorted(mut self, sorted: SortState) -> Self {
        self.sorted = Some(sorted);
        self
    }

    pub fn locally_sorted(mut self, locally_sorted: bool) -> Self {
        self.locally_sorted = locally_sorted;
        self
    }

    pub fn remote(mut self, remote: Arc<dyn RemoteSort>) -> Self {
        self.remote = Some(remote);
        self
    }

    pub fn page(mut self, start: usize, count: usize) -> Self {
        self.page_start = start;
        self.page_count = count;
        self
    }
}

/// A sortable tabular-data widget.
pub struct SortableTable {
    columns: Vec<Column>,
    data: Vec<Row>,
    sorted: SortState,
    locally_sorted: bool,
    remote: Option<Arc<dyn RemoteSort>>,
    page_start: usize,
    page_count: usize,
    root: Option<Element>,
    handles: SubElementMap,
    listeners: ListenerSet,
    phase: Phase,
}

impl SortableTable {
    /// Validate the configuration and create an unrendered widget.
    ///
    /// The initial sort state is copied into owned state here; when none is
    /// configured it defaults to the first sortable column, ascending.
    pub fn new(config: TableConfig) -> Result<Self, TableError> {
        let sorted = match config.sorted {
            Some(sorted) => {
                let valid = config
                    .columns
                    .iter()
                    .any(|c| c.sortable && c.id == sorted.column);
                if !valid {
                    return Err(TableError::InvalidColumn(sorted.column));
                }
                sorted
            }
            None => {
                let first = config
                    .columns
                    .iter()
                    .find(|c| c.sortable)
                    .ok_or(TableError::NoSortableColumn)?;
                SortState::new(first.id.clone(), SortOrder::Asc)
            }
        };

        Ok(Self {
            columns: config.columns,
            data: config.data,
            sorted,
            locally_sorted: config.locally_sorted,
            remote: config.remote,
            page_start: config.page_start,
            page_count: config.page_count,
            root: None,
            handles: SubElementMap::new(),
            listeners: ListenerSet::new(),
            phase: Phase::Unrendered,
        })
    }

    /// Build the subtree, apply the initial sort, and bind listeners.
    pub async fn render(&mut self) -> Result<&Element, TableError> {
        if self.phase == Phase::Destroyed {
            return Err(TableError::Destroyed);
        }

        let root = markup::build_root(&self.columns, &self.data, &self.sorted);
        self.handles = index_subtree(&root);
        self.root = Some(root);
        self.phase = Phase::Rendered;

        let SortState { column, order } = self.sorted.clone();
        self.sort(&column, order).await?;

        self.root.as_ref().ok_or(TableError::NotRendered)
    }

    /// The rendered root, if any.
    pub fn element(&self) -> Option<&Element> {
        self.root.as_ref()
    }

    /// Named handles into the rendered subtree.
    pub fn sub_elements(&self) -> &SubElementMap {
        &self.handles
    }

    pub fn sorted(&self) -> &SortState {
        &self.sorted
    }

    pub fn rows(&self) -> &[Row] {
        &self.data
    }

    /// Configured `(page_start, page_count)` window for remote requests.
    pub fn page_window(&self) -> (usize, usize) {
        (self.page_start, self.page_count)
    }

    /// Sort by `column` in `order`. Dispatches to the local reorder+patch
    /// path or the remote strategy, then rebinds listeners with inverted
    /// toggle targets.
    pub async fn sort(&mut self, column: &str, order: SortOrder) -> Result<(), TableError> {
        self.ensure_live()?;
        let sort_type = self
            .columns
            .iter()
            .find(|c| c.sortable && c.id == column)
            .map(|c| c.sort_type)
            .ok_or_else(|| TableError::InvalidColumn(column.to_string()))?;

        debug!("sort: column={column} order={order} local={}", self.locally_sorted);

        if self.locally_sorted {
            let rows = sort_rows(&self.data, column, sort_type, order);
            self.apply(column, order, rows);
        } else {
            let rows = self
                .fetch_remote(column, order, self.page_start, self.page_count)
                .await?;
            self.apply(column, order, rows);
        }

        self.rebind_listeners();
        Ok(())
    }

    /// Re-issue a remote sort directly, bypassing the local/remote branch.
    ///
    /// The dashboard consumer uses this to refresh the current page after
    /// its query window changed.
    pub async fn sort_on_server(
        &mut self,
        column: &str,
        order: SortOrder,
        page_start: usize,
        page_count: usize,
    ) -> Result<(), TableError> {
        self.ensure_live()?;
        if !self.columns.iter().any(|c| c.sortable && c.id == column) {
            return Err(TableError::InvalidColumn(column.to_string()));
        }

        let rows = self.fetch_remote(column, order, page_start, page_count).await?;
        self.apply(column, order, rows);
        self.rebind_listeners();
        Ok(())
    }

    /// Dispatch a pointer press to the bound header handler, if any.
    ///
    /// Returns `Ok(true)` when a sort was triggered. After `destroy()` all
    /// bindings are gone, so dispatch degrades to `Ok(false)`.
    pub async fn handle_event(&mut self, event: &Event) -> Result<bool, TableError> {
        let Event::PointerPress {
            target: Some(target),
            button: MouseButton::Left,
        } = event
        else {
            return Ok(false);
        };

        let Some(handler) = self.listeners.lookup(target) else {
            return Ok(false);
        };

        let (column, order) = handler.command();
        let column = column.to_string();
        debug!("pointer press on {target}: sort {column} {order}");
        self.sort(&column, order).await?;
        Ok(true)
    }

    /// Detach the rendered subtree, returning to the unrendered state.
    ///
    /// Bindings are torn down with the nodes they pointed at; the handler
    /// cache survives for a later `render()`.
    pub fn remove(&mut self) {
        if self.phase == Phase::Destroyed {
            return;
        }
        self.root = None;
        self.handles.clear();
        self.listeners.teardown();
        self.phase = Phase::Unrendered;
    }

    /// Tear down listeners, detach the subtree, and release all handles
    /// and data. Terminal: later `sort()` calls fail with
    /// [`TableError::Destroyed`].
    pub fn destroy(&mut self) {
        self.listeners.clear();
        self.root = None;
        self.handles.clear();
        self.data = Vec::new();
        self.phase = Phase::Destroyed;
    }

    fn ensure_live(&self) -> Result<(), TableError> {
        match self.phase {
            Phase::Rendered => Ok(()),
            Phase::Unrendered => Err(TableError::NotRendered),
            Phase::Destroyed => Err(TableError::Destroyed),
        }
    }

    async fn fetch_remote(
        &mut self,
        column: &str,
        order: SortOrder,
        page_start: usize,
        page_count: usize,
    ) -> Result<Vec<Row>, TableError> {
        let remote = self.remote.clone().ok_or(TableError::RemoteNotConfigured)?;
        remote
            .fetch(column, order, page_start, page_count)
            .await
            .map_err(TableError::Remote)
    }

    /// Commit rows and sort state, then patch the tree: relocate the
    /// indicator and replace only the body's children.
    fn apply(&mut self, column: &str, order: SortOrder, rows: Vec<Row>) {
        self.data = rows;
        self.sorted = SortState::new(column, order);

        let Some(root) = self.root.as_mut() else {
            return;
        };

        if let Some(id) = self.handles.get("header")
            && let Some(header) = find_element_mut(root, id)
        {
            relocate_arrow(header, column, order);
        }

        let body_rows = markup::build_rows(&self.columns, &self.data);
        if let Some(id) = self.handles.get("body")
            && let Some(body) = find_element_mut(root, id)
        {
            body.set_children(body_rows);
        }
    }

    /// Tear down current bindings and bind every sortable header cell to
    /// the inverse of the just-applied direction.
    fn rebind_listeners(&mut self) {
        self.listeners.teardown();

        let next = self.sorted.order.toggled();
        let bindings: Vec<(String, ListenerKey)> = {
            let Some(header) = self
                .root
                .as_ref()
                .zip(self.handles.get("header"))
                .and_then(|(root, id)| find_element(root, id))
            else {
                return;
            };
            header
                .child_slice()
                .iter()
                .filter(|cell| cell.get_data("sortable").is_some_and(|v| v == "true"))
                .filter_map(|cell| {
                    cell.get_data("id")
                        .map(|col| (cell.id.clone(), ListenerKey::new(col.clone(), next)))
                })
                .collect()
        };

        debug!("binding {} header listeners (next order {next})", bindings.len());
        for (element_id, key) in bindings {
            self.listeners.bind(element_id, key);
        }
    }
}
