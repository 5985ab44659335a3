//! Listener lifecycle for header cells.
//!
//! Each sortable header cell gets one pointer-press handler whose target
//! direction is the inverse of the currently applied order. Handlers are
//! memoized by a typed `(column, order)` key so repeated rebinding reuses
//! existing allocations; rebinding always tears down the previous set
//! first, so a key can never gain duplicate bindings.

use std::collections::HashMap;
use std::sync::Arc;

use log::debug;

use crate::column::SortOrder;

/// Composite cache key for one bound handler.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListenerKey {
    pub column: String,
    pub order: SortOrder,
}

impl ListenerKey {
    pub fn new(column: impl Into<String>, order: SortOrder) -> Self {
        Self {
            column: column.into(),
            order,
        }
    }
}

/// The sort command a bound handler carries.
#[derive(Debug)]
pub struct SortHandler {
    key: ListenerKey,
}

impl SortHandler {
    /// The column and direction this handler sorts by when invoked.
    pub fn command(&self) -> (&str, SortOrder) {
        (&self.key.column, self.key.order)
    }
}

/// Cache of memoized handlers plus the currently live bindings.
#[derive(Debug, Default)]
pub struct ListenerSet {
    cache: HashMap<ListenerKey, Arc<SortHandler>>,
    bound: HashMap<String, Arc<SortHandler>>,
}

impl ListenerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind the handler for `key` to the element with `element_id`,
    /// reusing the cached handler when one exists.
    pub fn bind(&mut self, element_id: impl Into<String>, key: ListenerKey) {
        let handler = self
            .cache
            .entry(key.clone())
            .or_insert_with(|| Arc::new(SortHandler { key }))
            .clone();
        self.bound.insert(element_id.into(), handler);
    }

    /// Handler bound to the given element, if any.
    pub fn lookup(&self, element_id: &str) -> Option<Arc<SortHandler>> {
        self.bound.get(element_id).cloned()
    }

    /// Remove all bindings, keeping memoized handlers for reuse.
    pub fn teardown(&mut self) {
        debug!("tearing down {} header listeners", self.bound.len());
        self.bound.clear();
    }

    /// Remove all bindings and drop the cache (destroy path).
    pub fn clear(&mut self) {
        self.bound.clear();
        self.cache.clear();
    }

    pub fn bound_len(&self) -> usize {
        self.bound.len()
    }

    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rebinding_is_idempotent_per_key() {
        let mut set = ListenerSet::new();

        for _ in 0..2 {
            set.teardown();
            set.bind("cell-title", ListenerKey::new("title", SortOrder::Desc));
            set.bind("cell-price", ListenerKey::new("price", SortOrder::Desc));
        }

        assert_eq!(set.bound_len(), 2);
        assert_eq!(set.cached_len(), 2);
    }

    #[test]
    fn rebinding_reuses_cached_handlers() {
        let mut set = ListenerSet::new();

        set.bind("cell-title", ListenerKey::new("title", SortOrder::Desc));
        let first = set.lookup("cell-title").unwrap();

        set.teardown();
        set.bind("cell-title", ListenerKey::new("title", SortOrder::Desc));
        let second = set.lookup("cell-title").unwrap();

        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn opposite_directions_are_distinct_keys() {
        let mut set = ListenerSet::new();

        set.bind("cell-title", ListenerKey::new("title", SortOrder::Asc));
        set.teardown();
        set.bind("cell-title", ListenerKey::new("title", SortOrder::Desc));

        assert_eq!(set.cached_len(), 2);
        assert_eq!(set.bound_len(), 1);
        let handler = set.lookup("cell-title").unwrap();
        let (column, order) = handler.command();
        assert_eq!((column, order), ("title", SortOrder::Desc));
    }

    #[test]
    fn clear_drops_cache_and_bindings() {
        let mut set = ListenerSet::new();
        set.bind("cell-title", ListenerKey::new("title", SortOrder::Asc));

        set.clear();

        assert_eq!(set.bound_len(), 0);
        assert_eq!(set.cached_len(), 0);
        assert!(set.lookup("cell-title").is_none());
    }
}
