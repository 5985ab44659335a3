//! Subtree indexing.
//!
//! A rendered subtree marks the nodes a widget needs to patch later with an
//! `element` data attribute. Indexing walks the tree once and maps each
//! logical name to the node's id; the map can be rebuilt at any time by
//! re-indexing the same subtree.

use std::collections::HashMap;

use log::trace;

use crate::element::{Content, Element};

/// Logical name -> element id, for nodes carrying an `element` data marker.
pub type SubElementMap = HashMap<String, String>;

/// Collect all named sub-elements of a subtree, including the root.
pub fn index_subtree(root: &Element) -> SubElementMap {
    let mut map = SubElementMap::new();
    collect_marked(root, &mut map);
    trace!("indexed {} named sub-elements under {}", map.len(), root.id);
    map
}

fn collect_marked(element: &Element, map: &mut SubElementMap) {
    if let Some(name) = element.get_data("element") {
        map.insert(name.clone(), element.id.clone());
    }

    if let Content::Children(children) = &element.content {
        for child in children {
            collect_marked(child, map);
        }
    }
}
