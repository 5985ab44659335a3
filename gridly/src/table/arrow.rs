//! Sort indicator relocation.
//!
//! The header subtree is never rebuilt after the initial render; on each
//! sort the singleton indicator node is moved from the previously marked
//! cell to the newly active one.

use log::debug;
use markdom::Element;

use crate::column::SortOrder;

use super::markup;

/// Move the indicator to the cell for `column` and stamp the new order.
///
/// At most one header cell carries an `order` marker at any time; its
/// marker is cleared and its indicator detached before the new cell is
/// stamped. If no cell was marked, a fresh indicator is synthesized, so
/// the single-indicator invariant holds either way.
pub(super) fn relocate_arrow(header: &mut Element, column: &str, order: SortOrder) {
    let arrow = match header.find_child_mut(|cell| cell.has_data("order")) {
        Some(old_cell) => {
            old_cell.remove_data("order");
            old_cell.detach_child(|c| c.get_data("element").is_some_and(|v| v == "arrow"))
        }
        None => None,
    };
    let arrow = arrow.unwrap_or_else(markup::sort_arrow);

    if let Some(cell) = header.find_child_mut(|c| c.get_data("id").is_some_and(|v| v == column)) {
        debug!("sort indicator -> column {column} ({order})");
        cell.set_data("order", order.as_str());
        cell.push_child(arrow);
    }
}
