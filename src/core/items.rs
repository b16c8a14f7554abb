//! Copy-on-write operations over a line item list
//!
//! Each function leaves its input untouched and returns the new list, so the
//! editor can swap a draft's rows in one assignment and keep the previous
//! list around if it wants to.

use crate::core::field::{ItemField, parse_float_lenient};
use crate::core::invoice::LineItem;

/// `items` with a blank row appended
pub fn with_added(items: &[LineItem]) -> Vec<LineItem> {
    let mut next = Vec::with_capacity(items.len() + 1);
    next.extend_from_slice(items);
    next.push(LineItem::empty());
    next
}

/// `items` without the row at `index`, or `None` if there is no such row
pub fn with_removed(items: &[LineItem], index: usize) -> Option<Vec<LineItem>> {
    if index >= items.len() {
        return None;
    }

    let mut next = items.to_vec();
    next.remove(index);
    Some(next)
}

/// `items` with one field of row `index` set from raw form input.
///
/// Numeric fields go through [`parse_float_lenient`]. The row's cached
/// `total` is recomputed after every change, including description edits.
pub fn with_updated(
    items: &[LineItem],
    index: usize,
    field: ItemField,
    value: &str,
) -> Option<Vec<LineItem>> {
    let mut next = items.to_vec();
    let item = next.get_mut(index)?;

    match field {
        ItemField::Description => item.description = value.to_string(),
        ItemField::Quantity => item.quantity = parse_float_lenient(value),
        ItemField::UnitPrice => item.unit_price = parse_float_lenient(value),
    }
    item.total = Some(item.subtotal());

    Some(next)
}
