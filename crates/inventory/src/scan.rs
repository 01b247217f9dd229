//! Reorder-point scan over a stock snapshot.

use crate::item::InventoryItem;

/// Return every item whose stock has fallen to or below its reorder point,
/// preserving input order.
///
/// Pure and infallible: no side effects, no error cases. Re-scanning an
/// unchanged snapshot yields the same set.
pub fn scan(items: &[InventoryItem]) -> Vec<&InventoryItem> {
    items.iter().filter(|item| item.needs_reorder()).collect()
}
