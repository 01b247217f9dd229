//! Inventory domain module.
//!
//! This crate contains the stock snapshot the reorder agent works from,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod item;
pub mod scan;

pub use item::InventoryItem;
pub use scan::scan;
