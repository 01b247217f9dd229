use serde::{Deserialize, Serialize};

use restock_core::{DomainError, DomainResult, ItemId};

/// A stocked product tracked by the reorder agent.
///
/// Stock is a `u32`, so the non-negative invariant holds by construction.
/// The only mutation the agent ever performs is [`InventoryItem::receive`],
/// applied when a purchase order is dispatched or approved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    id: ItemId,
    name: String,
    stock: u32,
    reorder_point: u32,
    unit_price: f64,
    vendor: String,
    vendor_email: String,
    sales_per_day: f64,
}

impl InventoryItem {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        stock: u32,
        reorder_point: u32,
        unit_price: f64,
        vendor: impl Into<String>,
        vendor_email: impl Into<String>,
        sales_per_day: f64,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if !(unit_price.is_finite() && unit_price > 0.0) {
            return Err(DomainError::validation("unit_price must be positive"));
        }
        if !(sales_per_day.is_finite() && sales_per_day > 0.0) {
            return Err(DomainError::validation("sales_per_day must be positive"));
        }

        Ok(Self {
            id,
            name,
            stock,
            reorder_point,
            unit_price,
            vendor: vendor.into(),
            vendor_email: vendor_email.into(),
            sales_per_day,
        })
    }

    pub fn id_typed(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stock(&self) -> u32 {
        self.stock
    }

    pub fn reorder_point(&self) -> u32 {
        self.reorder_point
    }

    pub fn unit_price(&self) -> f64 {
        self.unit_price
    }

    pub fn vendor(&self) -> &str {
        &self.vendor
    }

    pub fn vendor_email(&self) -> &str {
        &self.vendor_email
    }

    pub fn sales_per_day(&self) -> f64 {
        self.sales_per_day
    }

    /// An item is flagged for reorder once stock falls to the reorder point.
    pub fn needs_reorder(&self) -> bool {
        self.stock <= self.reorder_point
    }

    /// Credit incoming stock from a dispatched purchase order.
    pub fn receive(&mut self, quantity: u32) {
        self.stock = self.stock.saturating_add(quantity);
    }
}
