use serde::{Deserialize, Serialize};

/// Spend limit under which a reorder may proceed unattended.
///
/// Fixed business rule, deliberately not configurable.
pub const AUTO_APPROVE_LIMIT: f64 = 500.0;

/// Classified action for a flagged item.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReorderAction {
    #[serde(rename = "AUTO_APPROVE")]
    AutoApprove,
    #[serde(rename = "ESCALATE")]
    Escalate,
}

impl ReorderAction {
    /// Apply the spend policy to a computed order cost.
    pub fn for_cost(cost: f64) -> Self {
        if cost < AUTO_APPROVE_LIMIT {
            Self::AutoApprove
        } else {
            Self::Escalate
        }
    }

    /// Parse the wire label used by the reasoning service.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "AUTO_APPROVE" => Some(Self::AutoApprove),
            "ESCALATE" => Some(Self::Escalate),
            _ => None,
        }
    }

    pub fn as_label(&self) -> &'static str {
        match self {
            Self::AutoApprove => "AUTO_APPROVE",
            Self::Escalate => "ESCALATE",
        }
    }
}

/// The slice of an inventory item the classifier needs.
///
/// Kept separate from the inventory domain type so this crate stays decoupled
/// from inventory mutation; callers build snapshots from whatever they hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemSnapshot {
    pub name: String,
    pub stock: u32,
    pub unit_price: f64,
    pub sales_per_day: f64,
}

/// Reorder mathematics shared by both strategies.
///
/// The delegated strategy may override the action and the wording, never
/// the numbers.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ReorderMath {
    pub days_until_stockout: u32,
    pub quantity: u32,
    pub cost: f64,
}

impl ReorderMath {
    /// - `days_until_stockout = floor(stock / sales_per_day)`
    /// - `quantity = ceil(sales_per_day * 30)` (a 30-day supply)
    /// - `cost = quantity * unit_price`
    pub fn for_item(item: &ItemSnapshot) -> Self {
        let days_until_stockout = (f64::from(item.stock) / item.sales_per_day).floor() as u32;
        let quantity = (item.sales_per_day * 30.0).ceil() as u32;
        let cost = f64::from(quantity) * item.unit_price;

        Self {
            days_until_stockout,
            quantity,
            cost,
        }
    }
}

/// Fully-populated classification for one flagged item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub action: ReorderAction,
    pub reasoning: String,
    pub vendor_message: String,
    pub quantity: u32,
    pub cost: f64,
    pub days_until_stockout: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spend_policy_boundary() {
        assert_eq!(ReorderAction::for_cost(450.0), ReorderAction::AutoApprove);
        assert_eq!(ReorderAction::for_cost(499.99), ReorderAction::AutoApprove);
        assert_eq!(ReorderAction::for_cost(500.0), ReorderAction::Escalate);
        assert_eq!(ReorderAction::for_cost(3600.0), ReorderAction::Escalate);
    }

    #[test]
    fn wire_labels_round_trip() {
        assert_eq!(ReorderAction::from_label("AUTO_APPROVE"), Some(ReorderAction::AutoApprove));
        assert_eq!(ReorderAction::from_label(" ESCALATE "), Some(ReorderAction::Escalate));
        assert_eq!(ReorderAction::from_label("approve"), None);
    }

    #[test]
    fn math_for_slow_moving_item() {
        // {stock: 5, reorderPoint: 15, unitPrice: 15, salesPerDay: 1}
        let math = ReorderMath::for_item(&ItemSnapshot {
            name: "Wireless Mouse".into(),
            stock: 5,
            unit_price: 15.0,
            sales_per_day: 1.0,
        });
        assert_eq!(math.days_until_stockout, 5);
        assert_eq!(math.quantity, 30);
        assert_eq!(math.cost, 450.0);
    }

    #[test]
    fn math_for_high_value_item() {
        // {stock: 3, reorderPoint: 12, unitPrice: 60, salesPerDay: 2}
        let math = ReorderMath::for_item(&ItemSnapshot {
            name: "Keyboard".into(),
            stock: 3,
            unit_price: 60.0,
            sales_per_day: 2.0,
        });
        assert_eq!(math.days_until_stockout, 1);
        assert_eq!(math.quantity, 60);
        assert_eq!(math.cost, 3600.0);
    }

    #[test]
    fn fractional_velocity_rounds_quantity_up() {
        let math = ReorderMath::for_item(&ItemSnapshot {
            name: "USB-C Cable".into(),
            stock: 8,
            unit_price: 8.0,
            sales_per_day: 1.5,
        });
        assert_eq!(math.quantity, 45);
        assert_eq!(math.days_until_stockout, 5);
    }
}
