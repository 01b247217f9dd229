use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use restock_classifier::{Classification, ReorderAction};
use restock_core::DecisionId;
use restock_inventory::InventoryItem;

/// Decision lifecycle.
///
/// `completed` is terminal: AUTO_APPROVE decisions are born completed,
/// ESCALATE decisions reach it through manual approval.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecisionStatus {
    Pending,
    Completed,
}

/// One reorder decision, created once per flagged item per analysis run.
///
/// Immutable after creation except `status` and the two sent flags, which the
/// orchestrator updates after dispatch attempts. The source item is referenced
/// by name (weak reference, looked up by equality) for the later stock credit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    pub id: DecisionId,
    pub item: String,
    pub action: ReorderAction,
    pub reasoning: String,
    pub vendor_message: String,
    pub quantity: u32,
    pub cost: f64,
    pub vendor: String,
    pub vendor_address: String,
    pub created_at: DateTime<Utc>,
    pub status: DecisionStatus,
    pub email_sent: bool,
    pub sms_sent: bool,
}

impl Decision {
    /// Record a classification against the item it was computed from.
    pub fn from_classification(item: &InventoryItem, classification: Classification) -> Self {
        let status = match classification.action {
            ReorderAction::AutoApprove => DecisionStatus::Completed,
            ReorderAction::Escalate => DecisionStatus::Pending,
        };

        Self {
            id: DecisionId::new(),
            item: item.name().to_string(),
            action: classification.action,
            reasoning: classification.reasoning,
            vendor_message: classification.vendor_message,
            quantity: classification.quantity,
            cost: classification.cost,
            vendor: item.vendor().to_string(),
            vendor_address: item.vendor_email().to_string(),
            created_at: Utc::now(),
            status,
            email_sent: false,
            sms_sent: false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status == DecisionStatus::Pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use restock_core::ItemId;

    fn classified_item(unit_price: f64) -> (InventoryItem, Classification) {
        let item = InventoryItem::new(
            ItemId::new(),
            "Webcam HD",
            2,
            8,
            unit_price,
            "TechSupply Co",
            "orders@techsupply.com",
            4.0,
        )
        .unwrap();
        let classification = restock_classifier::heuristic::classify(&restock_classifier::ItemSnapshot {
            name: item.name().to_string(),
            stock: item.stock(),
            unit_price: item.unit_price(),
            sales_per_day: item.sales_per_day(),
        });
        (item, classification)
    }

    #[test]
    fn auto_approved_decisions_are_born_completed() {
        let (item, classification) = classified_item(2.0);
        assert_eq!(classification.action, ReorderAction::AutoApprove);

        let decision = Decision::from_classification(&item, classification);
        assert_eq!(decision.status, DecisionStatus::Completed);
        assert!(!decision.email_sent);
        assert!(!decision.sms_sent);
    }

    #[test]
    fn escalated_decisions_are_born_pending() {
        let (item, classification) = classified_item(80.0);
        assert_eq!(classification.action, ReorderAction::Escalate);

        let decision = Decision::from_classification(&item, classification);
        assert!(decision.is_pending());
        assert_eq!(decision.vendor, "TechSupply Co");
        assert_eq!(decision.vendor_address, "orders@techsupply.com");
    }
}
