//! Channel-facing message shapes.
//!
//! The gateway takes these instead of the orchestrator's decision record so
//! the two crates stay decoupled; callers build them from whatever they hold.

use serde::{Deserialize, Serialize};

/// Everything the vendor email needs from a decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrderMessage {
    pub item: String,
    pub vendor: String,
    pub vendor_address: String,
    /// Free-text body addressed to the vendor (classifier output).
    pub body: String,
    pub quantity: u32,
    pub cost: f64,
    pub reasoning: String,
    pub auto_approved: bool,
}

impl PurchaseOrderMessage {
    pub fn subject(&self) -> String {
        format!("[Restock] Purchase Order: {}", self.item)
    }

    /// HTML body embedding vendor, item, quantity, cost, approval mode, and
    /// the decision rationale.
    pub fn html_body(&self) -> String {
        let mode = if self.auto_approved {
            "Auto-Approved"
        } else {
            "Manually Approved"
        };

        format!(
            concat!(
                r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto; padding: 20px;">"#,
                "<h2>Purchase Order Request</h2>",
                "<p>Dear <strong>{vendor}</strong>,</p>",
                "<p>{body}</p>",
                "<table>",
                "<tr><td><strong>Item:</strong></td><td>{item}</td></tr>",
                "<tr><td><strong>Quantity:</strong></td><td>{quantity} units</td></tr>",
                "<tr><td><strong>Total Cost:</strong></td><td><strong>{cost}</strong></td></tr>",
                "</table>",
                "<p>Please confirm delivery timeline and availability.</p>",
                "<p>Decision: {mode}</p>",
                "<p>Reasoning: {reasoning}</p>",
                "<p>Automatically generated by Restock</p>",
                "</div>",
            ),
            vendor = self.vendor,
            body = self.body,
            item = self.item,
            quantity = self.quantity,
            cost = fmt_usd(self.cost),
            mode = mode,
            reasoning = self.reasoning,
        )
    }
}

/// Everything the owner SMS needs from a decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwnerAlertMessage {
    pub item: String,
    pub cost: f64,
}

impl OwnerAlertMessage {
    pub fn text_body(&self) -> String {
        format!(
            "Restock alert\n\nHigh-value decision needs approval:\nItem: {}\nCost: {}\n\nReview dashboard to approve.",
            self.item,
            fmt_usd(self.cost),
        )
    }
}

fn fmt_usd(amount: f64) -> String {
    if amount.fract().abs() < f64::EPSILON {
        format!("${amount:.0}")
    } else {
        format!("${amount:.2}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order() -> PurchaseOrderMessage {
        PurchaseOrderMessage {
            item: "Keyboard".into(),
            vendor: "PeripheralPlus".into(),
            vendor_address: "contact@peripheralplus.com".into(),
            body: "Please confirm 60 units of Keyboard.".into(),
            quantity: 60,
            cost: 3600.0,
            reasoning: "High-value order requires manual approval.".into(),
            auto_approved: false,
        }
    }

    #[test]
    fn subject_names_the_item() {
        assert_eq!(order().subject(), "[Restock] Purchase Order: Keyboard");
    }

    #[test]
    fn html_body_embeds_the_order_facts() {
        let html = order().html_body();
        assert!(html.contains("PeripheralPlus"));
        assert!(html.contains("Keyboard"));
        assert!(html.contains("60 units"));
        assert!(html.contains("$3600"));
        assert!(html.contains("Manually Approved"));
    }

    #[test]
    fn alert_text_summarizes_item_and_cost() {
        let text = OwnerAlertMessage {
            item: "Keyboard".into(),
            cost: 3600.0,
        }
        .text_body();
        assert!(text.contains("Item: Keyboard"));
        assert!(text.contains("Cost: $3600"));
    }
}
