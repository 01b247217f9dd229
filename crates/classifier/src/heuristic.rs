//! Local, deterministic classification.
//!
//! Applies the spend policy directly and fills in templated wording from the
//! computed values. No external call, no failure mode.

use crate::classification::{
    AUTO_APPROVE_LIMIT, Classification, ItemSnapshot, ReorderAction, ReorderMath,
};

/// Classify a flagged item with the local rule.
///
/// Same (stock, sales_per_day, unit_price) always yields the same action,
/// quantity, and cost.
pub fn classify(item: &ItemSnapshot) -> Classification {
    let math = ReorderMath::for_item(item);
    let action = ReorderAction::for_cost(math.cost);

    let reasoning = match action {
        ReorderAction::AutoApprove => format!(
            "Stock critically low with {} days remaining. Routine reorder under {}, \
             proceeding automatically to prevent stockout.",
            math.days_until_stockout,
            fmt_usd(AUTO_APPROVE_LIMIT),
        ),
        ReorderAction::Escalate => format!(
            "High-value order of {} requires manual approval. Stock is critical but \
             financial impact warrants human review.",
            fmt_usd(math.cost),
        ),
    };

    let vendor_message = format!(
        "We need to reorder {} units of {}. Our current stock of {} units will last \
         approximately {} days at current sales velocity. Please confirm availability \
         and estimated delivery time. Thank you.",
        math.quantity, item.name, item.stock, math.days_until_stockout,
    );

    Classification {
        action,
        reasoning,
        vendor_message,
        quantity: math.quantity,
        cost: math.cost,
        days_until_stockout: math.days_until_stockout,
    }
}

/// Dollar formatting for human-facing text: whole amounts print without cents.
pub(crate) fn fmt_usd(amount: f64) -> String {
    if amount.fract().abs() < f64::EPSILON {
        format!("${amount:.0}")
    } else {
        format!("${amount:.2}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(name: &str, stock: u32, unit_price: f64, sales_per_day: f64) -> ItemSnapshot {
        ItemSnapshot {
            name: name.into(),
            stock,
            unit_price,
            sales_per_day,
        }
    }

    #[test]
    fn routine_reorder_is_auto_approved() {
        let c = classify(&snapshot("Wireless Mouse", 5, 15.0, 1.0));
        assert_eq!(c.action, ReorderAction::AutoApprove);
        assert_eq!(c.quantity, 30);
        assert_eq!(c.cost, 450.0);
        assert_eq!(c.days_until_stockout, 5);
        assert!(c.reasoning.contains("Routine reorder"));
        assert!(c.vendor_message.contains("30 units of Wireless Mouse"));
    }

    #[test]
    fn high_value_order_is_escalated() {
        let c = classify(&snapshot("Keyboard", 3, 60.0, 2.0));
        assert_eq!(c.action, ReorderAction::Escalate);
        assert_eq!(c.quantity, 60);
        assert_eq!(c.cost, 3600.0);
        assert!(c.reasoning.contains("$3600"));
        assert!(c.reasoning.contains("manual approval"));
    }

    #[test]
    fn classification_is_deterministic() {
        let snap = snapshot("Webcam HD", 2, 80.0, 4.0);
        assert_eq!(classify(&snap), classify(&snap));
    }

    #[test]
    fn fmt_usd_drops_cents_on_whole_amounts() {
        assert_eq!(fmt_usd(500.0), "$500");
        assert_eq!(fmt_usd(449.5), "$449.50");
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: the action is AUTO_APPROVE iff cost < 500, and
            /// cost = ceil(sales_per_day * 30) * unit_price.
            #[test]
            fn policy_holds_for_all_items(
                stock in 0u32..1000,
                unit_price in 0.01f64..200.0,
                sales_per_day in 0.1f64..50.0,
            ) {
                let c = classify(&snapshot("item", stock, unit_price, sales_per_day));
                let quantity = (sales_per_day * 30.0).ceil() as u32;
                prop_assert_eq!(c.quantity, quantity);
                prop_assert!((c.cost - f64::from(quantity) * unit_price).abs() < 1e-9);
                prop_assert_eq!(c.action == ReorderAction::AutoApprove, c.cost < 500.0);
                prop_assert!(c.quantity > 0);
            }
        }
    }
}
