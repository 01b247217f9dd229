//! Demo entry point: seed the sample catalog, run one analysis pass, and log
//! what the agent decided.
//!
//! All configuration arrives through the environment; missing credentials put
//! the corresponding channel (or the classifier) into its demo-safe mode.

use anyhow::Result;
use tracing::info;

use restock_classifier::{Classifier, ClassifierConfig};
use restock_core::ItemId;
use restock_inventory::InventoryItem;
use restock_notify::{EmailChannel, EmailConfig, SmsChannel, SmsConfig};
use restock_orchestrator::Orchestrator;

#[tokio::main]
async fn main() -> Result<()> {
    restock_observability::init();

    let classifier = Classifier::from_config(&ClassifierConfig {
        api_key: env_opt("RESTOCK_LLM_API_KEY"),
    });
    let email = EmailChannel::new(EmailConfig {
        api_key: env_opt("RESTOCK_RESEND_API_KEY"),
        to: env_opt("RESTOCK_VENDOR_EMAIL_TO"),
        ..EmailConfig::default()
    });
    let sms = SmsChannel::new(SmsConfig {
        account_sid: env_opt("RESTOCK_TWILIO_ACCOUNT_SID"),
        auth_token: env_opt("RESTOCK_TWILIO_AUTH_TOKEN"),
        from_number: env_opt("RESTOCK_TWILIO_FROM"),
        to_number: env_opt("RESTOCK_OWNER_PHONE"),
    });

    let mut orchestrator = Orchestrator::new(demo_inventory()?, classifier, email, sms);
    let report = orchestrator.run_analysis().await;

    info!(
        flagged = report.flagged,
        auto_approved = report.auto_approved,
        escalated = report.escalated,
        healthy = report.is_healthy(),
        "run finished"
    );
    for decision in orchestrator.decisions() {
        info!(
            id = %decision.id,
            item = %decision.item,
            action = decision.action.as_label(),
            status = ?decision.status,
            quantity = decision.quantity,
            cost = decision.cost,
            email_sent = decision.email_sent,
            sms_sent = decision.sms_sent,
            "decision"
        );
    }

    Ok(())
}

fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// The five-item sample catalog used for demos.
fn demo_inventory() -> Result<Vec<InventoryItem>> {
    let seed = [
        ("Wireless Mouse", 5, 15, 15.0, "TechSupply Co", "orders@techsupply.com", 1.0),
        ("USB-C Cable", 8, 20, 8.0, "CableWorld", "sales@cableworld.com", 2.0),
        ("Laptop Stand", 23, 10, 45.0, "TechSupply Co", "orders@techsupply.com", 2.0),
        ("Keyboard", 3, 12, 60.0, "PeripheralPlus", "contact@peripheralplus.com", 2.0),
        ("Webcam HD", 2, 8, 80.0, "TechSupply Co", "orders@techsupply.com", 4.0),
    ];

    seed.into_iter()
        .map(|(name, stock, reorder_point, price, vendor, vendor_email, velocity)| {
            InventoryItem::new(
                ItemId::new(),
                name,
                stock,
                reorder_point,
                price,
                vendor,
                vendor_email,
                velocity,
            )
            .map_err(Into::into)
        })
        .collect()
}
