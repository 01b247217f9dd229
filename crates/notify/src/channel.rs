//! Channel seams the orchestrator dispatches through.
//!
//! Traits rather than concrete channels so tests can substitute in-memory
//! recorders. Implementations must convert every failure into a
//! [`NotificationResult`]; they never return `Err`.

use async_trait::async_trait;

use crate::message::{OwnerAlertMessage, PurchaseOrderMessage};
use crate::result::NotificationResult;

/// Vendor-facing purchase-order email channel.
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send_vendor_email(&self, order: &PurchaseOrderMessage) -> NotificationResult;
}

/// Owner-facing escalation alert channel.
#[async_trait]
pub trait SmsSender: Send + Sync {
    async fn send_owner_alert(&self, alert: &OwnerAlertMessage) -> NotificationResult;
}
