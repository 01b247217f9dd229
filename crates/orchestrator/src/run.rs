//! The analysis run and manual approval.

use std::time::Duration;

use serde::Serialize;
use tokio::time::sleep;
use tracing::{info, warn};

use restock_classifier::{Classifier, ItemSnapshot, ReorderAction};
use restock_core::{DecisionId, DomainError, DomainResult};
use restock_inventory::{InventoryItem, scan};
use restock_notify::{
    EmailSender, NotificationResult, OwnerAlertMessage, PurchaseOrderMessage, SmsSender,
};

use crate::decision::{Decision, DecisionStatus};

/// Pacing between external calls.
///
/// Sequential processing with a fixed inter-item delay is the throttling
/// strategy: it keeps notification ordering deterministic and avoids bursting
/// provider rate limits. The heuristic latency emulates reasoning-service
/// think time on the local path; both are configuration, not behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PacingConfig {
    pub between_items: Duration,
    pub heuristic_latency: Duration,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            between_items: Duration::from_millis(800),
            heuristic_latency: Duration::from_secs(1),
        }
    }
}

impl PacingConfig {
    /// No delays; for tests.
    pub fn none() -> Self {
        Self {
            between_items: Duration::ZERO,
            heuristic_latency: Duration::ZERO,
        }
    }
}

/// Summary of one analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct RunReport {
    pub flagged: usize,
    pub auto_approved: usize,
    pub escalated: usize,
}

impl RunReport {
    pub fn is_healthy(&self) -> bool {
        self.flagged == 0
    }
}

/// Owns the inventory snapshot and the decision log; single writer of both.
///
/// Generic over the two channel seams so tests (or alternative providers) can
/// substitute implementations.
pub struct Orchestrator<E, S> {
    inventory: Vec<InventoryItem>,
    decisions: Vec<Decision>,
    classifier: Classifier,
    email: E,
    sms: S,
    pacing: PacingConfig,
}

impl<E: EmailSender, S: SmsSender> Orchestrator<E, S> {
    pub fn new(inventory: Vec<InventoryItem>, classifier: Classifier, email: E, sms: S) -> Self {
        Self {
            inventory,
            decisions: Vec::new(),
            classifier,
            email,
            sms,
            pacing: PacingConfig::default(),
        }
    }

    pub fn with_pacing(mut self, pacing: PacingConfig) -> Self {
        self.pacing = pacing;
        self
    }

    pub fn inventory(&self) -> &[InventoryItem] {
        &self.inventory
    }

    pub fn decisions(&self) -> &[Decision] {
        &self.decisions
    }

    pub fn decision(&self, id: DecisionId) -> Option<&Decision> {
        self.decisions.iter().find(|d| d.id == id)
    }

    /// Run one analysis pass over the inventory snapshot.
    ///
    /// Flagged items are processed strictly sequentially in scan order; each
    /// classification and dispatch is awaited before the next item begins.
    /// Dispatch failures are recorded on the decision, never propagated — a
    /// run always completes.
    pub async fn run_analysis(&mut self) -> RunReport {
        let flagged: Vec<_> = scan(&self.inventory)
            .into_iter()
            .map(InventoryItem::id_typed)
            .collect();

        if flagged.is_empty() {
            info!("all inventory levels healthy, nothing to reorder");
            return RunReport::default();
        }

        info!(flagged = flagged.len(), "starting inventory analysis");
        let mut report = RunReport {
            flagged: flagged.len(),
            ..RunReport::default()
        };

        for item_id in flagged {
            // Single writer: nothing removes items mid-run, but look the item
            // up fresh so earlier credits are visible.
            let Some(item) = self
                .inventory
                .iter()
                .find(|i| i.id_typed() == item_id)
                .cloned()
            else {
                continue;
            };

            if self.classifier.is_heuristic() && !self.pacing.heuristic_latency.is_zero() {
                sleep(self.pacing.heuristic_latency).await;
            }

            let classification = self.classifier.classify(&snapshot_of(&item)).await;
            let mut decision = Decision::from_classification(&item, classification);
            info!(
                item = %decision.item,
                action = decision.action.as_label(),
                quantity = decision.quantity,
                cost = decision.cost,
                "decision created"
            );

            match decision.action {
                ReorderAction::AutoApprove => {
                    let result = self.email.send_vendor_email(&purchase_message(&decision)).await;
                    decision.email_sent = result.success;
                    // Stock is credited optimistically, whatever the dispatch
                    // outcome; the result is already surfaced on the decision.
                    self.credit_stock(&decision.item, decision.quantity);
                    report.auto_approved += 1;
                }
                ReorderAction::Escalate => {
                    let result = self.sms.send_owner_alert(&owner_alert(&decision)).await;
                    decision.sms_sent = result.success;
                    report.escalated += 1;
                }
            }

            self.decisions.push(decision);

            if !self.pacing.between_items.is_zero() {
                sleep(self.pacing.between_items).await;
            }
        }

        info!(
            flagged = report.flagged,
            auto_approved = report.auto_approved,
            escalated = report.escalated,
            "analysis complete"
        );
        report
    }

    /// Manually approve a pending (escalated) decision.
    ///
    /// Dispatches the vendor email from the stored decision content, records
    /// the outcome, transitions the decision to `completed`, and credits the
    /// item's stock by the stored quantity.
    ///
    /// Errors: `NotFound` for an unknown id, `InvalidState` for a decision
    /// that is not pending (so a second call can never double-credit stock).
    pub async fn approve(&mut self, id: DecisionId) -> DomainResult<NotificationResult> {
        let index = self
            .decisions
            .iter()
            .position(|d| d.id == id)
            .ok_or(DomainError::NotFound)?;

        if self.decisions[index].status != DecisionStatus::Pending {
            return Err(DomainError::invalid_state(format!(
                "decision {id} is not pending"
            )));
        }

        let message = purchase_message(&self.decisions[index]);
        let result = self.email.send_vendor_email(&message).await;

        let (item, quantity) = {
            let decision = &mut self.decisions[index];
            decision.email_sent = result.success;
            decision.status = DecisionStatus::Completed;
            (decision.item.clone(), decision.quantity)
        };
        self.credit_stock(&item, quantity);

        info!(decision = %id, item = %item, "pending decision approved");
        Ok(result)
    }

    fn credit_stock(&mut self, item_name: &str, quantity: u32) {
        match self.inventory.iter_mut().find(|i| i.name() == item_name) {
            Some(item) => {
                item.receive(quantity);
                info!(item = %item_name, quantity, stock = item.stock(), "stock credited");
            }
            None => warn!(item = %item_name, "stock credit skipped: item not in snapshot"),
        }
    }
}

fn snapshot_of(item: &InventoryItem) -> ItemSnapshot {
    ItemSnapshot {
        name: item.name().to_string(),
        stock: item.stock(),
        unit_price: item.unit_price(),
        sales_per_day: item.sales_per_day(),
    }
}

fn purchase_message(decision: &Decision) -> PurchaseOrderMessage {
    PurchaseOrderMessage {
        item: decision.item.clone(),
        vendor: decision.vendor.clone(),
        vendor_address: decision.vendor_address.clone(),
        body: decision.vendor_message.clone(),
        quantity: decision.quantity,
        cost: decision.cost,
        reasoning: decision.reasoning.clone(),
        auto_approved: decision.action == ReorderAction::AutoApprove,
    }
}

fn owner_alert(decision: &Decision) -> OwnerAlertMessage {
    OwnerAlertMessage {
        item: decision.item.clone(),
        cost: decision.cost,
    }
}
