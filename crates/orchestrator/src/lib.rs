//! `restock-orchestrator`
//!
//! **Responsibility:** sequencing the reorder pipeline.
//!
//! The orchestrator owns the inventory snapshot and the decision log and is
//! the only writer of either. Each analysis run scans the snapshot, classifies
//! every flagged item strictly in scan order, records a decision, dispatches
//! the matching notification channel, and applies the resulting stock credit.
//! Escalated decisions wait in `pending` for [`Orchestrator::approve`].

pub mod decision;
pub mod run;

pub use decision::{Decision, DecisionStatus};
pub use run::{Orchestrator, PacingConfig, RunReport};
