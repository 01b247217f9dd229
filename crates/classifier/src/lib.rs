//! `restock-classifier`
//!
//! **Responsibility:** the reorder decision policy boundary.
//!
//! This crate decides *what* to do about a flagged item — it never mutates
//! inventory or dispatches notifications:
//! - It computes the reorder mathematics (days until stockout, 30-day supply,
//!   total cost).
//! - It classifies the action as `AUTO_APPROVE` or `ESCALATE`, either locally
//!   (heuristic) or by delegating to an external reasoning service.
//! - Delegated failures of any kind degrade silently to the heuristic result;
//!   classification itself is infallible.

pub mod classification;
pub mod delegated;
pub mod heuristic;
pub mod strategy;

pub use classification::{AUTO_APPROVE_LIMIT, Classification, ItemSnapshot, ReorderAction, ReorderMath};
pub use delegated::DelegatedClassifier;
pub use strategy::{Classifier, ClassifierConfig};
