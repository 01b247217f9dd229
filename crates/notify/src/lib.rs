//! `restock-notify`
//!
//! **Responsibility:** the notification gateway.
//!
//! Two independent channels — vendor email and owner SMS — each with the same
//! degradation contract: when the channel's credentials are not all present it
//! performs no network call and reports a simulated success. That is the
//! demo-safe default, not an error. Nothing in this crate ever returns `Err`
//! past the channel boundary; every outcome is a [`NotificationResult`].

pub mod channel;
pub mod email;
pub mod message;
pub mod result;
pub mod sms;

pub use channel::{EmailSender, SmsSender};
pub use email::{EmailChannel, EmailConfig};
pub use message::{OwnerAlertMessage, PurchaseOrderMessage};
pub use result::NotificationResult;
pub use sms::{SmsChannel, SmsConfig};

/// A credential counts as present only when it is set and non-blank.
pub(crate) fn present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}
