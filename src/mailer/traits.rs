//! Trait abstraction for the outbound notification sender
//!
//! The core only assembles the submission payload and reacts to the
//! success/failure signal; how the two emails (applicant confirmation,
//! admin notification with attachments) get delivered is the sender's
//! business.

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::state::FormRecord;

/// One attachment as handed to the sender.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Everything the sender needs for both emails.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionPackage {
    /// Confirmation recipient.
    pub applicant_email: String,
    /// Display name used in the confirmation greeting.
    pub applicant_name: String,
    /// Admin notification recipient.
    pub admin_email: String,
    pub from_address: String,
    /// The full record, shareholder roster included.
    pub record: FormRecord,
    pub files: Vec<OutboundFile>,
    pub submitted_at: DateTime<Utc>,
}

/// Outbound mail dispatch, enabling mocking in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationSender: Send + Sync {
    /// Deliver both notifications for one submission. An `Err` means the
    /// submission was not accepted and the caller must retain its state.
    async fn send(&self, package: SubmissionPackage) -> Result<()>;
}
