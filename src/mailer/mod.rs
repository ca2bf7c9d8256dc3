//! Notification sender module

mod traits;

pub use traits::{NotificationSender, OutboundFile, SubmissionPackage};

#[cfg(test)]
pub use traits::MockNotificationSender;
