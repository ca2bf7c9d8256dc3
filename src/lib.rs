//! SGR Onboarding - core state machine for a step-validated credit
//! application wizard
//!
//! Collects account and contact data across three steps, maintains a
//! dynamic shareholder roster, resolves the required-document checklist
//! from the applicant's legal form and business type, and submits the
//! complete record plus attachments through an external notification
//! sender. Rendering, email templates, and mail transport live outside
//! this crate; it only talks to them through the [`mailer`] and
//! [`draft`] traits.

pub mod attachments;
pub mod config;
pub mod documents;
pub mod draft;
pub mod error;
pub mod mailer;
pub mod state;
pub mod validate;
pub mod wizard;

pub use attachments::{AttachedFile, AttachmentKey, AttachmentSet};
pub use config::WizardConfig;
pub use documents::{is_complete, required_documents, DocumentKind, DocumentRequirement};
pub use draft::{DraftStore, JsonDraftStore, MemoryDraftStore};
pub use error::SubmitError;
pub use mailer::{NotificationSender, OutboundFile, SubmissionPackage};
pub use state::{
    BusinessType, FieldEdit, FormRecord, LegalForm, Shareholder, ShareholderDraft,
    ShareholderRoster, WizardStep,
};
pub use validate::{Field, FieldErrors};
pub use wizard::{SubmitOutcome, Wizard};
