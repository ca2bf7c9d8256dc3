//! Wizard controller
//!
//! Owns the working state and orchestrates the three-step flow: forward
//! navigation is gated by per-step validation, backward navigation and
//! direct jumps are free, and submission runs the roster aggregate check
//! and the document completeness check before the one async call to the
//! notification sender. Every record mutation is mirrored into the draft
//! store; persistence failures are logged and never surface to the user.

use chrono::Utc;
use uuid::Uuid;

use crate::attachments::{AttachedFile, AttachmentKey, AttachmentSet};
use crate::config::WizardConfig;
use crate::documents::{self, DocumentRequirement};
use crate::draft::DraftStore;
use crate::error::SubmitError;
use crate::mailer::{NotificationSender, OutboundFile, SubmissionPackage};
use crate::state::{FieldEdit, FormRecord, LegalForm, ShareholderDraft, WizardStep};
use crate::validate::{self, FieldErrors};

/// What a `submit` call did.
#[derive(Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The sender accepted the submission; state has been reset.
    Accepted,
    /// Submission blocked or failed; all state retained.
    Blocked(SubmitError),
    /// Another submission is already in flight; this call was ignored.
    InFlight,
}

/// The wizard state machine.
pub struct Wizard {
    config: WizardConfig,
    sender: Box<dyn NotificationSender>,
    drafts: Box<dyn DraftStore>,
    step: WizardStep,
    record: FormRecord,
    field_errors: FieldErrors,
    shareholder_errors: FieldErrors,
    /// Collection-level roster error, distinct from per-field errors.
    roster_error: Option<String>,
    /// Completeness or retry message shown next to the submit action.
    submit_message: Option<String>,
    attachments: AttachmentSet,
    submitting: bool,
}

impl Wizard {
    /// Create a controller, hydrating the record from the draft store.
    /// An unreadable draft is treated like an absent one.
    pub fn new(
        config: WizardConfig,
        sender: Box<dyn NotificationSender>,
        drafts: Box<dyn DraftStore>,
    ) -> Self {
        let record = match drafts.read() {
            Ok(Some(blob)) => match serde_json::from_str(&blob) {
                Ok(record) => record,
                Err(err) => {
                    tracing::warn!(error = %err, "stored draft is unreadable, starting clean");
                    FormRecord::default()
                }
            },
            Ok(None) => FormRecord::default(),
            Err(err) => {
                tracing::warn!(error = %err, "draft store read failed, starting clean");
                FormRecord::default()
            }
        };
        Self {
            config,
            sender,
            drafts,
            step: WizardStep::Account,
            record,
            field_errors: FieldErrors::new(),
            shareholder_errors: FieldErrors::new(),
            roster_error: None,
            submit_message: None,
            attachments: AttachmentSet::default(),
            submitting: false,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn record(&self) -> &FormRecord {
        &self.record
    }

    pub fn attachments(&self) -> &AttachmentSet {
        &self.attachments
    }

    pub fn field_errors(&self) -> &FieldErrors {
        &self.field_errors
    }

    pub fn shareholder_errors(&self) -> &FieldErrors {
        &self.shareholder_errors
    }

    pub fn roster_error(&self) -> Option<&str> {
        self.roster_error.as_deref()
    }

    pub fn submit_message(&self) -> Option<&str> {
        self.submit_message.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Apply one field edit. The edited field's current error is dropped
    /// and the draft is written through.
    pub fn edit(&mut self, edit: FieldEdit) {
        let field = self.record.apply(edit);
        self.field_errors.remove(&field);
        self.persist_draft();
    }

    /// Validate the current step and advance on success. Returns whether
    /// the step changed.
    pub fn next(&mut self) -> bool {
        match validate::validate_step(self.step, &self.record) {
            Ok(()) => {
                self.field_errors.clear();
                self.step = self.step.next();
                true
            }
            Err(errors) => {
                self.field_errors = errors;
                false
            }
        }
    }

    /// Unconditional: users may freely revisit completed steps.
    pub fn back(&mut self) {
        self.step = self.step.back();
    }

    /// Unconditional jump via the step indicator.
    pub fn go_to(&mut self, step: WizardStep) {
        self.step = step;
    }

    /// Save a shareholder through the roster. On success the modal and
    /// roster-level errors are cleared and the draft written through; on
    /// failure the modal errors are exposed and nothing mutates.
    pub fn save_shareholder(&mut self, draft: ShareholderDraft) -> Option<Uuid> {
        match self.record.shareholders.save(draft) {
            Ok(id) => {
                self.shareholder_errors.clear();
                self.roster_error = None;
                self.persist_draft();
                Some(id)
            }
            Err(errors) => {
                self.shareholder_errors = errors;
                None
            }
        }
    }

    /// Remove a shareholder and its DNI attachment, if any.
    pub fn delete_shareholder(&mut self, id: Uuid) {
        if self.record.shareholders.remove(id) {
            self.attachments.remove(&AttachmentKey::Shareholder(id));
            self.roster_error = None;
            self.persist_draft();
        }
    }

    /// Attach (or replace) the file for a checklist document.
    pub fn attach_document(&mut self, label: impl Into<String>, file_name: String, bytes: Vec<u8>) {
        self.attachments
            .attach(AttachmentKey::Document(label.into()), AttachedFile { file_name, bytes });
        self.submit_message = None;
    }

    /// Attach (or replace) a shareholder's DNI. Ignored when the id is
    /// not in the roster. Returns whether the file was attached.
    pub fn attach_shareholder_dni(&mut self, id: Uuid, file_name: String, bytes: Vec<u8>) -> bool {
        if self.record.shareholders.get(id).is_none() {
            return false;
        }
        self.attachments
            .attach(AttachmentKey::Shareholder(id), AttachedFile { file_name, bytes });
        self.submit_message = None;
        true
    }

    pub fn remove_attachment(&mut self, key: &AttachmentKey) {
        self.attachments.remove(key);
    }

    /// The checklist for the record's current classification.
    pub fn required_documents(&self) -> Vec<DocumentRequirement> {
        documents::required_documents(self.record.legal_form, self.record.business_type)
    }

    /// All required documents attached, plus one DNI per shareholder for
    /// juridica applicants.
    pub fn documents_complete(&self) -> bool {
        let required = self.required_documents();
        if !documents::is_complete(&required, &self.attachments) {
            return false;
        }
        if self.record.legal_form == LegalForm::Juridica {
            self.record
                .shareholders
                .iter()
                .all(|s| self.attachments.has_shareholder(s.id))
        } else {
            true
        }
    }

    /// Run the submission gates and, if they pass, the one async call to
    /// the notification sender. Success resets everything to a clean
    /// Account step; any failure retains the full working state.
    pub async fn submit(&mut self) -> SubmitOutcome {
        if self.submitting {
            return SubmitOutcome::InFlight;
        }
        if let Err(err) = self.submission_gates() {
            return SubmitOutcome::Blocked(err);
        }

        self.submitting = true;
        let package = self.build_package();
        let result = self.sender.send(package).await;
        self.submitting = false;

        match result {
            Ok(()) => {
                tracing::info!(
                    applicant = %self.record.contact.email,
                    "application submitted"
                );
                if let Err(err) = self.drafts.clear() {
                    tracing::warn!(error = %err, "draft store clear failed");
                }
                self.record = FormRecord::default();
                self.attachments.clear();
                self.field_errors.clear();
                self.shareholder_errors.clear();
                self.roster_error = None;
                self.submit_message = None;
                self.step = WizardStep::Account;
                SubmitOutcome::Accepted
            }
            Err(err) => {
                tracing::error!(error = %err, "notification sender failed");
                let blocked = SubmitError::SenderUnavailable;
                self.submit_message = Some(blocked.to_string());
                SubmitOutcome::Blocked(blocked)
            }
        }
    }

    /// Pre-send checks, in gate order: step, required data, roster
    /// aggregate (juridica only), document completeness.
    fn submission_gates(&mut self) -> Result<(), SubmitError> {
        if self.step != WizardStep::Documents {
            return Err(SubmitError::NotOnDocumentsStep);
        }
        if !self.record.legal_form.is_set() || !validate::is_email(&self.record.contact.email) {
            let err = SubmitError::IncompleteRecord;
            self.submit_message = Some(err.to_string());
            return Err(err);
        }
        if self.record.legal_form == LegalForm::Juridica {
            if let Err(err) = self.record.shareholders.check_aggregate() {
                self.roster_error = Some(err.to_string());
                return Err(err);
            }
        }
        if !self.documents_complete() {
            let err = SubmitError::MissingDocuments;
            self.submit_message = Some(err.to_string());
            return Err(err);
        }
        Ok(())
    }

    fn build_package(&self) -> SubmissionPackage {
        let files = self
            .attachments
            .iter()
            .map(|(_, file)| OutboundFile {
                file_name: file.file_name.clone(),
                bytes: file.bytes.clone(),
            })
            .collect();
        SubmissionPackage {
            applicant_email: self.record.contact.email.clone(),
            applicant_name: self.record.display_name(),
            admin_email: self.config.admin_email().to_string(),
            from_address: self.config.from_address().to_string(),
            record: self.record.clone(),
            files,
            submitted_at: Utc::now(),
        }
    }

    /// Best-effort write-through; failure is an operator concern only.
    fn persist_draft(&self) {
        let blob = match serde_json::to_string(&self.record) {
            Ok(blob) => blob,
            Err(err) => {
                tracing::warn!(error = %err, "draft serialization failed");
                return;
            }
        };
        if let Err(err) = self.drafts.write(&blob) {
            tracing::warn!(error = %err, "draft store write failed");
        }
    }
}
