//! Pure field validation for the wizard steps
//!
//! Rules mirror the declared form schemas: one error per field, no side
//! effects. The controller decides what to do with a failed mapping.

use std::collections::BTreeMap;

use crate::state::{FormRecord, ShareholderDraft, WizardStep};

/// Fields that can carry a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    LegalForm,
    BusinessType,
    LegalName,
    TaxId,
    FirstName,
    LastName,
    ContactTaxId,
    Email,
    RelationToAccount,
    Phone,
    Participation,
}

impl Field {
    pub const fn name(self) -> &'static str {
        match self {
            Self::LegalForm => "legal_form",
            Self::BusinessType => "business_type",
            Self::LegalName => "legal_name",
            Self::TaxId => "tax_id",
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::ContactTaxId => "contact_tax_id",
            Self::Email => "email",
            Self::RelationToAccount => "relation_to_account",
            Self::Phone => "phone",
            Self::Participation => "participation",
        }
    }
}

/// First error per field, ordered for stable display.
pub type FieldErrors = BTreeMap<Field, String>;

const MSG_LEGAL_FORM: &str = "Debe seleccionar una personería.";
const MSG_BUSINESS_TYPE: &str = "Debe seleccionar un tipo de empresa.";
const MSG_MIN_5: &str = "Debe tener al menos 5 caracteres.";
const MSG_MIN_2: &str = "Debe tener al menos 2 caracteres.";
const MSG_CUIT: &str = "El CUIT/CUIL debe ser un número de 11 dígitos.";
const MSG_EMAIL: &str = "El formato del email no es válido.";
const MSG_RELATION: &str = "Debe seleccionar una relación con la cuenta.";
const MSG_PHONE: &str = "El teléfono debe tener al menos 8 dígitos.";
const MSG_PARTICIPATION: &str = "La participación debe ser un número entre 1 y 100.";

/// Exactly 11 ascii digits (CUIT/CUIL without separators).
fn is_cuit(value: &str) -> bool {
    value.len() == 11 && value.bytes().all(|b| b.is_ascii_digit())
}

/// Minimal well-formedness check: one `@`, non-empty local part, and a
/// dot inside the domain (not at either edge).
pub(crate) fn is_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.split_once('.') {
        Some((host, rest)) => !host.is_empty() && !rest.is_empty() && !rest.ends_with('.'),
        None => false,
    }
}

fn has_min_chars(value: &str, min: usize) -> bool {
    value.chars().count() >= min
}

/// Step 1: account data.
pub fn validate_account(record: &FormRecord) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    if !record.legal_form.is_set() {
        errors.insert(Field::LegalForm, MSG_LEGAL_FORM.into());
    }
    if !record.business_type.is_set() {
        errors.insert(Field::BusinessType, MSG_BUSINESS_TYPE.into());
    }
    if !has_min_chars(&record.legal_name, 5) {
        errors.insert(Field::LegalName, MSG_MIN_5.into());
    }
    if !is_cuit(&record.tax_id) {
        errors.insert(Field::TaxId, MSG_CUIT.into());
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Step 2: contact data.
pub fn validate_contact(record: &FormRecord) -> Result<(), FieldErrors> {
    let contact = &record.contact;
    let mut errors = FieldErrors::new();
    if !has_min_chars(&contact.first_name, 2) {
        errors.insert(Field::FirstName, MSG_MIN_2.into());
    }
    if !has_min_chars(&contact.last_name, 2) {
        errors.insert(Field::LastName, MSG_MIN_2.into());
    }
    if !is_cuit(&contact.tax_id) {
        errors.insert(Field::ContactTaxId, MSG_CUIT.into());
    }
    if !is_email(&contact.email) {
        errors.insert(Field::Email, MSG_EMAIL.into());
    }
    if contact.relation_to_account.is_empty() {
        errors.insert(Field::RelationToAccount, MSG_RELATION.into());
    }
    if !has_min_chars(&contact.phone, 8) {
        errors.insert(Field::Phone, MSG_PHONE.into());
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Gate for forward navigation out of `step`. The Documents step has no
/// field gate of its own; its requirements are checked at submission.
pub fn validate_step(step: WizardStep, record: &FormRecord) -> Result<(), FieldErrors> {
    match step {
        WizardStep::Account => validate_account(record),
        WizardStep::Contact => validate_contact(record),
        WizardStep::Documents => Ok(()),
    }
}

/// Shareholder sub-validation, run by the roster before any mutation.
/// Returns the coerced participation percentage on success.
pub fn validate_shareholder(draft: &ShareholderDraft) -> Result<u8, FieldErrors> {
    let mut errors = FieldErrors::new();
    if !has_min_chars(&draft.first_name, 2) {
        errors.insert(Field::FirstName, MSG_MIN_2.into());
    }
    if !has_min_chars(&draft.last_name, 2) {
        errors.insert(Field::LastName, MSG_MIN_2.into());
    }
    if !is_cuit(&draft.tax_id) {
        errors.insert(Field::TaxId, MSG_CUIT.into());
    }
    if !is_email(&draft.email) {
        errors.insert(Field::Email, MSG_EMAIL.into());
    }
    let percent = match draft.participation.trim().parse::<u8>() {
        Ok(value) if (1..=100).contains(&value) => Some(value),
        _ => {
            errors.insert(Field::Participation, MSG_PARTICIPATION.into());
            None
        }
    };
    match (errors.is_empty(), percent) {
        (true, Some(value)) => Ok(value),
        _ => Err(errors),
    }
}
