//! The working application draft and its discrete edit events

use serde::{Deserialize, Serialize};

use crate::state::shareholders::ShareholderRoster;
use crate::validate::Field;

/// Applicant's constitution type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegalForm {
    /// Corporate applicant (sociedad); carries a shareholder roster.
    Juridica,
    /// Individual applicant.
    Fisica,
    #[default]
    Unset,
}

impl LegalForm {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Juridica => "Jurídica",
            Self::Fisica => "Física",
            Self::Unset => "",
        }
    }

    pub const fn is_set(self) -> bool {
        !matches!(self, Self::Unset)
    }
}

/// Secondary classification affecting the document checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BusinessType {
    Agricola,
    NoAgricola,
    #[default]
    Unset,
}

impl BusinessType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Agricola => "Agrícola",
            Self::NoAgricola => "No agrícola",
            Self::Unset => "",
        }
    }

    pub const fn is_set(self) -> bool {
        !matches!(self, Self::Unset)
    }
}

/// Contact block collected on the second step.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactDetails {
    pub first_name: String,
    pub last_name: String,
    /// CUIT/CUIL of the contact person, 11 digits.
    pub tax_id: String,
    pub email: String,
    pub relation_to_account: String,
    pub phone: String,
}

/// The single working draft of the application.
///
/// Serialized as-is into the draft store after every mutation so a
/// restart picks up where the applicant left off. Attached files are
/// deliberately not part of this record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FormRecord {
    pub legal_form: LegalForm,
    pub business_type: BusinessType,
    /// Name or razón social of the applicant.
    pub legal_name: String,
    /// CUIT/CUIL of the applicant, 11 digits.
    pub tax_id: String,
    pub contact: ContactDetails,
    pub shareholders: ShareholderRoster,
}

impl FormRecord {
    /// Apply one discrete edit and report which field was touched, so the
    /// controller can drop that field's current validation error.
    pub fn apply(&mut self, edit: FieldEdit) -> Field {
        match edit {
            FieldEdit::LegalForm(value) => {
                self.legal_form = value;
                Field::LegalForm
            }
            FieldEdit::BusinessType(value) => {
                self.business_type = value;
                Field::BusinessType
            }
            FieldEdit::LegalName(value) => {
                self.legal_name = value;
                Field::LegalName
            }
            FieldEdit::TaxId(value) => {
                self.tax_id = value;
                Field::TaxId
            }
            FieldEdit::FirstName(value) => {
                self.contact.first_name = value;
                Field::FirstName
            }
            FieldEdit::LastName(value) => {
                self.contact.last_name = value;
                Field::LastName
            }
            FieldEdit::ContactTaxId(value) => {
                self.contact.tax_id = value;
                Field::ContactTaxId
            }
            FieldEdit::Email(value) => {
                self.contact.email = value;
                Field::Email
            }
            FieldEdit::RelationToAccount(value) => {
                self.contact.relation_to_account = value;
                Field::RelationToAccount
            }
            FieldEdit::Phone(value) => {
                self.contact.phone = value;
                Field::Phone
            }
        }
    }

    /// Display name used in the applicant confirmation email.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.contact.first_name, self.contact.last_name)
            .trim()
            .to_string()
    }
}

/// One discrete user edit to the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    LegalForm(LegalForm),
    BusinessType(BusinessType),
    LegalName(String),
    TaxId(String),
    FirstName(String),
    LastName(String),
    ContactTaxId(String),
    Email(String),
    RelationToAccount(String),
    Phone(String),
}

impl FieldEdit {
    /// The field this edit targets.
    pub fn field(&self) -> Field {
        match self {
            Self::LegalForm(_) => Field::LegalForm,
            Self::BusinessType(_) => Field::BusinessType,
            Self::LegalName(_) => Field::LegalName,
            Self::TaxId(_) => Field::TaxId,
            Self::FirstName(_) => Field::FirstName,
            Self::LastName(_) => Field::LastName,
            Self::ContactTaxId(_) => Field::ContactTaxId,
            Self::Email(_) => Field::Email,
            Self::RelationToAccount(_) => Field::RelationToAccount,
            Self::Phone(_) => Field::Phone,
        }
    }
}
