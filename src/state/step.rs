//! Wizard step progression

use serde::{Deserialize, Serialize};

/// The three steps of the onboarding wizard, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    #[default]
    Account,
    Contact,
    Documents,
}

impl WizardStep {
    pub const fn ordered() -> [Self; 3] {
        [Self::Account, Self::Contact, Self::Documents]
    }

    /// 1-based step number shown in the progress indicator.
    pub const fn number(self) -> u8 {
        match self {
            Self::Account => 1,
            Self::Contact => 2,
            Self::Documents => 3,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Account => "Datos de la Cuenta",
            Self::Contact => "Datos del Contacto",
            Self::Documents => "Documentación",
        }
    }

    /// Advance one step; capped at the last step.
    pub const fn next(self) -> Self {
        match self {
            Self::Account => Self::Contact,
            Self::Contact | Self::Documents => Self::Documents,
        }
    }

    /// Go back one step; capped at the first step.
    pub const fn back(self) -> Self {
        match self {
            Self::Documents => Self::Contact,
            Self::Contact | Self::Account => Self::Account,
        }
    }

    pub const fn is_last(self) -> bool {
        matches!(self, Self::Documents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_account() {
        assert_eq!(WizardStep::default(), WizardStep::Account);
    }

    #[test]
    fn next_caps_at_documents() {
        assert_eq!(WizardStep::Account.next(), WizardStep::Contact);
        assert_eq!(WizardStep::Contact.next(), WizardStep::Documents);
        assert_eq!(WizardStep::Documents.next(), WizardStep::Documents);
    }

    #[test]
    fn back_caps_at_account() {
        assert_eq!(WizardStep::Documents.back(), WizardStep::Contact);
        assert_eq!(WizardStep::Contact.back(), WizardStep::Account);
        assert_eq!(WizardStep::Account.back(), WizardStep::Account);
    }

    #[test]
    fn numbers_follow_display_order() {
        let numbers: Vec<u8> = WizardStep::ordered().iter().map(|s| s.number()).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn only_documents_is_last() {
        assert!(WizardStep::Documents.is_last());
        assert!(!WizardStep::Account.is_last());
        assert!(!WizardStep::Contact.is_last());
    }
}
