//! Submission error taxonomy
//!
//! All variants are recoverable: the controller surfaces them as blocked
//! submissions and retains the working state. Display strings are the
//! user-facing messages.

use thiserror::Error;

/// Reasons a submission is blocked or fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// Submission attempted from a step other than Documents.
    #[error("La solicitud solo puede enviarse desde el paso de documentación.")]
    NotOnDocumentsStep,

    /// Required account or contact data is missing or malformed.
    #[error("Faltan datos obligatorios.")]
    IncompleteRecord,

    /// A juridica applicant has no shareholders loaded.
    #[error("Debe cargar al menos un accionista.")]
    EmptyRoster,

    /// Shareholder participation does not sum to exactly 100%.
    #[error("La participación de los accionistas debe sumar exactamente 100% (actual: {total}%).")]
    Participation { total: u32 },

    /// One or more required documents have no attached file.
    #[error("Falta adjuntar documentación requerida.")]
    MissingDocuments,

    /// The notification sender reported a failure; the draft is retained.
    #[error("No se pudo enviar la solicitud. Inténtelo nuevamente.")]
    SenderUnavailable,
}
