//! Required-document checklist resolution
//!
//! The checklists are fixed reference tables: a base list per legal form,
//! plus agriculture-specific additions appended when the business type is
//! agrícola. Concatenation order is the display order and must stay
//! stable. Completeness only checks label presence, never file contents.

use crate::attachments::AttachmentSet;
use crate::state::{BusinessType, LegalForm};

/// Which pre-upload affordance a requirement offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// A downloadable template the applicant fills in.
    Template,
    /// A reference example the applicant can view.
    Example,
    /// No affordance before upload.
    None,
}

/// One entry of the required-document checklist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRequirement {
    pub label: &'static str,
    pub description: &'static str,
    /// Static asset behind the template/example affordance.
    pub reference: Option<&'static str>,
    pub kind: DocumentKind,
}

const DOCS_JURIDICA: &[DocumentRequirement] = &[
    DocumentRequirement {
        label: "Certificado PYME vigente",
        description: "Certificado MiPyME vigente emitido por AFIP.",
        reference: Some("ejemplos/certificado-pyme.pdf"),
        kind: DocumentKind::Example,
    },
    DocumentRequirement {
        label: "DDJJ de bienes personales o manifestacion de bienes de c/ accionista",
        description: "Declaración jurada o manifestación de bienes de cada accionista.",
        reference: Some("ejemplos/ddjj-bienes.pdf"),
        kind: DocumentKind::Example,
    },
    DocumentRequirement {
        label: "Ventas post cierre balance",
        description: "Detalle de ventas posteriores al último cierre de balance.",
        reference: Some("plantillas/ventas-post-cierre.xlsx"),
        kind: DocumentKind::Template,
    },
    DocumentRequirement {
        label: "Formulario alta",
        description: "Formulario de alta de la cuenta.",
        reference: Some("plantillas/formulario-alta.xlsx"),
        kind: DocumentKind::Template,
    },
    DocumentRequirement {
        label: "Detalle de deudas",
        description: "Detalle de deudas bancarias y financieras vigentes.",
        reference: Some("plantillas/detalle-deudas.xlsx"),
        kind: DocumentKind::Template,
    },
    DocumentRequirement {
        label: "Últimos dos balances certificados",
        description: "Balances de los dos últimos ejercicios, certificados.",
        reference: None,
        kind: DocumentKind::None,
    },
];

const DOCS_FISICA: &[DocumentRequirement] = &[
    DocumentRequirement {
        label: "Certificado PYME Vigente",
        description: "Certificado MiPyME vigente emitido por AFIP.",
        reference: Some("ejemplos/certificado-pyme.pdf"),
        kind: DocumentKind::Example,
    },
    DocumentRequirement {
        label: "Última DDJJ ganancias",
        description: "Última declaración jurada de ganancias presentada.",
        reference: Some("ejemplos/ddjj-ganancias.pdf"),
        kind: DocumentKind::Example,
    },
    DocumentRequirement {
        label: "DDJJ de bienes personales o manifestacion de bienes",
        description: "Declaración jurada o manifestación de bienes del solicitante.",
        reference: Some("ejemplos/ddjj-bienes.pdf"),
        kind: DocumentKind::Example,
    },
    DocumentRequirement {
        label: "Formulario alta",
        description: "Formulario de alta de la cuenta.",
        reference: Some("plantillas/formulario-alta.xlsx"),
        kind: DocumentKind::Template,
    },
    DocumentRequirement {
        label: "Reseña",
        description: "Reseña de la actividad del solicitante.",
        reference: Some("plantillas/resena.xlsx"),
        kind: DocumentKind::Template,
    },
    DocumentRequirement {
        label: "DNI propio y de su cónyuge",
        description: "DNI del solicitante y de su cónyuge.",
        reference: None,
        kind: DocumentKind::None,
    },
];

const DOCS_AGRICOLA: &[DocumentRequirement] = &[
    DocumentRequirement {
        label: "Plan de siembra",
        description: "Plan de siembra de la campaña en curso.",
        reference: Some("plantillas/plan-de-siembra.xlsx"),
        kind: DocumentKind::Template,
    },
    DocumentRequirement {
        label: "IP1",
        description: "Informe patrimonial IP1.",
        reference: Some("ejemplos/ip1.pdf"),
        kind: DocumentKind::Example,
    },
    DocumentRequirement {
        label: "IP2",
        description: "Informe patrimonial IP2.",
        reference: Some("ejemplos/ip2.pdf"),
        kind: DocumentKind::Example,
    },
];

/// Resolve the checklist for the given classification. An unset legal
/// form yields an empty list (the applicant has not finished step 1 yet).
pub fn required_documents(
    legal_form: LegalForm,
    business_type: BusinessType,
) -> Vec<DocumentRequirement> {
    let base = match legal_form {
        LegalForm::Juridica => DOCS_JURIDICA,
        LegalForm::Fisica => DOCS_FISICA,
        LegalForm::Unset => return Vec::new(),
    };
    let mut documents = base.to_vec();
    if business_type == BusinessType::Agricola {
        documents.extend_from_slice(DOCS_AGRICOLA);
    }
    documents
}

/// True iff every required label has an attached file. Extra attachments
/// (including shareholder files) do not affect the result.
pub fn is_complete(required: &[DocumentRequirement], attached: &AttachmentSet) -> bool {
    required.iter().all(|doc| attached.has_document(doc.label))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attachments::{AttachedFile, AttachmentKey};
    use uuid::Uuid;

    fn attach_all(attached: &mut AttachmentSet, required: &[DocumentRequirement]) {
        for doc in required {
            attached.attach(
                AttachmentKey::Document(doc.label.to_string()),
                AttachedFile {
                    file_name: format!("{}.pdf", doc.label),
                    bytes: vec![1, 2, 3],
                },
            );
        }
    }

    #[test]
    fn juridica_no_agricola_is_exactly_the_base_list() {
        let docs = required_documents(LegalForm::Juridica, BusinessType::NoAgricola);
        let labels: Vec<&str> = docs.iter().map(|d| d.label).collect();
        assert_eq!(
            labels,
            vec![
                "Certificado PYME vigente",
                "DDJJ de bienes personales o manifestacion de bienes de c/ accionista",
                "Ventas post cierre balance",
                "Formulario alta",
                "Detalle de deudas",
                "Últimos dos balances certificados",
            ]
        );
    }

    #[test]
    fn agricola_appends_the_three_extras_in_order() {
        let base = required_documents(LegalForm::Juridica, BusinessType::NoAgricola);
        let full = required_documents(LegalForm::Juridica, BusinessType::Agricola);
        assert_eq!(full.len(), base.len() + 3);
        assert_eq!(&full[..base.len()], &base[..]);
        let extras: Vec<&str> = full[base.len()..].iter().map(|d| d.label).collect();
        assert_eq!(extras, vec!["Plan de siembra", "IP1", "IP2"]);
    }

    #[test]
    fn fisica_list_is_independent_of_juridica() {
        let docs = required_documents(LegalForm::Fisica, BusinessType::NoAgricola);
        assert_eq!(docs.len(), 6);
        assert!(docs.iter().any(|d| d.label == "Reseña"));
        assert!(!docs.iter().any(|d| d.label == "Detalle de deudas"));
    }

    #[test]
    fn unset_legal_form_yields_nothing() {
        assert!(required_documents(LegalForm::Unset, BusinessType::Agricola).is_empty());
    }

    #[test]
    fn kinds_follow_the_reference_lists() {
        let docs = required_documents(LegalForm::Juridica, BusinessType::Agricola);
        let kind_of = |label: &str| docs.iter().find(|d| d.label == label).unwrap().kind;
        assert_eq!(kind_of("Ventas post cierre balance"), DocumentKind::Template);
        assert_eq!(kind_of("Plan de siembra"), DocumentKind::Template);
        assert_eq!(kind_of("Certificado PYME vigente"), DocumentKind::Example);
        assert_eq!(
            kind_of("Últimos dos balances certificados"),
            DocumentKind::None
        );
    }

    #[test]
    fn none_kind_carries_no_reference() {
        for doc in required_documents(LegalForm::Fisica, BusinessType::Agricola) {
            match doc.kind {
                DocumentKind::None => assert!(doc.reference.is_none()),
                _ => assert!(doc.reference.is_some()),
            }
        }
    }

    mod completeness {
        use super::*;

        #[test]
        fn all_labels_attached_is_complete() {
            let required = required_documents(LegalForm::Fisica, BusinessType::NoAgricola);
            let mut attached = AttachmentSet::default();
            attach_all(&mut attached, &required);
            assert!(is_complete(&required, &attached));
        }

        #[test]
        fn one_missing_label_is_incomplete() {
            let required = required_documents(LegalForm::Fisica, BusinessType::NoAgricola);
            let mut attached = AttachmentSet::default();
            attach_all(&mut attached, &required[1..]);
            assert!(!is_complete(&required, &attached));
        }

        #[test]
        fn unrelated_extras_do_not_matter() {
            let required = required_documents(LegalForm::Fisica, BusinessType::NoAgricola);
            let mut attached = AttachmentSet::default();
            attach_all(&mut attached, &required);
            attached.attach(
                AttachmentKey::Document("Documento espontáneo".into()),
                AttachedFile {
                    file_name: "extra.pdf".into(),
                    bytes: vec![9],
                },
            );
            attached.attach(
                AttachmentKey::Shareholder(Uuid::new_v4()),
                AttachedFile {
                    file_name: "dni.jpg".into(),
                    bytes: vec![9],
                },
            );
            assert!(is_complete(&required, &attached));
        }

        #[test]
        fn empty_requirement_list_is_trivially_complete() {
            assert!(is_complete(&[], &AttachmentSet::default()));
        }
    }
}
