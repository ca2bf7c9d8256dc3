//! Shareholder roster for juridica applicants
//!
//! The roster is the sole mutator of shareholder records: `save` runs the
//! sub-validation first and touches nothing on failure, `remove` is a
//! silent no-op when the id is unknown. The 100% participation invariant
//! is only enforced at submission time, not on every save.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::validate::{validate_shareholder, FieldErrors};

/// One principal of a juridica applicant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shareholder {
    /// Stable across edits; generated once at creation.
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// CUIT/CUIL, 11 digits.
    pub tax_id: String,
    /// 1..=100 inclusive.
    pub participation_percent: u8,
}

impl Shareholder {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Raw modal input for creating or editing a shareholder. `id` is `None`
/// for a new record; `participation` is the uncoerced text entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShareholderDraft {
    pub id: Option<Uuid>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub tax_id: String,
    pub participation: String,
}

impl ShareholderDraft {
    /// Prefill a draft from an existing record for the edit flow.
    pub fn from_shareholder(shareholder: &Shareholder) -> Self {
        Self {
            id: Some(shareholder.id),
            first_name: shareholder.first_name.clone(),
            last_name: shareholder.last_name.clone(),
            email: shareholder.email.clone(),
            tax_id: shareholder.tax_id.clone(),
            participation: shareholder.participation_percent.to_string(),
        }
    }
}

/// Ordered collection of shareholders inside the form record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShareholderRoster(Vec<Shareholder>);

impl ShareholderRoster {
    /// Validate and persist a draft. A draft whose id matches an existing
    /// record replaces it in place (order preserved); anything else is
    /// appended under a freshly generated id. Returns the id of the saved
    /// record.
    pub fn save(&mut self, draft: ShareholderDraft) -> Result<Uuid, FieldErrors> {
        let percent = validate_shareholder(&draft)?;
        let existing = draft
            .id
            .and_then(|id| self.0.iter().position(|s| s.id == id));
        match existing {
            Some(index) => {
                let id = self.0[index].id;
                self.0[index] = Shareholder {
                    id,
                    first_name: draft.first_name,
                    last_name: draft.last_name,
                    email: draft.email,
                    tax_id: draft.tax_id,
                    participation_percent: percent,
                };
                Ok(id)
            }
            None => {
                let id = Uuid::new_v4();
                self.0.push(Shareholder {
                    id,
                    first_name: draft.first_name,
                    last_name: draft.last_name,
                    email: draft.email,
                    tax_id: draft.tax_id,
                    participation_percent: percent,
                });
                Ok(id)
            }
        }
    }

    /// Remove by id. Returns whether a record was actually removed.
    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.0.len();
        self.0.retain(|s| s.id != id);
        self.0.len() != before
    }

    pub fn get(&self, id: Uuid) -> Option<&Shareholder> {
        self.0.iter().find(|s| s.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Shareholder> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Shareholder] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn total_participation(&self) -> u32 {
        self.0.iter().map(|s| s.participation_percent as u32).sum()
    }

    /// Submission-time aggregate check: a non-empty roster summing to
    /// exactly 100%. Distinct from per-shareholder field errors.
    pub fn check_aggregate(&self) -> Result<(), crate::error::SubmitError> {
        if self.0.is_empty() {
            return Err(crate::error::SubmitError::EmptyRoster);
        }
        let total = self.total_participation();
        if total != 100 {
            return Err(crate::error::SubmitError::Participation { total });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SubmitError;
    use crate::validate::Field;

    fn draft(name: &str, percent: &str) -> ShareholderDraft {
        ShareholderDraft {
            id: None,
            first_name: name.into(),
            last_name: "Suárez".into(),
            email: format!("{}@example.com", name.to_lowercase()),
            tax_id: "27123456789".into(),
            participation: percent.into(),
        }
    }

    mod save {
        use super::*;

        #[test]
        fn new_draft_appends_with_fresh_id() {
            let mut roster = ShareholderRoster::default();
            let first = roster.save(draft("Ana", "60")).unwrap();
            let second = roster.save(draft("Bruno", "40")).unwrap();
            assert_ne!(first, second);
            assert_eq!(roster.len(), 2);
            assert_eq!(roster.as_slice()[0].first_name, "Ana");
        }

        #[test]
        fn matching_id_replaces_in_place() {
            let mut roster = ShareholderRoster::default();
            let ana = roster.save(draft("Ana", "60")).unwrap();
            roster.save(draft("Bruno", "40")).unwrap();

            let mut edit = ShareholderDraft::from_shareholder(roster.get(ana).unwrap());
            edit.participation = "55".into();
            let saved = roster.save(edit).unwrap();

            assert_eq!(saved, ana);
            assert_eq!(roster.len(), 2);
            assert_eq!(roster.as_slice()[0].participation_percent, 55);
            // Order preserved: Ana stays first.
            assert_eq!(roster.as_slice()[0].id, ana);
        }

        #[test]
        fn unknown_id_gets_a_new_one() {
            let mut roster = ShareholderRoster::default();
            let stale = ShareholderDraft {
                id: Some(Uuid::new_v4()),
                ..draft("Ana", "100")
            };
            let ghost = stale.id.unwrap();
            let saved = roster.save(stale).unwrap();
            assert_ne!(saved, ghost);
            assert_eq!(roster.len(), 1);
        }

        #[test]
        fn repeated_identical_edit_is_idempotent() {
            let mut roster = ShareholderRoster::default();
            let id = roster.save(draft("Ana", "100")).unwrap();
            let edit = ShareholderDraft::from_shareholder(roster.get(id).unwrap());
            roster.save(edit.clone()).unwrap();
            roster.save(edit).unwrap();
            assert_eq!(roster.len(), 1);
        }

        #[test]
        fn invalid_draft_mutates_nothing() {
            let mut roster = ShareholderRoster::default();
            roster.save(draft("Ana", "60")).unwrap();
            let errors = roster.save(draft("Bruno", "0")).unwrap_err();
            assert!(errors.contains_key(&Field::Participation));
            assert_eq!(roster.len(), 1);
        }
    }

    mod remove {
        use super::*;

        #[test]
        fn removes_matching_record() {
            let mut roster = ShareholderRoster::default();
            let id = roster.save(draft("Ana", "100")).unwrap();
            assert!(roster.remove(id));
            assert!(roster.is_empty());
        }

        #[test]
        fn absent_id_is_a_noop() {
            let mut roster = ShareholderRoster::default();
            roster.save(draft("Ana", "100")).unwrap();
            assert!(!roster.remove(Uuid::new_v4()));
            assert_eq!(roster.len(), 1);
        }
    }

    mod aggregate {
        use super::*;

        #[test]
        fn empty_roster_fails() {
            let roster = ShareholderRoster::default();
            assert_eq!(roster.check_aggregate(), Err(SubmitError::EmptyRoster));
        }

        #[test]
        fn exactly_100_passes() {
            let mut roster = ShareholderRoster::default();
            roster.save(draft("Ana", "60")).unwrap();
            roster.save(draft("Bruno", "40")).unwrap();
            assert_eq!(roster.check_aggregate(), Ok(()));
        }

        #[test]
        fn off_by_one_totals_fail() {
            for (a, b, total) in [("60", "41", 101), ("60", "39", 99)] {
                let mut roster = ShareholderRoster::default();
                roster.save(draft("Ana", a)).unwrap();
                roster.save(draft("Bruno", b)).unwrap();
                assert_eq!(
                    roster.check_aggregate(),
                    Err(SubmitError::Participation { total })
                );
            }
        }

        #[test]
        fn single_full_owner_passes() {
            let mut roster = ShareholderRoster::default();
            roster.save(draft("Ana", "100")).unwrap();
            assert_eq!(roster.check_aggregate(), Ok(()));
        }
    }
}
