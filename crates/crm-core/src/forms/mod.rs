//! Record forms: a text draft, synchronous validation and a single
//! in-flight submission.
//!
//! Validation never touches a repository. A draft that fails validation
//! keeps its field errors and is reported with one notice.

mod activity;
mod company;
mod contact;
mod report;

use std::collections::BTreeMap;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::error::{CrmError, Result};
use crate::notify::Notifier;
use crate::storage::{Entity, Keyed, RecordId, RecordRepository};

pub use activity::ActivityDraft;
pub use company::{normalize_website, CompanyDraft};
pub use contact::ContactDraft;
pub use report::ReportDraft;

/// Notice sent when a draft fails validation.
pub const FIX_ERRORS_NOTICE: &str = "Please fix the form errors";

/// Validation messages keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn remove(&mut self, field: &str) -> Option<String> {
        self.0.remove(field)
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field, message)?;
            first = false;
        }
        Ok(())
    }
}

/// Editable text state for one record kind.
pub trait FormDraft: Clone + Default + Send + Sync + 'static {
    type Record: Keyed;

    /// Field names accepted by [`FormDraft::set_field`].
    const FIELDS: &'static [&'static str];

    /// Draft prefilled from an existing record.
    fn from_record(record: &Self::Record) -> Self;

    /// Set a field from user text.
    fn set_field(&mut self, field: &str, value: String) -> Result<()>;

    /// Check the draft. An empty result means it can be submitted.
    fn validate(&self) -> FieldErrors;

    /// Mutation input for a validated draft.
    fn to_input(&self) -> <Self::Record as Entity>::Input;
}

/// Record `message` against `field` when `value` is blank.
pub(crate) fn required(errors: &mut FieldErrors, field: &'static str, value: &str, message: &str) {
    if value.trim().is_empty() {
        errors.insert(field, message);
    }
}

pub(crate) fn unknown_field(field: &str) -> CrmError {
    CrmError::InvalidInput(format!("Unknown field: {}", field))
}

struct FormState<D> {
    draft: D,
    errors: FieldErrors,
}

/// Clears the in-flight flag when the submission settles.
struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// A create or edit form over draft `D`.
pub struct Form<D: FormDraft> {
    state: Mutex<FormState<D>>,
    editing: Option<RecordId>,
    in_flight: AtomicBool,
}

impl<D: FormDraft> Default for Form<D> {
    fn default() -> Self {
        Self::create(D::default())
    }
}

impl<D: FormDraft> Form<D> {
    /// Form that creates a new record from `draft`.
    pub fn create(draft: D) -> Self {
        Self {
            state: Mutex::new(FormState {
                draft,
                errors: FieldErrors::new(),
            }),
            editing: None,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Form that edits `record`, prefilled from it.
    pub fn edit(record: &D::Record) -> Self {
        let mut form = Self::create(D::from_record(record));
        form.editing = Some(record.id());
        form
    }

    fn state(&self) -> MutexGuard<'_, FormState<D>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Id of the record being edited, if any.
    pub fn editing(&self) -> Option<RecordId> {
        self.editing
    }

    pub fn draft(&self) -> D {
        self.state().draft.clone()
    }

    pub fn errors(&self) -> FieldErrors {
        self.state().errors.clone()
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Set one field. Its pending error, if any, is cleared.
    pub fn set(&self, field: &str, value: impl Into<String>) -> Result<()> {
        let mut state = self.state();
        state.draft.set_field(field, value.into())?;
        state.errors.remove(field);
        Ok(())
    }

    /// Validate the draft and keep the resulting errors.
    pub fn validate(&self) -> bool {
        let mut state = self.state();
        state.errors = state.draft.validate();
        state.errors.is_empty()
    }

    /// Validate and submit through `repo`.
    ///
    /// Returns the saved record, or `None` when the repository absorbed a
    /// failure (it has already notified). Invalid drafts never reach the
    /// repository.
    pub async fn submit(
        &self,
        repo: &dyn RecordRepository<D::Record>,
        notifier: &dyn Notifier,
    ) -> Result<Option<D::Record>> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(CrmError::InProgress(format!(
                "{} form is already submitting",
                <D::Record as Entity>::KIND
            )));
        }
        let _guard = InFlight(&self.in_flight);

        let input = {
            let mut state = self.state();
            state.errors = state.draft.validate();
            if !state.errors.is_empty() {
                notifier.error(FIX_ERRORS_NOTICE);
                return Err(CrmError::Validation(state.errors.clone()));
            }
            state.draft.to_input()
        };

        let kind = <D::Record as Entity>::KIND;
        let (result, verb) = match self.editing {
            Some(id) => (repo.update(id, &input).await, ("updated", "updating")),
            None => (repo.create(&input).await, ("created", "creating")),
        };

        match result {
            Ok(Some(record)) => {
                notifier.success(&format!("{} {} successfully", kind, verb.0));
                Ok(Some(record))
            }
            Ok(None) => Ok(None),
            Err(err) => {
                tracing::error!(kind, error = %err, "Error saving {}", kind.to_lowercase());
                notifier.error(&format!("Error {} {}", verb.1, kind.to_lowercase()));
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_errors_display() {
        let mut errors = FieldErrors::new();
        errors.insert("name", "Company name is required");
        errors.insert("mrr", "MRR must be 0 or greater");
        assert_eq!(
            errors.to_string(),
            "mrr: MRR must be 0 or greater; name: Company name is required"
        );
        assert_eq!(errors.remove("name").as_deref(), Some("Company name is required"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_setting_a_field_clears_its_error() {
        let form: Form<ActivityDraft> = Form::default();
        assert!(!form.validate());
        assert!(form.errors().contains("description"));
        form.set("description", "Short").unwrap();
        assert!(!form.errors().contains("description"));
        assert!(form.errors().contains("contactId"));
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let form: Form<ContactDraft> = Form::default();
        assert!(matches!(form.set("nickname", "Ace"), Err(CrmError::InvalidInput(_))));
    }
}
