//! List page state with guarded asynchronous loads.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::storage::{Keyed, RecordId, RecordRepository};

/// What happened to a load once it settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The result was written to the page.
    Applied,
    /// A newer load started, or the page unmounted, before this one settled.
    Discarded,
}

#[derive(Debug)]
struct PageState<E> {
    items: Vec<E>,
    loading: bool,
    error: Option<String>,
}

/// Items, loading flag and error message for one list page.
///
/// Each load takes a generation ticket. A load writes its result only if
/// its ticket is still the latest and the page is still mounted.
#[derive(Debug)]
pub struct ListPage<E> {
    /// Plural noun used in the failure message ("contacts")
    noun: &'static str,
    state: Mutex<PageState<E>>,
    generation: AtomicU64,
    mounted: AtomicBool,
}

impl<E: Keyed> ListPage<E> {
    /// A mounted, empty page.
    pub fn new(noun: &'static str) -> Self {
        Self {
            noun,
            state: Mutex::new(PageState {
                items: Vec::new(),
                loading: false,
                error: None,
            }),
            generation: AtomicU64::new(0),
            mounted: AtomicBool::new(true),
        }
    }

    fn state(&self) -> MutexGuard<'_, PageState<E>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn mount(&self) {
        self.mounted.store(true, Ordering::Release);
    }

    /// Stop accepting load results. Pending loads are discarded.
    pub fn unmount(&self) {
        self.mounted.store(false, Ordering::Release);
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::Acquire)
    }

    pub fn items(&self) -> Vec<E> {
        self.state().items.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state().loading
    }

    pub fn error(&self) -> Option<String> {
        self.state().error.clone()
    }

    /// Load every record from `repo`.
    pub async fn load(&self, repo: &dyn RecordRepository<E>) -> LoadOutcome {
        let ticket = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        {
            let mut state = self.state();
            state.loading = true;
            state.error = None;
        }

        let result = repo.get_all().await;

        if !self.is_mounted() || self.generation.load(Ordering::Acquire) != ticket {
            tracing::debug!(noun = self.noun, ticket, "discarding stale page load");
            return LoadOutcome::Discarded;
        }

        let mut state = self.state();
        match result {
            Ok(items) => state.items = items,
            Err(err) => {
                tracing::error!(noun = self.noun, error = %err, "Error loading {}", self.noun);
                state.error = Some(format!("Failed to load {}", self.noun));
            }
        }
        state.loading = false;
        LoadOutcome::Applied
    }

    /// Show a newly created record at the top.
    pub fn prepend(&self, record: E) {
        self.state().items.insert(0, record);
    }

    /// Replace the record with the same id. Unknown ids are ignored.
    pub fn replace(&self, record: E) {
        let mut state = self.state();
        if let Some(slot) = state.items.iter_mut().find(|r| r.id() == record.id()) {
            *slot = record;
        }
    }

    /// Merge a saved record: replace it when editing, prepend otherwise.
    pub fn merge_saved(&self, record: E, editing: bool) {
        if editing {
            self.replace(record);
        } else {
            self.prepend(record);
        }
    }

    pub fn remove(&self, id: RecordId) {
        self.state().items.retain(|r| r.id() != id);
    }
}
