//! Application state management.

use crate::store::SubmissionStore;

/// Shared application state handed to every request handler.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    store: SubmissionStore,
}

impl AppState {
    /// Create state around an existing store.
    pub fn new(store: SubmissionStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &SubmissionStore {
        &self.store
    }
}
