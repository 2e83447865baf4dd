//! Shared application state.

use cohort_db::RecordStore;

/// State handed to every handler.
///
/// The store is constructed by the caller and injected here, so tests can
/// hand in an in-memory store.
pub struct AppState {
    pub store: RecordStore,
}

impl AppState {
    #[must_use]
    pub const fn new(store: RecordStore) -> Self {
        Self { store }
    }
}
