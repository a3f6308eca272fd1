//! Shared handler state

use tokio::sync::{Mutex, MutexGuard};

use crate::store::MovieStore;

/// Movie state shared across handlers
///
/// One lock guards the whole store. Handlers hold it for the full
/// check-then-mutate sequence of a request, so id assignment and
/// existence checks never interleave with another writer.
pub struct MovieState {
    store: Mutex<MovieStore>,
}

impl MovieState {
    pub fn new(store: MovieStore) -> Self {
        Self {
            store: Mutex::new(store),
        }
    }

    /// Locks the store for the duration of a request.
    pub async fn store(&self) -> MutexGuard<'_, MovieStore> {
        self.store.lock().await
    }
}

impl Default for MovieState {
    fn default() -> Self {
        Self::new(MovieStore::default())
    }
}
