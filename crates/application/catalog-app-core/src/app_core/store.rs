use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::domain::CatalogState;

use super::{events::DomainEvent, reducer::reduce};

/// Shared handle to the catalog state. Clones point at the same state.
#[derive(Clone, Default)]
pub struct AppStore {
    inner: Arc<Mutex<CatalogState>>,
}

impl AppStore {
    pub fn new(state: CatalogState) -> Self {
        Self {
            inner: Arc::new(Mutex::new(state)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, CatalogState> {
        // The reducer is pure, so a panic elsewhere cannot leave half-applied state.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn state(&self) -> CatalogState {
        self.lock().clone()
    }

    pub fn apply(&self, ev: DomainEvent) {
        let mut guard = self.lock();
        let next = reduce(guard.clone(), ev);
        *guard = next;
    }

    pub fn with_state<R>(&self, f: impl FnOnce(&CatalogState) -> R) -> R {
        f(&self.lock())
    }
}
