use crate::domain::{CatalogState, CatalogStatus};

use super::events::DomainEvent;

pub fn reduce(mut state: CatalogState, ev: DomainEvent) -> CatalogState {
    match ev {
        DomainEvent::ProductsRequested => {
            state.status = CatalogStatus::Loading;
        }

        DomainEvent::ProductsLoaded {
            products,
            fetched_at,
        } => {
            state.products = products;
            state.revision = state.revision.wrapping_add(1);
            state.fetched_at = Some(fetched_at);
            state.status = CatalogStatus::Ready;
        }

        // Products stay as they were; only the status carries the failure.
        DomainEvent::ProductsFailed { message } => {
            state.status = CatalogStatus::Failed(message);
        }
    }
    state
}
