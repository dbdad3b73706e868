use crate::app_core::AppCommand;
use crate::domain::CatalogState;
use crate::expansion::ExpansionState;
use crate::kernel::AppKernel;
use crate::ports::ProductSource;
use crate::viewmodel::{catalog_vm, CatalogVm, Presentation};
use catalog_core::ProductId;

/// The product list screen without any widgets attached.
///
/// Receives its kernel explicitly, triggers the first fetch on activation and
/// owns the expansion flags, which never reach the store.
pub struct ProductListView<S> {
    kernel: AppKernel<S>,
    expansion: ExpansionState,
    presentation: Presentation,
    activated: bool,
}

impl<S> ProductListView<S>
where
    S: ProductSource,
{
    pub fn new(kernel: AppKernel<S>, presentation: Presentation) -> Self {
        let expansion = ExpansionState::for_state(&kernel.store.state());
        Self {
            kernel,
            expansion,
            presentation,
            activated: false,
        }
    }

    /// First activation fetches the catalog; later calls do nothing.
    pub fn activate(&mut self) -> bool {
        if self.activated {
            return false;
        }
        self.activated = true;
        self.kernel.dispatch(AppCommand::FetchProducts);
        true
    }

    /// Fetch again, e.g. after a failure.
    pub fn refresh(&mut self) {
        self.activated = true;
        self.kernel.dispatch(AppCommand::FetchProducts);
    }

    /// Applies arrived events and realigns the expansion flags.
    pub fn tick(&mut self) -> usize {
        let applied = self.kernel.tick();
        self.sync_expansion();
        applied
    }

    /// Waits until the next event lands, then realigns the expansion flags.
    pub async fn settle(&mut self) -> bool {
        let applied = self.kernel.next_event().await;
        self.sync_expansion();
        applied
    }

    fn sync_expansion(&mut self) {
        let expansion = &mut self.expansion;
        self.kernel.store.with_state(|state| {
            if expansion.sync(state) {
                tracing::debug!("expansion flags reset for {} products", state.products.len());
            }
        });
    }

    pub fn toggle(&mut self, index: usize) -> bool {
        self.expansion.toggle(index)
    }

    fn position_of(&self, id: ProductId) -> Option<usize> {
        self.kernel
            .store
            .with_state(|state| state.products.iter().position(|p| p.id == id))
    }

    /// Toggle the card showing `id`, if it is currently displayed.
    pub fn toggle_product(&mut self, id: ProductId) -> Option<bool> {
        let index = self.position_of(id)?;
        Some(self.toggle(index))
    }

    /// Open the card showing `id`. Returns false if no such card is displayed.
    pub fn expand_product(&mut self, id: ProductId) -> bool {
        match self.position_of(id) {
            Some(index) => self.expansion.expand(index),
            None => false,
        }
    }

    pub fn is_activated(&self) -> bool {
        self.activated
    }

    pub fn state(&self) -> CatalogState {
        self.kernel.store.state()
    }

    pub fn expansion(&self) -> &ExpansionState {
        &self.expansion
    }

    pub fn set_presentation(&mut self, presentation: Presentation) {
        self.presentation = presentation;
    }

    pub fn vm(&self) -> CatalogVm {
        self.kernel
            .store
            .with_state(|state| catalog_vm(state, &self.expansion, &self.presentation))
    }
}
