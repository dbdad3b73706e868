use crate::domain::CatalogState;

/// Per-card expand/collapse flags, index-aligned with the displayed products.
///
/// Lives with the view, never in the store. Resets to all-collapsed whenever
/// the store replaces its product list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionState {
    flags: Vec<bool>,
    revision: u64,
}

impl ExpansionState {
    pub fn for_state(state: &CatalogState) -> Self {
        Self {
            flags: vec![false; state.products.len()],
            revision: state.revision,
        }
    }

    /// True while the flags still describe the product list held by `state`.
    pub fn matches(&self, state: &CatalogState) -> bool {
        self.revision == state.revision && self.flags.len() == state.products.len()
    }

    /// Realign with `state`. Returns true if the flags were reset.
    pub fn sync(&mut self, state: &CatalogState) -> bool {
        if self.matches(state) {
            return false;
        }
        *self = Self::for_state(state);
        true
    }

    /// Flip one card. Indices past the end are ignored.
    pub fn toggle(&mut self, index: usize) -> bool {
        match self.flags.get_mut(index) {
            Some(flag) => {
                *flag = !*flag;
                *flag
            }
            None => false,
        }
    }

    /// Open one card, leaving it open if it already is.
    pub fn expand(&mut self, index: usize) -> bool {
        match self.flags.get_mut(index) {
            Some(flag) => {
                *flag = true;
                true
            }
            None => false,
        }
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.flags.get(index).copied().unwrap_or(false)
    }

    pub fn flags(&self) -> &[bool] {
        &self.flags
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}
