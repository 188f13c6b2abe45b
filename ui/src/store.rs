//! Context-provided handle to the selected flavor.
//!
//! The root provides a `FlavorStore` once; any descendant reads the current
//! flavor or changes it through `use_flavor_store()` instead of threading the
//! value and its setter through every layer.

use dioxus::logger::tracing::{debug, warn};
use dioxus::prelude::*;

use crate::core::flavors::{FlavorRecord, FlavorTable};
use crate::core::selection::{SelectOutcome, SelectionError, SelectionState};

#[derive(Clone, Copy, PartialEq)]
pub struct FlavorStore {
    state: Signal<SelectionState>,
}

impl FlavorStore {
    pub fn new(state: Signal<SelectionState>) -> Self {
        Self { state }
    }

    pub fn current(&self) -> FlavorRecord {
        self.state.read().current().clone()
    }

    pub fn selected_name(&self) -> String {
        self.state.read().selected_name().to_string()
    }

    pub fn table(&self) -> FlavorTable {
        self.state.read().table().clone()
    }

    /// Switch to `name`. Reselecting the current flavor does not notify
    /// subscribers; unknown names are logged and leave the selection as is.
    pub fn select(&mut self, name: &str) -> Result<SelectOutcome, SelectionError> {
        let target = self.state.peek().resolve(name);
        match target {
            Ok(Some(index)) => {
                self.state.with_mut(|state| state.apply(index));
                debug!(flavor = name, "flavor selected");
                Ok(SelectOutcome::Changed)
            }
            Ok(None) => Ok(SelectOutcome::Unchanged),
            Err(err) => {
                warn!(%err, "ignoring flavor selection");
                Err(err)
            }
        }
    }
}

/// Create the selection signal and provide it to descendants.
pub fn use_flavor_store_provider(init: impl FnOnce() -> SelectionState) -> FlavorStore {
    let state = use_signal(init);
    use_context_provider(|| FlavorStore::new(state))
}

/// The store provided by an ancestor `App`.
pub fn use_flavor_store() -> FlavorStore {
    use_context::<FlavorStore>()
}
