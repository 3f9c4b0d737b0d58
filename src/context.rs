//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use list_core::{ListController, ListEvent};
use tracing::{debug, error, warn};

use crate::dialog::BrowserPrompt;
use crate::storage::LocalStorageSlot;
use crate::surface::{RowHandle, SignalSurface, SurfaceSignals};

pub type WebController = ListController<SignalSurface, LocalStorageSlot, BrowserPrompt>;

/// Controller and the signals it renders into
#[derive(Clone, Copy)]
pub struct AppContext {
    controller: StoredValue<WebController, LocalStorage>,
    pub signals: SurfaceSignals,
}

impl AppContext {
    pub fn new(controller: WebController, signals: SurfaceSignals) -> Self {
        Self {
            controller: StoredValue::new_local(controller),
            signals,
        }
    }

    /// Run a user event through the controller
    ///
    /// Validation failures were already shown to the user.
    pub fn dispatch(&self, event: ListEvent<RowHandle>) {
        match self.controller.try_update_value(|c| c.dispatch(event)) {
            Some(Ok(())) => {}
            Some(Err(e)) if e.is_validation() => debug!(error = %e, "input rejected"),
            Some(Err(e)) => error!(error = %e, "list operation failed"),
            None => warn!("list controller disposed"),
        }
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
