//! Item List App
//!
//! Builds the controller over browser collaborators, loads stored items,
//! and lays out the form, filter, list and clear button.

use leptos::prelude::*;
use list_core::{ListConfig, ListController};
use tracing::error;

use crate::components::{ClearButton, FilterInput, ItemForm, ItemList};
use crate::context::AppContext;
use crate::dialog::BrowserPrompt;
use crate::storage::LocalStorageSlot;
use crate::surface::{SignalSurface, SurfaceSignals};

#[component]
pub fn App(config: ListConfig) -> impl IntoView {
    let signals = SurfaceSignals::new(config.add_label.clone());
    let slot = LocalStorageSlot::new(&config.storage_key);
    let mut controller =
        ListController::new(config, SignalSurface::new(signals), slot, BrowserPrompt);

    if let Err(e) = controller.initialize() {
        error!(error = %e, "failed to initialize item list");
    }

    // Provide context to all children
    provide_context(AppContext::new(controller, signals));

    view! {
        <div class="container">
            <header>
                <h1>"Shopping List"</h1>
            </header>
            <ItemForm />
            <FilterInput />
            <ItemList />
            <ClearButton />
        </div>
    }
}
