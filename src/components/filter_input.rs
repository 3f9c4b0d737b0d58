//! Filter Input Component

use leptos::prelude::*;
use list_core::ListEvent;

use crate::context::use_app_context;
use crate::components::display_style;

#[component]
pub fn FilterInput() -> impl IntoView {
    let ctx = use_app_context();
    let visible = ctx.signals.controls_visible;

    view! {
        <div class="filter" style=move || display_style(visible.get(), "block")>
            <input
                type="text"
                class="form-input-filter"
                id="filter"
                placeholder="Filter Items"
                on:input=move |ev| ctx.dispatch(ListEvent::FilterChanged(event_target_value(&ev)))
            />
        </div>
    }
}
