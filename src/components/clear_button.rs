//! Clear All Button Component

use leptos::prelude::*;
use list_core::ListEvent;

use crate::context::use_app_context;
use crate::components::display_style;

#[component]
pub fn ClearButton() -> impl IntoView {
    let ctx = use_app_context();
    let visible = ctx.signals.controls_visible;

    view! {
        <button
            id="clear"
            class="btn-clear"
            style=move || display_style(visible.get(), "block")
            on:click=move |_| ctx.dispatch(ListEvent::ClearClicked)
        >
            "Clear All"
        </button>
    }
}
