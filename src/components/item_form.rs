//! Item Form Component
//!
//! Text input plus the add/update action button.

use leptos::prelude::*;
use list_core::ListEvent;

use crate::context::use_app_context;

#[component]
pub fn ItemForm() -> impl IntoView {
    let ctx = use_app_context();
    let input = ctx.signals.input;
    let action = ctx.signals.action;

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.dispatch(ListEvent::SubmitInput);
    };

    view! {
        <form id="item-form" on:submit=on_submit>
            <div class="form-control">
                <input
                    type="text"
                    class="form-input"
                    id="item-input"
                    placeholder="Enter Item"
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                />
            </div>
            <div class="form-control">
                <button
                    type="submit"
                    class="btn"
                    style=move || format!("background-color: {};", action.get().color)
                >
                    <i class=move || action.get().icon></i>
                    " "
                    {move || action.get().text}
                </button>
            </div>
        </form>
    }
}
