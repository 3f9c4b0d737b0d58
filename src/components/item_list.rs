//! Item List Component
//!
//! Renders the rows the controller wrote into the surface signals.
//! Clicking a row's text starts editing; the × button removes it.

use leptos::prelude::*;
use list_core::{ClickTarget, ListEvent};

use crate::context::use_app_context;
use crate::components::display_style;

#[component]
pub fn ItemList() -> impl IntoView {
    let ctx = use_app_context();
    let rows = ctx.signals.rows;

    view! {
        <ul id="item-list" class="items">
            <For
                each=move || rows.get()
                // Visibility and edit marker are part of the key so changes re-render the row
                key=|row| (row.handle, row.visible, row.editing)
                children=move |row| {
                    let handle = row.handle;
                    view! {
                        <li
                            class=if row.editing { "edit-mode" } else { "" }
                            style=display_style(row.visible, "flex")
                            on:click=move |_| ctx.dispatch(ListEvent::ItemClicked(handle, ClickTarget::Text))
                        >
                            {row.text}
                            <button
                                class="remove-item btn-link text-red"
                                on:click=move |ev| {
                                    ev.stop_propagation();
                                    ctx.dispatch(ListEvent::ItemClicked(handle, ClickTarget::RemoveButton));
                                }
                            >
                                <i class="fa-solid fa-xmark"></i>
                            </button>
                        </li>
                    }
                }
            />
        </ul>
    }
}
