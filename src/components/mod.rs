//! UI Components
//!
//! Leptos components reading the surface signals from `AppContext`.

mod clear_button;
mod filter_input;
mod item_form;
mod item_list;

pub use clear_button::ClearButton;
pub use filter_input::FilterInput;
pub use item_form::ItemForm;
pub use item_list::ItemList;

/// Inline `display` style for an element that is hidden rather than removed
pub fn display_style(visible: bool, shown: &str) -> String {
    if visible {
        format!("display: {};", shown)
    } else {
        "display: none;".to_string()
    }
}
