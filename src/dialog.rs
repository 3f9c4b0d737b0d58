//! Browser Dialogs
//!
//! `UserPrompt` over `window.alert` and `window.confirm`.

use std::fmt::Debug;

use list_core::UserPrompt;
use tracing::warn;

pub struct BrowserPrompt;

impl UserPrompt for BrowserPrompt {
    fn notify(&mut self, message: &str) {
        let Some(window) = web_sys::window() else {
            warn!(message, "no window for alert");
            return;
        };
        checked("alert", message, window.alert_with_message(message));
    }

    fn confirm(&mut self, message: &str) -> bool {
        let Some(window) = web_sys::window() else {
            warn!(message, "no window for confirm");
            return false;
        };
        checked("confirm", message, window.confirm_with_message(message)).unwrap_or(false)
    }
}

/// Unwrap a dialog result, logging the failure
fn checked<T, E: Debug>(dialog: &str, message: &str, result: Result<T, E>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(dialog, message, error = ?e, "dialog failed");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_passes_answer_through() {
        assert_eq!(checked::<_, ()>("confirm", "Are you sure?", Ok(true)), Some(true));
        assert_eq!(checked::<_, ()>("alert", "Please add an item", Ok(())), Some(()));
    }

    #[test]
    fn test_checked_failure_is_none() {
        let blocked: Result<bool, &str> = Err("dialogs blocked");
        assert_eq!(checked("confirm", "Are you sure?", blocked), None);
        assert!(!checked("confirm", "Are you sure?", blocked).unwrap_or(false));
    }
}
