//! List Model
//!
//! Data structures shared by the controller and its surfaces.

use serde::{Deserialize, Serialize};

/// Whether a row or control is currently displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Shown,
    Hidden,
}

impl Visibility {
    pub fn from_shown(shown: bool) -> Self {
        if shown {
            Visibility::Shown
        } else {
            Visibility::Hidden
        }
    }

    pub fn is_shown(&self) -> bool {
        matches!(self, Visibility::Shown)
    }
}

/// An item's text paired with the handle its row was rendered under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<H> {
    pub text: String,
    pub handle: H,
}

/// Which item, if any, is being edited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditSession<H> {
    #[default]
    Idle,
    Editing { target: H },
}

impl<H: Copy> EditSession<H> {
    pub fn target(&self) -> Option<H> {
        match self {
            EditSession::Idle => None,
            EditSession::Editing { target } => Some(*target),
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, EditSession::Editing { .. })
    }
}

/// Label, icon and background color of the form's action button
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionLabel {
    pub text: String,
    /// Icon classes (e.g. "fa-solid fa-plus")
    pub icon: String,
    /// CSS background color
    pub color: String,
}

impl ActionLabel {
    pub fn new(text: &str, icon: &str, color: &str) -> Self {
        Self {
            text: text.to_string(),
            icon: icon.to_string(),
            color: color.to_string(),
        }
    }
}

/// Outcome of a confirmation-gated operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Confirmed,
    Cancelled,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_session_target() {
        let idle: EditSession<u32> = EditSession::Idle;
        assert_eq!(idle.target(), None);
        assert!(!idle.is_editing());

        let editing = EditSession::Editing { target: 7u32 };
        assert_eq!(editing.target(), Some(7));
        assert!(editing.is_editing());
    }

    #[test]
    fn test_visibility_from_shown() {
        assert_eq!(Visibility::from_shown(true), Visibility::Shown);
        assert!(!Visibility::from_shown(false).is_shown());
    }
}
