//! Collaborator Traits
//!
//! Abstract interfaces the controller drives.
//! Implementations can render with Leptos, keep rows in memory, etc.

use std::fmt::Debug;

use crate::error::ListResult;
use crate::model::{ActionLabel, Visibility};

/// Renders list rows and owns the form's input state
///
/// The controller never mutates rows except through these calls.
pub trait DisplaySurface {
    /// Opaque row handle returned by `render_item`
    type Handle: Copy + Eq + Debug;

    /// Append a row showing `text` and return its handle
    fn render_item(&mut self, text: &str) -> Self::Handle;

    /// Remove a row
    fn remove_item(&mut self, handle: Self::Handle);

    /// Show or hide a row
    fn set_visibility(&mut self, handle: Self::Handle, visibility: Visibility);

    /// Mark or unmark a row as the one being edited
    fn set_editing(&mut self, handle: Self::Handle, editing: bool);

    fn read_input(&self) -> String;

    fn write_input(&mut self, text: &str);

    fn clear_input(&mut self);

    /// Relabel and recolor the form's action button
    fn set_action_label(&mut self, label: &ActionLabel);

    /// Show or hide the clear-all button and the filter input
    fn set_controls_visibility(&mut self, visibility: Visibility);
}

/// A single named key holding the serialized item sequence
pub trait PersistenceSlot {
    /// Raw stored value, `None` when the key is absent
    fn load(&self) -> ListResult<Option<String>>;

    /// Overwrite the stored value
    fn store(&mut self, value: &str) -> ListResult<()>;

    /// Remove the key
    fn clear(&mut self) -> ListResult<()>;
}

/// Blocking user notifications and yes/no confirmation
pub trait UserPrompt {
    fn notify(&mut self, message: &str);

    /// Returns true when the user accepts
    fn confirm(&mut self, message: &str) -> bool;
}
