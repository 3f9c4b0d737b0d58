//! List Configuration
//!
//! Storage key, user-facing messages and action button styling.
//! Every field has a default so partial JSON overrides work.

use serde::Deserialize;

use crate::error::{ListError, ListResult};
use crate::model::ActionLabel;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    /// Key of the persistence slot
    pub storage_key: String,
    pub empty_input_message: String,
    pub duplicate_message: String,
    /// Shown before remove and clear-all
    pub confirm_message: String,
    /// Action button while idle
    pub add_label: ActionLabel,
    /// Action button while an item is being edited
    pub update_label: ActionLabel,
    /// Reject edit-submits whose new text matches another item
    pub check_duplicates_on_edit: bool,
    /// Clear the slot even when clear-all is cancelled
    pub clear_storage_on_cancel: bool,
    /// Console log level name ("error" through "trace")
    pub log_level: String,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            storage_key: "items".to_string(),
            empty_input_message: "Please add an item".to_string(),
            duplicate_message: "That item already exists!".to_string(),
            confirm_message: "Are you sure?".to_string(),
            add_label: ActionLabel::new("Add Item", "fa-solid fa-plus", "#333"),
            update_label: ActionLabel::new("Update Item", "fa-solid fa-pen", "#228B22"),
            check_duplicates_on_edit: false,
            clear_storage_on_cancel: true,
            log_level: "info".to_string(),
        }
    }
}

impl ListConfig {
    /// Parse a (possibly partial) JSON override
    pub fn from_json(raw: &str) -> ListResult<Self> {
        serde_json::from_str(raw).map_err(|e| ListError::InvalidConfig(e.to_string()))
    }
}
