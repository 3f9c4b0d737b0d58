//! Headless Collaborators
//!
//! In-memory display surface, persistence slot and prompt.
//! They record everything the controller asks of them so the list can be
//! driven and inspected without a browser.

use std::collections::VecDeque;

use crate::codec::decode_items;
use crate::error::{ListError, ListResult};
use crate::model::{ActionLabel, Visibility};
use crate::surface::{DisplaySurface, PersistenceSlot, UserPrompt};

/// Row handle issued by `HeadlessSurface`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowId(pub u32);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlessRow {
    pub id: RowId,
    pub text: String,
    pub visibility: Visibility,
    pub editing: bool,
}

/// Display surface that keeps rows in a vector
#[derive(Debug, Clone)]
pub struct HeadlessSurface {
    rows: Vec<HeadlessRow>,
    next_id: u32,
    input: String,
    action_label: Option<ActionLabel>,
    controls: Visibility,
}

impl Default for HeadlessSurface {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            next_id: 1,
            input: String::new(),
            action_label: None,
            controls: Visibility::Hidden,
        }
    }
}

impl HeadlessSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[HeadlessRow] {
        &self.rows
    }

    pub fn row(&self, id: RowId) -> Option<&HeadlessRow> {
        self.rows.iter().find(|r| r.id == id)
    }

    /// Texts of every row, shown or not
    pub fn texts(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.text.as_str()).collect()
    }

    pub fn visible_texts(&self) -> Vec<&str> {
        self.rows
            .iter()
            .filter(|r| r.visibility.is_shown())
            .map(|r| r.text.as_str())
            .collect()
    }

    pub fn hidden_texts(&self) -> Vec<&str> {
        self.rows
            .iter()
            .filter(|r| !r.visibility.is_shown())
            .map(|r| r.text.as_str())
            .collect()
    }

    /// Rows currently marked as being edited
    pub fn editing_rows(&self) -> Vec<&HeadlessRow> {
        self.rows.iter().filter(|r| r.editing).collect()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Simulate the user typing into the form
    pub fn type_input(&mut self, text: &str) {
        self.input = text.to_string();
    }

    pub fn action_label(&self) -> Option<&ActionLabel> {
        self.action_label.as_ref()
    }

    pub fn controls(&self) -> Visibility {
        self.controls
    }
}

impl DisplaySurface for HeadlessSurface {
    type Handle = RowId;

    fn render_item(&mut self, text: &str) -> RowId {
        let id = RowId(self.next_id);
        self.next_id += 1;
        self.rows.push(HeadlessRow {
            id,
            text: text.to_string(),
            visibility: Visibility::Shown,
            editing: false,
        });
        id
    }

    fn remove_item(&mut self, handle: RowId) {
        self.rows.retain(|r| r.id != handle);
    }

    fn set_visibility(&mut self, handle: RowId, visibility: Visibility) {
        if let Some(row) = self.rows.iter_mut().find(|r| r.id == handle) {
            row.visibility = visibility;
        }
    }

    fn set_editing(&mut self, handle: RowId, editing: bool) {
        if let Some(row) = self.rows.iter_mut().find(|r| r.id == handle) {
            row.editing = editing;
        }
    }

    fn read_input(&self) -> String {
        self.input.clone()
    }

    fn write_input(&mut self, text: &str) {
        self.input = text.to_string();
    }

    fn clear_input(&mut self) {
        self.input.clear();
    }

    fn set_action_label(&mut self, label: &ActionLabel) {
        self.action_label = Some(label.clone());
    }

    fn set_controls_visibility(&mut self, visibility: Visibility) {
        self.controls = visibility;
    }
}

/// Persistence slot backed by an optional string
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    value: Option<String>,
    fail_reads: bool,
    fail_writes: bool,
    writes: usize,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot that already holds `raw`
    pub fn with_value(raw: &str) -> Self {
        Self {
            value: Some(raw.to_string()),
            ..Self::default()
        }
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Decoded contents; absent or malformed reads as empty
    pub fn items(&self) -> Vec<String> {
        self.value
            .as_deref()
            .and_then(|raw| decode_items(raw).ok())
            .unwrap_or_default()
    }

    /// Make every following read fail, like storage blocked by the browser
    pub fn set_fail_reads(&mut self, fail: bool) {
        self.fail_reads = fail;
    }

    /// Make every following write fail, like a full browser quota
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Number of successful stores and clears
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl PersistenceSlot for MemorySlot {
    fn load(&self) -> ListResult<Option<String>> {
        if self.fail_reads {
            return Err(ListError::Storage("access denied".to_string()));
        }
        Ok(self.value.clone())
    }

    fn store(&mut self, value: &str) -> ListResult<()> {
        if self.fail_writes {
            return Err(ListError::Storage("quota exceeded".to_string()));
        }
        self.value = Some(value.to_string());
        self.writes += 1;
        Ok(())
    }

    fn clear(&mut self) -> ListResult<()> {
        if self.fail_writes {
            return Err(ListError::Storage("quota exceeded".to_string()));
        }
        self.value = None;
        self.writes += 1;
        Ok(())
    }
}

/// Prompt that answers confirmations from a script and records messages
#[derive(Debug, Clone)]
pub struct ScriptedPrompt {
    answers: VecDeque<bool>,
    default_answer: bool,
    notifications: Vec<String>,
    confirmations: Vec<String>,
}

impl Default for ScriptedPrompt {
    fn default() -> Self {
        Self {
            answers: VecDeque::new(),
            default_answer: true,
            notifications: Vec::new(),
            confirmations: Vec::new(),
        }
    }
}

impl ScriptedPrompt {
    /// Accepts every confirmation until told otherwise
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the answer for the next confirmation
    pub fn answer_next(&mut self, answer: bool) {
        self.answers.push_back(answer);
    }

    /// Answer used once the queue is empty
    pub fn set_default_answer(&mut self, answer: bool) {
        self.default_answer = answer;
    }

    pub fn notifications(&self) -> &[String] {
        &self.notifications
    }

    pub fn confirmations(&self) -> &[String] {
        &self.confirmations
    }
}

impl UserPrompt for ScriptedPrompt {
    fn notify(&mut self, message: &str) {
        self.notifications.push(message.to_string());
    }

    fn confirm(&mut self, message: &str) -> bool {
        self.confirmations.push(message.to_string());
        self.answers.pop_front().unwrap_or(self.default_answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_issues_distinct_handles() {
        let mut surface = HeadlessSurface::new();
        let a = surface.render_item("a");
        let b = surface.render_item("b");
        assert_ne!(a, b);

        surface.remove_item(a);
        let c = surface.render_item("c");
        assert_ne!(a, c);
        assert_eq!(surface.texts(), vec!["b", "c"]);
    }

    #[test]
    fn test_slot_failing_writes_keep_value() {
        let mut slot = MemorySlot::with_value(r#"["a"]"#);
        slot.set_fail_writes(true);
        assert!(slot.store("[]").is_err());
        assert!(slot.clear().is_err());
        assert_eq!(slot.items(), vec!["a"]);
        assert_eq!(slot.writes(), 0);
    }

    #[test]
    fn test_prompt_script_then_default() {
        let mut prompt = ScriptedPrompt::new();
        prompt.answer_next(false);
        assert!(!prompt.confirm("first?"));
        assert!(prompt.confirm("second?"));
        assert_eq!(prompt.confirmations().len(), 2);
    }
}
