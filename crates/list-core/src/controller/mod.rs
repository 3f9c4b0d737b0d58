//! List Controller
//!
//! Owns the item list and the edit session, mediates every user action,
//! and keeps the persistence slot equal to what the surface displays.

use tracing::{debug, error, info, warn};

use crate::codec::{decode_items, encode_items};
use crate::config::ListConfig;
use crate::error::{ListError, ListResult};
use crate::event::{ClickTarget, ListEvent};
use crate::filter::matches_filter;
use crate::model::{Decision, EditSession, Entry, Visibility};
use crate::surface::{DisplaySurface, PersistenceSlot, UserPrompt};


/// Event-driven controller over a persisted list of strings
pub struct ListController<S: DisplaySurface, P: PersistenceSlot, U: UserPrompt> {
    config: ListConfig,
    surface: S,
    slot: P,
    prompt: U,
    /// Items in insertion order, paired with their rendered rows
    entries: Vec<Entry<S::Handle>>,
    session: EditSession<S::Handle>,
}

impl<S, P, U> ListController<S, P, U>
where
    S: DisplaySurface,
    P: PersistenceSlot,
    U: UserPrompt,
{
    pub fn new(config: ListConfig, surface: S, slot: P, prompt: U) -> Self {
        Self {
            config,
            surface,
            slot,
            prompt,
            entries: Vec::new(),
            session: EditSession::Idle,
        }
    }

    // ========================
    // Operations
    // ========================

    /// Load stored items, render them in stored order, and reset the form
    ///
    /// Absent, unreadable or malformed stored data starts an empty list.
    /// The slot is only read here.
    pub fn initialize(&mut self) -> ListResult<()> {
        for entry in self.entries.drain(..) {
            self.surface.remove_item(entry.handle);
        }
        self.session = EditSession::Idle;

        for text in self.load_stored() {
            let handle = self.surface.render_item(&text);
            self.entries.push(Entry { text, handle });
        }
        info!(count = self.entries.len(), "loaded items");

        self.reset_ui();
        Ok(())
    }

    /// Add `text`, or replace the item under edit with it
    pub fn submit(&mut self, text: &str) -> ListResult<()> {
        if text.is_empty() {
            debug!("rejected empty submit");
            self.prompt.notify(&self.config.empty_input_message);
            return Err(ListError::EmptyInput);
        }

        let editing = self
            .session
            .target()
            .filter(|target| self.position(*target).is_some());

        let duplicate = match editing {
            Some(target) => {
                self.config.check_duplicates_on_edit
                    && self
                        .entries
                        .iter()
                        .any(|e| e.handle != target && e.text == text)
            }
            None => self.contains(text),
        };
        if duplicate {
            debug!(text, "rejected duplicate submit");
            self.prompt.notify(&self.config.duplicate_message);
            return Err(ListError::Duplicate(text.to_string()));
        }

        if let Some(target) = editing {
            if let Some(index) = self.position(target) {
                let old = self.entries.remove(index);
                self.surface.remove_item(old.handle);
                info!(from = %old.text, to = text, "updated item");
            }
            self.session = EditSession::Idle;
        } else {
            info!(text, "added item");
        }

        let handle = self.surface.render_item(text);
        self.entries.push(Entry {
            text: text.to_string(),
            handle,
        });

        self.reset_ui();
        self.persist()
    }

    /// Submit whatever the surface input currently holds
    pub fn submit_current_input(&mut self) -> ListResult<()> {
        let text = self.surface.read_input();
        self.submit(&text)
    }

    /// Start editing the row under `handle`
    pub fn select_for_edit(&mut self, handle: S::Handle) -> ListResult<()> {
        let index = self.position(handle).ok_or(ListError::UnknownItem)?;

        if let Some(previous) = self.session.target() {
            if previous != handle && self.position(previous).is_some() {
                self.surface.set_editing(previous, false);
            }
        }

        self.surface.set_editing(handle, true);
        self.session = EditSession::Editing { target: handle };
        self.surface.write_input(&self.entries[index].text);
        self.surface.set_action_label(&self.config.update_label);
        debug!(text = %self.entries[index].text, "editing item");
        Ok(())
    }

    /// Remove the row under `handle` after confirmation
    pub fn remove_item(&mut self, handle: S::Handle) -> ListResult<Decision> {
        let index = self.position(handle).ok_or(ListError::UnknownItem)?;

        if !self.prompt.confirm(&self.config.confirm_message) {
            debug!(text = %self.entries[index].text, "remove cancelled");
            return Ok(Decision::Cancelled);
        }

        let entry = self.entries.remove(index);
        self.surface.remove_item(entry.handle);
        info!(text = %entry.text, "removed item");

        self.reset_ui();
        self.persist()?;
        Ok(Decision::Confirmed)
    }

    /// Remove every row after confirmation
    ///
    /// With `clear_storage_on_cancel` the slot is cleared even when the user
    /// declines, leaving the rows displayed until the next load.
    pub fn clear_all(&mut self) -> ListResult<Decision> {
        let decision = if self.prompt.confirm(&self.config.confirm_message) {
            let count = self.entries.len();
            for entry in self.entries.drain(..) {
                self.surface.remove_item(entry.handle);
            }
            info!(count, "cleared items");
            Decision::Confirmed
        } else {
            Decision::Cancelled
        };

        let clear_slot = decision == Decision::Confirmed || self.config.clear_storage_on_cancel;
        if decision == Decision::Cancelled {
            if clear_slot {
                warn!(
                    displayed = self.entries.len(),
                    "clear cancelled, stored items cleared anyway"
                );
            } else {
                debug!("clear cancelled");
            }
        }

        self.reset_ui();

        if clear_slot {
            self.slot.clear().map_err(|e| {
                error!(error = %e, "failed to clear stored items");
                e
            })?;
        }
        Ok(decision)
    }

    /// Show rows containing `query` (case-insensitive), hide the rest
    ///
    /// Returns the number of rows left shown.
    pub fn filter(&mut self, query: &str) -> usize {
        let mut shown = 0;
        for entry in &self.entries {
            let visible = matches_filter(&entry.text, query);
            if visible {
                shown += 1;
            }
            self.surface
                .set_visibility(entry.handle, Visibility::from_shown(visible));
        }
        shown
    }

    /// Route a surface event to its operation
    pub fn dispatch(&mut self, event: ListEvent<S::Handle>) -> ListResult<()> {
        let result = match event {
            ListEvent::Submit(text) => self.submit(&text),
            ListEvent::SubmitInput => self.submit_current_input(),
            ListEvent::ItemClicked(handle, ClickTarget::Text) => self.select_for_edit(handle),
            ListEvent::ItemClicked(handle, ClickTarget::RemoveButton) => {
                self.remove_item(handle).map(|_| ())
            }
            ListEvent::FilterChanged(query) => {
                self.filter(&query);
                Ok(())
            }
            ListEvent::ClearClicked => self.clear_all().map(|_| ()),
        };

        match result {
            Err(ListError::UnknownItem) => {
                debug!("ignored click on unknown item");
                Ok(())
            }
            other => other,
        }
    }

    // ========================
    // Accessors
    // ========================

    /// Item texts in display order
    pub fn items(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.text.as_str()).collect()
    }

    pub fn entries(&self) -> &[Entry<S::Handle>] {
        &self.entries
    }

    pub fn handle_of(&self, text: &str) -> Option<S::Handle> {
        self.entries.iter().find(|e| e.text == text).map(|e| e.handle)
    }

    pub fn edit_session(&self) -> EditSession<S::Handle> {
        self.session
    }

    pub fn is_editing(&self) -> bool {
        self.session.is_editing()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn config(&self) -> &ListConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn slot(&self) -> &P {
        &self.slot
    }

    pub fn slot_mut(&mut self) -> &mut P {
        &mut self.slot
    }

    pub fn prompt(&self) -> &U {
        &self.prompt
    }

    pub fn prompt_mut(&mut self) -> &mut U {
        &mut self.prompt
    }

    // ========================
    // Helpers
    // ========================

    fn position(&self, handle: S::Handle) -> Option<usize> {
        self.entries.iter().position(|e| e.handle == handle)
    }

    fn contains(&self, text: &str) -> bool {
        self.entries.iter().any(|e| e.text == text)
    }

    fn load_stored(&self) -> Vec<String> {
        match self.slot.load() {
            Ok(None) => Vec::new(),
            Ok(Some(raw)) => decode_items(&raw).unwrap_or_else(|e| {
                warn!(error = %e, "discarding stored items");
                Vec::new()
            }),
            Err(e) => {
                warn!(error = %e, "could not read stored items");
                Vec::new()
            }
        }
    }

    /// Overwrite the slot with the current list
    fn persist(&mut self) -> ListResult<()> {
        let texts: Vec<String> = self.entries.iter().map(|e| e.text.clone()).collect();
        self.slot.store(&encode_items(&texts)).map_err(|e| {
            error!(error = %e, "failed to persist items");
            e
        })
    }

    /// Clear the input, end the edit session, restore the add label and
    /// show the aux controls only when there is something to clear or filter
    fn reset_ui(&mut self) {
        self.surface.clear_input();
        if let Some(target) = self.session.target() {
            if self.position(target).is_some() {
                self.surface.set_editing(target, false);
            }
        }
        self.session = EditSession::Idle;
        self.surface.set_action_label(&self.config.add_label);
        self.surface
            .set_controls_visibility(Visibility::from_shown(!self.entries.is_empty()));
    }
}
