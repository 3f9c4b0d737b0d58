//! Signal Display Surface
//!
//! Implements `DisplaySurface` by writing Leptos signals; the components
//! only read them.

use leptos::prelude::*;
use list_core::{ActionLabel, DisplaySurface, Visibility};

/// Handle of a rendered row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowHandle(pub u32);

/// One `<li>` in the item list
#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    pub handle: RowHandle,
    pub text: String,
    pub visible: bool,
    pub editing: bool,
}

/// Reactive state the components render from
#[derive(Clone, Copy)]
pub struct SurfaceSignals {
    pub rows: RwSignal<Vec<RowView>>,
    /// Form input, bound both ways
    pub input: RwSignal<String>,
    pub action: RwSignal<ActionLabel>,
    /// Clear button and filter input
    pub controls_visible: RwSignal<bool>,
}

impl SurfaceSignals {
    pub fn new(action: ActionLabel) -> Self {
        Self {
            rows: RwSignal::new(Vec::new()),
            input: RwSignal::new(String::new()),
            action: RwSignal::new(action),
            controls_visible: RwSignal::new(false),
        }
    }
}

/// Display surface owned by the controller
pub struct SignalSurface {
    signals: SurfaceSignals,
    next_id: u32,
}

impl SignalSurface {
    pub fn new(signals: SurfaceSignals) -> Self {
        Self { signals, next_id: 1 }
    }

    fn update_row(&self, handle: RowHandle, f: impl FnOnce(&mut RowView)) {
        self.signals.rows.update(|rows| {
            if let Some(row) = rows.iter_mut().find(|r| r.handle == handle) {
                f(row);
            }
        });
    }
}

impl DisplaySurface for SignalSurface {
    type Handle = RowHandle;

    fn render_item(&mut self, text: &str) -> RowHandle {
        let handle = RowHandle(self.next_id);
        self.next_id += 1;
        self.signals.rows.update(|rows| {
            rows.push(RowView {
                handle,
                text: text.to_string(),
                visible: true,
                editing: false,
            })
        });
        handle
    }

    fn remove_item(&mut self, handle: RowHandle) {
        self.signals.rows.update(|rows| rows.retain(|r| r.handle != handle));
    }

    fn set_visibility(&mut self, handle: RowHandle, visibility: Visibility) {
        let visible = visibility.is_shown();
        // Skip no-op writes so filtering doesn't re-render unchanged rows.
        let changed = self.signals.rows.with_untracked(|rows| {
            rows.iter()
                .any(|r| r.handle == handle && r.visible != visible)
        });
        if changed {
            self.update_row(handle, |row| row.visible = visible);
        }
    }

    fn set_editing(&mut self, handle: RowHandle, editing: bool) {
        self.update_row(handle, |row| row.editing = editing);
    }

    fn read_input(&self) -> String {
        self.signals.input.get_untracked()
    }

    fn write_input(&mut self, text: &str) {
        self.signals.input.set(text.to_string());
    }

    fn clear_input(&mut self) {
        self.signals.input.set(String::new());
    }

    fn set_action_label(&mut self, label: &ActionLabel) {
        self.signals.action.set(label.clone());
    }

    fn set_controls_visibility(&mut self, visibility: Visibility) {
        self.signals.controls_visible.set(visibility.is_shown());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use list_core::ListConfig;

    fn surface() -> (SignalSurface, SurfaceSignals) {
        let signals = SurfaceSignals::new(ListConfig::default().add_label);
        (SignalSurface::new(signals), signals)
    }

    fn texts(signals: &SurfaceSignals) -> Vec<String> {
        signals
            .rows
            .get_untracked()
            .into_iter()
            .map(|r| r.text)
            .collect()
    }

    #[test]
    fn test_render_and_remove_rows() {
        let (mut surface, signals) = surface();
        let milk = surface.render_item("Milk");
        let bread = surface.render_item("Bread");
        assert_ne!(milk, bread);
        assert_eq!(texts(&signals), vec!["Milk", "Bread"]);

        surface.remove_item(milk);
        assert_eq!(texts(&signals), vec!["Bread"]);
    }

    #[test]
    fn test_row_flags() {
        let (mut surface, signals) = surface();
        let milk = surface.render_item("Milk");
        surface.set_visibility(milk, Visibility::Hidden);
        surface.set_editing(milk, true);

        let row = signals.rows.get_untracked()[0].clone();
        assert!(!row.visible);
        assert!(row.editing);
    }

    #[test]
    fn test_input_and_controls() {
        let (mut surface, signals) = surface();
        surface.write_input("Eggs");
        assert_eq!(surface.read_input(), "Eggs");
        surface.clear_input();
        assert_eq!(signals.input.get_untracked(), "");

        surface.set_controls_visibility(Visibility::Shown);
        assert!(signals.controls_visible.get_untracked());

        let update = ListConfig::default().update_label;
        surface.set_action_label(&update);
        assert_eq!(signals.action.get_untracked(), update);
    }
}
