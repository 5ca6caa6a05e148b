use std::ops::Range;

use crate::app::domain::dirty::{ChangeKind, HistorySize};
use crate::app::infrastructure::widget::{ChangeNotifier, EditorArea, EditorWidget};

use super::text_ops::clamp_range;

/// Editor widget that keeps its text and a linear undo history in memory.
///
/// Each undo step stores the full text as it was before the step.
pub struct MemoryWidget {
    text: String,
    undo_stack: Vec<String>,
    redo_stack: Vec<String>,
    visible: bool,
    focus_requests: usize,
    notifier: ChangeNotifier,
}

impl MemoryWidget {
    pub fn new(notifier: ChangeNotifier) -> Self {
        Self {
            text: String::new(),
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            visible: false,
            focus_requests: 0,
            notifier,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn focus_requests(&self) -> usize {
        self.focus_requests
    }

    /// Insert `text` at byte position `pos` (clamped into the content).
    pub fn insert(&mut self, pos: usize, text: &str) {
        if text.is_empty() {
            return;
        }
        let range = clamp_range(&self.text, pos..pos);
        self.apply_edit(range, text);
    }

    /// Delete the byte range `range` (clamped into the content).
    pub fn delete(&mut self, range: Range<usize>) {
        let range = clamp_range(&self.text, range);
        if range.is_empty() {
            return;
        }
        self.apply_edit(range, "");
    }

    /// Replace the whole content as a single undoable step.
    pub fn replace_all(&mut self, text: &str) {
        let len = self.text.len();
        self.apply_edit(0..len, text);
    }

    /// Returns `false` when there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.undo_stack.pop() else {
            return false;
        };
        let current = std::mem::replace(&mut self.text, previous);
        self.redo_stack.push(current);
        self.notify(ChangeKind::Undo);
        true
    }

    /// Returns `false` when there was nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(next) = self.redo_stack.pop() else {
            return false;
        };
        let current = std::mem::replace(&mut self.text, next);
        self.undo_stack.push(current);
        self.notify(ChangeKind::Redo);
        true
    }

    fn apply_edit(&mut self, range: Range<usize>, replacement: &str) {
        self.undo_stack.push(self.text.clone());
        self.redo_stack.clear();
        self.text.replace_range(range, replacement);
        self.notify(ChangeKind::Edit);
    }

    fn notify(&self, kind: ChangeKind) {
        self.notifier.changed(kind, self.history_size());
    }
}

impl EditorWidget for MemoryWidget {
    fn value(&self) -> String {
        self.text.clone()
    }

    fn set_value(&mut self, text: &str) {
        self.replace_all(text);
    }

    fn clear_history(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    fn history_size(&self) -> HistorySize {
        HistorySize::new(self.undo_stack.len(), self.redo_stack.len())
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn focus(&mut self) {
        self.focus_requests += 1;
    }
}

/// Display area for [`MemoryWidget`]s. Tracks what a real container would
/// show without drawing anything.
#[derive(Debug)]
pub struct MemoryArea {
    created: usize,
    removed: usize,
    placeholder_visible: bool,
}

impl Default for MemoryArea {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryArea {
    pub fn new() -> Self {
        Self {
            created: 0,
            removed: 0,
            placeholder_visible: true,
        }
    }

    pub fn widgets_created(&self) -> usize {
        self.created
    }

    pub fn widgets_removed(&self) -> usize {
        self.removed
    }

    /// Widgets currently attached to the area.
    pub fn attached(&self) -> usize {
        self.created.saturating_sub(self.removed)
    }

    pub fn placeholder_visible(&self) -> bool {
        self.placeholder_visible
    }
}

impl EditorArea for MemoryArea {
    type Widget = MemoryWidget;

    fn create_widget(&mut self, notifier: ChangeNotifier) -> MemoryWidget {
        self.created += 1;
        MemoryWidget::new(notifier)
    }

    fn remove_widget(&mut self, mut widget: MemoryWidget) {
        widget.set_visible(false);
        // Clearing the content notifies like any edit; callers suppress it.
        widget.replace_all("");
        self.removed += 1;
    }

    fn set_placeholder_visible(&mut self, visible: bool) {
        self.placeholder_visible = visible;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::mpsc;

    use crate::app::domain::dirty::DirtyTracker;
    use crate::app::domain::file::FileEntry;
    use crate::app::infrastructure::widget::ChangeGate;

    fn widget() -> MemoryWidget {
        let (tx, _rx) = mpsc::channel();
        let notifier = ChangeNotifier::new(
            FileEntry::new("/m/test.txt"),
            Rc::new(RefCell::new(DirtyTracker::new())),
            ChangeGate::new(),
            tx,
        );
        MemoryWidget::new(notifier)
    }

    #[test]
    fn test_insert_and_delete() {
        let mut w = widget();
        w.insert(0, "hello");
        w.insert(5, " world");
        assert_eq!(w.text(), "hello world");
        w.delete(0..6);
        assert_eq!(w.text(), "world");
        assert_eq!(w.history_size(), HistorySize::new(3, 0));
    }

    #[test]
    fn test_undo_redo() {
        let mut w = widget();
        w.insert(0, "a");
        w.insert(1, "b");
        assert!(w.undo());
        assert_eq!(w.text(), "a");
        assert_eq!(w.history_size(), HistorySize::new(1, 1));
        assert!(w.redo());
        assert_eq!(w.text(), "ab");
        assert!(!w.redo());
        assert!(w.undo());
        assert!(w.undo());
        assert!(!w.undo());
        assert_eq!(w.text(), "");
    }

    #[test]
    fn test_edit_discards_redo() {
        let mut w = widget();
        w.insert(0, "a");
        w.undo();
        w.insert(0, "b");
        assert_eq!(w.history_size(), HistorySize::new(1, 0));
        assert!(!w.redo());
    }

    #[test]
    fn test_empty_edits_are_ignored() {
        let mut w = widget();
        w.insert(0, "");
        w.delete(3..3);
        assert_eq!(w.history_size(), HistorySize::default());
    }

    #[test]
    fn test_set_value_then_clear_history() {
        let mut w = widget();
        w.set_value("loaded");
        assert_eq!(w.history_size(), HistorySize::new(1, 0));
        w.clear_history();
        assert_eq!(w.value(), "loaded");
        assert_eq!(w.history_size(), HistorySize::default());
    }

    #[test]
    fn test_area_counts_widgets() {
        let (tx, _rx) = mpsc::channel();
        let mut area = MemoryArea::new();
        assert!(area.placeholder_visible());

        let notifier = ChangeNotifier::new(
            FileEntry::new("/m/a.txt"),
            Rc::new(RefCell::new(DirtyTracker::new())),
            ChangeGate::new(),
            tx,
        );
        let w = area.create_widget(notifier);
        assert_eq!(area.attached(), 1);
        area.remove_widget(w);
        assert_eq!(area.widgets_created(), 1);
        assert_eq!(area.widgets_removed(), 1);
        assert_eq!(area.attached(), 0);
    }

    #[test]
    fn test_removing_foreign_widget_does_not_underflow() {
        let mut area = MemoryArea::new();
        area.remove_widget(widget());
        assert_eq!(area.widgets_removed(), 1);
        assert_eq!(area.attached(), 0);
    }
}
