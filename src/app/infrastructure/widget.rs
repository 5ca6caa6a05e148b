//! Seams between the editor manager and the host toolkit.
//!
//! A toolkit provides an [`EditorArea`] that creates and removes widgets, and
//! each widget implements [`EditorWidget`]. Widgets report every content
//! change through the [`ChangeNotifier`] they were created with.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::mpsc::Sender;

use tracing::warn;

use crate::app::domain::dirty::{ChangeKind, DirtyTracker, HistorySize};
use crate::app::domain::file::FileEntry;
use crate::app::domain::messages::Message;

pub trait EditorWidget {
    fn value(&self) -> String;

    /// Replace the whole content. Must notify like any other edit.
    fn set_value(&mut self, text: &str);

    /// Drop all undo and redo steps.
    fn clear_history(&mut self);

    fn history_size(&self) -> HistorySize;

    fn set_visible(&mut self, visible: bool);

    fn is_visible(&self) -> bool;

    fn focus(&mut self);
}

/// The container that owns the widgets' on-screen space.
pub trait EditorArea {
    type Widget: EditorWidget;

    fn create_widget(&mut self, notifier: ChangeNotifier) -> Self::Widget;

    /// Detach `widget` from the area. The widget is dropped afterwards.
    fn remove_widget(&mut self, widget: Self::Widget);

    /// Toggle the "no editor" placeholder.
    fn set_placeholder_visible(&mut self, visible: bool);
}

/// Shared switch that silences change notifications while content is
/// loaded or cleared programmatically.
#[derive(Debug, Clone, Default)]
pub struct ChangeGate {
    suppressed: Rc<Cell<bool>>,
}

impl ChangeGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_suppressed(&self) -> bool {
        self.suppressed.get()
    }

    /// Suppress notifications until the returned guard is dropped.
    /// Nested guards restore the state they found.
    pub fn suppress(&self) -> Suppressed {
        let previous = self.suppressed.replace(true);
        Suppressed {
            flag: self.suppressed.clone(),
            previous,
        }
    }
}

#[must_use = "notifications are only suppressed while the guard is alive"]
pub struct Suppressed {
    flag: Rc<Cell<bool>>,
    previous: bool,
}

impl Drop for Suppressed {
    fn drop(&mut self) {
        self.flag.set(self.previous);
    }
}

/// Handed to each widget on creation. Recomputes the owning editor's dirty
/// flag on every change and reports flips to the document layer.
#[derive(Clone)]
pub struct ChangeNotifier {
    file: FileEntry,
    tracker: Rc<RefCell<DirtyTracker>>,
    gate: ChangeGate,
    sender: Sender<Message>,
}

impl ChangeNotifier {
    pub fn new(
        file: FileEntry,
        tracker: Rc<RefCell<DirtyTracker>>,
        gate: ChangeGate,
        sender: Sender<Message>,
    ) -> Self {
        Self {
            file,
            tracker,
            gate,
            sender,
        }
    }

    pub fn file(&self) -> &FileEntry {
        &self.file
    }

    pub fn changed(&self, kind: ChangeKind, history: HistorySize) {
        if self.gate.is_suppressed() {
            return;
        }

        let flipped = self.tracker.borrow_mut().recompute(kind, history);
        if let Some(dirty) = flipped {
            self.send_dirty(dirty);
        }
    }

    pub(crate) fn send_dirty(&self, dirty: bool) {
        let message = Message::DirtyFlagChanged {
            file: self.file.clone(),
            dirty,
        };
        if self.sender.send(message).is_err() {
            warn!("Dirty flag change for {} dropped: receiver is gone", self.file);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn test_guard_restores_previous_state() {
        let gate = ChangeGate::new();
        assert!(!gate.is_suppressed());
        {
            let _outer = gate.suppress();
            assert!(gate.is_suppressed());
            {
                let _inner = gate.suppress();
                assert!(gate.is_suppressed());
            }
            assert!(gate.is_suppressed());
        }
        assert!(!gate.is_suppressed());
    }

    #[test]
    fn test_clones_share_the_flag() {
        let gate = ChangeGate::new();
        let other = gate.clone();
        let _quiet = gate.suppress();
        assert!(other.is_suppressed());
    }

    #[test]
    fn test_notifier_sends_only_on_flip() {
        let (tx, rx) = mpsc::channel();
        let file = FileEntry::new("/w/a.txt");
        let tracker = Rc::new(RefCell::new(DirtyTracker::new()));
        let notifier = ChangeNotifier::new(file.clone(), tracker.clone(), ChangeGate::new(), tx);

        notifier.changed(ChangeKind::Edit, HistorySize::new(1, 0));
        notifier.changed(ChangeKind::Edit, HistorySize::new(2, 0));

        let sent: Vec<Message> = rx.try_iter().collect();
        assert_eq!(sent, vec![Message::DirtyFlagChanged { file, dirty: true }]);
        assert!(tracker.borrow().is_dirty());
    }

    #[test]
    fn test_notifier_is_silent_while_suppressed() {
        let (tx, rx) = mpsc::channel();
        let gate = ChangeGate::new();
        let tracker = Rc::new(RefCell::new(DirtyTracker::new()));
        let notifier =
            ChangeNotifier::new(FileEntry::new("/w/a.txt"), tracker.clone(), gate.clone(), tx);

        {
            let _quiet = gate.suppress();
            notifier.changed(ChangeKind::Edit, HistorySize::new(1, 0));
        }

        assert!(rx.try_recv().is_err());
        assert!(!tracker.borrow().is_dirty());
    }
}
