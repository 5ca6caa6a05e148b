//! Save-point bookkeeping.
//!
//! A document is considered clean when the widget's undo depth equals the
//! depth recorded at the last save. Content is never compared.

/// Undo/redo stack depths as reported by an editor widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HistorySize {
    pub undo: usize,
    pub redo: usize,
}

impl HistorySize {
    pub fn new(undo: usize, redo: usize) -> Self {
        Self { undo, redo }
    }
}

/// What kind of mutation produced a change notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    /// A new edit. Discards the redo stack.
    Edit,
    Undo,
    Redo,
    /// Unknown origin; only the history depths are consulted.
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SavePoint {
    Reachable(usize),
    /// The saved content was dropped from the history and cannot come back
    /// through undo or redo.
    Unreachable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirtyTracker {
    save_point: SavePoint,
    dirty: bool,
}

impl Default for DirtyTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl DirtyTracker {
    pub fn new() -> Self {
        Self {
            save_point: SavePoint::Reachable(0),
            dirty: false,
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn save_point(&self) -> SavePoint {
        self.save_point
    }

    /// Record `history` as the save point and clear the dirty flag.
    pub fn mark_clean(&mut self, history: HistorySize) {
        self.save_point = SavePoint::Reachable(history.undo);
        self.dirty = false;
    }

    /// Recompute the dirty flag after a change.
    ///
    /// Returns `Some(dirty)` only when the flag flipped.
    pub fn recompute(&mut self, kind: ChangeKind, history: HistorySize) -> Option<bool> {
        if let SavePoint::Reachable(saved) = self.save_point {
            // Undone below the save point with nothing left to redo.
            let undone_past = history.undo < saved && history.redo == 0;
            // An edit made at depth `undo - 1` throws away every redo step,
            // including the one leading back to `saved`.
            let redo_discarded = kind == ChangeKind::Edit && saved >= history.undo;
            if undone_past || redo_discarded {
                self.save_point = SavePoint::Unreachable;
            }
        }

        let dirty = match self.save_point {
            SavePoint::Reachable(saved) => history.undo != saved,
            SavePoint::Unreachable => true,
        };

        if dirty == self.dirty {
            None
        } else {
            self.dirty = dirty;
            Some(dirty)
        }
    }
}
