//! Keeps one editor widget per open file, switches which one is visible,
//! and derives each file's unsaved-changes flag from the widget's undo depth.

pub mod app;

pub use app::{
    ChangeGate, ChangeKind, ChangeNotifier, DirtyTracker, DocumentEvent, EditorArea, EditorError,
    EditorManager, EditorSettings, EditorWidget, FileEntry, HistorySize, MemoryArea, MemoryWidget,
    Message, Result, SavePoint, Suppressed,
};
