//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (FileEntry, DirtyTracker, Messages, Settings)
//! - `controllers/` - Orchestration (EditorManager)
//! - `services/` - Concrete widgets and text helpers
//! - `infrastructure/` - Widget traits, change notification, error

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-exports for convenient external access
pub use controllers::editors::EditorManager;
pub use domain::{
    ChangeKind, DirtyTracker, DocumentEvent, EditorSettings, FileEntry, HistorySize, Message,
    SavePoint,
};
pub use infrastructure::error::{EditorError, Result};
pub use infrastructure::widget::{ChangeGate, ChangeNotifier, EditorArea, EditorWidget, Suppressed};
pub use services::{MemoryArea, MemoryWidget};
