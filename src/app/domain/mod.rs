//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - File identity
//! - Save-point and dirty-flag bookkeeping
//! - Editor settings
//! - Message types exchanged with the document layer

pub mod dirty;
pub mod file;
pub mod messages;
pub mod settings;

pub use dirty::{ChangeKind, DirtyTracker, HistorySize, SavePoint};
pub use file::FileEntry;
pub use messages::{DocumentEvent, Message};
pub use settings::EditorSettings;
