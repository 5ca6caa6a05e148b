use std::fmt;

use super::file::FileEntry;

/// Messages the editor manager sends out to the document layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// The dirty flag of `file` changed, or the file was just marked clean.
    DirtyFlagChanged { file: FileEntry, dirty: bool },
    /// A different editor became visible; `None` means the placeholder is shown.
    ActiveEditorChanged(Option<FileEntry>),
}

/// Notifications coming in from the document manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentEvent {
    CurrentDocumentChanged(Option<FileEntry>),
    WorkingSetAdded(FileEntry),
    WorkingSetRemoved(FileEntry),
    DirtyFlagChanged(FileEntry),
}

impl DocumentEvent {
    pub fn file(&self) -> Option<&FileEntry> {
        match self {
            DocumentEvent::CurrentDocumentChanged(file) => file.as_ref(),
            DocumentEvent::WorkingSetAdded(file)
            | DocumentEvent::WorkingSetRemoved(file)
            | DocumentEvent::DirtyFlagChanged(file) => Some(file),
        }
    }
}

impl fmt::Display for DocumentEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentEvent::CurrentDocumentChanged(Some(file)) => {
                write!(f, "Current document changed --> {}", file)
            }
            DocumentEvent::CurrentDocumentChanged(None) => {
                write!(f, "Current document changed --> none")
            }
            DocumentEvent::WorkingSetAdded(file) => write!(f, "Working set ++ {}", file),
            DocumentEvent::WorkingSetRemoved(file) => write!(f, "Working set -- {}", file),
            DocumentEvent::DirtyFlagChanged(file) => write!(f, "Dirty flag change: {}", file),
        }
    }
}
