use std::fmt;
use std::path::{Path, PathBuf};

use crate::app::services::text_ops::extract_filename;

/// Identity of an open file. Two entries are the same file when their full
/// paths are equal; nothing else is compared.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileEntry {
    pub full_path: PathBuf,
}

impl FileEntry {
    pub fn new(full_path: impl Into<PathBuf>) -> Self {
        Self {
            full_path: full_path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.full_path
    }

    pub fn display_name(&self) -> String {
        extract_filename(&self.full_path.to_string_lossy())
    }
}

impl fmt::Display for FileEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_path.display())
    }
}

impl From<&str> for FileEntry {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}
