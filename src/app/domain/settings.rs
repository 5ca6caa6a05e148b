use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::app::infrastructure::error::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorSettings {
    /// Give keyboard focus to an editor whenever it is shown
    #[serde(default = "default_focus_on_show")]
    pub focus_on_show: bool,

    /// Log document-manager notifications at info level instead of debug
    #[serde(default = "default_log_document_events")]
    pub log_document_events: bool,

    /// Show the placeholder while no editor is active
    #[serde(default = "default_show_placeholder")]
    pub show_placeholder: bool,
}

fn default_focus_on_show() -> bool {
    true
}

fn default_log_document_events() -> bool {
    true
}

fn default_show_placeholder() -> bool {
    true
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            focus_on_show: default_focus_on_show(),
            log_document_events: default_log_document_events(),
            show_placeholder: default_show_placeholder(),
        }
    }
}

impl EditorSettings {
    /// Load settings from the default config location
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load settings from `path`, falling back to defaults if the file is
    /// missing or cannot be parsed
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    warn!("Failed to parse settings at {}: {}. Using defaults.", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Save settings to the default config location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;

        Ok(())
    }

    /// Get config file path (cross-platform)
    pub fn config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("editor-manager");
        path.push("settings.json");
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = EditorSettings::default();
        assert!(settings.focus_on_show);
        assert!(settings.log_document_events);
        assert!(settings.show_placeholder);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: EditorSettings = serde_json::from_str(r#"{"focus_on_show": false}"#).unwrap();
        assert!(!settings.focus_on_show);
        assert!(settings.log_document_events);
        assert!(settings.show_placeholder);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let settings = EditorSettings {
            focus_on_show: false,
            log_document_events: false,
            show_placeholder: true,
        };
        settings.save_to(&path).unwrap();

        assert_eq!(EditorSettings::load_from(&path), settings);
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = EditorSettings::load_from(&dir.path().join("absent.json"));
        assert_eq!(settings, EditorSettings::default());
    }

    #[test]
    fn test_load_corrupt_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(EditorSettings::load_from(&path), EditorSettings::default());
    }

    #[test]
    fn test_config_path_ends_with_settings_json() {
        let path = EditorSettings::config_path();
        assert!(path.ends_with("editor-manager/settings.json"));
    }
}
