use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::app::infrastructure::error::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Text size at zoom 1.0
    #[serde(default = "default_font_size")]
    pub font_size: u32,

    #[serde(default = "default_window_width")]
    pub window_width: i32,

    #[serde(default = "default_window_height")]
    pub window_height: i32,

    #[serde(default)]
    pub word_wrap: bool,

    #[serde(default)]
    pub dark_mode: bool,

    /// When a "Save" answer on close fails, keep the tab instead of closing it.
    #[serde(default)]
    pub keep_tab_on_failed_save: bool,
}

fn default_font_size() -> u32 {
    14
}

fn default_window_width() -> i32 {
    800
}

fn default_window_height() -> i32 {
    600
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            font_size: default_font_size(),
            window_width: default_window_width(),
            window_height: default_window_height(),
            word_wrap: false,
            dark_mode: false,
            keep_tab_on_failed_save: false,
        }
    }
}

impl AppSettings {
    /// Load settings from the config directory, or defaults if there are none.
    /// The file is only ever read; nothing is written back.
    pub fn load() -> Self {
        let config_path = Self::get_config_path();
        match Self::load_from(&config_path) {
            Ok(Some(settings)) => settings,
            Ok(None) => Self::default(),
            Err(e) => {
                log::warn!("Failed to read settings from {}: {}. Using defaults.", config_path.display(), e);
                Self::default()
            }
        }
    }

    /// `Ok(None)` when the file does not exist.
    pub fn load_from(path: &Path) -> Result<Option<Self>> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let settings: Self = serde_json::from_str(&contents)?;
        Ok(Some(settings))
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("tabpad");
        path.push("settings.json");
        path
    }
}
