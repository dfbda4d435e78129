//! Theme and language preferences persisted across sessions.
//!
//! Preferences live in a small JSON object under fixed keys. They are read once
//! at startup and written back whenever the user changes them; nothing else
//! touches the file.

use crate::error::PreferenceError;
use crate::i18n::Language;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, warn};

pub const THEME_KEY: &str = "theme";
pub const LANGUAGE_KEY: &str = "language";

const APP_DIR: &str = "rescort";
const PREFERENCES_FILE: &str = "preferences.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Color scheme reported by the operating environment.
    pub fn from_system() -> Self {
        match dark_light::detect() {
            Ok(dark_light::Mode::Dark) => Theme::Dark,
            _ => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("Unknown theme: {}. Use light or dark", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Preferences {
    pub theme: Theme,
    pub language: Language,
}

/// Key-value file holding the persisted preferences.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `RESCORT_PREFERENCES` if set, else the platform config directory.
    pub fn from_env() -> Result<Self, PreferenceError> {
        if let Ok(path) = std::env::var("RESCORT_PREFERENCES") {
            return Ok(Self::new(path));
        }
        let mut path = dirs::config_dir().ok_or(PreferenceError::NoConfigDir)?;
        path.push(APP_DIR);
        path.push(PREFERENCES_FILE);
        Ok(Self::new(path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads preferences, using `fallback_theme` when no theme was stored.
    /// Unreadable or malformed files fall back to defaults.
    pub fn load_or(&self, fallback_theme: Theme) -> Preferences {
        let entries = match self.read_entries() {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Ignoring preference file {}: {}", self.path.display(), e);
                Map::new()
            }
        };

        let theme = entries
            .get(THEME_KEY)
            .and_then(Value::as_str)
            .and_then(|s| s.parse::<Theme>().ok())
            .unwrap_or(fallback_theme);
        let language = entries
            .get(LANGUAGE_KEY)
            .and_then(Value::as_str)
            .and_then(|s| s.parse::<Language>().ok())
            .unwrap_or_default();

        Preferences { theme, language }
    }

    pub fn load(&self) -> Preferences {
        self.load_or(Theme::from_system())
    }

    pub fn save_theme(&self, theme: Theme) -> Result<(), PreferenceError> {
        self.write_entry(THEME_KEY, theme.as_str())
    }

    pub fn save_language(&self, language: Language) -> Result<(), PreferenceError> {
        self.write_entry(LANGUAGE_KEY, language.code())
    }

    fn read_entries(&self) -> Result<Map<String, Value>, PreferenceError> {
        if !self.path.exists() {
            return Ok(Map::new());
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Map::new());
        }
        match serde_json::from_str::<Value>(&content)? {
            Value::Object(map) => Ok(map),
            _ => Ok(Map::new()),
        }
    }

    fn write_entry(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        // Keep unrelated keys; start over if the existing file is corrupt.
        let mut entries = self.read_entries().unwrap_or_default();
        entries.insert(key.to_string(), Value::String(value.to_string()));

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&Value::Object(entries))?)?;
        debug!("Saved preference {}={} to {}", key, value, self.path.display());
        Ok(())
    }
}
