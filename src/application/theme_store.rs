//! Theme preference held as an explicit context value.
//!
//! Persistence goes through the [`Storage`] port so the context never
//! touches a global or a concrete backend.

use std::collections::HashMap;
use std::path::PathBuf;

use configparser::ini::Ini;
use log::{info, warn};

use crate::domain::{ThemeId, ThemeStyle};

/// Key under which the selected theme is stored
pub const THEME_STORAGE_KEY: &str = "synestia-theme";

const PREFERENCES_SECTION: &str = "preferences";

/// Minimal key-value persistence port
pub trait Storage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), String>;
}

/// In-process storage; nothing survives a restart
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        self.values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Storage backed by the `[preferences]` section of an INI file.
/// Other sections of the file are preserved on write.
pub struct IniStorage {
    path: PathBuf,
    ini: Ini,
}

impl IniStorage {
    /// Open the file if it exists; a missing or unreadable file starts empty
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let mut ini = Ini::new();
        if path.exists() {
            if let Err(e) = ini.load(&path) {
                warn!("Ignoring unreadable settings file {:?}: {}", path, e);
                ini = Ini::new();
            }
        }
        Self { path, ini }
    }
}

impl Storage for IniStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.ini.get(PREFERENCES_SECTION, key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        self.ini.set(PREFERENCES_SECTION, key, Some(value.to_owned()));
        self.ini
            .write(&self.path)
            .map_err(|e| format!("Failed to save settings file: {}", e))
    }
}

/// The active theme plus the storage it is persisted to
pub struct ThemeContext<S: Storage> {
    theme: ThemeId,
    storage: S,
}

impl<S: Storage> ThemeContext<S> {
    /// Restore the saved theme; unknown or missing values fall back to the default
    pub fn load(storage: S) -> Self {
        let theme = match storage.get(THEME_STORAGE_KEY) {
            Some(saved) => ThemeId::parse(&saved).unwrap_or_else(|| {
                warn!("Unknown saved theme {:?}, using {}", saved, ThemeId::default().as_str());
                ThemeId::default()
            }),
            None => ThemeId::default(),
        };
        info!("Theme: {}", theme.as_str());
        Self { theme, storage }
    }

    pub fn theme(&self) -> ThemeId {
        self.theme
    }

    /// Style record for the active theme
    pub fn style(&self) -> &'static ThemeStyle {
        self.theme.style()
    }

    /// Switch theme and write it through to storage.
    /// A failed write is logged; the in-memory theme still changes.
    pub fn set_theme(&mut self, theme: ThemeId) {
        self.theme = theme;
        match self.storage.set(THEME_STORAGE_KEY, theme.as_str()) {
            Ok(()) => info!("Theme set to {}", theme.as_str()),
            Err(e) => warn!("Theme set to {} but not saved: {}", theme.as_str(), e),
        }
    }

    /// Advance to the next theme in the cycle
    pub fn toggle_theme(&mut self) {
        self.set_theme(self.theme.next());
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}
