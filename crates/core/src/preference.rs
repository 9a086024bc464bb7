//! Persisted theme/mode selection and the controller that applies it.
//!
//! [`ThemeController`] keeps the selected theme and mode, writes them to a
//! [`PreferenceStore`] as JSON under [`STORAGE_KEY`] on every change, and
//! applies the result onto a [`StyleSink`].

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::convert::Converter;
use crate::error::ThemeError;
use crate::registry::ThemeRegistry;
use crate::style::{apply_theme, StyleSink};
use crate::theme::Mode;

/// Storage key the preference is saved under.
pub const STORAGE_KEY: &str = "theme-storage";

/// The user's theme and mode selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemePreference {
    pub theme: String,
    #[serde(default)]
    pub mode: Mode,
}

impl ThemePreference {
    pub fn to_json(&self) -> Result<String, ThemeError> {
        serde_json::to_string(self).map_err(|e| ThemeError::Storage(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, ThemeError> {
        serde_json::from_str(json).map_err(|e| ThemeError::Storage(e.to_string()))
    }
}

/// String key/value persistence, e.g. browser local storage.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&mut self, key: &str, value: &str) -> Result<(), ThemeError>;
}

/// In-memory [`PreferenceStore`].
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), ThemeError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Owns the current theme selection and keeps store and style root in sync.
pub struct ThemeController<S, K> {
    registry: ThemeRegistry,
    converter: Converter,
    store: S,
    sink: K,
    theme: String,
    mode: Mode,
    mounted: bool,
}

impl<S: PreferenceStore, K: StyleSink> ThemeController<S, K> {
    /// Creates a controller on the registry's default theme in light mode.
    ///
    /// Nothing is read or applied until [`initialize`](Self::initialize).
    pub fn new(registry: ThemeRegistry, converter: Converter, store: S, sink: K) -> Self {
        let theme = registry.default_key().to_string();
        Self {
            registry,
            converter,
            store,
            sink,
            theme,
            mode: Mode::Light,
            mounted: false,
        }
    }

    /// Restores the saved preference and applies it.
    ///
    /// A missing or unreadable preference, or one naming a theme the registry
    /// does not know, falls back to the default theme in light mode.
    pub fn initialize(&mut self) {
        let saved = self
            .store
            .load(STORAGE_KEY)
            .and_then(|json| match ThemePreference::from_json(&json) {
                Ok(pref) => Some(pref),
                Err(e) => {
                    warn!(error = %e, "discarding unreadable theme preference");
                    None
                }
            });
        match saved {
            Some(pref) if self.registry.contains(&pref.theme) => {
                self.theme = pref.theme;
                self.mode = pref.mode;
            }
            Some(pref) => {
                warn!(theme = %pref.theme, "saved theme no longer exists; using default");
                self.theme = self.registry.default_key().to_string();
                self.mode = pref.mode;
            }
            None => {
                self.theme = self.registry.default_key().to_string();
                self.mode = Mode::Light;
            }
        }
        self.apply();
        self.mounted = true;
    }

    /// Selects theme `key`. Unknown keys, and saves that fail, leave the
    /// state untouched.
    pub fn set_theme(&mut self, key: &str) -> Result<(), ThemeError> {
        self.registry.require(key)?;
        self.commit(key.to_string(), self.mode)
    }

    pub fn set_mode(&mut self, mode: Mode) -> Result<(), ThemeError> {
        self.commit(self.theme.clone(), mode)
    }

    /// Switches between light and dark; returns the new mode.
    pub fn toggle_mode(&mut self) -> Result<Mode, ThemeError> {
        let next = self.mode.toggled();
        self.set_mode(next)?;
        Ok(next)
    }

    /// Returns to the default theme in light mode.
    pub fn reset(&mut self) -> Result<(), ThemeError> {
        self.commit(self.registry.default_key().to_string(), Mode::Light)
    }

    pub fn theme(&self) -> &str {
        &self.theme
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_dark(&self) -> bool {
        self.mode.is_dark()
    }

    /// Whether [`initialize`](Self::initialize) has run.
    pub fn mounted(&self) -> bool {
        self.mounted
    }

    pub fn registry(&self) -> &ThemeRegistry {
        &self.registry
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }

    /// Saves the new selection, then adopts and applies it.
    fn commit(&mut self, theme: String, mode: Mode) -> Result<(), ThemeError> {
        let pref = ThemePreference { theme, mode };
        self.store.save(STORAGE_KEY, &pref.to_json()?)?;
        self.theme = pref.theme;
        self.mode = pref.mode;
        self.apply();
        Ok(())
    }

    fn apply(&mut self) {
        debug!(theme = %self.theme, mode = %self.mode, "applying theme");
        self.sink.set_dark(self.mode.is_dark());
        if let Some(theme) = self.registry.get(&self.theme) {
            apply_theme(theme, self.mode, &self.converter, &mut self.sink);
        }
    }
}
