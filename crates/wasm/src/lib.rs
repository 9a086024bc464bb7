#![deny(unsafe_code)]
//! WASM bindings for theme-forge.
//!
//! Exposes the same hex → `oklch(...)` conversion the CLI uses, and a
//! `ThemeManager` that applies themes onto `document.documentElement` and
//! persists the selection in `localStorage`.

use theme_forge_core::{
    Converter, Mode, PreferenceStore, StyleSink, ThemeConfig, ThemeController, ThemeError,
    ThemeRegistry,
};
use tracing::warn;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, Storage};

/// `oklch(L C H)` for a hex color, or `oklch(0 0 0)` if it is malformed.
#[wasm_bindgen(js_name = hexToOklch)]
pub fn hex_to_oklch(hex: &str) -> String {
    theme_forge_core::hex_to_oklch(hex)
}

/// `L C H` for a hex color, or `0.000 0.000 0.000` if it is malformed.
#[wasm_bindgen(js_name = hexToOklchTriple)]
pub fn hex_to_oklch_triple(hex: &str) -> String {
    theme_forge_core::hex_to_oklch_triple(hex)
}

/// The document's root element.
struct DocumentStyle {
    root: HtmlElement,
}

impl StyleSink for DocumentStyle {
    fn set_property(&mut self, name: &str, value: &str) {
        if let Err(e) = self.root.style().set_property(name, value) {
            warn!(%name, error = ?e, "cannot set style property");
        }
    }

    fn set_dark(&mut self, dark: bool) {
        if let Err(e) = self.root.class_list().toggle_with_force("dark", dark) {
            warn!(dark, error = ?e, "cannot toggle dark class");
        }
    }
}

/// `window.localStorage`; absent when storage is disabled.
struct LocalStorage {
    storage: Option<Storage>,
}

impl PreferenceStore for LocalStorage {
    fn load(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), ThemeError> {
        match &self.storage {
            Some(storage) => storage
                .set_item(key, value)
                .map_err(|e| ThemeError::Storage(format!("{e:?}"))),
            None => Ok(()),
        }
    }
}

/// Theme and mode switching for the current document.
#[wasm_bindgen]
pub struct ThemeManager {
    inner: ThemeController<LocalStorage, DocumentStyle>,
}

#[wasm_bindgen]
impl ThemeManager {
    /// Creates a manager over the built-in themes, merged with an optional
    /// JSON theme configuration.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<ThemeManager, JsError> {
        let config = match config_json {
            Some(json) => ThemeConfig::from_json(&json)?,
            None => ThemeConfig::default(),
        };
        let registry = ThemeRegistry::with_config(&config)?;
        let converter: Converter = config.converter()?;

        let window = web_sys::window().ok_or_else(|| JsError::new("no window"))?;
        let root = window
            .document()
            .and_then(|d| d.document_element())
            .and_then(|e| e.dyn_into::<HtmlElement>().ok())
            .ok_or_else(|| JsError::new("no document root element"))?;
        let storage = window.local_storage().ok().flatten();

        Ok(ThemeManager {
            inner: ThemeController::new(
                registry,
                converter,
                LocalStorage { storage },
                DocumentStyle { root },
            ),
        })
    }

    /// Restores the saved selection and applies it to the document.
    pub fn initialize(&mut self) {
        self.inner.initialize();
    }

    #[wasm_bindgen(js_name = setTheme)]
    pub fn set_theme(&mut self, key: &str) -> Result<(), JsError> {
        Ok(self.inner.set_theme(key)?)
    }

    /// Accepts `"light"` or `"dark"`.
    #[wasm_bindgen(js_name = setMode)]
    pub fn set_mode(&mut self, mode: &str) -> Result<(), JsError> {
        Ok(self.inner.set_mode(Mode::from_name(mode)?)?)
    }

    /// Flips light/dark and returns the new mode name.
    #[wasm_bindgen(js_name = toggleMode)]
    pub fn toggle_mode(&mut self) -> Result<String, JsError> {
        Ok(self.inner.toggle_mode()?.as_str().to_string())
    }

    pub fn reset(&mut self) -> Result<(), JsError> {
        Ok(self.inner.reset()?)
    }

    #[wasm_bindgen(getter)]
    pub fn theme(&self) -> String {
        self.inner.theme().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn mode(&self) -> String {
        self.inner.mode().as_str().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn mounted(&self) -> bool {
        self.inner.mounted()
    }

    /// `[{key, name, swatch, is_default}, ...]` for theme pickers.
    #[wasm_bindgen(js_name = themesJson)]
    pub fn themes_json(&self) -> Result<String, JsError> {
        Ok(serde_json::to_string(&self.inner.registry().summaries())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exported_conversion_matches_core() {
        assert_eq!(hex_to_oklch("#2563eb"), "oklch(0.461 0.534 292.751)");
        assert_eq!(hex_to_oklch("nope"), "oklch(0 0 0)");
        assert_eq!(hex_to_oklch_triple("#000000"), "0.000 0.000 0.000");
        assert_eq!(hex_to_oklch_triple("#12345"), "0.000 0.000 0.000");
    }
}
