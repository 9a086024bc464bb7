//! Theme registry: built-in themes plus themes loaded from JSON configuration.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::convert::{Converter, LchModel, DEFAULT_CHROMA_DIVISOR};
use crate::error::ThemeError;
use crate::role::ColorRole;
use crate::theme::{ColorScheme, Theme};

/// Key of the theme selected when nothing else is configured.
pub const DEFAULT_THEME: &str = "custom";

/// Built-in themes: key, display name, light primary, dark primary, dark
/// primary foreground. Every other role comes from the neutral base.
const BUILTIN: &[(&str, &str, &str, &str, &str)] = &[
    ("neutral", "Neutral Gray", "#171717", "#e5e5e5", "#171717"),
    ("blue", "Ocean Blue", "#2563eb", "#3b82f6", "#fafafa"),
    ("green", "Forest Green", "#16a34a", "#22c55e", "#fafafa"),
    ("purple", "Mystic Purple", "#7c3aed", "#8b5cf6", "#fafafa"),
    ("orange", "Vibrant Orange", "#ea580c", "#f97316", "#fafafa"),
    ("rose", "Rose Red", "#e11d48", "#f43f5e", "#fafafa"),
    ("custom", "Custom Pink", "#ff679a", "#ff85b0", "#171717"),
];

fn neutral_light() -> ColorScheme {
    use ColorRole::*;
    ColorScheme::from_pairs([
        (Background, "#ffffff"),
        (Foreground, "#0a0a0a"),
        (Card, "#ffffff"),
        (CardForeground, "#0a0a0a"),
        (Popover, "#ffffff"),
        (PopoverForeground, "#0a0a0a"),
        (Primary, "#171717"),
        (PrimaryForeground, "#fafafa"),
        (Secondary, "#f5f5f5"),
        (SecondaryForeground, "#171717"),
        (Muted, "#f5f5f5"),
        (MutedForeground, "#737373"),
        (Accent, "#f5f5f5"),
        (AccentForeground, "#171717"),
        (Destructive, "#dc2626"),
        (DestructiveForeground, "#fafafa"),
        (Border, "#e5e5e5"),
        (Input, "#e5e5e5"),
        (Ring, "#a3a3a3"),
    ])
}

fn neutral_dark() -> ColorScheme {
    use ColorRole::*;
    ColorScheme::from_pairs([
        (Background, "#0a0a0a"),
        (Foreground, "#fafafa"),
        (Card, "#171717"),
        (CardForeground, "#fafafa"),
        (Popover, "#171717"),
        (PopoverForeground, "#fafafa"),
        (Primary, "#e5e5e5"),
        (PrimaryForeground, "#171717"),
        (Secondary, "#262626"),
        (SecondaryForeground, "#fafafa"),
        (Muted, "#262626"),
        (MutedForeground, "#a3a3a3"),
        (Accent, "#262626"),
        (AccentForeground, "#fafafa"),
        (Destructive, "#ef4444"),
        (DestructiveForeground, "#fafafa"),
        (Border, "#262626"),
        (Input, "#262626"),
        (Ring, "#737373"),
    ])
}

fn builtin_theme(
    (key, name, light_primary, dark_primary, dark_primary_fg): (&str, &str, &str, &str, &str),
) -> Theme {
    Theme {
        key: key.to_string(),
        name: name.to_string(),
        swatch: light_primary.to_string(),
        light: neutral_light()
            .with(ColorRole::Primary, light_primary)
            .with(ColorRole::Ring, light_primary),
        dark: neutral_dark()
            .with(ColorRole::Primary, dark_primary)
            .with(ColorRole::PrimaryForeground, dark_primary_fg)
            .with(ColorRole::Ring, dark_primary),
    }
}

/// Key, name, and swatch of a theme, for pickers and listings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThemeSummary {
    pub key: String,
    pub name: String,
    pub swatch: String,
    pub is_default: bool,
}

/// An ordered set of themes with a default.
#[derive(Debug, Clone)]
pub struct ThemeRegistry {
    themes: Vec<Theme>,
    default_key: String,
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ThemeRegistry {
    /// The seven built-in themes, defaulting to [`DEFAULT_THEME`].
    pub fn builtin() -> Self {
        Self {
            themes: BUILTIN.iter().copied().map(builtin_theme).collect(),
            default_key: DEFAULT_THEME.to_string(),
        }
    }

    /// Built-in themes with `config` merged over them.
    ///
    /// Config themes replace built-ins of the same key and are appended
    /// otherwise. Returns `ThemeError::UnknownTheme` if the configured default
    /// names no theme.
    pub fn with_config(config: &ThemeConfig) -> Result<Self, ThemeError> {
        let mut registry = Self::builtin();
        for (key, spec) in &config.themes {
            registry.insert(spec.clone().into_theme(key));
        }
        if let Some(default) = &config.default {
            registry.set_default(default)?;
        }
        Ok(registry)
    }

    /// Inserts `theme`, replacing any theme with the same key in place.
    pub fn insert(&mut self, theme: Theme) {
        for role in theme
            .light
            .invalid_roles()
            .into_iter()
            .chain(theme.dark.invalid_roles())
        {
            warn!(
                theme = %theme.key,
                role = role.config_key(),
                "invalid hex color; it will render as black"
            );
        }
        match self.themes.iter_mut().find(|t| t.key == theme.key) {
            Some(existing) => {
                debug!(theme = %theme.key, "replacing theme");
                *existing = theme;
            }
            None => self.themes.push(theme),
        }
    }

    /// Makes `key` the default theme.
    pub fn set_default(&mut self, key: &str) -> Result<(), ThemeError> {
        if !self.contains(key) {
            return Err(ThemeError::UnknownTheme(key.to_string()));
        }
        self.default_key = key.to_string();
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&Theme> {
        self.themes.iter().find(|t| t.key == key)
    }

    /// Like [`get`](Self::get) but returns `ThemeError::UnknownTheme`.
    pub fn require(&self, key: &str) -> Result<&Theme, ThemeError> {
        self.get(key)
            .ok_or_else(|| ThemeError::UnknownTheme(key.to_string()))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Themes in registration order.
    pub fn list(&self) -> &[Theme] {
        &self.themes
    }

    pub fn keys(&self) -> Vec<&str> {
        self.themes.iter().map(|t| t.key.as_str()).collect()
    }

    pub fn default_key(&self) -> &str {
        &self.default_key
    }

    pub fn default_theme(&self) -> &Theme {
        // set_default and builtin() only ever store keys that are present.
        self.get(&self.default_key).unwrap_or(&self.themes[0])
    }

    pub fn summaries(&self) -> Vec<ThemeSummary> {
        self.themes
            .iter()
            .map(|t| ThemeSummary {
                key: t.key.clone(),
                name: t.name.clone(),
                swatch: t.swatch.clone(),
                is_default: t.key == self.default_key,
            })
            .collect()
    }
}

/// A theme as written in configuration. The key comes from the enclosing map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeSpec {
    pub name: String,
    #[serde(default)]
    pub swatch: Option<String>,
    pub light: ColorScheme,
    pub dark: ColorScheme,
}

impl ThemeSpec {
    fn into_theme(self, key: &str) -> Theme {
        let swatch = self
            .swatch
            .or_else(|| self.light.get(ColorRole::Primary).map(String::from))
            .unwrap_or_else(|| "#000000".to_string());
        Theme {
            key: key.to_string(),
            name: self.name,
            swatch,
            light: self.light,
            dark: self.dark,
        }
    }
}

/// Theme configuration document.
///
/// ```json
/// {
///   "default": "brand",
///   "chroma_divisor": 150,
///   "model": "lab",
///   "themes": {
///     "brand": { "name": "Brand", "light": { "primary": "#0f766e" }, "dark": { "primary": "#14b8a6" } }
///   }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeConfig {
    #[serde(default)]
    pub default: Option<String>,
    #[serde(default)]
    pub chroma_divisor: Option<f64>,
    #[serde(default)]
    pub model: Option<LchModel>,
    #[serde(default)]
    pub themes: BTreeMap<String, ThemeSpec>,
}

impl ThemeConfig {
    /// Parses a configuration document.
    pub fn from_json(json: &str) -> Result<Self, ThemeError> {
        let config: ThemeConfig = serde_json::from_str(json)?;
        config.converter()?;
        Ok(config)
    }

    /// The converter this configuration selects.
    pub fn converter(&self) -> Result<Converter, ThemeError> {
        Converter::new(
            self.model.unwrap_or_default(),
            self.chroma_divisor.unwrap_or(DEFAULT_CHROMA_DIVISOR),
        )
    }
}
