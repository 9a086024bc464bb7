//! Themes: a named pair of light and dark color schemes.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::color::Srgb;
use crate::error::ThemeError;
use crate::role::ColorRole;

/// Light or dark variant selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Light,
    Dark,
}

impl Mode {
    /// Parses `"light"` or `"dark"`.
    pub fn from_name(name: &str) -> Result<Self, ThemeError> {
        match name {
            "light" => Ok(Mode::Light),
            "dark" => Ok(Mode::Dark),
            other => Err(ThemeError::InvalidConfig(format!(
                "unknown mode {other:?} (expected \"light\" or \"dark\")"
            ))),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Light => "light",
            Mode::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Mode::Dark
    }

    /// The opposite mode.
    pub fn toggled(self) -> Self {
        match self {
            Mode::Light => Mode::Dark,
            Mode::Dark => Mode::Light,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Hex colors keyed by role. Roles may be missing.
///
/// Values are stored as written; malformed hex converts to the black fallback
/// rather than failing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<String, String>",
    into = "BTreeMap<String, String>"
)]
pub struct ColorScheme {
    colors: BTreeMap<ColorRole, String>,
}

impl ColorScheme {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a scheme from `(role, hex)` pairs.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (ColorRole, &'a str)>) -> Self {
        Self {
            colors: pairs
                .into_iter()
                .map(|(role, hex)| (role, hex.to_string()))
                .collect(),
        }
    }

    /// Sets `role` to `hex`, replacing any previous value.
    pub fn set(&mut self, role: ColorRole, hex: impl Into<String>) {
        self.colors.insert(role, hex.into());
    }

    /// Returns a copy with `role` set to `hex`.
    pub fn with(mut self, role: ColorRole, hex: &str) -> Self {
        self.set(role, hex);
        self
    }

    pub fn get(&self, role: ColorRole) -> Option<&str> {
        self.colors.get(&role).map(String::as_str)
    }

    /// Present roles in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (ColorRole, &str)> {
        self.colors.iter().map(|(role, hex)| (*role, hex.as_str()))
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Returns every role whose value is not a valid 6-digit hex color.
    pub fn invalid_roles(&self) -> Vec<ColorRole> {
        self.iter()
            .filter(|(_, hex)| Srgb::from_hex(hex).is_err())
            .map(|(role, _)| role)
            .collect()
    }
}

impl From<BTreeMap<String, String>> for ColorScheme {
    fn from(raw: BTreeMap<String, String>) -> Self {
        let mut scheme = ColorScheme::new();
        for (key, hex) in raw {
            match ColorRole::from_config_key(&key) {
                Some(role) => scheme.set(role, hex),
                None => warn!(key = %key, "ignoring unknown color role"),
            }
        }
        scheme
    }
}

impl From<ColorScheme> for BTreeMap<String, String> {
    fn from(scheme: ColorScheme) -> Self {
        scheme
            .colors
            .into_iter()
            .map(|(role, hex)| (role.config_key().to_string(), hex))
            .collect()
    }
}

/// A named theme with light and dark schemes.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub key: String,
    pub name: String,
    /// Representative color shown in theme pickers.
    pub swatch: String,
    pub light: ColorScheme,
    pub dark: ColorScheme,
}

impl Theme {
    /// The scheme for `mode`.
    pub fn scheme(&self, mode: Mode) -> &ColorScheme {
        match mode {
            Mode::Light => &self.light,
            Mode::Dark => &self.dark,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_from_name_and_display() {
        assert_eq!(Mode::from_name("light").unwrap(), Mode::Light);
        assert_eq!(Mode::from_name("dark").unwrap(), Mode::Dark);
        assert!(Mode::from_name("Dark").is_err());
        assert_eq!(Mode::Dark.to_string(), "dark");
    }

    #[test]
    fn mode_toggles_and_defaults_to_light() {
        assert_eq!(Mode::default(), Mode::Light);
        assert_eq!(Mode::Light.toggled(), Mode::Dark);
        assert_eq!(Mode::Dark.toggled().toggled(), Mode::Dark);
        assert!(Mode::Dark.is_dark());
        assert!(!Mode::Light.is_dark());
    }

    #[test]
    fn scheme_iterates_in_role_order() {
        let scheme = ColorScheme::from_pairs([
            (ColorRole::Ring, "#000000"),
            (ColorRole::Background, "#ffffff"),
            (ColorRole::Primary, "#2563eb"),
        ]);
        let roles: Vec<ColorRole> = scheme.iter().map(|(r, _)| r).collect();
        assert_eq!(
            roles,
            vec![ColorRole::Background, ColorRole::Primary, ColorRole::Ring]
        );
    }

    #[test]
    fn scheme_deserializes_camel_case_and_skips_unknown_keys() {
        let json = r##"{"cardForeground": "#0a0a0a", "chart1": "#123456", "ring": "#a3a3a3"}"##;
        let scheme: ColorScheme = serde_json::from_str(json).unwrap();
        assert_eq!(scheme.len(), 2);
        assert_eq!(scheme.get(ColorRole::CardForeground), Some("#0a0a0a"));
        assert_eq!(scheme.get(ColorRole::Ring), Some("#a3a3a3"));
    }

    #[test]
    fn scheme_serializes_with_config_keys() {
        let scheme = ColorScheme::new().with(ColorRole::MutedForeground, "#737373");
        let json = serde_json::to_string(&scheme).unwrap();
        assert_eq!(json, r##"{"mutedForeground":"#737373"}"##);
    }

    #[test]
    fn invalid_roles_reports_malformed_hex() {
        let scheme = ColorScheme::from_pairs([
            (ColorRole::Primary, "#2563eb"),
            (ColorRole::Accent, "blue"),
            (ColorRole::Border, "#e5e5"),
        ]);
        assert_eq!(
            scheme.invalid_roles(),
            vec![ColorRole::Accent, ColorRole::Border]
        );
    }

    #[test]
    fn theme_scheme_selects_by_mode() {
        let theme = Theme {
            key: "t".into(),
            name: "T".into(),
            swatch: "#ffffff".into(),
            light: ColorScheme::new().with(ColorRole::Background, "#ffffff"),
            dark: ColorScheme::new().with(ColorRole::Background, "#000000"),
        };
        assert_eq!(
            theme.scheme(Mode::Light).get(ColorRole::Background),
            Some("#ffffff")
        );
        assert_eq!(
            theme.scheme(Mode::Dark).get(ColorRole::Background),
            Some("#000000")
        );
    }
}
