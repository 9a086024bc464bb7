//! Applying a theme onto a style root.

use std::collections::BTreeMap;

use crate::convert::Converter;
use crate::css::css_declarations;
use crate::theme::{Mode, Theme};

/// A target for CSS custom properties, e.g. a document's root element.
pub trait StyleSink {
    /// Sets the custom property `name` (including the leading `--`).
    fn set_property(&mut self, name: &str, value: &str);

    /// Adds or removes the dark-mode marker (the `dark` class in a browser).
    fn set_dark(&mut self, dark: bool);
}

/// Writes every declaration of `theme`'s `mode` scheme onto `sink`.
///
/// Does not touch the dark marker; callers toggle it alongside.
pub fn apply_theme<K: StyleSink + ?Sized>(
    theme: &Theme,
    mode: Mode,
    converter: &Converter,
    sink: &mut K,
) {
    for (name, value) in css_declarations(theme.scheme(mode), converter) {
        sink.set_property(&name, &value);
    }
}

/// In-memory style root.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleMap {
    properties: BTreeMap<String, String>,
    dark: bool,
}

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    pub fn is_dark(&self) -> bool {
        self.dark
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl StyleSink for StyleMap {
    fn set_property(&mut self, name: &str, value: &str) {
        self.properties.insert(name.to_string(), value.to_string());
    }

    fn set_dark(&mut self, dark: bool) {
        self.dark = dark;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ThemeRegistry;
    use crate::role::ColorRole;

    #[test]
    fn apply_writes_every_role() {
        let registry = ThemeRegistry::builtin();
        let mut style = StyleMap::new();
        apply_theme(
            registry.require("blue").unwrap(),
            Mode::Light,
            &Converter::default(),
            &mut style,
        );
        assert_eq!(style.len(), ColorRole::ALL.len());
        assert_eq!(
            style.get("--primary"),
            Some("oklch(0.461 0.534 292.751)")
        );
        assert!(!style.is_dark());
    }

    #[test]
    fn apply_dark_uses_dark_scheme() {
        let registry = ThemeRegistry::builtin();
        let theme = registry.require("blue").unwrap();
        let converter = Converter::default();
        let mut style = StyleMap::new();
        apply_theme(theme, Mode::Dark, &converter, &mut style);
        assert_eq!(
            style.get("--primary").map(String::from),
            Some(converter.css_value("#3b82f6"))
        );
    }

    #[test]
    fn apply_overwrites_previous_values() {
        let registry = ThemeRegistry::builtin();
        let converter = Converter::default();
        let mut style = StyleMap::new();
        apply_theme(registry.require("green").unwrap(), Mode::Light, &converter, &mut style);
        apply_theme(registry.require("rose").unwrap(), Mode::Light, &converter, &mut style);
        assert_eq!(
            style.get("--primary").map(String::from),
            Some(converter.css_value("#e11d48"))
        );
        assert_eq!(style.len(), ColorRole::ALL.len());
    }

    #[test]
    fn apply_through_trait_object() {
        let registry = ThemeRegistry::builtin();
        let mut style = StyleMap::new();
        let sink: &mut dyn StyleSink = &mut style;
        apply_theme(registry.default_theme(), Mode::Light, &Converter::default(), sink);
        assert_eq!(style.len(), ColorRole::ALL.len());
    }
}
