#![deny(unsafe_code)]
//! Core types for theme-forge.
//!
//! Converts hex colors into `oklch(...)` CSS values ([`Converter`],
//! [`hex_to_oklch`]), models themes as light/dark [`ColorScheme`]s keyed by
//! [`ColorRole`], generates and splices CSS variables, and keeps a persisted
//! theme/mode selection applied onto a [`StyleSink`].

pub mod color;
pub mod convert;
pub mod css;
pub mod error;
pub mod preference;
pub mod registry;
pub mod role;
pub mod style;
pub mod theme;

pub use color::{LinearRgb, OkLab, OkLch, Srgb};
pub use convert::{
    hex_to_oklch, hex_to_oklch_triple, Converter, CssLch, LchModel, FALLBACK_OKLCH,
    FALLBACK_TRIPLE,
};
pub use css::{css_declarations, css_variables, rewrite_stylesheet};
pub use error::ThemeError;
pub use preference::{MemoryStore, PreferenceStore, ThemeController, ThemePreference};
pub use registry::{ThemeConfig, ThemeRegistry, ThemeSummary};
pub use role::ColorRole;
pub use style::{apply_theme, StyleMap, StyleSink};
pub use theme::{ColorScheme, Mode, Theme};
