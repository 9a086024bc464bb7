//! Error types for theme-forge core.
//!
//! Color conversion never returns these: malformed hex falls back to black.
//! They cover configuration, stylesheet rewriting, and preference storage.

use thiserror::Error;

/// Errors produced by theme operations.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A theme key was not found in the registry.
    #[error("unknown theme: {0}")]
    UnknownTheme(String),

    /// A theme configuration document was malformed or inconsistent.
    #[error("invalid theme config: {0}")]
    InvalidConfig(String),

    /// A stylesheet did not contain the blocks needed for rewriting.
    #[error("stylesheet error: {0}")]
    Stylesheet(String),

    /// A preference store failed to read or write.
    #[error("storage error: {0}")]
    Storage(String),
}

impl From<serde_json::Error> for ThemeError {
    fn from(e: serde_json::Error) -> Self {
        ThemeError::InvalidConfig(e.to_string())
    }
}
