//! Failures of `theme-forge` commands and the exit status each one maps to.
//!
//! | code | cause |
//! |------|-------|
//! | 2    | bad arguments, reported by clap before `run` |
//! | 10   | the stylesheet has no `:root` block with `--radius`, or a theme config is inconsistent |
//! | 11   | the stylesheet or config file cannot be read or written |
//! | 12   | an unknown theme key, mode or model name, or a malformed config file |
//! | 13   | `--json` output could not be encoded |

use thiserror::Error;
use theme_forge_core::ThemeError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Theme(ThemeError),
    #[error("{0}")]
    Io(String),
    /// Something the user typed names nothing we know.
    #[error("{0}")]
    Input(String),
    #[error("cannot encode output: {0}")]
    Serialization(String),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Theme(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }
}

impl From<ThemeError> for CliError {
    fn from(e: ThemeError) -> Self {
        match e {
            // A theme key on the command line is user input.
            ThemeError::UnknownTheme(_) => CliError::Input(e.to_string()),
            other => CliError::Theme(other),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_variant_has_its_own_exit_code() {
        let codes = [
            CliError::Theme(ThemeError::Stylesheet("no :root".into())).exit_code(),
            CliError::Io("cannot read globals.css".into()).exit_code(),
            CliError::Input("unknown mode \"dim\"".into()).exit_code(),
            CliError::Serialization("float is NaN".into()).exit_code(),
        ];
        assert_eq!(codes, [10, 11, 12, 13]);
    }

    #[test]
    fn unknown_theme_is_reported_as_input() {
        let err = CliError::from(ThemeError::UnknownTheme("teal".into()));
        assert!(matches!(err, CliError::Input(_)));
        assert_eq!(err.exit_code(), 12);
        assert!(err.to_string().contains("teal"));
    }

    #[test]
    fn stylesheet_and_config_errors_keep_theme_message() {
        let inner = ThemeError::InvalidConfig("chroma divisor must be positive".into());
        let expected = inner.to_string();
        let err = CliError::from(inner);
        assert_eq!(err.exit_code(), 10);
        assert_eq!(err.to_string(), expected);
    }

    #[test]
    fn json_encoding_failure_is_labelled() {
        let bad = serde_json::from_str::<serde_json::Value>("{invalid").unwrap_err();
        let err = CliError::from(bad);
        assert_eq!(err.exit_code(), 13);
        assert!(err.to_string().starts_with("cannot encode output: "));
    }
}
