//! Reading and rewriting a stylesheet on disk.

use std::fs;
use std::path::Path;

use theme_forge_core::{rewrite_stylesheet, Converter, Theme, ThemeConfig};
use tracing::info;

use crate::error::CliError;

/// Rewrites the stylesheet at `path` with `theme`'s light and dark schemes.
///
/// The file is only written once the rewrite has succeeded.
pub fn apply_to_file(path: &Path, theme: &Theme, converter: &Converter) -> Result<(), CliError> {
    let css = fs::read_to_string(path)
        .map_err(|e| CliError::Io(format!("cannot read {}: {e}", path.display())))?;
    let rewritten = rewrite_stylesheet(&css, &theme.light, &theme.dark, converter)?;
    fs::write(path, rewritten)
        .map_err(|e| CliError::Io(format!("cannot write {}: {e}", path.display())))?;
    info!(theme = %theme.key, path = %path.display(), "applied theme");
    Ok(())
}

/// Loads a theme configuration file.
pub fn load_config(path: &Path) -> Result<ThemeConfig, CliError> {
    let json = fs::read_to_string(path)
        .map_err(|e| CliError::Io(format!("cannot read {}: {e}", path.display())))?;
    ThemeConfig::from_json(&json)
        .map_err(|e| CliError::Input(format!("{}: {e}", path.display())))
}
