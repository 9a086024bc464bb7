//! CSS custom property generation and stylesheet rewriting.
//!
//! A scheme becomes one `--role: oklch(L C H);` declaration per present role.
//! [`rewrite_stylesheet`] splices the light declarations into the `:root`
//! block after `--radius` and replaces the body of the `.dark` block.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use tracing::{debug, warn};

use crate::convert::Converter;
use crate::error::ThemeError;
use crate::theme::ColorScheme;

/// `:root { ... --radius: <value>; ... }`, capturing the prefix up to
/// `--radius` and the radius value.
static ROOT_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r":root\s*\{([^}]*?)--radius:\s*([^;}]*?)\s*;[^}]*\}")
        .expect("root block pattern is valid")
});

static DARK_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\.dark\s*\{)[^}]*\}").expect("dark block pattern is valid")
});

/// `(--name, oklch(...))` pairs in role order.
pub fn css_declarations(scheme: &ColorScheme, converter: &Converter) -> Vec<(String, String)> {
    scheme
        .iter()
        .map(|(role, hex)| (format!("--{}", role.css_name()), converter.css_value(hex)))
        .collect()
}

/// One `{indent}--name: value;` line per present role, joined by newlines.
pub fn css_variables(scheme: &ColorScheme, converter: &Converter, indent: &str) -> String {
    css_declarations(scheme, converter)
        .into_iter()
        .map(|(name, value)| format!("{indent}{name}: {value};"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Writes `light` into the `:root` block and `dark` into the `.dark` block.
///
/// In `:root`, everything before `--radius` and the radius value itself are
/// kept; everything after is replaced. The whole `.dark` body is replaced,
/// and a `.dark` block is appended when none exists.
///
/// Returns `ThemeError::Stylesheet` if no `:root` block declares `--radius`.
pub fn rewrite_stylesheet(
    css: &str,
    light: &ColorScheme,
    dark: &ColorScheme,
    converter: &Converter,
) -> Result<String, ThemeError> {
    if !ROOT_BLOCK.is_match(css) {
        return Err(ThemeError::Stylesheet(
            "no :root block declaring --radius".to_string(),
        ));
    }

    let light_vars = css_variables(light, converter, "  ");
    let rewritten = ROOT_BLOCK.replace(css, |caps: &Captures| {
        format!(
            ":root {{{}--radius: {};{}}}",
            &caps[1],
            &caps[2],
            block_body(&light_vars)
        )
    });
    debug!(count = light.len(), "rewrote :root color variables");

    let dark_vars = css_variables(dark, converter, "  ");
    if DARK_BLOCK.is_match(&rewritten) {
        let out = DARK_BLOCK.replace(&rewritten, |caps: &Captures| {
            format!("{}{}}}", &caps[1], block_body(&dark_vars))
        });
        debug!(count = dark.len(), "rewrote .dark color variables");
        Ok(out.into_owned())
    } else {
        warn!("stylesheet has no .dark block; appending one");
        let mut out = rewritten.into_owned();
        if !out.ends_with('\n') {
            out.push('\n');
        }
        out.push_str(&format!("\n.dark {{{}}}\n", block_body(&dark_vars)));
        Ok(out)
    }
}

fn block_body(vars: &str) -> String {
    if vars.is_empty() {
        "\n".to_string()
    } else {
        format!("\n{vars}\n")
    }
}
