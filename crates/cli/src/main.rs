#![deny(unsafe_code)]
//! CLI binary for theme-forge.
//!
//! Subcommands:
//! - `convert <hex>...` — print `oklch(...)` values
//! - `list` — print available themes, marking the default
//! - `vars [theme]` — print a theme's CSS variables
//! - `apply [theme]` — rewrite a stylesheet's `:root` and `.dark` blocks

mod error;
mod stylesheet;

use clap::{Parser, Subcommand};
use error::CliError;
use std::path::PathBuf;
use std::process;
use theme_forge_core::{
    css_declarations, css_variables, Converter, LchModel, Mode, Srgb, Theme, ThemeConfig,
    ThemeRegistry,
};
use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "theme-forge", about = "OKLCH theme variable generator")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Theme configuration file merged over the built-in themes.
    #[arg(long, global = true)]
    themes: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert hex colors to oklch(...) values.
    Convert {
        /// Colors like "#2563eb" or "2563eb".
        #[arg(required = true)]
        colors: Vec<String>,

        /// Print the bare "L C H" triple without the oklch() wrapper.
        #[arg(long)]
        triple: bool,

        /// Color model (lab, oklab). Defaults to the configured model.
        #[arg(long)]
        model: Option<String>,
    },
    /// List available themes.
    List,
    /// Print a theme's CSS variables.
    Vars {
        /// Theme key. Defaults to the configured default theme.
        theme: Option<String>,

        /// Scheme variant (light, dark).
        #[arg(short, long, default_value = "light")]
        mode: String,
    },
    /// Write a theme into a stylesheet's :root and .dark blocks.
    Apply {
        /// Theme key. Defaults to the configured default theme.
        theme: Option<String>,

        /// Stylesheet to rewrite.
        #[arg(long, default_value = "src/app/globals.css")]
        css: PathBuf,
    },
}

/// Registry and converter after merging an optional config file.
fn load(themes: Option<&PathBuf>) -> Result<(ThemeRegistry, Converter), CliError> {
    let config = match themes {
        Some(path) => stylesheet::load_config(path)?,
        None => ThemeConfig::default(),
    };
    let registry = ThemeRegistry::with_config(&config)?;
    let converter = config.converter()?;
    Ok((registry, converter))
}

fn select<'a>(registry: &'a ThemeRegistry, key: Option<&str>) -> Result<&'a Theme, CliError> {
    let key = key.unwrap_or(registry.default_key());
    registry.get(key).ok_or_else(|| {
        CliError::Input(format!(
            "unknown theme {key:?}; available: {}",
            registry.keys().join(", ")
        ))
    })
}

fn run(cli: Cli) -> Result<(), CliError> {
    let (registry, converter) = load(cli.themes.as_ref())?;

    match cli.command {
        Command::Convert {
            colors,
            triple,
            model,
        } => {
            let converter = match model {
                Some(name) => converter
                    .with_model(LchModel::from_name(&name).map_err(|e| CliError::Input(e.to_string()))?),
                None => converter,
            };
            let mut results = Vec::with_capacity(colors.len());
            for input in &colors {
                let parsed = Srgb::from_hex(input);
                if let Err(e) = &parsed {
                    warn!(input = %input, error = %e, "using black fallback");
                }
                let value = if triple {
                    converter.triple(input)
                } else {
                    converter.css_value(input)
                };
                results.push((input, parsed.ok().map(Srgb::to_hex), value));
            }

            if cli.json {
                let info: Vec<_> = results
                    .iter()
                    .map(|(input, hex, value)| {
                        serde_json::json!({
                            "input": input,
                            "valid": hex.is_some(),
                            "hex": hex,
                            "value": value,
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                for (_, _, value) in &results {
                    println!("{value}");
                }
            }
        }
        Command::List => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&registry.summaries())?);
            } else {
                println!("Themes:");
                for summary in registry.summaries() {
                    let marker = if summary.is_default { "✓" } else { " " };
                    println!(
                        "  [{marker}] {:<10} - {} ({})",
                        summary.key, summary.name, summary.swatch
                    );
                }
            }
        }
        Command::Vars { theme, mode } => {
            let mode = Mode::from_name(&mode).map_err(|e| CliError::Input(e.to_string()))?;
            let theme = select(&registry, theme.as_deref())?;
            let scheme = theme.scheme(mode);
            if cli.json {
                let vars: Vec<_> = css_declarations(scheme, &converter)
                    .into_iter()
                    .map(|(name, value)| serde_json::json!({"name": name, "value": value}))
                    .collect();
                let info = serde_json::json!({
                    "theme": theme.key,
                    "mode": mode.as_str(),
                    "variables": vars,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("{}", css_variables(scheme, &converter, "  "));
            }
        }
        Command::Apply { theme, css } => {
            let theme = select(&registry, theme.as_deref())?;
            stylesheet::apply_to_file(&css, theme, &converter)?;
            if cli.json {
                let info = serde_json::json!({
                    "theme": theme.key,
                    "name": theme.name,
                    "stylesheet": css.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "applied theme {} ({}) -> {}",
                    theme.name,
                    theme.key,
                    css.display()
                );
            }
        }
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
