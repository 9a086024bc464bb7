//! Hex → `oklch(...)` conversion for CSS custom properties.
//!
//! [`Converter`] turns a hex string into a [`CssLch`] triple. Malformed input
//! never errors: it yields [`CssLch::BLACK`], rendered as the `oklch(0 0 0)`
//! fallback in wrapped form and `0.000 0.000 0.000` as a bare triple.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::{srgb_to_lch, srgb_to_oklch, Srgb};
use crate::error::ThemeError;

/// Wrapped output for input that is not a 6-digit hex color.
pub const FALLBACK_OKLCH: &str = "oklch(0 0 0)";

/// Bare-triple output for input that is not a 6-digit hex color.
pub const FALLBACK_TRIPLE: &str = "0.000 0.000 0.000";

/// Default divisor mapping Lab chroma onto the CSS OKLCH chroma range.
pub const DEFAULT_CHROMA_DIVISOR: f64 = 150.0;

/// Which color model produces the lightness/chroma/hue triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LchModel {
    /// CIE Lab via XYZ, lightness /100 and chroma divided by the converter's
    /// divisor. An approximation of OKLCH.
    #[default]
    Lab,
    /// Standard OKLab-derived OKLCH, unscaled.
    Oklab,
}

impl LchModel {
    /// Parses a model name (`"lab"` or `"oklab"`).
    pub fn from_name(name: &str) -> Result<Self, ThemeError> {
        match name {
            "lab" => Ok(LchModel::Lab),
            "oklab" => Ok(LchModel::Oklab),
            other => Err(ThemeError::InvalidConfig(format!(
                "unknown color model {other:?} (expected \"lab\" or \"oklab\")"
            ))),
        }
    }
}

/// A lightness/chroma/hue triple ready for `oklch(...)`.
///
/// `Display` renders each component with exactly three fractional digits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CssLch {
    pub l: f64,
    pub c: f64,
    pub h: f64,
}

impl CssLch {
    pub const BLACK: CssLch = CssLch {
        l: 0.0,
        c: 0.0,
        h: 0.0,
    };

    /// Renders as `oklch(L C H)`.
    pub fn to_css(self) -> String {
        format!("oklch({self})")
    }
}

impl fmt::Display for CssLch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            fixed3(self.l),
            fixed3(self.c),
            hue3(self.h)
        )
    }
}

/// Formats with three fractional digits, never producing `-0.000`.
fn fixed3(v: f64) -> String {
    let s = format!("{v:.3}");
    match s.strip_prefix('-') {
        Some(rest) if rest.bytes().all(|b| b == b'0' || b == b'.') => rest.to_string(),
        _ => s,
    }
}

/// Like [`fixed3`], but a hue in [359.9995, 360) wraps to `0.000`.
fn hue3(h: f64) -> String {
    let s = fixed3(h);
    if s == "360.000" {
        fixed3(0.0)
    } else {
        s
    }
}

/// Converts hex colors to [`CssLch`] triples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Converter {
    model: LchModel,
    chroma_divisor: f64,
}

impl Default for Converter {
    fn default() -> Self {
        Self {
            model: LchModel::Lab,
            chroma_divisor: DEFAULT_CHROMA_DIVISOR,
        }
    }
}

impl Converter {
    /// Creates a converter. The divisor only applies to [`LchModel::Lab`].
    ///
    /// Returns `ThemeError::InvalidConfig` unless `chroma_divisor` is finite
    /// and positive.
    pub fn new(model: LchModel, chroma_divisor: f64) -> Result<Self, ThemeError> {
        if !chroma_divisor.is_finite() || chroma_divisor <= 0.0 {
            return Err(ThemeError::InvalidConfig(format!(
                "chroma divisor must be a positive number, got {chroma_divisor}"
            )));
        }
        Ok(Self {
            model,
            chroma_divisor,
        })
    }

    pub fn model(&self) -> LchModel {
        self.model
    }

    pub fn chroma_divisor(&self) -> f64 {
        self.chroma_divisor
    }

    /// Returns a copy using `model`.
    pub fn with_model(self, model: LchModel) -> Self {
        Self { model, ..self }
    }

    /// Converts a parsed sRGB color.
    pub fn convert(&self, color: Srgb) -> CssLch {
        match self.model {
            LchModel::Lab => {
                let lch = srgb_to_lch(color);
                CssLch {
                    l: (lch.l / 100.0).clamp(0.0, 1.0),
                    c: lch.c / self.chroma_divisor,
                    h: lch.h,
                }
            }
            LchModel::Oklab => {
                let lch = srgb_to_oklch(color);
                CssLch {
                    l: lch.l.clamp(0.0, 1.0),
                    c: lch.c,
                    h: lch.h,
                }
            }
        }
    }

    /// Parses and converts `hex`, or `None` if it is not a 6-digit hex color.
    pub fn try_convert(&self, hex: &str) -> Option<CssLch> {
        Srgb::from_hex(hex).ok().map(|c| self.convert(c))
    }

    /// `oklch(L C H)` for `hex`, or [`FALLBACK_OKLCH`].
    pub fn css_value(&self, hex: &str) -> String {
        match self.try_convert(hex) {
            Some(lch) => lch.to_css(),
            None => FALLBACK_OKLCH.to_string(),
        }
    }

    /// `L C H` for `hex`, or [`FALLBACK_TRIPLE`].
    pub fn triple(&self, hex: &str) -> String {
        self.try_convert(hex).unwrap_or(CssLch::BLACK).to_string()
    }
}

/// Converts `hex` with the default converter, e.g. `oklch(0.461 0.534 292.751)`.
pub fn hex_to_oklch(hex: &str) -> String {
    Converter::default().css_value(hex)
}

/// Like [`hex_to_oklch`] without the `oklch(...)` wrapper.
pub fn hex_to_oklch_triple(hex: &str) -> String {
    Converter::default().triple(hex)
}
