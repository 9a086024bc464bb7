//! Color types and conversion stages.
//!
//! Each stage of the hex → LCH pipeline is a pure function over a small
//! `Copy` struct: `Srgb` → `LinearRgb` → `Xyz` → `Lab` → `Lch`. The OKLab
//! stages (`LinearRgb` → `OkLab` → `OkLch`) share the same linear input.
//! Uses `f64` throughout.

use crate::error::ThemeError;

/// sRGB color with components in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// Linear RGB color (gamma-expanded).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// CIE 1931 tristimulus values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// CIE Lab. `l` is nominally in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

/// Cylindrical Lab: lightness, chroma, hue in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lch {
    pub l: f64,
    pub c: f64,
    pub h: f64,
}

/// OKLab perceptual color space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OkLab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

/// OKLCh (cylindrical form of OKLab).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OkLch {
    pub l: f64,
    pub c: f64,
    pub h: f64,
}

/// Reference white used to normalize XYZ before the Lab transform.
pub const REFERENCE_WHITE: Xyz = Xyz {
    x: 0.95047,
    y: 1.0,
    z: 1.08883,
};

const LAB_DELTA: f64 = 6.0 / 29.0;

impl Srgb {
    /// Parses a hex color string like "#ff00aa" or "ff00aa" (case insensitive).
    ///
    /// Exactly six hex digits are accepted, with at most one leading `#`.
    pub fn from_hex(hex: &str) -> Result<Srgb, ThemeError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 {
            return Err(ThemeError::InvalidColor(format!(
                "expected 6 hex digits, got {:?}",
                hex
            )));
        }
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ThemeError::InvalidColor(format!(
                "non-hex digit in {:?}",
                hex
            )));
        }
        let channel = |i: usize| -> Result<f64, ThemeError> {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map(|v| v as f64 / 255.0)
                .map_err(|e| ThemeError::InvalidColor(format!("{hex:?}: {e}")))
        };
        Ok(Srgb {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }

    /// Converts the color to a lowercase hex string like `"#rrggbb"`.
    ///
    /// Components are quantized to 8-bit (0–255) with rounding.
    pub fn to_hex(self) -> String {
        let r = (self.r.clamp(0.0, 1.0) * 255.0).round() as u8;
        let g = (self.g.clamp(0.0, 1.0) * 255.0).round() as u8;
        let b = (self.b.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

/// Applies inverse sRGB gamma to a single component.
fn srgb_component_to_linear(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Converts sRGB to linear RGB by applying inverse sRGB gamma.
pub fn srgb_to_linear(c: Srgb) -> LinearRgb {
    LinearRgb {
        r: srgb_component_to_linear(c.r),
        g: srgb_component_to_linear(c.g),
        b: srgb_component_to_linear(c.b),
    }
}

/// Converts linear RGB to XYZ with the sRGB primaries matrix.
pub fn linear_to_xyz(c: LinearRgb) -> Xyz {
    Xyz {
        x: 0.4124564 * c.r + 0.3575761 * c.g + 0.1804375 * c.b,
        y: 0.2126729 * c.r + 0.7151522 * c.g + 0.0721750 * c.b,
        z: 0.0193339 * c.r + 0.1191920 * c.g + 0.9503041 * c.b,
    }
}

/// Lab companding function.
fn lab_f(t: f64) -> f64 {
    if t > LAB_DELTA.powi(3) {
        t.powf(1.0 / 3.0)
    } else {
        t / (3.0 * LAB_DELTA * LAB_DELTA) + 4.0 / 29.0
    }
}

/// Converts XYZ to Lab relative to [`REFERENCE_WHITE`].
pub fn xyz_to_lab(c: Xyz) -> Lab {
    let fx = lab_f(c.x / REFERENCE_WHITE.x);
    let fy = lab_f(c.y / REFERENCE_WHITE.y);
    let fz = lab_f(c.z / REFERENCE_WHITE.z);
    Lab {
        l: 116.0 * fy - 16.0,
        a: 500.0 * (fx - fy),
        b: 200.0 * (fy - fz),
    }
}

/// Converts Lab to its cylindrical form. Hue is in [0, 360).
pub fn lab_to_lch(c: Lab) -> Lch {
    Lch {
        l: c.l,
        c: (c.a * c.a + c.b * c.b).sqrt(),
        h: hue_degrees(c.a, c.b),
    }
}

/// Convenience: sRGB to LCH via linear RGB, XYZ, and Lab.
pub fn srgb_to_lch(c: Srgb) -> Lch {
    lab_to_lch(xyz_to_lab(linear_to_xyz(srgb_to_linear(c))))
}

/// Converts linear RGB to OKLab via the OKLab matrix transform.
pub fn linear_to_oklab(c: LinearRgb) -> OkLab {
    let l_ = 0.4122214708 * c.r + 0.5363325363 * c.g + 0.0514459929 * c.b;
    let m_ = 0.2119034982 * c.r + 0.6806995451 * c.g + 0.1073969566 * c.b;
    let s_ = 0.0883024619 * c.r + 0.2817188376 * c.g + 0.6299787005 * c.b;

    let l_c = l_.cbrt();
    let m_c = m_.cbrt();
    let s_c = s_.cbrt();

    OkLab {
        l: 0.2104542553 * l_c + 0.7936177850 * m_c - 0.0040720468 * s_c,
        a: 1.9779984951 * l_c - 2.4285922050 * m_c + 0.4505937099 * s_c,
        b: 0.0259040371 * l_c + 0.7827717662 * m_c - 0.8086757660 * s_c,
    }
}

/// Converts OKLab to OKLCh.
///
/// If chroma is below 1e-10 the hue is pinned to 0.0, since `atan2` of
/// near-zero axes is noise.
pub fn oklab_to_oklch(c: OkLab) -> OkLch {
    let ch = (c.a * c.a + c.b * c.b).sqrt();
    let h = if ch < 1e-10 { 0.0 } else { hue_degrees(c.a, c.b) };
    OkLch { l: c.l, c: ch, h }
}

/// Convenience: sRGB to OKLCh via linear RGB and OKLab.
pub fn srgb_to_oklch(c: Srgb) -> OkLch {
    oklab_to_oklch(linear_to_oklab(srgb_to_linear(c)))
}

/// `atan2(b, a)` in degrees, normalized to [0, 360).
fn hue_degrees(a: f64, b: f64) -> f64 {
    let h = b.atan2(a).to_degrees();
    let h = if h < 0.0 { h + 360.0 } else { h };
    // -1e-15 + 360.0 rounds to exactly 360.0; +0.0 clears negative zero.
    if h >= 360.0 {
        0.0
    } else {
        h + 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-6;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    // -- Hex parsing --

    #[test]
    fn from_hex_parses_red_with_hash() {
        let red = Srgb::from_hex("#ff0000").unwrap();
        assert!(approx_eq(red.r, 1.0));
        assert!(approx_eq(red.g, 0.0));
        assert!(approx_eq(red.b, 0.0));
    }

    #[test]
    fn from_hex_parses_green_without_hash() {
        let green = Srgb::from_hex("00ff00").unwrap();
        assert!(approx_eq(green.r, 0.0));
        assert!(approx_eq(green.g, 1.0));
        assert!(approx_eq(green.b, 0.0));
    }

    #[test]
    fn from_hex_is_case_insensitive() {
        let upper = Srgb::from_hex("#FF00AA").unwrap();
        let lower = Srgb::from_hex("#ff00aa").unwrap();
        assert_eq!(upper, lower);
    }

    #[test]
    fn from_hex_rejects_malformed_input() {
        for bad in [
            "", "#", "#fff", "#gggggg", "#ff00ff00", "##ff0000", " #ff0000", "#ff0000 ", "+fffff",
            "#+fffff", "ff 000", "0xff00",
        ] {
            assert!(Srgb::from_hex(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn from_hex_rejects_multibyte_without_panicking() {
        // Six bytes, but not six characters; slicing must never be reached.
        assert!(Srgb::from_hex("aé000").is_err());
        assert!(Srgb::from_hex("#ééé").is_err());
    }

    #[test]
    fn from_hex_parses_arbitrary_color() {
        let color = Srgb::from_hex("#804020").unwrap();
        assert!(approx_eq(color.r, 0x80 as f64 / 255.0));
        assert!(approx_eq(color.g, 0x40 as f64 / 255.0));
        assert!(approx_eq(color.b, 0x20 as f64 / 255.0));
    }

    #[test]
    fn to_hex_normalizes_case_and_hash() {
        assert_eq!(Srgb::from_hex("C0FFEE").unwrap().to_hex(), "#c0ffee");
    }

    #[test]
    fn to_hex_clamps_out_of_range() {
        let color = Srgb {
            r: 1.5,
            g: -0.1,
            b: 0.5,
        };
        assert_eq!(color.to_hex(), "#ff0080");
    }

    // -- Gamma expansion --

    #[test]
    fn srgb_gamma_boundary_at_0_04045() {
        let lin = srgb_to_linear(Srgb {
            r: 0.04045,
            g: 0.0,
            b: 1.0,
        });
        assert!(approx_eq(lin.r, 0.04045 / 12.92));
        assert!(approx_eq(lin.g, 0.0));
        assert!(approx_eq(lin.b, 1.0));

        let above = srgb_to_linear(Srgb {
            r: 0.04046,
            g: 0.0,
            b: 0.0,
        });
        let expected = ((0.04046 + 0.055) / 1.055_f64).powf(2.4);
        assert!(approx_eq(above.r, expected));
    }

    // -- XYZ / Lab --

    #[test]
    fn white_maps_near_reference_white() {
        let xyz = linear_to_xyz(LinearRgb {
            r: 1.0,
            g: 1.0,
            b: 1.0,
        });
        assert!(approx_eq(xyz.x, REFERENCE_WHITE.x), "x: {}", xyz.x);
        assert!((xyz.y - REFERENCE_WHITE.y).abs() < 1e-6, "y: {}", xyz.y);
        assert!(approx_eq(xyz.z, REFERENCE_WHITE.z), "z: {}", xyz.z);
    }

    #[test]
    fn black_has_zero_lab_lightness() {
        let lab = xyz_to_lab(Xyz {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        });
        assert!(lab.l.abs() < 1e-9, "L: {}", lab.l);
        assert!(lab.a.abs() < 1e-9);
        assert!(lab.b.abs() < 1e-9);
    }

    #[test]
    fn lab_f_uses_linear_segment_below_threshold() {
        let t = 0.001;
        let expected = t / (3.0 * LAB_DELTA * LAB_DELTA) + 4.0 / 29.0;
        assert!(approx_eq(lab_f(t), expected));
        assert!(approx_eq(lab_f(0.125), 0.5));
    }

    #[test]
    fn pure_red_lab_matches_reference_values() {
        let lch = srgb_to_lch(Srgb::from_hex("#ff0000").unwrap());
        assert!((lch.l - 53.24).abs() < 0.01, "L: {}", lch.l);
        assert!((lch.h - 40.0).abs() < 0.01, "h: {}", lch.h);
        assert!((lch.c - 104.55).abs() < 0.01, "C: {}", lch.c);
    }

    #[test]
    fn lab_to_lch_normalizes_negative_hue() {
        let lch = lab_to_lch(Lab {
            l: 50.0,
            a: 0.0,
            b: -10.0,
        });
        assert!(approx_eq(lch.h, 270.0), "h: {}", lch.h);
        assert!(approx_eq(lch.c, 10.0));
    }

    #[test]
    fn hue_never_reaches_360_or_negative_zero() {
        let h = hue_degrees(1.0, -1e-300);
        assert!((0.0..360.0).contains(&h), "h: {h}");
        let z = hue_degrees(1.0, -0.0);
        assert!(z.is_sign_positive(), "negative zero hue");
    }

    // -- OKLab --

    #[test]
    fn white_in_oklab_has_l_near_one_and_zero_chroma() {
        let lch = srgb_to_oklch(Srgb {
            r: 1.0,
            g: 1.0,
            b: 1.0,
        });
        assert!(approx_eq(lch.l, 1.0), "expected L~1.0, got {}", lch.l);
        assert!(lch.c < 1e-6, "expected C~0, got {}", lch.c);
    }

    #[test]
    fn oklch_pure_red_has_hue_near_29_degrees() {
        let lch = srgb_to_oklch(Srgb {
            r: 1.0,
            g: 0.0,
            b: 0.0,
        });
        assert!((lch.h - 29.2).abs() < 1.0, "expected ~29.2, got {}", lch.h);
        assert!(lch.c > 0.0);
    }

    #[test]
    fn oklch_nan_guard_zero_chroma_sets_hue_to_zero() {
        let lch = oklab_to_oklch(OkLab {
            l: 0.5,
            a: 0.0,
            b: 0.0,
        });
        assert_eq!(lch.h, 0.0);
        assert!(!lch.h.is_nan());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn any_string_parses_or_errors_without_panic(s in "\\PC{0,10}") {
                let _ = Srgb::from_hex(&s);
            }

            #[test]
            fn lch_hue_stays_in_range(r in 0u8..=255, g in 0u8..=255, b in 0u8..=255) {
                let lch = srgb_to_lch(Srgb {
                    r: r as f64 / 255.0,
                    g: g as f64 / 255.0,
                    b: b as f64 / 255.0,
                });
                prop_assert!(lch.h >= 0.0 && lch.h < 360.0, "hue {}", lch.h);
                prop_assert!(!lch.c.is_nan());
            }
        }
    }
}
