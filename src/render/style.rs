// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Defines dot colors.
//! Config colors are `#RRGGBB` strings (case-insensitive), they are normalized
//! to rgb triples here so dimming and blending can be done in integer space.
//! Malformed strings never fail a frame, they fall back to a default color.

#[cfg(feature = "term")]
use crossterm::style::Color as CColor;
use log::warn;

/// default dot color when nothing else is configured
pub const DEFAULT_COLOR: Rgb = Rgb::new(0x00, 0xff, 0x00);

/// default surface background
pub const DEFAULT_BACKGROUND: Rgb = Rgb::new(0x00, 0x00, 0x00);

/// alpha of the unlit dot grid, tinted from the primary color
pub const DIM_ALPHA: f32 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Paints `over` on top of self with the given alpha (0.0 ~ 1.0).
    pub fn blend(self, over: Rgb, alpha: f32) -> Rgb {
        let a = alpha.clamp(0.0, 1.0);
        let mix = |base: u8, top: u8| -> u8 {
            (base as f32 + (top as f32 - base as f32) * a).round() as u8
        };
        Rgb {
            r: mix(self.r, over.r),
            g: mix(self.g, over.g),
            b: mix(self.b, over.b),
        }
    }

    /// Dim tint of self as seen on the given background.
    pub fn dim_on(self, background: Rgb) -> Rgb {
        background.blend(self, DIM_ALPHA)
    }

    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from(c: (u8, u8, u8)) -> Self {
        Rgb::new(c.0, c.1, c.2)
    }
}

#[cfg(feature = "term")]
impl From<Rgb> for CColor {
    fn from(c: Rgb) -> Self {
        CColor::Rgb {
            r: c.r,
            g: c.g,
            b: c.b,
        }
    }
}

/// Parses `#RRGGBB`, the leading '#' is optional.
pub fn parse_hex(s: &str) -> Option<Rgb> {
    let hex = s.trim();
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
}

/// Resolves an optional color string, falling back when absent or malformed.
pub fn color_or(s: Option<&str>, fallback: Rgb) -> Rgb {
    match s {
        Some(cs) => parse_hex(cs).unwrap_or_else(|| {
            warn!("malformed color {:?}, using {}", cs, fallback.to_hex());
            fallback
        }),
        None => fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_any_case() {
        assert_eq!(parse_hex("#FF8800"), Some(Rgb::new(255, 136, 0)));
        assert_eq!(parse_hex("#ff8800"), Some(Rgb::new(255, 136, 0)));
        assert_eq!(parse_hex("00ff41"), Some(Rgb::new(0, 255, 0x41)));
    }

    #[test]
    fn rejects_malformed_hex() {
        for s in ["", "#", "#FFF", "#GG0000", "#1234567", "red", "#12 456"] {
            assert_eq!(parse_hex(s), None, "{:?}", s);
        }
    }

    #[test]
    fn malformed_falls_back() {
        assert_eq!(color_or(Some("nope"), DEFAULT_COLOR), DEFAULT_COLOR);
        assert_eq!(color_or(None, Rgb::new(1, 2, 3)), Rgb::new(1, 2, 3));
        assert_eq!(color_or(Some("#010203"), DEFAULT_COLOR), Rgb::new(1, 2, 3));
    }

    #[test]
    fn blend_endpoints() {
        let bg = Rgb::new(0, 0, 0);
        let fg = Rgb::new(200, 100, 50);
        assert_eq!(bg.blend(fg, 0.0), bg);
        assert_eq!(bg.blend(fg, 1.0), fg);
        assert_eq!(bg.blend(fg, 0.5), Rgb::new(100, 50, 25));
        assert_eq!(fg.dim_on(bg), Rgb::new(20, 10, 5));
    }

    #[test]
    fn hex_round_trip_uppercases() {
        assert_eq!(parse_hex("#a1b2c3").map(Rgb::to_hex), Some("#A1B2C3".to_string()));
    }
}
