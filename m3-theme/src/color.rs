//! Hex color parsing and formatting, plus the weighted mix used to
//! interpolate neutral tones.
//!
//! ## Usage
//!
//! Parse user supplied seeds and render palette entries as `#rrggbb`.

use std::{fmt, str::FromStr};

use crate::error::ColorError;

/// An opaque 8-bit sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// `#000000`
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    /// `#ffffff`
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    /// Creates a color from its three channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Creates a color from a packed `0xAARRGGBB` value, discarding alpha.
    #[inline]
    pub const fn from_argb(argb: u32) -> Self {
        Self {
            r: ((argb >> 16) & 0xFF) as u8,
            g: ((argb >> 8) & 0xFF) as u8,
            b: (argb & 0xFF) as u8,
        }
    }

    /// Packs the color as a fully opaque `0xAARRGGBB` value.
    #[inline]
    pub const fn to_argb(self) -> u32 {
        0xFF00_0000 | ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    /// Accepts `#rgb` and `#rrggbb` in either case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ColorError::InvalidColorFormat {
            input: s.to_string(),
        };

        let digits = s.strip_prefix('#').ok_or_else(invalid)?;
        // from_str_radix alone would let a leading '+' through
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |hex: &str| u8::from_str_radix(hex, 16).map_err(|_| invalid());

        match digits.len() {
            3 => Ok(Rgb::new(
                channel(&digits[0..1])? * 17,
                channel(&digits[1..2])? * 17,
                channel(&digits[2..3])? * 17,
            )),
            6 => Ok(Rgb::new(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            _ => Err(invalid()),
        }
    }
}

/// Parses a `#rgb` or `#rrggbb` hex color.
pub fn parse(text: &str) -> Result<Rgb, ColorError> {
    text.parse()
}

/// Renders a color as `#rrggbb` with lowercase digits.
pub fn format(rgb: Rgb) -> String {
    rgb.to_string()
}

/// Mixes two hex colors, `weight` being the proportion of `color1`.
///
/// Returns `None` when either color fails to parse, so a caller can skip
/// the value instead of aborting.
pub fn mix(color1: &str, color2: &str, weight: f64) -> Option<String> {
    let color1 = parse(color1).ok()?;
    let color2 = parse(color2).ok()?;
    Some(mix_rgb(color1, color2, weight).to_string())
}

/// Weighted channel average of two colors, `weight` being the proportion of
/// `color1`.
///
/// The weight goes through the `[-1, 1]` normalization of Sass' `mix()` so
/// generated files match what the stylesheet would compute. Channels round
/// half away from zero.
pub fn mix_rgb(color1: Rgb, color2: Rgb, weight: f64) -> Rgb {
    let normalized_weight = weight * 2.0 - 1.0;
    let weight1 = (normalized_weight + 1.0) / 2.0;
    let weight2 = 1.0 - weight1;

    let channel = |a: u8, b: u8| {
        (f64::from(a) * weight1 + f64::from(b) * weight2)
            .round()
            .clamp(0.0, 255.0) as u8
    };

    Rgb::new(
        channel(color1.r, color2.r),
        channel(color1.g, color2.g),
        channel(color1.b, color2.b),
    )
}
