//! 8-bit scale RGB color type
//!
//! All hardware-facing values in this crate are sRGB on a 0..=255 scale.
//! Intermediate results (blends, dither offsets, restored bit depths) are
//! kept as floats so that rounding happens exactly once, when a finished
//! sequence is committed to bytes.

use std::str::FromStr;

use crate::palette::ParseColorError;

/// A finished, hardware-ready color: one byte per channel.
pub type Rgb8 = [u8; 3];

/// A color in gamma-encoded sRGB, scaled to 0.0..=255.0.
///
/// Values are not clamped. Dither offsets and LAB round trips can push
/// components slightly outside the byte range; [`Rgb::to_bytes`] clamps
/// when the value is committed.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgb {
    /// Red channel (0.0..=255.0)
    pub r: f64,
    /// Green channel (0.0..=255.0)
    pub g: f64,
    /// Blue channel (0.0..=255.0)
    pub b: f64,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);
    pub const WHITE: Rgb = Rgb::new(255.0, 255.0, 255.0);

    /// Create a new color from 0..=255 scale floats.
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a byte triple.
    ///
    /// # Example
    /// ```
    /// use gradient_engine::Rgb;
    /// let red = Rgb::from_bytes([255, 0, 0]);
    /// assert_eq!(red.r, 255.0);
    /// ```
    #[inline]
    pub fn from_bytes(bytes: Rgb8) -> Self {
        Self::new(
            f64::from(bytes[0]),
            f64::from(bytes[1]),
            f64::from(bytes[2]),
        )
    }

    /// Round and clamp to a byte triple.
    ///
    /// Rounding is half-up, so 127.5 becomes 128.
    ///
    /// # Example
    /// ```
    /// use gradient_engine::Rgb;
    /// let color = Rgb::new(300.0, 127.5, -4.0);
    /// assert_eq!(color.to_bytes(), [255, 128, 0]);
    /// ```
    #[inline]
    pub fn to_bytes(self) -> Rgb8 {
        self.to_array().map(to_byte)
    }

    #[inline]
    pub fn to_array(self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    #[inline]
    pub fn from_array(c: [f64; 3]) -> Self {
        Self::new(c[0], c[1], c[2])
    }

    /// Apply `f` to every channel.
    #[inline]
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self::new(f(self.r), f(self.g), f(self.b))
    }

    /// Add per-channel offsets.
    #[inline]
    pub fn offset(self, dr: f64, dg: f64, db: f64) -> Self {
        Self::new(self.r + dr, self.g + dg, self.b + db)
    }
}

impl From<Rgb8> for Rgb {
    fn from(bytes: Rgb8) -> Self {
        Self::from_bytes(bytes)
    }
}

/// Round half-up, matching the rounding used for every interpolation step.
#[inline]
pub(crate) fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

#[inline]
fn to_byte(c: f64) -> u8 {
    round_half_up(c.clamp(0.0, 255.0)) as u8
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse a color from a hex string.
    ///
    /// Supports the following formats:
    /// - `#RRGGBB` / `RRGGBB`
    /// - `#RGB` / `RGB` (each digit expands to a full byte, `F` -> `FF`)
    ///
    /// Parsing is case-insensitive. Leading and trailing whitespace is trimmed.
    ///
    /// # Examples
    ///
    /// ```
    /// use gradient_engine::Rgb;
    ///
    /// let white: Rgb = "#FFFFFF".parse().unwrap();
    /// assert_eq!(white.to_bytes(), [255, 255, 255]);
    ///
    /// let red: Rgb = "#F00".parse().unwrap();
    /// assert_eq!(red.to_bytes(), [255, 0, 0]);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        if !s.is_ascii() {
            return Err(ParseColorError::InvalidLength(s.chars().count()));
        }

        match s.len() {
            3 => {
                let r = u8::from_str_radix(&s[0..1], 16)? * 17;
                let g = u8::from_str_radix(&s[1..2], 16)? * 17;
                let b = u8::from_str_radix(&s[2..3], 16)? * 17;
                Ok(Self::from_bytes([r, g, b]))
            }
            6 => {
                let r = u8::from_str_radix(&s[0..2], 16)?;
                let g = u8::from_str_radix(&s[2..4], 16)?;
                let b = u8::from_str_radix(&s[4..6], 16)?;
                Ok(Self::from_bytes([r, g, b]))
            }
            n => Err(ParseColorError::InvalidLength(n)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_bytes_rounds_half_up_and_clamps() {
        assert_eq!(Rgb::new(0.49, 0.5, 254.5).to_bytes(), [0, 1, 255]);
        assert_eq!(Rgb::new(-20.0, 256.0, 17.066).to_bytes(), [0, 255, 17]);
    }

    #[test]
    fn test_from_bytes_round_trip() {
        for v in [0u8, 1, 17, 128, 254, 255] {
            let bytes = [v, 255 - v, v / 2];
            assert_eq!(Rgb::from_bytes(bytes).to_bytes(), bytes);
        }
    }

    #[test]
    fn test_parse_hex_formats() {
        let c: Rgb = "#f18213".parse().unwrap();
        assert_eq!(c.to_bytes(), [0xf1, 0x82, 0x13]);

        let c: Rgb = "  0A0b0C ".parse().unwrap();
        assert_eq!(c.to_bytes(), [10, 11, 12]);

        let c: Rgb = "#8ac".parse().unwrap();
        assert_eq!(c.to_bytes(), [0x88, 0xaa, 0xcc]);
    }

    #[test]
    fn test_parse_hex_errors() {
        assert!(matches!(
            "#ffff".parse::<Rgb>(),
            Err(ParseColorError::InvalidLength(4))
        ));
        assert!(matches!(
            "#zzzzzz".parse::<Rgb>(),
            Err(ParseColorError::InvalidHex(_))
        ));
        assert!(matches!(
            "#ÿÿ".parse::<Rgb>(),
            Err(ParseColorError::InvalidLength(2))
        ));
    }
}
