//! Linear RGB color type
//!
//! Linear RGB is the color space where light addition is physically accurate.
//! It is the intermediate step for OKLab and for the perceptual blend.

use super::rgb::Rgb;
use super::transfer::{decode, encode};

/// A color in linear-light RGB.
///
/// In-gamut values lie in 0.0..=1.0. Components may go negative or above
/// one when produced from out-of-gamut OKLab values; the transfer functions
/// preserve their sign.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    /// Red channel (linear light intensity)
    pub r: f64,
    /// Green channel (linear light intensity)
    pub g: f64,
    /// Blue channel (linear light intensity)
    pub b: f64,
}

impl LinearRgb {
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Sum of the three components, used as a crude intensity measure.
    #[inline]
    pub fn sum(self) -> f64 {
        self.r + self.g + self.b
    }

    #[inline]
    pub fn scale(self, factor: f64) -> Self {
        Self::new(self.r * factor, self.g * factor, self.b * factor)
    }

    /// Apply the transfer function to 0..=255 components without
    /// normalizing them first.
    ///
    /// This is the scale OKLab works in for blending and palette matching:
    /// white decodes to roughly 5.3e5 per channel, not 1.0.
    #[inline]
    pub fn from_unscaled(rgb: Rgb) -> Self {
        Self::new(decode(rgb.r), decode(rgb.g), decode(rgb.b))
    }

    /// Inverse of [`LinearRgb::from_unscaled`].
    #[inline]
    pub fn to_unscaled(self) -> Rgb {
        Rgb::new(encode(self.r), encode(self.g), encode(self.b))
    }
}

impl From<Rgb> for LinearRgb {
    /// Decode 0..=255 sRGB to linear light.
    fn from(rgb: Rgb) -> Self {
        Self {
            r: decode(rgb.r / 255.0),
            g: decode(rgb.g / 255.0),
            b: decode(rgb.b / 255.0),
        }
    }
}

impl From<LinearRgb> for Rgb {
    /// Encode linear light back to the 0..=255 sRGB scale (unclamped).
    fn from(linear: LinearRgb) -> Self {
        Rgb::new(
            encode(linear.r) * 255.0,
            encode(linear.g) * 255.0,
            encode(linear.b) * 255.0,
        )
    }
}
