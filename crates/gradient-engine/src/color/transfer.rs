//! sRGB transfer functions (IEC 61966-2-1) and luminance.

use super::rgb::Rgb;

const SRGB_BREAKPOINT: f64 = 0.04045;
const LINEAR_BREAKPOINT: f64 = 0.0031308;

/// Decode one sRGB component to linear light.
///
/// Normally given 0.0..=1.0; the Oklab conversions pass 0..=255 values as they are.
///
/// Sign-preserving: negative inputs decode to the negated decode of their
/// magnitude, so values pushed out of gamut by LAB or OKLab math survive
/// a round trip.
#[inline]
pub fn decode(c: f64) -> f64 {
    let abs = c.abs();
    if abs < SRGB_BREAKPOINT {
        c / 12.92
    } else {
        c.signum() * ((abs + 0.055) / 1.055).powf(2.4)
    }
}

/// Encode one linear-light component to normalized sRGB (inverse of [`decode`]).
#[inline]
pub fn encode(c: f64) -> f64 {
    let abs = c.abs();
    if abs > LINEAR_BREAKPOINT {
        c.signum() * (1.055 * abs.powf(1.0 / 2.4) - 0.055)
    } else {
        c * 12.92
    }
}

/// Convert one 0..=255 sRGB channel value to linear light (0.0..=1.0).
///
/// # Example
/// ```
/// use gradient_engine::color::srgb_to_linear;
/// assert!((srgb_to_linear(255.0) - 1.0).abs() < 1e-12);
/// assert_eq!(srgb_to_linear(0.0), 0.0);
/// ```
#[inline]
pub fn srgb_to_linear(x: f64) -> f64 {
    let x = x / 255.0;
    if x <= SRGB_BREAKPOINT {
        x / 12.92
    } else {
        ((x + 0.055) / 1.055).powf(2.4)
    }
}

/// Convert one linear-light channel value to the 0..=255 sRGB scale.
#[inline]
pub fn linear_to_srgb(x: f64) -> f64 {
    let y = if x <= LINEAR_BREAKPOINT {
        12.92 * x
    } else {
        1.055 * x.powf(1.0 / 2.4) - 0.055
    };
    y * 255.0
}

/// Perceptual luminance, 0.299 R + 0.587 G + 0.114 B, on the input's scale.
///
/// Only meant for contrast decisions (e.g. picking a legible label color);
/// quantization never uses it.
#[inline]
pub fn luminance(color: Rgb) -> f64 {
    0.299 * color.r + 0.587 * color.g + 0.114 * color.b
}
