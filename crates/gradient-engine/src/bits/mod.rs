//! Bit-depth reduction
//!
//! Hardware color registers hold a few bits per channel. [`reduce_bits`]
//! buckets an 8-bit scale value into `2^b` levels, [`restore_bits`] scales
//! a level back to 0..=255, and [`quantize`] composes the two: the value
//! the hardware will actually display. Two colors are indistinguishable on
//! a target exactly when they quantize to the same result.

use crate::color::Rgb;
use crate::error::ConfigError;

/// Per-channel bit depth.
///
/// # Example
///
/// ```
/// use gradient_engine::Bits;
///
/// assert_eq!(Bits::Uniform(4).channels(), [4, 4, 4]);
/// assert_eq!(Bits::PerChannel([5, 6, 5]).primary(), 5);
/// assert!(Bits::Uniform(9).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bits {
    /// Same depth on every channel
    Uniform(u8),
    /// Asymmetric depth, red/green/blue (e.g. 5/6/5 truecolor)
    PerChannel([u8; 3]),
}

impl Bits {
    /// Depth of each channel.
    #[inline]
    pub fn channels(self) -> [u8; 3] {
        match self {
            Bits::Uniform(b) => [b; 3],
            Bits::PerChannel(bits) => bits,
        }
    }

    /// Depth of the first channel. Dither scaling and interlacing use this
    /// as the target's nominal depth.
    #[inline]
    pub fn primary(self) -> u8 {
        self.channels()[0]
    }

    /// Check every channel is within 1..=8.
    pub fn validate(self) -> Result<Self, ConfigError> {
        match self.channels().into_iter().find(|b| !(1..=8).contains(b)) {
            Some(bad) => Err(ConfigError::BitDepth(bad)),
            None => Ok(self),
        }
    }
}

impl Default for Bits {
    fn default() -> Self {
        Bits::Uniform(8)
    }
}

impl From<u8> for Bits {
    fn from(bits: u8) -> Self {
        Bits::Uniform(bits)
    }
}

impl From<[u8; 3]> for Bits {
    fn from(bits: [u8; 3]) -> Self {
        Bits::PerChannel(bits)
    }
}

#[inline]
fn levels(bits: u8) -> u32 {
    1 << bits.clamp(1, 8)
}

/// Bucket each channel into `2^b` levels: `floor(c / (256 / 2^b))`,
/// clamped to `0..=2^b - 1`.
///
/// # Example
///
/// ```
/// use gradient_engine::{reduce_bits, Bits, Rgb};
///
/// let level = reduce_bits(Rgb::new(255.0, 128.0, 15.9), Bits::Uniform(4));
/// assert_eq!(level, [15, 8, 0]);
/// ```
pub fn reduce_bits(color: Rgb, bits: Bits) -> [u8; 3] {
    let depth = bits.channels();
    let mut out = [0u8; 3];
    for (i, c) in color.to_array().into_iter().enumerate() {
        let x = levels(depth[i]);
        let divisor = 256.0 / f64::from(x);
        let max = f64::from(x - 1);
        out[i] = (c / divisor).floor().clamp(0.0, max) as u8;
    }
    out
}

/// Scale reduced levels back to 0..=255: `c * 256 / (2^b - 1)`, clamped.
///
/// The result is not rounded; at 8 bits, level 128 restores to 128.5.
pub fn restore_bits(reduced: [u8; 3], bits: Bits) -> Rgb {
    let depth = bits.channels();
    let mut out = [0.0f64; 3];
    for i in 0..3 {
        let max = f64::from(levels(depth[i]) - 1);
        out[i] = (f64::from(reduced[i]) * 256.0 / max).clamp(0.0, 255.0);
    }
    Rgb::from_array(out)
}

/// The color the hardware displays for `color` at `bits` depth.
///
/// # Example
///
/// ```
/// use gradient_engine::{quantize, Bits, Rgb};
///
/// let shown = quantize(Rgb::new(130.0, 0.0, 255.0), Bits::Uniform(4));
/// assert_eq!(shown.to_bytes(), [137, 0, 255]);
/// ```
#[inline]
pub fn quantize(color: Rgb, bits: Bits) -> Rgb {
    restore_bits(reduce_bits(color, bits), bits)
}

/// True when both colors quantize to the same displayed value.
#[inline]
pub fn same_at_depth(a: Rgb, b: Rgb, bits: Bits) -> bool {
    reduce_bits(a, bits) == reduce_bits(b, bits)
}
