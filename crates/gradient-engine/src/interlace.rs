//! Flicker interlacing.
//!
//! A color at `d` bits is split into two colors at `d - 1` bits, half a
//! `d`-bit step below and above it. Shown on alternate frames, the pair
//! averages back to roughly the original.

use crate::bits::{quantize, Bits};
use crate::color::{Rgb, Rgb8};

/// Odd and even field sequences.
pub type FieldPair = (Vec<Rgb8>, Vec<Rgb8>);

/// Split `sequence` into odd/even fields for a `depth`-bit target.
///
/// Only the first channel of `depth` is used.
///
/// # Example
///
/// ```
/// use gradient_engine::{interlace, Bits};
///
/// let (odd, even) = interlace(&[[0, 0, 0], [128, 128, 128]], Bits::Uniform(5));
/// assert_eq!(odd.len(), 2);
/// assert_eq!(odd[0], [0, 0, 0]);
/// assert_eq!(even[1], [137, 137, 137]);
/// ```
pub fn interlace(sequence: &[Rgb8], depth: Bits) -> FieldPair {
    let bits = depth.primary().clamp(1, 8);
    let full = Bits::Uniform(bits);
    let half = Bits::Uniform(bits.saturating_sub(1).max(1));
    let inc = 256.0 / f64::from(1u32 << bits) / 2.0;

    sequence
        .iter()
        .map(|&c| {
            let shown = quantize(Rgb::from_bytes(c), full);
            let odd = quantize(shown.map(|v| v - inc), half);
            let even = quantize(shown.map(|v| v + inc), half);
            (odd.to_bytes(), even.to_bytes())
        })
        .unzip()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_average_to_original() {
        let depth = Bits::Uniform(5);
        let step = 256.0 / 31.0;
        for v in 0..=255u8 {
            let (odd, even) = interlace(&[[v, v, v]], depth);
            let target = quantize(Rgb::from_bytes([v, v, v]), depth).r;
            let avg = (f64::from(odd[0][0]) + f64::from(even[0][0])) / 2.0;
            assert!(
                (avg - target).abs() <= step + 1e-6,
                "{v}: odd {:?} even {:?} target {target}",
                odd[0],
                even[0]
            );
        }
    }

    #[test]
    fn test_fields_are_half_depth_values() {
        let half = Bits::Uniform(4);
        let (odd, even) = interlace(&[[77, 140, 250]], Bits::Uniform(5));
        for field in [odd[0], even[0]] {
            let c = Rgb::from_bytes(field);
            assert_eq!(quantize(c, half).to_bytes(), field);
        }
    }

    #[test]
    fn test_even_never_darker_than_odd() {
        let seq: Vec<Rgb8> = (0..=255u8).map(|v| [v, 255 - v, v / 2]).collect();
        let (odd, even) = interlace(&seq, Bits::Uniform(5));
        for (o, e) in odd.iter().zip(&even) {
            for c in 0..3 {
                assert!(o[c] <= e[c], "{o:?} vs {e:?}");
            }
        }
    }
}
