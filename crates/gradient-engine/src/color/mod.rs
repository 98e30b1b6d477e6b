//! Color types and conversion utilities
//!
//! Each color space gets its own type, so spaces cannot be mixed without an
//! explicit `From` conversion:
//!
//! - [`Rgb`]: gamma-encoded sRGB on a 0..=255 scale (input/output)
//! - [`Hsv`]: hue/saturation/value, the anchor point representation
//! - [`LinearRgb`]: linear light, for the perceptual blend
//! - [`Lab`]: CIE L*a*b*, for the `lab` blend and error diffusion
//! - [`Oklab`]: perceptually uniform, for the `oklab` blend and palette matching
//!
//! # Example
//!
//! ```
//! use gradient_engine::{Hsv, Oklab, Rgb};
//!
//! let anchor = Hsv::new(0.0, 1.0, 1.0);
//! let rgb = Rgb::from(anchor);
//! let lab = Oklab::from(rgb);
//! assert_eq!(Rgb::from(lab).to_bytes(), [255, 0, 0]);
//! ```
//!
//! None of these conversions fail and none clamp, except `Lab -> Rgb`,
//! which clamps to the displayable range before scaling.

mod hsv;
mod lab;
mod linear_rgb;
mod oklab;
mod rgb;
mod transfer;

pub use hsv::Hsv;
pub use lab::Lab;
pub use linear_rgb::LinearRgb;
pub use oklab::Oklab;
pub use rgb::{Rgb, Rgb8};
pub use transfer::{linear_to_srgb, luminance, srgb_to_linear};

pub(crate) use rgb::round_half_up;
