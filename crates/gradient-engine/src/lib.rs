#![allow(
    clippy::excessive_precision,
    clippy::needless_range_loop,
    clippy::module_inception,
    clippy::manual_range_contains
)]

//! gradient-engine: color gradients for retro raster hardware
//!
//! This library builds smooth color gradients, snaps them to what a given
//! machine can display, dithers away the banding that low bit depths
//! cause, and encodes the result as register values, data tables, binary
//! blobs or Amiga copper lists.
//!
//! # Quick Start
//!
//! The [`GradientBlaster`] builder is the primary entry point:
//!
//! ```
//! use gradient_engine::{
//!     encode_table, GradientBlaster, GradientPoint, Hsv, OutputFormat, TableOptions,
//!     TableSyntax, TargetId,
//! };
//!
//! let blaster = GradientBlaster::new(TargetId::AmigaOcs).steps(16);
//! let points = [
//!     GradientPoint::new(0.0, Hsv::new(0.0, 0.0, 0.0)),
//!     GradientPoint::new(1.0, Hsv::new(0.0, 0.0, 1.0)),
//! ];
//! let gradient = blaster.build(&points).unwrap();
//! assert_eq!(gradient[0], [0, 0, 0]);
//! assert_eq!(gradient[15], [255, 255, 255]);
//!
//! let target = blaster.target();
//! let options = TableOptions::for_target(target, TableSyntax::Asm);
//! let table = encode_table(&gradient, target, OutputFormat::TableAsm, &options).unwrap();
//! assert!(table.starts_with("Gradient:\n\tdc.w $000,"));
//! ```
//!
//! # Pipeline
//!
//! ```text
//! GradientPoint (HSV anchors)
//!     |
//!     v
//! Target::adjust_color      (quantize to depth, or nearest palette entry)
//!     |
//!     v
//! BlendMode::mix            (linear, CIE LAB, OKLab or perceptual)
//!     |
//!     v
//! dither                    (error diffusion, noise offsets or shuffle)
//!     |
//!     v
//! Rgb8 sequence ----> interlace (odd/even fields, optional)
//!     |
//!     v
//! encoders                  (hex items, tables, copper lists, binary)
//! ```
//!
//! # Color Spaces
//!
//! - [`Rgb`]: gamma-encoded sRGB on a 0..=255 float scale
//! - [`LinearRgb`]: linear light, used by the perceptual blend
//! - [`Lab`]: CIE LAB (D65), used by the LAB blend and error diffusion
//! - [`Oklab`]: perceptual space for blending and palette matching
//! - [`Hsv`]: the anchor point representation
//!
//! # Targets
//!
//! Every supported machine is a static [`Target`] profile, looked up by
//! [`TargetId`]. A profile carries the color depth or fixed palette, the
//! register encoding, copper support and the output formats it offers.
//! Encoders only talk to the profile, never to the id.

pub mod color;
pub mod output;

mod api;
mod bits;
mod dither;
mod error;
mod gradient;
mod interlace;
mod palette;
mod target;


// Color types
pub use color::{Hsv, Lab, LinearRgb, Oklab, Rgb, Rgb8};

// Bit depth
pub use bits::{quantize, reduce_bits, restore_bits, same_at_depth, Bits};

// Palettes and quantization
pub use palette::{
    median_cut_quantize, nearest, ColorMap, Palette, PaletteError, ParseColorError, QuantizeError,
};

// Targets
pub use target::{CopperMode, Encoding, OutputFormat, Target, TargetId};

// Gradient construction
pub use gradient::{build, normalize, validate, BlendMode, GradientPoint};

// Dithering
pub use dither::{dither, DitherConfig, DitherMode};

// Interlacing
pub use interlace::{interlace, FieldPair};

// Encoders
pub use output::{
    copper_instructions, encode_binary, encode_copper_list, encode_hex_list, encode_table,
    format_table, CopperInstruction, CopperOptions, CopperSyntax, TableOptions, TableSyntax,
};

// Errors
pub use error::{ConfigError, EncodeError};

// High-level API
pub use api::{build_gradient, interlace_gradient, GradientBlaster, GradientError};
