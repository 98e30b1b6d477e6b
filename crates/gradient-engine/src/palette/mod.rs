//! Palette types and utilities
//!
//! Two ways of restricting colors to a finite set: a fixed hardware
//! [`Palette`] matched in Oklab, and [`median_cut_quantize`], which derives
//! a palette from an arbitrary pixel set.

mod error;
mod median_cut;
mod palette;

pub use error::{PaletteError, ParseColorError, QuantizeError};
pub use median_cut::{median_cut_quantize, ColorMap};
pub use palette::{nearest, Palette};
