//! Public API for the gradient-engine crate.
//!
//! This module provides the high-level API: the [`GradientBlaster`]
//! builder, the [`GradientError`] unified error type, and free functions
//! for each pipeline stage.

mod builder;
mod error;

pub use builder::{build_gradient, interlace_gradient, GradientBlaster};
pub use error::GradientError;
