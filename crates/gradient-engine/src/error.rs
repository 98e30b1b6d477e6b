//! Configuration and encoding errors.
//!
//! Numeric edge cases (two anchors on one row, achromatic hues, empty
//! median-cut boxes) are valid input and never produce these errors.

use thiserror::Error;

use crate::target::{OutputFormat, TargetId};

/// Invalid gradient or dither configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A gradient needs at least two steps
    #[error("steps must be at least 2, got {0}")]
    TooFewSteps(usize),
    /// No anchor points were given
    #[error("gradient needs at least one point")]
    NoPoints,
    /// Anchor position is not a number in 0.0..=1.0
    #[error("point {index} has position {pos}, expected 0.0..=1.0")]
    PointPosition {
        /// Index of the offending point in input order
        index: usize,
        /// The rejected position
        pos: f64,
    },
    /// Dither amount outside 0..=100
    #[error("dither amount must be within 0..=100, got {0}")]
    DitherAmount(f64),
    /// Shuffle count outside 1..=5
    #[error("shuffle count must be within 1..=5, got {0}")]
    ShuffleCount(u8),
    /// Bit depth outside 1..=8
    #[error("bit depth must be within 1..=8, got {0}")]
    BitDepth(u8),
    /// Unrecognised target, format or mode name
    #[error("unknown {kind}: {name}")]
    UnknownName {
        /// What was being looked up ("target", "blend mode", ...)
        kind: &'static str,
        /// The name as given
        name: String,
    },
}

/// A finished gradient could not be encoded for the requested output.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EncodeError {
    /// The target does not offer this output format
    #[error("target {target} does not support {format} output")]
    UnsupportedFormat {
        /// Target the output was requested for
        target: TargetId,
        /// Requested format
        format: OutputFormat,
    },
    /// An encoded item was not valid hex (never produced by the built-in targets)
    #[error("invalid hex item: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}
