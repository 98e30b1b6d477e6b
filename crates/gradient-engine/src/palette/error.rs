//! Error types for palette operations
//!
//! This module provides error types for color parsing, fixed palette
//! validation and median-cut palette reduction.

use std::num::ParseIntError;

use thiserror::Error;

/// Error type for parsing hex color strings.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3 or 6 digits after stripping '#')
    #[error("invalid hex color length {0} (expected 3 or 6 digits)")]
    InvalidLength(usize),
    /// Invalid hexadecimal character encountered
    #[error("invalid hex character: {0}")]
    InvalidHex(#[from] ParseIntError),
}

/// Error type for fixed palette validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PaletteError {
    /// No colors provided in palette
    #[error("palette cannot be empty")]
    EmptyPalette,
    /// Duplicate color found at the specified index
    #[error("duplicate color found at index {index}")]
    DuplicateColor {
        /// Index where the duplicate was found
        index: usize,
    },
}

/// Error type for median-cut palette reduction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuantizeError {
    /// Requested palette size outside 2..=256
    #[error("wrong number of colors: {0} (expected 2..=256)")]
    MaxColors(usize),
    /// Fewer than two input pixels
    #[error("too few pixels: {0} (need at least 2)")]
    TooFewPixels(usize),
}
