//! Unified error type for the gradient-engine public API.

use thiserror::Error;

use crate::error::{ConfigError, EncodeError};
use crate::palette::{ParseColorError, QuantizeError};

/// Wraps every error type of the crate for `?` propagation in
/// application code.
///
/// # Example
///
/// ```
/// use gradient_engine::{GradientError, Rgb};
///
/// fn parse(hex: &str) -> Result<Rgb, GradientError> {
///     Ok(hex.parse::<Rgb>()?)
/// }
///
/// assert!(parse("#123").is_ok());
/// assert!(matches!(parse("#12"), Err(GradientError::ParseColor(_))));
/// ```
#[derive(Debug, Error)]
pub enum GradientError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("quantization failed: {0}")]
    Quantize(#[from] QuantizeError),

    #[error("color parse error: {0}")]
    ParseColor(#[from] ParseColorError),

    #[error("encoding failed: {0}")]
    Encode(#[from] EncodeError),
}
