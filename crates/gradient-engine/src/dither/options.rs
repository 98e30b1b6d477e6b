//! Dither configuration.

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Dithering strategy applied to a built gradient.
///
/// The `Mono` variants apply one offset to all three channels; the others
/// decorrelate the channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DitherMode {
    /// No dithering
    #[default]
    Off,
    /// Swap neighbouring rows that show different hardware colors
    Shuffle,
    /// Carry each row's quantization error (in LAB) into the next row
    ErrorDiffusion,
    /// Alternating +/- offset, green opposite to red and blue
    Ordered,
    OrderedMono,
    /// 64-entry blue noise sequence
    BlueNoise,
    BlueNoiseMono,
    /// Uniform random offsets
    WhiteNoise,
    WhiteNoiseMono,
    /// Golden ratio low-discrepancy sequence
    GoldenRatio,
    GoldenRatioMono,
}

impl DitherMode {
    pub const ALL: [DitherMode; 11] = [
        DitherMode::Off,
        DitherMode::Shuffle,
        DitherMode::ErrorDiffusion,
        DitherMode::Ordered,
        DitherMode::OrderedMono,
        DitherMode::BlueNoise,
        DitherMode::BlueNoiseMono,
        DitherMode::WhiteNoise,
        DitherMode::WhiteNoiseMono,
        DitherMode::GoldenRatio,
        DitherMode::GoldenRatioMono,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DitherMode::Off => "off",
            DitherMode::Shuffle => "shuffle",
            DitherMode::ErrorDiffusion => "errorDiffusion",
            DitherMode::Ordered => "ordered",
            DitherMode::OrderedMono => "orderedMono",
            DitherMode::BlueNoise => "blueNoise",
            DitherMode::BlueNoiseMono => "blueNoiseMono",
            DitherMode::WhiteNoise => "whiteNoise",
            DitherMode::WhiteNoiseMono => "whiteNoiseMono",
            DitherMode::GoldenRatio => "goldenRatio",
            DitherMode::GoldenRatioMono => "goldenRatioMono",
        }
    }

    /// Whether repeated runs can differ (white noise without a seed).
    pub fn is_random(self) -> bool {
        matches!(self, DitherMode::WhiteNoise | DitherMode::WhiteNoiseMono)
    }
}

impl fmt::Display for DitherMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DitherMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownName {
                kind: "dither mode",
                name: s.to_string(),
            })
    }
}

/// Dither settings.
///
/// # Defaults
///
/// - mode: [`DitherMode::Off`]
/// - amount: 0
/// - shuffle count: 1
/// - seed: none (white noise draws from OS entropy)
///
/// # Example
///
/// ```
/// use gradient_engine::{DitherConfig, DitherMode};
///
/// let config = DitherConfig::new(DitherMode::WhiteNoise)
///     .amount(40.0)
///     .seed(7);
/// assert!(config.validate().is_ok());
/// assert!(DitherConfig::new(DitherMode::Shuffle).shuffle_count(6).validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DitherConfig {
    pub mode: DitherMode,
    /// Strength, 0.0..=100.0
    pub amount: f64,
    /// Swaps attempted per shuffle position, 1..=5
    pub shuffle_count: u8,
    /// Seed for the white noise modes
    pub seed: Option<u64>,
}

impl Default for DitherConfig {
    fn default() -> Self {
        Self {
            mode: DitherMode::Off,
            amount: 0.0,
            shuffle_count: 1,
            seed: None,
        }
    }
}

impl DitherConfig {
    #[inline]
    pub fn new(mode: DitherMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    #[inline]
    pub fn amount(mut self, amount: f64) -> Self {
        self.amount = amount;
        self
    }

    #[inline]
    pub fn shuffle_count(mut self, count: u8) -> Self {
        self.shuffle_count = count;
        self
    }

    /// Make the white noise modes reproducible.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check amount and shuffle count ranges.
    pub fn validate(&self) -> Result<&Self, ConfigError> {
        if !(0.0..=100.0).contains(&self.amount) {
            return Err(ConfigError::DitherAmount(self.amount));
        }
        if !(1..=5).contains(&self.shuffle_count) {
            return Err(ConfigError::ShuffleCount(self.shuffle_count));
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = DitherConfig::default();
        assert_eq!(config.mode, DitherMode::Off);
        assert_eq!(config.amount, 0.0);
        assert_eq!(config.shuffle_count, 1);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_validate_ranges() {
        assert_eq!(
            DitherConfig::default().amount(100.5).validate(),
            Err(ConfigError::DitherAmount(100.5))
        );
        assert_eq!(
            DitherConfig::default().shuffle_count(0).validate(),
            Err(ConfigError::ShuffleCount(0))
        );
        assert!(DitherConfig::default().amount(f64::NAN).validate().is_err());
        assert!(DitherConfig::default().amount(100.0).shuffle_count(5).validate().is_ok());
    }

    #[test]
    fn test_mode_names_round_trip() {
        for mode in DitherMode::ALL {
            assert_eq!(mode.as_str().parse::<DitherMode>(), Ok(mode));
        }
        assert!(DitherMode::WhiteNoiseMono.is_random());
        assert!(!DitherMode::BlueNoise.is_random());
    }
}
