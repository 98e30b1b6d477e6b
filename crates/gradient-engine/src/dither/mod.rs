//! One-dimensional dithering of a built gradient.
//!
//! A gradient is a single column of colors, so every strategy here works
//! along that one axis:
//!
//! - **Error diffusion** carries each row's quantization error, measured
//!   in CIE LAB, forward into the next row.
//! - **Additive offsets** (ordered, blue noise, white noise, golden ratio)
//!   nudge each row before the hardware truncates it. Their strength is
//!   scaled by `4 / depth`, so coarse targets get proportionally larger
//!   offsets.
//! - **Shuffle** swaps rows instead of perturbing them.
//!
//! Only the unseeded white noise modes are non-deterministic.
//!
//! # Example
//!
//! ```
//! use gradient_engine::{dither, DitherConfig, DitherMode, TargetId};
//!
//! let ramp: Vec<[u8; 3]> = (0..32u8).map(|v| [v * 8; 3]).collect();
//! let config = DitherConfig::new(DitherMode::BlueNoise).amount(50.0);
//! let a = dither(&ramp, &config, TargetId::AmigaOcs.profile()).unwrap();
//! let b = dither(&ramp, &config, TargetId::AmigaOcs.profile()).unwrap();
//! assert_eq!(a, b);
//! ```

mod noise;
mod options;
mod shuffle;

pub use options::{DitherConfig, DitherMode};

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::color::{Lab, Rgb, Rgb8};
use crate::error::ConfigError;
use crate::gradient::normalize;
use crate::target::Target;

/// Dither a finished gradient.
///
/// [`DitherMode::Off`] returns the input unchanged.
///
/// # Errors
///
/// [`ConfigError`] if the amount or shuffle count is out of range.
pub fn dither(
    sequence: &[Rgb8],
    config: &DitherConfig,
    target: &Target,
) -> Result<Vec<Rgb8>, ConfigError> {
    config.validate()?;
    let values = sequence.iter().map(|&c| Rgb::from_bytes(c)).collect();
    Ok(normalize(&apply(values, config, target)))
}

/// Dither unrounded values. The config must already be validated.
pub(crate) fn apply(mut values: Vec<Rgb>, config: &DitherConfig, target: &Target) -> Vec<Rgb> {
    let mut amount = config.amount / 100.0;

    debug!(
        mode = %config.mode,
        amount = config.amount,
        rows = values.len(),
        "dithering gradient"
    );

    match config.mode {
        DitherMode::Off => return values,
        DitherMode::ErrorDiffusion => return diffuse_error(&values, amount, target),
        DitherMode::Shuffle => {
            shuffle::shuffle(&mut values, config.shuffle_count, target);
            return values;
        }
        _ => {}
    }

    amount *= 4.0 / f64::from(target.depth.primary().max(1));

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    for (i, value) in values.iter_mut().enumerate() {
        let [dr, dg, db] = match config.mode {
            DitherMode::Ordered => noise::ordered(i, amount),
            DitherMode::OrderedMono => noise::ordered_mono(i, amount),
            DitherMode::BlueNoise => noise::blue(i, amount),
            DitherMode::BlueNoiseMono => noise::blue_mono(i, amount),
            DitherMode::WhiteNoise => noise::white(&mut rng, amount),
            DitherMode::WhiteNoiseMono => noise::white_mono(&mut rng, amount),
            DitherMode::GoldenRatio => noise::golden_ratio(i, amount),
            DitherMode::GoldenRatioMono => noise::golden_ratio_mono(i, amount),
            DitherMode::Off | DitherMode::ErrorDiffusion | DitherMode::Shuffle => [0.0; 3],
        };
        *value = value.offset(dr, dg, db);
    }
    values
}

/// Forward error accumulation in LAB. Each row is compared with the LAB
/// value of its target-adjusted color and `error * amount` is added to the
/// following row.
fn diffuse_error(values: &[Rgb], amount: f64, target: &Target) -> Vec<Rgb> {
    let mut lab: Vec<Lab> = values.iter().map(|&c| Lab::from(c)).collect();
    for i in 0..lab.len() {
        let col = lab[i];
        let shown = Lab::from(target.adjust_color(Rgb::from(col)));
        let error = col - shown;
        if let Some(next) = lab.get_mut(i + 1) {
            *next = *next + error * amount;
        }
    }
    lab.into_iter().map(Rgb::from).collect()
}
