//! GradientBlaster builder -- the primary entry point for the crate.
//!
//! [`GradientBlaster`] holds everything a gradient build needs besides
//! the anchor points: target, length, blend and dither settings.

use tracing::debug;

use crate::bits::Bits;
use crate::color::Rgb8;
use crate::dither::{self, DitherConfig, DitherMode};
use crate::gradient::{self, BlendMode, GradientPoint};
use crate::interlace::{interlace, FieldPair};
use crate::target::{Target, TargetId};

use super::GradientError;

/// High-level gradient builder.
///
/// - Configuration methods consume and return `self`
/// - [`build()`](Self::build) takes `&self` so one configuration can be
///   applied to many point sets
/// - Validation happens in `build`, before any computation
///
/// # Example
///
/// ```
/// use gradient_engine::{BlendMode, DitherMode, GradientBlaster, GradientPoint, Hsv, TargetId};
///
/// let blaster = GradientBlaster::new(TargetId::AmigaOcs)
///     .steps(64)
///     .blend_mode(BlendMode::Perceptual)
///     .dither_mode(DitherMode::BlueNoise)
///     .dither_amount(30.0);
///
/// let points = [
///     GradientPoint::new(0.0, Hsv::new(0.6, 1.0, 0.2)),
///     GradientPoint::new(1.0, Hsv::new(0.1, 0.8, 1.0)),
/// ];
/// let gradient = blaster.build(&points).unwrap();
/// assert_eq!(gradient.len(), 64);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GradientBlaster {
    target: TargetId,
    steps: usize,
    blend_mode: BlendMode,
    dither: DitherConfig,
}

impl Default for GradientBlaster {
    fn default() -> Self {
        Self::new(TargetId::default())
    }
}

impl GradientBlaster {
    /// Builder for `target` with 256 steps, OKLab blending and no dither.
    pub fn new(target: TargetId) -> Self {
        Self {
            target,
            steps: 256,
            blend_mode: BlendMode::default(),
            dither: DitherConfig::default(),
        }
    }

    #[inline]
    pub fn steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }

    #[inline]
    pub fn blend_mode(mut self, mode: BlendMode) -> Self {
        self.blend_mode = mode;
        self
    }

    /// Replace the whole dither configuration.
    #[inline]
    pub fn dither(mut self, config: DitherConfig) -> Self {
        self.dither = config;
        self
    }

    #[inline]
    pub fn dither_mode(mut self, mode: DitherMode) -> Self {
        self.dither.mode = mode;
        self
    }

    #[inline]
    pub fn dither_amount(mut self, amount: f64) -> Self {
        self.dither.amount = amount;
        self
    }

    #[inline]
    pub fn shuffle_count(mut self, count: u8) -> Self {
        self.dither.shuffle_count = count;
        self
    }

    /// Seed the white noise modes.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.dither.seed = Some(seed);
        self
    }

    pub fn target(&self) -> &'static Target {
        self.target.profile()
    }

    pub fn target_id(&self) -> TargetId {
        self.target
    }

    pub fn step_count(&self) -> usize {
        self.steps
    }

    pub fn blend(&self) -> BlendMode {
        self.blend_mode
    }

    pub fn dither_config(&self) -> &DitherConfig {
        &self.dither
    }

    /// Build and dither a gradient through `points`.
    ///
    /// 1. Validate steps, points and dither settings
    /// 2. Interpolate between target-adjusted anchors
    /// 3. Dither the unrounded values
    /// 4. Round to bytes
    pub fn build(&self, points: &[GradientPoint]) -> Result<Vec<Rgb8>, GradientError> {
        self.dither.validate()?;
        let target = self.target();

        let values = gradient::build_raw(points, self.steps, self.blend_mode, target)?;
        let values = dither::apply(values, &self.dither, target);
        let gradient = gradient::normalize(&values);

        debug!(
            target = %self.target,
            steps = self.steps,
            dither = %self.dither.mode,
            "gradient ready"
        );
        Ok(gradient)
    }

    /// Split a built gradient into odd/even fields at the target's depth,
    /// or `None` for targets that are not interlaced.
    pub fn fields(&self, gradient: &[Rgb8]) -> Option<FieldPair> {
        let target = self.target();
        target
            .interlaced
            .then(|| interlace(gradient, target.depth))
    }
}

/// Build a gradient from `points` with the settings in `config`.
///
/// Equivalent to [`GradientBlaster::build`].
pub fn build_gradient(
    points: &[GradientPoint],
    config: &GradientBlaster,
) -> Result<Vec<Rgb8>, GradientError> {
    config.build(points)
}

/// Interlace `sequence` after checking `depth`.
///
/// # Example
///
/// ```
/// use gradient_engine::{interlace_gradient, Bits};
///
/// assert!(interlace_gradient(&[[10, 20, 30]], Bits::Uniform(0)).is_err());
/// let (odd, even) = interlace_gradient(&[[10, 20, 30]], Bits::Uniform(5)).unwrap();
/// assert_eq!((odd.len(), even.len()), (1, 1));
/// ```
pub fn interlace_gradient(sequence: &[Rgb8], depth: Bits) -> Result<FieldPair, GradientError> {
    let depth = depth.validate()?;
    Ok(interlace(sequence, depth))
}
