//! Gradient construction
//!
//! Anchors are snapped to the target's displayable colors first, then
//! every row between two anchors is blended from those snapped colors.
//! The result keeps full 8-bit precision; hardware reduction happens when
//! the gradient is encoded.

mod blend;

pub use blend::BlendMode;

use tracing::debug;

use crate::color::{Hsv, Rgb, Rgb8};
use crate::error::ConfigError;
use crate::target::Target;

/// An anchor color at a position along the gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientPoint {
    /// Position, 0.0 (first row) to 1.0 (last row)
    pub pos: f64,
    pub color: Hsv,
}

impl GradientPoint {
    pub fn new(pos: f64, color: Hsv) -> Self {
        Self { pos, color }
    }

    /// Anchor from an RGB color.
    pub fn from_rgb(pos: f64, color: Rgb) -> Self {
        Self::new(pos, Hsv::from(color))
    }
}

/// Anchor mapped onto an output row.
#[derive(Debug, Clone, Copy)]
struct Anchor {
    row: i64,
    color: Rgb,
}

/// Check a gradient request before any work is done.
pub fn validate(points: &[GradientPoint], steps: usize) -> Result<(), ConfigError> {
    if steps < 2 {
        return Err(ConfigError::TooFewSteps(steps));
    }
    if points.is_empty() {
        return Err(ConfigError::NoPoints);
    }
    if let Some((index, p)) = points
        .iter()
        .enumerate()
        .find(|(_, p)| !(0.0..=1.0).contains(&p.pos))
    {
        return Err(ConfigError::PointPosition { index, pos: p.pos });
    }
    Ok(())
}

/// Sort anchors by position, map them to rows and collapse anchors that
/// land on the same row. The last anchor on a row wins.
fn anchors(points: &[GradientPoint], steps: usize, target: &Target) -> Vec<Anchor> {
    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| a.pos.total_cmp(&b.pos));

    let last_row = (steps - 1) as f64;
    let mut out: Vec<Anchor> = Vec::with_capacity(sorted.len());
    for point in sorted {
        let anchor = Anchor {
            row: (point.pos * last_row).round() as i64,
            color: target.adjust_color(Rgb::from(point.color)),
        };
        match out.last_mut() {
            Some(prev) if prev.row == anchor.row => *prev = anchor,
            _ => out.push(anchor),
        }
    }
    out
}

/// Build the unrounded sequence. Dithering works on these values so that
/// sub-integer offsets survive until the final rounding.
pub(crate) fn build_raw(
    points: &[GradientPoint],
    steps: usize,
    blend_mode: BlendMode,
    target: &Target,
) -> Result<Vec<Rgb>, ConfigError> {
    validate(points, steps)?;
    let anchors = anchors(points, steps, target);

    let mut values = Vec::with_capacity(steps);
    let mut cursor = 0;
    for i in 0..steps as i64 {
        let current = anchors[cursor];
        let color = match anchors.get(cursor + 1) {
            None => current.color,
            Some(_) if current.row >= i => current.color,
            Some(next) if next.row == i => {
                cursor += 1;
                next.color
            }
            Some(next) => {
                let t = (i - current.row) as f64 / (next.row - current.row) as f64;
                blend_mode.mix(current.color, next.color, t)
            }
        };
        values.push(color);
    }

    debug!(
        steps,
        anchors = anchors.len(),
        blend = %blend_mode,
        target = %target.id,
        "built gradient"
    );
    Ok(values)
}

/// Clamp and round every entry to bytes.
pub fn normalize(values: &[Rgb]) -> Vec<Rgb8> {
    values.iter().map(|c| c.to_bytes()).collect()
}

/// Interpolate `points` into `steps` colors.
///
/// Anchor colors are passed through the target's
/// [`adjust_color`](Target::adjust_color) and appear exactly at their rows;
/// rows in between are blended with `blend_mode`.
///
/// # Errors
///
/// [`ConfigError`] when `steps < 2`, `points` is empty, or a position lies
/// outside 0.0..=1.0.
///
/// # Example
///
/// ```
/// use gradient_engine::{build, BlendMode, GradientPoint, Hsv, TargetId};
///
/// let points = [
///     GradientPoint::new(0.0, Hsv::new(0.0, 0.0, 0.0)),
///     GradientPoint::new(1.0, Hsv::new(0.0, 0.0, 1.0)),
/// ];
/// let gradient = build(&points, 16, BlendMode::Oklab, TargetId::AmigaOcs.profile()).unwrap();
/// assert_eq!(gradient.len(), 16);
/// assert_eq!(gradient[0], [0, 0, 0]);
/// assert_eq!(gradient[15], [255, 255, 255]);
/// ```
pub fn build(
    points: &[GradientPoint],
    steps: usize,
    blend_mode: BlendMode,
    target: &Target,
) -> Result<Vec<Rgb8>, ConfigError> {
    build_raw(points, steps, blend_mode, target).map(|values| normalize(&values))
}
