//! Blend modes for intermediate gradient steps.

use std::fmt;
use std::str::FromStr;

use crate::color::{linear_to_srgb, round_half_up, srgb_to_linear, Lab, LinearRgb, Oklab, Rgb};
use crate::error::ConfigError;

/// Empirical gamma for the perceptual brightness measure.
const BRIGHTNESS_GAMMA: f64 = 0.43;

/// Color space in which two anchors are interpolated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BlendMode {
    /// Component-wise in sRGB, rounded to whole values
    Linear,
    /// CIE L*a*b*
    Lab,
    /// Oklab
    #[default]
    Oklab,
    /// Linear light with a separately interpolated brightness
    Perceptual,
}

impl BlendMode {
    pub const ALL: [BlendMode; 4] = [
        BlendMode::Linear,
        BlendMode::Lab,
        BlendMode::Oklab,
        BlendMode::Perceptual,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BlendMode::Linear => "linear",
            BlendMode::Lab => "lab",
            BlendMode::Oklab => "oklab",
            BlendMode::Perceptual => "perceptual",
        }
    }

    /// Color at `t` (0.0..=1.0) between `from` and `to`.
    ///
    /// The `lab` and `oklab` modes round the interpolated components before
    /// converting back, so even `t = 0.0` is only an approximation of
    /// `from`. Gradient anchors are emitted directly and never blended.
    ///
    /// # Example
    ///
    /// ```
    /// use gradient_engine::{BlendMode, Rgb};
    ///
    /// let mid = BlendMode::Linear.mix(Rgb::BLACK, Rgb::new(255.0, 0.0, 9.0), 0.5);
    /// assert_eq!(mid, Rgb::new(128.0, 0.0, 5.0));
    /// ```
    pub fn mix(self, from: Rgb, to: Rgb, t: f64) -> Rgb {
        match self {
            BlendMode::Linear => mix_linear(from, to, t),
            BlendMode::Lab => Rgb::from(Lab::from(from).lerp(Lab::from(to), t).round()),
            BlendMode::Oklab => Rgb::from(Oklab::from(from).lerp(Oklab::from(to), t).round()),
            BlendMode::Perceptual => mix_perceptual(from, to, t),
        }
    }
}

impl fmt::Display for BlendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BlendMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownName {
                kind: "blend mode",
                name: s.to_string(),
            })
    }
}

fn mix_linear(from: Rgb, to: Rgb, t: f64) -> Rgb {
    Rgb::new(
        round_half_up(from.r + (to.r - from.r) * t),
        round_half_up(from.g + (to.g - from.g) * t),
        round_half_up(from.b + (to.b - from.b) * t),
    )
}

/// Lerp in linear light, then rescale so the mixture's intensity follows
/// the interpolated `sum^0.43` brightness of the endpoints. Plain linear
/// mixing dips in brightness between saturated colors.
fn mix_perceptual(from: Rgb, to: Rgb, t: f64) -> Rgb {
    let from = LinearRgb::new(
        srgb_to_linear(from.r),
        srgb_to_linear(from.g),
        srgb_to_linear(from.b),
    );
    let to = LinearRgb::new(
        srgb_to_linear(to.r),
        srgb_to_linear(to.g),
        srgb_to_linear(to.b),
    );
    let mut mixed = LinearRgb::new(
        from.r + (to.r - from.r) * t,
        from.g + (to.g - from.g) * t,
        from.b + (to.b - from.b) * t,
    );

    let from_brightness = from.sum().powf(BRIGHTNESS_GAMMA);
    let to_brightness = to.sum().powf(BRIGHTNESS_GAMMA);
    let brightness = from_brightness + (to_brightness - from_brightness) * t;
    let intensity = brightness.powf(1.0 / BRIGHTNESS_GAMMA);

    let sum = mixed.sum();
    if sum > 0.0 {
        mixed = mixed.scale(intensity / sum);
    }

    Rgb::new(
        linear_to_srgb(mixed.r),
        linear_to_srgb(mixed.g),
        linear_to_srgb(mixed.b),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb8;

    fn close(a: Rgb, b: Rgb, tolerance: f64) -> bool {
        (a.r - b.r).abs() <= tolerance
            && (a.g - b.g).abs() <= tolerance
            && (a.b - b.b).abs() <= tolerance
    }

    #[test]
    fn test_unrounded_modes_hit_endpoints() {
        let from = Rgb::new(255.0, 0.0, 0.0);
        let to = Rgb::new(0.0, 0.0, 255.0);
        for mode in [BlendMode::Linear, BlendMode::Perceptual] {
            assert!(close(mode.mix(from, to, 0.0), from, 0.5), "{mode} at 0");
            assert!(close(mode.mix(from, to, 1.0), to, 0.5), "{mode} at 1");
        }
    }

    #[test]
    fn test_oklab_rounds_on_byte_scale() {
        let steps: Vec<Rgb8> = [0.25, 0.5, 0.75]
            .into_iter()
            .map(|t| BlendMode::Oklab.mix(Rgb::BLACK, Rgb::WHITE, t).to_bytes())
            .collect();
        assert_eq!(steps, vec![[45; 3], [106; 3], [180; 3]]);

        let purple = BlendMode::Oklab.mix(Rgb::new(255.0, 0.0, 0.0), Rgb::new(0.0, 0.0, 255.0), 0.5);
        assert_eq!(purple.to_bytes(), [150, 93, 165]);
    }

    #[test]
    fn test_lab_rounds_components() {
        let steps: Vec<Rgb8> = [0.25, 0.5, 0.75]
            .into_iter()
            .map(|t| BlendMode::Lab.mix(Rgb::BLACK, Rgb::WHITE, t).to_bytes())
            .collect();
        assert_eq!(steps, vec![[59; 3], [119; 3], [185; 3]]);
    }

    #[test]
    fn test_linear_rounds_half_up() {
        let mixed = BlendMode::Linear.mix(Rgb::new(0.0, 10.0, 0.0), Rgb::new(1.0, 11.0, 3.0), 0.5);
        assert_eq!(mixed, Rgb::new(1.0, 11.0, 2.0));
    }

    #[test]
    fn test_perceptual_midpoint_follows_brightness_curve() {
        let perceptual = BlendMode::Perceptual.mix(Rgb::BLACK, Rgb::WHITE, 0.5);
        // Halfway in linear light is far too bright to look like a midpoint
        let plain = linear_to_srgb(0.5);
        assert!(perceptual.r > 0.0 && perceptual.r < plain, "{perceptual:?}");
        assert!((perceptual.r - perceptual.g).abs() < 1e-9);
        assert!((perceptual.g - perceptual.b).abs() < 1e-9);
    }

    #[test]
    fn test_perceptual_equal_intensity_endpoints_mix_linearly() {
        let red = Rgb::new(255.0, 0.0, 0.0);
        let green = Rgb::new(0.0, 255.0, 0.0);
        let mixed = BlendMode::Perceptual.mix(red, green, 0.5);
        assert!((mixed.r - linear_to_srgb(0.5)).abs() < 1e-9);
        assert!((mixed.g - linear_to_srgb(0.5)).abs() < 1e-9);
    }

    #[test]
    fn test_perceptual_black_to_black_stays_black() {
        let mixed = BlendMode::Perceptual.mix(Rgb::BLACK, Rgb::BLACK, 0.5);
        assert_eq!(mixed, Rgb::BLACK);
    }

    #[test]
    fn test_gray_blends_stay_gray() {
        for mode in BlendMode::ALL {
            let mixed = mode.mix(Rgb::BLACK, Rgb::WHITE, 0.3).to_bytes();
            assert!(
                mixed[0].abs_diff(mixed[1]) <= 1 && mixed[1].abs_diff(mixed[2]) <= 1,
                "{mode}: {mixed:?}"
            );
        }
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("perceptual".parse::<BlendMode>(), Ok(BlendMode::Perceptual));
        assert!("hsv".parse::<BlendMode>().is_err());
        assert_eq!(BlendMode::default(), BlendMode::Oklab);
    }
}
