//! Oklab perceptual color space
//!
//! Oklab is used for two things here: the `oklab` blend mode, and the
//! distance metric when matching colors against a fixed hardware palette.
//!
//! Conversions from [`Rgb`] feed the 0..=255 components straight into the
//! transfer function (see [`LinearRgb::from_unscaled`]), so white has a
//! lightness of about 80.7 rather than 1.0. Blends round each component on
//! this scale. The matrices themselves are the standard ones and agree with
//! other implementations when given normalized [`LinearRgb`].
//!
//! # References
//!
//! Björn Ottosson, "A perceptual color space for image processing"
//! <https://bottosson.github.io/posts/oklab/>

use super::linear_rgb::LinearRgb;
use super::rgb::{round_half_up, Rgb};

/// A color in Oklab perceptual color space.
///
/// # Components
///
/// - `l`: Lightness (0.0 = black)
/// - `a`: Green-red axis (negative = green, positive = red)
/// - `b`: Blue-yellow axis (negative = blue, positive = yellow)
///
/// Values are not clamped. Interpolated colors can land outside the sRGB
/// gamut; the caller clamps when committing to bytes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklab {
    /// Lightness
    pub l: f64,
    /// Green-red axis
    pub a: f64,
    /// Blue-yellow axis
    pub b: f64,
}

impl Oklab {
    /// Create a new Oklab color.
    ///
    /// # Example
    ///
    /// ```
    /// use gradient_engine::Oklab;
    ///
    /// // A mid-gray color (neutral, no chroma)
    /// let gray = Oklab::new(0.5, 0.0, 0.0);
    /// ```
    #[inline]
    pub fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Squared Euclidean distance in Oklab space.
    ///
    /// Palette matching only compares distances, so the square root is
    /// never taken.
    ///
    /// # Example
    ///
    /// ```
    /// use gradient_engine::Oklab;
    ///
    /// let white = Oklab::new(1.0, 0.0, 0.0);
    /// let black = Oklab::new(0.0, 0.0, 0.0);
    /// let gray = Oklab::new(0.5, 0.0, 0.0);
    ///
    /// let d_to_black = gray.distance_squared(black);
    /// let d_to_white = gray.distance_squared(white);
    /// assert!((d_to_black - d_to_white).abs() < 1e-12);
    /// ```
    #[inline]
    pub fn distance_squared(self, other: Oklab) -> f64 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        dl * dl + da * da + db * db
    }

    /// Component-wise linear interpolation, `t` in 0.0..=1.0.
    #[inline]
    pub fn lerp(self, other: Oklab, t: f64) -> Self {
        Self {
            l: self.l + (other.l - self.l) * t,
            a: self.a + (other.a - self.a) * t,
            b: self.b + (other.b - self.b) * t,
        }
    }

    /// Round every component half-up.
    #[inline]
    pub fn round(self) -> Self {
        Self::new(
            round_half_up(self.l),
            round_half_up(self.a),
            round_half_up(self.b),
        )
    }
}

impl From<LinearRgb> for Oklab {
    /// Linear sRGB to Oklab: M1 matrix, cube root, M2 matrix.
    fn from(rgb: LinearRgb) -> Self {
        let l = 0.412_221_470_8 * rgb.r + 0.536_332_536_3 * rgb.g + 0.051_445_992_9 * rgb.b;
        let m = 0.211_903_498_2 * rgb.r + 0.680_699_545_1 * rgb.g + 0.107_396_956_6 * rgb.b;
        let s = 0.088_302_461_9 * rgb.r + 0.281_718_837_6 * rgb.g + 0.629_978_700_5 * rgb.b;

        let l_ = l.cbrt();
        let m_ = m.cbrt();
        let s_ = s.cbrt();

        Oklab {
            l: 0.210_454_255_3 * l_ + 0.793_617_785 * m_ - 0.004_072_046_8 * s_,
            a: 1.977_998_495_1 * l_ - 2.428_592_205 * m_ + 0.450_593_709_9 * s_,
            b: 0.025_904_037_1 * l_ + 0.782_771_766_2 * m_ - 0.808_675_766 * s_,
        }
    }
}

impl From<Oklab> for LinearRgb {
    /// Oklab to linear sRGB. Out-of-gamut input yields components outside
    /// 0.0..=1.0.
    fn from(lab: Oklab) -> Self {
        let l_ = lab.l * 0.999_999_998_450_519_8
            + 0.396_337_792_173_767_9 * lab.a
            + 0.215_803_758_060_758_8 * lab.b;
        let m_ = lab.l * 1.000_000_008_881_761
            - 0.105_561_342_323_656 * lab.a
            - 0.063_854_174_771_705_9 * lab.b;
        let s_ = lab.l * 1.000_000_054_672_411
            - 0.089_484_182_094_965_8 * lab.a
            - 1.291_485_537_864_092 * lab.b;

        let l = l_ * l_ * l_;
        let m = m_ * m_ * m_;
        let s = s_ * s_ * s_;

        LinearRgb {
            r: 4.076_741_661_347_994 * l - 3.307_711_590_408_193 * m + 0.230_969_928_729_428 * s,
            g: -1.268_438_004_092_176_3 * l + 2.609_757_400_663_371_5 * m
                - 0.341_319_396_310_219_7 * s,
            b: -0.004_196_086_541_837_188 * l - 0.703_418_614_459_449_3 * m
                + 1.707_614_700_930_944_4 * s,
        }
    }
}

impl From<Rgb> for Oklab {
    fn from(rgb: Rgb) -> Self {
        Oklab::from(LinearRgb::from_unscaled(rgb))
    }
}

impl From<Oklab> for Rgb {
    fn from(lab: Oklab) -> Self {
        LinearRgb::from(lab).to_unscaled()
    }
}
