//! CIE L*a*b* (D65) color type, used by the `lab` blend mode and by
//! one-dimensional error diffusion.

use super::rgb::{round_half_up, Rgb};
use super::transfer::{decode, encode};

// D65 reference white
const XN: f64 = 0.950_47;
const YN: f64 = 1.0;
const ZN: f64 = 1.088_83;

const EPSILON: f64 = 0.008_856;
const KAPPA: f64 = 7.787;

/// A color in CIE L*a*b*.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl Lab {
    #[inline]
    pub fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    #[inline]
    pub fn lerp(self, other: Lab, t: f64) -> Self {
        Self {
            l: self.l + (other.l - self.l) * t,
            a: self.a + (other.a - self.a) * t,
            b: self.b + (other.b - self.b) * t,
        }
    }

    /// Round every component half-up, as the `lab` blend does.
    #[inline]
    pub fn round(self) -> Self {
        Self::new(
            round_half_up(self.l),
            round_half_up(self.a),
            round_half_up(self.b),
        )
    }
}

impl std::ops::Sub for Lab {
    type Output = Lab;

    fn sub(self, rhs: Lab) -> Lab {
        Lab::new(self.l - rhs.l, self.a - rhs.a, self.b - rhs.b)
    }
}

impl std::ops::Add for Lab {
    type Output = Lab;

    fn add(self, rhs: Lab) -> Lab {
        Lab::new(self.l + rhs.l, self.a + rhs.a, self.b + rhs.b)
    }
}

impl std::ops::Mul<f64> for Lab {
    type Output = Lab;

    fn mul(self, rhs: f64) -> Lab {
        Lab::new(self.l * rhs, self.a * rhs, self.b * rhs)
    }
}

#[inline]
fn pivot(t: f64) -> f64 {
    if t > EPSILON {
        t.cbrt()
    } else {
        KAPPA * t + 16.0 / 116.0
    }
}

#[inline]
fn unpivot(t: f64) -> f64 {
    let cubed = t * t * t;
    if cubed > EPSILON {
        cubed
    } else {
        (t - 16.0 / 116.0) / KAPPA
    }
}

impl From<Rgb> for Lab {
    /// sRGB (0..=255) -> XYZ (D65) -> L*a*b*.
    fn from(rgb: Rgb) -> Self {
        let r = decode(rgb.r / 255.0);
        let g = decode(rgb.g / 255.0);
        let b = decode(rgb.b / 255.0);

        let x = pivot((r * 0.4124 + g * 0.3576 + b * 0.1805) / XN);
        let y = pivot((r * 0.2126 + g * 0.7152 + b * 0.0722) / YN);
        let z = pivot((r * 0.0193 + g * 0.1192 + b * 0.9505) / ZN);

        Lab::new(116.0 * y - 16.0, 500.0 * (x - y), 200.0 * (y - z))
    }
}

impl From<Lab> for Rgb {
    /// L*a*b* -> XYZ -> sRGB, clamped to the displayable range.
    fn from(lab: Lab) -> Self {
        let fy = (lab.l + 16.0) / 116.0;
        let fx = lab.a / 500.0 + fy;
        let fz = fy - lab.b / 200.0;

        let x = XN * unpivot(fx);
        let y = YN * unpivot(fy);
        let z = ZN * unpivot(fz);

        let r = x * 3.2406 + y * -1.5372 + z * -0.4986;
        let g = x * -0.9689 + y * 1.8758 + z * 0.0415;
        let b = x * 0.0557 + y * -0.204 + z * 1.057;

        let channel = |c: f64| encode(c).clamp(0.0, 1.0) * 255.0;
        Rgb::new(channel(r), channel(g), channel(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values() {
        let white = Lab::from(Rgb::WHITE);
        assert!((white.l - 100.0).abs() < 0.01, "white L = {}", white.l);
        assert!(white.a.abs() < 0.05 && white.b.abs() < 0.05);

        let black = Lab::from(Rgb::BLACK);
        assert!(black.l.abs() < 1e-9);
    }

    #[test]
    fn test_matches_palette_crate() {
        use palette::{IntoColor, Lab as PaletteLab, Srgb};

        for bytes in [[255u8, 0, 0], [0, 255, 0], [0, 0, 255], [128, 128, 128]] {
            let ours = Lab::from(Rgb::from_bytes(bytes));
            let theirs: PaletteLab<palette::white_point::D65, f64> =
                Srgb::new(bytes[0], bytes[1], bytes[2])
                    .into_format::<f64>()
                    .into_color();
            assert!((ours.l - theirs.l).abs() < 0.1, "{bytes:?}: L {} vs {}", ours.l, theirs.l);
            assert!((ours.a - theirs.a).abs() < 0.5, "{bytes:?}: a {} vs {}", ours.a, theirs.a);
            assert!((ours.b - theirs.b).abs() < 0.5, "{bytes:?}: b {} vs {}", ours.b, theirs.b);
        }
    }

    #[test]
    fn test_round_trip_within_one_lsb() {
        for r in (0..=255u16).step_by(51) {
            for g in (0..=255u16).step_by(51) {
                for b in (0..=255u16).step_by(51) {
                    let bytes = [r as u8, g as u8, b as u8];
                    let back = Rgb::from(Lab::from(Rgb::from_bytes(bytes))).to_bytes();
                    for c in 0..3 {
                        let diff = (i16::from(back[c]) - i16::from(bytes[c])).abs();
                        assert!(diff <= 1, "{bytes:?} came back as {back:?}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_out_of_gamut_is_clamped() {
        let rgb = Rgb::from(Lab::new(150.0, 120.0, -120.0));
        for c in rgb.to_array() {
            assert!((0.0..=255.0).contains(&c));
        }
    }
}
