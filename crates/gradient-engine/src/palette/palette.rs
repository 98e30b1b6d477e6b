//! Fixed hardware palette with nearest-color matching.
//!
//! Targets that cannot express arbitrary RGB values (the Amstrad CPC is the
//! one in the catalogue) supply their palette as static data. Every
//! gradient color is snapped to the perceptually nearest entry, with
//! distances measured in Oklab. Each target builds its [`Palette`] once and
//! reuses the cached Oklab coordinates for every lookup.

use std::collections::HashSet;

use tracing::debug;

use super::error::PaletteError;
use crate::color::{Oklab, Rgb, Rgb8};

/// A fixed color palette with precomputed Oklab coordinates.
///
/// # Example
///
/// ```
/// use gradient_engine::{Palette, Rgb};
///
/// let palette = Palette::new(&[[0, 0, 0], [255, 255, 255]]).unwrap();
/// assert_eq!(palette.len(), 2);
/// assert_eq!(palette.nearest(Rgb::new(40.0, 40.0, 40.0)), [0, 0, 0]);
/// ```
#[derive(Debug, Clone)]
pub struct Palette {
    colors: Vec<Rgb8>,
    oklab: Vec<Oklab>,
}

impl Palette {
    /// Create a palette from byte triples.
    ///
    /// # Errors
    ///
    /// - [`PaletteError::EmptyPalette`] if `colors` is empty
    /// - [`PaletteError::DuplicateColor`] if an entry repeats an earlier one
    pub fn new(colors: &[Rgb8]) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }

        let mut seen = HashSet::with_capacity(colors.len());
        for (index, color) in colors.iter().enumerate() {
            if !seen.insert(*color) {
                return Err(PaletteError::DuplicateColor { index });
            }
        }

        let oklab = colors
            .iter()
            .map(|&c| Oklab::from(Rgb::from_bytes(c)))
            .collect();

        debug!(entries = colors.len(), "built palette matcher");
        Ok(Self {
            colors: colors.to_vec(),
            oklab,
        })
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false; construction rejects empty palettes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// All entries in palette order.
    #[inline]
    pub fn colors(&self) -> &[Rgb8] {
        &self.colors
    }

    /// Index and squared Oklab distance of the entry nearest to `color`.
    ///
    /// Ties resolve to the first minimal entry in palette order.
    pub fn find_nearest(&self, color: Oklab) -> (usize, f64) {
        let mut best_idx = 0;
        let mut best_dist = f64::MAX;

        for (i, &entry) in self.oklab.iter().enumerate() {
            let dist = color.distance_squared(entry);
            if dist < best_dist {
                best_dist = dist;
                best_idx = i;
            }
        }

        (best_idx, best_dist)
    }

    /// The entry nearest to `color`.
    pub fn nearest(&self, color: Rgb) -> Rgb8 {
        let (index, _) = self.find_nearest(Oklab::from(color));
        self.colors[index]
    }
}

/// Nearest entry of an unvalidated color slice, by squared Oklab distance.
///
/// Returns `None` for an empty slice. Target profiles go through
/// [`Palette::nearest`] instead, which caches the Oklab values.
pub fn nearest(color: Rgb, palette: &[Rgb8]) -> Option<Rgb8> {
    let target = Oklab::from(color);
    let mut best: Option<(Rgb8, f64)> = None;
    for &entry in palette {
        let dist = target.distance_squared(Oklab::from(Rgb::from_bytes(entry)));
        if best.map_or(true, |(_, d)| dist < d) {
            best = Some((entry, dist));
        }
    }
    best.map(|(entry, _)| entry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_and_duplicates() {
        assert_eq!(Palette::new(&[]).unwrap_err(), PaletteError::EmptyPalette);
        assert_eq!(
            Palette::new(&[[0, 0, 0], [9, 9, 9], [0, 0, 0]]).unwrap_err(),
            PaletteError::DuplicateColor { index: 2 }
        );
    }

    #[test]
    fn test_exact_entries_map_to_themselves() {
        let colors = [[0, 0, 0], [255, 0, 0], [0, 255, 0], [0, 0, 255], [255, 255, 255]];
        let palette = Palette::new(&colors).unwrap();
        for c in colors {
            assert_eq!(palette.nearest(Rgb::from_bytes(c)), c);
            assert_eq!(palette.find_nearest(Oklab::from(Rgb::from_bytes(c))).1, 0.0);
        }
    }

    #[test]
    fn test_nearest_is_perceptual() {
        let palette = Palette::new(&[[0, 0, 0], [128, 128, 128], [255, 255, 255]]).unwrap();
        assert_eq!(palette.nearest(Rgb::new(100.0, 100.0, 100.0)), [128, 128, 128]);
        assert_eq!(palette.nearest(Rgb::new(230.0, 230.0, 230.0)), [255, 255, 255]);
    }

    #[test]
    fn test_first_entry_wins_ties() {
        let entries = [[0, 0, 0], [0, 0, 0]];
        assert_eq!(nearest(Rgb::new(1.0, 1.0, 1.0), &entries), Some([0, 0, 0]));

        let palette = Palette::new(&[[10, 10, 10], [200, 200, 200]]).unwrap();
        let (index, _) = palette.find_nearest(Oklab::from(Rgb::new(10.0, 10.0, 10.0)));
        assert_eq!(index, 0);
    }

    #[test]
    fn test_free_nearest_matches_palette() {
        let colors = [[0, 0, 0], [255, 0, 0], [0, 128, 255], [255, 255, 0]];
        let palette = Palette::new(&colors).unwrap();
        for probe in [[200, 30, 30], [20, 100, 200], [240, 240, 40], [5, 5, 5]] {
            let c = Rgb::from_bytes(probe);
            assert_eq!(nearest(c, &colors), Some(palette.nearest(c)));
        }
        assert_eq!(nearest(Rgb::BLACK, &[]), None);
    }

    #[test]
    fn test_colors_keep_palette_order() {
        let colors = [[0, 0, 128], [0, 0, 0], [255, 0, 0]];
        let palette = Palette::new(&colors).unwrap();
        assert_eq!(palette.colors(), &colors);
        assert_eq!(palette.len(), 3);
        assert!(!palette.is_empty());
    }
}
