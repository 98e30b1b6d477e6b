//! Median-cut palette reduction.
//!
//! Pixels are bucketed into a 5-bit-per-channel histogram (32768 cells).
//! The bounding box of all populated cells is then split repeatedly along
//! its longest axis, at the cell nearest the population midpoint, until
//! the requested number of boxes exists. Each box's color is the
//! population-weighted average of the cells it covers.
//!
//! Splitting runs in two phases. The first picks the most populated box
//! until 75% of the target count exists; the second picks by population
//! times volume, which favours large sparse regions that the first phase
//! leaves coarse.

use tracing::debug;

use super::error::QuantizeError;
use crate::color::Rgb8;

const SIGBITS: u32 = 5;
const RSHIFT: u32 = 8 - SIGBITS;
const HISTO_SIZE: usize = 1 << (3 * SIGBITS);
const MAX_ITERATIONS: usize = 1000;
const FRACT_BY_POPULATIONS: f64 = 0.75;

#[inline]
fn color_index(r: i32, g: i32, b: i32) -> usize {
    ((r << (2 * SIGBITS)) + (g << SIGBITS) + b) as usize
}

#[inline]
fn reduce(color: Rgb8) -> [i32; 3] {
    color.map(|c| i32::from(c >> RSHIFT))
}

/// Axis-aligned box in the reduced color space, bounds inclusive.
///
/// A cut can leave `lo > hi` on one axis; such a box is empty and
/// contains nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct VBox {
    lo: [i32; 3],
    hi: [i32; 3],
    count: u64,
}

impl VBox {
    fn new(lo: [i32; 3], hi: [i32; 3], histo: &[u64]) -> Self {
        let mut vbox = Self { lo, hi, count: 0 };
        vbox.count = vbox.cells().map(|idx| histo[idx]).sum();
        vbox
    }

    fn cells(&self) -> impl Iterator<Item = usize> + '_ {
        (self.lo[0]..=self.hi[0]).flat_map(move |r| {
            (self.lo[1]..=self.hi[1])
                .flat_map(move |g| (self.lo[2]..=self.hi[2]).map(move |b| color_index(r, g, b)))
        })
    }

    fn width(&self, axis: usize) -> i32 {
        self.hi[axis] - self.lo[axis] + 1
    }

    fn volume(&self) -> u64 {
        (0..3).map(|axis| self.width(axis).max(0) as u64).product()
    }

    fn contains(&self, color: Rgb8) -> bool {
        let cell = reduce(color);
        (0..3).all(|axis| cell[axis] >= self.lo[axis] && cell[axis] <= self.hi[axis])
    }

    fn average(&self, histo: &[u64]) -> Rgb8 {
        let mult = f64::from(1u32 << RSHIFT);
        let mut total = 0u64;
        let mut sums = [0.0f64; 3];
        for r in self.lo[0]..=self.hi[0] {
            for g in self.lo[1]..=self.hi[1] {
                for b in self.lo[2]..=self.hi[2] {
                    let hval = histo[color_index(r, g, b)];
                    if hval == 0 {
                        continue;
                    }
                    total += hval;
                    let h = hval as f64;
                    sums[0] += h * (f64::from(r) + 0.5) * mult;
                    sums[1] += h * (f64::from(g) + 0.5) * mult;
                    sums[2] += h * (f64::from(b) + 0.5) * mult;
                }
            }
        }

        if total > 0 {
            sums.map(|s| (s / total as f64).trunc().min(255.0) as u8)
        } else {
            // Geometric center of the box
            let mult = 1i32 << RSHIFT;
            [0, 1, 2].map(|axis| {
                (mult * (self.lo[axis] + self.hi[axis] + 1) / 2).clamp(0, 255) as u8
            })
        }
    }
}

/// Build the 5-bit histogram of `pixels`.
fn histogram(pixels: &[Rgb8]) -> Vec<u64> {
    let mut histo = vec![0u64; HISTO_SIZE];
    for &pixel in pixels {
        let [r, g, b] = reduce(pixel);
        histo[color_index(r, g, b)] += 1;
    }
    histo
}

/// Bounding box of every populated cell.
fn bounding_box(pixels: &[Rgb8], histo: &[u64]) -> VBox {
    let mut lo = [i32::MAX; 3];
    let mut hi = [i32::MIN; 3];
    for &pixel in pixels {
        let cell = reduce(pixel);
        for axis in 0..3 {
            lo[axis] = lo[axis].min(cell[axis]);
            hi[axis] = hi[axis].max(cell[axis]);
        }
    }
    VBox::new(lo, hi, histo)
}

/// Split `vbox` along its longest axis.
///
/// Returns the box unchanged (as a single result) when it holds exactly one
/// pixel. Callers never pass an empty box.
fn median_cut_apply(histo: &[u64], vbox: &VBox) -> (VBox, Option<VBox>) {
    if vbox.count == 1 {
        return (*vbox, None);
    }

    let widths = [vbox.width(0), vbox.width(1), vbox.width(2)];
    let max_width = widths[0].max(widths[1]).max(widths[2]);
    // First axis reaching the maximum wins, in r, g, b order
    let axis = widths.iter().position(|&w| w == max_width).unwrap_or(0);

    let lo = vbox.lo[axis];
    let hi = vbox.hi[axis];
    let mut partial = Vec::with_capacity(vbox.width(axis).max(0) as usize);
    let mut total = 0u64;
    for i in lo..=hi {
        let mut slice = *vbox;
        slice.lo[axis] = i;
        slice.hi[axis] = i;
        total += slice.cells().map(|idx| histo[idx]).sum::<u64>();
        partial.push(total);
    }

    // Outside the box both sums read as zero
    let partial_sum = |d: i32| -> u64 {
        if d >= lo && d <= hi {
            partial[(d - lo) as usize]
        } else {
            0
        }
    };
    let lookahead_sum = |d: i32| -> u64 {
        if d >= lo && d <= hi {
            total - partial[(d - lo) as usize]
        } else {
            0
        }
    };

    for i in lo..=hi {
        if partial_sum(i) * 2 <= total {
            continue;
        }

        let left = i - lo;
        let right = hi - i;
        let mut d2 = if left <= right {
            (hi - 1).min(i + right / 2)
        } else {
            lo.max((f64::from(i - 1) - f64::from(left) / 2.0).trunc() as i32)
        };

        // Avoid zero-count boxes
        while partial_sum(d2) == 0 {
            d2 += 1;
        }
        let mut count2 = lookahead_sum(d2);
        while count2 == 0 && partial_sum(d2 - 1) != 0 {
            d2 -= 1;
            count2 = lookahead_sum(d2);
        }

        let mut first = *vbox;
        let mut second = *vbox;
        first.hi[axis] = d2;
        second.lo[axis] = d2 + 1;
        return (
            VBox::new(first.lo, first.hi, histo),
            Some(VBox::new(second.lo, second.hi, histo)),
        );
    }

    // The last partial sum is the whole population, so the loop always cuts
    (*vbox, None)
}

/// Worklist of boxes, indexed by creation order.
///
/// `pop` takes the live box with the highest priority; among equal
/// priorities the most recently created box wins.
struct Worklist {
    arena: Vec<VBox>,
    live: Vec<usize>,
}

impl Worklist {
    fn new(first: VBox) -> Self {
        Self {
            arena: vec![first],
            live: vec![0],
        }
    }

    fn len(&self) -> usize {
        self.live.len()
    }

    fn push(&mut self, vbox: VBox) {
        self.arena.push(vbox);
        self.live.push(self.arena.len() - 1);
    }

    fn push_back(&mut self, id: usize) {
        self.live.push(id);
    }

    fn pop(&mut self, priority: fn(&VBox) -> u64) -> Option<(usize, VBox)> {
        let (pos, &id) = self
            .live
            .iter()
            .enumerate()
            .max_by_key(|&(_, &id)| (priority(&self.arena[id]), id))?;
        self.live.swap_remove(pos);
        Some((id, self.arena[id]))
    }

    /// Live boxes, highest priority first.
    fn drain_sorted(mut self, priority: fn(&VBox) -> u64) -> Vec<VBox> {
        let mut out = Vec::with_capacity(self.live.len());
        while let Some((_, vbox)) = self.pop(priority) {
            out.push(vbox);
        }
        out
    }
}

fn by_count(vbox: &VBox) -> u64 {
    vbox.count
}

fn by_count_and_volume(vbox: &VBox) -> u64 {
    vbox.count * vbox.volume()
}

/// Split boxes until `target` exist or the iteration cap is reached.
fn iterate(
    worklist: &mut Worklist,
    histo: &[u64],
    target: f64,
    priority: fn(&VBox) -> u64,
) -> usize {
    let mut iterations = 0;
    while (worklist.len() as f64) < target && iterations < MAX_ITERATIONS {
        iterations += 1;
        let Some((id, vbox)) = worklist.pop(priority) else {
            break;
        };
        if vbox.count == 0 {
            worklist.push_back(id);
            continue;
        }

        let (first, second) = median_cut_apply(histo, &vbox);
        worklist.push(first);
        if let Some(second) = second {
            worklist.push(second);
        }
    }
    iterations
}

/// Palette produced by [`median_cut_quantize`].
///
/// Holds the representative colors together with the box partition they
/// came from, so arbitrary colors can be mapped back onto the palette.
#[derive(Debug, Clone)]
pub struct ColorMap {
    boxes: Vec<VBox>,
    colors: Vec<Rgb8>,
}

impl ColorMap {
    /// Representative colors, ordered by population times volume
    /// (largest first).
    pub fn colors(&self) -> &[Rgb8] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color of the box containing `color`, or the [`nearest`](Self::nearest)
    /// color when no box contains it.
    pub fn map(&self, color: Rgb8) -> Rgb8 {
        self.boxes
            .iter()
            .zip(&self.colors)
            .find(|(vbox, _)| vbox.contains(color))
            .map(|(_, &c)| c)
            .unwrap_or_else(|| self.nearest(color))
    }

    /// Palette color at the smallest Euclidean RGB distance from `color`.
    /// The first of several equidistant colors wins.
    pub fn nearest(&self, color: Rgb8) -> Rgb8 {
        let mut best = self.colors[0];
        let mut best_dist = u32::MAX;
        for &candidate in &self.colors {
            let dist: u32 = (0..3)
                .map(|c| {
                    let d = i32::from(color[c]) - i32::from(candidate[c]);
                    (d * d) as u32
                })
                .sum();
            if dist < best_dist {
                best_dist = dist;
                best = candidate;
            }
        }
        best
    }
}

/// Reduce `pixels` to at most `max_colors` representative colors.
///
/// # Errors
///
/// - [`QuantizeError::MaxColors`] if `max_colors` is outside 2..=256
/// - [`QuantizeError::TooFewPixels`] if fewer than two pixels are given
///
/// # Example
///
/// ```
/// use gradient_engine::median_cut_quantize;
///
/// let pixels = [[0, 0, 0], [0, 0, 0], [255, 255, 255]];
/// let palette = median_cut_quantize(&pixels, 2).unwrap();
/// assert_eq!(palette.len(), 2);
/// assert_eq!(palette.map([0, 0, 0]), [4, 4, 4]);
/// ```
pub fn median_cut_quantize(pixels: &[Rgb8], max_colors: usize) -> Result<ColorMap, QuantizeError> {
    if !(2..=256).contains(&max_colors) {
        return Err(QuantizeError::MaxColors(max_colors));
    }
    if pixels.len() < 2 {
        return Err(QuantizeError::TooFewPixels(pixels.len()));
    }

    let histo = histogram(pixels);
    let mut worklist = Worklist::new(bounding_box(pixels, &histo));

    let first_target = FRACT_BY_POPULATIONS * max_colors as f64;
    let iterations = iterate(&mut worklist, &histo, first_target, by_count);
    debug!(boxes = worklist.len(), iterations, "median cut population phase done");

    let iterations = iterate(&mut worklist, &histo, max_colors as f64, by_count_and_volume);
    debug!(boxes = worklist.len(), iterations, "median cut volume phase done");

    let boxes = worklist.drain_sorted(by_count_and_volume);
    let colors = boxes.iter().map(|vbox| vbox.average(&histo)).collect();

    Ok(ColorMap { boxes, colors })
}
