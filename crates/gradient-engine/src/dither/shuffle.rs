//! Shuffle dithering.
//!
//! Where two neighbouring rows show different hardware colors, swapping
//! them interleaves the two levels at the boundary. Further swaps a few
//! rows out widen the interleaved band. Values are only ever swapped, so
//! the sequence keeps exactly the same colors.

use crate::color::Rgb;
use crate::target::Target;

/// Rows between each additional swap.
const SHUFFLE_SPACING: usize = 4;

pub(super) fn shuffle(values: &mut [Rgb], count: u8, target: &Target) {
    let len = values.len();
    let mut i = 1;
    while i < len {
        let prev = values[i - 1];
        let current = values[i];
        if !target.same_output(prev, current) {
            values.swap(i - 1, i);
            i += 1;

            for j in 0..usize::from(count.saturating_sub(1)) {
                let n = (j + 1) * SHUFFLE_SPACING;
                if i + 1 < len
                    && i >= n
                    && target.same_output(current, values[i + 1])
                    && target.same_output(prev, values[i - n])
                {
                    values.swap(i - n, i + 1);
                    i += 2;
                }
            }
        }
        i += 1;
    }
}
