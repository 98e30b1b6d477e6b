//! Additive offset sequences.
//!
//! Every function returns per-channel offsets in 8-bit scale units for
//! row `i`, already multiplied by the scaled dither amount.

use rand::Rng;

const GOLDEN_RATIO: f64 = 1.61803399;

/// Offset magnitude of the ordered pattern before scaling.
const ORDERED_STEP: f64 = 4.0;

/// Full swing of the noise sequences: one 4-bit level is 17 units.
const NOISE_RANGE: f64 = 17.0;

/// Blue noise ranks 0..64; offsets come from `rank / 64 - 0.5`.
const BLUE_NOISE: [u8; 64] = [
    18, 59, 10, 35, 49, 22, 6, 53, 27, 41, 13, 63, 20, 37, 1, 48, 25, 57, 9, 34, 44, 16, 51, 4,
    31, 62, 19, 39, 11, 47, 23, 56, 0, 32, 45, 14, 60, 28, 7, 50, 38, 15, 29, 54, 2, 42, 24, 61,
    12, 36, 21, 52, 5, 40, 26, 58, 8, 33, 46, 17, 55, 3, 30, 43,
];

#[inline]
fn blue_noise(i: usize) -> f64 {
    f64::from(BLUE_NOISE[i % BLUE_NOISE.len()]) / 64.0 - 0.5
}

#[inline]
fn golden(i: usize) -> f64 {
    (i as f64 * GOLDEN_RATIO).fract() - 0.5
}

#[inline]
fn parity_offset(i: usize) -> f64 {
    if i % 2 == 1 {
        ORDERED_STEP
    } else {
        -ORDERED_STEP
    }
}

pub(super) fn ordered(i: usize, amount: f64) -> [f64; 3] {
    let offset = parity_offset(i) * amount;
    [offset, -offset, offset]
}

pub(super) fn ordered_mono(i: usize, amount: f64) -> [f64; 3] {
    [parity_offset(i) * amount; 3]
}

pub(super) fn blue(i: usize, amount: f64) -> [f64; 3] {
    let scale = NOISE_RANGE * amount;
    [
        blue_noise(i) * scale,
        blue_noise(i + 16) * scale,
        blue_noise(i + 32) * scale,
    ]
}

pub(super) fn blue_mono(i: usize, amount: f64) -> [f64; 3] {
    [blue_noise(i) * NOISE_RANGE * amount; 3]
}

pub(super) fn golden_ratio(i: usize, amount: f64) -> [f64; 3] {
    let scale = NOISE_RANGE * amount;
    [golden(i) * scale, golden(i + 1) * scale, golden(i + 3) * scale]
}

pub(super) fn golden_ratio_mono(i: usize, amount: f64) -> [f64; 3] {
    [golden(i) * NOISE_RANGE * amount; 3]
}

pub(super) fn white<R: Rng + ?Sized>(rng: &mut R, amount: f64) -> [f64; 3] {
    let half = NOISE_RANGE / 2.0;
    [0; 3].map(|_| (rng.gen::<f64>() * NOISE_RANGE - half) * amount)
}

pub(super) fn white_mono<R: Rng + ?Sized>(rng: &mut R, amount: f64) -> [f64; 3] {
    [(rng.gen::<f64>() - 0.5) * NOISE_RANGE * amount; 3]
}
