//! Single-cycle lookup tables for [`Wavetable`](super::wavetable::Wavetable).
//!
//! Tables are built once at setup time. Nothing in here is meant to run on
//! the audio thread.

use std::f32::consts::TAU;

/// Table size used by the instrument's oscillators.
pub const DEFAULT_TABLE_SIZE: usize = 1024;

/// One cycle of a sine wave, `table[i] = sin(2π·i / size)`.
///
/// # Example
/// ```
/// use theremin_dsp::dsp::table::sine;
/// let table = sine(4);
/// assert!((table[1] - 1.0).abs() < 1e-6);
/// assert!((table[3] + 1.0).abs() < 1e-6);
/// ```
pub fn sine(size: usize) -> Vec<f32> {
    from_fn(size, |phase| (TAU * phase).sin())
}

/// Sample `shape` at `size` evenly spaced phases in `[0, 1)`.
pub fn from_fn(size: usize, shape: impl Fn(f32) -> f32) -> Vec<f32> {
    (0..size).map(|i| shape(i as f32 / size as f32)).collect()
}
