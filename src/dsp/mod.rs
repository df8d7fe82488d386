//! Low-level DSP primitives used by the instrument.
//!
//! These components are allocation-free and realtime-safe once set up, making
//! them safe to embed directly inside the render context. Every call is a
//! total function: degenerate input degrades to silence or a held value, it
//! never panics.

/// Decibel, octave, and range conversions.
pub mod convert;
/// Sample-clocked linear value ramp.
pub mod ramp;
/// One-pole low-pass for smoothing control signals.
pub mod smoothing;
/// Single-cycle lookup table builders.
pub mod table;
/// Table-lookup oscillator with optional interpolation.
pub mod wavetable;

pub use ramp::Ramp;
pub use smoothing::OnePole;
pub use wavetable::{Interpolation, Wavetable};
