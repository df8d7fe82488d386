//! Benchmarks for low-level DSP primitives.

mod ramp;
mod smoothing;
mod wavetable;

pub use ramp::bench_ramp;
pub use smoothing::bench_smoothing;
pub use wavetable::bench_wavetable;
