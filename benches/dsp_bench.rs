//! Benchmarks for DSP primitives and the full render path.
//!
//! Run with: cargo bench
//!
//! Everything here runs on the audio thread, so it has to finish well within
//! the real-time deadline of one block.
//!
//! Reference timing at 44.1kHz sample rate:
//!   - 64 samples  = 1.45ms deadline
//!   - 128 samples = 2.90ms deadline
//!   - 256 samples = 5.80ms deadline
//!   - 512 samples = 11.61ms deadline
//!
//! Benchmark groups:
//!   - dsp/*        Low-level primitives (ramp, wavetable, smoothing)
//!   - scenarios/*  The instrument render path

use criterion::{criterion_group, criterion_main};

mod dsp;
mod scenarios;

/// Common buffer sizes used in audio applications.
pub const BLOCK_SIZES: &[usize] = &[64, 128, 256, 512];

/// Sample rate used throughout the benches.
pub const SAMPLE_RATE: f32 = 44_100.0;

criterion_group!(
    benches,
    // Low-level DSP primitives
    dsp::bench_ramp,
    dsp::bench_wavetable,
    dsp::bench_smoothing,
    // Real-world scenarios
    scenarios::bench_theremin,
);
criterion_main!(benches);
