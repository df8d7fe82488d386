//! Real-world scenario benchmarks.
//!
//! These benchmarks model the audio callback as the terminal front-end
//! drives it.

mod theremin;

pub use theremin::bench_theremin;
