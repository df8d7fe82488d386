//! Benchmarks for the one-pole smoother.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use theremin_dsp::dsp::OnePole;

use crate::{BLOCK_SIZES, SAMPLE_RATE};

pub fn bench_smoothing(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/smoothing");

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];
        let mut filter = OnePole::lowpass(4.0, SAMPLE_RATE);

        group.bench_with_input(BenchmarkId::new("step", size), &size, |b, _| {
            b.iter(|| {
                for sample in buffer.iter_mut() {
                    *sample = filter.next_sample(black_box(1.0));
                }
            })
        });
    }

    group.finish();
}
