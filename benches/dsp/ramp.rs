//! Benchmarks for the linear ramp.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use theremin_dsp::dsp::Ramp;

use crate::{BLOCK_SIZES, SAMPLE_RATE};

pub fn bench_ramp(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/ramp");

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        // Moving - long attack so the ramp never finishes mid-bench
        let mut ramp = Ramp::new(SAMPLE_RATE);
        ramp.ramp_to(1.0, 1.0e6);
        group.bench_with_input(BenchmarkId::new("moving", size), &size, |b, _| {
            b.iter(|| {
                ramp.render(black_box(&mut buffer));
            })
        });

        // At rest - just returns the held value
        let mut ramp = Ramp::new(SAMPLE_RATE);
        ramp.set_value(1.0);
        group.bench_with_input(BenchmarkId::new("at_rest", size), &size, |b, _| {
            b.iter(|| {
                ramp.render(black_box(&mut buffer));
            })
        });
    }

    group.finish();
}
