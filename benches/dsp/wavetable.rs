//! Benchmarks for wavetable playback.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use theremin_dsp::dsp::{table, Interpolation, Wavetable};

use crate::{BLOCK_SIZES, SAMPLE_RATE};

pub fn bench_wavetable(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/wavetable");
    let sine = table::sine(table::DEFAULT_TABLE_SIZE);

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        // Linear interpolation - two reads and a blend
        let mut osc = Wavetable::new(SAMPLE_RATE, &sine, Interpolation::Linear);
        osc.set_frequency(1244.5);
        group.bench_with_input(BenchmarkId::new("linear", size), &size, |b, _| {
            b.iter(|| {
                osc.render(black_box(&mut buffer));
            })
        });

        // Truncation - single read
        let mut osc = Wavetable::new(SAMPLE_RATE, &sine, Interpolation::Truncate);
        osc.set_frequency(1244.5);
        group.bench_with_input(BenchmarkId::new("truncate", size), &size, |b, _| {
            b.iter(|| {
                osc.render(black_box(&mut buffer));
            })
        });

        // Per-sample frequency changes, as the vibrato path does
        let mut osc = Wavetable::new(SAMPLE_RATE, &sine, Interpolation::Linear);
        group.bench_with_input(BenchmarkId::new("modulated", size), &size, |b, _| {
            b.iter(|| {
                for (i, sample) in buffer.iter_mut().enumerate() {
                    osc.set_frequency(black_box(880.0 + i as f32));
                    *sample = osc.next_sample();
                }
            })
        });
    }

    group.finish();
}
