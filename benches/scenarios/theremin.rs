//! Benchmarks for the full instrument render path.
//!
//! One touched bar, one touched square: every stage of the render path is
//! live, which is the worst case the audio callback ever sees.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use theremin_dsp::{
    control::ControlSnapshot,
    instrument::{Theremin, ThereminConfig},
    io::{fan_out, LedBank},
};

use crate::{BLOCK_SIZES, SAMPLE_RATE};

pub fn bench_theremin(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/theremin");

    let playing = ControlSnapshot {
        bar_active: true,
        bar_location: 0.4,
        square_touch_size: 0.5,
        square_x: 0.6,
        square_y: 0.8,
        master_db: -6.0,
    };

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];
        let mut leds = LedBank::new();

        let mut theremin = Theremin::new(SAMPLE_RATE, ThereminConfig::new());
        group.bench_with_input(BenchmarkId::new("playing", size), &size, |b, _| {
            b.iter(|| {
                theremin.render_block(black_box(&mut buffer), black_box(&playing), &mut leds);
            })
        });

        // Idle: untouched, released, LEDs off
        let mut theremin = Theremin::new(SAMPLE_RATE, ThereminConfig::new());
        let idle = ControlSnapshot::default();
        group.bench_with_input(BenchmarkId::new("idle", size), &size, |b, _| {
            b.iter(|| {
                theremin.render_block(black_box(&mut buffer), black_box(&idle), &mut leds);
            })
        });

        // Render plus stereo fan-out, as the device callback does
        let mut theremin = Theremin::new(SAMPLE_RATE, ThereminConfig::new());
        let mut device = vec![0.0f32; size * 2];
        group.bench_with_input(BenchmarkId::new("stereo_callback", size), &size, |b, _| {
            b.iter(|| {
                theremin.render_block(&mut buffer, black_box(&playing), &mut leds);
                fan_out(&buffer, black_box(&mut device), 2);
            })
        });
    }

    group.finish();
}
