use theremin_dsp::{
    control::ControlSnapshot,
    instrument::{Theremin, ThereminConfig},
    io::{fan_out, AudioOutput, Led, LedBank},
};

const SAMPLE_RATE: f32 = 8_000.0;
const BLOCK: usize = 256;

fn touching(location: f32) -> ControlSnapshot {
    ControlSnapshot {
        bar_active: true,
        bar_location: location,
        ..ControlSnapshot::default()
    }
}

fn render_blocks(theremin: &mut Theremin, controls: &ControlSnapshot, blocks: usize, leds: &mut LedBank) -> Vec<f32> {
    let mut out = Vec::with_capacity(blocks * BLOCK);
    let mut block = [0.0f32; BLOCK];
    for _ in 0..blocks {
        theremin.render_block(&mut block, controls, leds);
        out.extend_from_slice(&block);
    }
    out
}

#[test]
fn renders_silence_when_untouched() {
    let mut theremin = Theremin::new(SAMPLE_RATE, ThereminConfig::default());
    let mut leds = LedBank::new();

    let samples = render_blocks(&mut theremin, &ControlSnapshot::default(), 8, &mut leds);

    assert!(samples.iter().all(|&s| s == 0.0));
    assert_eq!(leds.level(Led::Bar), 0.0);
    assert_eq!(leds.level(Led::Square), 0.0);
}

#[test]
fn touched_bar_renders_bounded_tone() {
    let config = ThereminConfig::new().envelope(0.05, 0.05);
    let mut theremin = Theremin::new(SAMPLE_RATE, config);
    let mut leds = LedBank::new();

    let samples = render_blocks(&mut theremin, &touching(0.25), 16, &mut leds);

    assert!(samples.iter().any(|s| s.abs() > 0.5));
    assert!(samples.iter().all(|s| s.is_finite() && s.abs() <= 0.85 + 1e-6));
    assert!(leds.level(Led::Bar) > 0.99);
}

#[test]
fn release_returns_to_silence() {
    let config = ThereminConfig::new().envelope(0.05, 0.05);
    let mut theremin = Theremin::new(SAMPLE_RATE, config);
    let mut leds = LedBank::new();

    render_blocks(&mut theremin, &touching(0.75), 8, &mut leds);
    let tail = render_blocks(&mut theremin, &ControlSnapshot::default(), 8, &mut leds);

    // 0.05 s release is 400 frames, well inside the first two blocks
    assert!(tail[..400].iter().any(|s| s.abs() > 0.0));
    // The ramp is open loop, so the floor is rounding noise rather than exact zero
    assert!(tail[512..].iter().all(|s| s.abs() < 1e-5));
    assert!(theremin.is_silent());
    assert_eq!(leds.level(Led::Bar), 0.0);
}

#[test]
fn slider_at_minimum_is_near_silent() {
    let config = ThereminConfig::new().envelope(0.01, 0.01);
    let mut theremin = Theremin::new(SAMPLE_RATE, config);
    let mut leds = LedBank::new();

    let controls = ControlSnapshot {
        master_db: -60.0,
        ..touching(0.5)
    };
    let samples = render_blocks(&mut theremin, &controls, 8, &mut leds);

    assert!(samples.iter().all(|s| s.abs() <= 0.85e-3 + 1e-6));
    assert!(samples.iter().any(|&s| s != 0.0));
}

#[test]
fn mono_block_reaches_every_device_channel() {
    let mut theremin = Theremin::new(SAMPLE_RATE, ThereminConfig::new().envelope(0.01, 0.01));
    let mut leds = LedBank::new();
    let mono = render_blocks(&mut theremin, &touching(0.5), 1, &mut leds);

    let mut interleaved = vec![0.0f32; BLOCK * 2];
    fan_out(&mono, &mut interleaved, 2);
    for (frame, &sample) in interleaved.chunks_exact(2).zip(&mono) {
        assert_eq!(frame, [sample, sample]);
    }

    let mut output = AudioOutput::new(2, BLOCK);
    output.write_mono(&mono);
    assert_eq!(output.buffers[0], mono);
    assert_eq!(output.buffers[1], mono);
}
