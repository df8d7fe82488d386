use crate::{
    control::{bus::ControlSnapshot, bus::StatusSnapshot, slider::DecibelSlider},
    dsp::{
        convert::{map_range, octave_scale},
        ramp::Ramp,
        smoothing::OnePole,
        table,
        wavetable::Wavetable,
    },
    instrument::{config::ThereminConfig, vibrato::Vibrato},
    io::led::{Led, LedBank, LedCommand},
};

/*
Theremin Render Path
====================

Two touch sensors in, one tone out.

    bar  ──latch──► smooth ──► pitch = base · 2^(bar · octaves) ──┐
                                                                  ├──► tone ─┐
    square x ─latch─► smooth ──► vibrato rate ─┐                  │          │
                                               ├──► vibrato ratio ┘          │
    square y ───────► smooth ──► vibrato depth ┘                             │
                                                                             ▼
    bar touched? ──edge──► ramp_to(1, attack) / ramp_to(0, release) ──► × amp
                                                                             │
                                       master dB ──► × level × headroom ◄────┘

Latching
--------

The bar position is only taken while a finger is on the bar. Lifting the
finger leaves the pitch where it was, so the release tail fades at the last
played pitch instead of sliding to wherever the sensor reads with no touch.

The square's x (vibrato rate) is latched the same way. Its y (vibrato depth)
is NOT latched: lifting the finger lets the depth glide back to zero through
the smoothing filter.

Envelope
--------

Only the edges of the bar touch matter. A new touch ramps the amplitude to
1.0 over the attack time, a release ramps it to 0.0 over the release time.
Because ramps restart from the current value, tapping quickly never clicks.

LEDs
----

  bar LED     Off once the finger is gone and the release has finished,
              otherwise the amplitude mapped onto [led_floor, 1].
  square LED  The smoothed depth mapped onto [led_floor, 1] while the square
              is touched, otherwise Off.
*/

/// One rendered frame: the audio sample and what the LEDs should show.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub sample: f32,
    pub bar_led: LedCommand,
    pub square_led: LedCommand,
}

/// The instrument's render context.
///
/// Owns every piece of per-sample state: smoothing filters, the tone and
/// vibrato oscillators, the amplitude ramp, and the latched sensor values.
/// Setup allocates the sine table; rendering never allocates.
pub struct Theremin {
    config: ThereminConfig,
    sample_rate: f32,

    bar_smoother: OnePole,
    rate_smoother: OnePole,
    depth_smoother: OnePole,

    tone: Wavetable,
    vibrato: Vibrato,
    envelope: Ramp,

    bar_value: f32,
    bar_was_touched: bool,
    square_x: f32,

    amplitude: f32,
    leds: [f32; 2],
}

impl Theremin {
    pub fn new(sample_rate: f32, config: ThereminConfig) -> Self {
        let sine = table::sine(config.table_size);
        let smoother = OnePole::lowpass(config.smoothing_cutoff_hz, sample_rate);

        let tone = Wavetable::new(sample_rate, &sine, config.interpolation);
        let vibrato = Vibrato::new(
            sample_rate,
            &sine,
            config.interpolation,
            config.vibrato_base_hz,
            config.vibrato_octaves,
            config.vibrato_depth,
        );

        let mut envelope = Ramp::new(sample_rate);
        envelope.set_value(0.0);

        tracing::debug!(
            sample_rate,
            table_size = config.table_size,
            "theremin render context ready"
        );

        Self {
            bar_value: config.initial_bar_value,
            config,
            sample_rate,
            bar_smoother: smoother,
            rate_smoother: smoother,
            depth_smoother: smoother,
            tone,
            vibrato,
            envelope,
            bar_was_touched: false,
            square_x: 0.0,
            amplitude: 0.0,
            leds: [0.0; 2],
        }
    }

    /// Render one frame. `master_gain` is linear amplitude, not dB.
    #[inline]
    pub fn next_frame(&mut self, controls: &ControlSnapshot, master_gain: f32) -> Frame {
        let config = &self.config;

        if controls.bar_active {
            self.bar_value = controls.bar_location;
        }
        let bar = self.bar_smoother.next_sample(self.bar_value);
        let mut frequency = octave_scale(config.pitch_base_hz, bar * config.pitch_octaves);

        let square_touched = controls.square_touch_size != 0.0;
        if square_touched {
            self.square_x = controls.square_x;
        }
        let rate = self.rate_smoother.next_sample(self.square_x);
        let depth = self.depth_smoother.next_sample(controls.square_y);

        frequency += frequency * self.vibrato.next_sample(rate, depth);
        self.tone.set_frequency(frequency);
        let tone = self.tone.next_sample();

        if controls.bar_active != self.bar_was_touched {
            if controls.bar_active {
                self.envelope.ramp_to(1.0, config.attack_secs);
            } else {
                self.envelope.ramp_to(0.0, config.release_secs);
            }
        }
        self.bar_was_touched = controls.bar_active;

        let amplitude = self.envelope.next_sample();
        self.amplitude = amplitude;
        let sample = tone * amplitude * master_gain * config.headroom;

        let bar_led = if !controls.bar_active && self.envelope.is_finished() {
            LedCommand::Off
        } else {
            LedCommand::Level(map_range(amplitude, 0.0, 1.0, config.led_floor, 1.0))
        };
        let square_led = if square_touched {
            LedCommand::Level(map_range(depth, 0.0, 1.0, config.led_floor, 1.0))
        } else {
            LedCommand::Off
        };
        self.leds = [led_level(bar_led), led_level(square_led)];

        Frame {
            sample,
            bar_led,
            square_led,
        }
    }

    /// Render a mono block, driving `leds` frame by frame.
    ///
    /// The master level is read from `controls` once per block.
    pub fn render_block(&mut self, out: &mut [f32], controls: &ControlSnapshot, leds: &mut LedBank) {
        let mut slider = DecibelSlider::new();
        slider.set(controls.master_db);
        let master_gain = slider.amplitude();

        for sample in out.iter_mut() {
            let frame = self.next_frame(controls, master_gain);
            *sample = frame.sample;
            leds.apply(Led::Bar, frame.bar_led);
            leds.apply(Led::Square, frame.square_led);
        }
    }

    /// State as of the last rendered frame, for display.
    pub fn status(&self) -> StatusSnapshot {
        StatusSnapshot {
            frequency: self.tone.frequency(),
            vibrato_rate: self.vibrato.rate(),
            vibrato_depth: self.vibrato.depth(),
            amplitude: self.amplitude,
            bar_led: self.leds[Led::Bar as usize],
            square_led: self.leds[Led::Square as usize],
        }
    }

    /// True when no finger is on the bar and the release has finished.
    pub fn is_silent(&self) -> bool {
        !self.bar_was_touched && self.envelope.is_finished()
    }

    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }
}

fn led_level(command: LedCommand) -> f32 {
    match command {
        LedCommand::Level(level) => level,
        LedCommand::Off => 0.0,
    }
}
