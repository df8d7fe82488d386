/*
Linear Ramp
===========

A ramp moves a single value in a straight line from wherever it currently is
to a target, over a duration given in seconds. It is the smallest useful
building block for click-free control: switching a gain from 0.0 to 1.0 in a
single sample produces an audible click, spreading the same change over a
few hundred milliseconds does not.

Vocabulary
----------

  value       The ramp's current output. Returned by every call to
              `next_sample()`.

  increment   How much `value` changes per sample while the ramp is moving.

  remaining   Whole samples left before the ramp comes to rest. Zero means
              the ramp is finished.

  sample_rate Samples per second. Converts the requested duration in seconds
              into a count of samples.


The Math
--------

    increment = (target - value) / (duration_seconds * sample_rate)
    remaining = floor(duration_seconds * sample_rate)

Example: 0.0 -> 1.0 over 0.8 seconds at 44.1kHz
  - remaining = 35280 samples
  - increment = 1.0 / 35280 ≈ 0.0000283

Each sample we do `value += increment` and `remaining -= 1` until
`remaining` hits zero. The ramp is open loop: nothing snaps the value onto
the target at the end, so whatever rounding the additions accumulate stays
in the output.


Retargeting
-----------

Ramps are not queued. Calling `ramp_to` while a ramp is in flight starts a
new ramp from the CURRENT value, not from the old target:

  value
    1.0 ┐
        │        ╱╲
    0.5 │      ╱    ╲
        │    ╱        ╲
    0.0 └──╱────────────╲──→ samples
           ramp_to(1)  ramp_to(0) issued mid-way

This is what makes a quick release during a slow attack sound right: the
fade starts from the level that was actually reached.


Edge Cases
----------

  - Durations that round to zero samples (zero, negative, NaN, or shorter
    than one sample) stop the ramp where it is. The value is NOT moved to
    the target; only `set_value` jumps.
  - Changing the sample rate only affects later `ramp_to` calls. A ramp
    already in flight keeps its remaining sample count.
*/

/// Sample-clocked linear interpolator for a single control value.
#[derive(Debug, Clone)]
pub struct Ramp {
    sample_rate: f32,
    value: f32,
    increment: f32,
    remaining: u32,
}

impl Ramp {
    pub fn new(sample_rate: f32) -> Self {
        Self {
            sample_rate,
            value: 0.0,
            increment: 0.0,
            remaining: 0,
        }
    }

    /// Set the rate used by subsequent `ramp_to` calls.
    pub fn set_sample_rate(&mut self, sample_rate: f32) {
        self.sample_rate = sample_rate;
    }

    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    /// Jump straight to `value`, cancelling any ramp in flight.
    pub fn set_value(&mut self, value: f32) {
        self.value = value;
        self.increment = 0.0;
        self.remaining = 0;
    }

    /// Start a linear ramp from the current value to `target`.
    pub fn ramp_to(&mut self, target: f32, duration_secs: f32) {
        let span = self.sample_rate * duration_secs;

        // NaN and negative spans collapse to 0, huge ones saturate at u32::MAX
        let samples = span.max(0.0) as u32;
        if samples == 0 {
            self.increment = 0.0;
            self.remaining = 0;
            return;
        }

        self.increment = (target - self.value) / span;
        self.remaining = samples;
    }

    /// Advance by one sample and return the value.
    #[inline]
    pub fn next_sample(&mut self) -> f32 {
        if self.remaining > 0 {
            self.remaining -= 1;
            self.value += self.increment;
        }

        self.value
    }

    /// Render a block of ramp values into the buffer.
    pub fn render(&mut self, buffer: &mut [f32]) {
        for sample in buffer.iter_mut() {
            *sample = self.next_sample();
        }
    }

    /// True once the ramp has come to rest.
    pub fn is_finished(&self) -> bool {
        self.remaining == 0
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn remaining_samples(&self) -> u32 {
        self.remaining
    }
}

impl Default for Ramp {
    /// A ramp clocked at 1 Hz. Call `set_sample_rate` before ramping.
    fn default() -> Self {
        Self::new(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RATE: f32 = 1_000.0;

    fn run(ramp: &mut Ramp, samples: usize) -> Vec<f32> {
        (0..samples).map(|_| ramp.next_sample()).collect()
    }

    #[test]
    fn starts_at_rest_at_zero() {
        let mut ramp = Ramp::new(SAMPLE_RATE);
        assert!(ramp.is_finished());
        assert_eq!(ramp.next_sample(), 0.0);

        let ramp = Ramp::default();
        assert_eq!(ramp.sample_rate(), 1.0);
        assert!(ramp.is_finished());
    }

    #[test]
    fn reaches_target_after_whole_duration() {
        for &(target, duration) in &[(1.0f32, 0.1f32), (-3.5, 0.25), (0.2, 1.0)] {
            let mut ramp = Ramp::new(SAMPLE_RATE);
            ramp.ramp_to(target, duration);

            let samples = (SAMPLE_RATE * duration) as usize;
            run(&mut ramp, samples - 1);
            assert!(!ramp.is_finished(), "ramp should still be moving");

            ramp.next_sample();
            assert!(ramp.is_finished());

            let tolerance = duration * SAMPLE_RATE * f32::EPSILON * target.abs().max(1.0);
            assert!(
                (ramp.value() - target).abs() <= tolerance,
                "expected {target}, got {}",
                ramp.value()
            );
        }
    }

    #[test]
    fn holds_value_once_finished() {
        let mut ramp = Ramp::new(SAMPLE_RATE);
        ramp.ramp_to(0.5, 0.01);
        run(&mut ramp, 10);

        let settled = ramp.value();
        for value in run(&mut ramp, 100) {
            assert_eq!(value, settled);
        }
    }

    #[test]
    fn set_value_cancels_ramp() {
        let mut ramp = Ramp::new(SAMPLE_RATE);
        ramp.ramp_to(1.0, 1.0);
        run(&mut ramp, 10);

        ramp.set_value(0.3);
        assert!(ramp.is_finished());
        assert_eq!(ramp.next_sample(), 0.3);
        assert_eq!(ramp.next_sample(), 0.3);
    }

    #[test]
    fn retarget_starts_from_current_value() {
        let mut ramp = Ramp::new(SAMPLE_RATE);
        ramp.ramp_to(1.0, 0.1); // 100 samples
        run(&mut ramp, 50);
        assert!((ramp.value() - 0.5).abs() < 1e-4);

        ramp.ramp_to(0.0, 0.05); // 50 samples
        let descent = run(&mut ramp, 50);

        for pair in descent.windows(2) {
            assert!(pair[1] < pair[0], "ramp should fall monotonically");
        }
        assert!(ramp.is_finished());
        assert!(ramp.value().abs() < 1e-4, "got {}", ramp.value());
    }

    #[test]
    fn degenerate_durations_leave_value_alone() {
        for &duration in &[0.0f32, -1.0, f32::NAN, 0.0004] {
            let mut ramp = Ramp::new(SAMPLE_RATE);
            ramp.set_value(0.25);
            ramp.ramp_to(0.75, duration);

            assert!(ramp.is_finished(), "duration {duration} should not ramp");
            assert_eq!(ramp.next_sample(), 0.25);
        }

        // Less than half a sample at 44.1kHz
        let mut ramp = Ramp::new(44_100.0);
        ramp.ramp_to(1.0, 1e-5);
        assert_eq!(ramp.next_sample(), 0.0);
    }

    #[test]
    fn degenerate_duration_cancels_inflight_ramp() {
        let mut ramp = Ramp::new(SAMPLE_RATE);
        ramp.ramp_to(1.0, 0.1);
        run(&mut ramp, 50);
        let held = ramp.value();

        ramp.ramp_to(0.0, 0.0);
        assert!(ramp.is_finished());
        assert_eq!(run(&mut ramp, 10), vec![held; 10]);
    }

    #[test]
    fn sample_rate_change_does_not_rescale_inflight_ramp() {
        let mut ramp = Ramp::new(SAMPLE_RATE);
        ramp.ramp_to(1.0, 0.1);
        run(&mut ramp, 10);

        ramp.set_sample_rate(SAMPLE_RATE * 2.0);
        assert_eq!(ramp.remaining_samples(), 90);

        ramp.ramp_to(0.0, 0.1);
        assert_eq!(ramp.remaining_samples(), 200);
    }

    #[test]
    fn render_fills_buffer_with_ramp() {
        let mut ramp = Ramp::new(4.0);
        ramp.ramp_to(1.0, 1.0);

        let mut buffer = [0.0f32; 6];
        ramp.render(&mut buffer);
        assert_eq!(buffer, [0.25, 0.5, 0.75, 1.0, 1.0, 1.0]);
    }
}
