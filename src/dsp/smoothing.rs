use std::f32::consts::TAU;

/*
One-Pole Smoothing
==================

Touch sensors report new positions a few dozen times per second. Feeding
those values straight into an oscillator's frequency makes the pitch jump in
audible steps ("zipper noise"). A one-pole low-pass turns the staircase into
a smooth glide.

    y[n] = a0 * x[n] + b1 * y[n-1]

    b1 = exp(-2π * cutoff / sample_rate)
    a0 = 1 - b1

`b1` is how much of the previous output survives each sample. With a 4 Hz
cutoff at 44.1kHz, b1 ≈ 0.99943: each new sample only nudges the output by
0.057% of the remaining distance, so a jump settles over ~40ms.

       input  ┌────┐
        ──────┘    └─────
       output   ╭───╮
        ───────╯     ╰───

The filter starts at 0.0. Invalid settings (non-positive or non-finite
cutoff/sample rate) fall back to a pass-through rather than producing NaNs.
*/

/// One-pole low-pass used to smooth control signals.
#[derive(Debug, Clone, Copy)]
pub struct OnePole {
    a0: f32,
    b1: f32,
    y: f32,
}

impl OnePole {
    pub fn lowpass(cutoff_hz: f32, sample_rate: f32) -> Self {
        let mut filter = Self {
            a0: 1.0,
            b1: 0.0,
            y: 0.0,
        };
        filter.set_cutoff(cutoff_hz, sample_rate);
        filter
    }

    /// Recompute coefficients. The filter state is kept.
    pub fn set_cutoff(&mut self, cutoff_hz: f32, sample_rate: f32) {
        let ratio = cutoff_hz / sample_rate;
        if !(ratio.is_finite() && ratio > 0.0) {
            self.a0 = 1.0;
            self.b1 = 0.0;
            return;
        }

        self.b1 = (-TAU * ratio).exp();
        self.a0 = 1.0 - self.b1;
    }

    #[inline]
    pub fn next_sample(&mut self, input: f32) -> f32 {
        self.y = self.a0 * input + self.b1 * self.y;
        self.y
    }

    pub fn reset(&mut self) {
        self.y = 0.0;
    }

    pub fn value(&self) -> f32 {
        self.y
    }
}
