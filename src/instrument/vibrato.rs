use crate::dsp::{
    convert::octave_scale,
    wavetable::{Interpolation, Wavetable},
};

/*
Vibrato
=======

Vibrato is a slow, periodic wobble in pitch. A second wavetable oscillator
running at a sub-audio rate (2.5 - 10 Hz here) produces a bipolar signal in
[-1, 1], and the tone frequency is pushed up and down by a fraction of
itself:

    ratio     = lfo * depth * depth_control
    frequency = frequency + frequency * ratio

Two controls from the square shape it:

  rate_control    0.0 - 1.0, mapped over `octaves` above `base_hz`:
                      lfo_hz = base_hz * 2 ^ (rate_control * octaves)
                  With 2.5 Hz and 2 octaves the square spans 2.5 - 10 Hz.

  depth_control   0.0 - 1.0, scales `depth`. At the default depth of 0.125
                  the widest setting swings the pitch by ±12.5%, a bit over
                  two semitones.

The LFO keeps running when depth is zero so that raising the depth later
does not restart the cycle with a jump.
*/

/// Low-frequency pitch modulator built on a [`Wavetable`].
#[derive(Debug, Clone)]
pub struct Vibrato {
    lfo: Wavetable,
    base_hz: f32,
    octaves: f32,
    depth: f32,
    current_depth: f32,
}

impl Vibrato {
    pub fn new(
        sample_rate: f32,
        table: &[f32],
        interpolation: Interpolation,
        base_hz: f32,
        octaves: f32,
        depth: f32,
    ) -> Self {
        let mut lfo = Wavetable::new(sample_rate, table, interpolation);
        lfo.set_frequency(base_hz);

        Self {
            lfo,
            base_hz,
            octaves,
            depth,
            current_depth: 0.0,
        }
    }

    /// Advance the LFO one sample and return the frequency ratio to apply.
    #[inline]
    pub fn next_sample(&mut self, rate_control: f32, depth_control: f32) -> f32 {
        self.lfo
            .set_frequency(octave_scale(self.base_hz, rate_control * self.octaves));
        self.current_depth = self.depth * depth_control;
        self.lfo.next_sample() * self.current_depth
    }

    /// LFO rate in Hz as of the last sample.
    pub fn rate(&self) -> f32 {
        self.lfo.frequency()
    }

    /// Effective depth as of the last sample.
    pub fn depth(&self) -> f32 {
        self.current_depth
    }
}
