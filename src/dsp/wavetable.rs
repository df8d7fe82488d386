#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/*
Wavetable Oscillator
====================

Instead of evaluating `sin()` (or any other waveform function) every sample,
a wavetable oscillator reads one pre-computed cycle of the waveform out of a
table. The table is computed once at setup; the per-sample cost is a couple
of multiplies and one or two table reads no matter how expensive the shape
was to generate.

Vocabulary
----------

  table         One cycle of the waveform, N samples long. See `dsp::table`.

  read pointer  Fractional index into the table (the phase), kept in
                [0, N). The integer part picks a table slot, the fractional
                part says how far we are towards the next one.

  increment     How far the read pointer moves per output sample:

                    increment = N * frequency / sample_rate

                Example: N = 1024, 880 Hz at 44.1kHz
                  increment = 1024 * 880 / 44100 ≈ 20.43 slots per sample


Reading Between Slots
---------------------

The read pointer rarely lands exactly on a slot. Two ways to read:

  Truncate:     out = table[floor(p)]
                Cheap, but the output moves in steps and adds distortion.

  Interpolate:  out = table[i] * (1 - frac) + table[i + 1] * frac
                A straight line between neighbours. The neighbour of the
                last slot is slot 0, so the cycle joins up seamlessly.

    table[i+1]  ─────────────●
                           ╱
    out       ───────────◆        frac = 0.6
                       ╱
    table[i]    ──────●
                      i   p   i+1


Phase Wrapping
--------------

After each advance the read pointer is wrapped back into [0, N) with a
floored (Euclidean) remainder. Unlike a "subtract N while too big" loop this
takes constant time for any increment and also handles negative frequencies,
which play the table backwards.


Degenerate Input
----------------

  - Empty table: output is always 0.0 and the phase never moves.
  - Zero frequency: the phase stalls and the output holds whatever value the
    table has at that phase. That is DC, not silence.
  - Non-finite phase (NaN or infinite frequency, zero sample rate): the read
    pointer is reset to 0 instead of indexing with garbage.

The table is copied into the oscillator at setup, so several oscillators can
be built from the same source table and still be modulated independently.
*/

/// How the oscillator reads values that fall between table slots.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interpolation {
    /// Take the slot below the read pointer.
    Truncate,
    /// Blend the two neighbouring slots linearly.
    #[default]
    Linear,
}

impl From<bool> for Interpolation {
    fn from(use_interpolation: bool) -> Self {
        if use_interpolation {
            Interpolation::Linear
        } else {
            Interpolation::Truncate
        }
    }
}

/// Table-lookup oscillator with a fractional phase accumulator.
///
/// A default-constructed oscillator has an empty table and a frequency of
/// 0 Hz, so it renders silence until [`Wavetable::setup`] is called.
#[derive(Debug, Clone, Default)]
pub struct Wavetable {
    inverse_sample_rate: f32,
    table: Vec<f32>,
    interpolation: Interpolation,
    frequency: f32,
    read_pointer: f32,
}

impl Wavetable {
    pub fn new(sample_rate: f32, table: &[f32], interpolation: Interpolation) -> Self {
        let mut osc = Self::default();
        osc.setup(sample_rate, table, interpolation);
        osc
    }

    /// Copy `table` in and restart the phase at 0.
    ///
    /// This is the only place the oscillator allocates. The frequency is
    /// left untouched.
    pub fn setup(&mut self, sample_rate: f32, table: &[f32], interpolation: Interpolation) {
        self.inverse_sample_rate = 1.0 / sample_rate;
        self.table.clear();
        self.table.extend_from_slice(table);
        self.interpolation = interpolation;
        self.read_pointer = 0.0;
    }

    pub fn set_frequency(&mut self, frequency: f32) {
        self.frequency = frequency;
    }

    pub fn frequency(&self) -> f32 {
        self.frequency
    }

    pub fn interpolation(&self) -> Interpolation {
        self.interpolation
    }

    /// Current read pointer, always within `[0, table_len)` (0 when empty).
    pub fn phase(&self) -> f32 {
        self.read_pointer
    }

    pub fn table_len(&self) -> usize {
        self.table.len()
    }

    /// Advance the phase by one sample and read the table.
    #[inline]
    pub fn next_sample(&mut self) -> f32 {
        let len = self.table.len();
        if len == 0 {
            return 0.0;
        }
        let size = len as f32;

        let increment = size * self.frequency * self.inverse_sample_rate;
        self.read_pointer = wrap_phase(self.read_pointer + increment, size);

        // wrap_phase keeps the pointer in [0, size), so the cast is in bounds
        let below = (self.read_pointer as usize).min(len - 1);

        match self.interpolation {
            Interpolation::Truncate => self.table[below],
            Interpolation::Linear => {
                let above = if below + 1 == len { 0 } else { below + 1 };
                let fract_above = self.read_pointer - below as f32;
                let fract_below = 1.0 - fract_above;
                fract_below * self.table[below] + fract_above * self.table[above]
            }
        }
    }

    /// Render a block of oscillator output at the current frequency.
    pub fn render(&mut self, buffer: &mut [f32]) {
        for sample in buffer.iter_mut() {
            *sample = self.next_sample();
        }
    }
}

/// Floored remainder of `phase` into `[0, size)`.
#[inline]
fn wrap_phase(phase: f32, size: f32) -> f32 {
    if !phase.is_finite() {
        return 0.0;
    }

    let wrapped = phase.rem_euclid(size);
    // rem_euclid can round up to exactly `size` for tiny negative inputs
    if wrapped >= size {
        0.0
    } else {
        wrapped
    }
}
