//! Scalar conversions between control ranges and audio units.

/*
Control Mapping
===============

Sensors deliver positions in 0.0 - 1.0. The instrument needs frequencies,
gains, and LED brightness. Three small conversions cover all of it.

Decibels
--------

    amplitude = 10 ^ (dB / 20)

       dB    amplitude
        0    1.0
       -6    ~0.5
      -20    0.1
      -60    0.001

Octave Scaling
--------------

Pitch is perceived logarithmically, so a linear sensor position is mapped
through a power of two. A position p over a range of `octaves`:

    frequency = base * 2 ^ (p * octaves)

With base = 880 Hz and one octave, p = 0.0 plays A5 and p = 1.0 plays A6,
and the midpoint lands on the geometric middle (~1244 Hz), not 1320 Hz.

Range Mapping
-------------

A straight-line map from one interval onto another, without clamping:

    out = out_min + (x - in_min) * (out_max - out_min) / (in_max - in_min)
*/

/// Convert a level in decibels to linear amplitude.
///
/// # Example
/// ```
/// use theremin_dsp::dsp::convert::db_to_amplitude;
/// assert!((db_to_amplitude(-20.0) - 0.1).abs() < 1e-6);
/// ```
#[inline]
pub fn db_to_amplitude(db: f32) -> f32 {
    10.0_f32.powf(db / 20.0)
}

/// Scale `base` up by `octaves` (which may be fractional or negative).
///
/// # Example
/// ```
/// use theremin_dsp::dsp::convert::octave_scale;
/// assert!((octave_scale(880.0, 1.0) - 1760.0).abs() < 1e-3);
/// ```
#[inline]
pub fn octave_scale(base: f32, octaves: f32) -> f32 {
    base * 2.0_f32.powf(octaves)
}

/// Linearly map `x` from `[in_min, in_max]` onto `[out_min, out_max]`.
///
/// Values outside the input range extrapolate. An empty input range maps
/// everything to `out_min`.
#[inline]
pub fn map_range(x: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    let span = in_max - in_min;
    if span == 0.0 {
        return out_min;
    }
    out_min + (x - in_min) * (out_max - out_min) / span
}
