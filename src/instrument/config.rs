#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dsp::{table::DEFAULT_TABLE_SIZE, wavetable::Interpolation};

/// Everything that shapes how the instrument responds to the sensors.
///
/// Built with chained setters on top of the defaults:
///
/// ```
/// use theremin_dsp::instrument::ThereminConfig;
///
/// let config = ThereminConfig::new()
///     .pitch_range(440.0, 2.0)
///     .envelope(0.05, 0.3);
/// assert_eq!(config.pitch_base_hz, 440.0);
/// assert_eq!(config.release_secs, 0.3);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, PartialEq)]
pub struct ThereminConfig {
    /// Entries in the shared sine table.
    pub table_size: usize,
    pub interpolation: Interpolation,

    /// Pitch with the finger at the bottom of the bar (A5).
    pub pitch_base_hz: f32,
    /// Octaves covered by the full length of the bar.
    pub pitch_octaves: f32,

    /// Vibrato rate with the finger at the bottom of the square.
    pub vibrato_base_hz: f32,
    /// Octaves of vibrato rate covered by the square.
    pub vibrato_octaves: f32,
    /// Peak pitch deviation as a fraction of the tone frequency.
    pub vibrato_depth: f32,

    pub attack_secs: f32,
    pub release_secs: f32,

    /// Cutoff of the one-pole filters that smooth every sensor value.
    pub smoothing_cutoff_hz: f32,
    /// Fixed gain applied after the master level.
    pub headroom: f32,
    /// Dimmest LED level while an LED is lit.
    pub led_floor: f32,
    /// Bar position assumed before the first touch.
    pub initial_bar_value: f32,
}

impl ThereminConfig {
    pub fn new() -> Self {
        Self {
            table_size: DEFAULT_TABLE_SIZE,
            interpolation: Interpolation::Linear,
            pitch_base_hz: 880.0,
            pitch_octaves: 1.0,
            vibrato_base_hz: 2.5,
            vibrato_octaves: 2.0,
            vibrato_depth: 0.125,
            attack_secs: 0.8,
            release_secs: 0.4,
            smoothing_cutoff_hz: 4.0,
            headroom: 0.85,
            led_floor: 0.45,
            initial_bar_value: 0.5,
        }
    }

    pub fn table_size(mut self, size: usize) -> Self {
        self.table_size = size;
        self
    }

    pub fn interpolation(mut self, interpolation: Interpolation) -> Self {
        self.interpolation = interpolation;
        self
    }

    pub fn pitch_range(mut self, base_hz: f32, octaves: f32) -> Self {
        self.pitch_base_hz = base_hz;
        self.pitch_octaves = octaves;
        self
    }

    pub fn vibrato(mut self, base_hz: f32, octaves: f32, depth: f32) -> Self {
        self.vibrato_base_hz = base_hz;
        self.vibrato_octaves = octaves;
        self.vibrato_depth = depth;
        self
    }

    pub fn envelope(mut self, attack_secs: f32, release_secs: f32) -> Self {
        self.attack_secs = attack_secs;
        self.release_secs = release_secs;
        self
    }

    pub fn smoothing_cutoff(mut self, cutoff_hz: f32) -> Self {
        self.smoothing_cutoff_hz = cutoff_hz;
        self
    }

    pub fn headroom(mut self, gain: f32) -> Self {
        self.headroom = gain;
        self
    }

    pub fn led_floor(mut self, level: f32) -> Self {
        self.led_floor = level;
        self
    }

    pub fn initial_bar_value(mut self, value: f32) -> Self {
        self.initial_bar_value = value;
        self
    }
}

impl Default for ThereminConfig {
    fn default() -> Self {
        Self::new()
    }
}
