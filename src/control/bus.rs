#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::control::{
    shared::{SharedFlag, SharedScalar},
    slider::DecibelSlider,
};

/// Plain copy of every control value, taken once per audio block.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlSnapshot {
    /// A finger is on the bar.
    pub bar_active: bool,
    /// Position along the bar, 0.0 - 1.0. Only meaningful while active.
    pub bar_location: f32,
    /// Compound touch size on the square, 0.0 when untouched.
    pub square_touch_size: f32,
    /// Inverted vertical position on the square (vibrato rate control).
    pub square_x: f32,
    /// Horizontal position on the square (vibrato depth control).
    pub square_y: f32,
    /// Master level from the slider, in dB.
    pub master_db: f32,
}

impl Default for ControlSnapshot {
    fn default() -> Self {
        Self {
            bar_active: false,
            bar_location: 0.0,
            square_touch_size: 0.0,
            square_x: 0.0,
            square_y: 0.0,
            master_db: DecibelSlider::DEFAULT_DB,
        }
    }
}

/// Shared control values written by the sensor poller and the UI, read by
/// the audio callback.
///
/// Cloning the bus clones handles, not values: every clone sees the same
/// cells.
#[derive(Debug, Clone)]
pub struct SensorBus {
    pub bar_active: SharedFlag,
    pub bar_location: SharedScalar,
    pub square_touch_size: SharedScalar,
    pub square_x: SharedScalar,
    pub square_y: SharedScalar,
    pub master_db: SharedScalar,
}

impl SensorBus {
    pub fn new() -> Self {
        Self::from_snapshot(&ControlSnapshot::default())
    }

    pub fn from_snapshot(initial: &ControlSnapshot) -> Self {
        Self {
            bar_active: SharedFlag::new(initial.bar_active),
            bar_location: SharedScalar::new(initial.bar_location),
            square_touch_size: SharedScalar::new(initial.square_touch_size),
            square_x: SharedScalar::new(initial.square_x),
            square_y: SharedScalar::new(initial.square_y),
            master_db: SharedScalar::new(initial.master_db),
        }
    }

    /// Read every cell. Cells are read one at a time, so a snapshot taken
    /// while the poller is publishing may mix old and new values.
    pub fn snapshot(&self) -> ControlSnapshot {
        ControlSnapshot {
            bar_active: self.bar_active.load(),
            bar_location: self.bar_location.load(),
            square_touch_size: self.square_touch_size.load(),
            square_x: self.square_x.load(),
            square_y: self.square_y.load(),
            master_db: self.master_db.load(),
        }
    }
}

impl Default for SensorBus {
    fn default() -> Self {
        Self::new()
    }
}

/// Instrument state published by the audio thread for display.
#[derive(Debug, Clone, Default)]
pub struct StatusBus {
    pub frequency: SharedScalar,
    pub vibrato_rate: SharedScalar,
    pub vibrato_depth: SharedScalar,
    pub amplitude: SharedScalar,
    pub bar_led: SharedScalar,
    pub square_led: SharedScalar,
}

/// Plain copy of the status cells.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StatusSnapshot {
    pub frequency: f32,
    pub vibrato_rate: f32,
    pub vibrato_depth: f32,
    pub amplitude: f32,
    pub bar_led: f32,
    pub square_led: f32,
}

impl StatusBus {
    pub fn publish(&self, status: &StatusSnapshot) {
        self.frequency.store(status.frequency);
        self.vibrato_rate.store(status.vibrato_rate);
        self.vibrato_depth.store(status.vibrato_depth);
        self.amplitude.store(status.amplitude);
        self.bar_led.store(status.bar_led);
        self.square_led.store(status.square_led);
    }

    pub fn snapshot(&self) -> StatusSnapshot {
        StatusSnapshot {
            frequency: self.frequency.load(),
            vibrato_rate: self.vibrato_rate.load(),
            vibrato_depth: self.vibrato_depth.load(),
            amplitude: self.amplitude.load(),
            bar_led: self.bar_led.load(),
            square_led: self.square_led.load(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_bus_is_untouched_at_unity_gain() {
        let snapshot = SensorBus::new().snapshot();
        assert!(!snapshot.bar_active);
        assert_eq!(snapshot.square_touch_size, 0.0);
        assert_eq!(snapshot.master_db, 0.0);
    }

    #[test]
    fn clones_see_writes() {
        let bus = SensorBus::new();
        let writer = bus.clone();

        writer.bar_active.store(true);
        writer.bar_location.store(0.75);
        writer.square_y.store(0.2);

        let snapshot = bus.snapshot();
        assert!(snapshot.bar_active);
        assert_eq!(snapshot.bar_location, 0.75);
        assert_eq!(snapshot.square_y, 0.2);
    }

    #[test]
    fn status_roundtrips_through_cells() {
        let status = StatusBus::default();
        let published = StatusSnapshot {
            frequency: 1244.5,
            vibrato_rate: 5.0,
            vibrato_depth: 0.1,
            amplitude: 0.5,
            bar_led: 0.725,
            square_led: 0.0,
        };
        status.clone().publish(&published);
        assert_eq!(status.snapshot(), published);
    }
}
