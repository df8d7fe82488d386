//! Touch readings as delivered by the sensor drivers.
//!
//! Readings are the boundary between the (slow, polled) sensor world and the
//! shared control cells. Each reading knows how to publish itself onto a
//! [`SensorBus`].

use crate::control::bus::SensorBus;

/// Touches smaller than this are treated as noise and ignored.
pub const MIN_TOUCH_SIZE: f32 = 0.1;

/// A single raw contact reported by a sensor, both fields in 0.0 - 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RawTouch {
    pub location: f32,
    pub size: f32,
}

/// Anything a sensor can write onto the bus.
pub trait Publish {
    fn publish(&self, bus: &SensorBus);
}

/// Pitch bar state: whether it is touched and where.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BarReading {
    pub active: bool,
    pub location: f32,
}

impl BarReading {
    /// Use the first touch at least `min_size` big.
    pub fn from_touches(touches: &[RawTouch], min_size: f32) -> Self {
        match touches.iter().find(|t| t.size >= min_size) {
            Some(touch) => Self {
                active: true,
                location: touch.location,
            },
            None => Self::default(),
        }
    }
}

impl Publish for BarReading {
    fn publish(&self, bus: &SensorBus) {
        bus.bar_location.store(self.location);
        bus.bar_active.store(self.active);
    }
}

/// Vibrato square state, already in instrument orientation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SquareReading {
    /// Compound touch size; 0.0 when nothing qualifies as a touch.
    pub touch_size: f32,
    /// `1 - vertical`, so moving up the square raises the vibrato rate.
    pub x: f32,
    /// Horizontal position.
    pub y: f32,
}

impl SquareReading {
    /// Build from the sensor's compound (centroid) touch.
    ///
    /// An undersized touch reads as no touch: zero size at the origin.
    pub fn from_compound(vertical: f32, horizontal: f32, size: f32, min_size: f32) -> Self {
        let (vertical, horizontal, size) = if size >= min_size && size > 0.0 {
            (vertical, horizontal, size)
        } else {
            (0.0, 0.0, 0.0)
        };

        Self {
            touch_size: size,
            x: 1.0 - vertical,
            y: horizontal,
        }
    }

    pub fn is_touched(&self) -> bool {
        self.touch_size != 0.0
    }
}

impl Default for SquareReading {
    fn default() -> Self {
        Self::from_compound(0.0, 0.0, 0.0, MIN_TOUCH_SIZE)
    }
}

impl Publish for SquareReading {
    fn publish(&self, bus: &SensorBus) {
        bus.square_x.store(self.x);
        bus.square_y.store(self.y);
        bus.square_touch_size.store(self.touch_size);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_ignores_small_touches() {
        let touches = [
            RawTouch { location: 0.2, size: 0.05 },
            RawTouch { location: 0.8, size: 0.3 },
        ];
        let reading = BarReading::from_touches(&touches, MIN_TOUCH_SIZE);
        assert!(reading.active);
        assert_eq!(reading.location, 0.8);

        let reading = BarReading::from_touches(&touches[..1], MIN_TOUCH_SIZE);
        assert!(!reading.active);
        assert_eq!(BarReading::from_touches(&[], MIN_TOUCH_SIZE), BarReading::default());
    }

    #[test]
    fn square_inverts_vertical_axis() {
        let reading = SquareReading::from_compound(0.25, 0.6, 0.5, MIN_TOUCH_SIZE);
        assert!(reading.is_touched());
        assert_eq!(reading.x, 0.75);
        assert_eq!(reading.y, 0.6);
    }

    #[test]
    fn square_without_touch_reads_zero_depth() {
        let reading = SquareReading::from_compound(0.9, 0.9, 0.01, MIN_TOUCH_SIZE);
        assert!(!reading.is_touched());
        assert_eq!(reading.y, 0.0);
        assert_eq!(reading, SquareReading::default());
    }

    #[test]
    fn readings_publish_to_bus() {
        let bus = SensorBus::new();
        BarReading { active: true, location: 0.4 }.publish(&bus);
        SquareReading::from_compound(0.0, 0.3, 1.0, MIN_TOUCH_SIZE).publish(&bus);

        let snapshot = bus.snapshot();
        assert!(snapshot.bar_active);
        assert_eq!(snapshot.bar_location, 0.4);
        assert_eq!(snapshot.square_touch_size, 1.0);
        assert_eq!(snapshot.square_x, 1.0);
        assert_eq!(snapshot.square_y, 0.3);
    }
}
