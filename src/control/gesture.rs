//! Message-driven stand-ins for the touch sensor drivers.
//!
//! The terminal front-end has no capacitive hardware. Instead, key presses
//! become gestures pushed onto a queue, and a virtual sensor replays them
//! when the poller reads it. From the poller's side nothing changes: it sees
//! a [`TouchSensor`] like any other.

#[cfg(feature = "rtrb")]
use rtrb::Consumer;

use crate::control::{
    reading::{BarReading, RawTouch, SquareReading, MIN_TOUCH_SIZE},
    sensor::{SensorError, TouchSensor},
};

/// A finger on the pitch bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BarGesture {
    Touch,
    Move(f32),
    Release,
}

/// A finger on the vibrato square.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SquareGesture {
    Touch(f32),
    Move { vertical: f32, horizontal: f32 },
    Release,
}

/// Non-blocking source of messages.
pub trait MessageReceiver<M> {
    fn pop(&mut self) -> Option<M>;
}

#[cfg(feature = "rtrb")]
impl<M> MessageReceiver<M> for Consumer<M> {
    fn pop(&mut self) -> Option<M> {
        Consumer::pop(self).ok()
    }
}

impl<M> MessageReceiver<M> for std::collections::VecDeque<M> {
    fn pop(&mut self) -> Option<M> {
        self.pop_front()
    }
}

/// Size reported for a virtual finger on the bar.
const VIRTUAL_TOUCH_SIZE: f32 = 0.5;

/// Pitch bar driven by [`BarGesture`]s.
pub struct VirtualBar<R> {
    rx: R,
    touch: Option<RawTouch>,
    location: f32,
}

impl<R: MessageReceiver<BarGesture>> VirtualBar<R> {
    pub fn new(rx: R) -> Self {
        Self {
            rx,
            touch: None,
            location: 0.5,
        }
    }

    fn apply(&mut self, gesture: BarGesture) {
        match gesture {
            BarGesture::Touch => {
                self.touch = Some(RawTouch {
                    location: self.location,
                    size: VIRTUAL_TOUCH_SIZE,
                });
            }
            BarGesture::Move(location) => {
                self.location = location.clamp(0.0, 1.0);
                if let Some(touch) = self.touch.as_mut() {
                    touch.location = self.location;
                }
            }
            BarGesture::Release => self.touch = None,
        }
    }
}

impl<R: MessageReceiver<BarGesture> + Send> TouchSensor for VirtualBar<R> {
    type Reading = BarReading;

    fn name(&self) -> &'static str {
        "virtual bar"
    }

    fn setup(&mut self) -> Result<(), SensorError> {
        Ok(())
    }

    fn read(&mut self) -> BarReading {
        while let Some(gesture) = self.rx.pop() {
            self.apply(gesture);
        }
        BarReading::from_touches(self.touch.as_slice(), MIN_TOUCH_SIZE)
    }
}

/// Vibrato square driven by [`SquareGesture`]s.
pub struct VirtualSquare<R> {
    rx: R,
    size: f32,
    vertical: f32,
    horizontal: f32,
}

impl<R: MessageReceiver<SquareGesture>> VirtualSquare<R> {
    pub fn new(rx: R) -> Self {
        Self {
            rx,
            size: 0.0,
            vertical: 0.5,
            horizontal: 0.5,
        }
    }

    fn apply(&mut self, gesture: SquareGesture) {
        match gesture {
            SquareGesture::Touch(size) => self.size = size.clamp(0.0, 1.0),
            SquareGesture::Move {
                vertical,
                horizontal,
            } => {
                self.vertical = vertical.clamp(0.0, 1.0);
                self.horizontal = horizontal.clamp(0.0, 1.0);
            }
            SquareGesture::Release => self.size = 0.0,
        }
    }
}

impl<R: MessageReceiver<SquareGesture> + Send> TouchSensor for VirtualSquare<R> {
    type Reading = SquareReading;

    fn name(&self) -> &'static str {
        "virtual square"
    }

    fn setup(&mut self) -> Result<(), SensorError> {
        Ok(())
    }

    fn read(&mut self) -> SquareReading {
        while let Some(gesture) = self.rx.pop() {
            self.apply(gesture);
        }
        SquareReading::from_compound(self.vertical, self.horizontal, self.size, MIN_TOUCH_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    #[test]
    fn bar_follows_gestures() {
        let mut bar = VirtualBar::new(VecDeque::from([BarGesture::Move(0.2)]));
        assert!(!bar.read().active);

        bar.rx.extend([BarGesture::Touch, BarGesture::Move(0.9)]);
        let reading = bar.read();
        assert!(reading.active);
        assert_eq!(reading.location, 0.9);

        bar.rx.push_back(BarGesture::Release);
        assert!(!bar.read().active);
    }

    #[test]
    fn bar_clamps_location() {
        let mut bar = VirtualBar::new(VecDeque::from([BarGesture::Touch, BarGesture::Move(3.0)]));
        assert_eq!(bar.read().location, 1.0);
    }

    #[test]
    fn square_follows_gestures() {
        let mut square = VirtualSquare::new(VecDeque::new());
        assert!(!square.read().is_touched());

        square.rx.extend([
            SquareGesture::Touch(0.4),
            SquareGesture::Move {
                vertical: 0.1,
                horizontal: 0.7,
            },
        ]);
        let reading = square.read();
        assert!(reading.is_touched());
        assert!((reading.x - 0.9).abs() < 1e-6);
        assert_eq!(reading.y, 0.7);

        square.rx.push_back(SquareGesture::Release);
        assert!(!square.read().is_touched());
    }

    #[cfg(feature = "rtrb")]
    #[test]
    fn reads_from_ring_buffer() {
        let (mut tx, rx) = rtrb::RingBuffer::new(8);
        let mut bar = VirtualBar::new(rx);

        tx.push(BarGesture::Touch).unwrap();
        tx.push(BarGesture::Move(0.3)).unwrap();
        let reading = bar.read();
        assert!(reading.active);
        assert_eq!(reading.location, 0.3);
    }
}
