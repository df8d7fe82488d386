#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The two indicator LEDs.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Led {
    /// Follows the amplitude envelope.
    Bar = 0,
    /// Follows the vibrato depth while the square is touched.
    Square = 1,
}

/// What the renderer wants an LED to do this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LedCommand {
    /// Drive at an intensity in 0.0 - 1.0. Written every frame.
    Level(f32),
    /// Turn off. Only written when the LED is not already off.
    Off,
}

/// Latest intensity of each LED, as a driver would hold it.
#[derive(Debug, Clone, Default)]
pub struct LedBank {
    levels: [f32; 2],
    writes: u64,
}

impl LedBank {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, led: Led, command: LedCommand) {
        let slot = &mut self.levels[led as usize];
        match command {
            LedCommand::Level(level) => {
                *slot = level.clamp(0.0, 1.0);
                self.writes += 1;
            }
            LedCommand::Off if *slot != 0.0 => {
                *slot = 0.0;
                self.writes += 1;
            }
            LedCommand::Off => {}
        }
    }

    pub fn level(&self, led: Led) -> f32 {
        self.levels[led as usize]
    }

    /// Number of writes that reached the driver.
    pub fn writes(&self) -> u64 {
        self.writes
    }
}
