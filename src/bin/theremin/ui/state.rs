//! Keyboard-driven finger positions
//!
//! The UI owns where the "fingers" are. Every change is turned into a
//! gesture for the virtual sensors; the sensors, not the UI, decide what
//! reaches the audio thread.

use theremin_dsp::control::gesture::{BarGesture, SquareGesture};

/// Step per key press along the bar
const BAR_STEP: f32 = 0.02;
/// Step per key press on the square
const SQUARE_STEP: f32 = 0.05;
/// Contact size reported for a virtual finger on the square
const SQUARE_TOUCH_SIZE: f32 = 0.5;

/// Where the two virtual fingers are
#[derive(Debug, Clone, Copy)]
pub struct Fingers {
    pub bar_down: bool,
    pub bar_location: f32,
    pub square_down: bool,
    /// Vibrato rate axis (0.0 - 1.0)
    pub rate: f32,
    /// Vibrato depth axis (0.0 - 1.0)
    pub depth: f32,
}

impl Fingers {
    pub fn new() -> Self {
        Self {
            bar_down: false,
            bar_location: 0.5,
            square_down: false,
            rate: 0.5,
            depth: 0.5,
        }
    }

    pub fn toggle_bar(&mut self) -> BarGesture {
        self.bar_down = !self.bar_down;
        if self.bar_down {
            BarGesture::Touch
        } else {
            BarGesture::Release
        }
    }

    pub fn slide_bar(&mut self, steps: f32) -> BarGesture {
        self.bar_location = (self.bar_location + steps * BAR_STEP).clamp(0.0, 1.0);
        BarGesture::Move(self.bar_location)
    }

    pub fn toggle_square(&mut self) -> SquareGesture {
        self.square_down = !self.square_down;
        if self.square_down {
            SquareGesture::Touch(SQUARE_TOUCH_SIZE)
        } else {
            SquareGesture::Release
        }
    }

    pub fn move_square(&mut self, rate_steps: f32, depth_steps: f32) -> SquareGesture {
        self.rate = (self.rate + rate_steps * SQUARE_STEP).clamp(0.0, 1.0);
        self.depth = (self.depth + depth_steps * SQUARE_STEP).clamp(0.0, 1.0);

        // The square reports rate inverted on its vertical axis
        SquareGesture::Move {
            vertical: 1.0 - self.rate,
            horizontal: self.depth,
        }
    }

    /// Gesture that places the square finger at its current position
    pub fn square_position(&self) -> SquareGesture {
        SquareGesture::Move {
            vertical: 1.0 - self.rate,
            horizontal: self.depth,
        }
    }
}
