//! The playable instrument, composed from the `dsp` primitives.
//!
//! [`Theremin`] is the single context object the audio callback owns. It is
//! fed a [`ControlSnapshot`](crate::control::ControlSnapshot) per block and
//! renders mono frames plus LED commands.

/// Tuning and response settings.
pub mod config;
/// Sensor-to-sound render path.
pub mod theremin;
/// Pitch modulation LFO.
pub mod vibrato;

pub use config::ThereminConfig;
pub use theremin::{Frame, Theremin};
pub use vibrato::Vibrato;
