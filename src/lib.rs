pub mod control; // Cross-thread control plane: sensors, bus, slider
pub mod dsp;
pub mod instrument; // Render composition
pub mod io;

/// Largest block the audio callback renders in one go.
pub const MAX_BLOCK_SIZE: usize = 2048;
