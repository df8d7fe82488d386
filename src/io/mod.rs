// Purpose - output-side plumbing: LED state and getting mono frames onto
// device channels

pub mod led;

pub use led::{Led, LedBank, LedCommand};

/// Planar per-channel capture of rendered audio.
#[derive(Debug, Default)]
pub struct AudioOutput {
    pub buffers: Vec<Vec<f32>>,
}

impl AudioOutput {
    pub fn new(channels: usize, frames: usize) -> Self {
        Self {
            buffers: vec![vec![0.0; frames]; channels],
        }
    }

    /// Write the same sample to every channel at `frame`. Out-of-range
    /// frames are dropped.
    pub fn write_frame(&mut self, frame: usize, sample: f32) {
        for channel in &mut self.buffers {
            if let Some(slot) = channel.get_mut(frame) {
                *slot = sample;
            }
        }
    }

    /// Copy a mono block into every channel, starting at frame 0.
    pub fn write_mono(&mut self, mono: &[f32]) {
        for (frame, &sample) in mono.iter().enumerate() {
            self.write_frame(frame, sample);
        }
    }
}

/// Duplicate each mono frame across `channels` interleaved device channels.
///
/// Only as many frames as fit in both buffers are written.
pub fn fan_out(mono: &[f32], interleaved: &mut [f32], channels: usize) {
    if channels == 0 {
        return;
    }
    for (frame, &sample) in interleaved.chunks_exact_mut(channels).zip(mono) {
        frame.fill(sample);
    }
}
