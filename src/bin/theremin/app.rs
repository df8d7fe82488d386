//! ThereminApp - wires sensors, audio device and UI together

use std::time::Duration;

use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use rtrb::{PushError, RingBuffer};
use tracing::{error, info};

use theremin_dsp::{
    control::{
        gesture::{BarGesture, SquareGesture, VirtualBar, VirtualSquare},
        SensorBus, SensorPoller, StatusBus,
    },
    instrument::{Theremin, ThereminConfig},
    io::{fan_out, LedBank},
    MAX_BLOCK_SIZE,
};

use super::ui::{UiApp, VIS_BUFFER_SIZE};

/// Capacity in visualisation blocks of the audio -> UI ring
const AUDIO_RING_BLOCKS: usize = 16;
/// Gestures queued between two sensor polls
const GESTURE_RING_LEN: usize = 64;

/// Main application builder
pub struct ThereminApp {
    config: ThereminConfig,
    poll_interval: Duration,
}

impl ThereminApp {
    pub fn new(config: ThereminConfig) -> Self {
        Self {
            config,
            poll_interval: SensorPoller::DEFAULT_INTERVAL,
        }
    }

    /// Set how often the virtual sensors are polled
    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Run the application (takes over the terminal, plays audio)
    pub fn run(self) -> EyreResult<()> {
        // --- Audio device ---
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| eyre!("no default output device available"))?;
        let supported = device
            .default_output_config()
            .wrap_err("failed to fetch default output config")?;

        let sample_rate = supported.sample_rate().0 as f32;
        let channels = supported.channels() as usize;
        info!(sample_rate, channels, "audio device ready");

        // --- Sensors ---
        let bus = SensorBus::new();
        let status = StatusBus::default();

        let (bar_tx, bar_rx) = RingBuffer::<BarGesture>::new(GESTURE_RING_LEN);
        let (square_tx, square_rx) = RingBuffer::<SquareGesture>::new(GESTURE_RING_LEN);

        let mut poller = SensorPoller::new(bus.clone())
            .with_interval(self.poll_interval)
            .spawn(VirtualBar::new(bar_rx), VirtualSquare::new(square_rx))
            .wrap_err("touch sensors failed to initialise")?;

        // --- Audio stream ---
        let (audio_tx, audio_rx) = RingBuffer::<f32>::new(VIS_BUFFER_SIZE * AUDIO_RING_BLOCKS);

        let stream = device
            .build_output_stream(
                &supported.into(),
                {
                    let mut theremin = Theremin::new(sample_rate, self.config.clone());
                    let mut leds = LedBank::new();
                    let mut render_buf = vec![0.0f32; MAX_BLOCK_SIZE];
                    let mut audio_tx = audio_tx;
                    let bus = bus.clone();
                    let status = status.clone();

                    move |data: &mut [f32], _| {
                        let controls = bus.snapshot();
                        let total_frames = data.len() / channels;
                        let mut frames_written = 0;

                        while frames_written < total_frames {
                            let frames_to_render = (total_frames - frames_written).min(MAX_BLOCK_SIZE);
                            let block = &mut render_buf[..frames_to_render];
                            theremin.render_block(block, &controls, &mut leds);

                            // Duplicate mono to all channels
                            let out_off = frames_written * channels;
                            fan_out(block, &mut data[out_off..], channels);

                            // Push mono block to UI ring, non-blocking (drop on overflow)
                            for &s in block.iter() {
                                if let Err(PushError::Full(_)) = audio_tx.push(s) {
                                    break;
                                }
                            }

                            frames_written += frames_to_render;
                        }

                        status.publish(&theremin.status());
                    }
                },
                move |err| error!(%err, "audio stream error"),
                None,
            )
            .wrap_err("failed to build output stream")?;

        stream.play().wrap_err("failed to start output stream")?;
        info!(config = ?self.config, "playing");

        // --- UI ---
        let mut terminal = ratatui::init();
        let result = UiApp::new(audio_rx, bus, status, bar_tx, square_tx, sample_rate).run(&mut terminal);
        ratatui::restore();

        let stopped = poller.stop().wrap_err("touch sensor poller failed");
        result.and(stopped)
    }
}
