//! TUI module for theremin
//!
//! Shows the touch surfaces, LEDs, output waveform and spectrum, and turns
//! key presses into sensor gestures.

mod pads;
mod spectrum;
mod state;
mod status;
mod waveform;

use std::time::Duration;

use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::Paragraph,
    DefaultTerminal, Frame,
};
use rtrb::{Consumer, Producer};
use theremin_dsp::control::{
    gesture::{BarGesture, SquareGesture},
    DecibelSlider, SensorBus, StatusBus,
};

use pads::render_pads;
use spectrum::{render_spectrum, SpectrumAnalyzer};
use state::Fingers;
use status::{render_status, AudioStats};
use waveform::render_waveform;

/// Audio visualization buffer size (also the FFT size)
pub const VIS_BUFFER_SIZE: usize = 1024;

/// UI application state
pub struct UiApp {
    /// Ring buffer receiver for audio samples
    audio_rx: Consumer<f32>,
    /// Shared control values (read for display, master level written here)
    bus: SensorBus,
    /// Instrument state published by the audio thread
    status: StatusBus,
    bar_tx: Producer<BarGesture>,
    square_tx: Producer<SquareGesture>,
    fingers: Fingers,
    slider: DecibelSlider,
    /// Audio sample buffer for visualization
    audio_buffer: Vec<f32>,
    spectrum: SpectrumAnalyzer,
    sample_rate: f32,
    /// Whether the app should quit
    should_quit: bool,
}

impl UiApp {
    pub fn new(
        audio_rx: Consumer<f32>,
        bus: SensorBus,
        status: StatusBus,
        bar_tx: Producer<BarGesture>,
        square_tx: Producer<SquareGesture>,
        sample_rate: f32,
    ) -> Self {
        let slider = DecibelSlider::new();
        bus.master_db.store(slider.db());

        let mut app = Self {
            audio_rx,
            bus,
            status,
            bar_tx,
            square_tx,
            fingers: Fingers::new(),
            slider,
            audio_buffer: vec![0.0; VIS_BUFFER_SIZE],
            spectrum: SpectrumAnalyzer::new(VIS_BUFFER_SIZE, sample_rate),
            sample_rate,
            should_quit: false,
        };

        // Park both virtual fingers where the gauges show them
        let bar = BarGesture::Move(app.fingers.bar_location);
        app.send_bar(bar);
        let square = app.fingers.square_position();
        app.send_square(square);
        app
    }

    /// Run the UI event loop
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            self.poll_audio();

            terminal.draw(|frame| self.render(frame))?;

            // Handle keyboard input (non-blocking, ~60fps)
            if event::poll(Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }
        }

        Ok(())
    }

    /// Poll for new audio samples from ring buffer
    fn poll_audio(&mut self) {
        let available = self.audio_rx.slots();
        if available == 0 {
            return;
        }

        // Keep only the last VIS_BUFFER_SIZE samples
        let skip = available.saturating_sub(VIS_BUFFER_SIZE);
        for _ in 0..skip {
            let _ = self.audio_rx.pop();
        }
        let fresh = available - skip;
        self.audio_buffer.drain(..fresh);
        for _ in 0..fresh {
            if let Ok(sample) = self.audio_rx.pop() {
                self.audio_buffer.push(sample);
            }
        }
        self.audio_buffer.resize(VIS_BUFFER_SIZE, 0.0);

        self.spectrum.update(&self.audio_buffer);
    }

    fn send_bar(&mut self, gesture: BarGesture) {
        // A full queue means the poller is stalled; dropping is fine
        let _ = self.bar_tx.push(gesture);
    }

    fn send_square(&mut self, gesture: SquareGesture) {
        let _ = self.square_tx.push(gesture);
    }

    /// Handle keyboard input
    fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char(' ') => {
                let gesture = self.fingers.toggle_bar();
                self.send_bar(gesture);
            }
            KeyCode::Left => {
                let gesture = self.fingers.slide_bar(-1.0);
                self.send_bar(gesture);
            }
            KeyCode::Right => {
                let gesture = self.fingers.slide_bar(1.0);
                self.send_bar(gesture);
            }
            KeyCode::Char('t') => {
                let gesture = self.fingers.toggle_square();
                self.send_square(gesture);
            }
            KeyCode::Char('w') => {
                let gesture = self.fingers.move_square(1.0, 0.0);
                self.send_square(gesture);
            }
            KeyCode::Char('s') => {
                let gesture = self.fingers.move_square(-1.0, 0.0);
                self.send_square(gesture);
            }
            KeyCode::Char('d') => {
                let gesture = self.fingers.move_square(0.0, 1.0);
                self.send_square(gesture);
            }
            KeyCode::Char('a') => {
                let gesture = self.fingers.move_square(0.0, -1.0);
                self.send_square(gesture);
            }
            KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Up => {
                self.slider.nudge(1.0);
                self.bus.master_db.store(self.slider.db());
            }
            KeyCode::Char('-') | KeyCode::Down => {
                self.slider.nudge(-1.0);
                self.bus.master_db.store(self.slider.db());
            }
            _ => {}
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        // Main layout: status, pads, waveform, spectrum, help
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Status bar
                Constraint::Length(6), // Pads and LEDs
                Constraint::Min(6),    // Waveform
                Constraint::Min(6),    // Spectrum
                Constraint::Length(1), // Help bar
            ])
            .split(area);

        let status = self.status.snapshot();
        let sensed = self.bus.snapshot();
        let stats = AudioStats::from_buffer(&self.audio_buffer);

        render_status(
            frame,
            chunks[0],
            &status,
            self.slider.db(),
            self.sample_rate,
            &stats,
            self.spectrum.peak_hz(),
        );
        render_pads(frame, chunks[1], &self.fingers, &sensed, &status);
        render_waveform(frame, chunks[2], &self.audio_buffer);
        render_spectrum(frame, chunks[3], self.spectrum.data());

        let help = Paragraph::new(
            " [Space] Touch bar  [←/→] Pitch  [T] Touch square  [W/S] Rate  [A/D] Depth  [↑/↓] Master  [Q] Quit",
        )
        .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, chunks[4]);
    }
}
