//! Spectrum analyser widget
//!
//! FFT of the latest output window, shown on log-spaced bins around the
//! instrument's range, plus the strongest partial as a pitch readout.

use std::sync::Arc;

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};
use rustfft::{num_complex::Complex, Fft, FftPlanner};

/// Number of frequency bins to display
const SPECTRUM_BINS: usize = 64;
/// Lowest displayed frequency (Hz)
const MIN_DISPLAY_HZ: f32 = 100.0;
/// Highest displayed frequency (Hz), an octave above the bar's top note
const MAX_DISPLAY_HZ: f32 = 4_000.0;
/// Floor for magnitudes, in dB
const FLOOR_DB: f64 = -100.0;

pub struct SpectrumAnalyzer {
    window: Vec<f32>,
    fft: Arc<dyn Fft<f32>>,
    scratch: Vec<Complex<f32>>,
    /// Bin index for each displayed point
    bin_indices: Vec<usize>,
    /// (frequency_hz, magnitude_db) per displayed point
    spectrum: Vec<(f64, f64)>,
    sample_rate: f32,
    peak_hz: Option<f32>,
}

impl SpectrumAnalyzer {
    pub fn new(buffer_len: usize, sample_rate: f32) -> Self {
        let fft = FftPlanner::new().plan_fft_forward(buffer_len);

        // Hann window
        let window: Vec<f32> = (0..buffer_len)
            .map(|i| {
                if buffer_len > 1 {
                    let denom = (buffer_len - 1) as f32;
                    0.5 * (1.0 - (std::f32::consts::TAU * i as f32 / denom).cos())
                } else {
                    1.0
                }
            })
            .collect();

        let nyquist = (sample_rate / 2.0).max(1.0);
        let max_hz = MAX_DISPLAY_HZ.min(nyquist);
        let min_hz = MIN_DISPLAY_HZ.min(max_hz);
        let ratio = (max_hz / min_hz) as f64;
        let last_bin = (buffer_len / 2).saturating_sub(1);

        let mut bin_indices = Vec::with_capacity(SPECTRUM_BINS);
        let mut spectrum = Vec::with_capacity(SPECTRUM_BINS);
        for i in 0..SPECTRUM_BINS {
            let t = i as f64 / (SPECTRUM_BINS - 1) as f64;
            let freq = min_hz as f64 * ratio.powf(t);
            let index = (freq * buffer_len as f64 / sample_rate as f64).round() as usize;
            bin_indices.push(index.min(last_bin));
            spectrum.push((freq, FLOOR_DB));
        }

        Self {
            window,
            fft,
            scratch: vec![Complex::new(0.0, 0.0); buffer_len],
            bin_indices,
            spectrum,
            sample_rate,
            peak_hz: None,
        }
    }

    /// Analyse one window of samples. Windows of the wrong length are skipped.
    pub fn update(&mut self, buffer: &[f32]) {
        if buffer.len() != self.window.len() || buffer.is_empty() {
            return;
        }

        for ((slot, &sample), &w) in self.scratch.iter_mut().zip(buffer).zip(&self.window) {
            *slot = Complex::new(sample * w, 0.0);
        }
        self.fft.process(&mut self.scratch);

        let power = |bin: Complex<f32>| (bin.re * bin.re + bin.im * bin.im).max(1e-12);

        for ((_, magnitude_db), &index) in self.spectrum.iter_mut().zip(&self.bin_indices) {
            *magnitude_db = (10.0 * (power(self.scratch[index]) as f64).log10()).max(FLOOR_DB);
        }

        // Strongest bin above DC, ignored if the window is essentially silent
        let half = self.scratch.len() / 2;
        self.peak_hz = self.scratch[1..half.max(1)]
            .iter()
            .enumerate()
            .map(|(i, &bin)| (i + 1, power(bin)))
            .filter(|&(_, p)| p > 1e-6)
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(index, _)| index as f32 * self.sample_rate / self.scratch.len() as f32);
    }

    pub fn data(&self) -> &[(f64, f64)] {
        &self.spectrum
    }

    /// Frequency of the strongest partial in the last window
    pub fn peak_hz(&self) -> Option<f32> {
        self.peak_hz
    }
}

/// Render the spectrum analyser widget
pub fn render_spectrum(frame: &mut Frame, area: Rect, spectrum: &[(f64, f64)]) {
    let block = Block::default().title(" Spectrum ").borders(Borders::ALL);

    let dataset = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Green))
        .data(spectrum);

    let (min_freq, max_freq) = spectrum
        .iter()
        .fold((f64::MAX, 0.0f64), |(lo, hi), &(f, _)| (lo.min(f), hi.max(f)));

    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(
            Axis::default()
                .bounds([min_freq.min(max_freq), max_freq.max(1.0)])
                .labels(vec![format!("{min_freq:.0}"), format!("{max_freq:.0} Hz")])
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(
            Axis::default()
                .bounds([FLOOR_DB, 40.0])
                .labels(vec!["-100", "-30", "40"])
                .style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(chart, area);
}
