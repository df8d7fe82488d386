//! Status bar widget - pitch, level, and audio stats

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use theremin_dsp::control::StatusSnapshot;

const NOTE_NAMES: [&str; 12] = ["C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B"];

/// Audio statistics for display
pub struct AudioStats {
    pub peak: f32,
    pub rms: f32,
}

impl AudioStats {
    /// Compute audio stats from a buffer
    pub fn from_buffer(buffer: &[f32]) -> Self {
        if buffer.is_empty() {
            return Self { peak: 0.0, rms: 0.0 };
        }
        let peak = buffer.iter().fold(0.0f32, |acc, &x| acc.max(x.abs()));
        let rms = (buffer.iter().map(|&x| x * x).sum::<f32>() / buffer.len() as f32).sqrt();
        Self { peak, rms }
    }
}

/// Nearest equal-tempered note and the offset from it in cents
fn nearest_note(frequency: f32) -> Option<(String, f32)> {
    if !(frequency.is_finite() && frequency > 0.0) {
        return None;
    }
    let midi = 69.0 + 12.0 * (frequency / 440.0).log2();
    let nearest = midi.round();
    let cents = (midi - nearest) * 100.0;
    let index = nearest as i32;
    let name = NOTE_NAMES[index.rem_euclid(12) as usize];
    let octave = index.div_euclid(12) - 1;
    Some((format!("{name}{octave}"), cents))
}

/// Render the status bar
pub fn render_status(
    frame: &mut Frame,
    area: Rect,
    status: &StatusSnapshot,
    master_db: f32,
    sample_rate: f32,
    audio_stats: &AudioStats,
    measured_hz: Option<f32>,
) {
    let block = Block::default().title(" theremin ").borders(Borders::ALL);

    let note = match nearest_note(status.frequency) {
        Some((name, cents)) => format!("{name} {cents:+.0}c"),
        None => "--".to_string(),
    };
    let measured = match measured_hz {
        Some(hz) => format!("{hz:.0} Hz"),
        None => "--".to_string(),
    };
    let sounding = status.amplitude > 0.0;

    let line = Line::from(vec![
        Span::styled(
            format!(" {:.1} Hz ({note})  ", status.frequency),
            Style::default().fg(if sounding { Color::Green } else { Color::DarkGray }),
        ),
        Span::styled(
            format!("Vib: {:.1} Hz x{:.3}  ", status.vibrato_rate, status.vibrato_depth),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(
            format!("Amp: {:.2}  ", status.amplitude),
            Style::default().fg(Color::White),
        ),
        Span::styled(
            format!("Master: {master_db:.0} dB  "),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled(
            format!("FFT: {measured}  "),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!("{:.1}kHz  ", sample_rate / 1000.0),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!("Peak: {:.2}  RMS: {:.2}", audio_stats.peak, audio_stats.rms),
            Style::default().fg(Color::Magenta),
        ),
    ]);

    let paragraph = Paragraph::new(line).block(block);
    frame.render_widget(paragraph, area);
}
