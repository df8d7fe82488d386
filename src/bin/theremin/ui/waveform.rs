//! Oscilloscope of the most recent output

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

/// Render the waveform oscilloscope
pub fn render_waveform(frame: &mut Frame, area: Rect, audio_buffer: &[f32]) {
    let block = Block::default().title(" Output ").borders(Borders::ALL);

    let len = audio_buffer.len().max(1) as f64;
    let data: Vec<(f64, f64)> = audio_buffer
        .iter()
        .enumerate()
        .map(|(i, &sample)| (i as f64 / len, sample as f64))
        .collect();

    let dataset = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Cyan))
        .data(&data);

    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(
            Axis::default()
                .bounds([0.0, 1.0])
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(
            Axis::default()
                .bounds([-1.0, 1.0])
                .style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(chart, area);
}
