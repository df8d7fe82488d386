//! Touch surface and LED widgets

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Gauge},
    Frame,
};
use theremin_dsp::control::{ControlSnapshot, StatusSnapshot};

use super::state::Fingers;

fn gauge<'a>(title: &'a str, ratio: f32, color: Color) -> Gauge<'a> {
    let ratio = if ratio.is_finite() { ratio.clamp(0.0, 1.0) } else { 0.0 };
    Gauge::default()
        .block(Block::default().title(title).borders(Borders::ALL))
        .gauge_style(Style::default().fg(color))
        .ratio(ratio as f64)
}

/// Render the bar, the square's two axes, and both LEDs
pub fn render_pads(
    frame: &mut Frame,
    area: Rect,
    fingers: &Fingers,
    sensed: &ControlSnapshot,
    status: &StatusSnapshot,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(3)])
        .split(area);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(rows[0]);
    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Percentage(35),
            Constraint::Percentage(30),
        ])
        .split(rows[1]);

    let bar_color = if sensed.bar_active { Color::Green } else { Color::DarkGray };
    frame.render_widget(gauge(" Bar (pitch) ", fingers.bar_location, bar_color), top[0]);
    frame.render_widget(gauge(" Bar LED ", status.bar_led, Color::LightRed), top[1]);

    let square_color = if sensed.square_touch_size != 0.0 { Color::Cyan } else { Color::DarkGray };
    frame.render_widget(gauge(" Square: rate ", fingers.rate, square_color), bottom[0]);
    frame.render_widget(gauge(" Square: depth ", fingers.depth, square_color), bottom[1]);
    frame.render_widget(gauge(" Square LED ", status.square_led, Color::LightBlue), bottom[2]);
}
