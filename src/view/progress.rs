//! Now-playing bar

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Gauge},
    Frame,
};

use crate::model::{PlaybackInfo, UiState};
use super::utils::format_duration;

pub fn render_now_playing(frame: &mut Frame, area: Rect, playback: &PlaybackInfo, ui_state: &UiState) {
    let status_text = match &playback.track {
        Some(track) if playback.is_playing() => format!(" ▶ {} | {} ", track.title, track.artists),
        Some(track) => format!(" ⏸ {} | {} ", track.title, track.artists),
        None => " Nothing playing ".to_string(),
    };

    let total = playback.track.as_ref().map(|t| t.duration).unwrap_or_default();
    let progress_ratio = if total.is_zero() {
        0.0
    } else {
        (playback.progress.as_secs_f64() / total.as_secs_f64()).clamp(0.0, 1.0)
    };
    let time_str = if playback.track.is_some() {
        format!("{} / {}", format_duration(playback.progress), format_duration(total))
    } else {
        String::new()
    };

    let mut block = Block::default().borders(Borders::ALL).title(status_text);
    if let Some(ref message) = ui_state.status_message {
        block = block.title_bottom(
            Line::styled(format!(" {message} "), Style::default().fg(Color::Red)).right_aligned(),
        );
    }

    let gauge = Gauge::default()
        .block(block)
        .gauge_style(Style::default().fg(Color::Green))
        .ratio(progress_ratio)
        .label(time_str);

    frame.render_widget(gauge, area);
}
