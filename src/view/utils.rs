//! Formatting helpers shared by the renderers

use std::time::Duration;

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, List, ListItem, ListState},
    Frame,
};

pub fn render_scrollable_list(
    frame: &mut Frame,
    area: Rect,
    items: Vec<ListItem>,
    selected_index: Option<usize>,
    block: Block,
) {
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default()); // Highlight handled by item styles

    let mut list_state = ListState::default();
    list_state.select(selected_index);

    frame.render_stateful_widget(list, area, &mut list_state);
}

/// `m:ss`
pub fn format_duration(duration: Duration) -> String {
    let total_seconds = duration.as_secs();
    format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
}

/// 999 -> "999", 1986 -> "1K", 55_242_100 -> "55M"
pub fn human_count(count: u64) -> String {
    if count < 1_000 {
        count.to_string()
    } else if count < 1_000_000 {
        format!("{}K", count / 1_000)
    } else {
        format!("{}M", count / 1_000_000)
    }
}

pub fn truncate_string(s: &str, max_width: usize) -> String {
    if s.chars().count() > max_width {
        let truncated: String = s.chars().take(max_width.saturating_sub(3)).collect();
        format!("{:<width$}", format!("{}...", truncated), width = max_width)
    } else {
        format!("{:<width$}", s, width = max_width)
    }
}

/// First `n` characters, for initials placeholders.
pub fn initials(title: &str, n: usize) -> String {
    title.chars().take(n).collect()
}

/// Blend `color` over `base` at `opacity`.
pub fn blend(color: (u8, u8, u8), base: (u8, u8, u8), opacity: f32) -> Color {
    let o = opacity.clamp(0.0, 1.0);
    let mix = |c: u8, b: u8| (c as f32 * o + b as f32 * (1.0 - o)).round() as u8;
    Color::Rgb(mix(color.0, base.0), mix(color.1, base.1), mix(color.2, base.2))
}
