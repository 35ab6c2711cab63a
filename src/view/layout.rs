//! Layout chrome (screen title, bottom tab bar, playlist app bar)

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use crate::model::{HeaderAppearance, Route};
use super::utils::blend;

/// Header colour the app bar fades from.
const HEADER_BASE: (u8, u8, u8) = (68, 68, 68);

pub fn render_screen_title(frame: &mut Frame, area: Rect, route: &Route) {
    let title = Paragraph::new(Line::from(Span::styled(
        format!(" {}", route.label()),
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(title, area);
}

pub fn render_tab_bar(frame: &mut Frame, area: Rect, route: &Route) {
    let titles: Vec<Line> = Route::TABS
        .iter()
        .enumerate()
        .map(|(i, tab)| Line::from(format!(" {} {} ", i + 1, tab.label())))
        .collect();
    let selected = Route::TABS.iter().position(|tab| tab == route).unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .block(Block::default().borders(Borders::TOP))
        .style(Style::default().fg(Color::Gray))
        .highlight_style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
        .divider("│");

    frame.render_widget(tabs, area);
}

/// Back / title / Home row over the playlist screen. Opacity and title
/// visibility follow the header collapse.
pub fn render_app_bar(frame: &mut Frame, area: Rect, title: &str, header: &HeaderAppearance) {
    let bg = blend((0, 0, 0), HEADER_BASE, header.background_opacity);
    let style = Style::default().bg(bg).fg(Color::White);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(8), // Back
            Constraint::Min(0),    // Title
            Constraint::Length(8), // Home
        ])
        .split(area);

    frame.render_widget(Paragraph::new(" ← Back").style(style), chunks[0]);

    let title_text = if header.title_visible { title } else { "" };
    frame.render_widget(
        Paragraph::new(title_text).style(style.add_modifier(Modifier::BOLD)),
        chunks[1],
    );

    frame.render_widget(Paragraph::new("⌂ Home ").right_aligned().style(style), chunks[2]);
}
