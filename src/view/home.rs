//! Home, Search and Library screens

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, ListItem, Paragraph},
    Frame,
};
use ratatui::widgets::Padding;

use crate::model::{Playlist, ViewState, COVER_COLS};
use super::cover::cover_lines;
use super::utils::{render_scrollable_list, truncate_string};

const CARD_COVER_ROWS: u16 = 6;
/// Cover + title + description + borders
const CARD_HEIGHT: u16 = CARD_COVER_ROWS + 4;
const CARD_WIDTH: u16 = COVER_COLS + 2;
const LIST_COVER_COLS: u16 = 4;

pub fn render_home(frame: &mut Frame, area: Rect, view: &ViewState) {
    let featured: Vec<&Playlist> = view.catalog.featured().collect();
    let local: Vec<&Playlist> = view.catalog.local().collect();
    let selected = view.entry.state.selected;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),           // "Featured Playlists"
            Constraint::Length(CARD_HEIGHT), // Carousel
            Constraint::Length(2),           // "Your Library"
            Constraint::Min(0),              // Library list
        ])
        .split(area);

    frame.render_widget(section_title("Featured Playlists"), chunks[0]);
    render_carousel(frame, chunks[1], view, &featured, selected);

    frame.render_widget(section_title("\nYour Library"), chunks[2]);
    let library_selected = selected.checked_sub(featured.len());
    render_library_list(frame, chunks[3], view, &local, library_selected);
}

fn section_title(text: &str) -> Paragraph<'_> {
    Paragraph::new(text)
        .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
        .block(Block::default().padding(Padding::horizontal(1)))
}

fn render_carousel(
    frame: &mut Frame,
    area: Rect,
    view: &ViewState,
    playlists: &[&Playlist],
    selected: usize,
) {
    let slot = CARD_WIDTH + 1;
    let visible = usize::from((area.width / slot).max(1));
    // Scroll the row so the selected card stays on screen.
    let start = if selected < playlists.len() {
        (selected + 1).saturating_sub(visible)
    } else {
        0
    };

    for (i, playlist) in playlists.iter().enumerate().skip(start).take(visible) {
        let x = area.x + 1 + (i - start) as u16 * slot;
        if x + CARD_WIDTH > area.x + area.width {
            break;
        }
        let card = Rect {
            x,
            y: area.y,
            width: CARD_WIDTH,
            height: area.height,
        };
        render_card(frame, card, view, playlist, i == selected);
    }
}

fn render_card(frame: &mut Frame, area: Rect, view: &ViewState, playlist: &Playlist, is_selected: bool) {
    let border_style = if is_selected {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let inner_width = usize::from(CARD_WIDTH.saturating_sub(2));
    let mut lines = cover_lines(&view.cover(&playlist.id), &playlist.title, COVER_COLS, CARD_COVER_ROWS);
    lines.push(Line::from(Span::styled(
        truncate_string(&playlist.title, inner_width),
        Style::default().add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        truncate_string(&playlist.description, inner_width),
        Style::default().fg(Color::Gray),
    )));

    let card = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    frame.render_widget(card, area);
}

fn render_library_list(
    frame: &mut Frame,
    area: Rect,
    view: &ViewState,
    playlists: &[&Playlist],
    selected: Option<usize>,
) {
    let items: Vec<ListItem> = playlists
        .iter()
        .enumerate()
        .map(|(i, playlist)| {
            let cover = cover_lines(&view.cover(&playlist.id), &playlist.title, LIST_COVER_COLS, 2);
            let title_style = if Some(i) == selected {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            let mut rows = cover.into_iter();
            let first = rows.next().unwrap_or_default();
            let second = rows.next().unwrap_or_default();
            let text = Text::from(vec![
                Line::from(
                    first
                        .spans
                        .into_iter()
                        .chain([Span::raw("  "), Span::styled(playlist.title.clone(), title_style)])
                        .collect::<Vec<_>>(),
                ),
                Line::from(
                    second
                        .spans
                        .into_iter()
                        .chain([
                            Span::raw("  "),
                            Span::styled(playlist.curator.clone(), Style::default().fg(Color::Gray)),
                        ])
                        .collect::<Vec<_>>(),
                ),
            ]);
            ListItem::new(text)
        })
        .collect();

    render_scrollable_list(
        frame,
        area,
        items,
        selected,
        Block::default().padding(Padding::horizontal(1)),
    );
}

/// Search and Library are placeholders.
pub fn render_placeholder(frame: &mut Frame, area: Rect, label: &str) {
    let text = format!("{label} Placeholder");
    let top = area.height / 2;
    let placeholder = Paragraph::new(text)
        .centered()
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().padding(Padding::top(top)));
    frame.render_widget(placeholder, area);
}
