//! Playlist detail screen: collapsing header, track rows, not-found view

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::{Playlist, Track, ViewState, COVER_COLS, COVER_ROWS, TRACK_ROW_HEIGHT};
use super::cover::cover_lines;
use super::utils::{format_duration, human_count, initials, truncate_string};

const MINI_COVER_BG: Color = Color::Rgb(42, 42, 42);
const HEART_DIM: Color = Color::Rgb(128, 0, 0);
/// Number + mini cover + gaps + duration + heart
const TRACK_FIXED_WIDTH: usize = 5 + 3 + 2 + 7 + 3;

pub fn render_playlist(frame: &mut Frame, area: Rect, view: &ViewState, playlist: &Playlist) {
    let mut lines = header_lines(view, playlist, area.width);

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        " Songs",
        Style::default().add_modifier(Modifier::BOLD),
    )));

    let width = usize::from(area.width);
    for (index, track) in playlist.tracks.iter().enumerate() {
        let is_selected = index == view.entry.state.selected;
        let is_playing = view.playback.state.is_playing_track(&track.id);
        lines.extend(track_lines(index, track, width, is_selected, is_playing));
    }

    let content = Paragraph::new(lines).scroll((view.entry.state.scroll_offset, 0));
    frame.render_widget(content, area);
}

pub fn render_not_found(frame: &mut Frame, area: Rect) {
    let top = area.height / 2;
    let lines: Vec<Line> = (0..top)
        .map(|_| Line::default())
        .chain([Line::from("Playlist not found")])
        .collect();
    frame.render_widget(Paragraph::new(lines).centered(), area);
}

fn header_lines(view: &ViewState, playlist: &Playlist, width: u16) -> Vec<Line<'static>> {
    let height = view.header_height;
    let cover_rows = height.min(COVER_ROWS);
    let cover = cover_lines(&view.cover(&playlist.id), &playlist.title, COVER_COLS, cover_rows);
    let text_width = usize::from(width.saturating_sub(COVER_COLS + 4));

    let first_is_playing = playlist
        .first_track()
        .is_some_and(|t| view.playback.state.is_playing_track(&t.id));

    let minutes = playlist.total_duration().as_secs() / 60;
    let text = [
        Line::from(Span::styled(
            truncate_string(&playlist.title, text_width),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("{}  •  {} saves  •  {} min", playlist.curator, human_count(playlist.saves), minutes),
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            truncate_string(&playlist.description, text_width),
            Style::default().fg(Color::DarkGray),
        )),
        Line::default(),
        play_button(first_is_playing),
    ];

    // Text is bottom-aligned within the header.
    let text_start = usize::from(height).saturating_sub(text.len());
    let blank_cover = " ".repeat(usize::from(COVER_COLS));

    (0..usize::from(height))
        .map(|row| {
            let mut spans = vec![Span::raw(" ")];
            match cover.get(row) {
                Some(line) => spans.extend(line.spans.iter().cloned()),
                None => spans.push(Span::raw(blank_cover.clone())),
            }
            spans.push(Span::raw("  "));
            if let Some(line) = row.checked_sub(text_start).and_then(|i| text.get(i)) {
                spans.extend(line.spans.iter().cloned());
            }
            Line::from(spans)
        })
        .collect()
}

fn play_button(is_playing: bool) -> Line<'static> {
    let label = if is_playing { " ⏸ Pause " } else { " ▶ Play " };
    Line::from(Span::styled(
        label,
        Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
    ))
}

fn track_lines(
    index: usize,
    track: &Track,
    width: usize,
    is_selected: bool,
    is_playing: bool,
) -> Vec<Line<'static>> {
    let title_width = width.saturating_sub(TRACK_FIXED_WIDTH).max(8);
    let title_style = match (is_playing, is_selected) {
        (true, _) => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        (false, true) => Style::default().fg(Color::White).add_modifier(Modifier::BOLD | Modifier::REVERSED),
        (false, false) => Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    };
    let heart = if is_playing { Color::Red } else { HEART_DIM };

    let number = Span::styled(format!(" {:>3} ", index + 1), Style::default().fg(Color::Gray));
    let mini_cover = Span::styled(
        format!(" {} ", initials(&track.title, 1)),
        Style::default().bg(MINI_COVER_BG).add_modifier(Modifier::BOLD),
    );

    let mut lines = vec![
        Line::from(vec![
            number,
            mini_cover,
            Span::raw("  "),
            Span::styled(truncate_string(&track.title, title_width), title_style),
            Span::styled(format!("{:>7}", format_duration(track.duration)), Style::default().fg(Color::Gray)),
            Span::styled("  ♡", Style::default().fg(heart)),
        ]),
        Line::from(vec![
            Span::raw(" ".repeat(5 + 3 + 2)),
            Span::styled(
                truncate_string(&track.artists, title_width),
                Style::default().fg(Color::Gray),
            ),
        ]),
    ];
    lines.truncate(usize::from(TRACK_ROW_HEIGHT));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fake_data;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn track_rows_have_fixed_height() {
        let catalog = fake_data::catalog();
        let track = &catalog.get_by_id("rapcaviar").unwrap().tracks[2];
        let lines = track_lines(2, track, 60, false, false);
        assert_eq!(lines.len(), usize::from(TRACK_ROW_HEIGHT));
        let first = text(&lines[0]);
        assert!(first.contains("  3 "));
        assert!(first.contains("3:57"));
        assert!(text(&lines[1]).contains("Drake, Young Future"));
    }

    #[test]
    fn playing_row_has_bright_heart() {
        let catalog = fake_data::catalog();
        let track = &catalog.get_by_id("deja_vu_playlist").unwrap().tracks[0];
        let playing = track_lines(0, track, 60, false, true);
        let idle = track_lines(0, track, 60, false, false);
        let heart = |lines: &[Line]| lines[0].spans.last().unwrap().style.fg;
        assert_eq!(heart(&playing), Some(Color::Red));
        assert_eq!(heart(&idle), Some(HEART_DIM));
    }

    #[test]
    fn play_button_reflects_state() {
        assert_eq!(text(&play_button(true)).trim(), "⏸ Pause");
        assert_eq!(text(&play_button(false)).trim(), "▶ Play");
    }
}
