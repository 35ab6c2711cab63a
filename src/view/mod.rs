//! View module - UI rendering
//!
//! This module handles all UI rendering for the application using ratatui.
//! It is organized into submodules by component type:
//!
//! - `utils`: Shared formatting helpers and scrollable lists
//! - `cover`: Cover artwork (loading, initials placeholder, pixels)
//! - `layout`: Screen title, bottom tab bar, playlist app bar
//! - `home`: Home carousel and library list, Search / Library placeholders
//! - `playlist`: Playlist detail screen
//! - `progress`: Now-playing bar
//! - `overlays`: Help popup

mod utils;
mod cover;
mod layout;
mod home;
mod playlist;
mod progress;
mod overlays;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::model::{Route, ViewState};

/// Tab bar height (top border + titles)
const TAB_BAR_ROWS: u16 = 2;
const APP_BAR_ROWS: u16 = 1;
const NOW_PLAYING_ROWS: u16 = 3;

pub struct AppView;

impl AppView {
    pub fn render(frame: &mut Frame, view: &ViewState) {
        if view.tab_bar_visible {
            Self::render_primary(frame, view);
        } else {
            Self::render_playlist(frame, view);
        }

        if view.ui.show_help_popup {
            overlays::render_help_popup(frame);
        }
    }

    /// Rows left for playlist content on a terminal `height` rows tall.
    pub fn content_rows(height: u16) -> u16 {
        height.saturating_sub(APP_BAR_ROWS + NOW_PLAYING_ROWS)
    }

    fn render_primary(frame: &mut Frame, view: &ViewState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),            // Screen title
                Constraint::Min(0),               // Screen content
                Constraint::Length(TAB_BAR_ROWS), // Tab bar
            ])
            .split(frame.area());

        layout::render_screen_title(frame, chunks[0], &view.entry.route);

        match &view.entry.route {
            Route::Home => home::render_home(frame, chunks[1], view),
            route => home::render_placeholder(frame, chunks[1], route.label()),
        }

        layout::render_tab_bar(frame, chunks[2], &view.entry.route);
    }

    fn render_playlist(frame: &mut Frame, view: &ViewState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(APP_BAR_ROWS),     // Back / title / Home
                Constraint::Min(0),                   // Header + tracks
                Constraint::Length(NOW_PLAYING_ROWS), // Now playing
            ])
            .split(frame.area());

        match view.playlist() {
            Some(Ok(found)) => {
                layout::render_app_bar(frame, chunks[0], &found.title, &view.header);
                playlist::render_playlist(frame, chunks[1], view, found);
            }
            _ => {
                layout::render_app_bar(frame, chunks[0], "", &view.header);
                playlist::render_not_found(frame, chunks[1]);
            }
        }

        progress::render_now_playing(frame, chunks[2], &view.playback, &view.ui);
    }
}
