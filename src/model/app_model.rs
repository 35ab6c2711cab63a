//! Main application model with state management

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use crate::audio::AudioOutput;
use crate::config::AppConfig;
use crate::error::CatalogError;

use super::catalog::{Catalog, Playlist};
use super::covers::{CoverCache, CoverState};
use super::navigation::{NavEntry, Route, Router};
use super::playback::{Activation, PlaybackController, PlaybackInfo};
use super::scroll::{follow_row, HeaderAppearance};
use super::types::UiState;

/// Rows between the playlist header and the first track ("Songs" + spacer).
pub const SECTION_ROWS: u16 = 2;
/// Each track row spans a title line and an artists line.
pub const TRACK_ROW_HEIGHT: u16 = 2;

/// Playback controller bound to one playlist screen visit
struct ScreenPlayback {
    depth: usize,
    route: Route,
    controller: PlaybackController,
}

/// Everything the view needs to draw one frame
#[derive(Clone)]
pub struct ViewState {
    pub catalog: Arc<Catalog>,
    pub entry: NavEntry,
    pub tab_bar_visible: bool,
    pub playback: PlaybackInfo,
    pub ui: UiState,
    pub covers: HashMap<String, CoverState>,
    pub header: HeaderAppearance,
    pub header_height: u16,
}

impl ViewState {
    pub fn playlist(&self) -> Option<Result<&Playlist, CatalogError>> {
        match &self.entry.route {
            Route::Playlist(id) => Some(self.catalog.get_by_id(id)),
            _ => None,
        }
    }

    pub fn cover(&self, playlist_id: &str) -> CoverState {
        self.covers.get(playlist_id).cloned().unwrap_or_default()
    }
}

/// Main application model containing all state
pub struct AppModel {
    catalog: Arc<Catalog>,
    config: AppConfig,
    covers: CoverCache,
    router: Router,
    output: Arc<dyn AudioOutput>,
    playback: Option<ScreenPlayback>,
    ui_state: UiState,
    should_quit: bool,
}

impl AppModel {
    pub fn new(catalog: Catalog, config: AppConfig, output: Arc<dyn AudioOutput>) -> Self {
        let covers = CoverCache::new(config.covers_dir());
        Self {
            catalog: Arc::new(catalog),
            config,
            covers,
            router: Router::new(),
            output,
            playback: None,
            ui_state: UiState::default(),
            should_quit: false,
        }
    }

    pub fn catalog(&self) -> Arc<Catalog> {
        self.catalog.clone()
    }

    pub fn covers(&self) -> CoverCache {
        self.covers.clone()
    }

    pub fn current_route(&self) -> &Route {
        self.router.current()
    }

    #[cfg(test)]
    pub fn router(&self) -> &Router {
        &self.router
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    /// Tabs can only be selected while the tab bar is on screen.
    pub fn select_tab(&mut self, route: Route) -> bool {
        if !self.router.is_tab_bar_visible() {
            return false;
        }
        let selected = self.router.select_tab(route);
        self.sync_playback_scope();
        selected
    }

    pub fn cycle_tab(&mut self, forward: bool) {
        let tabs = Route::TABS;
        let Some(index) = tabs.iter().position(|r| r == self.router.current()) else {
            return;
        };
        let next = if forward {
            (index + 1) % tabs.len()
        } else {
            (index + tabs.len() - 1) % tabs.len()
        };
        self.select_tab(tabs[next].clone());
    }

    pub fn open_playlist(&mut self, id: &str) {
        self.router.open_playlist(id);
        self.sync_playback_scope();
    }

    /// Open the playlist under the Home selection.
    pub fn open_selected_playlist(&mut self) -> Option<String> {
        if *self.router.current() != Route::Home {
            return None;
        }
        let selected = self.router.current_entry().state.selected;
        let id = home_playlists(&self.catalog).get(selected).map(|p| p.id.clone())?;
        self.open_playlist(&id);
        Some(id)
    }

    pub fn back(&mut self) -> bool {
        let moved = self.router.back();
        self.sync_playback_scope();
        moved
    }

    pub fn go_home(&mut self) {
        self.router.go_home();
        self.sync_playback_scope();
    }

    /// Tear down the playback controller when its screen is no longer on
    /// top, and create a fresh one when a playlist screen becomes current.
    fn sync_playback_scope(&mut self) {
        let route = self.router.current().clone();
        let depth = self.router.depth();

        let still_current = self
            .playback
            .as_ref()
            .is_some_and(|p| p.route == route && p.depth == depth);
        if still_current {
            return;
        }

        if let Some(mut previous) = self.playback.take() {
            previous.controller.teardown();
            // A notice belongs to the visit that raised it.
            self.ui_state.clear_status();
            tracing::debug!(route = ?previous.route, "Playback scope closed");
        }

        if let Route::Playlist(_) = route {
            tracing::debug!(route = ?route, "Playback scope opened");
            self.playback = Some(ScreenPlayback {
                depth,
                route,
                controller: PlaybackController::new(self.output.clone()),
            });
        }
    }

    // ========================================================================
    // Selection & scrolling
    // ========================================================================

    pub fn move_selection(&mut self, down: bool) {
        let count = match self.router.current().clone() {
            Route::Home => home_playlists(&self.catalog).len(),
            Route::Playlist(id) => match self.catalog.get_by_id(&id) {
                Ok(playlist) => playlist.tracks.len(),
                Err(_) => 0,
            },
            Route::Search | Route::Library => 0,
        };
        if count == 0 {
            return;
        }

        let is_playlist = !self.router.current().is_primary();
        let header_height = self.config.header_height;
        let viewport = self.ui_state.viewport_rows;
        let state = self.router.current_state_mut();

        state.selected = if down {
            (state.selected + 1).min(count - 1)
        } else {
            state.selected.saturating_sub(1)
        };

        if is_playlist {
            state.scroll_offset = if state.selected == 0 {
                0
            } else {
                let row = track_row(header_height, state.selected);
                let bottom = follow_row(state.scroll_offset, row + TRACK_ROW_HEIGHT - 1, viewport);
                follow_row(bottom, row, viewport)
            };
        }
    }

    pub fn set_viewport_rows(&mut self, rows: u16) {
        self.ui_state.viewport_rows = rows;
    }

    // ========================================================================
    // Playback
    // ========================================================================

    /// Activate the selected track of the current playlist screen.
    pub fn activate_selected_track(&mut self) -> Option<Activation> {
        let selected = self.router.current_entry().state.selected;
        self.activate_track_at(selected)
    }

    /// Header Play button: activate the first track.
    pub fn activate_first_track(&mut self) -> Option<Activation> {
        self.activate_track_at(0)
    }

    fn activate_track_at(&mut self, index: usize) -> Option<Activation> {
        let Route::Playlist(id) = self.router.current() else {
            return None;
        };
        let catalog = self.catalog.clone();
        let track = catalog.get_by_id(id).ok()?.track(index)?;
        let scope = self.playback.as_mut()?;

        let outcome = scope.controller.activate(track);
        match &outcome {
            Activation::Unplayable | Activation::Failed(_) => {
                self.ui_state.set_status(format!("Could not play {}", track.title));
            }
            _ => self.ui_state.clear_status(),
        }
        Some(outcome)
    }

    pub fn playback_info(&self) -> PlaybackInfo {
        self.playback
            .as_ref()
            .map(|p| p.controller.info())
            .unwrap_or_default()
    }

    // ========================================================================
    // UI state
    // ========================================================================

    #[cfg(test)]
    pub fn ui_state(&self) -> &UiState {
        &self.ui_state
    }

    pub fn has_status(&self) -> bool {
        self.ui_state.status_message.is_some()
    }

    pub fn clear_status(&mut self) {
        self.ui_state.clear_status();
    }

    pub fn auto_clear_old_status(&mut self) {
        let timeout = Duration::from_secs(self.config.error_timeout_secs);
        self.ui_state.clear_status_older_than(timeout);
    }

    pub fn toggle_help_popup(&mut self) {
        self.ui_state.show_help_popup = !self.ui_state.show_help_popup;
    }

    pub fn hide_help_popup(&mut self) {
        self.ui_state.show_help_popup = false;
    }

    pub fn is_help_popup_open(&self) -> bool {
        self.ui_state.show_help_popup
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Stop playback and ask the main loop to exit.
    pub fn quit(&mut self) {
        if let Some(mut scope) = self.playback.take() {
            scope.controller.teardown();
        }
        self.should_quit = true;
    }

    pub async fn view_state(&self) -> ViewState {
        let entry = self.router.current_entry().clone();
        let header_height = self.config.header_height;
        ViewState {
            catalog: self.catalog.clone(),
            header: HeaderAppearance::from_offset(entry.state.scroll_offset, header_height),
            entry,
            tab_bar_visible: self.router.is_tab_bar_visible(),
            playback: self.playback_info(),
            ui: self.ui_state.clone(),
            covers: self.covers.snapshot().await,
            header_height,
        }
    }
}

/// Home order: featured carousel first, then the local library list.
pub fn home_playlists(catalog: &Catalog) -> Vec<&Playlist> {
    catalog.featured().chain(catalog.local()).collect()
}

/// First content row of track `index` on a playlist screen.
pub fn track_row(header_height: u16, index: usize) -> u16 {
    let index = u16::try_from(index).unwrap_or(u16::MAX);
    header_height
        .saturating_add(SECTION_ROWS)
        .saturating_add(index.saturating_mul(TRACK_ROW_HEIGHT))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::fake::FakeOutput;
    use crate::model::fake_data;
    use crate::model::playback::PlaybackState;

    fn model() -> (AppModel, FakeOutput) {
        let output = FakeOutput::default();
        let model = AppModel::new(fake_data::catalog(), AppConfig::default(), Arc::new(output.clone()));
        (model, output)
    }

    #[test]
    fn home_order_puts_featured_first() {
        let catalog = fake_data::catalog();
        let ids: Vec<&str> = home_playlists(&catalog).iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids[0], "todays_top_hits");
        assert_eq!(ids[3], "deja_vu_playlist");
    }

    #[test]
    fn leaving_playlist_releases_audio() {
        let (mut model, output) = model();
        model.open_playlist("deja_vu_playlist");
        model.activate_selected_track();
        assert_eq!(output.live_handles(), 1);

        assert!(model.back());
        assert_eq!(output.live_handles(), 0);
        assert_eq!(model.playback_info().state, PlaybackState::Idle);
    }

    #[test]
    fn go_home_releases_audio() {
        let (mut model, output) = model();
        model.open_playlist("gas_gas_gas_playlist");
        model.activate_first_track();
        model.go_home();
        assert_eq!(model.current_route(), &Route::Home);
        assert_eq!(output.live_handles(), 0);
    }

    #[test]
    fn reopening_a_playlist_starts_idle() {
        let (mut model, _output) = model();
        model.open_playlist("deja_vu_playlist");
        model.activate_first_track();
        model.back();
        model.open_playlist("deja_vu_playlist");
        assert_eq!(model.playback_info().state, PlaybackState::Idle);
    }

    #[test]
    fn status_notice_does_not_outlive_its_screen() {
        let (mut model, _output) = model();
        model.open_playlist("viva_latino");
        model.activate_selected_track();
        assert!(model.has_status());

        model.back();
        model.open_playlist("deja_vu_playlist");
        assert_eq!(model.playback_info().state, PlaybackState::Idle);
        assert!(model.ui_state().status_message.is_none());
    }

    #[test]
    fn tabs_ignored_on_playlist_screen() {
        let (mut model, _output) = model();
        model.open_playlist("rapcaviar");
        assert!(!model.select_tab(Route::Search));
        assert_eq!(model.current_route(), &Route::Playlist("rapcaviar".to_string()));
    }

    #[test]
    fn cycle_tab_wraps() {
        let (mut model, _output) = model();
        model.cycle_tab(false);
        assert_eq!(model.current_route(), &Route::Library);
        model.cycle_tab(true);
        assert_eq!(model.current_route(), &Route::Home);
    }

    #[test]
    fn unplayable_track_sets_status() {
        let (mut model, _output) = model();
        model.open_playlist("viva_latino");
        assert_eq!(model.activate_selected_track(), Some(Activation::Unplayable));
        assert_eq!(model.ui_state().status_message.as_deref(), Some("Could not play Morena"));
    }

    #[test]
    fn unknown_playlist_has_nothing_to_play() {
        let (mut model, _output) = model();
        model.open_playlist("does_not_exist");
        assert_eq!(model.activate_selected_track(), None);
        model.move_selection(true);
        assert_eq!(model.router().current_entry().state.selected, 0);
    }

    #[test]
    fn selection_scrolls_playlist() {
        let (mut model, _output) = model();
        model.set_viewport_rows(8);
        model.open_playlist("todays_top_hits");
        for _ in 0..7 {
            model.move_selection(true);
        }
        let state = model.router().current_entry().state;
        assert_eq!(state.selected, 7);
        // Track 7 starts at row 10 + 2 + 14 = 26 and ends at 27.
        assert_eq!(state.scroll_offset, 27 + 1 - 8);

        for _ in 0..7 {
            model.move_selection(false);
        }
        assert_eq!(model.router().current_entry().state.scroll_offset, 0);
    }

    #[test]
    fn open_selected_playlist_uses_home_order() {
        let (mut model, _output) = model();
        model.move_selection(true);
        assert_eq!(model.open_selected_playlist().as_deref(), Some("viva_latino"));
        assert!(!model.router().is_tab_bar_visible());
    }

    #[test]
    fn quit_tears_down_playback() {
        let (mut model, output) = model();
        model.open_playlist("deja_vu_playlist");
        model.activate_first_track();
        model.quit();
        assert!(model.should_quit());
        assert_eq!(output.live_handles(), 0);
    }

    #[tokio::test]
    async fn view_state_reflects_scroll() {
        let (mut model, _output) = model();
        model.set_viewport_rows(6);
        model.open_playlist("rapcaviar");
        for _ in 0..4 {
            model.move_selection(true);
        }
        let view = model.view_state().await;
        assert!(!view.tab_bar_visible);
        assert!(view.header.title_visible);
        assert_eq!(view.playlist().unwrap().unwrap().title, "RapCaviar");
    }
}
