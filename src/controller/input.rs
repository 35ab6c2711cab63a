//! Key event handling

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::model::Route;
use super::AppController;

impl AppController {
    pub async fn handle_key_event(&self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        let mut model = self.model.lock().await;

        // Ctrl+C always quits
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            model.quit();
            return Ok(());
        }

        // Help popup swallows everything but its close keys
        if model.is_help_popup_open() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('h') | KeyCode::Char('H')) {
                model.hide_help_popup();
            }
            return Ok(());
        }

        // Esc dismisses a status notice before it navigates
        if key.code == KeyCode::Esc && model.has_status() {
            model.clear_status();
            return Ok(());
        }

        let route = model.current_route().clone();
        drop(model);

        // Playlist screen
        if let Route::Playlist(_) = route {
            match key.code {
                KeyCode::Enter => {
                    self.activate_selected_track().await;
                    return Ok(());
                }
                KeyCode::Char(' ') | KeyCode::Char('p') | KeyCode::Char('P') => {
                    self.play_header().await;
                    return Ok(());
                }
                KeyCode::Char('g') | KeyCode::Char('G') => {
                    self.go_home().await;
                    return Ok(());
                }
                _ => {}
            }
        }

        // Tab bar, only shown on primary screens
        if route.is_primary() {
            match key.code {
                KeyCode::Char('1') => {
                    self.select_tab(Route::Home).await;
                    return Ok(());
                }
                KeyCode::Char('2') => {
                    self.select_tab(Route::Search).await;
                    return Ok(());
                }
                KeyCode::Char('3') => {
                    self.select_tab(Route::Library).await;
                    return Ok(());
                }
                KeyCode::Tab => {
                    let forward = !key.modifiers.contains(KeyModifiers::SHIFT);
                    self.cycle_tab(forward).await;
                    return Ok(());
                }
                KeyCode::BackTab => {
                    self.cycle_tab(false).await;
                    return Ok(());
                }
                KeyCode::Enter if route == Route::Home => {
                    self.open_selected_playlist().await;
                    return Ok(());
                }
                _ => {}
            }
        }

        // Global keybindings
        let mut model = self.model.lock().await;
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => model.quit(),
            KeyCode::Up | KeyCode::Char('k') => model.move_selection(false),
            KeyCode::Down | KeyCode::Char('j') => model.move_selection(true),
            KeyCode::Esc | KeyCode::Backspace => {
                drop(model);
                self.navigate_back().await;
            }
            KeyCode::Char('h') | KeyCode::Char('H') => model.toggle_help_popup(),
            _ => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use tokio::sync::Mutex;

    use crate::audio::fake::FakeOutput;
    use crate::config::AppConfig;
    use crate::controller::AppController;
    use crate::model::playback::PlaybackState;
    use crate::model::{fake_data, AppModel, Route};

    fn controller() -> (AppController, Arc<Mutex<AppModel>>, FakeOutput) {
        let output = FakeOutput::default();
        let model = Arc::new(Mutex::new(AppModel::new(
            fake_data::catalog(),
            AppConfig::default(),
            Arc::new(output.clone()),
        )));
        (AppController::new(model.clone()), model, output)
    }

    async fn press(controller: &AppController, code: KeyCode) {
        controller
            .handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
            .await
            .unwrap();
    }

    async fn route(model: &Arc<Mutex<AppModel>>) -> Route {
        model.lock().await.current_route().clone()
    }

    #[tokio::test]
    async fn number_keys_select_tabs() {
        let (controller, model, _) = controller();
        press(&controller, KeyCode::Char('2')).await;
        assert_eq!(route(&model).await, Route::Search);
        press(&controller, KeyCode::Char('3')).await;
        assert_eq!(route(&model).await, Route::Library);
        assert_eq!(model.lock().await.router().depth(), 2);
        press(&controller, KeyCode::Char('1')).await;
        assert_eq!(route(&model).await, Route::Home);
    }

    #[tokio::test]
    async fn deja_vu_scenario() {
        let (controller, model, output) = controller();

        // Featured playlists come first; Deja Vu is the fourth Home item.
        for _ in 0..3 {
            press(&controller, KeyCode::Down).await;
        }
        press(&controller, KeyCode::Enter).await;
        assert_eq!(route(&model).await, Route::Playlist("deja_vu_playlist".to_string()));

        press(&controller, KeyCode::Enter).await;
        assert_eq!(
            model.lock().await.playback_info().state,
            PlaybackState::Playing("deja_vu_track".to_string())
        );

        press(&controller, KeyCode::Enter).await;
        assert_eq!(
            model.lock().await.playback_info().state,
            PlaybackState::Paused("deja_vu_track".to_string())
        );

        press(&controller, KeyCode::Char('g')).await;
        assert_eq!(route(&model).await, Route::Home);
        assert_eq!(output.live_handles(), 0);
    }

    #[tokio::test]
    async fn tab_keys_do_nothing_on_playlist_screen() {
        let (controller, model, _) = controller();
        press(&controller, KeyCode::Enter).await;
        let opened = route(&model).await;
        assert!(!opened.is_primary());

        press(&controller, KeyCode::Char('2')).await;
        assert_eq!(route(&model).await, opened);

        press(&controller, KeyCode::Backspace).await;
        assert_eq!(route(&model).await, Route::Home);
    }

    #[tokio::test]
    async fn esc_clears_status_before_going_back() {
        let (controller, model, _) = controller();
        press(&controller, KeyCode::Enter).await;
        press(&controller, KeyCode::Char(' ')).await;
        assert!(model.lock().await.has_status());

        press(&controller, KeyCode::Esc).await;
        assert!(!model.lock().await.has_status());
        assert!(!route(&model).await.is_primary());

        press(&controller, KeyCode::Esc).await;
        assert_eq!(route(&model).await, Route::Home);
    }

    #[tokio::test]
    async fn help_popup_blocks_navigation() {
        let (controller, model, _) = controller();
        press(&controller, KeyCode::Char('h')).await;
        press(&controller, KeyCode::Char('2')).await;
        assert_eq!(route(&model).await, Route::Home);

        press(&controller, KeyCode::Esc).await;
        assert!(!model.lock().await.is_help_popup_open());
    }

    #[tokio::test]
    async fn quit_key_sets_should_quit() {
        let (controller, model, _) = controller();
        press(&controller, KeyCode::Char('q')).await;
        assert!(model.lock().await.should_quit());
    }
}
