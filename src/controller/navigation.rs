//! Navigation-related controller methods (tabs, playlists, back, home)

use crate::model::Route;
use super::AppController;

impl AppController {
    pub async fn select_tab(&self, route: Route) {
        let mut model = self.model.lock().await;
        if !model.select_tab(route.clone()) {
            tracing::trace!(route = ?route, "Tab selection ignored");
        }
    }

    pub async fn cycle_tab(&self, forward: bool) {
        let mut model = self.model.lock().await;
        model.cycle_tab(forward);
    }

    pub async fn open_selected_playlist(&self) {
        let mut model = self.model.lock().await;
        if let Some(id) = model.open_selected_playlist() {
            tracing::info!(playlist_id = %id, "Opened playlist");
        }
    }

    pub async fn navigate_back(&self) {
        let mut model = self.model.lock().await;
        if !model.back() {
            tracing::trace!("Already at the start destination");
        }
    }

    pub async fn go_home(&self) {
        let mut model = self.model.lock().await;
        model.go_home();
    }
}
