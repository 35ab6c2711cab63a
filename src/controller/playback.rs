//! Playback control methods

use crate::model::Activation;
use super::AppController;

impl AppController {
    pub async fn activate_selected_track(&self) {
        let mut model = self.model.lock().await;
        let outcome = model.activate_selected_track();
        log_activation(outcome);
    }

    /// Header Play/Pause button
    pub async fn play_header(&self) {
        let mut model = self.model.lock().await;
        let outcome = model.activate_first_track();
        log_activation(outcome);
    }
}

fn log_activation(outcome: Option<Activation>) {
    match outcome {
        Some(Activation::Failed(reason)) => tracing::warn!(reason = %reason, "Playback fell back to idle"),
        Some(Activation::Unplayable) => tracing::debug!("Selected track has no local audio"),
        Some(action) => tracing::debug!(action = ?action, "Playback updated"),
        None => {}
    }
}
