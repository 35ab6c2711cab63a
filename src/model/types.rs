//! UI state shared across screens

use std::time::{Duration, Instant};

/// UI state for the application
#[derive(Clone, Debug, Default)]
pub struct UiState {
    /// Transient notice shown in the now-playing bar ("Could not play ...").
    pub status_message: Option<String>,
    pub status_timestamp: Option<Instant>,
    pub show_help_popup: bool,
    /// Rows available to the playlist content area.
    pub viewport_rows: u16,
}

impl UiState {
    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
        self.status_timestamp = Some(Instant::now());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
        self.status_timestamp = None;
    }

    pub fn clear_status_older_than(&mut self, timeout: Duration) {
        if let Some(timestamp) = self.status_timestamp {
            if timestamp.elapsed() > timeout {
                self.clear_status();
            }
        }
    }
}
