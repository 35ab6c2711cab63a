//! Single-track playback state machine
//!
//! A `PlaybackController` owns at most one audio handle. It lives exactly as
//! long as one visit to a playlist screen; dropping it releases the handle.

use std::sync::Arc;
use std::time::Duration;

use crate::audio::{AudioHandle, AudioOutput};
use crate::error::AudioError;
use crate::log_audio_result;

use super::catalog::Track;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum PlaybackState {
    #[default]
    Idle,
    Playing(String),
    Paused(String),
}

impl PlaybackState {
    pub fn active_track_id(&self) -> Option<&str> {
        match self {
            PlaybackState::Idle => None,
            PlaybackState::Playing(id) | PlaybackState::Paused(id) => Some(id),
        }
    }

    pub fn is_playing(&self) -> bool {
        matches!(self, PlaybackState::Playing(_))
    }

    /// True when `track_id` is the active track and audibly playing.
    pub fn is_playing_track(&self, track_id: &str) -> bool {
        matches!(self, PlaybackState::Playing(id) if id == track_id)
    }
}

/// What an `activate` call did, for UI feedback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Activation {
    Started,
    Paused,
    Resumed,
    /// The track has no local audio; any previous handle was released.
    Unplayable,
    /// Acquisition failed; any previous handle was released.
    Failed(String),
}

/// Metadata about the active track, for the now-playing bar
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackMetadata {
    pub id: String,
    pub title: String,
    pub artists: String,
    pub duration: Duration,
}

impl From<&Track> for TrackMetadata {
    fn from(track: &Track) -> Self {
        Self {
            id: track.id.clone(),
            title: track.title.clone(),
            artists: track.artists.clone(),
            duration: track.duration,
        }
    }
}

/// Snapshot of playback for rendering
#[derive(Clone, Debug, Default)]
pub struct PlaybackInfo {
    pub state: PlaybackState,
    pub track: Option<TrackMetadata>,
    pub progress: Duration,
}

impl PlaybackInfo {
    pub fn is_playing(&self) -> bool {
        self.state.is_playing()
    }
}

pub struct PlaybackController {
    output: Arc<dyn AudioOutput>,
    state: PlaybackState,
    handle: Option<Box<dyn AudioHandle>>,
    track: Option<TrackMetadata>,
}

impl PlaybackController {
    pub fn new(output: Arc<dyn AudioOutput>) -> Self {
        Self {
            output,
            state: PlaybackState::Idle,
            handle: None,
            track: None,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    #[cfg(test)]
    pub fn has_handle(&self) -> bool {
        self.handle.is_some()
    }

    /// Toggle the active track, or switch to a new one.
    pub fn activate(&mut self, track: &Track) -> Activation {
        if self.state.active_track_id() == Some(track.id.as_str()) {
            if let Some(handle) = self.handle.as_mut() {
                return match self.state {
                    PlaybackState::Playing(_) => {
                        handle.pause();
                        self.state = PlaybackState::Paused(track.id.clone());
                        tracing::debug!(track_id = %track.id, "Paused");
                        Activation::Paused
                    }
                    _ => {
                        handle.start();
                        self.state = PlaybackState::Playing(track.id.clone());
                        tracing::debug!(track_id = %track.id, "Resumed");
                        Activation::Resumed
                    }
                };
            }
        }

        // Switching tracks: the old handle goes first, whatever happens next.
        self.release_handle();
        self.state = PlaybackState::Idle;
        self.track = None;

        let Some(resource) = track.audio.as_deref() else {
            let err = AudioError::MissingResource { track_id: track.id.clone() };
            tracing::info!(track_id = %track.id, error = %err, "Track is not playable");
            return Activation::Unplayable;
        };

        let result = self.output.create_and_start(resource);
        log_audio_result!(track.id, result);

        match result {
            Ok(handle) => {
                self.handle = Some(handle);
                self.state = PlaybackState::Playing(track.id.clone());
                self.track = Some(TrackMetadata::from(track));
                Activation::Started
            }
            Err(e) => Activation::Failed(e.to_string()),
        }
    }

    /// Release any held handle and return to Idle. Safe to call repeatedly.
    pub fn teardown(&mut self) {
        if self.handle.is_some() {
            tracing::debug!(state = ?self.state, "Tearing down playback");
        }
        self.release_handle();
        self.state = PlaybackState::Idle;
        self.track = None;
    }

    pub fn info(&self) -> PlaybackInfo {
        let progress = match (&self.handle, &self.track) {
            (Some(handle), Some(track)) => handle.position().min(track.duration),
            _ => Duration::ZERO,
        };
        PlaybackInfo {
            state: self.state.clone(),
            track: self.track.clone(),
            progress,
        }
    }

    fn release_handle(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.release();
        }
    }
}

impl Drop for PlaybackController {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::fake::FakeOutput;
    use crate::model::fake_data;
    use std::sync::atomic::Ordering;

    fn controller() -> (PlaybackController, FakeOutput) {
        let output = FakeOutput::default();
        (PlaybackController::new(Arc::new(output.clone())), output)
    }

    fn track(playlist: &str) -> Track {
        fake_data::catalog().get_by_id(playlist).unwrap().tracks[0].clone()
    }

    #[test]
    fn activate_from_idle_starts_playing() {
        let (mut playback, output) = controller();
        let deja_vu = track("deja_vu_playlist");

        assert_eq!(playback.activate(&deja_vu), Activation::Started);
        assert_eq!(playback.state(), &PlaybackState::Playing("deja_vu_track".to_string()));
        assert_eq!(output.live_handles(), 1);
    }

    #[test]
    fn repeated_activation_toggles_pause_and_resume() {
        let (mut playback, output) = controller();
        let deja_vu = track("deja_vu_playlist");

        playback.activate(&deja_vu);
        assert_eq!(playback.activate(&deja_vu), Activation::Paused);
        assert_eq!(playback.state(), &PlaybackState::Paused("deja_vu_track".to_string()));

        assert_eq!(playback.activate(&deja_vu), Activation::Resumed);
        assert_eq!(playback.state(), &PlaybackState::Playing("deja_vu_track".to_string()));

        // Same handle the whole time.
        assert_eq!(output.created.load(Ordering::SeqCst), 1);
        assert_eq!(output.paused.load(Ordering::SeqCst), 1);
        assert_eq!(output.started.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn switching_tracks_never_holds_two_handles() {
        let (mut playback, output) = controller();
        let deja_vu = track("deja_vu_playlist");
        let gas = track("gas_gas_gas_playlist");

        for t in [&deja_vu, &gas, &deja_vu, &deja_vu, &gas, &gas, &deja_vu] {
            playback.activate(t);
            assert!(output.live_handles() <= 1);
        }
        assert_eq!(output.live_handles(), 1);
    }

    #[test]
    fn unplayable_track_stops_the_current_one() {
        let (mut playback, output) = controller();
        let deja_vu = track("deja_vu_playlist");
        let busy_woman = track("todays_top_hits");

        playback.activate(&deja_vu);
        assert_eq!(playback.activate(&busy_woman), Activation::Unplayable);
        assert_eq!(playback.state(), &PlaybackState::Idle);
        assert_eq!(output.live_handles(), 0);
        assert!(!playback.has_handle());
    }

    #[test]
    fn failed_acquisition_falls_back_to_idle_without_leaking() {
        let (mut playback, output) = controller();
        let deja_vu = track("deja_vu_playlist");
        let gas = track("gas_gas_gas_playlist");
        output.break_resource("gas_gas_gas");

        playback.activate(&deja_vu);
        let outcome = playback.activate(&gas);
        assert!(matches!(outcome, Activation::Failed(_)));
        assert_eq!(playback.state(), &PlaybackState::Idle);
        assert_eq!(output.live_handles(), 0);

        // A later retry on the same track goes through acquisition again.
        assert!(matches!(playback.activate(&gas), Activation::Failed(_)));
    }

    #[test]
    fn teardown_is_idempotent() {
        let (mut playback, output) = controller();
        playback.teardown();
        assert_eq!(playback.state(), &PlaybackState::Idle);

        playback.activate(&track("deja_vu_playlist"));
        playback.teardown();
        playback.teardown();
        assert_eq!(playback.state(), &PlaybackState::Idle);
        assert_eq!(output.live_handles(), 0);
    }

    #[test]
    fn teardown_from_paused_releases_handle() {
        let (mut playback, output) = controller();
        let deja_vu = track("deja_vu_playlist");
        playback.activate(&deja_vu);
        playback.activate(&deja_vu);

        playback.teardown();
        assert_eq!(output.live_handles(), 0);
        assert!(playback.info().track.is_none());
    }

    #[test]
    fn dropping_the_controller_releases_the_handle() {
        let (mut playback, output) = controller();
        playback.activate(&track("gas_gas_gas_playlist"));
        assert_eq!(output.live_handles(), 1);

        drop(playback);
        assert_eq!(output.live_handles(), 0);
    }

    #[test]
    fn info_reports_active_track() {
        let (mut playback, _output) = controller();
        playback.activate(&track("deja_vu_playlist"));

        let info = playback.info();
        assert!(info.is_playing());
        let meta = info.track.unwrap();
        assert_eq!(meta.title, "DEJA VU");
        assert_eq!(meta.duration, Duration::from_secs(262));
    }
}
