//! Local audio playback backend
//!
//! `AudioOutput` creates started handles for bundled audio resources;
//! `AudioHandle` is one live playback session. The rodio implementation
//! decodes files from the assets directory into a sink on the shared mixer.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::time::Duration;

use rodio::mixer::Mixer;
use rodio::{Decoder, Sink};

use crate::error::AudioError;

/// One active audio session.
pub trait AudioHandle: Send {
    fn pause(&mut self);
    fn start(&mut self);
    /// Playback position within the resource.
    fn position(&self) -> Duration;
    /// Stop playback and free the session.
    fn release(self: Box<Self>);
}

/// Platform audio collaborator.
pub trait AudioOutput: Send + Sync {
    /// Open `resource` and start playing it from position zero.
    fn create_and_start(&self, resource: &str) -> Result<Box<dyn AudioHandle>, AudioError>;
}

pub struct RodioOutput {
    mixer: Option<Mixer>,
    audio_dir: PathBuf,
    volume: f32,
}

impl RodioOutput {
    /// `mixer` is `None` when no output device could be opened; every
    /// acquisition then fails with `AudioError::NoOutput`.
    pub fn new(mixer: Option<Mixer>, audio_dir: PathBuf, volume: f32) -> Self {
        Self { mixer, audio_dir, volume }
    }

    fn resource_path(&self, resource: &str) -> PathBuf {
        self.audio_dir.join(format!("{resource}.mp3"))
    }
}

impl AudioOutput for RodioOutput {
    fn create_and_start(&self, resource: &str) -> Result<Box<dyn AudioHandle>, AudioError> {
        let mixer = self.mixer.as_ref().ok_or(AudioError::NoOutput)?;
        let path = self.resource_path(resource);

        let file = File::open(&path).map_err(|source| AudioError::Open {
            path: path.clone(),
            source,
        })?;
        let source = Decoder::new(BufReader::new(file)).map_err(|e| AudioError::Decode {
            path: path.clone(),
            reason: e.to_string(),
        })?;

        let sink = Sink::connect_new(mixer);
        sink.set_volume(self.volume);
        sink.append(source);
        sink.play();

        tracing::debug!(path = %path.display(), "Sink started");
        Ok(Box::new(RodioHandle { sink }))
    }
}

struct RodioHandle {
    sink: Sink,
}

impl AudioHandle for RodioHandle {
    fn pause(&mut self) {
        self.sink.pause();
    }

    fn start(&mut self) {
        self.sink.play();
    }

    fn position(&self) -> Duration {
        self.sink.get_pos()
    }

    fn release(self: Box<Self>) {
        self.sink.stop();
    }
}
