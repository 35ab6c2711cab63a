//! Read-only playlist catalog

use std::time::Duration;

use crate::error::CatalogError;

/// Where a cover image comes from. At most one source is meaningful.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Cover {
    Remote(String),
    /// Bundled resource name, resolved under `assets/covers/`.
    Local(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Track {
    pub id: String,
    pub title: String,
    pub artists: String,
    pub duration: Duration,
    /// Bundled audio resource name, resolved under `assets/audio/`.
    pub audio: Option<String>,
}

impl Track {
    pub fn new(id: &str, title: &str, artists: &str, duration: Duration) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            artists: artists.to_string(),
            duration,
            audio: None,
        }
    }

    pub fn with_audio(mut self, resource: &str) -> Self {
        self.audio = Some(resource.to_string());
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Playlist {
    pub id: String,
    pub title: String,
    pub curator: String,
    pub saves: u64,
    pub description: String,
    pub cover: Option<Cover>,
    pub tracks: Vec<Track>,
}

impl Playlist {
    /// Sum of the track durations, recomputed on every call.
    pub fn total_duration(&self) -> Duration {
        self.tracks.iter().map(|t| t.duration).sum()
    }

    pub fn first_track(&self) -> Option<&Track> {
        self.tracks.first()
    }

    pub fn track(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    pub fn has_local_cover(&self) -> bool {
        matches!(self.cover, Some(Cover::Local(_)))
    }
}

/// Fixed set of playlists, built once and never mutated.
#[derive(Debug)]
pub struct Catalog {
    playlists: Vec<Playlist>,
}

impl Catalog {
    pub fn new(playlists: Vec<Playlist>) -> Self {
        Self { playlists }
    }

    /// Playlists in insertion order.
    pub fn list(&self) -> &[Playlist] {
        &self.playlists
    }

    pub fn get_by_id(&self, id: &str) -> Result<&Playlist, CatalogError> {
        self.playlists
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| CatalogError::NotFound { id: id.to_string() })
    }

    /// Playlists with a remote cover, shown in the Home carousel.
    pub fn featured(&self) -> impl Iterator<Item = &Playlist> {
        self.playlists.iter().filter(|p| !p.has_local_cover())
    }

    /// Playlists with a bundled cover, shown in the Home library list.
    pub fn local(&self) -> impl Iterator<Item = &Playlist> {
        self.playlists.iter().filter(|p| p.has_local_cover())
    }
}
