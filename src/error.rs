//! Domain error types

use std::path::PathBuf;

use thiserror::Error;

/// Catalog lookup errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Playlist not found: {id}")]
    NotFound { id: String },
}

/// Errors raised while acquiring a local audio handle.
#[derive(Error, Debug)]
pub enum AudioError {
    /// The track carries no local audio reference.
    #[error("Track {track_id} has no playable audio")]
    MissingResource { track_id: String },
    #[error("Cannot open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Cannot decode {path}: {reason}")]
    Decode { path: PathBuf, reason: String },
    #[error("No audio output available")]
    NoOutput,
}

/// Configuration loading errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid config value: {reason}")]
    Invalid { reason: String },
}
