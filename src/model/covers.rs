//! Cover artwork cache
//!
//! Covers resolve off the UI thread. Each playlist cover is `Loading` until
//! its bundled image has been decoded into a half-block pixel grid, or
//! `Error` when it cannot be (remote covers are never fetched).

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use image::imageops::FilterType;
use tokio::sync::RwLock;

use super::catalog::{Cover, Playlist};

/// Cover grid size in terminal cells. Each cell holds two vertical pixels.
pub const COVER_COLS: u16 = 20;
pub const COVER_ROWS: u16 = 10;

/// Rows of (R, G, B) pixels, two per terminal row
pub type ArtPixels = Vec<Vec<(u8, u8, u8)>>;

#[derive(Clone, Debug, Default, PartialEq)]
pub enum CoverState {
    #[default]
    Loading,
    Error,
    Loaded(Arc<ArtPixels>),
}

#[derive(Clone)]
pub struct CoverCache {
    states: Arc<RwLock<HashMap<String, CoverState>>>,
    covers_dir: PathBuf,
}

impl CoverCache {
    pub fn new(covers_dir: PathBuf) -> Self {
        Self {
            states: Arc::new(RwLock::new(HashMap::new())),
            covers_dir,
        }
    }

    #[cfg(test)]
    pub async fn state(&self, playlist_id: &str) -> CoverState {
        self.states
            .read()
            .await
            .get(playlist_id)
            .cloned()
            .unwrap_or_default()
    }

    pub async fn snapshot(&self) -> HashMap<String, CoverState> {
        self.states.read().await.clone()
    }

    /// Resolve every playlist cover. Decoding runs on the blocking pool.
    pub async fn preload(&self, playlists: &[Playlist]) {
        let mut jobs = Vec::new();

        for playlist in playlists {
            match &playlist.cover {
                Some(Cover::Local(resource)) => {
                    self.set(&playlist.id, CoverState::Loading).await;
                    let path = self.covers_dir.join(format!("{resource}.jpg"));
                    let id = playlist.id.clone();
                    let cache = self.clone();
                    jobs.push(async move {
                        let decoded = tokio::task::spawn_blocking(move || decode_cover(&path)).await;
                        let state = match decoded {
                            Ok(Ok(pixels)) => CoverState::Loaded(Arc::new(pixels)),
                            Ok(Err(e)) => {
                                tracing::warn!(playlist_id = %id, error = %e, "Cover decode failed");
                                CoverState::Error
                            }
                            Err(e) => {
                                tracing::error!(playlist_id = %id, error = %e, "Cover task panicked");
                                CoverState::Error
                            }
                        };
                        cache.set(&id, state).await;
                    });
                }
                Some(Cover::Remote(url)) => {
                    tracing::debug!(playlist_id = %playlist.id, url = %url, "Remote covers are not fetched");
                    self.set(&playlist.id, CoverState::Error).await;
                }
                None => self.set(&playlist.id, CoverState::Error).await,
            }
        }

        futures::future::join_all(jobs).await;
        tracing::info!(count = playlists.len(), "Covers resolved");
    }

    async fn set(&self, playlist_id: &str, state: CoverState) {
        self.states.write().await.insert(playlist_id.to_string(), state);
    }
}

/// Decode and center-crop an image into a `COVER_COLS` x `COVER_ROWS` grid.
pub fn decode_cover(path: &Path) -> Result<ArtPixels, image::ImageError> {
    let img = image::open(path)?;
    let px_w = u32::from(COVER_COLS);
    let px_h = u32::from(COVER_ROWS) * 2;
    let rgb = img.resize_to_fill(px_w, px_h, FilterType::Triangle).to_rgb8();

    let pixels = (0..px_h)
        .map(|y| {
            (0..px_w)
                .map(|x| {
                    let p = rgb.get_pixel(x, y);
                    (p[0], p[1], p[2])
                })
                .collect()
        })
        .collect();
    Ok(pixels)
}
