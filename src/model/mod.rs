//! Model module - Application state and data types
//!
//! - `catalog`: Track / Playlist entities and the read-only catalog
//! - `fake_data`: the compiled-in catalog contents
//! - `playback`: single-track playback state machine
//! - `navigation`: routes, back-stack and tab semantics
//! - `scroll`: scroll-linked header collapse
//! - `covers`: cover artwork cache
//! - `types`: shared UI state
//! - `app_model`: main application model tying the above together

mod types;
mod app_model;
pub mod catalog;
pub mod covers;
pub mod fake_data;
pub mod navigation;
pub mod playback;
pub mod scroll;

pub use types::UiState;

pub use catalog::{Playlist, Track};
pub use covers::{ArtPixels, CoverState, COVER_COLS, COVER_ROWS};
pub use navigation::Route;
pub use playback::{Activation, PlaybackInfo};
pub use scroll::HeaderAppearance;

pub use app_model::{AppModel, ViewState, TRACK_ROW_HEIGHT};
