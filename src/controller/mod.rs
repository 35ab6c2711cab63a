//! Controller module - Application logic and event handling
//!
//! - `input`: Key event handling
//! - `navigation`: Tab, playlist and back/home navigation
//! - `playback`: Track activation

mod input;
mod navigation;
mod playback;

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::model::AppModel;

#[derive(Clone)]
pub struct AppController {
    pub(crate) model: Arc<Mutex<AppModel>>,
}

impl AppController {
    pub fn new(model: Arc<Mutex<AppModel>>) -> Self {
        Self { model }
    }

    /// Resolve every catalog cover in the background.
    pub async fn load_covers(&self) {
        let (catalog, covers) = {
            let model = self.model.lock().await;
            (model.catalog(), model.covers())
        };
        tokio::spawn(async move {
            covers.preload(catalog.list()).await;
        });
    }
}
