//! Application state shared across handlers.

use clipstore_core::Config;
use clipstore_db::VideoRepository;
use clipstore_storage::Storage;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub videos: Arc<dyn VideoRepository>,
    pub storage: Arc<dyn Storage>,
}

impl AppState {
    pub fn new(
        config: Config,
        videos: Arc<dyn VideoRepository>,
        storage: Arc<dyn Storage>,
    ) -> Self {
        Self {
            config,
            videos,
            storage,
        }
    }
}
