//! In-memory VideoRepository implementation for testing.

use async_trait::async_trait;
use clipstore_core::models::Video;
use clipstore_core::AppError;
use clipstore_db::VideoRepository;
use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

/// Repository that keeps videos in a HashMap. `failing()` builds one whose
/// `save` always rejects, for exercising the abort-before-storage path.
pub struct InMemoryVideoRepository {
    videos: Mutex<HashMap<Uuid, Video>>,
    fail_on_save: bool,
}

impl InMemoryVideoRepository {
    pub fn new() -> Self {
        Self {
            videos: Mutex::new(HashMap::new()),
            fail_on_save: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            videos: Mutex::new(HashMap::new()),
            fail_on_save: true,
        }
    }

    /// Stored video by id (for test assertions)
    pub fn find(&self, id: Uuid) -> Option<Video> {
        self.videos.lock().unwrap().get(&id).cloned()
    }

    pub fn len(&self) -> usize {
        self.videos.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.videos.lock().unwrap().is_empty()
    }
}

impl Default for InMemoryVideoRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VideoRepository for InMemoryVideoRepository {
    async fn save(&self, video: &Video) -> Result<(), AppError> {
        if self.fail_on_save {
            return Err(AppError::Database(sqlx::Error::PoolClosed));
        }
        let mut videos = self.videos.lock().unwrap();
        if videos.contains_key(&video.id()) {
            // Insert-or-fail, mirroring the real repository's plain INSERT.
            return Err(AppError::Internal(format!(
                "duplicate video id: {}",
                video.id()
            )));
        }
        videos.insert(video.id(), video.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Video>, AppError> {
        Ok(self.videos.lock().unwrap().get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Video>, AppError> {
        Ok(self.videos.lock().unwrap().values().cloned().collect())
    }
}
