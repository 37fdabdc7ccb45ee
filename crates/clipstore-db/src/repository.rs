//! Repository contract for video metadata.

use async_trait::async_trait;
use clipstore_core::models::Video;
use clipstore_core::AppError;
use uuid::Uuid;

/// Durable storage for video metadata.
///
/// `save` is a plain insert (no upsert semantics); saving an existing id is an
/// error. Failures from the underlying engine propagate unmodified — callers
/// treat any repository failure as fatal to the current request.
#[async_trait]
pub trait VideoRepository: Send + Sync {
    async fn save(&self, video: &Video) -> Result<(), AppError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Video>, AppError>;
    async fn find_all(&self) -> Result<Vec<Video>, AppError>;
}
