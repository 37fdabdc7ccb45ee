//! Postgres implementation of the video repository.

use async_trait::async_trait;
use clipstore_core::models::Video;
use clipstore_core::AppError;
use sqlx::PgPool;
use uuid::Uuid;

use crate::mapper::{self, VideoRow};
use crate::repository::VideoRepository;

/// Video repository backed by Postgres.
///
/// The pool is injected at construction and shared across all operations;
/// there is no ambient global connection.
#[derive(Clone)]
pub struct PgVideoRepository {
    pool: PgPool,
}

impl PgVideoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VideoRepository for PgVideoRepository {
    async fn save(&self, video: &Video) -> Result<(), AppError> {
        let row = mapper::to_row(video);

        // Plain insert: a duplicate id is a conflict error, not an update.
        sqlx::query(
            r#"
            INSERT INTO videos (
                id, title, description, category, tags, status,
                video_filename, video_content_type, video_size, playlist_url,
                thumb_filename, thumb_content_type, thumb_size, thumb_url,
                uploaded_at, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)
            "#,
        )
        .bind(row.id)
        .bind(row.title)
        .bind(row.description)
        .bind(row.category)
        .bind(row.tags)
        .bind(row.status)
        .bind(row.video_filename)
        .bind(row.video_content_type)
        .bind(row.video_size)
        .bind(row.playlist_url)
        .bind(row.thumb_filename)
        .bind(row.thumb_content_type)
        .bind(row.thumb_size)
        .bind(row.thumb_url)
        .bind(row.uploaded_at)
        .bind(row.created_at)
        .bind(row.updated_at)
        .execute(&self.pool)
        .await?;

        tracing::debug!(video_id = %video.id(), "video metadata saved");

        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Video>, AppError> {
        let row = sqlx::query_as::<_, VideoRow>(
            r#"
            SELECT id, title, description, category, tags, status,
                   video_filename, video_content_type, video_size, playlist_url,
                   thumb_filename, thumb_content_type, thumb_size, thumb_url,
                   uploaded_at, created_at, updated_at
            FROM videos
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(mapper::to_domain).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Video>, AppError> {
        let rows = sqlx::query_as::<_, VideoRow>(
            r#"
            SELECT id, title, description, category, tags, status,
                   video_filename, video_content_type, video_size, playlist_url,
                   thumb_filename, thumb_content_type, thumb_size, thumb_url,
                   uploaded_at, created_at, updated_at
            FROM videos
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(mapper::to_domain).collect()
    }
}
