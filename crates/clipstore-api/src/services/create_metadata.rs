//! Registers video metadata and opens the upload.

use clipstore_core::models::{
    CreateVideoMetadataRequest, MultipartUploadUrls, PresignedUrls, SingleUploadUrl, Thumbnail,
    Video, VideoFile, VideoProps,
};
use clipstore_core::AppError;
use clipstore_db::VideoRepository;
use clipstore_storage::{Storage, UploadTarget};
use std::sync::Arc;
use uuid::Uuid;

/// The persisted entity plus the upload authorizations handed to the caller.
#[derive(Debug)]
pub struct CreatedVideoMetadata {
    pub video: Video,
    pub presigned_urls: PresignedUrls,
}

/// Builds the entity, persists it, then requests storage authorizations:
/// a multipart initiation for the video and a single presigned URL for the
/// thumbnail (thumbnails are never chunked).
pub struct CreateVideoMetadata {
    videos: Arc<dyn VideoRepository>,
    storage: Arc<dyn Storage>,
}

impl CreateVideoMetadata {
    pub fn new(videos: Arc<dyn VideoRepository>, storage: Arc<dyn Storage>) -> Self {
        Self { videos, storage }
    }

    pub async fn execute(
        &self,
        request: CreateVideoMetadataRequest,
    ) -> Result<CreatedVideoMetadata, AppError> {
        let video = Video::create(VideoProps {
            id: Uuid::new_v4(),
            title: request.title,
            description: request.description,
            category: request.category,
            tags: Some(request.tags),
            status: None,
            file: VideoFile {
                filename: request.video.filename,
                content_type: request.video.mime_type,
                size: request.video.size,
                playlist_url: None,
            },
            thumbnail: Thumbnail {
                filename: request.thumbnail.filename,
                content_type: request.thumbnail.mime_type,
                size: request.thumbnail.size,
                url: None,
            },
            uploaded_at: None,
            created_at: None,
            updated_at: None,
        });

        // The row must exist before the caller is told where to upload; a
        // failed save means storage is never contacted.
        self.videos.save(&video).await?;

        // A storage failure past this point leaves the saved row behind with
        // no upload in progress. Accepted inconsistency: no compensating
        // delete is performed.
        let video_id = video.id().to_string();
        let multipart = self
            .storage
            .initiate_multipart_upload(&UploadTarget::video(
                &video_id,
                &video.file().filename,
                &video.file().content_type,
            ))
            .await
            .map_err(|e| AppError::Storage(e.to_string()))?;

        let thumbnail_url = self
            .storage
            .presign(&UploadTarget::thumbnail(
                &video_id,
                &video.thumbnail().filename,
                &video.thumbnail().content_type,
            ))
            .await
            .map_err(|e| AppError::Storage(e.to_string()))?;

        tracing::info!(
            video_id = %video.id(),
            upload_id = %multipart.upload_id,
            "video metadata registered, upload opened"
        );

        Ok(CreatedVideoMetadata {
            video,
            presigned_urls: PresignedUrls {
                video: MultipartUploadUrls {
                    upload_id: multipart.upload_id,
                    url: multipart.url,
                },
                thumbnail: SingleUploadUrl { url: thumbnail_url },
            },
        })
    }
}
