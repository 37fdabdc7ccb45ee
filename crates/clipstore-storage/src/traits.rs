//! Storage abstraction trait
//!
//! This module defines the Storage trait that upload backends must implement,
//! along with the descriptor type naming the object a caller wants to upload.

use async_trait::async_trait;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Presign failed: {0}")]
    PresignFailed(String),

    #[error("Multipart initiation failed: {0}")]
    MultipartInitFailed(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Distinguishes the video object from its thumbnail when deriving keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Video,
    Thumbnail,
}

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Video => "video",
            ResourceKind::Thumbnail => "thumbnail",
        }
    }
}

/// The object an upload authorization is requested for.
///
/// When `upload_id` and `part_number` are both set, the request is for one
/// numbered part of an in-progress multipart session; otherwise it is for a
/// single whole-object upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadTarget {
    pub video_id: String,
    pub filename: String,
    pub content_type: String,
    pub resource_kind: ResourceKind,
    pub upload_id: Option<String>,
    /// 1-based part number
    pub part_number: Option<i32>,
}

impl UploadTarget {
    pub fn video(video_id: impl Into<String>, filename: &str, content_type: &str) -> Self {
        UploadTarget {
            video_id: video_id.into(),
            filename: filename.to_string(),
            content_type: content_type.to_string(),
            resource_kind: ResourceKind::Video,
            upload_id: None,
            part_number: None,
        }
    }

    pub fn thumbnail(video_id: impl Into<String>, filename: &str, content_type: &str) -> Self {
        UploadTarget {
            video_id: video_id.into(),
            filename: filename.to_string(),
            content_type: content_type.to_string(),
            resource_kind: ResourceKind::Thumbnail,
            upload_id: None,
            part_number: None,
        }
    }

    pub fn video_part(
        video_id: impl Into<String>,
        filename: &str,
        content_type: &str,
        upload_id: impl Into<String>,
        part_number: i32,
    ) -> Self {
        UploadTarget {
            video_id: video_id.into(),
            filename: filename.to_string(),
            content_type: content_type.to_string(),
            resource_kind: ResourceKind::Video,
            upload_id: Some(upload_id.into()),
            part_number: Some(part_number),
        }
    }
}

/// A freshly opened multipart session plus the first part's signed URL, so
/// the caller can start uploading without a second round trip.
#[derive(Debug, Clone)]
pub struct MultipartUpload {
    pub upload_id: String,
    pub url: String,
}

/// Storage abstraction trait
///
/// Grants cryptographically signed, time-limited upload authorizations for a
/// specific storage key. Implementations perform no retries; failures
/// propagate to the caller unmodified. Every call is independent: repeated
/// presigns for the same part simply produce a new valid URL.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Signed URL authorizing a single PUT of the whole object, or of one
    /// numbered part when the target carries an upload session id and part
    /// number.
    async fn presign(&self, target: &UploadTarget) -> StorageResult<String>;

    /// Open a multipart upload session for the target's key and presign its
    /// first part.
    async fn initiate_multipart_upload(
        &self,
        target: &UploadTarget,
    ) -> StorageResult<MultipartUpload>;
}
