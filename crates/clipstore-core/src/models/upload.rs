//! Request and response types for the upload coordination endpoints.
//!
//! Shape validation lives here (via `validator`); the orchestrators assume
//! requests that reach them are well formed.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::video::{VideoCategory, VideoResponse};

/// One file in a registration request: the video itself or its thumbnail.
#[derive(Debug, Clone, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UploadFileInfo {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Filename must be between 1 and 255 characters"
    ))]
    pub filename: String,
    #[validate(length(
        min = 1,
        max = 255,
        message = "MIME type must be between 1 and 255 characters"
    ))]
    pub mime_type: String,
    /// File size in bytes
    #[validate(range(min = 1, message = "File size must be at least 1 byte"))]
    pub size: i64,
}

/// Request to register video metadata and open the upload.
#[derive(Debug, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateVideoMetadataRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    pub description: Option<String>,
    pub category: VideoCategory,
    #[serde(default)]
    pub tags: Vec<String>,
    #[validate(nested)]
    pub video: UploadFileInfo,
    #[validate(nested)]
    pub thumbnail: UploadFileInfo,
}

/// Request for a presigned URL for one numbered part of an in-progress
/// multipart upload.
#[derive(Debug, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PartPresignRequest {
    #[validate(length(min = 1, message = "Video ID is required"))]
    pub video_id: String,
    #[validate(length(min = 1, message = "Filename is required"))]
    pub filename: String,
    #[validate(length(min = 1, message = "MIME type is required"))]
    pub mime_type: String,
    #[validate(length(min = 1, message = "Upload ID is required"))]
    pub upload_id: String,
    /// 1-based part number
    #[validate(range(min = 1, message = "Part number must be a positive integer"))]
    pub part_number: i32,
}

/// Multipart session id plus the signed URL for part 1.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MultipartUploadUrls {
    pub upload_id: String,
    pub url: String,
}

/// Signed URL for a single whole-object upload.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SingleUploadUrl {
    pub url: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PresignedUrls {
    pub video: MultipartUploadUrls,
    pub thumbnail: SingleUploadUrl,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateVideoMetadataResponse {
    pub video_metadata: VideoResponse,
    pub presigned_urls: PresignedUrls,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PartPresignResponse {
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file_info(filename: &str, mime_type: &str, size: i64) -> UploadFileInfo {
        UploadFileInfo {
            filename: filename.to_string(),
            mime_type: mime_type.to_string(),
            size,
        }
    }

    fn valid_create_request() -> CreateVideoMetadataRequest {
        CreateVideoMetadataRequest {
            title: "Intro".to_string(),
            description: None,
            category: VideoCategory::Education,
            tags: vec![],
            video: file_info("v.mp4", "video/mp4", 1_048_576),
            thumbnail: file_info("t.jpg", "image/jpeg", 20_480),
        }
    }

    #[test]
    fn valid_create_request_passes() {
        assert!(valid_create_request().validate().is_ok());
    }

    #[test]
    fn empty_title_is_rejected() {
        let mut request = valid_create_request();
        request.title = String::new();
        assert!(request.validate().is_err());
    }

    #[test]
    fn zero_size_is_rejected() {
        let mut request = valid_create_request();
        request.video.size = 0;
        assert!(request.validate().is_err());
    }

    #[test]
    fn create_request_deserializes_camel_case() {
        let request: CreateVideoMetadataRequest = serde_json::from_value(serde_json::json!({
            "title": "Intro",
            "category": "education",
            "video": {"filename": "v.mp4", "mimeType": "video/mp4", "size": 1048576},
            "thumbnail": {"filename": "t.jpg", "mimeType": "image/jpeg", "size": 20480}
        }))
        .unwrap();
        assert_eq!(request.video.mime_type, "video/mp4");
        assert!(request.tags.is_empty());
        assert_eq!(request.category, VideoCategory::Education);
    }

    #[test]
    fn unknown_category_fails_deserialization() {
        let result = serde_json::from_value::<CreateVideoMetadataRequest>(serde_json::json!({
            "title": "Intro",
            "category": "cooking",
            "video": {"filename": "v.mp4", "mimeType": "video/mp4", "size": 1},
            "thumbnail": {"filename": "t.jpg", "mimeType": "image/jpeg", "size": 1}
        }));
        assert!(result.is_err());
    }

    #[test]
    fn part_number_must_be_positive() {
        let request = PartPresignRequest {
            video_id: "v1".to_string(),
            filename: "v.mp4".to_string(),
            mime_type: "video/mp4".to_string(),
            upload_id: "u1".to_string(),
            part_number: 0,
        };
        assert!(request.validate().is_err());
    }
}
