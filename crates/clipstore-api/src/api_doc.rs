//! OpenAPI document assembly.

use clipstore_core::models::{
    CreateVideoMetadataRequest, CreateVideoMetadataResponse, MultipartUploadUrls,
    PartPresignRequest, PartPresignResponse, PresignedUrls, SingleUploadUrl, Thumbnail,
    UploadFileInfo, VideoCategory, VideoFile, VideoResponse, VideoStatus,
};
use utoipa::OpenApi;

use crate::error::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::videos::create_video_metadata,
        crate::handlers::videos::presign_video_part,
    ),
    components(schemas(
        CreateVideoMetadataRequest,
        CreateVideoMetadataResponse,
        PartPresignRequest,
        PartPresignResponse,
        PresignedUrls,
        MultipartUploadUrls,
        SingleUploadUrl,
        UploadFileInfo,
        VideoCategory,
        VideoFile,
        VideoResponse,
        VideoStatus,
        Thumbnail,
        ErrorResponse,
    )),
    tags(
        (name = "videos", description = "Video metadata registration and upload coordination")
    )
)]
pub struct ApiDoc;
