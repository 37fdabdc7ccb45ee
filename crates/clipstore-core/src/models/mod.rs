pub mod upload;
pub mod video;

pub use upload::{
    CreateVideoMetadataRequest, CreateVideoMetadataResponse, MultipartUploadUrls,
    PartPresignRequest, PartPresignResponse, PresignedUrls, SingleUploadUrl, UploadFileInfo,
};
pub use video::{Thumbnail, Video, VideoCategory, VideoFile, VideoProps, VideoResponse, VideoStatus};
