//! Clipstore Storage Library
//!
//! Storage abstraction for presigned uploads: a trait granting time-limited
//! upload authorizations (single-shot or multipart) and the S3 implementation.
//!
//! # Storage key format
//!
//! All backends derive keys as `{resource_kind}/{video_id}/{filename}`, so a
//! video and its thumbnail never collide and neither do two assets. Key
//! derivation is centralized in the `keys` module.

pub mod keys;
pub mod s3;
pub mod traits;

// Re-export commonly used types
pub use s3::S3Storage;
pub use traits::{
    MultipartUpload, ResourceKind, Storage, StorageError, StorageResult, UploadTarget,
};
