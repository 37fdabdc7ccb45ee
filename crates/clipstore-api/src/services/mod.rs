//! Use-case services: the orchestration between repository and storage.

mod create_metadata;
mod part_presign;

pub use create_metadata::{CreateVideoMetadata, CreatedVideoMetadata};
pub use part_presign::PartPresignUrl;
