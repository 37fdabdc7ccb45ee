//! Shared key derivation for storage backends.
//!
//! Key format: `{resource_kind}/{video_id}/{filename}`.

use crate::traits::UploadTarget;

/// Derive the storage key for an upload target.
///
/// Deterministic and collision-free across assets: two videos differ in
/// `video_id`, and a video never collides with its own thumbnail because the
/// resource kind leads the key.
pub fn storage_key(target: &UploadTarget) -> String {
    format!(
        "{}/{}/{}",
        target.resource_kind.as_str(),
        target.video_id,
        target.filename
    )
}
