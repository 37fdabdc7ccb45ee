//! Presigns one numbered part of an in-progress multipart upload.

use clipstore_core::models::PartPresignRequest;
use clipstore_core::AppError;
use clipstore_storage::{Storage, UploadTarget};
use std::sync::Arc;

/// Forwards the session id and part number to the storage contract verbatim
/// and returns its signed URL unchanged. Holds no state; every call is
/// independent, and repeated calls for the same part simply yield a fresh URL.
pub struct PartPresignUrl {
    storage: Arc<dyn Storage>,
}

impl PartPresignUrl {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub async fn execute(&self, request: PartPresignRequest) -> Result<String, AppError> {
        let target = UploadTarget::video_part(
            request.video_id,
            &request.filename,
            &request.mime_type,
            request.upload_id,
            request.part_number,
        );

        self.storage
            .presign(&target)
            .await
            .map_err(|e| AppError::Storage(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::MockStorage;
    use clipstore_storage::ResourceKind;

    fn request(part_number: i32) -> PartPresignRequest {
        PartPresignRequest {
            video_id: "v1".to_string(),
            filename: "v.mp4".to_string(),
            mime_type: "video/mp4".to_string(),
            upload_id: "u1".to_string(),
            part_number,
        }
    }

    #[tokio::test]
    async fn forwards_descriptor_and_returns_url_unchanged() {
        let storage = Arc::new(MockStorage::new());
        let url = PartPresignUrl::new(storage.clone())
            .execute(request(3))
            .await
            .unwrap();

        let presigns = storage.presigns();
        assert_eq!(presigns.len(), 1);
        let target = &presigns[0];
        assert_eq!(target.resource_kind, ResourceKind::Video);
        assert_eq!(target.video_id, "v1");
        assert_eq!(target.upload_id.as_deref(), Some("u1"));
        assert_eq!(target.part_number, Some(3));

        // Exactly the string the storage contract produced.
        assert_eq!(url, MockStorage::presigned_url_for(target));
    }

    #[tokio::test]
    async fn storage_failure_propagates() {
        let storage = Arc::new(MockStorage::failing());
        let result = PartPresignUrl::new(storage).execute(request(1)).await;
        assert!(matches!(result, Err(AppError::Storage(_))));
    }
}
