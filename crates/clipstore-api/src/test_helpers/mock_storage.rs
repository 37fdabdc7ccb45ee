//! Mock Storage implementation for testing.

use async_trait::async_trait;
use clipstore_storage::{
    keys, MultipartUpload, Storage, StorageError, StorageResult, UploadTarget,
};
use std::sync::Mutex;

/// Storage that records every call and answers with deterministic URLs.
/// `failing()` builds one whose operations always reject.
pub struct MockStorage {
    presign_calls: Mutex<Vec<UploadTarget>>,
    initiate_calls: Mutex<Vec<UploadTarget>>,
    fail: bool,
}

impl MockStorage {
    pub fn new() -> Self {
        Self {
            presign_calls: Mutex::new(Vec::new()),
            initiate_calls: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            presign_calls: Mutex::new(Vec::new()),
            initiate_calls: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    /// Targets passed to `presign`, in call order.
    pub fn presigns(&self) -> Vec<UploadTarget> {
        self.presign_calls.lock().unwrap().clone()
    }

    /// Targets passed to `initiate_multipart_upload`, in call order.
    pub fn initiations(&self) -> Vec<UploadTarget> {
        self.initiate_calls.lock().unwrap().clone()
    }

    /// The URL this mock returns for a given target.
    pub fn presigned_url_for(target: &UploadTarget) -> String {
        match (&target.upload_id, target.part_number) {
            (Some(upload_id), Some(part)) => format!(
                "https://example.com/presigned/{}?uploadId={}&partNumber={}",
                keys::storage_key(target),
                upload_id,
                part
            ),
            _ => format!("https://example.com/presigned/{}", keys::storage_key(target)),
        }
    }
}

impl Default for MockStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Storage for MockStorage {
    async fn presign(&self, target: &UploadTarget) -> StorageResult<String> {
        if self.fail {
            return Err(StorageError::PresignFailed("mock failure".to_string()));
        }
        self.presign_calls.lock().unwrap().push(target.clone());
        Ok(Self::presigned_url_for(target))
    }

    async fn initiate_multipart_upload(
        &self,
        target: &UploadTarget,
    ) -> StorageResult<MultipartUpload> {
        if self.fail {
            return Err(StorageError::MultipartInitFailed(
                "mock failure".to_string(),
            ));
        }
        self.initiate_calls.lock().unwrap().push(target.clone());

        let upload_id = format!("mock-upload-{}", self.initiate_calls.lock().unwrap().len());
        let mut part_target = target.clone();
        part_target.upload_id = Some(upload_id.clone());
        part_target.part_number = Some(1);

        Ok(MultipartUpload {
            upload_id,
            url: Self::presigned_url_for(&part_target),
        })
    }
}
