use crate::keys;
use crate::traits::{MultipartUpload, Storage, StorageError, StorageResult, UploadTarget};
use async_trait::async_trait;
use aws_config::meta::region::RegionProviderChain;
use aws_config::retry::{RetryConfig, RetryMode};
use aws_config::BehaviorVersion;
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::Client;
use std::time::Duration;

/// S3 storage implementation
#[derive(Clone)]
pub struct S3Storage {
    client: Client,
    bucket: String,
    presign_expiry: Duration,
}

impl S3Storage {
    /// Create a new S3Storage instance
    ///
    /// # Arguments
    /// * `bucket` - S3 bucket name
    /// * `region` - AWS region (or region identifier for S3-compatible providers)
    /// * `endpoint_url` - Optional custom endpoint URL for S3-compatible providers
    ///   (e.g., "http://localhost:9000" for MinIO, "http://localhost:4566" for LocalStack)
    /// * `presign_expiry` - Validity window for every signed URL this instance issues
    pub async fn new(
        bucket: String,
        region: String,
        endpoint_url: Option<String>,
        presign_expiry: Duration,
    ) -> StorageResult<Self> {
        let region_provider = RegionProviderChain::first_try(aws_config::Region::new(region));

        let retry_config = RetryConfig::standard()
            .with_max_attempts(1)
            .with_retry_mode(RetryMode::Standard);

        let config = aws_config::defaults(BehaviorVersion::latest())
            .region(region_provider)
            .retry_config(retry_config.clone())
            .load()
            .await;

        // Custom endpoints (MinIO, LocalStack) need path-style addressing.
        let client = if let Some(ref endpoint) = endpoint_url {
            let mut s3_config_builder = aws_sdk_s3::Config::builder()
                .endpoint_url(endpoint)
                .region(config.region().cloned())
                .retry_config(retry_config)
                .force_path_style(true);
            if let Some(provider) = config.credentials_provider() {
                s3_config_builder = s3_config_builder.credentials_provider(provider);
            }
            Client::from_conf(s3_config_builder.build())
        } else {
            Client::new(&config)
        };

        Ok(S3Storage {
            client,
            bucket,
            presign_expiry,
        })
    }

    fn presigning_config(&self) -> StorageResult<PresigningConfig> {
        PresigningConfig::builder()
            .expires_in(self.presign_expiry)
            .build()
            .map_err(|e| StorageError::ConfigError(e.to_string()))
    }
}

#[async_trait]
impl Storage for S3Storage {
    async fn presign(&self, target: &UploadTarget) -> StorageResult<String> {
        let key = keys::storage_key(target);

        if let (Some(upload_id), Some(part_number)) = (&target.upload_id, target.part_number) {
            let presigned = self
                .client
                .upload_part()
                .bucket(&self.bucket)
                .key(&key)
                .upload_id(upload_id)
                .part_number(part_number)
                .presigned(self.presigning_config()?)
                .await
                .map_err(|e| {
                    tracing::error!(
                        error = %e,
                        bucket = %self.bucket,
                        key = %key,
                        upload_id = %upload_id,
                        part_number,
                        "S3 part presign failed"
                    );
                    StorageError::PresignFailed(e.to_string())
                })?;

            return Ok(presigned.uri().to_string());
        }

        let presigned = self
            .client
            .put_object()
            .bucket(&self.bucket)
            .key(&key)
            .content_type(&target.content_type)
            .presigned(self.presigning_config()?)
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    bucket = %self.bucket,
                    key = %key,
                    "S3 presign failed"
                );
                StorageError::PresignFailed(e.to_string())
            })?;

        Ok(presigned.uri().to_string())
    }

    async fn initiate_multipart_upload(
        &self,
        target: &UploadTarget,
    ) -> StorageResult<MultipartUpload> {
        let key = keys::storage_key(target);

        let created = self
            .client
            .create_multipart_upload()
            .bucket(&self.bucket)
            .key(&key)
            .content_type(&target.content_type)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    bucket = %self.bucket,
                    key = %key,
                    "S3 multipart initiation failed"
                );
                StorageError::MultipartInitFailed(e.to_string())
            })?;

        let upload_id = created
            .upload_id()
            .ok_or_else(|| {
                StorageError::MultipartInitFailed(
                    "S3 returned no upload id for multipart initiation".to_string(),
                )
            })?
            .to_string();

        // Presign part 1 right away so the caller can start uploading without
        // a second round trip.
        let mut part_target = target.clone();
        part_target.upload_id = Some(upload_id.clone());
        part_target.part_number = Some(1);
        let url = self.presign(&part_target).await?;

        tracing::info!(
            bucket = %self.bucket,
            key = %key,
            upload_id = %upload_id,
            "multipart upload initiated"
        );

        Ok(MultipartUpload { upload_id, url })
    }
}
