//! Storage client setup

use anyhow::Result;
use clipstore_core::Config;
use clipstore_storage::{S3Storage, Storage};
use std::sync::Arc;
use std::time::Duration;

/// Build the S3 client from configuration.
pub async fn setup_storage(config: &Config) -> Result<Arc<dyn Storage>> {
    let storage = S3Storage::new(
        config.s3_bucket.clone(),
        config.s3_region.clone(),
        config.s3_endpoint.clone(),
        Duration::from_secs(config.presign_expiry_secs),
    )
    .await
    .map_err(|e| anyhow::anyhow!("Failed to initialize S3 storage: {}", e))?;

    tracing::info!(
        bucket = %config.s3_bucket,
        region = %config.s3_region,
        endpoint = config.s3_endpoint.as_deref().unwrap_or("aws"),
        "Storage client initialized"
    );

    Ok(Arc::new(storage))
}
