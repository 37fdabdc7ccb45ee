//! Configuration module
//!
//! Process configuration loaded from the environment (with `.env` support via
//! dotenvy). Every knob has a development default except `DATABASE_URL`.

use std::env;

const DEFAULT_PORT: u16 = 4000;
const MAX_CONNECTIONS: u32 = 20;
const CONNECTION_TIMEOUT_SECS: u64 = 30;
const PRESIGN_EXPIRY_SECS: u64 = 3600;
const DEFAULT_BUCKET: &str = "videos";
const DEFAULT_REGION: &str = "us-east-1";

#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    pub cors_origins: Vec<String>,
    pub database_url: String,
    pub db_max_connections: u32,
    pub db_timeout_seconds: u64,
    pub s3_bucket: String,
    pub s3_region: String,
    /// Custom endpoint for S3-compatible providers (MinIO, LocalStack, etc.)
    pub s3_endpoint: Option<String>,
    pub presign_expiry_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let server_port = env::var("PORT")
            .unwrap_or_else(|_| DEFAULT_PORT.to_string())
            .parse()
            .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?;

        let cors_origins = env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .collect();

        let database_url =
            env::var("DATABASE_URL").map_err(|_| anyhow::anyhow!("DATABASE_URL must be set"))?;

        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| MAX_CONNECTIONS.to_string())
            .parse()
            .unwrap_or(MAX_CONNECTIONS);

        let db_timeout_seconds = env::var("DB_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| CONNECTION_TIMEOUT_SECS.to_string())
            .parse()
            .unwrap_or(CONNECTION_TIMEOUT_SECS);

        let s3_bucket = env::var("S3_BUCKET_NAME").unwrap_or_else(|_| DEFAULT_BUCKET.to_string());

        let s3_region = env::var("AWS_REGION")
            .or_else(|_| env::var("AWS_DEFAULT_REGION"))
            .unwrap_or_else(|_| DEFAULT_REGION.to_string());

        let s3_endpoint = env::var("S3_ENDPOINT").ok();

        let presign_expiry_secs = env::var("PRESIGN_EXPIRY_SECS")
            .unwrap_or_else(|_| PRESIGN_EXPIRY_SECS.to_string())
            .parse()
            .unwrap_or(PRESIGN_EXPIRY_SECS);

        Ok(Config {
            server_port,
            cors_origins,
            database_url,
            db_max_connections,
            db_timeout_seconds,
            s3_bucket,
            s3_region,
            s3_endpoint,
            presign_expiry_secs,
        })
    }
}
