use crate::error::{ErrorResponse, HttpAppError};
use crate::services::{CreateVideoMetadata, PartPresignUrl};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};
use clipstore_core::models::{
    CreateVideoMetadataRequest, CreateVideoMetadataResponse, PartPresignRequest,
    PartPresignResponse,
};
use clipstore_core::AppError;
use std::sync::Arc;
use validator::Validate;

#[utoipa::path(
    post,
    path = "/api/videos",
    tag = "videos",
    request_body = CreateVideoMetadataRequest,
    responses(
        (status = 201, description = "Metadata registered, upload opened", body = CreateVideoMetadataResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn create_video_metadata(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateVideoMetadataRequest>,
) -> Result<(StatusCode, Json<CreateVideoMetadataResponse>), HttpAppError> {
    request
        .validate()
        .map_err(|e| AppError::InvalidInput(e.to_string()))?;

    let service = CreateVideoMetadata::new(state.videos.clone(), state.storage.clone());
    let created = service.execute(request).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateVideoMetadataResponse {
            video_metadata: created.video.into(),
            presigned_urls: created.presigned_urls,
        }),
    ))
}

#[utoipa::path(
    post,
    path = "/api/videos/parts/presign",
    tag = "videos",
    request_body = PartPresignRequest,
    responses(
        (status = 200, description = "Signed URL for the requested part", body = PartPresignResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn presign_video_part(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PartPresignRequest>,
) -> Result<Json<PartPresignResponse>, HttpAppError> {
    request
        .validate()
        .map_err(|e| AppError::InvalidInput(e.to_string()))?;

    let service = PartPresignUrl::new(state.storage.clone());
    let url = service.execute(request).await?;

    Ok(Json(PartPresignResponse { url }))
}
