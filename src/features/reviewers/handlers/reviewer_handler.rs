use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::reviewers::dtos::{ReviewerResponseDto, UpsertReviewerDto};
use crate::features::reviewers::services::ReviewerService;
use crate::features::reviews::dtos::ReviewResponseDto;
use crate::shared::constants::CREATED_MESSAGE;
use crate::shared::types::ApiResponse;

#[utoipa::path(
    get,
    path = "/api/reviewers",
    responses(
        (status = 200, description = "List of reviewers", body = ApiResponse<Vec<ReviewerResponseDto>>),
    ),
    tag = "reviewers"
)]
pub async fn list_reviewers(
    State(service): State<Arc<ReviewerService>>,
) -> Result<Json<ApiResponse<Vec<ReviewerResponseDto>>>> {
    let reviewers = service.list().await?;
    Ok(Json(ApiResponse::list(reviewers)))
}

#[utoipa::path(
    get,
    path = "/api/reviewers/{id}",
    params(
        ("id" = i32, Path, description = "Reviewer ID")
    ),
    responses(
        (status = 200, description = "Reviewer found", body = ApiResponse<ReviewerResponseDto>),
        (status = 404, description = "Reviewer not found")
    ),
    tag = "reviewers"
)]
pub async fn get_reviewer(
    State(service): State<Arc<ReviewerService>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<ReviewerResponseDto>>> {
    let reviewer = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(reviewer), None, None)))
}

/// List reviews written by a reviewer
#[utoipa::path(
    get,
    path = "/api/reviewers/{id}/reviews",
    params(
        ("id" = i32, Path, description = "Reviewer ID")
    ),
    responses(
        (status = 200, description = "Reviews by the reviewer", body = ApiResponse<Vec<ReviewResponseDto>>),
        (status = 404, description = "Reviewer not found")
    ),
    tag = "reviewers"
)]
pub async fn list_reviews_by_reviewer(
    State(service): State<Arc<ReviewerService>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<Vec<ReviewResponseDto>>>> {
    let reviews = service.list_reviews(id).await?;
    Ok(Json(ApiResponse::list(reviews)))
}

#[utoipa::path(
    post,
    path = "/api/reviewers",
    request_body = UpsertReviewerDto,
    responses(
        (status = 201, description = "Reviewer created", body = ApiResponse<ReviewerResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 422, description = "Reviewer already exists")
    ),
    tag = "reviewers"
)]
pub async fn create_reviewer(
    State(service): State<Arc<ReviewerService>>,
    AppJson(dto): AppJson<UpsertReviewerDto>,
) -> Result<(StatusCode, Json<ApiResponse<ReviewerResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let reviewer = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(reviewer),
            Some(CREATED_MESSAGE.to_string()),
            None,
        )),
    ))
}

#[utoipa::path(
    put,
    path = "/api/reviewers/{id}",
    params(
        ("id" = i32, Path, description = "Reviewer ID")
    ),
    request_body = UpsertReviewerDto,
    responses(
        (status = 200, description = "Reviewer updated", body = ApiResponse<ReviewerResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Reviewer not found"),
        (status = 422, description = "Another reviewer already has this last name")
    ),
    tag = "reviewers"
)]
pub async fn update_reviewer(
    State(service): State<Arc<ReviewerService>>,
    Path(id): Path<i32>,
    AppJson(dto): AppJson<UpsertReviewerDto>,
) -> Result<Json<ApiResponse<ReviewerResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let reviewer = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(reviewer), None, None)))
}

/// Delete a reviewer and every review they wrote
#[utoipa::path(
    delete,
    path = "/api/reviewers/{id}",
    params(
        ("id" = i32, Path, description = "Reviewer ID")
    ),
    responses(
        (status = 200, description = "Reviewer deleted"),
        (status = 404, description = "Reviewer not found")
    ),
    tag = "reviewers"
)]
pub async fn delete_reviewer(
    State(service): State<Arc<ReviewerService>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(None, None, None)))
}
