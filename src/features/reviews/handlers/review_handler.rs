use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppQuery};
use crate::features::reviews::dtos::{
    CreateReviewQuery, DeleteReviewsDto, DeleteReviewsResponseDto, ReviewResponseDto,
    UpsertReviewDto,
};
use crate::features::reviews::services::ReviewService;
use crate::shared::constants::CREATED_MESSAGE;
use crate::shared::types::ApiResponse;

#[utoipa::path(
    get,
    path = "/api/reviews",
    responses(
        (status = 200, description = "List of reviews", body = ApiResponse<Vec<ReviewResponseDto>>),
    ),
    tag = "reviews"
)]
pub async fn list_reviews(
    State(service): State<Arc<ReviewService>>,
) -> Result<Json<ApiResponse<Vec<ReviewResponseDto>>>> {
    let reviews = service.list().await?;
    Ok(Json(ApiResponse::list(reviews)))
}

#[utoipa::path(
    get,
    path = "/api/reviews/{id}",
    params(
        ("id" = i32, Path, description = "Review ID")
    ),
    responses(
        (status = 200, description = "Review found", body = ApiResponse<ReviewResponseDto>),
        (status = 404, description = "Review not found")
    ),
    tag = "reviews"
)]
pub async fn get_review(
    State(service): State<Arc<ReviewService>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<ReviewResponseDto>>> {
    let review = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(review), None, None)))
}

/// List reviews of a pokemon
#[utoipa::path(
    get,
    path = "/api/reviews/pokemon/{pokemon_id}",
    params(
        ("pokemon_id" = i32, Path, description = "Pokemon ID")
    ),
    responses(
        (status = 200, description = "Reviews of the pokemon", body = ApiResponse<Vec<ReviewResponseDto>>),
        (status = 404, description = "Pokemon not found")
    ),
    tag = "reviews"
)]
pub async fn list_reviews_of_pokemon(
    State(service): State<Arc<ReviewService>>,
    Path(pokemon_id): Path<i32>,
) -> Result<Json<ApiResponse<Vec<ReviewResponseDto>>>> {
    let reviews = service.list_by_pokemon(pokemon_id).await?;
    Ok(Json(ApiResponse::list(reviews)))
}

/// Create a review
#[utoipa::path(
    post,
    path = "/api/reviews",
    params(CreateReviewQuery),
    request_body = UpsertReviewDto,
    responses(
        (status = 201, description = "Review created", body = ApiResponse<ReviewResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Reviewer or pokemon not found"),
        (status = 422, description = "Review already exists")
    ),
    tag = "reviews"
)]
pub async fn create_review(
    State(service): State<Arc<ReviewService>>,
    AppQuery(query): AppQuery<CreateReviewQuery>,
    AppJson(dto): AppJson<UpsertReviewDto>,
) -> Result<(StatusCode, Json<ApiResponse<ReviewResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let review = service
        .create(query.reviewer_id, query.pokemon_id, dto)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(review),
            Some(CREATED_MESSAGE.to_string()),
            None,
        )),
    ))
}

#[utoipa::path(
    put,
    path = "/api/reviews/{id}",
    params(
        ("id" = i32, Path, description = "Review ID")
    ),
    request_body = UpsertReviewDto,
    responses(
        (status = 200, description = "Review updated", body = ApiResponse<ReviewResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Review not found"),
        (status = 422, description = "Another review already has this title")
    ),
    tag = "reviews"
)]
pub async fn update_review(
    State(service): State<Arc<ReviewService>>,
    Path(id): Path<i32>,
    AppJson(dto): AppJson<UpsertReviewDto>,
) -> Result<Json<ApiResponse<ReviewResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let review = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(review), None, None)))
}

#[utoipa::path(
    delete,
    path = "/api/reviews/{id}",
    params(
        ("id" = i32, Path, description = "Review ID")
    ),
    responses(
        (status = 200, description = "Review deleted"),
        (status = 404, description = "Review not found")
    ),
    tag = "reviews"
)]
pub async fn delete_review(
    State(service): State<Arc<ReviewService>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(None, None, None)))
}

/// Delete several reviews at once
#[utoipa::path(
    delete,
    path = "/api/reviews",
    request_body = DeleteReviewsDto,
    responses(
        (status = 200, description = "Reviews deleted", body = ApiResponse<DeleteReviewsResponseDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "reviews"
)]
pub async fn delete_reviews(
    State(service): State<Arc<ReviewService>>,
    AppJson(dto): AppJson<DeleteReviewsDto>,
) -> Result<Json<ApiResponse<DeleteReviewsResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let deleted = service.delete_many(&dto.ids).await?;
    Ok(Json(ApiResponse::success(
        Some(DeleteReviewsResponseDto { deleted }),
        None,
        None,
    )))
}
