use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::features::reviews::models::{Review, ReviewChanges};
use crate::shared::constants::{MAX_RATING, MIN_RATING};
use crate::shared::validation::{clean_name, validate_not_blank};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResponseDto {
    pub id: i32,
    pub title: String,
    pub text: String,
    pub rating: i32,
    pub pokemon_id: i32,
    pub reviewer_id: i32,
}

impl From<Review> for ReviewResponseDto {
    fn from(r: Review) -> Self {
        Self {
            id: r.id,
            title: r.title,
            text: r.text,
            rating: r.rating,
            pokemon_id: r.pokemon_id,
            reviewer_id: r.reviewer_id,
        }
    }
}

/// Request DTO for creating or updating a review
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpsertReviewDto {
    #[validate(
        length(min = 1, max = 255, message = "Title must be 1-255 characters"),
        custom(function = "validate_not_blank")
    )]
    pub title: String,

    #[validate(length(max = 4000, message = "Text must not exceed 4000 characters"))]
    pub text: String,

    #[validate(range(min = MIN_RATING, max = MAX_RATING, message = "Rating must be between 1 and 10"))]
    #[schema(minimum = 1, maximum = 10)]
    pub rating: i32,
}

impl From<UpsertReviewDto> for ReviewChanges {
    fn from(dto: UpsertReviewDto) -> Self {
        Self {
            title: clean_name(&dto.title),
            text: dto.text.trim().to_string(),
            rating: dto.rating,
        }
    }
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct CreateReviewQuery {
    /// Reviewer writing the review
    pub reviewer_id: i32,
    /// Pokemon being reviewed
    pub pokemon_id: i32,
}

/// Request DTO for deleting several reviews at once
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct DeleteReviewsDto {
    #[validate(length(min = 1, max = 1000, message = "Provide between 1 and 1000 review ids"))]
    pub ids: Vec<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeleteReviewsResponseDto {
    /// Number of reviews actually removed
    pub deleted: u64,
}
