use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::reviewers::models::{NewReviewer, Reviewer};
use crate::shared::validation::{clean_name, validate_not_blank};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewerResponseDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
}

impl From<Reviewer> for ReviewerResponseDto {
    fn from(r: Reviewer) -> Self {
        Self {
            id: r.id,
            first_name: r.first_name,
            last_name: r.last_name,
        }
    }
}

/// Request DTO for creating or updating a reviewer
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpsertReviewerDto {
    #[validate(
        length(min = 1, max = 255, message = "First name must be 1-255 characters"),
        custom(function = "validate_not_blank")
    )]
    pub first_name: String,

    #[validate(
        length(min = 1, max = 255, message = "Last name must be 1-255 characters"),
        custom(function = "validate_not_blank")
    )]
    pub last_name: String,
}

impl From<UpsertReviewerDto> for NewReviewer {
    fn from(dto: UpsertReviewerDto) -> Self {
        Self {
            first_name: clean_name(&dto.first_name),
            last_name: clean_name(&dto.last_name),
        }
    }
}
