use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::categories::models::{Category, NewCategory};
use crate::shared::validation::{clean_name, validate_not_blank};

/// Response DTO for category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponseDto {
    pub id: i32,
    pub name: String,
}

impl From<Category> for CategoryResponseDto {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            name: c.name,
        }
    }
}

/// Request DTO for creating or updating a category
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpsertCategoryDto {
    #[validate(
        length(min = 1, max = 255, message = "Name must be 1-255 characters"),
        custom(function = "validate_not_blank")
    )]
    pub name: String,
}

impl From<UpsertCategoryDto> for NewCategory {
    fn from(dto: UpsertCategoryDto) -> Self {
        Self {
            name: clean_name(&dto.name),
        }
    }
}
