use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::features::owners::models::Owner;
use crate::shared::validation::validate_not_blank;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OwnerResponseDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gym: Option<String>,
    pub country_id: i32,
}

impl From<Owner> for OwnerResponseDto {
    fn from(o: Owner) -> Self {
        Self {
            id: o.id,
            first_name: o.first_name,
            last_name: o.last_name,
            gym: o.gym,
            country_id: o.country_id,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOwnerDto {
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

    #[validate(length(max = 255, message = "Gym must not exceed 255 characters"))]
    pub gym: Option<String>,
}

/// Request DTO for updating an owner
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOwnerDto {
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

    #[validate(length(max = 255, message = "Gym must not exceed 255 characters"))]
    pub gym: Option<String>,

    /// Move the owner to another country; keeps the current one when omitted
    pub country_id: Option<i32>,
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct CreateOwnerQuery {
    /// Country the new owner belongs to
    pub country_id: i32,
}
