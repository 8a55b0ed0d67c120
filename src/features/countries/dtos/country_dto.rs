use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::countries::models::{Country, NewCountry};
use crate::shared::validation::{clean_name, validate_not_blank};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CountryResponseDto {
    pub id: i32,
    pub name: String,
}

impl From<Country> for CountryResponseDto {
    fn from(c: Country) -> Self {
        Self {
            id: c.id,
            name: c.name,
        }
    }
}

/// Request DTO for creating or updating a country
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpsertCountryDto {
    #[validate(
        length(min = 1, max = 255, message = "Name must be 1-255 characters"),
        custom(function = "validate_not_blank")
    )]
    pub name: String,
}

impl From<UpsertCountryDto> for NewCountry {
    fn from(dto: UpsertCountryDto) -> Self {
        Self {
            name: clean_name(&dto.name),
        }
    }
}
