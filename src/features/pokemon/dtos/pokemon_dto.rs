use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::features::pokemon::models::{NewPokemon, Pokemon};
use crate::shared::validation::{clean_name, validate_not_blank};

/// Response DTO for pokemon
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PokemonResponseDto {
    pub id: i32,
    pub name: String,
    pub birth_date: NaiveDate,
}

impl From<Pokemon> for PokemonResponseDto {
    fn from(p: Pokemon) -> Self {
        Self {
            id: p.id,
            name: p.name,
            birth_date: p.birth_date,
        }
    }
}

/// Request DTO for creating a pokemon
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePokemonDto {
    #[validate(
        length(min = 1, max = 255, message = "Name must be 1-255 characters"),
        custom(function = "validate_not_blank")
    )]
    pub name: String,

    pub birth_date: NaiveDate,
}

/// Request DTO for updating a pokemon.
///
/// Owner and category links are fixed at creation and cannot be changed here.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePokemonDto {
    #[validate(
        length(min = 1, max = 255, message = "Name must be 1-255 characters"),
        custom(function = "validate_not_blank")
    )]
    pub name: String,

    pub birth_date: NaiveDate,
}

impl From<CreatePokemonDto> for NewPokemon {
    fn from(dto: CreatePokemonDto) -> Self {
        Self {
            name: clean_name(&dto.name),
            birth_date: dto.birth_date,
        }
    }
}

impl From<UpdatePokemonDto> for NewPokemon {
    fn from(dto: UpdatePokemonDto) -> Self {
        Self {
            name: clean_name(&dto.name),
            birth_date: dto.birth_date,
        }
    }
}

/// Query params for creating a pokemon
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct CreatePokemonQuery {
    /// Owner the new pokemon is linked to
    pub owner_id: i32,
    /// Category the new pokemon is linked to
    pub category_id: i32,
}

/// Average review rating of a pokemon
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PokemonRatingDto {
    pub pokemon_id: i32,
    /// Mean rating, `0` when the pokemon has no reviews
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub rating: Decimal,
    /// Number of reviews the rating was computed from
    pub review_count: i64,
}
