use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppQuery};
use crate::features::categories::dtos::CategoryResponseDto;
use crate::features::owners::dtos::OwnerResponseDto;
use crate::features::pokemon::dtos::{
    CreatePokemonDto, CreatePokemonQuery, PokemonRatingDto, PokemonResponseDto, UpdatePokemonDto,
};
use crate::features::pokemon::services::PokemonService;
use crate::shared::constants::CREATED_MESSAGE;
use crate::shared::types::ApiResponse;

/// List all pokemon ordered by id
#[utoipa::path(
    get,
    path = "/api/pokemon",
    responses(
        (status = 200, description = "List of pokemon", body = ApiResponse<Vec<PokemonResponseDto>>),
    ),
    tag = "pokemon"
)]
pub async fn list_pokemon(
    State(service): State<Arc<PokemonService>>,
) -> Result<Json<ApiResponse<Vec<PokemonResponseDto>>>> {
    let pokemon = service.list().await?;
    Ok(Json(ApiResponse::list(pokemon)))
}

/// Get pokemon by id
#[utoipa::path(
    get,
    path = "/api/pokemon/{id}",
    params(
        ("id" = i32, Path, description = "Pokemon ID")
    ),
    responses(
        (status = 200, description = "Pokemon found", body = ApiResponse<PokemonResponseDto>),
        (status = 404, description = "Pokemon not found")
    ),
    tag = "pokemon"
)]
pub async fn get_pokemon(
    State(service): State<Arc<PokemonService>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<PokemonResponseDto>>> {
    let pokemon = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(pokemon), None, None)))
}

/// Average review rating of a pokemon
#[utoipa::path(
    get,
    path = "/api/pokemon/{id}/rating",
    params(
        ("id" = i32, Path, description = "Pokemon ID")
    ),
    responses(
        (status = 200, description = "Rating aggregate", body = ApiResponse<PokemonRatingDto>),
        (status = 404, description = "Pokemon not found")
    ),
    tag = "pokemon"
)]
pub async fn get_pokemon_rating(
    State(service): State<Arc<PokemonService>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<PokemonRatingDto>>> {
    let rating = service.get_rating(id).await?;
    Ok(Json(ApiResponse::success(Some(rating), None, None)))
}

#[utoipa::path(
    get,
    path = "/api/pokemon/{id}/owners",
    params(
        ("id" = i32, Path, description = "Pokemon ID")
    ),
    responses(
        (status = 200, description = "Owners of the pokemon", body = ApiResponse<Vec<OwnerResponseDto>>),
        (status = 404, description = "Pokemon not found")
    ),
    tag = "pokemon"
)]
pub async fn list_owners_of_pokemon(
    State(service): State<Arc<PokemonService>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<Vec<OwnerResponseDto>>>> {
    let owners = service.list_owners(id).await?;
    Ok(Json(ApiResponse::list(owners)))
}

#[utoipa::path(
    get,
    path = "/api/pokemon/{id}/categories",
    params(
        ("id" = i32, Path, description = "Pokemon ID")
    ),
    responses(
        (status = 200, description = "Categories of the pokemon", body = ApiResponse<Vec<CategoryResponseDto>>),
        (status = 404, description = "Pokemon not found")
    ),
    tag = "pokemon"
)]
pub async fn list_categories_of_pokemon(
    State(service): State<Arc<PokemonService>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<Vec<CategoryResponseDto>>>> {
    let categories = service.list_categories(id).await?;
    Ok(Json(ApiResponse::list(categories)))
}

/// Create a pokemon linked to an owner and a category
#[utoipa::path(
    post,
    path = "/api/pokemon",
    params(CreatePokemonQuery),
    request_body = CreatePokemonDto,
    responses(
        (status = 201, description = "Pokemon created", body = ApiResponse<PokemonResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Owner or category not found"),
        (status = 422, description = "Pokemon already exists")
    ),
    tag = "pokemon"
)]
pub async fn create_pokemon(
    State(service): State<Arc<PokemonService>>,
    AppQuery(query): AppQuery<CreatePokemonQuery>,
    AppJson(dto): AppJson<CreatePokemonDto>,
) -> Result<(StatusCode, Json<ApiResponse<PokemonResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let pokemon = service
        .create(query.owner_id, query.category_id, dto)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(pokemon),
            Some(CREATED_MESSAGE.to_string()),
            None,
        )),
    ))
}

/// Update a pokemon's name and birth date
#[utoipa::path(
    put,
    path = "/api/pokemon/{id}",
    params(
        ("id" = i32, Path, description = "Pokemon ID")
    ),
    request_body = UpdatePokemonDto,
    responses(
        (status = 200, description = "Pokemon updated", body = ApiResponse<PokemonResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Pokemon not found"),
        (status = 422, description = "Another pokemon already has this name")
    ),
    tag = "pokemon"
)]
pub async fn update_pokemon(
    State(service): State<Arc<PokemonService>>,
    Path(id): Path<i32>,
    AppJson(dto): AppJson<UpdatePokemonDto>,
) -> Result<Json<ApiResponse<PokemonResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let pokemon = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(pokemon), None, None)))
}

/// Delete a pokemon and its reviews
#[utoipa::path(
    delete,
    path = "/api/pokemon/{id}",
    params(
        ("id" = i32, Path, description = "Pokemon ID")
    ),
    responses(
        (status = 200, description = "Pokemon deleted"),
        (status = 404, description = "Pokemon not found")
    ),
    tag = "pokemon"
)]
pub async fn delete_pokemon(
    State(service): State<Arc<PokemonService>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(None, None, None)))
}
