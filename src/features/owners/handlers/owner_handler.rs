use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppQuery};
use crate::features::owners::dtos::{
    CreateOwnerDto, CreateOwnerQuery, OwnerResponseDto, UpdateOwnerDto,
};
use crate::features::owners::services::OwnerService;
use crate::features::pokemon::dtos::PokemonResponseDto;
use crate::shared::constants::CREATED_MESSAGE;
use crate::shared::types::ApiResponse;

#[utoipa::path(
    get,
    path = "/api/owners",
    responses(
        (status = 200, description = "List of owners", body = ApiResponse<Vec<OwnerResponseDto>>),
    ),
    tag = "owners"
)]
pub async fn list_owners(
    State(service): State<Arc<OwnerService>>,
) -> Result<Json<ApiResponse<Vec<OwnerResponseDto>>>> {
    let owners = service.list().await?;
    Ok(Json(ApiResponse::list(owners)))
}

#[utoipa::path(
    get,
    path = "/api/owners/{id}",
    params(
        ("id" = i32, Path, description = "Owner ID")
    ),
    responses(
        (status = 200, description = "Owner found", body = ApiResponse<OwnerResponseDto>),
        (status = 404, description = "Owner not found")
    ),
    tag = "owners"
)]
pub async fn get_owner(
    State(service): State<Arc<OwnerService>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<OwnerResponseDto>>> {
    let owner = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(owner), None, None)))
}

/// List pokemon of an owner
#[utoipa::path(
    get,
    path = "/api/owners/{id}/pokemon",
    params(
        ("id" = i32, Path, description = "Owner ID")
    ),
    responses(
        (status = 200, description = "Pokemon of the owner", body = ApiResponse<Vec<PokemonResponseDto>>),
        (status = 404, description = "Owner not found")
    ),
    tag = "owners"
)]
pub async fn list_pokemon_by_owner(
    State(service): State<Arc<OwnerService>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<Vec<PokemonResponseDto>>>> {
    let pokemon = service.list_pokemon(id).await?;
    Ok(Json(ApiResponse::list(pokemon)))
}

/// Create an owner in an existing country
#[utoipa::path(
    post,
    path = "/api/owners",
    params(CreateOwnerQuery),
    request_body = CreateOwnerDto,
    responses(
        (status = 201, description = "Owner created", body = ApiResponse<OwnerResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Country not found"),
        (status = 422, description = "Owner already exists")
    ),
    tag = "owners"
)]
pub async fn create_owner(
    State(service): State<Arc<OwnerService>>,
    AppQuery(query): AppQuery<CreateOwnerQuery>,
    AppJson(dto): AppJson<CreateOwnerDto>,
) -> Result<(StatusCode, Json<ApiResponse<OwnerResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let owner = service.create(query.country_id, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(owner),
            Some(CREATED_MESSAGE.to_string()),
            None,
        )),
    ))
}

#[utoipa::path(
    put,
    path = "/api/owners/{id}",
    params(
        ("id" = i32, Path, description = "Owner ID")
    ),
    request_body = UpdateOwnerDto,
    responses(
        (status = 200, description = "Owner updated", body = ApiResponse<OwnerResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Owner or country not found"),
        (status = 422, description = "Another owner already has this last name")
    ),
    tag = "owners"
)]
pub async fn update_owner(
    State(service): State<Arc<OwnerService>>,
    Path(id): Path<i32>,
    AppJson(dto): AppJson<UpdateOwnerDto>,
) -> Result<Json<ApiResponse<OwnerResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let owner = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(owner), None, None)))
}

#[utoipa::path(
    delete,
    path = "/api/owners/{id}",
    params(
        ("id" = i32, Path, description = "Owner ID")
    ),
    responses(
        (status = 200, description = "Owner deleted"),
        (status = 404, description = "Owner not found")
    ),
    tag = "owners"
)]
pub async fn delete_owner(
    State(service): State<Arc<OwnerService>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(None, None, None)))
}
