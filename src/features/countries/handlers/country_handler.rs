use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::countries::dtos::{CountryResponseDto, UpsertCountryDto};
use crate::features::countries::services::CountryService;
use crate::features::owners::dtos::OwnerResponseDto;
use crate::shared::constants::CREATED_MESSAGE;
use crate::shared::types::ApiResponse;

#[utoipa::path(
    get,
    path = "/api/countries",
    responses(
        (status = 200, description = "List of countries", body = ApiResponse<Vec<CountryResponseDto>>),
    ),
    tag = "countries"
)]
pub async fn list_countries(
    State(service): State<Arc<CountryService>>,
) -> Result<Json<ApiResponse<Vec<CountryResponseDto>>>> {
    let countries = service.list().await?;
    Ok(Json(ApiResponse::list(countries)))
}

#[utoipa::path(
    get,
    path = "/api/countries/{id}",
    params(
        ("id" = i32, Path, description = "Country ID")
    ),
    responses(
        (status = 200, description = "Country found", body = ApiResponse<CountryResponseDto>),
        (status = 404, description = "Country not found")
    ),
    tag = "countries"
)]
pub async fn get_country(
    State(service): State<Arc<CountryService>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<CountryResponseDto>>> {
    let country = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(country), None, None)))
}

/// Get the country an owner belongs to
#[utoipa::path(
    get,
    path = "/api/owners/{id}/country",
    params(
        ("id" = i32, Path, description = "Owner ID")
    ),
    responses(
        (status = 200, description = "Country of the owner", body = ApiResponse<CountryResponseDto>),
        (status = 404, description = "Owner not found")
    ),
    tag = "countries"
)]
pub async fn get_country_of_owner(
    State(service): State<Arc<CountryService>>,
    Path(owner_id): Path<i32>,
) -> Result<Json<ApiResponse<CountryResponseDto>>> {
    let country = service.get_by_owner(owner_id).await?;
    Ok(Json(ApiResponse::success(Some(country), None, None)))
}

/// List owners from a country
#[utoipa::path(
    get,
    path = "/api/countries/{id}/owners",
    params(
        ("id" = i32, Path, description = "Country ID")
    ),
    responses(
        (status = 200, description = "Owners from the country", body = ApiResponse<Vec<OwnerResponseDto>>),
        (status = 404, description = "Country not found")
    ),
    tag = "countries"
)]
pub async fn list_owners_by_country(
    State(service): State<Arc<CountryService>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<Vec<OwnerResponseDto>>>> {
    let owners = service.list_owners(id).await?;
    Ok(Json(ApiResponse::list(owners)))
}

#[utoipa::path(
    post,
    path = "/api/countries",
    request_body = UpsertCountryDto,
    responses(
        (status = 201, description = "Country created", body = ApiResponse<CountryResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 422, description = "Country already exists")
    ),
    tag = "countries"
)]
pub async fn create_country(
    State(service): State<Arc<CountryService>>,
    AppJson(dto): AppJson<UpsertCountryDto>,
) -> Result<(StatusCode, Json<ApiResponse<CountryResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let country = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(country),
            Some(CREATED_MESSAGE.to_string()),
            None,
        )),
    ))
}

#[utoipa::path(
    put,
    path = "/api/countries/{id}",
    params(
        ("id" = i32, Path, description = "Country ID")
    ),
    request_body = UpsertCountryDto,
    responses(
        (status = 200, description = "Country updated", body = ApiResponse<CountryResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Country not found"),
        (status = 422, description = "Another country already has this name")
    ),
    tag = "countries"
)]
pub async fn update_country(
    State(service): State<Arc<CountryService>>,
    Path(id): Path<i32>,
    AppJson(dto): AppJson<UpsertCountryDto>,
) -> Result<Json<ApiResponse<CountryResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let country = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(country), None, None)))
}

#[utoipa::path(
    delete,
    path = "/api/countries/{id}",
    params(
        ("id" = i32, Path, description = "Country ID")
    ),
    responses(
        (status = 200, description = "Country deleted"),
        (status = 404, description = "Country not found"),
        (status = 409, description = "Country still has owners")
    ),
    tag = "countries"
)]
pub async fn delete_country(
    State(service): State<Arc<CountryService>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(None, None, None)))
}
