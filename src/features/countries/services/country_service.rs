use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::countries::dtos::{CountryResponseDto, UpsertCountryDto};
use crate::features::countries::models::NewCountry;
use crate::features::countries::repositories::CountryRepository;
use crate::features::owners::dtos::OwnerResponseDto;
use crate::features::owners::repositories::OwnerRepository;
use crate::shared::validation::normalize_name;

pub struct CountryService {
    repo: Arc<dyn CountryRepository>,
    owners: Arc<dyn OwnerRepository>,
}

impl CountryService {
    pub fn new(repo: Arc<dyn CountryRepository>, owners: Arc<dyn OwnerRepository>) -> Self {
        Self { repo, owners }
    }

    pub async fn list(&self) -> Result<Vec<CountryResponseDto>> {
        let countries = self.repo.list().await?;
        Ok(countries.into_iter().map(Into::into).collect())
    }

    pub async fn get(&self, id: i32) -> Result<CountryResponseDto> {
        self.repo
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| not_found(id))
    }

    /// Country an owner belongs to
    pub async fn get_by_owner(&self, owner_id: i32) -> Result<CountryResponseDto> {
        if !self.owners.exists(owner_id).await? {
            return Err(AppError::NotFound(format!(
                "Owner with id {} not found",
                owner_id
            )));
        }

        self.repo
            .find_by_owner(owner_id)
            .await?
            .map(Into::into)
            .ok_or_else(|| {
                AppError::Internal(format!("Owner {} has no country", owner_id))
            })
    }

    pub async fn list_owners(&self, id: i32) -> Result<Vec<OwnerResponseDto>> {
        if !self.repo.exists(id).await? {
            return Err(not_found(id));
        }

        let owners = self.repo.list_owners(id).await?;
        Ok(owners.into_iter().map(Into::into).collect())
    }

    pub async fn create(&self, dto: UpsertCountryDto) -> Result<CountryResponseDto> {
        let country = NewCountry::from(dto);

        if self.repo.find_by_name(&normalize_name(&country.name)).await?.is_some() {
            return Err(AppError::AlreadyExists("Country already exists".to_string()));
        }

        let created = self.repo.create(&country).await?;
        Ok(created.into())
    }

    pub async fn update(&self, id: i32, dto: UpsertCountryDto) -> Result<CountryResponseDto> {
        let country = NewCountry::from(dto);

        if !self.repo.exists(id).await? {
            return Err(not_found(id));
        }

        if let Some(existing) = self.repo.find_by_name(&normalize_name(&country.name)).await? {
            if existing.id != id {
                return Err(AppError::AlreadyExists("Country already exists".to_string()));
            }
        }

        self.repo
            .update(id, &country)
            .await?
            .map(Into::into)
            .ok_or_else(|| not_found(id))
    }

    /// Delete a country that no owner references
    pub async fn delete(&self, id: i32) -> Result<()> {
        if !self.repo.exists(id).await? {
            return Err(not_found(id));
        }

        let owners = self.repo.list_owners(id).await?;
        if !owners.is_empty() {
            return Err(AppError::Conflict(format!(
                "Country with id {} still has {} owner(s)",
                id,
                owners.len()
            )));
        }

        if !self.repo.delete(id).await? {
            return Err(not_found(id));
        }

        tracing::info!("Country deleted: id={}", id);
        Ok(())
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Country with id {} not found", id))
}
