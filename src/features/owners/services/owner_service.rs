use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::countries::repositories::CountryRepository;
use crate::features::owners::dtos::{CreateOwnerDto, OwnerResponseDto, UpdateOwnerDto};
use crate::features::owners::models::NewOwner;
use crate::features::owners::repositories::OwnerRepository;
use crate::features::pokemon::dtos::PokemonResponseDto;
use crate::shared::validation::{clean_name, normalize_name};

pub struct OwnerService {
    repo: Arc<dyn OwnerRepository>,
    countries: Arc<dyn CountryRepository>,
}

impl OwnerService {
    pub fn new(repo: Arc<dyn OwnerRepository>, countries: Arc<dyn CountryRepository>) -> Self {
        Self { repo, countries }
    }

    pub async fn list(&self) -> Result<Vec<OwnerResponseDto>> {
        let owners = self.repo.list().await?;
        Ok(owners.into_iter().map(Into::into).collect())
    }

    pub async fn get(&self, id: i32) -> Result<OwnerResponseDto> {
        self.repo
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| not_found(id))
    }

    pub async fn list_pokemon(&self, id: i32) -> Result<Vec<PokemonResponseDto>> {
        if !self.repo.exists(id).await? {
            return Err(not_found(id));
        }

        let pokemon = self.repo.list_pokemon(id).await?;
        Ok(pokemon.into_iter().map(Into::into).collect())
    }

    /// Create an owner living in `country_id`
    pub async fn create(&self, country_id: i32, dto: CreateOwnerDto) -> Result<OwnerResponseDto> {
        let owner = NewOwner {
            first_name: clean_name(&dto.first_name),
            last_name: clean_name(&dto.last_name),
            gym: clean_gym(dto.gym),
            country_id,
        };

        if self.repo.find_by_last_name(&normalize_name(&owner.last_name)).await?.is_some() {
            return Err(AppError::AlreadyExists("Owner already exists".to_string()));
        }
        self.ensure_country(country_id).await?;

        let created = self.repo.create(&owner).await?;
        Ok(created.into())
    }

    pub async fn update(&self, id: i32, dto: UpdateOwnerDto) -> Result<OwnerResponseDto> {
        let current = self.repo.find_by_id(id).await?.ok_or_else(|| not_found(id))?;

        let owner = NewOwner {
            first_name: clean_name(&dto.first_name),
            last_name: clean_name(&dto.last_name),
            gym: clean_gym(dto.gym),
            country_id: dto.country_id.unwrap_or(current.country_id),
        };

        let taken = self
            .repo
            .find_by_last_name(&normalize_name(&owner.last_name))
            .await?;
        if let Some(existing) = taken {
            if existing.id != id {
                return Err(AppError::AlreadyExists("Owner already exists".to_string()));
            }
        }
        if owner.country_id != current.country_id {
            self.ensure_country(owner.country_id).await?;
        }

        self.repo
            .update(id, &owner)
            .await?
            .map(Into::into)
            .ok_or_else(|| not_found(id))
    }

    pub async fn delete(&self, id: i32) -> Result<()> {
        if !self.repo.delete(id).await? {
            return Err(not_found(id));
        }

        tracing::info!("Owner deleted: id={}", id);
        Ok(())
    }

    async fn ensure_country(&self, country_id: i32) -> Result<()> {
        if self.countries.exists(country_id).await? {
            Ok(())
        } else {
            Err(AppError::NotFound(format!(
                "Country with id {} not found",
                country_id
            )))
        }
    }
}

fn clean_gym(gym: Option<String>) -> Option<String> {
    gym.map(|g| clean_name(&g)).filter(|g| !g.is_empty())
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Owner with id {} not found", id))
}
