use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::{CategoryResponseDto, UpsertCategoryDto};
use crate::features::categories::models::NewCategory;
use crate::features::categories::repositories::CategoryRepository;
use crate::features::pokemon::dtos::PokemonResponseDto;
use crate::shared::validation::normalize_name;

/// Service for category operations
pub struct CategoryService {
    repo: Arc<dyn CategoryRepository>,
}

impl CategoryService {
    pub fn new(repo: Arc<dyn CategoryRepository>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> Result<Vec<CategoryResponseDto>> {
        let categories = self.repo.list().await?;
        Ok(categories.into_iter().map(Into::into).collect())
    }

    pub async fn get(&self, id: i32) -> Result<CategoryResponseDto> {
        self.repo
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| not_found(id))
    }

    /// Pokemon linked to a category
    pub async fn list_pokemon(&self, id: i32) -> Result<Vec<PokemonResponseDto>> {
        if !self.repo.exists(id).await? {
            return Err(not_found(id));
        }

        let pokemon = self.repo.list_pokemon(id).await?;
        Ok(pokemon.into_iter().map(Into::into).collect())
    }

    pub async fn create(&self, dto: UpsertCategoryDto) -> Result<CategoryResponseDto> {
        let category = NewCategory::from(dto);

        if self.repo.find_by_name(&normalize_name(&category.name)).await?.is_some() {
            return Err(AppError::AlreadyExists("Category already exists".to_string()));
        }

        let created = self.repo.create(&category).await?;
        Ok(created.into())
    }

    pub async fn update(&self, id: i32, dto: UpsertCategoryDto) -> Result<CategoryResponseDto> {
        let category = NewCategory::from(dto);

        if !self.repo.exists(id).await? {
            return Err(not_found(id));
        }

        if let Some(existing) = self.repo.find_by_name(&normalize_name(&category.name)).await? {
            if existing.id != id {
                return Err(AppError::AlreadyExists("Category already exists".to_string()));
            }
        }

        self.repo
            .update(id, &category)
            .await?
            .map(Into::into)
            .ok_or_else(|| not_found(id))
    }

    pub async fn delete(&self, id: i32) -> Result<()> {
        if !self.repo.delete(id).await? {
            return Err(not_found(id));
        }

        tracing::info!("Category deleted: id={}", id);
        Ok(())
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Category with id {} not found", id))
}
