use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::CategoryResponseDto;
use crate::features::categories::repositories::CategoryRepository;
use crate::features::owners::dtos::OwnerResponseDto;
use crate::features::owners::repositories::OwnerRepository;
use crate::features::pokemon::dtos::{
    CreatePokemonDto, PokemonRatingDto, PokemonResponseDto, UpdatePokemonDto,
};
use crate::features::pokemon::models::NewPokemon;
use crate::features::pokemon::rating::average_rating;
use crate::features::pokemon::repositories::PokemonRepository;
use crate::shared::validation::normalize_name;

/// Service for pokemon operations
pub struct PokemonService {
    repo: Arc<dyn PokemonRepository>,
    owners: Arc<dyn OwnerRepository>,
    categories: Arc<dyn CategoryRepository>,
}

impl PokemonService {
    pub fn new(
        repo: Arc<dyn PokemonRepository>,
        owners: Arc<dyn OwnerRepository>,
        categories: Arc<dyn CategoryRepository>,
    ) -> Self {
        Self {
            repo,
            owners,
            categories,
        }
    }

    pub async fn list(&self) -> Result<Vec<PokemonResponseDto>> {
        let pokemon = self.repo.list().await?;
        Ok(pokemon.into_iter().map(Into::into).collect())
    }

    pub async fn get(&self, id: i32) -> Result<PokemonResponseDto> {
        self.repo
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| not_found(id))
    }

    /// Average of every review rating, `0` when the pokemon has no reviews
    pub async fn get_rating(&self, id: i32) -> Result<PokemonRatingDto> {
        self.ensure_exists(id).await?;

        let ratings = self.repo.review_ratings(id).await?;
        Ok(PokemonRatingDto {
            pokemon_id: id,
            rating: average_rating(&ratings),
            review_count: ratings.len() as i64,
        })
    }

    pub async fn list_owners(&self, id: i32) -> Result<Vec<OwnerResponseDto>> {
        self.ensure_exists(id).await?;

        let owners = self.owners.list_by_pokemon(id).await?;
        Ok(owners.into_iter().map(Into::into).collect())
    }

    pub async fn list_categories(&self, id: i32) -> Result<Vec<CategoryResponseDto>> {
        self.ensure_exists(id).await?;

        let categories = self.categories.list_by_pokemon(id).await?;
        Ok(categories.into_iter().map(Into::into).collect())
    }

    /// Create a pokemon linked to one owner and one category.
    ///
    /// The owner and category must exist; nothing is written otherwise.
    pub async fn create(
        &self,
        owner_id: i32,
        category_id: i32,
        dto: CreatePokemonDto,
    ) -> Result<PokemonResponseDto> {
        let pokemon = NewPokemon::from(dto);

        if self.repo.find_by_name(&normalize_name(&pokemon.name)).await?.is_some() {
            return Err(AppError::AlreadyExists("Pokemon already exists".to_string()));
        }

        let owner = self.owners.find_by_id(owner_id).await?;
        let category = self.categories.find_by_id(category_id).await?;
        let (owner, category) = match (owner, category) {
            (Some(owner), Some(category)) => (owner, category),
            (None, _) => {
                return Err(AppError::NotFound(format!(
                    "Owner with id {} not found",
                    owner_id
                )))
            }
            (_, None) => {
                return Err(AppError::NotFound(format!(
                    "Category with id {} not found",
                    category_id
                )))
            }
        };

        let created = self
            .repo
            .create_with_associations(owner.id, category.id, &pokemon)
            .await?;

        tracing::info!(
            "Pokemon created: id={}, owner_id={}, category_id={}",
            created.pokemon.id,
            created.owner_link.owner_id,
            created.category_link.category_id
        );
        Ok(created.pokemon.into())
    }

    /// Update name and birth date; owner and category links stay as created
    pub async fn update(&self, id: i32, dto: UpdatePokemonDto) -> Result<PokemonResponseDto> {
        let pokemon = NewPokemon::from(dto);

        self.ensure_exists(id).await?;

        if let Some(existing) = self.repo.find_by_name(&normalize_name(&pokemon.name)).await? {
            if existing.id != id {
                return Err(AppError::AlreadyExists("Pokemon already exists".to_string()));
            }
        }

        self.repo
            .update(id, &pokemon)
            .await?
            .map(Into::into)
            .ok_or_else(|| not_found(id))
    }

    /// Delete the pokemon together with every review written about it
    pub async fn delete(&self, id: i32) -> Result<()> {
        let removed_reviews = self
            .repo
            .delete_with_reviews(id)
            .await?
            .ok_or_else(|| not_found(id))?;

        tracing::info!(
            "Pokemon deleted: id={}, reviews_removed={}",
            id,
            removed_reviews
        );
        Ok(())
    }

    async fn ensure_exists(&self, id: i32) -> Result<()> {
        if self.repo.exists(id).await? {
            Ok(())
        } else {
            Err(not_found(id))
        }
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Pokemon with id {} not found", id))
}
