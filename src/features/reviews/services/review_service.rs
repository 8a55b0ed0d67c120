use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::pokemon::repositories::PokemonRepository;
use crate::features::reviewers::repositories::ReviewerRepository;
use crate::features::reviews::dtos::{ReviewResponseDto, UpsertReviewDto};
use crate::features::reviews::models::{NewReview, ReviewChanges};
use crate::features::reviews::repositories::ReviewRepository;
use crate::shared::validation::normalize_name;

/// Service for review operations
pub struct ReviewService {
    repo: Arc<dyn ReviewRepository>,
    pokemon: Arc<dyn PokemonRepository>,
    reviewers: Arc<dyn ReviewerRepository>,
}

impl ReviewService {
    pub fn new(
        repo: Arc<dyn ReviewRepository>,
        pokemon: Arc<dyn PokemonRepository>,
        reviewers: Arc<dyn ReviewerRepository>,
    ) -> Self {
        Self {
            repo,
            pokemon,
            reviewers,
        }
    }

    pub async fn list(&self) -> Result<Vec<ReviewResponseDto>> {
        let reviews = self.repo.list().await?;
        Ok(reviews.into_iter().map(Into::into).collect())
    }

    pub async fn get(&self, id: i32) -> Result<ReviewResponseDto> {
        self.repo
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| not_found(id))
    }

    pub async fn list_by_pokemon(&self, pokemon_id: i32) -> Result<Vec<ReviewResponseDto>> {
        if !self.pokemon.exists(pokemon_id).await? {
            return Err(AppError::NotFound(format!(
                "Pokemon with id {} not found",
                pokemon_id
            )));
        }

        let reviews = self.repo.list_by_pokemon(pokemon_id).await?;
        Ok(reviews.into_iter().map(Into::into).collect())
    }

    /// Create a review of `pokemon_id` written by `reviewer_id`
    pub async fn create(
        &self,
        reviewer_id: i32,
        pokemon_id: i32,
        dto: UpsertReviewDto,
    ) -> Result<ReviewResponseDto> {
        let changes = ReviewChanges::from(dto);

        if self.repo.find_by_title(&normalize_name(&changes.title)).await?.is_some() {
            return Err(AppError::AlreadyExists("Review already exists".to_string()));
        }
        if !self.reviewers.exists(reviewer_id).await? {
            return Err(AppError::NotFound(format!(
                "Reviewer with id {} not found",
                reviewer_id
            )));
        }
        if !self.pokemon.exists(pokemon_id).await? {
            return Err(AppError::NotFound(format!(
                "Pokemon with id {} not found",
                pokemon_id
            )));
        }

        let created = self
            .repo
            .create(&NewReview {
                title: changes.title,
                text: changes.text,
                rating: changes.rating,
                pokemon_id,
                reviewer_id,
            })
            .await?;
        Ok(created.into())
    }

    /// Update title, text and rating
    pub async fn update(&self, id: i32, dto: UpsertReviewDto) -> Result<ReviewResponseDto> {
        let changes = ReviewChanges::from(dto);

        if !self.repo.exists(id).await? {
            return Err(not_found(id));
        }

        if let Some(existing) = self.repo.find_by_title(&normalize_name(&changes.title)).await? {
            if existing.id != id {
                return Err(AppError::AlreadyExists("Review already exists".to_string()));
            }
        }

        self.repo
            .update(id, &changes)
            .await?
            .map(Into::into)
            .ok_or_else(|| not_found(id))
    }

    pub async fn delete(&self, id: i32) -> Result<()> {
        if !self.repo.delete(id).await? {
            return Err(not_found(id));
        }

        tracing::info!("Review deleted: id={}", id);
        Ok(())
    }

    /// Delete every listed review that exists; unknown ids are skipped
    pub async fn delete_many(&self, ids: &[i32]) -> Result<u64> {
        let deleted = self.repo.delete_many(ids).await?;

        tracing::info!("Reviews deleted: requested={}, deleted={}", ids.len(), deleted);
        Ok(deleted)
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Review with id {} not found", id))
}
