use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::reviewers::dtos::{ReviewerResponseDto, UpsertReviewerDto};
use crate::features::reviewers::models::NewReviewer;
use crate::features::reviewers::repositories::ReviewerRepository;
use crate::features::reviews::dtos::ReviewResponseDto;
use crate::features::reviews::repositories::ReviewRepository;
use crate::shared::validation::normalize_name;

pub struct ReviewerService {
    repo: Arc<dyn ReviewerRepository>,
    reviews: Arc<dyn ReviewRepository>,
}

impl ReviewerService {
    pub fn new(repo: Arc<dyn ReviewerRepository>, reviews: Arc<dyn ReviewRepository>) -> Self {
        Self { repo, reviews }
    }

    pub async fn list(&self) -> Result<Vec<ReviewerResponseDto>> {
        let reviewers = self.repo.list().await?;
        Ok(reviewers.into_iter().map(Into::into).collect())
    }

    pub async fn get(&self, id: i32) -> Result<ReviewerResponseDto> {
        self.repo
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| not_found(id))
    }

    /// Reviews written by a reviewer
    pub async fn list_reviews(&self, id: i32) -> Result<Vec<ReviewResponseDto>> {
        if !self.repo.exists(id).await? {
            return Err(not_found(id));
        }

        let reviews = self.reviews.list_by_reviewer(id).await?;
        Ok(reviews.into_iter().map(Into::into).collect())
    }

    pub async fn create(&self, dto: UpsertReviewerDto) -> Result<ReviewerResponseDto> {
        let reviewer = NewReviewer::from(dto);

        if self.repo.find_by_last_name(&normalize_name(&reviewer.last_name)).await?.is_some() {
            return Err(AppError::AlreadyExists("Reviewer already exists".to_string()));
        }

        let created = self.repo.create(&reviewer).await?;
        Ok(created.into())
    }

    pub async fn update(&self, id: i32, dto: UpsertReviewerDto) -> Result<ReviewerResponseDto> {
        let reviewer = NewReviewer::from(dto);

        if !self.repo.exists(id).await? {
            return Err(not_found(id));
        }

        let taken = self
            .repo
            .find_by_last_name(&normalize_name(&reviewer.last_name))
            .await?;
        if let Some(existing) = taken {
            if existing.id != id {
                return Err(AppError::AlreadyExists("Reviewer already exists".to_string()));
            }
        }

        self.repo
            .update(id, &reviewer)
            .await?
            .map(Into::into)
            .ok_or_else(|| not_found(id))
    }

    /// Delete a reviewer together with every review they wrote
    pub async fn delete(&self, id: i32) -> Result<()> {
        let removed_reviews = self
            .repo
            .delete_with_reviews(id)
            .await?
            .ok_or_else(|| not_found(id))?;

        tracing::info!(
            "Reviewer deleted: id={}, reviews_removed={}",
            id,
            removed_reviews
        );
        Ok(())
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Reviewer with id {} not found", id))
}
