use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::{handle_db_error, Result};
use crate::features::reviews::models::{NewReview, Review, ReviewChanges};

const REVIEW_COLUMNS: &str = "id, title, text, rating, pokemon_id, reviewer_id";

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Review>>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Review>>;

    /// Case-insensitive lookup on the trimmed title
    async fn find_by_title(&self, title: &str) -> Result<Option<Review>>;

    async fn exists(&self, id: i32) -> Result<bool>;

    async fn list_by_pokemon(&self, pokemon_id: i32) -> Result<Vec<Review>>;

    async fn list_by_reviewer(&self, reviewer_id: i32) -> Result<Vec<Review>>;

    async fn create(&self, review: &NewReview) -> Result<Review>;

    async fn update(&self, id: i32, changes: &ReviewChanges) -> Result<Option<Review>>;

    async fn delete(&self, id: i32) -> Result<bool>;

    /// Delete a batch of reviews in one statement, returning how many were removed
    async fn delete_many(&self, ids: &[i32]) -> Result<u64>;
}

pub struct PgReviewRepository {
    pool: PgPool,
}

impl PgReviewRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReviewRepository for PgReviewRepository {
    async fn list(&self) -> Result<Vec<Review>> {
        let sql = format!("SELECT {} FROM reviews ORDER BY id", REVIEW_COLUMNS);
        sqlx::query_as::<_, Review>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list reviews: {:?}", e);
                handle_db_error(e)
            })
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Review>> {
        let sql = format!("SELECT {} FROM reviews WHERE id = $1", REVIEW_COLUMNS);
        sqlx::query_as::<_, Review>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(handle_db_error)
    }

    async fn find_by_title(&self, title: &str) -> Result<Option<Review>> {
        let sql = format!(
            "SELECT {} FROM reviews WHERE UPPER(TRIM(title)) = UPPER(TRIM($1))",
            REVIEW_COLUMNS
        );
        sqlx::query_as::<_, Review>(&sql)
            .bind(title)
            .fetch_optional(&self.pool)
            .await
            .map_err(handle_db_error)
    }

    async fn exists(&self, id: i32) -> Result<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM reviews WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(handle_db_error)
    }

    async fn list_by_pokemon(&self, pokemon_id: i32) -> Result<Vec<Review>> {
        let sql = format!(
            "SELECT {} FROM reviews WHERE pokemon_id = $1 ORDER BY id",
            REVIEW_COLUMNS
        );
        sqlx::query_as::<_, Review>(&sql)
            .bind(pokemon_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list reviews of pokemon {}: {:?}", pokemon_id, e);
                handle_db_error(e)
            })
    }

    async fn list_by_reviewer(&self, reviewer_id: i32) -> Result<Vec<Review>> {
        let sql = format!(
            "SELECT {} FROM reviews WHERE reviewer_id = $1 ORDER BY id",
            REVIEW_COLUMNS
        );
        sqlx::query_as::<_, Review>(&sql)
            .bind(reviewer_id)
            .fetch_all(&self.pool)
            .await
            .map_err(handle_db_error)
    }

    async fn create(&self, review: &NewReview) -> Result<Review> {
        let sql = format!(
            r#"
            INSERT INTO reviews (title, text, rating, pokemon_id, reviewer_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {}
            "#,
            REVIEW_COLUMNS
        );
        let created = sqlx::query_as::<_, Review>(&sql)
            .bind(&review.title)
            .bind(&review.text)
            .bind(review.rating)
            .bind(review.pokemon_id)
            .bind(review.reviewer_id)
            .fetch_one(&self.pool)
            .await
            .map_err(handle_db_error)?;

        tracing::info!(
            "Review created: id={}, pokemon_id={}, reviewer_id={}",
            created.id,
            created.pokemon_id,
            created.reviewer_id
        );
        Ok(created)
    }

    async fn update(&self, id: i32, changes: &ReviewChanges) -> Result<Option<Review>> {
        let sql = format!(
            r#"
            UPDATE reviews
            SET title = $1, text = $2, rating = $3
            WHERE id = $4
            RETURNING {}
            "#,
            REVIEW_COLUMNS
        );
        sqlx::query_as::<_, Review>(&sql)
            .bind(&changes.title)
            .bind(&changes.text)
            .bind(changes.rating)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(handle_db_error)
    }

    async fn delete(&self, id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM reviews WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(handle_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_many(&self, ids: &[i32]) -> Result<u64> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = sqlx::query("DELETE FROM reviews WHERE id = ANY($1)")
            .bind(ids)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to bulk delete {} reviews: {:?}", ids.len(), e);
                handle_db_error(e)
            })?;

        Ok(result.rows_affected())
    }
}
