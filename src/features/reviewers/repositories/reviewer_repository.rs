use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::{handle_db_error, Result};
use crate::features::reviewers::models::{NewReviewer, Reviewer};

#[async_trait]
pub trait ReviewerRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Reviewer>>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Reviewer>>;

    /// Case-insensitive lookup on the trimmed last name
    async fn find_by_last_name(&self, last_name: &str) -> Result<Option<Reviewer>>;

    async fn exists(&self, id: i32) -> Result<bool>;

    async fn create(&self, reviewer: &NewReviewer) -> Result<Reviewer>;

    async fn update(&self, id: i32, reviewer: &NewReviewer) -> Result<Option<Reviewer>>;

    /// Delete the reviewer's reviews, then the reviewer, in a single transaction.
    ///
    /// Returns the number of reviews removed, or `None` if the reviewer did not exist.
    async fn delete_with_reviews(&self, id: i32) -> Result<Option<u64>>;
}

pub struct PgReviewerRepository {
    pool: PgPool,
}

impl PgReviewerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReviewerRepository for PgReviewerRepository {
    async fn list(&self) -> Result<Vec<Reviewer>> {
        sqlx::query_as::<_, Reviewer>(
            "SELECT id, first_name, last_name FROM reviewers ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list reviewers: {:?}", e);
            handle_db_error(e)
        })
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Reviewer>> {
        sqlx::query_as::<_, Reviewer>(
            "SELECT id, first_name, last_name FROM reviewers WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(handle_db_error)
    }

    async fn find_by_last_name(&self, last_name: &str) -> Result<Option<Reviewer>> {
        sqlx::query_as::<_, Reviewer>(
            r#"
            SELECT id, first_name, last_name
            FROM reviewers
            WHERE UPPER(TRIM(last_name)) = UPPER(TRIM($1))
            "#,
        )
        .bind(last_name)
        .fetch_optional(&self.pool)
        .await
        .map_err(handle_db_error)
    }

    async fn exists(&self, id: i32) -> Result<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM reviewers WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(handle_db_error)
    }

    async fn create(&self, reviewer: &NewReviewer) -> Result<Reviewer> {
        let created = sqlx::query_as::<_, Reviewer>(
            r#"
            INSERT INTO reviewers (first_name, last_name)
            VALUES ($1, $2)
            RETURNING id, first_name, last_name
            "#,
        )
        .bind(&reviewer.first_name)
        .bind(&reviewer.last_name)
        .fetch_one(&self.pool)
        .await
        .map_err(handle_db_error)?;

        tracing::info!("Reviewer created: id={}", created.id);
        Ok(created)
    }

    async fn update(&self, id: i32, reviewer: &NewReviewer) -> Result<Option<Reviewer>> {
        sqlx::query_as::<_, Reviewer>(
            r#"
            UPDATE reviewers
            SET first_name = $1, last_name = $2
            WHERE id = $3
            RETURNING id, first_name, last_name
            "#,
        )
        .bind(&reviewer.first_name)
        .bind(&reviewer.last_name)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(handle_db_error)
    }

    async fn delete_with_reviews(&self, id: i32) -> Result<Option<u64>> {
        let mut tx = self.pool.begin().await.map_err(handle_db_error)?;

        let reviews = sqlx::query("DELETE FROM reviews WHERE reviewer_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(handle_db_error)?;

        let deleted = sqlx::query("DELETE FROM reviewers WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(handle_db_error)?;

        if deleted.rows_affected() == 0 {
            tx.rollback().await.map_err(handle_db_error)?;
            return Ok(None);
        }

        tx.commit().await.map_err(|e| {
            tracing::error!("Failed to commit reviewer deletion: {:?}", e);
            handle_db_error(e)
        })?;
        Ok(Some(reviews.rows_affected()))
    }
}
