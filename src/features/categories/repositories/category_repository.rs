use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::{handle_db_error, Result};
use crate::features::categories::models::{Category, NewCategory};
use crate::features::pokemon::models::Pokemon;

/// Persistence access for categories and their pokemon links
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Category>>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Category>>;

    /// Case-insensitive lookup on the trimmed name
    async fn find_by_name(&self, name: &str) -> Result<Option<Category>>;

    async fn exists(&self, id: i32) -> Result<bool>;

    /// Pokemon linked to the category
    async fn list_pokemon(&self, category_id: i32) -> Result<Vec<Pokemon>>;

    /// Categories linked to the pokemon
    async fn list_by_pokemon(&self, pokemon_id: i32) -> Result<Vec<Category>>;

    async fn create(&self, category: &NewCategory) -> Result<Category>;

    async fn update(&self, id: i32, category: &NewCategory) -> Result<Option<Category>>;

    /// Returns false when no row matched
    async fn delete(&self, id: i32) -> Result<bool>;
}

pub struct PgCategoryRepository {
    pool: PgPool,
}

impl PgCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    async fn list(&self) -> Result<Vec<Category>> {
        sqlx::query_as::<_, Category>("SELECT id, name FROM categories ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list categories: {:?}", e);
                handle_db_error(e)
            })
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Category>> {
        sqlx::query_as::<_, Category>("SELECT id, name FROM categories WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get category {}: {:?}", id, e);
                handle_db_error(e)
            })
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Category>> {
        sqlx::query_as::<_, Category>(
            "SELECT id, name FROM categories WHERE UPPER(TRIM(name)) = UPPER(TRIM($1))",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(handle_db_error)
    }

    async fn exists(&self, id: i32) -> Result<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM categories WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(handle_db_error)
    }

    async fn list_pokemon(&self, category_id: i32) -> Result<Vec<Pokemon>> {
        sqlx::query_as::<_, Pokemon>(
            r#"
            SELECT p.id, p.name, p.birth_date
            FROM pokemon_categories pc
            JOIN pokemon p ON p.id = pc.pokemon_id
            WHERE pc.category_id = $1
            ORDER BY p.id
            "#,
        )
        .bind(category_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list pokemon of category {}: {:?}", category_id, e);
            handle_db_error(e)
        })
    }

    async fn list_by_pokemon(&self, pokemon_id: i32) -> Result<Vec<Category>> {
        sqlx::query_as::<_, Category>(
            r#"
            SELECT c.id, c.name
            FROM pokemon_categories pc
            JOIN categories c ON c.id = pc.category_id
            WHERE pc.pokemon_id = $1
            ORDER BY c.id
            "#,
        )
        .bind(pokemon_id)
        .fetch_all(&self.pool)
        .await
        .map_err(handle_db_error)
    }

    async fn create(&self, category: &NewCategory) -> Result<Category> {
        let created = sqlx::query_as::<_, Category>(
            "INSERT INTO categories (name) VALUES ($1) RETURNING id, name",
        )
        .bind(&category.name)
        .fetch_one(&self.pool)
        .await
        .map_err(handle_db_error)?;

        tracing::info!("Category created: id={}, name={}", created.id, created.name);
        Ok(created)
    }

    async fn update(&self, id: i32, category: &NewCategory) -> Result<Option<Category>> {
        sqlx::query_as::<_, Category>(
            "UPDATE categories SET name = $1 WHERE id = $2 RETURNING id, name",
        )
        .bind(&category.name)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(handle_db_error)
    }

    async fn delete(&self, id: i32) -> Result<bool> {
        // pokemon_categories rows cascade
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(handle_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}
