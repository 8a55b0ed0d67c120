use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::{handle_db_error, Result};
use crate::features::countries::models::{Country, NewCountry};
use crate::features::owners::models::Owner;

#[async_trait]
pub trait CountryRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Country>>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Country>>;

    /// Case-insensitive lookup on the trimmed name
    async fn find_by_name(&self, name: &str) -> Result<Option<Country>>;

    async fn exists(&self, id: i32) -> Result<bool>;

    /// Country the owner belongs to
    async fn find_by_owner(&self, owner_id: i32) -> Result<Option<Country>>;

    async fn list_owners(&self, country_id: i32) -> Result<Vec<Owner>>;

    async fn create(&self, country: &NewCountry) -> Result<Country>;

    async fn update(&self, id: i32, country: &NewCountry) -> Result<Option<Country>>;

    async fn delete(&self, id: i32) -> Result<bool>;
}

pub struct PgCountryRepository {
    pool: PgPool,
}

impl PgCountryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CountryRepository for PgCountryRepository {
    async fn list(&self) -> Result<Vec<Country>> {
        sqlx::query_as::<_, Country>("SELECT id, name FROM countries ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list countries: {:?}", e);
                handle_db_error(e)
            })
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Country>> {
        sqlx::query_as::<_, Country>("SELECT id, name FROM countries WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(handle_db_error)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Country>> {
        sqlx::query_as::<_, Country>(
            "SELECT id, name FROM countries WHERE UPPER(TRIM(name)) = UPPER(TRIM($1))",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(handle_db_error)
    }

    async fn exists(&self, id: i32) -> Result<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM countries WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(handle_db_error)
    }

    async fn find_by_owner(&self, owner_id: i32) -> Result<Option<Country>> {
        sqlx::query_as::<_, Country>(
            r#"
            SELECT c.id, c.name
            FROM owners o
            JOIN countries c ON c.id = o.country_id
            WHERE o.id = $1
            "#,
        )
        .bind(owner_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get country of owner {}: {:?}", owner_id, e);
            handle_db_error(e)
        })
    }

    async fn list_owners(&self, country_id: i32) -> Result<Vec<Owner>> {
        sqlx::query_as::<_, Owner>(
            r#"
            SELECT id, first_name, last_name, gym, country_id
            FROM owners
            WHERE country_id = $1
            ORDER BY id
            "#,
        )
        .bind(country_id)
        .fetch_all(&self.pool)
        .await
        .map_err(handle_db_error)
    }

    async fn create(&self, country: &NewCountry) -> Result<Country> {
        let created = sqlx::query_as::<_, Country>(
            "INSERT INTO countries (name) VALUES ($1) RETURNING id, name",
        )
        .bind(&country.name)
        .fetch_one(&self.pool)
        .await
        .map_err(handle_db_error)?;

        tracing::info!("Country created: id={}, name={}", created.id, created.name);
        Ok(created)
    }

    async fn update(&self, id: i32, country: &NewCountry) -> Result<Option<Country>> {
        sqlx::query_as::<_, Country>(
            "UPDATE countries SET name = $1 WHERE id = $2 RETURNING id, name",
        )
        .bind(&country.name)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(handle_db_error)
    }

    async fn delete(&self, id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM countries WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(handle_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}
