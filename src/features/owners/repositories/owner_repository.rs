use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::{handle_db_error, Result};
use crate::features::owners::models::{NewOwner, Owner};
use crate::features::pokemon::models::Pokemon;

#[async_trait]
pub trait OwnerRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Owner>>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Owner>>;

    /// Case-insensitive lookup on the trimmed last name
    async fn find_by_last_name(&self, last_name: &str) -> Result<Option<Owner>>;

    async fn exists(&self, id: i32) -> Result<bool>;

    /// Owners linked to the pokemon
    async fn list_by_pokemon(&self, pokemon_id: i32) -> Result<Vec<Owner>>;

    /// Pokemon linked to the owner
    async fn list_pokemon(&self, owner_id: i32) -> Result<Vec<Pokemon>>;

    async fn create(&self, owner: &NewOwner) -> Result<Owner>;

    async fn update(&self, id: i32, owner: &NewOwner) -> Result<Option<Owner>>;

    async fn delete(&self, id: i32) -> Result<bool>;
}

pub struct PgOwnerRepository {
    pool: PgPool,
}

impl PgOwnerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OwnerRepository for PgOwnerRepository {
    async fn list(&self) -> Result<Vec<Owner>> {
        sqlx::query_as::<_, Owner>(
            "SELECT id, first_name, last_name, gym, country_id FROM owners ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list owners: {:?}", e);
            handle_db_error(e)
        })
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Owner>> {
        sqlx::query_as::<_, Owner>(
            "SELECT id, first_name, last_name, gym, country_id FROM owners WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(handle_db_error)
    }

    async fn find_by_last_name(&self, last_name: &str) -> Result<Option<Owner>> {
        sqlx::query_as::<_, Owner>(
            r#"
            SELECT id, first_name, last_name, gym, country_id
            FROM owners
            WHERE UPPER(TRIM(last_name)) = UPPER(TRIM($1))
            "#,
        )
        .bind(last_name)
        .fetch_optional(&self.pool)
        .await
        .map_err(handle_db_error)
    }

    async fn exists(&self, id: i32) -> Result<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM owners WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(handle_db_error)
    }

    async fn list_by_pokemon(&self, pokemon_id: i32) -> Result<Vec<Owner>> {
        sqlx::query_as::<_, Owner>(
            r#"
            SELECT o.id, o.first_name, o.last_name, o.gym, o.country_id
            FROM pokemon_owners po
            JOIN owners o ON o.id = po.owner_id
            WHERE po.pokemon_id = $1
            ORDER BY o.id
            "#,
        )
        .bind(pokemon_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list owners of pokemon {}: {:?}", pokemon_id, e);
            handle_db_error(e)
        })
    }

    async fn list_pokemon(&self, owner_id: i32) -> Result<Vec<Pokemon>> {
        sqlx::query_as::<_, Pokemon>(
            r#"
            SELECT p.id, p.name, p.birth_date
            FROM pokemon_owners po
            JOIN pokemon p ON p.id = po.pokemon_id
            WHERE po.owner_id = $1
            ORDER BY p.id
            "#,
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await
        .map_err(handle_db_error)
    }

    async fn create(&self, owner: &NewOwner) -> Result<Owner> {
        let created = sqlx::query_as::<_, Owner>(
            r#"
            INSERT INTO owners (first_name, last_name, gym, country_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, first_name, last_name, gym, country_id
            "#,
        )
        .bind(&owner.first_name)
        .bind(&owner.last_name)
        .bind(&owner.gym)
        .bind(owner.country_id)
        .fetch_one(&self.pool)
        .await
        .map_err(handle_db_error)?;

        tracing::info!(
            "Owner created: id={}, country_id={}",
            created.id,
            created.country_id
        );
        Ok(created)
    }

    async fn update(&self, id: i32, owner: &NewOwner) -> Result<Option<Owner>> {
        sqlx::query_as::<_, Owner>(
            r#"
            UPDATE owners
            SET first_name = $1, last_name = $2, gym = $3, country_id = $4
            WHERE id = $5
            RETURNING id, first_name, last_name, gym, country_id
            "#,
        )
        .bind(&owner.first_name)
        .bind(&owner.last_name)
        .bind(&owner.gym)
        .bind(owner.country_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(handle_db_error)
    }

    async fn delete(&self, id: i32) -> Result<bool> {
        // pokemon_owners rows cascade
        let result = sqlx::query("DELETE FROM owners WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(handle_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}
