use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::{handle_db_error, Result};
use crate::features::pokemon::models::{NewPokemon, Pokemon, PokemonCategory, PokemonOwner};

/// Rows written by [`PokemonRepository::create_with_associations`]
#[derive(Debug, Clone)]
pub struct CreatedPokemon {
    pub pokemon: Pokemon,
    pub owner_link: PokemonOwner,
    pub category_link: PokemonCategory,
}

/// Persistence access for pokemon rows
#[async_trait]
pub trait PokemonRepository: Send + Sync {
    /// All pokemon ordered by id
    async fn list(&self) -> Result<Vec<Pokemon>>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Pokemon>>;

    /// Case-insensitive lookup on the trimmed name
    async fn find_by_name(&self, name: &str) -> Result<Option<Pokemon>>;

    async fn exists(&self, id: i32) -> Result<bool>;

    /// Ratings of every review written about the pokemon
    async fn review_ratings(&self, pokemon_id: i32) -> Result<Vec<i32>>;

    /// Insert the pokemon plus one owner and one category association in a single transaction
    async fn create_with_associations(
        &self,
        owner_id: i32,
        category_id: i32,
        pokemon: &NewPokemon,
    ) -> Result<CreatedPokemon>;

    async fn update(&self, id: i32, pokemon: &NewPokemon) -> Result<Option<Pokemon>>;

    /// Delete the pokemon's reviews, then the pokemon, in a single transaction.
    ///
    /// Returns the number of reviews removed, or `None` if the pokemon did not exist.
    async fn delete_with_reviews(&self, id: i32) -> Result<Option<u64>>;
}

pub struct PgPokemonRepository {
    pool: PgPool,
}

impl PgPokemonRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PokemonRepository for PgPokemonRepository {
    async fn list(&self) -> Result<Vec<Pokemon>> {
        sqlx::query_as::<_, Pokemon>(
            r#"
            SELECT id, name, birth_date
            FROM pokemon
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list pokemon: {:?}", e);
            handle_db_error(e)
        })
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Pokemon>> {
        sqlx::query_as::<_, Pokemon>(
            r#"
            SELECT id, name, birth_date
            FROM pokemon
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get pokemon {}: {:?}", id, e);
            handle_db_error(e)
        })
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Pokemon>> {
        sqlx::query_as::<_, Pokemon>(
            r#"
            SELECT id, name, birth_date
            FROM pokemon
            WHERE UPPER(TRIM(name)) = UPPER(TRIM($1))
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get pokemon by name: {:?}", e);
            handle_db_error(e)
        })
    }

    async fn exists(&self, id: i32) -> Result<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM pokemon WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(handle_db_error)
    }

    async fn review_ratings(&self, pokemon_id: i32) -> Result<Vec<i32>> {
        sqlx::query_scalar::<_, i32>("SELECT rating FROM reviews WHERE pokemon_id = $1")
            .bind(pokemon_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to load ratings for pokemon {}: {:?}", pokemon_id, e);
                handle_db_error(e)
            })
    }

    async fn create_with_associations(
        &self,
        owner_id: i32,
        category_id: i32,
        pokemon: &NewPokemon,
    ) -> Result<CreatedPokemon> {
        let mut tx = self.pool.begin().await.map_err(handle_db_error)?;

        let created = sqlx::query_as::<_, Pokemon>(
            r#"
            INSERT INTO pokemon (name, birth_date)
            VALUES ($1, $2)
            RETURNING id, name, birth_date
            "#,
        )
        .bind(&pokemon.name)
        .bind(pokemon.birth_date)
        .fetch_one(&mut *tx)
        .await
        .map_err(handle_db_error)?;

        let owner_link = sqlx::query_as::<_, PokemonOwner>(
            r#"
            INSERT INTO pokemon_owners (pokemon_id, owner_id)
            VALUES ($1, $2)
            RETURNING pokemon_id, owner_id
            "#,
        )
        .bind(created.id)
        .bind(owner_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(handle_db_error)?;

        let category_link = sqlx::query_as::<_, PokemonCategory>(
            r#"
            INSERT INTO pokemon_categories (pokemon_id, category_id)
            VALUES ($1, $2)
            RETURNING pokemon_id, category_id
            "#,
        )
        .bind(created.id)
        .bind(category_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(handle_db_error)?;

        // Dropping `tx` on any early return above rolls back every insert.
        tx.commit().await.map_err(|e| {
            tracing::error!("Failed to commit pokemon creation: {:?}", e);
            handle_db_error(e)
        })?;

        Ok(CreatedPokemon {
            pokemon: created,
            owner_link,
            category_link,
        })
    }

    async fn update(&self, id: i32, pokemon: &NewPokemon) -> Result<Option<Pokemon>> {
        sqlx::query_as::<_, Pokemon>(
            r#"
            UPDATE pokemon
            SET name = $1, birth_date = $2
            WHERE id = $3
            RETURNING id, name, birth_date
            "#,
        )
        .bind(&pokemon.name)
        .bind(pokemon.birth_date)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(handle_db_error)
    }

    async fn delete_with_reviews(&self, id: i32) -> Result<Option<u64>> {
        let mut tx = self.pool.begin().await.map_err(handle_db_error)?;

        let reviews = sqlx::query("DELETE FROM reviews WHERE pokemon_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(handle_db_error)?;

        // Association rows go with the pokemon (ON DELETE CASCADE).
        let deleted = sqlx::query("DELETE FROM pokemon WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(handle_db_error)?;

        if deleted.rows_affected() == 0 {
            tx.rollback().await.map_err(handle_db_error)?;
            return Ok(None);
        }

        tx.commit().await.map_err(handle_db_error)?;
        Ok(Some(reviews.rows_affected()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn pikachu() -> NewPokemon {
        NewPokemon {
            name: "Pikachu".to_string(),
            birth_date: NaiveDate::from_ymd_opt(2002, 1, 2).unwrap(),
        }
    }

    async fn seed_owner_and_category(pool: &PgPool) -> (i32, i32) {
        let country_id: i32 =
            sqlx::query_scalar("INSERT INTO countries (name) VALUES ('Kanto') RETURNING id")
                .fetch_one(pool)
                .await
                .unwrap();
        let owner_id: i32 = sqlx::query_scalar(
            "INSERT INTO owners (first_name, last_name, gym, country_id) VALUES ('Ash', 'Ketchum', NULL, $1) RETURNING id",
        )
        .bind(country_id)
        .fetch_one(pool)
        .await
        .unwrap();
        let category_id: i32 =
            sqlx::query_scalar("INSERT INTO categories (name) VALUES ('Electric') RETURNING id")
                .fetch_one(pool)
                .await
                .unwrap();
        (owner_id, category_id)
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL pointing at a PostgreSQL server"]
    async fn test_create_writes_pokemon_and_both_links(pool: PgPool) {
        let (owner_id, category_id) = seed_owner_and_category(&pool).await;
        let repo = PgPokemonRepository::new(pool.clone());

        let created = repo
            .create_with_associations(owner_id, category_id, &pikachu())
            .await
            .unwrap();

        assert_eq!(created.owner_link.owner_id, owner_id);
        assert_eq!(created.category_link.category_id, category_id);
        assert!(repo.exists(created.pokemon.id).await.unwrap());

        let links: i64 = sqlx::query_scalar(
            "SELECT (SELECT COUNT(*) FROM pokemon_owners) + (SELECT COUNT(*) FROM pokemon_categories)",
        )
        .fetch_one(&pool)
        .await
        .unwrap();
        assert_eq!(links, 2);
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL pointing at a PostgreSQL server"]
    async fn test_failed_association_rolls_back_pokemon(pool: PgPool) {
        let (owner_id, _) = seed_owner_and_category(&pool).await;
        let repo = PgPokemonRepository::new(pool.clone());

        let result = repo
            .create_with_associations(owner_id, 9999, &pikachu())
            .await;
        assert!(result.is_err());

        let remaining: i64 = sqlx::query_scalar(
            "SELECT (SELECT COUNT(*) FROM pokemon) + (SELECT COUNT(*) FROM pokemon_owners)",
        )
        .fetch_one(&pool)
        .await
        .unwrap();
        assert_eq!(remaining, 0);
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL pointing at a PostgreSQL server"]
    async fn test_delete_removes_reviews_first(pool: PgPool) {
        let (owner_id, category_id) = seed_owner_and_category(&pool).await;
        let repo = PgPokemonRepository::new(pool.clone());
        let created = repo
            .create_with_associations(owner_id, category_id, &pikachu())
            .await
            .unwrap();

        let reviewer_id: i32 = sqlx::query_scalar(
            "INSERT INTO reviewers (first_name, last_name) VALUES ('Kate', 'Lamy') RETURNING id",
        )
        .fetch_one(&pool)
        .await
        .unwrap();
        for (title, rating) in [("Great", 5), ("Good", 4)] {
            sqlx::query(
                "INSERT INTO reviews (title, text, rating, pokemon_id, reviewer_id) VALUES ($1, 'text', $2, $3, $4)",
            )
            .bind(title)
            .bind(rating)
            .bind(created.pokemon.id)
            .bind(reviewer_id)
            .execute(&pool)
            .await
            .unwrap();
        }

        let removed = repo.delete_with_reviews(created.pokemon.id).await.unwrap();
        assert_eq!(removed, Some(2));
        assert!(!repo.exists(created.pokemon.id).await.unwrap());
        assert!(repo.review_ratings(created.pokemon.id).await.unwrap().is_empty());
        assert_eq!(repo.delete_with_reviews(created.pokemon.id).await.unwrap(), None);
    }
}
