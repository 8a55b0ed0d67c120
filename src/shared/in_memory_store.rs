//! In-memory stand-in for the PostgreSQL schema.
//!
//! Implements every repository trait over one shared state so service and
//! router tests run without a database. Unique indexes, foreign keys and
//! `ON DELETE CASCADE` links behave like the migrations declare them.

use std::collections::{BTreeMap, BTreeSet};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::core::error::{AppError, Result};
use crate::features::categories::models::{Category, NewCategory};
use crate::features::categories::repositories::CategoryRepository;
use crate::features::countries::models::{Country, NewCountry};
use crate::features::countries::repositories::CountryRepository;
use crate::features::owners::models::{NewOwner, Owner};
use crate::features::owners::repositories::OwnerRepository;
use crate::features::pokemon::models::{NewPokemon, Pokemon, PokemonCategory, PokemonOwner};
use crate::features::pokemon::repositories::pokemon_repository::CreatedPokemon;
use crate::features::pokemon::repositories::PokemonRepository;
use crate::features::reviewers::models::{NewReviewer, Reviewer};
use crate::features::reviewers::repositories::ReviewerRepository;
use crate::features::reviews::models::{NewReview, Review, ReviewChanges};
use crate::features::reviews::repositories::ReviewRepository;
use crate::shared::validation::normalize_name;

#[derive(Default)]
struct State {
    next_id: i32,
    pokemon: BTreeMap<i32, Pokemon>,
    categories: BTreeMap<i32, Category>,
    countries: BTreeMap<i32, Country>,
    owners: BTreeMap<i32, Owner>,
    reviewers: BTreeMap<i32, Reviewer>,
    reviews: BTreeMap<i32, Review>,
    /// (pokemon_id, category_id)
    pokemon_categories: BTreeSet<(i32, i32)>,
    /// (pokemon_id, owner_id)
    pokemon_owners: BTreeSet<(i32, i32)>,
}

impl State {
    fn next_id(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }
}

#[derive(Default)]
pub struct InMemoryStore {
    state: RwLock<State>,
}

impl InMemoryStore {
    /// Insert a pokemon without owner or category links
    pub async fn insert_pokemon_unlinked(&self, pokemon: NewPokemon) -> Pokemon {
        let mut state = self.state.write().await;
        let id = state.next_id();
        let row = Pokemon {
            id,
            name: pokemon.name,
            birth_date: pokemon.birth_date,
        };
        state.pokemon.insert(id, row.clone());
        row
    }
}

/// Mirrors a unique index on `UPPER(TRIM(column))`
fn ensure_unique<'a, T: 'a>(
    rows: impl IntoIterator<Item = (&'a i32, &'a T)>,
    key: impl Fn(&T) -> &str,
    value: &str,
    except_id: Option<i32>,
    entity: &str,
) -> Result<()> {
    let wanted = normalize_name(value);
    let taken = rows
        .into_iter()
        .any(|(id, row)| Some(*id) != except_id && normalize_name(key(row)) == wanted);
    if taken {
        return Err(AppError::AlreadyExists(format!("{} already exists", entity)));
    }
    Ok(())
}

fn find_by_key<T: Clone>(
    rows: &BTreeMap<i32, T>,
    key: impl Fn(&T) -> &str,
    value: &str,
) -> Option<T> {
    let wanted = normalize_name(value);
    rows.values()
        .find(|row| normalize_name(key(row)) == wanted)
        .cloned()
}

fn foreign_key_violation() -> AppError {
    AppError::Conflict("Referenced record does not exist or is still in use.".to_string())
}

#[async_trait]
impl PokemonRepository for InMemoryStore {
    async fn list(&self) -> Result<Vec<Pokemon>> {
        Ok(self.state.read().await.pokemon.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Pokemon>> {
        Ok(self.state.read().await.pokemon.get(&id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Pokemon>> {
        Ok(find_by_key(&self.state.read().await.pokemon, |p| p.name.as_str(), name))
    }

    async fn exists(&self, id: i32) -> Result<bool> {
        Ok(self.state.read().await.pokemon.contains_key(&id))
    }

    async fn review_ratings(&self, pokemon_id: i32) -> Result<Vec<i32>> {
        let state = self.state.read().await;
        Ok(state
            .reviews
            .values()
            .filter(|r| r.pokemon_id == pokemon_id)
            .map(|r| r.rating)
            .collect())
    }

    async fn create_with_associations(
        &self,
        owner_id: i32,
        category_id: i32,
        pokemon: &NewPokemon,
    ) -> Result<CreatedPokemon> {
        let mut state = self.state.write().await;
        ensure_unique(&state.pokemon, |p| p.name.as_str(), &pokemon.name, None, "Pokemon")?;
        if !state.owners.contains_key(&owner_id) || !state.categories.contains_key(&category_id) {
            return Err(foreign_key_violation());
        }

        let id = state.next_id();
        let row = Pokemon {
            id,
            name: pokemon.name.clone(),
            birth_date: pokemon.birth_date,
        };
        state.pokemon.insert(id, row.clone());
        state.pokemon_owners.insert((id, owner_id));
        state.pokemon_categories.insert((id, category_id));

        Ok(CreatedPokemon {
            pokemon: row,
            owner_link: PokemonOwner {
                pokemon_id: id,
                owner_id,
            },
            category_link: PokemonCategory {
                pokemon_id: id,
                category_id,
            },
        })
    }

    async fn update(&self, id: i32, pokemon: &NewPokemon) -> Result<Option<Pokemon>> {
        let mut state = self.state.write().await;
        if !state.pokemon.contains_key(&id) {
            return Ok(None);
        }
        ensure_unique(&state.pokemon, |p| p.name.as_str(), &pokemon.name, Some(id), "Pokemon")?;

        Ok(state.pokemon.get_mut(&id).map(|row| {
            row.name = pokemon.name.clone();
            row.birth_date = pokemon.birth_date;
            row.clone()
        }))
    }

    async fn delete_with_reviews(&self, id: i32) -> Result<Option<u64>> {
        let mut state = self.state.write().await;
        if state.pokemon.remove(&id).is_none() {
            return Ok(None);
        }

        let before = state.reviews.len();
        state.reviews.retain(|_, r| r.pokemon_id != id);
        let removed = (before - state.reviews.len()) as u64;

        state.pokemon_owners.retain(|(p, _)| *p != id);
        state.pokemon_categories.retain(|(p, _)| *p != id);
        Ok(Some(removed))
    }
}

#[async_trait]
impl CategoryRepository for InMemoryStore {
    async fn list(&self) -> Result<Vec<Category>> {
        Ok(self.state.read().await.categories.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Category>> {
        Ok(self.state.read().await.categories.get(&id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Category>> {
        Ok(find_by_key(&self.state.read().await.categories, |c| c.name.as_str(), name))
    }

    async fn exists(&self, id: i32) -> Result<bool> {
        Ok(self.state.read().await.categories.contains_key(&id))
    }

    async fn list_pokemon(&self, category_id: i32) -> Result<Vec<Pokemon>> {
        let state = self.state.read().await;
        Ok(state
            .pokemon_categories
            .iter()
            .filter(|(_, c)| *c == category_id)
            .filter_map(|(p, _)| state.pokemon.get(p).cloned())
            .collect())
    }

    async fn list_by_pokemon(&self, pokemon_id: i32) -> Result<Vec<Category>> {
        let state = self.state.read().await;
        Ok(state
            .pokemon_categories
            .iter()
            .filter(|(p, _)| *p == pokemon_id)
            .filter_map(|(_, c)| state.categories.get(c).cloned())
            .collect())
    }

    async fn create(&self, category: &NewCategory) -> Result<Category> {
        let mut state = self.state.write().await;
        ensure_unique(&state.categories, |c| c.name.as_str(), &category.name, None, "Category")?;

        let id = state.next_id();
        let row = Category {
            id,
            name: category.name.clone(),
        };
        state.categories.insert(id, row.clone());
        Ok(row)
    }

    async fn update(&self, id: i32, category: &NewCategory) -> Result<Option<Category>> {
        let mut state = self.state.write().await;
        if !state.categories.contains_key(&id) {
            return Ok(None);
        }
        ensure_unique(&state.categories, |c| c.name.as_str(), &category.name, Some(id), "Category")?;

        Ok(state.categories.get_mut(&id).map(|row| {
            row.name = category.name.clone();
            row.clone()
        }))
    }

    async fn delete(&self, id: i32) -> Result<bool> {
        let mut state = self.state.write().await;
        if state.categories.remove(&id).is_none() {
            return Ok(false);
        }
        state.pokemon_categories.retain(|(_, c)| *c != id);
        Ok(true)
    }
}

#[async_trait]
impl CountryRepository for InMemoryStore {
    async fn list(&self) -> Result<Vec<Country>> {
        Ok(self.state.read().await.countries.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Country>> {
        Ok(self.state.read().await.countries.get(&id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Country>> {
        Ok(find_by_key(&self.state.read().await.countries, |c| c.name.as_str(), name))
    }

    async fn exists(&self, id: i32) -> Result<bool> {
        Ok(self.state.read().await.countries.contains_key(&id))
    }

    async fn find_by_owner(&self, owner_id: i32) -> Result<Option<Country>> {
        let state = self.state.read().await;
        Ok(state
            .owners
            .get(&owner_id)
            .and_then(|o| state.countries.get(&o.country_id).cloned()))
    }

    async fn list_owners(&self, country_id: i32) -> Result<Vec<Owner>> {
        let state = self.state.read().await;
        Ok(state
            .owners
            .values()
            .filter(|o| o.country_id == country_id)
            .cloned()
            .collect())
    }

    async fn create(&self, country: &NewCountry) -> Result<Country> {
        let mut state = self.state.write().await;
        ensure_unique(&state.countries, |c| c.name.as_str(), &country.name, None, "Country")?;

        let id = state.next_id();
        let row = Country {
            id,
            name: country.name.clone(),
        };
        state.countries.insert(id, row.clone());
        Ok(row)
    }

    async fn update(&self, id: i32, country: &NewCountry) -> Result<Option<Country>> {
        let mut state = self.state.write().await;
        if !state.countries.contains_key(&id) {
            return Ok(None);
        }
        ensure_unique(&state.countries, |c| c.name.as_str(), &country.name, Some(id), "Country")?;

        Ok(state.countries.get_mut(&id).map(|row| {
            row.name = country.name.clone();
            row.clone()
        }))
    }

    async fn delete(&self, id: i32) -> Result<bool> {
        let mut state = self.state.write().await;
        if state.owners.values().any(|o| o.country_id == id) {
            return Err(foreign_key_violation());
        }
        Ok(state.countries.remove(&id).is_some())
    }
}

#[async_trait]
impl OwnerRepository for InMemoryStore {
    async fn list(&self) -> Result<Vec<Owner>> {
        Ok(self.state.read().await.owners.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Owner>> {
        Ok(self.state.read().await.owners.get(&id).cloned())
    }

    async fn find_by_last_name(&self, last_name: &str) -> Result<Option<Owner>> {
        Ok(find_by_key(
            &self.state.read().await.owners,
            |o| o.last_name.as_str(),
            last_name,
        ))
    }

    async fn exists(&self, id: i32) -> Result<bool> {
        Ok(self.state.read().await.owners.contains_key(&id))
    }

    async fn list_by_pokemon(&self, pokemon_id: i32) -> Result<Vec<Owner>> {
        let state = self.state.read().await;
        Ok(state
            .pokemon_owners
            .iter()
            .filter(|(p, _)| *p == pokemon_id)
            .filter_map(|(_, o)| state.owners.get(o).cloned())
            .collect())
    }

    async fn list_pokemon(&self, owner_id: i32) -> Result<Vec<Pokemon>> {
        let state = self.state.read().await;
        Ok(state
            .pokemon_owners
            .iter()
            .filter(|(_, o)| *o == owner_id)
            .filter_map(|(p, _)| state.pokemon.get(p).cloned())
            .collect())
    }

    async fn create(&self, owner: &NewOwner) -> Result<Owner> {
        let mut state = self.state.write().await;
        ensure_unique(&state.owners, |o| o.last_name.as_str(), &owner.last_name, None, "Owner")?;
        if !state.countries.contains_key(&owner.country_id) {
            return Err(foreign_key_violation());
        }

        let id = state.next_id();
        let row = Owner {
            id,
            first_name: owner.first_name.clone(),
            last_name: owner.last_name.clone(),
            gym: owner.gym.clone(),
            country_id: owner.country_id,
        };
        state.owners.insert(id, row.clone());
        Ok(row)
    }

    async fn update(&self, id: i32, owner: &NewOwner) -> Result<Option<Owner>> {
        let mut state = self.state.write().await;
        if !state.owners.contains_key(&id) {
            return Ok(None);
        }
        ensure_unique(&state.owners, |o| o.last_name.as_str(), &owner.last_name, Some(id), "Owner")?;
        if !state.countries.contains_key(&owner.country_id) {
            return Err(foreign_key_violation());
        }

        Ok(state.owners.get_mut(&id).map(|row| {
            row.first_name = owner.first_name.clone();
            row.last_name = owner.last_name.clone();
            row.gym = owner.gym.clone();
            row.country_id = owner.country_id;
            row.clone()
        }))
    }

    async fn delete(&self, id: i32) -> Result<bool> {
        let mut state = self.state.write().await;
        if state.owners.remove(&id).is_none() {
            return Ok(false);
        }
        state.pokemon_owners.retain(|(_, o)| *o != id);
        Ok(true)
    }
}

#[async_trait]
impl ReviewerRepository for InMemoryStore {
    async fn list(&self) -> Result<Vec<Reviewer>> {
        Ok(self.state.read().await.reviewers.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Reviewer>> {
        Ok(self.state.read().await.reviewers.get(&id).cloned())
    }

    async fn find_by_last_name(&self, last_name: &str) -> Result<Option<Reviewer>> {
        Ok(find_by_key(
            &self.state.read().await.reviewers,
            |r| r.last_name.as_str(),
            last_name,
        ))
    }

    async fn exists(&self, id: i32) -> Result<bool> {
        Ok(self.state.read().await.reviewers.contains_key(&id))
    }

    async fn create(&self, reviewer: &NewReviewer) -> Result<Reviewer> {
        let mut state = self.state.write().await;
        ensure_unique(
            &state.reviewers,
            |r| r.last_name.as_str(),
            &reviewer.last_name,
            None,
            "Reviewer",
        )?;

        let id = state.next_id();
        let row = Reviewer {
            id,
            first_name: reviewer.first_name.clone(),
            last_name: reviewer.last_name.clone(),
        };
        state.reviewers.insert(id, row.clone());
        Ok(row)
    }

    async fn update(&self, id: i32, reviewer: &NewReviewer) -> Result<Option<Reviewer>> {
        let mut state = self.state.write().await;
        if !state.reviewers.contains_key(&id) {
            return Ok(None);
        }
        ensure_unique(
            &state.reviewers,
            |r| r.last_name.as_str(),
            &reviewer.last_name,
            Some(id),
            "Reviewer",
        )?;

        Ok(state.reviewers.get_mut(&id).map(|row| {
            row.first_name = reviewer.first_name.clone();
            row.last_name = reviewer.last_name.clone();
            row.clone()
        }))
    }

    async fn delete_with_reviews(&self, id: i32) -> Result<Option<u64>> {
        let mut state = self.state.write().await;
        if state.reviewers.remove(&id).is_none() {
            return Ok(None);
        }

        let before = state.reviews.len();
        state.reviews.retain(|_, r| r.reviewer_id != id);
        Ok(Some((before - state.reviews.len()) as u64))
    }
}

#[async_trait]
impl ReviewRepository for InMemoryStore {
    async fn list(&self) -> Result<Vec<Review>> {
        Ok(self.state.read().await.reviews.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Review>> {
        Ok(self.state.read().await.reviews.get(&id).cloned())
    }

    async fn find_by_title(&self, title: &str) -> Result<Option<Review>> {
        Ok(find_by_key(&self.state.read().await.reviews, |r| r.title.as_str(), title))
    }

    async fn exists(&self, id: i32) -> Result<bool> {
        Ok(self.state.read().await.reviews.contains_key(&id))
    }

    async fn list_by_pokemon(&self, pokemon_id: i32) -> Result<Vec<Review>> {
        let state = self.state.read().await;
        Ok(state
            .reviews
            .values()
            .filter(|r| r.pokemon_id == pokemon_id)
            .cloned()
            .collect())
    }

    async fn list_by_reviewer(&self, reviewer_id: i32) -> Result<Vec<Review>> {
        let state = self.state.read().await;
        Ok(state
            .reviews
            .values()
            .filter(|r| r.reviewer_id == reviewer_id)
            .cloned()
            .collect())
    }

    async fn create(&self, review: &NewReview) -> Result<Review> {
        let mut state = self.state.write().await;
        ensure_unique(&state.reviews, |r| r.title.as_str(), &review.title, None, "Review")?;
        if !state.pokemon.contains_key(&review.pokemon_id)
            || !state.reviewers.contains_key(&review.reviewer_id)
        {
            return Err(foreign_key_violation());
        }

        let id = state.next_id();
        let row = Review {
            id,
            title: review.title.clone(),
            text: review.text.clone(),
            rating: review.rating,
            pokemon_id: review.pokemon_id,
            reviewer_id: review.reviewer_id,
        };
        state.reviews.insert(id, row.clone());
        Ok(row)
    }

    async fn update(&self, id: i32, changes: &ReviewChanges) -> Result<Option<Review>> {
        let mut state = self.state.write().await;
        if !state.reviews.contains_key(&id) {
            return Ok(None);
        }
        ensure_unique(&state.reviews, |r| r.title.as_str(), &changes.title, Some(id), "Review")?;

        Ok(state.reviews.get_mut(&id).map(|row| {
            row.title = changes.title.clone();
            row.text = changes.text.clone();
            row.rating = changes.rating;
            row.clone()
        }))
    }

    async fn delete(&self, id: i32) -> Result<bool> {
        Ok(self.state.write().await.reviews.remove(&id).is_some())
    }

    async fn delete_many(&self, ids: &[i32]) -> Result<u64> {
        let mut state = self.state.write().await;
        Ok(ids
            .iter()
            .filter(|id| state.reviews.remove(*id).is_some())
            .count() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unique_name_ignores_case_and_spacing() {
        let store = InMemoryStore::default();
        CategoryRepository::create(
            &store,
            &NewCategory {
                name: "Fire".to_string(),
            },
        )
        .await
        .unwrap();

        let err = CategoryRepository::create(
            &store,
            &NewCategory {
                name: " FIRE".to_string(),
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::AlreadyExists(ref m) if m == "Category already exists"));
    }

    #[tokio::test]
    async fn test_country_with_owner_cannot_be_removed() {
        let store = InMemoryStore::default();
        let country = CountryRepository::create(
            &store,
            &NewCountry {
                name: "Kanto".to_string(),
            },
        )
        .await
        .unwrap();
        OwnerRepository::create(
            &store,
            &NewOwner {
                first_name: "Ash".to_string(),
                last_name: "Ketchum".to_string(),
                gym: None,
                country_id: country.id,
            },
        )
        .await
        .unwrap();

        assert!(matches!(
            CountryRepository::delete(&store, country.id).await,
            Err(AppError::Conflict(_))
        ));
    }
}
