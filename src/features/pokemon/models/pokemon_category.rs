use sqlx::FromRow;

/// Association row between a pokemon and a category.
///
/// Written once, together with the pokemon, and never updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromRow)]
pub struct PokemonCategory {
    pub pokemon_id: i32,
    pub category_id: i32,
}
