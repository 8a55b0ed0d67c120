use sqlx::FromRow;

/// Association row between a pokemon and an owner.
///
/// Written once, together with the pokemon, and never updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromRow)]
pub struct PokemonOwner {
    pub pokemon_id: i32,
    pub owner_id: i32,
}
