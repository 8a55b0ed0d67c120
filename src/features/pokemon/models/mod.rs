pub mod pokemon;
pub mod pokemon_category;
pub mod pokemon_owner;

pub use pokemon::{NewPokemon, Pokemon};
pub use pokemon_category::PokemonCategory;
pub use pokemon_owner::PokemonOwner;
