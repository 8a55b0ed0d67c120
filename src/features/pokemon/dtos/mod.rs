pub mod pokemon_dto;

pub use pokemon_dto::{
    CreatePokemonDto, CreatePokemonQuery, PokemonRatingDto, PokemonResponseDto, UpdatePokemonDto,
};
