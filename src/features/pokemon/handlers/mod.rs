pub mod pokemon_handler;

pub use pokemon_handler::*;
