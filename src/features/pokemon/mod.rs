//! Pokemon, their rating aggregate and their owner/category associations.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/pokemon` | List pokemon ordered by id |
//! | GET | `/api/pokemon/{id}` | Get pokemon by id |
//! | GET | `/api/pokemon/{id}/rating` | Average review rating |
//! | GET | `/api/pokemon/{id}/owners` | Owners of a pokemon |
//! | GET | `/api/pokemon/{id}/categories` | Categories of a pokemon |
//! | POST | `/api/pokemon?ownerId=&categoryId=` | Create with owner and category links |
//! | PUT | `/api/pokemon/{id}` | Update name and birth date |
//! | DELETE | `/api/pokemon/{id}` | Delete reviews, then the pokemon |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod rating;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::PgPokemonRepository;
pub use services::PokemonService;
