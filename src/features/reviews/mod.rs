//! Reviews of pokemon written by reviewers.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/reviews` | List reviews |
//! | GET | `/api/reviews/{id}` | Get review by id |
//! | GET | `/api/reviews/pokemon/{pokemonId}` | Reviews of a pokemon |
//! | POST | `/api/reviews?reviewerId=&pokemonId=` | Create review |
//! | PUT | `/api/reviews/{id}` | Update title, text and rating |
//! | DELETE | `/api/reviews/{id}` | Delete review |
//! | DELETE | `/api/reviews` | Delete a batch of reviews by id |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::PgReviewRepository;
pub use services::ReviewService;
