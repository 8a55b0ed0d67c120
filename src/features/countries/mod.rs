//! Countries that owners belong to.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/countries` | List countries |
//! | GET | `/api/countries/{id}` | Get country by id |
//! | GET | `/api/countries/{id}/owners` | Owners from a country |
//! | GET | `/api/owners/{id}/country` | Country of an owner |
//! | POST | `/api/countries` | Create country |
//! | PUT | `/api/countries/{id}` | Update country |
//! | DELETE | `/api/countries/{id}` | Delete country (must have no owners) |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::PgCountryRepository;
pub use services::CountryService;
