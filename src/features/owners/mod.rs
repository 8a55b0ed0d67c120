//! Pokemon owners.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/owners` | List owners |
//! | GET | `/api/owners/{id}` | Get owner by id |
//! | GET | `/api/owners/{id}/pokemon` | Pokemon of an owner |
//! | POST | `/api/owners?countryId=` | Create owner in a country |
//! | PUT | `/api/owners/{id}` | Update owner |
//! | DELETE | `/api/owners/{id}` | Delete owner and its pokemon links |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::PgOwnerRepository;
pub use services::OwnerService;
