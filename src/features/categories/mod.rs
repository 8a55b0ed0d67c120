//! Pokemon categories.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/categories` | List categories |
//! | GET | `/api/categories/{id}` | Get category by id |
//! | GET | `/api/categories/{id}/pokemon` | Pokemon in a category |
//! | POST | `/api/categories` | Create category |
//! | PUT | `/api/categories/{id}` | Update category |
//! | DELETE | `/api/categories/{id}` | Delete category and its pokemon links |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::PgCategoryRepository;
pub use services::CategoryService;
