//! Reviewers and the reviews they wrote.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/reviewers` | List reviewers |
//! | GET | `/api/reviewers/{id}` | Get reviewer by id |
//! | GET | `/api/reviewers/{id}/reviews` | Reviews written by a reviewer |
//! | POST | `/api/reviewers` | Create reviewer |
//! | PUT | `/api/reviewers/{id}` | Update reviewer |
//! | DELETE | `/api/reviewers/{id}` | Delete reviewer and its reviews |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::PgReviewerRepository;
pub use services::ReviewerService;
