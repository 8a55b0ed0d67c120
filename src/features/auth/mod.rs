//! Token-based authentication.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/login` | Exchange username and password for a bearer token |
//! | GET | `/api/users/admins` | Greeting for the Administrator role |
//! | GET | `/api/users/users` | Greeting for the User role |

mod validator;

pub mod credentials;
pub mod dtos;
pub mod guards;
pub mod handlers;
pub mod model;
pub mod routes;
pub mod services;

pub use credentials::StaticCredentialStore;
pub use services::{AuthService, TokenService};
pub use validator::JwtValidator;
