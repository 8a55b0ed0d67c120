//! Role guards for handlers behind `auth_middleware`.
//!
//! Roles are matched exactly; an Administrator does not pass [`RequireUser`].

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::core::error::AppError;
use crate::features::auth::model::AuthenticatedUser;

fn authenticated(parts: &Parts) -> Result<AuthenticatedUser, AppError> {
    parts
        .extensions
        .get::<AuthenticatedUser>()
        .cloned()
        .ok_or_else(|| AppError::Unauthorized("User not authenticated".to_string()))
}

/// Allows only the "Administrator" role.
///
/// # Example
/// ```ignore
/// pub async fn handler(RequireAdministrator(user): RequireAdministrator) { ... }
/// ```
pub struct RequireAdministrator(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for RequireAdministrator
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = authenticated(parts)?;

        if !user.is_administrator() {
            return Err(AppError::Forbidden(
                "Administrator access required".to_string(),
            ));
        }

        Ok(RequireAdministrator(user))
    }
}

/// Allows only the "User" role.
pub struct RequireUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for RequireUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = authenticated(parts)?;

        if !user.is_user() {
            return Err(AppError::Forbidden("User access required".to_string()));
        }

        Ok(RequireUser(user))
    }
}
