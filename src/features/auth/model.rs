use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::constants::{ROLE_ADMINISTRATOR, ROLE_USER};

/// Identity extracted from a validated bearer token
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthenticatedUser {
    pub username: String,
    pub email: String,
    pub given_name: String,
    pub surname: String,
    pub role: String,
}

impl AuthenticatedUser {
    pub fn has_role(&self, role: &str) -> bool {
        self.role == role
    }

    pub fn is_administrator(&self) -> bool {
        self.has_role(ROLE_ADMINISTRATOR)
    }

    pub fn is_user(&self) -> bool {
        self.has_role(ROLE_USER)
    }
}

/// A login-capable account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserModel {
    pub username: String,
    /// Lowercase hex SHA-256 digest of the password
    pub password_sha256: String,
    pub email: String,
    pub given_name: String,
    pub surname: String,
    pub role: String,
}

/// Claims carried by issued access tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub email: String,
    pub given_name: String,
    pub surname: String,
    pub role: String,
    pub iss: String,
    pub aud: String,
    pub iat: u64,
    pub exp: u64,
}

impl From<Claims> for AuthenticatedUser {
    fn from(c: Claims) -> Self {
        Self {
            username: c.sub,
            email: c.email,
            given_name: c.given_name,
            surname: c.surname,
            role: c.role,
        }
    }
}
