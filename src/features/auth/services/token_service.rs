use std::time::{Duration, SystemTime, UNIX_EPOCH};

use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};

use crate::core::config::AuthConfig;
use crate::core::error::{AppError, Result};
use crate::features::auth::model::{Claims, UserModel};

/// Signed token plus its lifetime
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub access_token: String,
    pub expires_in: Duration,
}

/// Issues HS256 access tokens
pub struct TokenService {
    encoding_key: EncodingKey,
    issuer: String,
    audience: String,
    ttl: Duration,
}

impl TokenService {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_key.as_bytes()),
            issuer: config.issuer.clone(),
            audience: config.audience.clone(),
            ttl: config.token_ttl,
        }
    }

    /// Sign a token carrying the user's identity and role
    pub fn generate(&self, user: &UserModel) -> Result<IssuedToken> {
        let iat = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| AppError::Internal(format!("System clock before epoch: {}", e)))?
            .as_secs();

        let claims = Claims {
            sub: user.username.clone(),
            email: user.email.clone(),
            given_name: user.given_name.clone(),
            surname: user.surname.clone(),
            role: user.role.clone(),
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
            iat,
            exp: iat + self.ttl.as_secs(),
        };

        let access_token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| {
                tracing::error!("Failed to sign token for {}: {}", user.username, e);
                AppError::Internal("Failed to sign token".to_string())
            })?;

        Ok(IssuedToken {
            access_token,
            expires_in: self.ttl,
        })
    }
}
