use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};

use super::model::{AuthenticatedUser, Claims};
use crate::core::config::AuthConfig;
use crate::core::error::AppError;

/// Verifies HS256 access tokens issued by [`super::TokenService`]
pub struct JwtValidator {
    decoding_key: DecodingKey,
    issuer: String,
    audience: String,
    leeway: u64,
}

impl JwtValidator {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_key.as_bytes()),
            issuer: config.issuer.clone(),
            audience: config.audience.clone(),
            leeway: config.jwt_leeway.as_secs(),
        }
    }

    pub fn validate_token(&self, token: &str) -> Result<AuthenticatedUser, AppError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.issuer]);
        validation.set_audience(&[&self.audience]);
        validation.set_required_spec_claims(&["exp", "iss", "aud", "sub"]);
        validation.leeway = self.leeway;

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|e| AppError::Auth(e.to_string()))?;

        Ok(token_data.claims.into())
    }
}
