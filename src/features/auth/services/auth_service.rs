use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::auth::credentials::CredentialStore;
use crate::features::auth::dtos::{LoginRequestDto, LoginResponseDto};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::auth::services::token_service::TokenService;

/// Service for authentication operations
pub struct AuthService {
    credentials: Arc<dyn CredentialStore>,
    token_service: Arc<TokenService>,
}

impl AuthService {
    pub fn new(credentials: Arc<dyn CredentialStore>, token_service: Arc<TokenService>) -> Self {
        Self {
            credentials,
            token_service,
        }
    }

    /// Exchange username and password for an access token
    pub async fn login(&self, dto: LoginRequestDto) -> Result<LoginResponseDto> {
        let user = self
            .credentials
            .find(&dto.username, &dto.password)
            .await
            .ok_or_else(|| {
                tracing::warn!("Failed login for username {}", dto.username);
                AppError::Unauthorized("User was not found".to_string())
            })?;

        let issued = self.token_service.generate(&user)?;

        tracing::info!("Token issued: username={}, role={}", user.username, user.role);
        Ok(LoginResponseDto {
            access_token: issued.access_token,
            token_type: "Bearer".to_string(),
            expires_in: issued.expires_in.as_secs() as i64,
        })
    }

    /// Greeting naming the caller and their role
    pub fn greet(user: &AuthenticatedUser) -> String {
        format!("Hi {}, you are an {}", user.given_name, user.role)
    }
}
