use std::sync::Arc;
use std::time::Duration;

use axum_test::TestServer;

use crate::core::config::AuthConfig;
use crate::features::auth::{AuthService, JwtValidator, StaticCredentialStore, TokenService};
use crate::features::categories::CategoryService;
use crate::features::countries::CountryService;
use crate::features::owners::OwnerService;
use crate::features::pokemon::PokemonService;
use crate::features::reviewers::ReviewerService;
use crate::features::reviews::ReviewService;
use crate::shared::in_memory_store::InMemoryStore;
use crate::{api_router, AppServices};

pub fn test_auth_config() -> AuthConfig {
    AuthConfig {
        jwt_key: "test-signing-key-at-least-32-bytes-long".to_string(),
        issuer: "pokemon-review-api".to_string(),
        audience: "pokemon-review-api".to_string(),
        token_ttl: Duration::from_secs(15 * 60),
        jwt_leeway: Duration::from_secs(60),
        users_file: None,
    }
}

/// Full API router over one in-memory store, with the built-in login accounts
pub fn test_server() -> (TestServer, Arc<InMemoryStore>) {
    let store = Arc::new(InMemoryStore::default());
    let config = test_auth_config();

    let services = AppServices {
        pokemon: Arc::new(PokemonService::new(
            store.clone(),
            store.clone(),
            store.clone(),
        )),
        categories: Arc::new(CategoryService::new(store.clone())),
        countries: Arc::new(CountryService::new(store.clone(), store.clone())),
        owners: Arc::new(OwnerService::new(store.clone(), store.clone())),
        reviews: Arc::new(ReviewService::new(
            store.clone(),
            store.clone(),
            store.clone(),
        )),
        reviewers: Arc::new(ReviewerService::new(store.clone(), store.clone())),
        auth: Arc::new(AuthService::new(
            Arc::new(StaticCredentialStore::seeded()),
            Arc::new(TokenService::new(&config)),
        )),
    };

    let app = api_router(services, Arc::new(JwtValidator::new(&config)));
    let server = TestServer::new(app).expect("test server");
    (server, store)
}
