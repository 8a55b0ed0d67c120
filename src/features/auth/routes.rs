use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::auth::handlers;
use crate::features::auth::services::AuthService;

/// Public auth routes (no authentication required)
pub fn public_routes(service: Arc<AuthService>) -> Router {
    Router::new()
        .route("/api/login", post(handlers::login))
        .with_state(service)
}

/// Role-gated routes (require JWT authentication)
pub fn protected_routes() -> Router {
    Router::new()
        .route("/api/users/admins", get(handlers::admins))
        .route("/api/users/users", get(handlers::users))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    use crate::shared::test_helpers::test_server;

    async fn login(server: &TestServer, username: &str, password: &str) -> String {
        let response = server
            .post("/api/login")
            .json(&json!({ "username": username, "password": password }))
            .await;
        response.assert_status_ok();

        let body = response.json::<Value>();
        assert_eq!(body["data"]["tokenType"], "Bearer");
        body["data"]["accessToken"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_unknown_credentials() {
        let (server, _) = test_server();

        let response = server
            .post("/api/login")
            .json(&json!({ "username": "John_admin", "password": "nope" }))
            .await;
        response.assert_status(StatusCode::UNAUTHORIZED);
        assert_eq!(response.json::<Value>()["message"], "User was not found");
    }

    #[tokio::test]
    async fn test_admin_greeting() {
        let (server, _) = test_server();
        let token = login(&server, "john_admin", "Admin_Password7").await;

        let response = server
            .get("/api/users/admins")
            .authorization_bearer(&token)
            .await;
        response.assert_status_ok();
        assert_eq!(
            response.json::<Value>()["data"]["message"],
            "Hi John, you are an Administrator"
        );

        server
            .get("/api/users/users")
            .authorization_bearer(&token)
            .await
            .assert_status(StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_user_greeting() {
        let (server, _) = test_server();
        let token = login(&server, "Kate_user", "User_Password8").await;

        let response = server
            .get("/api/users/users")
            .authorization_bearer(&token)
            .await;
        response.assert_status_ok();
        assert_eq!(
            response.json::<Value>()["data"]["message"],
            "Hi Kate, you are an User"
        );

        server
            .get("/api/users/admins")
            .authorization_bearer(&token)
            .await
            .assert_status(StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_missing_or_bad_token() {
        let (server, _) = test_server();

        server
            .get("/api/users/admins")
            .await
            .assert_status(StatusCode::UNAUTHORIZED);
        server
            .get("/api/users/admins")
            .authorization_bearer("not-a-jwt")
            .await
            .assert_status(StatusCode::UNAUTHORIZED);
    }
}
