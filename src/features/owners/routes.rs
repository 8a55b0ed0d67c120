use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::owners::handlers;
use crate::features::owners::services::OwnerService;

/// Create routes for the owners feature
pub fn routes(service: Arc<OwnerService>) -> Router {
    Router::new()
        .route(
            "/api/owners",
            get(handlers::list_owners).post(handlers::create_owner),
        )
        .route(
            "/api/owners/{id}",
            get(handlers::get_owner)
                .put(handlers::update_owner)
                .delete(handlers::delete_owner),
        )
        .route("/api/owners/{id}/pokemon", get(handlers::list_pokemon_by_owner))
        .with_state(service)
}
