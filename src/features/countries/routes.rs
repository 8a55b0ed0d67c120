use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::countries::handlers;
use crate::features::countries::services::CountryService;

/// Create routes for the countries feature
pub fn routes(service: Arc<CountryService>) -> Router {
    Router::new()
        .route(
            "/api/countries",
            get(handlers::list_countries).post(handlers::create_country),
        )
        .route(
            "/api/countries/{id}",
            get(handlers::get_country)
                .put(handlers::update_country)
                .delete(handlers::delete_country),
        )
        .route(
            "/api/countries/{id}/owners",
            get(handlers::list_owners_by_country),
        )
        .route("/api/owners/{id}/country", get(handlers::get_country_of_owner))
        .with_state(service)
}
