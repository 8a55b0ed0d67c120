use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::reviewers::handlers;
use crate::features::reviewers::services::ReviewerService;

/// Create routes for the reviewers feature
pub fn routes(service: Arc<ReviewerService>) -> Router {
    Router::new()
        .route(
            "/api/reviewers",
            get(handlers::list_reviewers).post(handlers::create_reviewer),
        )
        .route(
            "/api/reviewers/{id}",
            get(handlers::get_reviewer)
                .put(handlers::update_reviewer)
                .delete(handlers::delete_reviewer),
        )
        .route(
            "/api/reviewers/{id}/reviews",
            get(handlers::list_reviews_by_reviewer),
        )
        .with_state(service)
}
