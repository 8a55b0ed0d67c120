use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::reviews::handlers;
use crate::features::reviews::services::ReviewService;

/// Create routes for the reviews feature
pub fn routes(service: Arc<ReviewService>) -> Router {
    Router::new()
        .route(
            "/api/reviews",
            get(handlers::list_reviews)
                .post(handlers::create_review)
                .delete(handlers::delete_reviews),
        )
        .route(
            "/api/reviews/{id}",
            get(handlers::get_review)
                .put(handlers::update_review)
                .delete(handlers::delete_review),
        )
        .route(
            "/api/reviews/pokemon/{pokemon_id}",
            get(handlers::list_reviews_of_pokemon),
        )
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use chrono::NaiveDate;
    use serde_json::{json, Value};

    use crate::features::pokemon::models::NewPokemon;
    use crate::shared::test_helpers::test_server;

    async fn setup() -> (TestServer, i32, i64) {
        let (server, store) = test_server();
        let pokemon = store
            .insert_pokemon_unlinked(NewPokemon {
                name: "Jigglypuff".to_string(),
                birth_date: NaiveDate::from_ymd_opt(1996, 2, 27).unwrap(),
            })
            .await;
        let reviewer = server
            .post("/api/reviewers")
            .json(&json!({ "firstName": "Teddy", "lastName": "Smith" }))
            .await
            .json::<Value>();
        let reviewer_id = reviewer["data"]["id"].as_i64().unwrap();
        (server, pokemon.id, reviewer_id)
    }

    #[tokio::test]
    async fn test_rating_outside_range_rejected() {
        let (server, pokemon_id, reviewer_id) = setup().await;

        for rating in [0, 11] {
            server
                .post("/api/reviews")
                .add_query_param("reviewerId", reviewer_id)
                .add_query_param("pokemonId", pokemon_id)
                .json(&json!({ "title": "Sings", "text": "Lullaby", "rating": rating }))
                .await
                .assert_status(StatusCode::BAD_REQUEST);
        }
    }

    #[tokio::test]
    async fn test_review_lifecycle() {
        let (server, pokemon_id, reviewer_id) = setup().await;

        let created = server
            .post("/api/reviews")
            .add_query_param("reviewerId", reviewer_id)
            .add_query_param("pokemonId", pokemon_id)
            .json(&json!({ "title": "Sings", "text": "Lullaby", "rating": 6 }))
            .await;
        created.assert_status(StatusCode::CREATED);
        let id = created.json::<Value>()["data"]["id"].as_i64().unwrap();

        let of_pokemon = server
            .get(&format!("/api/reviews/pokemon/{}", pokemon_id))
            .await
            .json::<Value>();
        assert_eq!(of_pokemon["meta"]["total"], 1);

        let updated = server
            .put(&format!("/api/reviews/{}", id))
            .json(&json!({ "title": "Sings well", "text": "Lullaby", "rating": 10 }))
            .await;
        updated.assert_status_ok();
        assert_eq!(updated.json::<Value>()["data"]["rating"], 10);

        server
            .delete(&format!("/api/reviews/{}", id))
            .await
            .assert_status_ok();
        server
            .get(&format!("/api/reviews/{}", id))
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_bulk_delete() {
        let (server, pokemon_id, reviewer_id) = setup().await;
        let mut ids = Vec::new();
        for title in ["One", "Two"] {
            let body = server
                .post("/api/reviews")
                .add_query_param("reviewerId", reviewer_id)
                .add_query_param("pokemonId", pokemon_id)
                .json(&json!({ "title": title, "text": "", "rating": 5 }))
                .await
                .json::<Value>();
            ids.push(body["data"]["id"].as_i64().unwrap());
        }
        ids.push(9999);

        let response = server.delete("/api/reviews").json(&json!({ "ids": ids })).await;
        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["data"]["deleted"], 2);

        server
            .delete("/api/reviews")
            .json(&json!({ "ids": [] }))
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }
}
