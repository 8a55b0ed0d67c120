use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::pokemon::handlers;
use crate::features::pokemon::services::PokemonService;

/// Create routes for the pokemon feature
pub fn routes(service: Arc<PokemonService>) -> Router {
    Router::new()
        .route(
            "/api/pokemon",
            get(handlers::list_pokemon).post(handlers::create_pokemon),
        )
        .route(
            "/api/pokemon/{id}",
            get(handlers::get_pokemon)
                .put(handlers::update_pokemon)
                .delete(handlers::delete_pokemon),
        )
        .route("/api/pokemon/{id}/rating", get(handlers::get_pokemon_rating))
        .route("/api/pokemon/{id}/owners", get(handlers::list_owners_of_pokemon))
        .route(
            "/api/pokemon/{id}/categories",
            get(handlers::list_categories_of_pokemon),
        )
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    use crate::shared::test_helpers::test_server;

    async fn created_id(server: &TestServer, path: &str, body: Value) -> i64 {
        let response = server.post(path).json(&body).await;
        response.assert_status(StatusCode::CREATED);
        response.json::<Value>()["data"]["id"].as_i64().unwrap()
    }

    /// Country, owner and category ready for a pokemon
    async fn seed(server: &TestServer) -> (i64, i64) {
        let country_id = created_id(server, "/api/countries", json!({ "name": "Kanto" })).await;
        let owner_id = created_id(
            server,
            &format!("/api/owners?countryId={}", country_id),
            json!({ "firstName": "Ash", "lastName": "Ketchum" }),
        )
        .await;
        let category_id =
            created_id(server, "/api/categories", json!({ "name": "Electric" })).await;
        (owner_id, category_id)
    }

    async fn create_pikachu(server: &TestServer, owner_id: i64, category_id: i64) -> i64 {
        let response = server
            .post("/api/pokemon")
            .add_query_param("ownerId", owner_id)
            .add_query_param("categoryId", category_id)
            .json(&json!({ "name": "Pikachu", "birthDate": "1996-02-27" }))
            .await;
        response.assert_status(StatusCode::CREATED);

        let body = response.json::<Value>();
        assert_eq!(body["message"], "Successfully created");
        assert_eq!(body["data"]["name"], "Pikachu");
        body["data"]["id"].as_i64().unwrap()
    }

    #[tokio::test]
    async fn test_create_pokemon_links_owner_and_category() {
        let (server, _) = test_server();
        let (owner_id, category_id) = seed(&server).await;
        let id = create_pikachu(&server, owner_id, category_id).await;

        let owners = server.get(&format!("/api/pokemon/{}/owners", id)).await;
        owners.assert_status_ok();
        let owners = owners.json::<Value>();
        assert_eq!(owners["meta"]["total"], 1);
        assert_eq!(owners["data"][0]["id"].as_i64(), Some(owner_id));

        let categories = server
            .get(&format!("/api/pokemon/{}/categories", id))
            .await
            .json::<Value>();
        assert_eq!(categories["meta"]["total"], 1);
        assert_eq!(categories["data"][0]["id"].as_i64(), Some(category_id));

        let of_owner = server
            .get(&format!("/api/owners/{}/pokemon", owner_id))
            .await
            .json::<Value>();
        assert_eq!(of_owner["data"][0]["id"].as_i64(), Some(id));
    }

    #[tokio::test]
    async fn test_create_pokemon_with_unknown_owner() {
        let (server, _) = test_server();
        let (_, category_id) = seed(&server).await;

        let response = server
            .post("/api/pokemon")
            .add_query_param("ownerId", 9999)
            .add_query_param("categoryId", category_id)
            .json(&json!({ "name": "Pikachu", "birthDate": "1996-02-27" }))
            .await;
        response.assert_status(StatusCode::NOT_FOUND);

        let list = server.get("/api/pokemon").await.json::<Value>();
        assert_eq!(list["meta"]["total"], 0);
    }

    #[tokio::test]
    async fn test_create_pokemon_rejects_bad_input() {
        let (server, _) = test_server();
        let (owner_id, category_id) = seed(&server).await;
        create_pikachu(&server, owner_id, category_id).await;

        let duplicate = server
            .post("/api/pokemon")
            .add_query_param("ownerId", owner_id)
            .add_query_param("categoryId", category_id)
            .json(&json!({ "name": "PIKACHU", "birthDate": "1996-02-27" }))
            .await;
        duplicate.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(duplicate.json::<Value>()["message"], "Pokemon already exists");

        let missing_query = server
            .post("/api/pokemon")
            .json(&json!({ "name": "Raichu", "birthDate": "1996-02-27" }))
            .await;
        missing_query.assert_status(StatusCode::BAD_REQUEST);

        let blank = server
            .post("/api/pokemon")
            .add_query_param("ownerId", owner_id)
            .add_query_param("categoryId", category_id)
            .json(&json!({ "name": "   ", "birthDate": "1996-02-27" }))
            .await;
        blank.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_rating_is_average_of_reviews() {
        let (server, _) = test_server();
        let (owner_id, category_id) = seed(&server).await;
        let id = create_pikachu(&server, owner_id, category_id).await;

        let empty = server
            .get(&format!("/api/pokemon/{}/rating", id))
            .await
            .json::<Value>();
        assert_eq!(empty["data"]["rating"].as_f64(), Some(0.0));
        assert_eq!(empty["data"]["reviewCount"], 0);

        let reviewer_id = created_id(
            &server,
            "/api/reviewers",
            json!({ "firstName": "Teddy", "lastName": "Smith" }),
        )
        .await;
        for (title, rating) in [("Great", 5), ("Good", 4), ("Fine", 3)] {
            created_id(
                &server,
                &format!("/api/reviews?reviewerId={}&pokemonId={}", reviewer_id, id),
                json!({ "title": title, "text": "text", "rating": rating }),
            )
            .await;
        }

        let rating = server
            .get(&format!("/api/pokemon/{}/rating", id))
            .await
            .json::<Value>();
        assert_eq!(rating["data"]["rating"].as_f64(), Some(4.0));
        assert_eq!(rating["data"]["reviewCount"], 3);

        server
            .get("/api/pokemon/9999/rating")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_pokemon_removes_reviews() {
        let (server, _) = test_server();
        let (owner_id, category_id) = seed(&server).await;
        let id = create_pikachu(&server, owner_id, category_id).await;
        let reviewer_id = created_id(
            &server,
            "/api/reviewers",
            json!({ "firstName": "Teddy", "lastName": "Smith" }),
        )
        .await;
        created_id(
            &server,
            &format!("/api/reviews?reviewerId={}&pokemonId={}", reviewer_id, id),
            json!({ "title": "Shocking", "text": "text", "rating": 9 }),
        )
        .await;

        server
            .delete(&format!("/api/pokemon/{}", id))
            .await
            .assert_status_ok();

        server
            .get(&format!("/api/pokemon/{}", id))
            .await
            .assert_status(StatusCode::NOT_FOUND);
        let reviews = server.get("/api/reviews").await.json::<Value>();
        assert_eq!(reviews["meta"]["total"], 0);
        let reviewer_reviews = server
            .get(&format!("/api/reviewers/{}/reviews", reviewer_id))
            .await
            .json::<Value>();
        assert_eq!(reviewer_reviews["meta"]["total"], 0);
    }

    #[tokio::test]
    async fn test_update_pokemon() {
        let (server, _) = test_server();
        let (owner_id, category_id) = seed(&server).await;
        let id = create_pikachu(&server, owner_id, category_id).await;

        let response = server
            .put(&format!("/api/pokemon/{}", id))
            .json(&json!({ "name": "Raichu", "birthDate": "1997-04-01" }))
            .await;
        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["data"]["name"], "Raichu");
        assert_eq!(body["data"]["birthDate"], "1997-04-01");

        server
            .put("/api/pokemon/9999")
            .json(&json!({ "name": "Mew", "birthDate": "1997-04-01" }))
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }
}
