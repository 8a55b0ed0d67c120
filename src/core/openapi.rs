use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::auth::{dtos as auth_dtos, handlers as auth_handlers};
use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::features::countries::{dtos as countries_dtos, handlers as countries_handlers};
use crate::features::owners::{dtos as owners_dtos, handlers as owners_handlers};
use crate::features::pokemon::{dtos as pokemon_dtos, handlers as pokemon_handlers};
use crate::features::reviewers::{dtos as reviewers_dtos, handlers as reviewers_handlers};
use crate::features::reviews::{dtos as reviews_dtos, handlers as reviews_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Auth
        auth_handlers::login,
        auth_handlers::admins,
        auth_handlers::users,
        // Pokemon
        pokemon_handlers::list_pokemon,
        pokemon_handlers::get_pokemon,
        pokemon_handlers::get_pokemon_rating,
        pokemon_handlers::list_owners_of_pokemon,
        pokemon_handlers::list_categories_of_pokemon,
        pokemon_handlers::create_pokemon,
        pokemon_handlers::update_pokemon,
        pokemon_handlers::delete_pokemon,
        // Categories
        categories_handlers::list_categories,
        categories_handlers::get_category,
        categories_handlers::list_pokemon_by_category,
        categories_handlers::create_category,
        categories_handlers::update_category,
        categories_handlers::delete_category,
        // Countries
        countries_handlers::list_countries,
        countries_handlers::get_country,
        countries_handlers::get_country_of_owner,
        countries_handlers::list_owners_by_country,
        countries_handlers::create_country,
        countries_handlers::update_country,
        countries_handlers::delete_country,
        // Owners
        owners_handlers::list_owners,
        owners_handlers::get_owner,
        owners_handlers::list_pokemon_by_owner,
        owners_handlers::create_owner,
        owners_handlers::update_owner,
        owners_handlers::delete_owner,
        // Reviews
        reviews_handlers::list_reviews,
        reviews_handlers::get_review,
        reviews_handlers::list_reviews_of_pokemon,
        reviews_handlers::create_review,
        reviews_handlers::update_review,
        reviews_handlers::delete_review,
        reviews_handlers::delete_reviews,
        // Reviewers
        reviewers_handlers::list_reviewers,
        reviewers_handlers::get_reviewer,
        reviewers_handlers::list_reviews_by_reviewer,
        reviewers_handlers::create_reviewer,
        reviewers_handlers::update_reviewer,
        reviewers_handlers::delete_reviewer,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Auth
            auth_dtos::LoginRequestDto,
            auth_dtos::LoginResponseDto,
            auth_dtos::GreetingDto,
            ApiResponse<auth_dtos::LoginResponseDto>,
            ApiResponse<auth_dtos::GreetingDto>,
            // Pokemon
            pokemon_dtos::PokemonResponseDto,
            pokemon_dtos::CreatePokemonDto,
            pokemon_dtos::UpdatePokemonDto,
            pokemon_dtos::PokemonRatingDto,
            ApiResponse<pokemon_dtos::PokemonResponseDto>,
            ApiResponse<Vec<pokemon_dtos::PokemonResponseDto>>,
            ApiResponse<pokemon_dtos::PokemonRatingDto>,
            // Categories
            categories_dtos::CategoryResponseDto,
            categories_dtos::UpsertCategoryDto,
            ApiResponse<categories_dtos::CategoryResponseDto>,
            ApiResponse<Vec<categories_dtos::CategoryResponseDto>>,
            // Countries
            countries_dtos::CountryResponseDto,
            countries_dtos::UpsertCountryDto,
            ApiResponse<countries_dtos::CountryResponseDto>,
            ApiResponse<Vec<countries_dtos::CountryResponseDto>>,
            // Owners
            owners_dtos::OwnerResponseDto,
            owners_dtos::CreateOwnerDto,
            owners_dtos::UpdateOwnerDto,
            ApiResponse<owners_dtos::OwnerResponseDto>,
            ApiResponse<Vec<owners_dtos::OwnerResponseDto>>,
            // Reviews
            reviews_dtos::ReviewResponseDto,
            reviews_dtos::UpsertReviewDto,
            reviews_dtos::DeleteReviewsDto,
            reviews_dtos::DeleteReviewsResponseDto,
            ApiResponse<reviews_dtos::ReviewResponseDto>,
            ApiResponse<Vec<reviews_dtos::ReviewResponseDto>>,
            ApiResponse<reviews_dtos::DeleteReviewsResponseDto>,
            // Reviewers
            reviewers_dtos::ReviewerResponseDto,
            reviewers_dtos::UpsertReviewerDto,
            ApiResponse<reviewers_dtos::ReviewerResponseDto>,
            ApiResponse<Vec<reviewers_dtos::ReviewerResponseDto>>,
        )
    ),
    tags(
        (name = "auth", description = "Token issuance"),
        (name = "users", description = "Role-gated greetings (bearer token required)"),
        (name = "pokemon", description = "Pokemon, ratings and associations"),
        (name = "categories", description = "Pokemon categories"),
        (name = "countries", description = "Countries owners live in"),
        (name = "owners", description = "Pokemon owners"),
        (name = "reviews", description = "Pokemon reviews"),
        (name = "reviewers", description = "Review authors"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "Pokemon Review API",
        version = "0.1.0",
        description = "API documentation for the Pokemon Review API",
    )
)]
pub struct ApiDoc;

/// Adds Bearer JWT security scheme to OpenAPI spec
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
