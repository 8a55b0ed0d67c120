mod core;
mod features;
mod shared;

use crate::core::config::Config;
use crate::core::openapi::{ApiDoc, SwaggerInfoModifier};
use crate::core::{database, middleware};
use crate::features::auth::{
    self, routes as auth_routes, AuthService, StaticCredentialStore, TokenService,
};
use crate::features::categories::{routes as categories_routes, CategoryService, PgCategoryRepository};
use crate::features::countries::{routes as countries_routes, CountryService, PgCountryRepository};
use crate::features::owners::{routes as owners_routes, OwnerService, PgOwnerRepository};
use crate::features::pokemon::{routes as pokemon_routes, PgPokemonRepository, PokemonService};
use crate::features::reviewers::{routes as reviewers_routes, PgReviewerRepository, ReviewerService};
use crate::features::reviews::{routes as reviews_routes, PgReviewRepository, ReviewService};
use axum::{middleware::from_fn, Router};
use std::sync::Arc;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::Modify;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Every service the HTTP layer needs
pub struct AppServices {
    pub pokemon: Arc<PokemonService>,
    pub categories: Arc<CategoryService>,
    pub countries: Arc<CountryService>,
    pub owners: Arc<OwnerService>,
    pub reviews: Arc<ReviewService>,
    pub reviewers: Arc<ReviewerService>,
    pub auth: Arc<AuthService>,
}

/// API routes without swagger and outer layers
pub fn api_router(services: AppServices, jwt_validator: Arc<auth::JwtValidator>) -> Router {
    // Protected routes (require JWT authentication)
    let protected_routes = Router::new()
        .merge(auth_routes::protected_routes())
        .route_layer(axum::middleware::from_fn_with_state(
            jwt_validator,
            middleware::auth_middleware,
        ));

    // Simple health check endpoint (no auth required)
    async fn health_check() -> axum::http::StatusCode {
        axum::http::StatusCode::OK
    }
    let health_route = Router::new().route("/health", axum::routing::get(health_check));

    // Public routes (no auth required)
    let public_routes = Router::new()
        .merge(auth_routes::public_routes(services.auth))
        .merge(pokemon_routes::routes(services.pokemon))
        .merge(categories_routes::routes(services.categories))
        .merge(countries_routes::routes(services.countries))
        .merge(owners_routes::routes(services.owners))
        .merge(reviews_routes::routes(services.reviews))
        .merge(reviewers_routes::routes(services.reviewers));

    Router::new()
        .merge(protected_routes)
        .merge(public_routes)
        .merge(health_route)
}

fn main() -> anyhow::Result<()> {
    // Build Tokio runtime with configurable worker threads
    let worker_threads = std::env::var("TOKIO_WORKER_THREADS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|p| p.get())
                .unwrap_or(4)
        });

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(worker_threads)
        .max_blocking_threads(worker_threads * 4)
        .enable_all()
        .build()?;

    runtime.block_on(async_main(worker_threads))
}

async fn async_main(worker_threads: usize) -> anyhow::Result<()> {
    // Load .env file BEFORE initializing logger so RUST_LOG is available
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;

    let available_cpus = std::thread::available_parallelism()
        .map(|p| p.get())
        .unwrap_or(1);
    tracing::info!(
        "System info: available_cpus={}, tokio_worker_threads={}, pid={}",
        available_cpus,
        worker_threads,
        std::process::id()
    );
    tracing::info!("Configuration loaded successfully");

    let pool = database::create_pool(&config.database).await?;
    tracing::info!("Database connection pool created");

    tracing::info!("Running database migrations...");
    database::run_migrations(&pool)
        .await
        .map_err(|e| anyhow::anyhow!("Migration failed: {}", e))?;
    tracing::info!("Database migrations completed successfully");

    // Auth
    let jwt_validator = Arc::new(auth::JwtValidator::new(&config.auth));
    let credentials = Arc::new(StaticCredentialStore::load(config.auth.users_file.as_deref())?);
    let token_service = Arc::new(TokenService::new(&config.auth));
    let auth_service = Arc::new(AuthService::new(credentials, token_service));
    tracing::info!(
        "Auth initialized (issuer={}, token_ttl={}s)",
        config.auth.issuer,
        config.auth.token_ttl.as_secs()
    );

    // Repositories share the pool
    let pokemon_repo = Arc::new(PgPokemonRepository::new(pool.clone()));
    let category_repo = Arc::new(PgCategoryRepository::new(pool.clone()));
    let country_repo = Arc::new(PgCountryRepository::new(pool.clone()));
    let owner_repo = Arc::new(PgOwnerRepository::new(pool.clone()));
    let review_repo = Arc::new(PgReviewRepository::new(pool.clone()));
    let reviewer_repo = Arc::new(PgReviewerRepository::new(pool.clone()));

    let services = AppServices {
        pokemon: Arc::new(PokemonService::new(
            pokemon_repo.clone(),
            owner_repo.clone(),
            category_repo.clone(),
        )),
        categories: Arc::new(CategoryService::new(category_repo.clone())),
        countries: Arc::new(CountryService::new(country_repo.clone(), owner_repo.clone())),
        owners: Arc::new(OwnerService::new(owner_repo, country_repo)),
        reviews: Arc::new(ReviewService::new(
            review_repo.clone(),
            pokemon_repo,
            reviewer_repo.clone(),
        )),
        reviewers: Arc::new(ReviewerService::new(reviewer_repo, review_repo)),
        auth: auth_service,
    };
    tracing::info!("Services initialized");

    // Build application router with dynamic swagger config
    let swagger_modifier = SwaggerInfoModifier {
        title: config.swagger.title.clone(),
        version: config.swagger.version.clone(),
        description: config.swagger.description.clone(),
    };

    let mut openapi = ApiDoc::openapi();
    swagger_modifier.modify(&mut openapi);

    let swagger = if let Some(credentials) = config.swagger.credentials() {
        tracing::info!("Swagger UI basic auth enabled");
        Router::new()
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
            .layer(from_fn(middleware::basic_auth_middleware(Arc::new(
                credentials,
            ))))
    } else {
        tracing::info!("Swagger UI basic auth disabled (no credentials configured)");
        Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
    };

    let app = Router::new()
        .merge(swagger)
        .merge(api_router(services, jwt_validator))
        .layer(middleware::cors_layer(
            config.app.cors_allowed_origins.clone(),
        ))
        // Propagate X-Request-Id to response headers
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::MakeSpanWithRequestId)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Generate X-Request-Id using UUID v7 (or use client-provided one)
        .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid));

    // Start server
    let addr = config.app.server_address();
    let socket_addr: std::net::SocketAddr = addr
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid address: {}", e))?;

    // Use socket2 for TCP listener configuration
    let socket = socket2::Socket::new(
        socket2::Domain::for_address(socket_addr),
        socket2::Type::STREAM,
        Some(socket2::Protocol::TCP),
    )?;

    socket.set_reuse_address(true)?;
    #[cfg(unix)]
    socket.set_reuse_port(true)?;
    socket.set_nodelay(true)?;

    #[cfg(target_os = "linux")]
    {
        let keepalive = socket2::TcpKeepalive::new()
            .with_time(std::time::Duration::from_secs(60))
            .with_interval(std::time::Duration::from_secs(10))
            .with_retries(3);
        socket.set_tcp_keepalive(&keepalive)?;
    }
    #[cfg(not(target_os = "linux"))]
    {
        let keepalive = socket2::TcpKeepalive::new().with_time(std::time::Duration::from_secs(60));
        socket.set_tcp_keepalive(&keepalive)?;
    }

    socket.set_nonblocking(true)?;
    socket.bind(&socket_addr.into())?;
    socket.listen(1024)?;

    let listener = tokio::net::TcpListener::from_std(socket.into())?;
    tracing::info!("Server listening on {}", format!("http://{}", addr));
    tracing::info!(
        "Swagger UI available at {}",
        format!("http://{}/swagger-ui/", addr)
    );

    axum::serve(listener, app).await?;

    Ok(())
}
