//! Homepage Content Backend
//!
//! Serves the charity storefront's homepage sections and the admin editing API,
//! persisting a versioned section envelope in SQLite.

mod api;
mod auth;
mod config;
mod content;
mod db;
mod errors;
mod models;

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, patch, post, put},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::{Config, StorageBackend};
use content::ContentStore;
use db::{ContentStorage, MemoryStorage, SqliteStorage};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ContentStore>,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Homepage Content Backend");
    tracing::info!("Storage backend: {:?}", config.storage);
    tracing::info!("Bind address: {}", config.bind_addr);

    if config.api_psk.is_none() {
        tracing::warn!("No admin key configured (CONTENT_API_PSK). Admin routes are open!");
    }

    let storage: Arc<dyn ContentStorage> = match config.storage {
        StorageBackend::Sqlite => {
            tracing::info!("Database path: {:?}", config.db_path);
            let pool = db::init_database(&config.db_path).await?;
            Arc::new(SqliteStorage::new(pool))
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; content will not survive a restart");
            Arc::new(MemoryStorage::new())
        }
    };
    let store = Arc::new(ContentStore::new(storage));

    let initial = store.load_envelope().await;
    tracing::info!(
        "Loaded {} homepage sections at revision {}",
        initial.sections.len(),
        initial.revision
    );

    let state = AppState {
        store,
        config: Arc::new(config.clone()),
    };

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let psk = state.config.api_psk.clone();

    // Read-only routes for the storefront (no auth)
    let public_routes = Router::new()
        .route("/content", get(api::get_content))
        .route("/content/visible", get(api::get_visible_content))
        .route("/content/kinds/{kind}", get(api::get_section_by_kind));

    let admin_routes = Router::new()
        .route(
            "/content",
            get(api::get_envelope).put(api::replace_content),
        )
        .route("/content/revision", get(api::get_revision))
        .route("/content/sections", post(api::add_section))
        .route(
            "/content/sections/{id}",
            put(api::update_section).delete(api::remove_section),
        )
        .route(
            "/content/sections/{id}/duplicate",
            post(api::duplicate_section),
        )
        .route(
            "/content/sections/{id}/visibility",
            post(api::toggle_visibility),
        )
        .route(
            "/content/sections/{id}/content",
            patch(api::edit_section_content),
        )
        .route("/content/move", post(api::move_section))
        .route("/content/reset", post(api::reset_content))
        .route("/content/templates/{kind}", get(api::get_template))
        .layer(middleware::from_fn(move |req, next| {
            auth::require_admin_key(psk.clone(), req, next)
        }));

    let health_routes = Router::new().route("/health", get(health_check));

    let api_routes = public_routes.nest("/admin", admin_routes);

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
