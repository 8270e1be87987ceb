mod error;
mod handlers;
mod middleware;

use std::sync::Arc;

use axum::{
    http::{header, HeaderName, HeaderValue, Method},
    middleware::from_fn_with_state,
    routing::{get, post, put},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::catalog::Catalog;
use crate::generator::RoadmapGenerator;
use crate::store::{MemoryStore, RoadmapStore};

pub use error::{ApiError, REQUIRED_FIELDS};
pub use handlers::validate_create_input;
pub use middleware::{auth_middleware, SecurityConfig, API_KEY_HEADER};

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<RoadmapGenerator>,
    pub store: Arc<dyn RoadmapStore>,
}

impl AppState {
    pub fn new(generator: RoadmapGenerator, store: impl RoadmapStore + 'static) -> Self {
        Self {
            generator: Arc::new(generator),
            store: Arc::new(store),
        }
    }

    /// Built-in catalog, entropy-seeded sampling, empty in-memory store.
    pub fn in_memory() -> Self {
        Self::new(RoadmapGenerator::new(Catalog::builtin()), MemoryStore::new())
    }
}

/// Router without authentication.
pub fn create_router(state: AppState) -> Router {
    create_router_with_config(state, SecurityConfig::disabled())
}

pub fn create_router_with_config(state: AppState, config: SecurityConfig) -> Router {
    let cors = cors_layer(&config);

    let public = Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .route("/quote", get(handlers::random_quote))
        .route("/paths", get(handlers::list_paths))
        .route("/catalog", get(handlers::get_catalog))
        .route("/roadmaps/{id}", get(handlers::get_roadmap));

    // Mutating routes sit behind the access gate.
    let protected = Router::new()
        .route("/roadmaps", post(handlers::create_roadmap))
        .route(
            "/roadmaps/{id}/milestones/{index}",
            put(handlers::update_milestone),
        )
        .route_layer(from_fn_with_state(config, auth_middleware));

    Router::new()
        .nest("/api/v1", public.merge(protected))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

fn cors_layer(config: &SecurityConfig) -> CorsLayer {
    let Some(origins) = &config.cors_origins else {
        return CorsLayer::permissive();
    };

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            HeaderName::from_static("x-api-key"),
        ])
}
