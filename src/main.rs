use std::sync::Arc;

use axum::{
    extract::{DefaultBodyLimit, State},
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use nav_api_rust::config;
use nav_api_rust::handlers::{self, SharedRegistry};
use nav_api_rust::pages::registry::PageRegistry;

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up NAV_PAGES_FILE, APP_ENV, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Initialize configuration (this loads the config singleton)
    let config = config::config();
    tracing::info!("Starting Navigation API in {:?} mode", config.environment);

    let registry = match load_registry(&config.nav.pages_file) {
        Ok(registry) => Arc::new(registry),
        Err(e) => {
            tracing::error!("Failed to load page registry: {}", e);
            std::process::exit(1);
        }
    };
    tracing::info!(
        "Page registry ready: {} pages, {} menu paths",
        registry.page_count(),
        registry.menu_paths().len()
    );

    let app = app(registry);

    // Allow tests or deployments to override port via env
    let port = std::env::var("NAV_API_PORT")
        .ok()
        .or_else(|| std::env::var("PORT").ok())
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3000);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    println!("🚀 Navigation API server listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}

/// A missing descriptor file means an empty registry; a file that exists
/// but cannot be read or parsed is a startup error.
fn load_registry(path: &str) -> Result<PageRegistry, nav_api_rust::pages::registry::RegistryError> {
    if !std::path::Path::new(path).exists() {
        tracing::warn!("Pages file {} not found, serving an empty registry", path);
        return Ok(PageRegistry::empty());
    }
    PageRegistry::load(path)
}

fn app(registry: SharedRegistry) -> Router {
    let config = config::config();

    let mut app = Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        // API
        .merge(probe_routes())
        .merge(nav_routes())
        .merge(pages_routes())
        // Global middleware
        .layer(DefaultBodyLimit::max(config.api.max_request_size_bytes))
        .with_state(registry);

    if config.api.enable_cors {
        app = app.layer(CorsLayer::permissive());
    }
    if config.api.enable_request_logging {
        app = app.layer(TraceLayer::new_for_http());
    }

    app
}

fn probe_routes() -> Router<SharedRegistry> {
    use handlers::probe;

    Router::new().route("/api/probe/:key", post(probe::probe_post))
}

fn nav_routes() -> Router<SharedRegistry> {
    use handlers::nav;

    Router::new().route("/api/nav/paths", get(nav::paths_get).post(nav::paths_post))
}

fn pages_routes() -> Router<SharedRegistry> {
    use handlers::pages;

    Router::new()
        .route("/api/pages", get(pages::pages_get))
        .route("/api/pages/find", post(pages::find_post))
        .route("/api/pages/by-path/*path", get(pages::page_get))
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "success": true,
        "data": {
            "name": "Navigation API (Rust)",
            "version": version,
            "description": "Page descriptors, menu trees and payload traversal for dynamic frontends",
            "endpoints": {
                "home": "/ (public)",
                "health": "/health (public)",
                "probe": "/api/probe/:key (POST - first value under a key in the posted payload)",
                "nav": "/api/nav/paths (GET - registry menu, POST - flatten a posted tree)",
                "pages": "/api/pages (GET), /api/pages/find (POST), /api/pages/by-path/*path (GET)",
            }
        }
    }))
}

async fn health(State(registry): State<SharedRegistry>) -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    axum::response::Json(json!({
        "success": true,
        "data": {
            "status": "ok",
            "timestamp": now,
            "pages": registry.page_count(),
            "menu_paths": registry.menu_paths().len()
        }
    }))
}
