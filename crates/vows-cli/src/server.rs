//! HTTP server for the invitation site.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /gallery.json` - Gallery listing, assembled on every request
//! - everything else - Static files from the public root, falling back to
//!   `index.html` so hash routes load the app

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};
use vows_core::Gallery;

// ============================================================================
// Application State
// ============================================================================

/// Shared state: only the public root, which never changes after startup.
#[derive(Clone)]
pub struct AppState {
    public_root: Arc<PathBuf>,
}

impl AppState {
    pub fn new(public_root: PathBuf) -> Self {
        Self {
            public_root: Arc::new(public_root),
        }
    }

    pub fn public_root(&self) -> &Path {
        &self.public_root
    }
}

// ============================================================================
// Handlers
// ============================================================================

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// GET /health
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /gallery.json - list the image directories afresh so newly added
/// photos show up without a rebuild.
async fn gallery_manifest(State(state): State<AppState>) -> Response {
    let root = Arc::clone(&state.public_root);
    let gallery = match tokio::task::spawn_blocking(move || Gallery::assemble(&root)).await {
        Ok(gallery) => gallery,
        Err(e) => {
            warn!(error = %e, "gallery listing task failed");
            Gallery::default()
        }
    };
    debug!(images = gallery.len(), "served gallery");

    ([(header::CACHE_CONTROL, "no-store")], Json(gallery)).into_response()
}

// ============================================================================
// Router
// ============================================================================

/// Build the router for `state`.
pub fn create_router(state: AppState) -> Router {
    let index = state.public_root.join("index.html");
    let static_files = ServeDir::new(state.public_root.as_path()).fallback(ServeFile::new(index));

    // The site is public and read-only
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/gallery.json", get(gallery_manifest))
        .fallback_service(static_files)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve `public_root` on `addr` until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the listener cannot bind or the server fails.
pub async fn run_server(public_root: PathBuf, addr: SocketAddr) -> anyhow::Result<()> {
    if !public_root.join("index.html").is_file() {
        warn!(root = %public_root.display(), "no index.html in public root");
    }

    let app = create_router(AppState::new(public_root));

    info!("Starting invitation server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutting down");
        })
        .await?;

    Ok(())
}
