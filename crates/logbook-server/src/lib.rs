//! HTTP front for Logbook.
//!
//! Composes the JSON API from `logbook-api` under `/api`, redirects `/` to the
//! login page, and serves the static front-end for every other path.

pub mod config;

pub use config::ServerConfig;

use std::{path::Path, sync::Arc};

use axum::{Router, response::Redirect, routing::get};
use logbook_core::store::LoginStore;
use tower_http::{services::ServeDir, trace::TraceLayer};

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the application [`Router`] for `store`, serving assets from
/// `static_dir`.
pub fn router<S>(store: Arc<S>, static_dir: impl AsRef<Path>) -> Router
where
  S: LoginStore + 'static,
{
  Router::new()
    .route("/", get(|| async { Redirect::to("/index.html") }))
    .nest("/api", logbook_api::api_router(store))
    .fallback_service(ServeDir::new(static_dir))
    .layer(TraceLayer::new_for_http())
}

// ─── Integration tests ────────────────────────────────────────────────────────
