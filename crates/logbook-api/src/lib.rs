//! JSON REST API for Logbook.
//!
//! Exposes an axum [`Router`] backed by any [`logbook_core::store::LoginStore`].
//! Static assets, tracing layers and transport concerns are the caller's
//! responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", logbook_api::api_router(store.clone()))
//! ```

pub mod error;
pub mod logins;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use logbook_core::store::LoginStore;

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: LoginStore + 'static,
{
  Router::new()
    .route("/login", post(logins::create::<S>))
    .route("/logins", get(logins::list::<S>).delete(logins::purge::<S>))
    .with_state(store)
}
