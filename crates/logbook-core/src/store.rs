//! The `LoginStore` trait.
//!
//! Implemented by storage backends (e.g. `logbook-store-sqlite`). The HTTP
//! layer (`logbook-api`) depends on this abstraction, not on any concrete
//! backend.

use std::future::Future;

use crate::login::{LoginRecord, NewLogin};

/// Abstraction over a login record store backend.
///
/// Records are never updated in place. Every call is a single
/// all-or-nothing operation and is reported once to the caller; backends do
/// not retry.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait LoginStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Persist a login attempt and return its newly assigned id.
  /// The timestamp is set by the store.
  fn insert(
    &self,
    input: NewLogin,
  ) -> impl Future<Output = Result<i64, Self::Error>> + Send + '_;

  /// Return every record, most recent first. Records sharing a timestamp are
  /// ordered by id, highest first.
  fn list_all(
    &self,
  ) -> impl Future<Output = Result<Vec<LoginRecord>, Self::Error>> + Send + '_;

  /// Delete every record and restart id assignment, so the next insert
  /// receives the smallest id again.
  fn purge_all(&self) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;
}
