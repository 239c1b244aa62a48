//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
///
/// Store failures carry a fixed, client-facing `message`; the underlying
/// `source` is logged and never sent in the response body.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("bad request: {0}")]
  BadRequest(String),

  #[error("{message}: {source}")]
  Store {
    message: &'static str,
    #[source]
    source:  Box<dyn std::error::Error + Send + Sync>,
  },
}

/// Client-facing message for request bodies that could not be decoded.
pub const INVALID_BODY: &str = "invalid request body";

impl ApiError {
  /// Reject an undecodable request body. `detail` is logged, never returned.
  pub fn invalid_body<D: std::fmt::Display>(detail: D) -> Self {
    tracing::warn!(error = %detail, "rejected request body");
    ApiError::BadRequest(INVALID_BODY.to_owned())
  }

  /// Wrap a store failure, logging its detail.
  pub fn store<E>(message: &'static str, source: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    tracing::error!(error = %source, "{message}");
    ApiError::Store { message, source: Box::new(source) }
  }
}

impl From<logbook_core::Error> for ApiError {
  fn from(e: logbook_core::Error) -> Self {
    tracing::warn!(error = %e, "rejected login input");
    ApiError::BadRequest(e.to_string())
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match self {
      ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, m),
      ApiError::Store { message, .. } => {
        (StatusCode::INTERNAL_SERVER_ERROR, message.to_owned())
      }
    };
    (status, Json(json!({ "error": message }))).into_response()
  }
}

#[cfg(test)]
mod tests {
  use std::{
    fmt::{self, Write as _},
    sync::{Arc, Mutex},
  };

  use tracing::{
    Event, Level, Subscriber,
    field::{Field, Visit},
  };
  use tracing_subscriber::{
    layer::{Context, Layer, SubscriberExt as _},
    registry,
  };

  use super::*;

  type Captured = Arc<Mutex<Vec<(Level, String)>>>;

  /// Records every event's level and rendered fields.
  struct Capture(Captured);

  struct Fields(String);

  impl Visit for Fields {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
      let _ = write!(self.0, "{}={:?} ", field.name(), value);
    }
  }

  impl<S: Subscriber> Layer<S> for Capture {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
      let mut fields = Fields(String::new());
      event.record(&mut fields);
      self.0.lock().unwrap().push((*event.metadata().level(), fields.0));
    }
  }

  fn capture<T>(f: impl FnOnce() -> T) -> (T, Vec<(Level, String)>) {
    let logs = Captured::default();
    let subscriber = registry().with(Capture(logs.clone()));
    let out = tracing::subscriber::with_default(subscriber, f);
    let logs = logs.lock().unwrap().clone();
    (out, logs)
  }

  fn body_message(err: ApiError) -> (StatusCode, String) {
    let resp = err.into_response();
    let status = resp.status();
    let bytes = response_bytes(resp);
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json["error"].as_str().unwrap().to_owned())
  }

  fn response_bytes(resp: Response) -> Vec<u8> {
    tokio::runtime::Builder::new_current_thread()
      .build()
      .unwrap()
      .block_on(axum::body::to_bytes(resp.into_body(), usize::MAX))
      .unwrap()
      .to_vec()
  }

  #[test]
  fn invalid_body_logs_detail_but_returns_fixed_message() {
    let (err, logs) = capture(|| ApiError::invalid_body("key must be a string at line 1"));

    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].0, Level::WARN);
    assert!(logs[0].1.contains("key must be a string"), "log: {}", logs[0].1);

    let (status, message) = body_message(err);
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(message, INVALID_BODY);
  }

  #[test]
  fn validation_error_is_logged_before_becoming_400() {
    let (err, logs) =
      capture(|| ApiError::from(logbook_core::Error::MissingField("phone")));

    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].0, Level::WARN);
    assert!(logs[0].1.contains("phone"), "log: {}", logs[0].1);

    let (status, _) = body_message(err);
    assert_eq!(status, StatusCode::BAD_REQUEST);
  }

  #[test]
  fn store_error_is_logged_and_hidden() {
    let (err, logs) = capture(|| {
      ApiError::store("failed to list logins", std::io::Error::other("/secret/db"))
    });

    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].0, Level::ERROR);
    assert!(logs[0].1.contains("/secret/db"));

    let (status, message) = body_message(err);
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(message, "failed to list logins");
  }
}
