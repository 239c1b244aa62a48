//! Handlers for the login record endpoints.
//!
//! | Method   | Path      | Notes |
//! |----------|-----------|-------|
//! | `POST`   | `/login`  | Body: `{"email":"…","phone":"…","userAgent":"…"}`; `userAgent` optional |
//! | `GET`    | `/logins` | Most recent first |
//! | `DELETE` | `/logins` | Purges every record and restarts ids |

use std::sync::Arc;

use axum::{
  Json,
  extract::{State, rejection::JsonRejection},
  http::StatusCode,
  response::IntoResponse,
};
use logbook_core::{
  login::{LoginRecord, NewLogin},
  store::LoginStore,
};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Success body for write endpoints.
#[derive(Debug, Serialize)]
pub struct Message {
  pub message: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub id:      Option<i64>,
}

// ─── Create ───────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBody {
  pub email:      Option<String>,
  pub phone:      Option<String>,
  pub user_agent: Option<String>,
}

/// `POST /login`
pub async fn create<S>(
  State(store): State<Arc<S>>,
  body: Result<Json<CreateBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
  S: LoginStore,
{
  let Json(body) = body.map_err(ApiError::invalid_body)?;
  let input = NewLogin::new(body.email, body.phone, body.user_agent)?;

  let id = store
    .insert(input)
    .await
    .map_err(|e| ApiError::store("failed to save login", e))?;

  tracing::info!(id, "login saved");
  Ok((
    StatusCode::CREATED,
    Json(Message { message: "login saved".to_owned(), id: Some(id) }),
  ))
}

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /logins`
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<LoginRecord>>, ApiError>
where
  S: LoginStore,
{
  let records = store
    .list_all()
    .await
    .map_err(|e| ApiError::store("failed to list logins", e))?;
  Ok(Json(records))
}

// ─── Purge ────────────────────────────────────────────────────────────────────

/// `DELETE /logins`
pub async fn purge<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Message>, ApiError>
where
  S: LoginStore,
{
  store
    .purge_all()
    .await
    .map_err(|e| ApiError::store("failed to purge logins", e))?;

  tracing::info!("all logins purged");
  Ok(Json(Message { message: "all logins purged".to_owned(), id: None }))
}
