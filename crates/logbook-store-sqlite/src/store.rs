//! [`SqliteStore`] — the SQLite implementation of [`LoginStore`].

use std::path::Path;

use chrono::{SubsecRound as _, Utc};

use logbook_core::{
  login::{LoginRecord, NewLogin},
  store::LoginStore,
};

use crate::{
  Result,
  encode::{RawLogin, encode_dt},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A login record store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted. All calls
/// are serialized onto the connection's dedicated thread, so each statement
/// runs as its own implicit transaction.
#[derive(Clone)]
pub struct SqliteStore {
  pub(crate) conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  pub(crate) async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Close the underlying connection. Clones of this store fail all further
  /// calls once this returns.
  pub async fn close(self) -> Result<()> {
    self.conn.close().await?;
    Ok(())
  }
}

// ─── LoginStore impl ─────────────────────────────────────────────────────────

impl LoginStore for SqliteStore {
  type Error = crate::Error;

  async fn insert(&self, input: NewLogin) -> Result<i64> {
    let (email, phone, user_agent) = input.into_parts();
    let timestamp_str = encode_dt(Utc::now().trunc_subsecs(3));

    let id = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO logins (email, phone, timestamp, userAgent)
           VALUES (?1, ?2, ?3, ?4)",
          rusqlite::params![email, phone, timestamp_str, user_agent],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    Ok(id)
  }

  async fn list_all(&self) -> Result<Vec<LoginRecord>> {
    let raws: Vec<RawLogin> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT id, email, phone, timestamp, userAgent
           FROM logins
           ORDER BY timestamp DESC, id DESC",
        )?;
        let rows = stmt
          .query_map([], RawLogin::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawLogin::into_record).collect()
  }

  async fn purge_all(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        let tx = conn.transaction()?;
        tx.execute("DELETE FROM logins", [])?;
        // Restart id assignment.
        tx.execute("DELETE FROM sqlite_sequence WHERE name = 'logins'", [])?;
        tx.commit()?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}
