//! Encoding and decoding helpers between domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are stored as RFC 3339 strings with millisecond precision, so
//! lexical order on the column is chronological order.

use chrono::{DateTime, Utc};
use logbook_core::login::{LoginRecord, format_timestamp};

use crate::{Error, Result};

// ─── DateTime<Utc> ────────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { format_timestamp(dt) }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Raw row ──────────────────────────────────────────────────────────────────

/// A `logins` row as read from SQLite, before timestamp decoding.
pub struct RawLogin {
  pub id:         i64,
  pub email:      String,
  pub phone:      String,
  pub timestamp:  String,
  pub user_agent: Option<String>,
}

impl RawLogin {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:         row.get(0)?,
      email:      row.get(1)?,
      phone:      row.get(2)?,
      timestamp:  row.get(3)?,
      user_agent: row.get(4)?,
    })
  }

  pub fn into_record(self) -> Result<LoginRecord> {
    Ok(LoginRecord {
      id:         self.id,
      email:      self.email,
      phone:      self.phone,
      timestamp:  decode_dt(&self.timestamp)?,
      user_agent: self.user_agent,
    })
  }
}

#[cfg(test)]
mod tests {
  use chrono::TimeZone;

  use super::*;

  #[test]
  fn encoded_timestamps_sort_chronologically() {
    let earlier = Utc.with_ymd_and_hms(2024, 5, 1, 9, 59, 59).unwrap();
    let later   = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
    assert!(encode_dt(earlier) < encode_dt(later));
    assert_eq!(encode_dt(later), "2024-05-01T10:00:00.000Z");
  }

  #[test]
  fn decode_rejects_garbage() {
    assert!(matches!(decode_dt("yesterday"), Err(Error::DateParse(_))));
  }

  #[test]
  fn decode_accepts_what_encode_writes() {
    let dt = Utc.with_ymd_and_hms(2023, 12, 31, 23, 59, 59).unwrap();
    assert_eq!(decode_dt(&encode_dt(dt)).unwrap(), dt);
  }
}
