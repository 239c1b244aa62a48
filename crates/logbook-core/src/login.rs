//! Login records — the single entity the store persists.
//!
//! A [`LoginRecord`] is created once, never updated, and only destroyed by a
//! bulk purge. Inserts go through [`NewLogin`], which can only be built from
//! input that passed the presence checks.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// One persisted login attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRecord {
  pub id:         i64,
  pub email:      String,
  pub phone:      String,
  /// Server-assigned at insert time.
  #[serde(with = "iso_millis")]
  pub timestamp:  DateTime<Utc>,
  pub user_agent: Option<String>,
}

/// Validated input for [`LoginStore::insert`](crate::store::LoginStore::insert).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLogin {
  email:      String,
  phone:      String,
  user_agent: Option<String>,
}

impl NewLogin {
  /// Build an insert request. `email` and `phone` must be present and
  /// non-empty; no format validation is applied to either.
  pub fn new(
    email:      Option<String>,
    phone:      Option<String>,
    user_agent: Option<String>,
  ) -> Result<Self> {
    let email = email
      .filter(|e| !e.is_empty())
      .ok_or(Error::MissingField("email"))?;
    let phone = phone
      .filter(|p| !p.is_empty())
      .ok_or(Error::MissingField("phone"))?;
    Ok(Self { email, phone, user_agent })
  }

  pub fn email(&self) -> &str { &self.email }

  pub fn phone(&self) -> &str { &self.phone }

  pub fn user_agent(&self) -> Option<&str> { self.user_agent.as_deref() }

  /// Consume into `(email, phone, user_agent)`.
  pub fn into_parts(self) -> (String, String, Option<String>) {
    (self.email, self.phone, self.user_agent)
  }
}

/// Format a timestamp the way it is stored and served:
/// RFC 3339, UTC, millisecond precision, `Z` suffix.
pub fn format_timestamp(dt: DateTime<Utc>) -> String {
  dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

mod iso_millis {
  use chrono::{DateTime, Utc};
  use serde::{Deserialize, Deserializer, Serializer};

  pub fn serialize<S: Serializer>(
    dt: &DateTime<Utc>,
    serializer: S,
  ) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&super::format_timestamp(*dt))
  }

  pub fn deserialize<'de, D: Deserializer<'de>>(
    deserializer: D,
  ) -> Result<DateTime<Utc>, D::Error> {
    let s = String::deserialize(deserializer)?;
    DateTime::parse_from_rfc3339(&s)
      .map(|dt| dt.with_timezone(&Utc))
      .map_err(serde::de::Error::custom)
  }
}

#[cfg(test)]
mod tests {
  use chrono::TimeZone;

  use super::*;

  #[test]
  fn new_login_accepts_present_fields() {
    let login = NewLogin::new(
      Some("a@x.com".into()),
      Some("555".into()),
      Some("curl/8.0".into()),
    )
    .unwrap();
    assert_eq!(login.email(), "a@x.com");
    assert_eq!(login.phone(), "555");
    assert_eq!(login.user_agent(), Some("curl/8.0"));
  }

  #[test]
  fn new_login_user_agent_is_optional() {
    let login =
      NewLogin::new(Some("a@x.com".into()), Some("555".into()), None).unwrap();
    assert_eq!(login.user_agent(), None);
  }

  #[test]
  fn new_login_rejects_missing_or_empty_email() {
    assert_eq!(
      NewLogin::new(None, Some("555".into()), None),
      Err(Error::MissingField("email"))
    );
    assert_eq!(
      NewLogin::new(Some(String::new()), Some("555".into()), None),
      Err(Error::MissingField("email"))
    );
  }

  #[test]
  fn new_login_rejects_missing_or_empty_phone() {
    assert_eq!(
      NewLogin::new(Some("a@x.com".into()), None, None),
      Err(Error::MissingField("phone"))
    );
    assert_eq!(
      NewLogin::new(Some("a@x.com".into()), Some(String::new()), None),
      Err(Error::MissingField("phone"))
    );
  }

  #[test]
  fn new_login_does_not_trim_or_validate_format() {
    let login =
      NewLogin::new(Some(" not-an-email ".into()), Some("x".into()), None)
        .unwrap();
    assert_eq!(login.email(), " not-an-email ");
  }

  #[test]
  fn record_serializes_camel_case_with_millis() {
    let record = LoginRecord {
      id:         7,
      email:      "a@x.com".into(),
      phone:      "555".into(),
      timestamp:  Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
      user_agent: None,
    };
    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["timestamp"], "2024-05-01T12:00:00.000Z");
    assert!(json["userAgent"].is_null());
    assert_eq!(json["id"], 7);
  }
}
