//! SQL schema for the Logbook SQLite store.
//!
//! Executed each time a connection is opened. `PRAGMA user_version` records
//! the schema revision.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
///
/// `AUTOINCREMENT` makes SQLite keep the id counter in `sqlite_sequence`,
/// which a purge resets explicitly.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS logins (
    id         INTEGER PRIMARY KEY AUTOINCREMENT,
    email      TEXT NOT NULL,
    phone      TEXT NOT NULL,
    timestamp  TEXT NOT NULL,   -- ISO 8601 UTC, millisecond precision; server-assigned
    userAgent  TEXT
);

PRAGMA user_version = 1;
";
