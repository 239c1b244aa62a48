//! Runtime server configuration.
//!
//! Sources, lowest precedence first:
//!
//! 1. Defaults. `port` falls back to `$PORT`, then 3000; `data_dir` falls back
//!    to `$RENDER_DISK_MOUNT_PATH`, then the working directory.
//! 2. An optional TOML file.
//! 3. `LOGBOOK_*` environment variables (`LOGBOOK_PORT`, `LOGBOOK_DATA_DIR`, …).

use std::path::{Path, PathBuf};

use config::ConfigError;
use serde::Deserialize;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  pub host:          String,
  pub port:          u16,
  /// Directory holding the SQLite file.
  pub data_dir:      PathBuf,
  pub database_file: String,
  /// Front-end assets served for every path the API does not claim.
  pub static_dir:    PathBuf,
}

impl ServerConfig {
  /// Load configuration, reading `path` if it exists.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    Self::from_sources(
      path,
      std::env::var("PORT").ok(),
      std::env::var("RENDER_DISK_MOUNT_PATH").ok(),
    )
  }

  /// Empty platform variables count as unset.
  fn from_sources(
    path:     &Path,
    port:     Option<String>,
    data_dir: Option<String>,
  ) -> Result<Self, ConfigError> {
    let port = port
      .filter(|p| !p.is_empty())
      .unwrap_or_else(|| DEFAULT_PORT.to_string());
    let data_dir = data_dir
      .filter(|d| !d.is_empty())
      .or_else(|| {
        std::env::current_dir()
          .ok()
          .map(|d| d.to_string_lossy().into_owned())
      })
      .unwrap_or_else(|| ".".to_owned());

    config::Config::builder()
      .set_default("host", "0.0.0.0")?
      .set_default("port", port)?
      .set_default("data_dir", data_dir)?
      .set_default("database_file", "database.db")?
      .set_default("static_dir", "public")?
      .add_source(config::File::from(path).required(false))
      .add_source(config::Environment::with_prefix("LOGBOOK"))
      .build()?
      .try_deserialize()
  }

  /// Full path of the SQLite database file.
  pub fn store_path(&self) -> PathBuf { self.data_dir.join(&self.database_file) }

  /// `host:port` for binding the listener.
  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}
