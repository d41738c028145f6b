//! Server configuration, read from a TOML file.
//!
//! ```toml
//! [server]
//! bind = "127.0.0.1:8080"
//!
//! [database]
//! path = "petclinic.db"   # omit for an in-memory store
//! seed = true
//!
//! [log]
//! filter = "petclinic_core=info,petclinic_web=info,tower_http=info,warn"
//! format = "compact"      # or "json"
//! ```

use anyhow::{Context, Result};
use petclinic_core::Database;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DatabaseConfig {
    /// SQLite file; `None` keeps everything in memory
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// Load the sample vets, owners, pets and visits into an empty store
    #[serde(default = "default_true")]
    pub seed: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: None,
            seed: default_true(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogConfig {
    #[serde(default = "default_log_filter")]
    pub filter: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            format: default_log_format(),
        }
    }
}

fn default_bind() -> String {
    "127.0.0.1:8080".to_string()
}

fn default_true() -> bool {
    true
}

fn default_log_filter() -> String {
    "petclinic_core=info,petclinic_web=info,tower_http=info,warn".to_string()
}

fn default_log_format() -> String {
    "compact".to_string()
}

/// Load configuration from `path`, falling back to defaults if it is absent.
pub fn load_config(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    toml::from_str::<AppConfig>(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))
}

impl AppConfig {
    /// Apply command-line overrides.
    pub fn with_overrides(
        mut self,
        bind: Option<String>,
        database: Option<PathBuf>,
        seed: Option<bool>,
    ) -> Self {
        if let Some(bind) = bind {
            self.server.bind = bind;
        }
        if let Some(path) = database {
            self.database.path = Some(path);
        }
        if let Some(seed) = seed {
            self.database.seed = seed;
        }
        self
    }

    /// Open the configured store, seeding it if asked to.
    pub fn open_database(&self) -> Result<Database> {
        let db = match &self.database.path {
            Some(path) => Database::open(path)
                .with_context(|| format!("Failed to open database {}", path.display()))?,
            None => Database::open_in_memory().context("Failed to open in-memory database")?,
        };

        if self.database.seed {
            db.seed_sample_data().context("Failed to seed sample data")?;
        }
        Ok(db)
    }
}
