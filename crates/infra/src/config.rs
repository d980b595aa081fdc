//! Layered application configuration.
//!
//! Sources, later ones winning:
//! 1. `config/default.toml`
//! 2. `config/{RUN_MODE}.toml` (optional, `RUN_MODE` defaults to `development`)
//! 3. `config/local.toml` (optional, not checked in)
//! 4. `STOCKLY__SECTION__KEY` environment variables
//! 5. `DATABASE_URL` and `PORT`, as set by most hosting platforms

use std::env;
use std::path::Path;

use serde::Deserialize;

use stockly_observability::LogSettings;
use stockly_reporting::LowStockPolicy;

pub use ::config::ConfigError;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    pub reporting: ReportingConfig,
    #[serde(default)]
    pub logging: LogSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Postgres connection string. Absent means in-memory stores.
    pub url: Option<String>,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_acquire_timeout_secs")]
    pub acquire_timeout_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            max_connections: default_max_connections(),
            acquire_timeout_secs: default_acquire_timeout_secs(),
        }
    }
}

fn default_max_connections() -> u32 {
    5
}

fn default_acquire_timeout_secs() -> u64 {
    3
}

/// Reporting knobs. The low-stock threshold has no built-in default.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportingConfig {
    pub low_stock_threshold: i32,
}

impl ReportingConfig {
    pub fn low_stock_policy(&self) -> LowStockPolicy {
        LowStockPolicy::new(self.low_stock_threshold)
    }
}

impl AppConfig {
    /// Load from `./config` plus the environment.
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        Self::load_from(Path::new("config"), &run_mode)
    }

    pub fn load_from(dir: &Path, run_mode: &str) -> Result<Self, ConfigError> {
        let port = env::var("PORT").ok().and_then(|p| p.parse::<i64>().ok());

        let s = ::config::Config::builder()
            .add_source(::config::File::from(dir.join("default")))
            .add_source(::config::File::from(dir.join(run_mode)).required(false))
            .add_source(::config::File::from(dir.join("local")).required(false))
            .add_source(
                ::config::Environment::with_prefix("STOCKLY")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("database.url", env::var("DATABASE_URL").ok())?
            .set_override_option("server.port", port)?
            .build()?;

        s.try_deserialize()
    }

    /// Parse a single TOML document, without files or environment.
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        ::config::Config::builder()
            .add_source(::config::File::from_str(toml, ::config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}
