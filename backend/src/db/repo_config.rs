//! Service configuration file support.
//!
//! Reads `open-hours.toml` and applies environment overrides on top of it.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use super::repository::{ErrorContext, RepositoryError};

/// Name of the configuration file searched for by [`ServiceConfig::from_default_location`].
pub const CONFIG_FILE_NAME: &str = "open-hours.toml";

/// Top-level service configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub catalog: CatalogSettings,
}

/// HTTP bind settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Where the restaurant catalog is bootstrapped from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogSettings {
    /// CSV file with `name,hours` rows. No catalog is loaded when unset.
    #[serde(default)]
    pub csv_path: Option<PathBuf>,
    #[serde(default = "default_has_header")]
    pub has_header: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_has_header() -> bool {
    true
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            csv_path: None,
            has_header: default_has_header(),
        }
    }
}

impl ServiceConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Returns
    /// * `Ok(ServiceConfig)` if successful
    /// * `Err(RepositoryError)` if file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, RepositoryError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            RepositoryError::configuration(
                format!("Failed to read config file: {}", e),
                ErrorContext::new("load_config").with_details(path.display().to_string()),
            )
        })?;

        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, RepositoryError> {
        toml::from_str(content).map_err(|e| {
            RepositoryError::configuration(
                format!("Failed to parse config file: {}", e),
                ErrorContext::new("parse_config"),
            )
        })
    }

    /// Load configuration from the default location.
    ///
    /// Searches for `open-hours.toml` in:
    /// 1. Current directory
    /// 2. `backend/` directory
    /// 3. Parent directory
    ///
    /// Falls back to defaults when no file exists.
    pub fn from_default_location() -> Result<Self, RepositoryError> {
        let search_paths = [
            PathBuf::from(CONFIG_FILE_NAME),
            PathBuf::from("backend").join(CONFIG_FILE_NAME),
            PathBuf::from("..").join(CONFIG_FILE_NAME),
        ];

        match search_paths.iter().find(|path| path.exists()) {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Apply `HOST`, `PORT` and `CATALOG_CSV` environment overrides.
    pub fn with_env_overrides(mut self) -> Result<Self, RepositoryError> {
        if let Ok(host) = env::var("HOST") {
            self.server.host = host;
        }
        if let Ok(port) = env::var("PORT") {
            self.server.port = port.parse().map_err(|_| {
                RepositoryError::configuration(
                    format!("PORT must be a valid port number, got {:?}", port),
                    ErrorContext::new("env_overrides").with_details("PORT"),
                )
            })?;
        }
        if let Ok(path) = env::var("CATALOG_CSV") {
            self.catalog.csv_path = if path.trim().is_empty() {
                None
            } else {
                Some(PathBuf::from(path))
            };
        }
        Ok(self)
    }

    /// `host:port` string for binding the HTTP listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
