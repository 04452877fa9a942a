//! Configuration loading and typed config structures for the server.
//!
//! The configuration lives in `chairman-config.yaml` at the project root.
//! Every key is optional: a missing file or section falls back to the
//! defaults below (listen on `0.0.0.0:8080`, serve seats 1 to 3).
//!
//! Seat entries are read as raw [`SeatRecord`]s. Their statuses and ids
//! are validated when the store is built, not here.

use std::path::Path;

use chairman_gateway::ServerConfig;
use chairman_store::SeatRecord;
use serde::Deserialize;

/// Environment variable that overrides `server.port`.
pub const PORT_ENV: &str = "CHAIRMAN_PORT";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// An environment override holds an unusable value.
    #[error("invalid value for {name}: {value:?}")]
    Env {
        /// The variable name.
        name: &'static str,
        /// The rejected value.
        value: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level server configuration.
///
/// Mirrors the structure of `chairman-config.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChairmanConfig {
    /// Listener settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Initial seats, in serving order.
    #[serde(default = "default_seats")]
    pub seats: Vec<SeatRecord>,
}

impl Default for ChairmanConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            seats: default_seats(),
        }
    }
}

impl ChairmanConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// `CHAIRMAN_PORT` overrides `server.port` when set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if the content is not valid YAML, or
    /// [`ConfigError::Env`] if the port override is not a port number.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut config = Self::parse(&contents)?;
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Parse configuration from a YAML string.
    ///
    /// An empty document yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yml::from_str(yaml)?)
    }

    /// Apply overrides from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Env`] if `CHAIRMAN_PORT` is not a port number.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        let port = std::env::var(PORT_ENV).ok();
        self.apply_port_override(port.as_deref())
    }

    /// Replace the listen port with `value` when present.
    fn apply_port_override(&mut self, value: Option<&str>) -> Result<(), ConfigError> {
        if let Some(raw) = value {
            self.server.port =
                raw.trim()
                    .parse::<u16>()
                    .ok()
                    .ok_or_else(|| ConfigError::Env {
                        name: PORT_ENV,
                        value: raw.to_owned(),
                    })?;
        }
        Ok(())
    }
}

fn default_seats() -> Vec<SeatRecord> {
    vec![
        SeatRecord::new(1, "empty"),
        SeatRecord::new(2, "occupied"),
        SeatRecord::new(3, "empty"),
    ]
}
