//! Server configuration.

use std::net::{Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::server::error::Error;

/// HTTP server configuration.
///
/// Every field has a default, so a JSON configuration file only needs to name the
/// fields it changes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// The address to bind to.
    pub addr: SocketAddr,
    /// Directory request paths are resolved against.
    pub root_dir: PathBuf,
    /// The maximum number of connections served at once. `1` serves clients strictly
    /// one after another.
    pub max_connections: usize,
    /// How long a persistent connection may sit idle between requests, in milliseconds.
    pub keep_alive_timeout_ms: u64,
    /// Longest request line accepted, in bytes, terminator included.
    pub max_request_line: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, 8080)),
            root_dir: PathBuf::from("."),
            max_connections: 1,
            keep_alive_timeout_ms: 2000,
            max_request_line: 8192,
        }
    }
}

impl ServerConfig {
    /// Load a configuration from a JSON file. Missing fields take their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let contents = std::fs::read_to_string(path)?;
        let config: ServerConfig = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the server cannot run with.
    pub fn validate(&self) -> Result<(), Error> {
        if self.max_connections == 0 {
            return Err(Error::InvalidConfig("max_connections must be at least 1".to_string()));
        }
        if self.keep_alive_timeout_ms == 0 {
            return Err(Error::InvalidConfig("keep_alive_timeout_ms must be at least 1".to_string()));
        }
        if self.max_request_line == 0 {
            return Err(Error::InvalidConfig("max_request_line must be at least 1".to_string()));
        }
        Ok(())
    }

    /// The idle timeout armed after each response on a persistent connection.
    pub fn keep_alive_timeout(&self) -> Duration {
        Duration::from_millis(self.keep_alive_timeout_ms)
    }
}
