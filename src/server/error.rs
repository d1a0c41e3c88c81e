//! Error types for the HTTP server.

use thiserror::Error;

/// Errors that end something larger than a single request: a connection or the
/// whole server. Malformed requests and unreadable files never show up here; they
/// are answered with `400` and `404` responses instead.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error on a socket, the listener, or a configuration file.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The configuration file is not valid JSON for a [`ServerConfig`](crate::server::ServerConfig).
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// The configuration holds a value the server cannot run with.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
