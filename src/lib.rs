//! A minimal static file HTTP server.
//!
//! The server reads one request line per exchange, accepts only
//! `GET <path> HTTP/1.0` and `GET <path> HTTP/1.1`, and answers with the raw bytes
//! of the file at `<path>`, relative to the configured root directory. Responses
//! carry no header fields: a status line, an empty line, then the body.
//!
//! - Malformed or unsupported request lines get `400 Bad Request`.
//! - Paths that cannot be read get `404 Not Found`.
//! - HTTP/1.1 requests keep the connection open until it goes idle for the
//!   keep-alive timeout (2 seconds by default).
//!
//! # Examples
//!
//! ## Parsing a request line
//!
//! ```
//! use filehttp_rs::{parse_request_line, HttpVersion};
//!
//! let request = parse_request_line("GET /index.html HTTP/1.1").unwrap();
//! assert_eq!(request.path, "index.html");
//! assert_eq!(request.version, HttpVersion::Http11);
//! ```
//!
//! ## Rejected request lines
//!
//! ```
//! use filehttp_rs::{parse_request_line, HttpResponse, ParserError};
//!
//! let failure = parse_request_line("POST / HTTP/1.0").unwrap_err();
//! assert!(matches!(failure.error, ParserError::UnsupportedMethod(_)));
//!
//! let response = HttpResponse::bad_request(&failure).to_bytes();
//! assert!(response.starts_with(b"HTTP/1.0 400 Bad Request\r\n\r\n<html>"));
//! ```
//!
//! ## Running a server
//!
//! ```no_run
//! use filehttp_rs::{HttpServer, ServerConfig};
//!
//! # async fn run() -> Result<(), filehttp_rs::ServerError> {
//! let config = ServerConfig {
//!     addr: "127.0.0.1:8080".parse().unwrap(),
//!     root_dir: "public".into(),
//!     ..ServerConfig::default()
//! };
//! HttpServer::new(config).start().await
//! # }
//! ```

// Export the parser module
pub mod parser;

// Export the server module
pub mod server;

// Re-export commonly used items for convenience
pub use parser::{Error as ParserError, HttpRequest, HttpVersion, ParseFailure, parse_request_line};
pub use server::{Error as ServerError, HttpResponse, HttpServer, ServerConfig, StatusCode};
