//! Static file HTTP server.
//!
//! [`HttpServer`] accepts connections and hands each one to
//! [`handle_connection`], which answers request lines with file contents or with a
//! `400`/`404` error page until the connection closes.

mod response;
mod config;
mod error;
mod error_page;
mod http_server;
mod session;

// Re-export public items
pub use response::{build_response, HttpResponse, StatusCode};
pub use config::ServerConfig;
pub use error::Error;
pub use error_page::{render_400, render_404};
pub use http_server::HttpServer;
pub use session::handle_connection;
