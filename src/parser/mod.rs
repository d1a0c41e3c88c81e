//! HTTP request-line parser.
//!
//! Only the first line of a request is ever looked at. It is accepted when it reads
//! `GET <target> HTTP/1.0` or `GET <target> HTTP/1.1`; everything else is rejected
//! with a [`ParseFailure`] that still carries whatever path and version could be
//! recovered for the error response.

mod request;
mod version;
mod error;

// Re-export public items
pub use request::HttpRequest;
pub use version::HttpVersion;
pub use error::{Error, ParseFailure};

// Re-export the parse function
pub use request::parse_request_line;
