//! Error types for the request-line parser.

use thiserror::Error;

use crate::parser::version::HttpVersion;

/// Ways a request line can violate the accepted grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The line does not split into exactly three space-separated tokens.
    #[error("Malformed request line: {0:?}")]
    MalformedRequestLine(String),

    /// Only `GET` is served.
    #[error("Unsupported HTTP method: {0}")]
    UnsupportedMethod(String),

    /// The request target token is empty.
    #[error("Empty request path")]
    EmptyPath,

    /// The protocol token is not `HTTP/1.0` or `HTTP/1.1`.
    #[error("Invalid HTTP version: {0}")]
    InvalidVersion(String),

    /// No line terminator within the allowed number of bytes.
    #[error("Request line longer than {0} bytes")]
    LineTooLong(usize),
}

/// A rejected request line, together with whatever could be salvaged from it.
///
/// The salvaged pieces feed the `400 Bad Request` response: `path` is interpolated
/// into the error page and `version` picks the status-line version (and whether the
/// connection stays open). Either may be absent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{error}")]
pub struct ParseFailure {
    /// Why the line was rejected.
    #[source]
    pub error: Error,
    /// The path token with its leading character stripped, if one was reached.
    pub path: Option<String>,
    /// A supported version found in the protocol token despite the failure.
    pub version: Option<HttpVersion>,
}

impl ParseFailure {
    /// A failure with nothing salvaged.
    pub fn bare(error: Error) -> Self {
        Self {
            error,
            path: None,
            version: None,
        }
    }
}

impl From<Error> for ParseFailure {
    fn from(error: Error) -> Self {
        Self::bare(error)
    }
}
