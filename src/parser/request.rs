//! Request-line parsing and the parsed request value.

use std::str::FromStr;

use crate::parser::error::{Error, ParseFailure};
use crate::parser::version::HttpVersion;

const METHOD: &str = "GET";
const PROTOCOL_PREFIX: &str = "HTTP/";
const VERSION_TOKEN_LEN: usize = 8;

/// A successfully parsed request line.
///
/// Built fresh for every line and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    /// The requested resource, leading separator removed. May be anything, including
    /// `..` segments; no normalization is applied.
    pub path: String,
    /// The protocol version the client spoke.
    pub version: HttpVersion,
}

impl HttpRequest {
    /// Create a new request.
    pub fn new(path: impl Into<String>, version: HttpVersion) -> Self {
        Self {
            path: path.into(),
            version,
        }
    }
}

/// Parse a single request line of the form `GET /<path> HTTP/<1.0|1.1>`.
///
/// The line must not carry its line terminator. Tokens are separated by single
/// spaces, so doubled spaces produce empty tokens and fail the token count.
///
/// # Returns
///
/// The parsed request, or a [`ParseFailure`] carrying the fallback path and version
/// used to render the `400` response.
pub fn parse_request_line(line: &str) -> Result<HttpRequest, ParseFailure> {
    let tokens: Vec<&str> = line.split(' ').collect();
    if tokens.len() != 3 {
        return Err(Error::MalformedRequestLine(line.to_string()).into());
    }

    let (method, target, protocol) = (tokens[0], tokens[1], tokens[2]);
    if method != METHOD {
        return Err(Error::UnsupportedMethod(method.to_string()).into());
    }

    let path = strip_leading_char(target).ok_or(Error::EmptyPath)?;

    let version = parse_version_token(protocol).map_err(|(error, version)| ParseFailure {
        error,
        path: Some(path.to_string()),
        version,
    })?;

    Ok(HttpRequest::new(path, version))
}

/// Drop the first character of the request target (conventionally `/`).
fn strip_leading_char(target: &str) -> Option<&str> {
    let mut chars = target.chars();
    chars.next()?;
    Some(chars.as_str())
}

/// Validate an `HTTP/X.Y` token.
///
/// On failure, also returns the version if the last three bytes name a supported one.
fn parse_version_token(token: &str) -> Result<HttpVersion, (Error, Option<HttpVersion>)> {
    let invalid = || Error::InvalidVersion(token.to_string());

    if token.len() != VERSION_TOKEN_LEN {
        return Err((invalid(), None));
    }

    let version = token
        .get(PROTOCOL_PREFIX.len()..)
        .and_then(|number| HttpVersion::from_str(number).ok());

    match (token.get(..PROTOCOL_PREFIX.len()), version) {
        (Some(PROTOCOL_PREFIX), Some(version)) => Ok(version),
        (_, salvaged) => Err((invalid(), salvaged)),
    }
}
