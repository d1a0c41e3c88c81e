//! HTTP response types and the file-backed response builder.

use std::path::Path;

use log::debug;

use crate::parser::{HttpRequest, HttpVersion, ParseFailure};
use crate::server::error_page::{render_400, render_404};

/// HTTP status codes this server can answer with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    Ok = 200,
    BadRequest = 400,
    NotFound = 404,
}

impl StatusCode {
    /// The numeric status code.
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::NotFound => "Not Found",
        }
    }
}

/// Represents an HTTP response.
///
/// There are no header fields: on the wire a response is the status line, an empty
/// line, and the body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// The version echoed in the status line
    pub version: HttpVersion,
    /// The HTTP status code
    pub status: StatusCode,
    /// The response body
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Create a response with the given body.
    pub fn new(version: HttpVersion, status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            version,
            status,
            body: body.into(),
        }
    }

    /// The `400` response for a rejected request line.
    ///
    /// Uses the salvaged version, or HTTP/1.0 when none was found, and the salvaged
    /// path, or an empty string, in the error page.
    pub fn bad_request(failure: &ParseFailure) -> Self {
        let version = failure.version.unwrap_or_default();
        let path = failure.path.as_deref().unwrap_or_default();
        Self::new(version, StatusCode::BadRequest, render_400(path))
    }

    /// The `404` response for a path that could not be read.
    pub fn not_found(request: &HttpRequest) -> Self {
        Self::new(request.version, StatusCode::NotFound, render_404(&request.path))
    }

    /// Whether the connection stays open after this response is sent.
    pub fn keep_alive(&self) -> bool {
        self.version.is_persistent()
    }

    /// Convert the response to bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let status_line = format!(
            "{version} {code} {reason}\r\n\r\n",
            version = self.version,
            code = self.status.code(),
            reason = self.status.reason_phrase(),
        );

        let mut bytes = Vec::with_capacity(status_line.len() + self.body.len());
        bytes.extend_from_slice(status_line.as_bytes());
        bytes.extend_from_slice(&self.body);
        bytes
    }
}

/// Answer a parsed request from the filesystem.
///
/// The whole file at `root/<path>` is read into memory. Any read failure (missing
/// file, permissions, a directory) is answered with `404`.
pub async fn build_response(request: &HttpRequest, root: &Path) -> HttpResponse {
    let file = root.join(&request.path);

    match tokio::fs::read(&file).await {
        Ok(content) => HttpResponse::new(request.version, StatusCode::Ok, content),
        Err(e) => {
            debug!("Cannot read {file}: {e}", file = file.display());
            HttpResponse::not_found(request)
        }
    }
}
