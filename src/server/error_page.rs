//! Fixed HTML bodies for error responses.
//!
//! The path is interpolated as-is, without HTML escaping.

use crate::server::response::StatusCode;

/// Body for a `400 Bad Request`.
pub fn render_400(path: &str) -> Vec<u8> {
    render(StatusCode::BadRequest, path)
}

/// Body for a `404 Not Found`.
pub fn render_404(path: &str) -> Vec<u8> {
    render(StatusCode::NotFound, path)
}

fn heading(status: StatusCode) -> &'static str {
    match status {
        StatusCode::Ok => "OK",
        StatusCode::BadRequest => "BAD REQUEST",
        StatusCode::NotFound => "PAGE NOT FOUND",
    }
}

fn render(status: StatusCode, path: &str) -> Vec<u8> {
    format!(
        "<html><h1>ERROR {code}: {heading}</h1><p>{path} page could not be found. Please try again.</p></html>\r\n",
        code = status.code(),
        heading = heading(status),
    )
    .into_bytes()
}
