//! Per-connection request loop.

use std::borrow::Cow;

use log::debug;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::time::timeout;

use crate::parser::{parse_request_line, Error as ParserError, ParseFailure};
use crate::server::config::ServerConfig;
use crate::server::error::Error;
use crate::server::response::{build_response, HttpResponse};

/// Where the session is between two reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionState {
    /// Waiting for the first request line; the read is unbounded.
    AwaitingRequestLine,
    /// A persistent response went out; the next read is bounded by the keep-alive timeout.
    Persist,
    /// Done. Nothing more is read or written.
    Closed,
}

/// Serve requests on one connection until it closes.
///
/// Each request line is read, parsed and answered before the next one is read. The
/// connection stays open only after a response whose request spoke HTTP/1.1, and then
/// only for as long as the next line arrives within `keep_alive_timeout`.
///
/// A request line is read up to `max_request_line` bytes. A longer line is answered
/// with `400 Bad Request` and the connection is closed without reading the rest.
///
/// # Returns
///
/// `Ok(())` when the client closes the connection, sends an empty line, or goes idle
/// past the keep-alive timeout, or after a non-persistent response. I/O failures are
/// returned as [`Error::IoError`]; nothing is sent to the client in that case.
pub async fn handle_connection<S>(socket: &mut S, config: &ServerConfig) -> Result<(), Error>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let mut reader = BufReader::new(socket);
    let mut line = Vec::new();
    let mut state = SessionState::AwaitingRequestLine;

    while state != SessionState::Closed {
        line.clear();

        let limit = config.max_request_line as u64;
        let mut limited = (&mut reader).take(limit);
        let read = limited.read_until(b'\n', &mut line);
        let n = if state == SessionState::Persist {
            match timeout(config.keep_alive_timeout(), read).await {
                Ok(n) => n?,
                Err(_) => {
                    debug!("Keep-alive timeout elapsed, closing connection");
                    break;
                }
            }
        } else {
            read.await?
        };

        if n == 0 {
            debug!("End of requests on connection");
            break;
        }

        let response = if n as u64 >= limit && line.last() != Some(&b'\n') {
            debug!("Request line exceeds {limit} bytes");
            let failure = ParseFailure::bare(ParserError::LineTooLong(config.max_request_line));
            HttpResponse::bad_request(&failure)
        } else {
            let request_line = trim_line_ending(&line);
            if request_line.is_empty() {
                debug!("End of requests on connection");
                break;
            }
            respond(&request_line, config).await
        };

        let stream = reader.get_mut();
        stream.write_all(&response.to_bytes()).await?;
        stream.flush().await?;

        state = if response.keep_alive() {
            SessionState::Persist
        } else {
            SessionState::Closed
        };
    }

    Ok(())
}

/// Turn one request line into its response.
async fn respond(request_line: &str, config: &ServerConfig) -> HttpResponse {
    debug!("Request line: {request_line:?}");

    let response = match parse_request_line(request_line) {
        Ok(request) => build_response(&request, &config.root_dir).await,
        Err(failure) => {
            debug!("Rejected request line: {failure}");
            HttpResponse::bad_request(&failure)
        }
    };

    debug!(
        "Responding {version} {code}",
        version = response.version,
        code = response.status.code()
    );
    response
}

/// Decode a raw line and drop its `\n` / `\r\n` terminator.
fn trim_line_ending(line: &[u8]) -> Cow<'_, str> {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    String::from_utf8_lossy(line)
}
