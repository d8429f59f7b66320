//! Minimal HTTP/1.1 front end for [`super::route`].
//!
//! One task per connection, one request per connection (`Connection: close`). Only
//! the request line is interpreted; headers are read and discarded. The request head
//! is capped at [`MAX_HEAD_BYTES`] and must arrive within [`READ_TIMEOUT`].

use anyhow::{Context, Result};
use std::{sync::Arc, time::Duration};
use tokio::{
    io::{AsyncBufReadExt, AsyncRead, AsyncReadExt, AsyncWriteExt, BufReader},
    net::{TcpListener, TcpStream},
    time::timeout,
};
use tracing::{debug, info, warn};

use super::{route, ApiResponse};
use crate::dataset::Dataset;

const MAX_HEADER_LINES: usize = 100;
/// Request line plus headers.
pub const MAX_HEAD_BYTES: u64 = 16 * 1024;
pub const READ_TIMEOUT: Duration = Duration::from_secs(10);

/// Outcome of reading a request head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestHead {
    /// The request line, headers consumed.
    Line(String),
    /// No complete request line within the byte cap (or the peer hung up early).
    Incomplete,
    TimedOut,
}

impl ApiResponse {
    /// Full HTTP/1.1 response bytes.
    pub fn to_http(&self) -> String {
        let body = self.body.to_string();
        format!(
            "HTTP/1.1 {} {}\r\n\
             Content-Type: application/json\r\n\
             Content-Length: {}\r\n\
             Access-Control-Allow-Origin: *\r\n\
             Connection: close\r\n\
             \r\n\
             {}",
            self.status,
            self.reason(),
            body.len(),
            body
        )
    }
}

/// Split `GET /path?query HTTP/1.1` into method and target.
pub fn parse_request_line(line: &str) -> Option<(&str, &str)> {
    let mut parts = line.split_whitespace();
    let method = parts.next()?;
    let target = parts.next()?;
    let version = parts.next()?;
    if !version.starts_with("HTTP/") || parts.next().is_some() {
        return None;
    }
    Some((method, target))
}

async fn read_head_unbounded<R: AsyncRead + Unpin>(rdr: R) -> Result<RequestHead> {
    let mut reader = BufReader::new(rdr.take(MAX_HEAD_BYTES));

    let mut request_line = String::new();
    reader
        .read_line(&mut request_line)
        .await
        .context("reading request line")?;
    if !request_line.ends_with('\n') {
        return Ok(RequestHead::Incomplete);
    }

    for _ in 0..MAX_HEADER_LINES {
        let mut header = String::new();
        let n = reader.read_line(&mut header).await.context("reading headers")?;
        if n == 0 || header == "\r\n" || header == "\n" {
            break;
        }
    }
    Ok(RequestHead::Line(request_line))
}

/// Read the request line and discard headers, giving up after `limit`.
pub async fn read_request_head<R: AsyncRead + Unpin>(
    rdr: R,
    limit: Duration,
) -> Result<RequestHead> {
    match timeout(limit, read_head_unbounded(rdr)).await {
        Ok(head) => head,
        Err(_) => Ok(RequestHead::TimedOut),
    }
}

async fn handle_connection(mut stream: TcpStream, dataset: &Dataset) -> Result<()> {
    let (read_half, mut write_half) = stream.split();

    let response = match read_request_head(read_half, READ_TIMEOUT).await? {
        RequestHead::Line(line) => match parse_request_line(&line) {
            Some((method, target)) => {
                let response = route(dataset, method, target);
                debug!(method, target, status = response.status, "handled request");
                response
            }
            None => ApiResponse::error(400, "Malformed request line"),
        },
        RequestHead::Incomplete => ApiResponse::error(400, "Request head too large"),
        RequestHead::TimedOut => {
            debug!("request head timed out");
            ApiResponse::error(408, "Request timeout")
        }
    };

    write_half
        .write_all(response.to_http().as_bytes())
        .await
        .context("writing response")?;
    write_half.shutdown().await.context("closing connection")?;
    Ok(())
}

/// Accept connections forever on an already-bound listener.
pub async fn serve_listener(listener: TcpListener, dataset: Arc<Dataset>) -> Result<()> {
    loop {
        let (stream, peer) = listener.accept().await.context("accepting connection")?;
        let dataset = Arc::clone(&dataset);
        tokio::spawn(async move {
            if let Err(e) = handle_connection(stream, &dataset).await {
                warn!(%peer, error = %e, "connection failed");
            }
        });
    }
}

/// Bind `addr` and serve until the process exits.
pub async fn serve(addr: &str, dataset: Arc<Dataset>) -> Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {}", addr))?;
    info!(
        address = %listener.local_addr()?,
        batters = dataset.list_batters().len(),
        "serving batted-ball API"
    );
    serve_listener(listener, dataset).await
}
