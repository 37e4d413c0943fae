use chrono::Local;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;

use crate::http::request::{Method, Request};
use crate::http::response::Response;

const SERVER_NAME: &str = "MyServer";
const CRLF: &str = "\r\n";

fn date_header() -> String {
    // Server-local time, in the classic `Tue Aug 28 10:04:00 +02:00 2026`
    // shape rather than the RFC 7231 GMT format.
    Local::now().format("%a %b %e %H:%M:%S %Z %Y").to_string()
}

/// Serializes one response. Bodies are transmitted only for GET: a HEAD
/// request gets identical headers, including the true `Content-Length`,
/// with the body suppressed. `Redirect` and `Forbidden` never carry a
/// body or a `Content-Length`, whatever the method.
pub fn serialize_response(resp: &Response, req: &Request) -> Vec<u8> {
    let date = date_header();
    let version = &req.version;
    let mut buf: Vec<u8>;

    match resp {
        Response::Ok { body, content_type } => {
            let head = format!(
                "{version} 200 OK{CRLF}\
                 Content-Type: {content_type}{CRLF}\
                 Server: {SERVER_NAME}{CRLF}\
                 Date: {date}{CRLF}\
                 Connection: close{CRLF}\
                 Content-Length: {}{CRLF}",
                body.len()
            );
            buf = head.into_bytes();
            if req.method == Method::Get {
                buf.extend_from_slice(CRLF.as_bytes());
                buf.extend_from_slice(body);
            }
        }

        Response::Redirect {
            location,
            content_type,
        } => {
            let head = format!(
                "{version} 301 Moved Permanently{CRLF}\
                 Server: {SERVER_NAME}{CRLF}\
                 Date: {date}{CRLF}\
                 Location: {location}{CRLF}\
                 Content-Type: {content_type}{CRLF}\
                 Connection: close{CRLF}"
            );
            buf = head.into_bytes();
        }

        Response::Forbidden { content_type } => {
            let head = format!(
                "{version} 403 Forbidden{CRLF}\
                 Server: {SERVER_NAME}{CRLF}\
                 Date: {date}{CRLF}\
                 Content-Type: {content_type}{CRLF}\
                 Connection: close{CRLF}"
            );
            buf = head.into_bytes();
        }

        Response::NotFound { body } => {
            // The status line is always HTTP/1.1 here, not the echoed
            // request version.
            let head = format!(
                "HTTP/1.1 404 Not Found{CRLF}\
                 Server: {SERVER_NAME}{CRLF}\
                 Date: {date}{CRLF}\
                 Content-Type: text/html{CRLF}\
                 Connection: close{CRLF}\
                 Content-Length: {}{CRLF}",
                body.len()
            );
            buf = head.into_bytes();
            if req.method == Method::Get {
                buf.extend_from_slice(CRLF.as_bytes());
                buf.extend_from_slice(body.as_bytes());
                buf.extend_from_slice(CRLF.as_bytes());
            }
        }
    }

    buf
}

pub struct ResponseWriter {
    buffer: Vec<u8>,
    written: usize,
}

impl ResponseWriter {
    pub fn new(response: &Response, request: &Request) -> Self {
        Self {
            buffer: serialize_response(response, request),
            written: 0,
        }
    }

    pub async fn write_to_stream(&mut self, stream: &mut TcpStream) -> anyhow::Result<()> {
        while self.written < self.buffer.len() {
            let n = stream.write(&self.buffer[self.written..]).await?;

            if n == 0 {
                return Err(anyhow::anyhow!("connection closed while writing"));
            }

            self.written += n;
        }

        Ok(())
    }
}
