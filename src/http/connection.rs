use std::sync::Arc;

use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;

use crate::http::parser::parse_request;
use crate::http::router::route;
use crate::http::writer::ResponseWriter;
use crate::store::ContentStore;

pub struct Connection {
    stream: TcpStream,
    store: Arc<ContentStore>,
}

impl Connection {
    pub fn new(stream: TcpStream, store: Arc<ContentStore>) -> Self {
        Self { stream, store }
    }

    /// Serves exactly one request, then lets the socket drop. A
    /// malformed request aborts before anything is written, so the
    /// client sees the connection close with zero response bytes.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        let lines = self.read_request_head().await?;

        let request =
            parse_request(&lines).map_err(|e| anyhow::anyhow!("HTTP parse error: {:?}", e))?;

        let response = route(&request, &self.store);

        let mut writer = ResponseWriter::new(&response, &request);
        writer.write_to_stream(&mut self.stream).await?;

        Ok(())
    }

    /// Reads until the blank line ending the request head, or EOF if the
    /// client closes first, and returns the head's lines. Header lines
    /// are carried along but never interpreted.
    async fn read_request_head(&mut self) -> anyhow::Result<Vec<String>> {
        let mut buffer: Vec<u8> = Vec::with_capacity(4096);

        let head_end = loop {
            if let Some(pos) = find_head_end(&buffer) {
                break pos;
            }

            let mut temp = [0u8; 1024];
            let n = self.stream.read(&mut temp).await?;

            if n == 0 {
                // Client closed before a blank line; parse what we have.
                break buffer.len();
            }

            buffer.extend_from_slice(&temp[..n]);
        };

        let head = std::str::from_utf8(&buffer[..head_end])
            .map_err(|_| anyhow::anyhow!("request head is not valid UTF-8"))?;

        Ok(head
            .split("\r\n")
            .take_while(|line| !line.is_empty())
            .map(|line| line.to_string())
            .collect())
    }
}

fn find_head_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}
