/// HTTP request methods.
///
/// A closed set: GET and HEAD are served, POST is recognized but
/// rejected later with 403, and anything else degrades to `Other`
/// (which also routes to 403) rather than failing the parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Head,
    Post,
    Other,
}

impl Method {
    /// Maps a request-line method token to its variant. Unknown tokens
    /// fall back to `Other`; this never fails.
    pub fn from_token(s: &str) -> Self {
        match s {
            "GET" => Method::Get,
            "HEAD" => Method::Head,
            "POST" => Method::Post,
            _ => Method::Other,
        }
    }
}

/// A parsed HTTP request line.
///
/// Only the request line is interpreted; header fields are read off the
/// socket to find the blank-line terminator but never parsed. The target
/// is kept verbatim (no normalization, no URL-decoding) and used as-is
/// as the lookup key, and the version string is echoed back verbatim in
/// responses.
#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    pub target: String,
    pub version: String,
}
