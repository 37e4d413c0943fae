use tracing::warn;

use crate::http::request::{Method, Request};

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    EmptyRequest,
    MalformedRequestLine,
}

/// Parses the head of one HTTP request: the ordered lines read up to the
/// first blank line. Fails if there are no lines at all or the first
/// line does not split into exactly three whitespace-separated tokens.
/// An unrecognized method token is not an error; it degrades to
/// [`Method::Other`] with a diagnostic.
pub fn parse_request(lines: &[String]) -> Result<Request, ParseError> {
    let request_line = lines.first().ok_or(ParseError::EmptyRequest)?;

    let tokens: Vec<&str> = request_line.split_whitespace().collect();
    let [method_token, target, version] = tokens[..] else {
        return Err(ParseError::MalformedRequestLine);
    };

    let method = Method::from_token(method_token);
    if method == Method::Other {
        warn!("Invalid HTTP request method: {method_token}");
    }

    Ok(Request {
        method,
        target: target.to_string(),
        version: version.to_string(),
    })
}
