//! HTTP protocol implementation.
//!
//! One request is served per connection (`Connection: close` semantics
//! throughout, no keep-alive). Each accepted socket runs the same
//! pipeline to completion:
//!
//! ```text
//! read request head → parse request line → route → write response
//! ```
//!
//! - **`connection`**: reads the request head off the socket and drives
//!   the pipeline
//! - **`parser`**: turns the head's line sequence into a [`request::Request`]
//! - **`request`**: request representation and the method enum
//! - **`router`**: the per-request decision tree over the content store
//! - **`response`**: the four response variants the router can produce
//! - **`writer`**: serializes a response and writes it to the client
//! - **`mime`**: content-type classification by path suffix

pub mod connection;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod router;
pub mod writer;
