//! snapserve - Snapshot File Server
//!
//! Serves an immutable in-memory snapshot of a directory tree over HTTP,
//! one request per connection, with a redirect table loaded at startup.

pub mod config;
pub mod http;
pub mod server;
pub mod store;
