//! Inbound request model with a replayable body.

use std::collections::HashMap;
use std::io::{self, Cursor, Read};

/// An inbound HTTP request as seen by the core.
///
/// The body is a readable stream, and reading it is destructive. The
/// logging decorator drains it once for the request log line and then
/// puts a fresh in-memory reader back via [`Request::replace_body`],
/// so downstream handlers still observe the original bytes.
pub struct Request {
    pub method: String,
    pub path: String,
    pub headers: HashMap<String, String>,
    body: Box<dyn Read + Send>,
}

impl Request {
    pub fn new(
        method: impl Into<String>,
        path: impl Into<String>,
        headers: HashMap<String, String>,
        body: impl Read + Send + 'static,
    ) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            headers,
            body: Box::new(body),
        }
    }

    /// Drain the remaining body into a buffer.
    pub fn read_body(&mut self) -> io::Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.body.read_to_end(&mut buf)?;
        Ok(buf)
    }

    /// Replace the body with an in-memory reader over `bytes`.
    pub fn replace_body(&mut self, bytes: Vec<u8>) {
        self.body = Box::new(Cursor::new(bytes));
    }
}
