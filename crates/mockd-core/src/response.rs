//! Response sink abstraction and capture buffers.

use std::io;

/// Write side of one in-flight HTTP exchange.
///
/// The status line must be written before headers and body; writing
/// headers after the status line is undefined at the transport level,
/// so callers keep that order. `append_header` is additive: repeated
/// names produce repeated header entries rather than overwriting.
pub trait ResponseSink {
    fn write_status(&mut self, status: u16) -> io::Result<()>;
    fn append_header(&mut self, name: &str, value: &str) -> io::Result<()>;
    fn write_body(&mut self, bytes: &[u8]) -> io::Result<()>;
}

/// In-memory terminal sink.
///
/// The transport edge collects the full response here before flushing
/// it onto the wire; tests use it to observe handler output directly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BufferedResponse {
    status: u16,
    headers: Vec<(String, String)>,
    body: Vec<u8>,
}

impl BufferedResponse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Final status code; 0 when no handler ever wrote one.
    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn into_parts(self) -> (u16, Vec<(String, String)>, Vec<u8>) {
        (self.status, self.headers, self.body)
    }
}

impl ResponseSink for BufferedResponse {
    fn write_status(&mut self, status: u16) -> io::Result<()> {
        self.status = status;
        Ok(())
    }

    fn append_header(&mut self, name: &str, value: &str) -> io::Result<()> {
        self.headers.push((name.to_owned(), value.to_owned()));
        Ok(())
    }

    fn write_body(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.body.extend_from_slice(bytes);
        Ok(())
    }
}

/// Tee sink substituted for the real sink by the logging decorator.
///
/// Forwards every write to the real sink first, then records: the
/// status assignment (last write wins, matching HTTP's single status
/// line) and a copy of every body byte. Purely observational - the
/// client receives exactly what the wrapped handler wrote.
pub struct RecordingSink<'a> {
    inner: &'a mut dyn ResponseSink,
    status: u16,
    captured: Vec<u8>,
}

impl<'a> RecordingSink<'a> {
    pub fn new(inner: &'a mut dyn ResponseSink) -> Self {
        Self {
            inner,
            status: 0,
            captured: Vec::new(),
        }
    }

    /// Last status code the wrapped handler set; 0 if none.
    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn captured_body(&self) -> &[u8] {
        &self.captured
    }
}

impl ResponseSink for RecordingSink<'_> {
    fn write_status(&mut self, status: u16) -> io::Result<()> {
        self.inner.write_status(status)?;
        self.status = status;
        Ok(())
    }

    fn append_header(&mut self, name: &str, value: &str) -> io::Result<()> {
        self.inner.append_header(name, value)
    }

    fn write_body(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.inner.write_body(bytes)?;
        self.captured.extend_from_slice(bytes);
        Ok(())
    }
}
