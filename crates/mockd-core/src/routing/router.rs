//! Exact-match request router.

use crate::request::Request;
use crate::response::ResponseSink;
use crate::types::route::HttpMethod;
use std::collections::HashMap;
use std::io;

/// Composite lookup key: one registered (method, path) pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RouteKey {
    pub method: HttpMethod,
    pub path: String,
}

/// Handler invoked for one matched request.
pub type Handler =
    Box<dyn Fn(&mut Request, &mut dyn ResponseSink) -> io::Result<()> + Send + Sync>;

/// Mapping from (method, path) to handler.
///
/// Built once at startup and read-only afterwards, so it is safe to
/// share behind `Arc` across concurrent requests without locking.
/// Lookup is exact-string match on method and path - no wildcards,
/// no path parameters, no trailing-slash normalization.
#[derive(Default)]
pub struct Router {
    handlers: HashMap<RouteKey, Handler>,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` under `(method, path)`.
    ///
    /// Registering the same key twice silently replaces the earlier
    /// handler; the last registration wins.
    pub fn register(&mut self, method: HttpMethod, path: impl Into<String>, handler: Handler) {
        self.handlers.insert(
            RouteKey {
                method,
                path: path.into(),
            },
            handler,
        );
    }

    /// Look up the handler for an inbound (method, path) pair.
    ///
    /// Methods other than GET/POST can never match, since nothing
    /// else is registrable.
    pub fn dispatch(&self, method: &str, path: &str) -> Option<&Handler> {
        let method = HttpMethod::parse(method)?;
        self.handlers.get(&RouteKey {
            method,
            path: path.to_owned(),
        })
    }

    /// Dispatch `request` and run the matching handler, or answer 404
    /// with an empty body when nothing matches.
    pub fn handle(&self, request: &mut Request, sink: &mut dyn ResponseSink) -> io::Result<()> {
        match self.dispatch(&request.method, &request.path) {
            Some(handler) => handler(request, sink),
            None => sink.write_status(404),
        }
    }

    /// All registered routes as `"METHOD:path"` strings, for the
    /// startup banner. Order is unspecified.
    pub fn registered_routes(&self) -> Vec<String> {
        self.handlers
            .keys()
            .map(|key| format!("{}:{}", key.method, key.path))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}
