//! Route compilation: definitions become handlers.

use crate::logging::with_logging;
use crate::response::ResponseSink;
use crate::routing::router::{Handler, Router};
use crate::types::route::{HttpMethod, ResponseSpec, RouteDefinition};
use std::io;
use tracing::warn;

/// Materialize a canned response onto the live sink.
///
/// Ordering matters: the status line is emitted first, then every
/// configured header exactly once, then the body bytes verbatim.
/// Headers go through `append_header`, so duplicate names across
/// writes stay multi-valued.
pub fn write_canned(response: &ResponseSpec, sink: &mut dyn ResponseSink) -> io::Result<()> {
    sink.write_status(response.status_code)?;
    for (name, value) in &response.header {
        sink.append_header(name, value)?;
    }
    sink.write_body(response.body.as_bytes())
}

/// Compile one definition into a handler closure.
///
/// The closure owns its definition by value; nothing is shared
/// between handlers, so concurrent requests to the same route never
/// race on mutable state.
pub fn compile(definition: RouteDefinition) -> Handler {
    Box::new(move |_request, sink| write_canned(&definition.response, sink))
}

/// Build the router table from loaded definitions.
///
/// Every compiled handler is wrapped in the logging decorator before
/// registration. Definitions with an unsupported method are skipped
/// with a diagnostic and do not abort startup. Duplicate
/// (method, path) pairs silently override earlier ones; the last
/// definition wins.
pub fn build_router(definitions: Vec<RouteDefinition>) -> Router {
    let mut router = Router::new();

    for definition in definitions {
        let Some(method) = HttpMethod::parse(&definition.method) else {
            warn!(
                method = %definition.method,
                path = %definition.path,
                "unsupported method, skipping route"
            );
            continue;
        };

        let path = definition.path.clone();
        router.register(method, path, with_logging(compile(definition)));
    }

    router
}
