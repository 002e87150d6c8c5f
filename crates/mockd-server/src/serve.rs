//! HTTP/1.1 transport edge.
//!
//! Accept loop plus the bridge between hyper's request/response
//! types and the core's synchronous request/sink model. The core
//! never sees hyper types: the inbound body is collected into a
//! replayable in-memory reader, and the outbound response is staged
//! in a [`BufferedResponse`] before being flushed onto the wire.

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Response, StatusCode};
use hyper_util::rt::TokioIo;
use mockd_core::request::Request;
use mockd_core::response::BufferedResponse;
use mockd_core::routing::Router;
use std::collections::HashMap;
use std::convert::Infallible;
use std::io::Cursor;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info, warn};

/// Bind `addr` and serve the router until the process exits.
///
/// One tokio task per connection; the router is shared read-only
/// behind `Arc`, so no locking is needed across requests.
pub async fn serve(addr: SocketAddr, router: Arc<Router>) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "listening");

    loop {
        let (stream, _peer) = listener.accept().await?;
        let router = Arc::clone(&router);

        tokio::spawn(async move {
            let io = TokioIo::new(stream);
            let service = service_fn(move |req| handle(Arc::clone(&router), req));

            if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
                warn!(error = %err, "connection error");
            }
        });
    }
}

/// Collect the inbound request, run it through the router, and flush
/// the buffered response.
async fn handle(
    router: Arc<Router>,
    req: hyper::Request<Incoming>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let (parts, body) = req.into_parts();

    let body = match body.collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(err) => {
            warn!(error = %err, "failed to read request body");
            return Ok(empty_response(StatusCode::BAD_REQUEST));
        }
    };

    let headers: HashMap<String, String> = parts
        .headers
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_owned(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect();

    let mut request = Request::new(
        parts.method.as_str(),
        parts.uri.path(),
        headers,
        Cursor::new(body.to_vec()),
    );
    let mut sink = BufferedResponse::new();

    if let Err(err) = router.handle(&mut request, &mut sink) {
        error!(error = %err, "handler failed");
        return Ok(empty_response(StatusCode::INTERNAL_SERVER_ERROR));
    }

    Ok(into_response(sink))
}

/// Convert the core's buffered response into a hyper response.
///
/// A captured status of 0 means no handler ever wrote one; the
/// transport default of 200 applies. A configured status outside the
/// valid HTTP range, or a header name/value hyper rejects, degrades
/// to an empty 500.
fn into_response(sink: BufferedResponse) -> Response<Full<Bytes>> {
    let (status, headers, body) = sink.into_parts();

    let status = if status == 0 {
        StatusCode::OK
    } else {
        match StatusCode::from_u16(status) {
            Ok(status) => status,
            Err(err) => {
                error!(error = %err, status, "invalid configured status code");
                return empty_response(StatusCode::INTERNAL_SERVER_ERROR);
            }
        }
    };

    let mut builder = Response::builder().status(status);
    for (name, value) in headers {
        builder = builder.header(name, value);
    }

    match builder.body(Full::new(Bytes::from(body))) {
        Ok(response) => response,
        Err(err) => {
            error!(error = %err, "invalid configured response");
            empty_response(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

fn empty_response(status: StatusCode) -> Response<Full<Bytes>> {
    Response::builder()
        .status(status)
        .body(Full::new(Bytes::new()))
        .expect("empty response is always valid")
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockd_core::response::ResponseSink;
    use rstest::rstest;

    #[rstest]
    fn test_into_response_maps_status_headers_body() {
        let mut sink = BufferedResponse::new();
        sink.write_status(201).unwrap();
        sink.append_header("Content-Type", "application/json").unwrap();
        sink.write_body(b"{\"id\":1}").unwrap();

        let response = into_response(sink);

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            response.headers().get("Content-Type").unwrap(),
            "application/json"
        );
    }

    #[rstest]
    fn test_into_response_keeps_duplicate_headers() {
        let mut sink = BufferedResponse::new();
        sink.write_status(200).unwrap();
        sink.append_header("Set-Cookie", "a=1").unwrap();
        sink.append_header("Set-Cookie", "b=2").unwrap();

        let response = into_response(sink);

        let cookies: Vec<_> = response.headers().get_all("Set-Cookie").iter().collect();
        assert_eq!(cookies.len(), 2);
    }

    #[rstest]
    fn test_into_response_unset_status_defaults_to_200() {
        let response = into_response(BufferedResponse::new());
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[rstest]
    #[case(42)]
    #[case(1000)]
    fn test_into_response_out_of_range_status_degrades_to_500(#[case] status: u16) {
        let mut sink = BufferedResponse::new();
        sink.write_status(status).unwrap();
        sink.write_body(b"never sent").unwrap();

        let response = into_response(sink);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[rstest]
    fn test_into_response_invalid_header_degrades_to_500() {
        let mut sink = BufferedResponse::new();
        sink.write_status(200).unwrap();
        sink.append_header("bad header name", "x").unwrap();

        let response = into_response(sink);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
