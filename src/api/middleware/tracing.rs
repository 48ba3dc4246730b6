//! Request access logging middleware.

use axum::{
    body::Body,
    http::{Request, Response},
};
use std::time::Duration;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultOnRequest, TraceLayer};
use tracing::{Span, info, info_span};

type MakeSpanFn = fn(&Request<Body>) -> Span;
type OnResponseFn = fn(&Response<Body>, Duration, &Span);

/// The trace layer both services install on their router.
pub type AccessLogLayer =
    TraceLayer<SharedClassifier<ServerErrorsAsFailures>, MakeSpanFn, DefaultOnRequest, OnResponseFn>;

/// Creates the access log middleware.
///
/// Every request, whatever its method or outcome, produces one `INFO` line
/// carrying the request path, the response status and the latency.
///
/// # Example Logs
///
/// ```text
/// INFO request{method=POST path=/shorten}: access status=200 latency_ms=3
/// INFO request{method=GET path=/s/unknown}: access status=404 latency_ms=1
/// ```
pub fn layer() -> AccessLogLayer {
    TraceLayer::new_for_http()
        .make_span_with(make_span as MakeSpanFn)
        .on_response(on_response as OnResponseFn)
}

fn make_span(request: &Request<Body>) -> Span {
    info_span!(
        "request",
        method = %request.method(),
        path = %request.uri().path()
    )
}

fn on_response(response: &Response<Body>, latency: Duration, _span: &Span) {
    info!(
        status = response.status().as_u16(),
        latency_ms = latency.as_millis() as u64,
        "access"
    );
}
