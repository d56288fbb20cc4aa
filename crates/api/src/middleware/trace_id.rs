//! Request correlation middleware.
//!
//! Every request carries an `X-Request-ID`, generated when the client sends
//! none. The id is attached to the request span and echoed in the response,
//! which ties a prayer submission to the notification attempt it triggers
//! later in the same request.

use axum::{
    body::Body,
    http::{header::HeaderName, HeaderMap, HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use tracing::Instrument;
use uuid::Uuid;

/// Header carrying the correlation id.
pub const REQUEST_ID_HEADER: &str = "X-Request-ID";

/// Client-supplied id, or a fresh UUID when the header is missing, blank or
/// unreadable.
fn correlation_id(headers: &HeaderMap) -> String {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
        .unwrap_or_else(|| Uuid::new_v4().to_string())
}

/// Wraps each request in a correlation span and echoes the id back.
///
/// The handler future is instrumented rather than run under an entered
/// guard, so concurrent requests never log into each other's span.
pub async fn trace_id(req: Request<Body>, next: Next) -> Response {
    let request_id = correlation_id(req.headers());

    let span = tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %req.method(),
        path = %req.uri().path(),
    );

    let start = std::time::Instant::now();
    let mut response = next.run(req).instrument(span).await;

    tracing::info!(
        request_id = %request_id,
        status = response.status().as_u16(),
        duration_ms = start.elapsed().as_millis() as u64,
        "Request completed"
    );

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response
            .headers_mut()
            .insert(HeaderName::from_static("x-request-id"), value);
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correlation_id_from_header() {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("abc-123"));
        assert_eq!(correlation_id(&headers), "abc-123");
    }

    #[test]
    fn test_correlation_id_generated_when_missing() {
        let id = correlation_id(&HeaderMap::new());
        assert!(Uuid::parse_str(&id).is_ok());
    }

    #[test]
    fn test_correlation_id_generated_when_blank() {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static(""));
        assert!(Uuid::parse_str(&correlation_id(&headers)).is_ok());
    }

    #[test]
    fn test_correlation_id_generated_when_not_utf8() {
        let mut headers = HeaderMap::new();
        headers.insert(
            REQUEST_ID_HEADER,
            HeaderValue::from_bytes(&[0xff, 0xfe]).unwrap(),
        );
        assert!(Uuid::parse_str(&correlation_id(&headers)).is_ok());
    }
}
