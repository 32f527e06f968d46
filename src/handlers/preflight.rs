use axum::{
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};

pub const ALLOW_METHODS: &str = "GET,HEAD,POST,OPTIONS";
pub const ALLOW: &str = "GET, HEAD, POST, OPTIONS";
pub const MAX_AGE_SECS: &str = "86400";

/// Answer an OPTIONS request.
///
/// A CORS preflight (Origin plus both Access-Control-Request-* headers) gets
/// the allow headers, echoing the requested headers back verbatim. Anything
/// else gets a plain `Allow` list.
pub fn preflight(headers: &HeaderMap) -> Response {
    let requested_headers = headers.get(header::ACCESS_CONTROL_REQUEST_HEADERS);

    match requested_headers {
        Some(requested)
            if headers.contains_key(header::ORIGIN)
                && headers.contains_key(header::ACCESS_CONTROL_REQUEST_METHOD) =>
        {
            (
                StatusCode::NO_CONTENT,
                [
                    (
                        header::ACCESS_CONTROL_ALLOW_ORIGIN,
                        HeaderValue::from_static("*"),
                    ),
                    (
                        header::ACCESS_CONTROL_ALLOW_METHODS,
                        HeaderValue::from_static(ALLOW_METHODS),
                    ),
                    (
                        header::ACCESS_CONTROL_MAX_AGE,
                        HeaderValue::from_static(MAX_AGE_SECS),
                    ),
                    (header::ACCESS_CONTROL_ALLOW_HEADERS, requested.clone()),
                ],
            )
                .into_response()
        }
        _ => (
            StatusCode::OK,
            [(header::ALLOW, HeaderValue::from_static(ALLOW))],
        )
            .into_response(),
    }
}
