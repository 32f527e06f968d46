use axum::{
    body::Body,
    http::{header, HeaderMap, Uri},
    response::{IntoResponse, Response},
};

use crate::error::{AppError, AppResult, MISSING_LINK_MESSAGE};
use crate::extract::extract_from_stream;
use crate::models::ApiResponse;
use crate::state::AppState;

/// Connection-scoped headers the server framing layer re-derives.
const HOP_BY_HOP: [&str; 7] = [
    "connection",
    "keep-alive",
    "proxy-connection",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
];

// ── Query params ───────────────────────────────────────────────────────────

/// First `link` parameter of the query string. Empty counts as missing.
pub fn link_param(uri: &Uri) -> Option<String> {
    let query = uri.query()?;
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "link")
        .map(|(_, value)| value.into_owned())
        .filter(|link| !link.is_empty())
}

fn is_html(response: &reqwest::Response) -> bool {
    response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("text/html"))
}

/// Drop the fixed hop-by-hop headers plus any header the `Connection`
/// header itself names.
pub fn strip_hop_by_hop(headers: &mut HeaderMap) {
    let listed: Vec<String> = headers
        .get_all(header::CONNECTION)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(','))
        .map(|token| token.trim().to_ascii_lowercase())
        .filter(|token| !token.is_empty())
        .collect();

    for name in &listed {
        headers.remove(name.as_str());
    }
    for name in HOP_BY_HOP {
        headers.remove(name);
    }
}

/// Hand the upstream response back untouched, streaming its body.
fn pass_through(upstream: reqwest::Response) -> Response {
    let status = upstream.status();
    let mut headers = upstream.headers().clone();
    strip_hop_by_hop(&mut headers);

    let mut response = Response::new(Body::from_stream(upstream.bytes_stream()));
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    response
}

// ── Handler ────────────────────────────────────────────────────────────────

/// GET /api?link=<encoded-url>
///
/// Fetches `link` and returns the `<meta>` data of an HTML page in the JSON
/// envelope. Any other content type is returned as fetched.
pub async fn get_metadata(state: &AppState, uri: &Uri) -> AppResult<Response> {
    let link = link_param(uri).ok_or_else(|| AppError::Validation(MISSING_LINK_MESSAGE.into()))?;

    tracing::debug!(link = %link, "Fetching page metadata");
    let upstream = state.http_client.get(&link).send().await?;

    if !is_html(&upstream) {
        tracing::debug!(link = %link, status = %upstream.status(), "Passing non-HTML response through");
        return Ok(pass_through(upstream));
    }

    let metadata = extract_from_stream(upstream.bytes_stream()).await?;
    Ok(ApiResponse::success(metadata).into_response())
}

// ── Unit tests ─────────────────────────────────────────────────────────────
