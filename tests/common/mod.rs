// Each integration test file is a separate binary; helpers not used in every
// binary would otherwise trigger dead_code warnings from clippy.
#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, HeaderMap, Method, Request, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use bytes::Bytes;
use futures::StreamExt;
use http_body_util::BodyExt;
use serde_json::Value;
use std::io;
use std::time::Duration;
use tower::ServiceExt;

use meta_proxy::state::AppState;

pub const PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\n\x00\x00\x00\rIHDR";

pub const ARTICLE_HTML: &str = r#"<!doctype html>
<html>
  <head>
    <meta charset="utf-8">
    <title>Element title is not read</title>
    <meta name="title" content="T">
    <meta name="description" content="A &quot;quoted&quot; summary">
    <meta property="og:title" content="A">
    <meta property="og:type" content="article">
    <meta property="og:site_name" content="Example">
    <meta property="og:title" content="B">
  </head>
  <body><p>Body text</p></body>
</html>"#;

pub const PLAIN_HTML: &str =
    "<html><head><title>No meta here</title></head><body>hello</body></html>";

/// Build the full application router with a fresh upstream client.
pub fn create_test_app() -> Router {
    meta_proxy::app(AppState {
        http_client: reqwest::Client::new(),
    })
}

/// Start a local upstream on an ephemeral port and return its base URL.
pub async fn spawn_upstream() -> String {
    let upstream = Router::new()
        .route("/article", get(|| async { html(ARTICLE_HTML) }))
        .route("/plain", get(|| async { html(PLAIN_HTML) }))
        .route(
            "/charset",
            get(|| async {
                (
                    [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
                    r#"<meta property="og:url" content="https://example.com/c">"#,
                )
            }),
        )
        .route(
            "/logo.png",
            get(|| async {
                (
                    [(header::CONTENT_TYPE, "image/png"), (header::ETAG, "\"logo-v1\"")],
                    PNG_BYTES,
                )
            }),
        )
        .route(
            "/missing.json",
            get(|| async {
                (
                    StatusCode::NOT_FOUND,
                    [(header::CONTENT_TYPE, "application/json")],
                    r#"{"error":"gone"}"#,
                )
            }),
        )
        .route(
            "/broken",
            get(|| async {
                let head = futures::stream::iter([Ok::<_, io::Error>(Bytes::from_static(
                    br#"<html><head><meta name="title" content="partial">"#,
                ))]);
                // Pause so the headers and first chunk are flushed before the failure.
                let failure = futures::stream::once(async {
                    tokio::time::sleep(Duration::from_millis(50)).await;
                    Err(io::Error::new(io::ErrorKind::ConnectionReset, "upstream went away"))
                });
                (
                    [(header::CONTENT_TYPE, "text/html")],
                    Body::from_stream(head.chain(failure)),
                )
            }),
        )
        .route(
            "/untyped",
            get(|| async { Response::new(Body::from("raw bytes")) }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind upstream");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, upstream).await.unwrap();
    });
    format!("http://{addr}")
}

/// A URL on localhost that nothing is listening on.
pub async fn closed_port_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/")
}

fn html(body: &'static str) -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/html")], body)
}

/// Percent-encode a link for use as the `link` query parameter.
pub fn api_uri(link: &str) -> String {
    let query: String = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("link", link)
        .finish();
    format!("/api?{query}")
}

// ── Request helpers ──────────────────────────────────────────────────────────

pub async fn get_raw(app: Router, uri: &str) -> Response {
    let req = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(req).await.unwrap()
}

pub async fn get_json(app: Router, uri: &str) -> (StatusCode, HeaderMap, Value) {
    let response = get_raw(app, uri).await;
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, headers, json)
}

pub async fn send_with_headers(
    app: Router,
    method: &str,
    uri: &str,
    headers: &[(&str, &str)],
) -> Response {
    let mut req = Request::builder().method(method).uri(uri);
    for (name, value) in headers {
        req = req.header(*name, *value);
    }
    app.oneshot(req.body(Body::empty()).unwrap()).await.unwrap()
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}
