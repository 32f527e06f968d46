pub mod metadata;
pub mod preflight;

use axum::{
    extract::State,
    http::{HeaderMap, Method, Uri},
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::state::AppState;

pub const API_PREFIX: &str = "/api";

/// Single entry point for every request.
///
/// OPTIONS is answered on any path. Everything else must target a path
/// starting with `/api`; the method itself is not checked.
pub async fn dispatch(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    if method.as_str().eq_ignore_ascii_case("options") {
        return preflight::preflight(&headers);
    }

    if !uri.path().starts_with(API_PREFIX) {
        return AppError::NotFound.into_response();
    }

    match metadata::get_metadata(&state, &uri).await {
        Ok(response) => response,
        Err(e) => e.into_response(),
    }
}
