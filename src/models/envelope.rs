use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Uniform JSON body for every response the proxy produces itself.
///
/// `message` is `"success"` whenever `data` carries a structured value (a
/// missing record included); error results put their text in `message` and
/// leave `data` null.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    pub code: u16,
    pub data: Option<T>,
    pub message: String,
}

impl<T> ApiResponse<T> {
    pub fn success(data: Option<T>) -> Self {
        ApiResponse {
            code: StatusCode::OK.as_u16(),
            data,
            message: "success".into(),
        }
    }

    pub fn error(status: StatusCode, message: impl Into<String>) -> Self {
        ApiResponse {
            code: status.as_u16(),
            data: None,
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status = self.status();
        let mut response = (status, Json(self)).into_response();

        let headers = response.headers_mut();
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        );
        headers.append(header::VARY, HeaderValue::from_static("Origin"));
        response
    }
}
