use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::extract::ExtractError;
use crate::models::ApiResponse;

pub const MISSING_LINK_MESSAGE: &str = "missing query parameter link";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not Found")]
    NotFound,

    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Fetch(#[from] reqwest::Error),

    #[error(transparent)]
    Extract(#[from] ExtractError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Fetch(_) | AppError::Extract(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Every error becomes a `{code, data: null, message}` envelope. Upstream
/// failures pass their own error text through to the caller.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            AppError::Fetch(e) => {
                tracing::error!(error = ?e, url = ?e.url().map(|u| u.as_str()), "Upstream fetch failed");
            }
            AppError::Extract(e) => {
                tracing::error!(error = ?e, "Metadata extraction failed");
            }
            AppError::NotFound | AppError::Validation(_) => {}
        }

        ApiResponse::<()>::error(status, self.to_string()).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
