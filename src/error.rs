use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::render::error_page;

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("External API error: {0}")]
    ExternalApi(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::HttpClient(_) | AppError::ExternalApi(_) => StatusCode::BAD_GATEWAY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Pages have no partial-render fallback: any failure, including an unknown
/// id upstream, becomes the same generic error page.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::error!(error = %self, status = %status, "Page render failed");

        (status, Html(error_page(status))).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
