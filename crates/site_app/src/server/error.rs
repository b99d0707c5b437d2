use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use site_logging::site_error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to render page: {0}")]
    Render(#[from] askama::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        site_error!("{}", self);
        (StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong").into_response()
    }
}
