use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use osh_core::common::CoreError;

#[derive(Error, Debug)]
pub enum WebError {
    #[error("template rendering failed: {0}")]
    Render(#[from] askama::Error),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("unknown data field: {0}")]
    UnknownField(String),
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        match self {
            WebError::Core(CoreError::UnknownFacility(id)) => (
                StatusCode::NOT_FOUND,
                format!("Production location not found: {id}"),
            )
                .into_response(),
            WebError::UnknownField(field) => (
                StatusCode::NOT_FOUND,
                format!("Unknown data field: {field}"),
            )
                .into_response(),
            WebError::Render(err) => {
                tracing::error!("template rendering failed: {err}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, WebError>;
