//! JSON error responses for the HTTP API

use crate::project::StoreError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Failures a handler can return
///
/// Rendered as `{ "error": "<message>" }` where the message is the
/// underlying error's display text.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // The raw message reaches the client unchanged; see DESIGN.md.
        let body = Json(json!({ "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}
