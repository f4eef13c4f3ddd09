//! Service Error Taxonomy
//!
//! Every query operation fails with one of these variants; all of them are
//! terminal for the request that triggered them. Rendered as an
//! `{"error": <message>}` body with the matching HTTP status.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The requested corpus document is missing from the store or failed to
    /// parse. Both causes collapse to the same outward signal.
    #[error("Corpus not found")]
    CorpusNotFound,

    #[error("Book not found")]
    BookNotFound,

    #[error("Chapter not found")]
    ChapterNotFound,

    /// A required search parameter is missing or blank.
    #[error("{0}")]
    InvalidQuery(&'static str),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::CorpusNotFound | ApiError::BookNotFound | ApiError::ChapterNotFound => {
                StatusCode::NOT_FOUND
            }
            ApiError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}
