use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum NoteError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl NoteError {
    pub fn content_required() -> Self {
        NoteError::Validation("Content is required".to_string())
    }

    pub fn note_not_found() -> Self {
        NoteError::NotFound("Note not found".to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            NoteError::Validation(_) => StatusCode::BAD_REQUEST,
            NoteError::NotFound(_) => StatusCode::NOT_FOUND,
            NoteError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type NoteResult<T> = Result<T, NoteError>;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Error returned by the JSON API routes.
#[derive(Debug)]
pub struct ApiError(pub NoteError);

impl From<NoteError> for ApiError {
    fn from(err: NoteError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.0.status();
        let message = match self.0 {
            NoteError::Internal(e) => {
                error!("Internal error in API handler: {e:#}");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

/// Error returned by the HTML page routes.
#[derive(Debug)]
pub struct PageError(pub NoteError);

impl From<NoteError> for PageError {
    fn from(err: NoteError) -> Self {
        PageError(err)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status = self.0.status();
        let message = match self.0 {
            NoteError::Internal(e) => {
                error!("Error rendering note: {e:#}");
                "Error rendering note".to_string()
            }
            other => other.to_string(),
        };

        (status, message).into_response()
    }
}
