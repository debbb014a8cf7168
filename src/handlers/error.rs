use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::{ErrorResponse, ImageError};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid coordinates provided.")]
    InvalidCoordinates,

    #[error("Invalid image: {0}")]
    InvalidImage(#[from] ImageError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::InvalidCoordinates | ApiError::InvalidImage(_) => StatusCode::BAD_REQUEST,
        };
        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}
