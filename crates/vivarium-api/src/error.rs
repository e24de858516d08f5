//! Error types for the care API layer.
//!
//! [`ApiError`] unifies all failure modes into a single enum that converts
//! into an Axum HTTP response. The JSON body always carries the stable
//! error code first and a human-readable message second -- the client keys
//! its localized strings on the code and never parses the message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use vivarium_engine::EngineError;

/// Errors that can occur in the care API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// An engine operation failed; carries its own stable code.
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// The `x-owner-id` header is missing or not a UUID.
    #[error("missing or malformed x-owner-id header")]
    InvalidOwner,

    /// The request body failed validation.
    #[error("invalid request: {0}")]
    Validation(String),
}

impl ApiError {
    /// The stable code the client keys its translations on.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Engine(engine) => engine.code(),
            Self::InvalidOwner => "invalid_owner",
            Self::Validation(_) => "invalid_request",
        }
    }

    /// The HTTP status this error maps to.
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Engine(engine) => match engine {
                EngineError::NotFound(_) => StatusCode::NOT_FOUND,
                EngineError::StorageUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
                EngineError::Care(_) | EngineError::PetLimitReached { .. } => {
                    StatusCode::BAD_REQUEST
                }
            },
            Self::InvalidOwner => StatusCode::UNAUTHORIZED,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = serde_json::json!({
            "error": self.code(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use vivarium_types::PetId;

    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let err = ApiError::Engine(EngineError::NotFound(PetId::new()));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.code(), "not_found");
    }

    #[test]
    fn storage_unavailable_maps_to_503() {
        let err = ApiError::Engine(EngineError::StorageUnavailable {
            reason: String::from("down"),
        });
        assert_eq!(err.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn care_refusals_map_to_400() {
        let err = ApiError::Engine(EngineError::Care(
            vivarium_pets::PetError::NotSleeping,
        ));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.code(), "not_sleeping");
    }
}
