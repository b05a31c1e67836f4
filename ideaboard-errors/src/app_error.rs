use serde::{Deserialize, Serialize};

/// Application-level error taxonomy.
///
/// Every variant's `Display` output is safe to show to callers; underlying
/// causes (database failures and the like) are logged where they occur and
/// only a generic message travels in a `Store` variant.
#[derive(Debug, Clone, Serialize, Deserialize, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("Idea not found")]
    NotFound,

    #[error("{0}")]
    Store(String),
}

#[cfg(feature = "ssr")]
mod ssr_impl {
    use super::AppError;
    use axum::http::StatusCode;
    use axum::response::{IntoResponse, Response};
    use axum::Json;

    #[derive(serde::Serialize)]
    struct ErrorBody {
        error: String,
    }

    impl IntoResponse for AppError {
        fn into_response(self) -> Response {
            let status = match &self {
                AppError::Validation(_) => StatusCode::BAD_REQUEST,
                AppError::NotFound => StatusCode::NOT_FOUND,
                AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            };
            (status, Json(ErrorBody { error: self.to_string() })).into_response()
        }
    }
}
