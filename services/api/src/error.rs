use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// API service domain error variants.
///
/// 401 is produced by the bearer `Identity` extractor before handler logic
/// runs, so it has no variant here.
#[derive(Debug, thiserror::Error)]
pub enum ApiServiceError {
    #[error("{0}")]
    Validation(String),
    #[error("email claim missing from identity payload")]
    MissingEmailClaim,
    #[error("identity verification failed")]
    IdentityVerification(#[source] anyhow::Error),
    #[error("forbidden")]
    Forbidden,
    #[error("user not found")]
    UserNotFound,
    #[error("restaurant not found")]
    RestaurantNotFound,
    #[error("category not found")]
    CategoryNotFound,
    #[error("dish not found")]
    DishNotFound,
    #[error("restaurant already exists")]
    RestaurantAlreadyExists,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl ApiServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION",
            Self::MissingEmailClaim => "MISSING_EMAIL_CLAIM",
            Self::IdentityVerification(_) => "IDENTITY_VERIFICATION",
            Self::Forbidden => "FORBIDDEN",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::RestaurantNotFound => "RESTAURANT_NOT_FOUND",
            Self::CategoryNotFound => "CATEGORY_NOT_FOUND",
            Self::DishNotFound => "DISH_NOT_FOUND",
            Self::RestaurantAlreadyExists => "RESTAURANT_ALREADY_EXISTS",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for ApiServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Validation(_) | Self::MissingEmailClaim | Self::IdentityVerification(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::UserNotFound
            | Self::RestaurantNotFound
            | Self::CategoryNotFound
            | Self::DishNotFound => StatusCode::NOT_FOUND,
            Self::RestaurantAlreadyExists => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // Log 500s only — tower-http TraceLayer already records method/uri/status for all
        // requests. 4xx are expected client errors; logging them here would be noise.
        // Internal errors need the anyhow chain logged so the root cause is traceable.
        // Verifier failures keep their source out of the response body, so log it too.
        match &self {
            Self::Internal(e) => {
                tracing::error!(error = %e, kind = "INTERNAL", "internal error");
            }
            Self::IdentityVerification(e) => {
                tracing::warn!(error = %e, kind = "IDENTITY_VERIFICATION", "identity verification failed");
            }
            _ => {}
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
