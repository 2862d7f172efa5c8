//! Bearer-token identity extractor.

use axum::extract::FromRequestParts;
use http::StatusCode;
use http::request::Parts;
use uuid::Uuid;

use crate::token::validate_session_token;

/// Source of the HMAC secret used to validate bearer tokens.
///
/// Implemented by the service `AppState` so the extractor can run against
/// whatever state type the router carries.
pub trait TokenSecret {
    fn token_secret(&self) -> &str;
}

/// Caller identity extracted from the `Authorization: Bearer <jwt>` header.
///
/// Returns 401 if the header is absent, not a bearer scheme, or the token
/// fails validation. Role enforcement (403) is done by handlers after
/// extraction.
#[derive(Debug, Clone)]
pub struct Identity {
    pub user_id: Uuid,
    pub user_role: u8,
    pub email: String,
}

fn bearer_value(parts: &Parts) -> Option<String> {
    let header = parts.headers.get(http::header::AUTHORIZATION)?;
    let value = header.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?;
    (!token.is_empty()).then(|| token.to_owned())
}

impl<S> FromRequestParts<S> for Identity
where
    S: TokenSecret + Send + Sync,
{
    type Rejection = StatusCode;

    // axum-core 0.5 defines this as `fn -> impl Future + Send` (not `async fn`).
    // In Rust 1.82+ precise capturing, `async fn` captures lifetimes differently,
    // causing E0195. Fix: extract values synchronously, return a 'static async move block.
    fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let token = bearer_value(parts);
        let secret = state.token_secret().to_owned();

        async move {
            let token = token.ok_or(StatusCode::UNAUTHORIZED)?;
            let info = validate_session_token(&token, &secret)
                .map_err(|_| StatusCode::UNAUTHORIZED)?;
            Ok(Self {
                user_id: info.user_id,
                user_role: info.user_role,
                email: info.email,
            })
        }
    }
}
