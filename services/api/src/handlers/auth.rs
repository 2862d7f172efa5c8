use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use carta_domain::user::UserRole;

use crate::error::ApiServiceError;
use crate::handlers::responses::{RestaurantResponse, UserResponse};
use crate::state::AppState;
use crate::usecase::identity::{AuthenticatedSession, DevLoginUseCase, GoogleLoginUseCase};

#[derive(Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserResponse,
    pub restaurant: Option<RestaurantResponse>,
}

impl From<AuthenticatedSession> for AuthResponse {
    fn from(session: AuthenticatedSession) -> Self {
        Self {
            token: session.token,
            user: session.user.into(),
            restaurant: session.restaurant.map(Into::into),
        }
    }
}

// ── POST /auth/dev ───────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct DevLoginRequest {
    pub role: Option<String>,
}

/// Development-only login. The route exists only when dev auth is enabled.
/// Any role value other than `"SUPERADMIN"` resolves to the demo client.
pub async fn dev_login(
    State(state): State<AppState>,
    Json(body): Json<DevLoginRequest>,
) -> Result<Json<AuthResponse>, ApiServiceError> {
    let requested_role = match body.role.as_deref() {
        Some("SUPERADMIN") => UserRole::Superadmin,
        _ => UserRole::Client,
    };

    let usecase = DevLoginUseCase {
        users: state.user_repo(),
        restaurants: state.restaurant_repo(),
        jwt_secret: state.jwt_secret.clone(),
    };
    let session = usecase.execute(requested_role).await?;
    Ok(Json(session.into()))
}

// ── POST /auth/google ────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct GoogleLoginRequest {
    pub credential: Option<String>,
}

pub async fn google_login(
    State(state): State<AppState>,
    Json(body): Json<GoogleLoginRequest>,
) -> Result<Json<AuthResponse>, ApiServiceError> {
    let credential = body
        .credential
        .filter(|c| !c.is_empty())
        .ok_or_else(|| ApiServiceError::Validation("credential is required".to_owned()))?;

    let usecase = GoogleLoginUseCase {
        verifier: state.verifier.clone(),
        users: state.user_repo(),
        restaurants: state.restaurant_repo(),
        superadmin_emails: state.superadmin_emails.clone(),
        jwt_secret: state.jwt_secret.clone(),
    };
    let session = usecase.execute(&credential).await?;
    Ok(Json(session.into()))
}
