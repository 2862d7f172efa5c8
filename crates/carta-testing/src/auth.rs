//! Bearer-token helpers for integration tests.
//!
//! The API validates `Authorization: Bearer <jwt>` itself, so tests mint a
//! real token signed with the test secret instead of stubbing headers.

use axum::http::{HeaderMap, HeaderName, HeaderValue};
use uuid::Uuid;

use carta_auth_types::token::issue_session_token;
use carta_domain::user::UserRole;

/// Secret used by router-level tests. Keep in sync with the test `AppState`.
pub const TEST_JWT_SECRET: &str = "test-jwt-secret-for-integration-tests";

/// Configurable identity injected into test requests.
pub struct TestIdentity {
    pub user_id: Uuid,
    pub role: UserRole,
    pub email: String,
}

impl TestIdentity {
    pub fn client(user_id: Uuid) -> Self {
        Self {
            user_id,
            role: UserRole::Client,
            email: "owner@example.com".to_owned(),
        }
    }

    pub fn superadmin(user_id: Uuid) -> Self {
        Self {
            user_id,
            role: UserRole::Superadmin,
            email: "admin@example.com".to_owned(),
        }
    }

    /// Mint a session token signed with the given secret.
    pub fn token(&self, secret: &str) -> String {
        issue_session_token(self.user_id, self.role.as_u8(), &self.email, secret)
            .expect("failed to sign test token")
    }

    /// Return headers as if a logged-in client sent the request.
    pub fn headers(&self, secret: &str) -> HeaderMap {
        let mut map = HeaderMap::new();
        map.insert(
            HeaderName::from_static("authorization"),
            HeaderValue::from_str(&format!("Bearer {}", self.token(secret))).unwrap(),
        );
        map
    }
}
