//! Identity resolution: turning a credential into a canonical user record,
//! an ensured restaurant, and a signed session token.

use anyhow::anyhow;
use chrono::Utc;
use uuid::Uuid;

use carta_auth_types::token::issue_session_token;
use carta_domain::user::UserRole;

use crate::domain::repository::{IdentityVerifier, RestaurantRepository, UserRepository};
use crate::domain::types::{
    DEV_CLIENT_EMAIL, DEV_CLIENT_NAME, DEV_SUPERADMIN_EMAIL, DEV_SUPERADMIN_NAME, RestaurantBundle,
    User,
};
use crate::error::ApiServiceError;
use crate::usecase::provision::ensure_restaurant;

/// Output of every successful login: the canonical user, its ensured
/// restaurant (clients only), and a fresh 7-day session token.
#[derive(Debug)]
pub struct AuthenticatedSession {
    pub user: User,
    pub restaurant: Option<RestaurantBundle>,
    pub token: String,
}

fn sign_session(user: &User, secret: &str) -> Result<String, ApiServiceError> {
    issue_session_token(user.id, user.role.as_u8(), &user.email, secret)
        .map_err(|e| ApiServiceError::Internal(anyhow!(e)))
}

/// Find the user for `email`, create it with `target_role` if absent, or
/// promote an existing Client in place when `target_role` is Superadmin.
/// Roles are never downgraded.
async fn resolve_user<U: UserRepository>(
    users: &U,
    email: &str,
    name: &str,
    avatar: Option<String>,
    target_role: UserRole,
) -> Result<User, ApiServiceError> {
    match users.find_by_email(email).await? {
        None => {
            let user = User {
                id: Uuid::now_v7(),
                email: email.to_owned(),
                name: name.to_owned(),
                avatar,
                role: target_role,
                created_at: Utc::now(),
            };
            users.create(&user).await?;
            Ok(user)
        }
        Some(user) if target_role == UserRole::Superadmin && user.role == UserRole::Client => {
            users.promote_to_superadmin(user.id).await?;
            Ok(User {
                role: UserRole::Superadmin,
                ..user
            })
        }
        Some(user) => Ok(user),
    }
}

// ── Dev login ────────────────────────────────────────────────────────────────

/// Development-only login. The route is mounted only when dev auth is
/// enabled; there is no production path into this usecase.
pub struct DevLoginUseCase<U, R>
where
    U: UserRepository,
    R: RestaurantRepository,
{
    pub users: U,
    pub restaurants: R,
    pub jwt_secret: String,
}

impl<U, R> DevLoginUseCase<U, R>
where
    U: UserRepository,
    R: RestaurantRepository,
{
    pub async fn execute(
        &self,
        requested_role: UserRole,
    ) -> Result<AuthenticatedSession, ApiServiceError> {
        let (email, name) = match requested_role {
            UserRole::Superadmin => (DEV_SUPERADMIN_EMAIL, DEV_SUPERADMIN_NAME),
            UserRole::Client => (DEV_CLIENT_EMAIL, DEV_CLIENT_NAME),
        };

        let user = resolve_user(&self.users, email, name, None, requested_role).await?;
        let restaurant = ensure_restaurant(&self.restaurants, &user).await?;
        let token = sign_session(&user, &self.jwt_secret)?;

        Ok(AuthenticatedSession {
            user,
            restaurant,
            token,
        })
    }
}

// ── Google login ─────────────────────────────────────────────────────────────

pub struct GoogleLoginUseCase<V, U, R>
where
    V: IdentityVerifier,
    U: UserRepository,
    R: RestaurantRepository,
{
    pub verifier: V,
    pub users: U,
    pub restaurants: R,
    pub superadmin_emails: Vec<String>,
    pub jwt_secret: String,
}

impl<V, U, R> GoogleLoginUseCase<V, U, R>
where
    V: IdentityVerifier,
    U: UserRepository,
    R: RestaurantRepository,
{
    pub async fn execute(&self, credential: &str) -> Result<AuthenticatedSession, ApiServiceError> {
        // 1. Verify the credential with the external verifier → 400 on failure.
        let verified = self.verifier.verify(credential).await?;

        // 2. The email claim is the account key.
        let email = verified
            .email
            .ok_or(ApiServiceError::MissingEmailClaim)?
            .to_lowercase();

        // 3. Role from the allow-list; one-way upgrade for returning clients.
        let target_role = if self.superadmin_emails.contains(&email) {
            UserRole::Superadmin
        } else {
            UserRole::Client
        };

        let name = verified.name.unwrap_or_else(|| email.clone());
        let user = resolve_user(&self.users, &email, &name, verified.picture, target_role).await?;

        let restaurant = ensure_restaurant(&self.restaurants, &user).await?;
        let token = sign_session(&user, &self.jwt_secret)?;

        Ok(AuthenticatedSession {
            user,
            restaurant,
            token,
        })
    }
}

// ── Authenticated profile ────────────────────────────────────────────────────

/// Serves `GET /me` and `GET /me/restaurant`: re-read the user row and
/// ensure its restaurant exists (provisioning runs on every session
/// bootstrap, not only at login).
pub struct GetProfileUseCase<U, R>
where
    U: UserRepository,
    R: RestaurantRepository,
{
    pub users: U,
    pub restaurants: R,
}

impl<U, R> GetProfileUseCase<U, R>
where
    U: UserRepository,
    R: RestaurantRepository,
{
    pub async fn execute(
        &self,
        user_id: Uuid,
    ) -> Result<(User, Option<RestaurantBundle>), ApiServiceError> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(ApiServiceError::UserNotFound)?;
        let restaurant = ensure_restaurant(&self.restaurants, &user).await?;
        Ok((user, restaurant))
    }
}
