//! Superadmin operations spanning all restaurants.
//!
//! The role check runs before any store access; ownership scoping is
//! deliberately bypassed afterwards.

use anyhow::anyhow;
use uuid::Uuid;

use carta_domain::user::UserRole;

use crate::domain::repository::RestaurantRepository;
use crate::domain::types::{AdminRestaurant, RestaurantBundle};
use crate::error::ApiServiceError;

fn require_superadmin(role: UserRole) -> Result<(), ApiServiceError> {
    if role.is_superadmin() {
        Ok(())
    } else {
        Err(ApiServiceError::Forbidden)
    }
}

// ── List all restaurants ─────────────────────────────────────────────────────

pub struct ListRestaurantsUseCase<R: RestaurantRepository> {
    pub restaurants: R,
}

impl<R: RestaurantRepository> ListRestaurantsUseCase<R> {
    pub async fn execute(
        &self,
        caller_role: UserRole,
    ) -> Result<Vec<AdminRestaurant>, ApiServiceError> {
        require_superadmin(caller_role)?;
        self.restaurants.list_all().await
    }
}

// ── Toggle business status ───────────────────────────────────────────────────

pub struct ToggleStatusUseCase<R: RestaurantRepository> {
    pub restaurants: R,
}

impl<R: RestaurantRepository> ToggleStatusUseCase<R> {
    /// Active ⇄ Paused. Orthogonal to the menu `published` flag.
    pub async fn execute(
        &self,
        caller_role: UserRole,
        restaurant_id: Uuid,
    ) -> Result<RestaurantBundle, ApiServiceError> {
        require_superadmin(caller_role)?;

        let bundle = self
            .restaurants
            .load_by_id(restaurant_id)
            .await?
            .ok_or(ApiServiceError::RestaurantNotFound)?;

        self.restaurants
            .set_status(restaurant_id, bundle.restaurant.status.toggled())
            .await?;

        self.restaurants
            .load_by_id(restaurant_id)
            .await?
            .ok_or_else(|| ApiServiceError::Internal(anyhow!("restaurant vanished during toggle")))
    }
}

// ── Toggle menu publication ──────────────────────────────────────────────────

pub struct ToggleMenuUseCase<R: RestaurantRepository> {
    pub restaurants: R,
}

impl<R: RestaurantRepository> ToggleMenuUseCase<R> {
    /// Administrative override of publish/unpublish: flips only the
    /// `published` flag for any restaurant, bypassing ownership.
    pub async fn execute(
        &self,
        caller_role: UserRole,
        restaurant_id: Uuid,
    ) -> Result<RestaurantBundle, ApiServiceError> {
        require_superadmin(caller_role)?;

        let bundle = self
            .restaurants
            .load_by_id(restaurant_id)
            .await?
            .ok_or(ApiServiceError::RestaurantNotFound)?;

        self.restaurants
            .set_published(restaurant_id, !bundle.restaurant.published)
            .await?;

        self.restaurants
            .load_by_id(restaurant_id)
            .await?
            .ok_or_else(|| ApiServiceError::Internal(anyhow!("restaurant vanished during toggle")))
    }
}
