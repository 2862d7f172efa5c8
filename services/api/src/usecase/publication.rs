//! Menu publication state machine.
//!
//! Draft (unpublished, no link) → Published (link derived from the owner's
//! user id) ⇄ Paused-visibility (unpublished, link retained) → menu deleted
//! (dishes purged, link cleared, setup reset). The restaurant row itself is
//! never deleted.

use anyhow::anyhow;
use uuid::Uuid;

use carta_domain::restaurant::menu_link;

use crate::domain::repository::{DishRepository, RestaurantRepository};
use crate::domain::types::RestaurantBundle;
use crate::error::ApiServiceError;

async fn reload_bundle<R: RestaurantRepository>(
    restaurants: &R,
    owner_id: Uuid,
) -> Result<RestaurantBundle, ApiServiceError> {
    restaurants
        .load_by_owner(owner_id)
        .await?
        .ok_or_else(|| ApiServiceError::Internal(anyhow!("restaurant vanished during update")))
}

// ── Publish ──────────────────────────────────────────────────────────────────

pub struct PublishMenuUseCase<R: RestaurantRepository> {
    pub restaurants: R,
    pub public_base_url: String,
}

impl<R: RestaurantRepository> PublishMenuUseCase<R> {
    /// Idempotent: republishing recomputes the link and leaves the state
    /// published.
    pub async fn execute(&self, owner_id: Uuid) -> Result<RestaurantBundle, ApiServiceError> {
        let restaurant = self
            .restaurants
            .find_by_owner(owner_id)
            .await?
            .ok_or(ApiServiceError::RestaurantNotFound)?;

        let link = menu_link(&self.public_base_url, owner_id);
        self.restaurants.publish(restaurant.id, &link).await?;
        reload_bundle(&self.restaurants, owner_id).await
    }
}

// ── Unpublish ────────────────────────────────────────────────────────────────

pub struct UnpublishMenuUseCase<R: RestaurantRepository> {
    pub restaurants: R,
}

impl<R: RestaurantRepository> UnpublishMenuUseCase<R> {
    /// Clears only the published flag; the menu stays addressable (link and
    /// setup flag retained) but inactive.
    pub async fn execute(&self, owner_id: Uuid) -> Result<RestaurantBundle, ApiServiceError> {
        let restaurant = self
            .restaurants
            .find_by_owner(owner_id)
            .await?
            .ok_or(ApiServiceError::RestaurantNotFound)?;

        self.restaurants.unpublish(restaurant.id).await?;
        reload_bundle(&self.restaurants, owner_id).await
    }
}

// ── Delete menu ──────────────────────────────────────────────────────────────

pub struct DeleteMenuUseCase<R, D>
where
    R: RestaurantRepository,
    D: DishRepository,
{
    pub restaurants: R,
    pub dishes: D,
}

impl<R, D> DeleteMenuUseCase<R, D>
where
    R: RestaurantRepository,
    D: DishRepository,
{
    /// Purges every dish and resets publication state. Categories survive,
    /// so the restaurant lands back in a draft with empty sections.
    pub async fn execute(&self, owner_id: Uuid) -> Result<RestaurantBundle, ApiServiceError> {
        let restaurant = self
            .restaurants
            .find_by_owner(owner_id)
            .await?
            .ok_or(ApiServiceError::RestaurantNotFound)?;

        self.dishes.delete_by_restaurant(restaurant.id).await?;
        self.restaurants.clear_publication(restaurant.id).await?;
        reload_bundle(&self.restaurants, owner_id).await
    }
}
