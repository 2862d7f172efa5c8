//! Lazy per-owner restaurant provisioning.

use anyhow::anyhow;

use carta_domain::restaurant::STARTER_CATEGORIES;
use carta_domain::user::UserRole;

use crate::domain::repository::RestaurantRepository;
use crate::domain::types::{Restaurant, RestaurantBundle, User};
use crate::error::ApiServiceError;

/// Guarantee exactly one restaurant for a client user, creating it with the
/// starter categories on first contact. Returns `None` for non-client roles.
///
/// Idempotent under concurrency: the `owner_id` unique constraint decides
/// provisioning races, and the loser re-fetches the winner's row.
pub async fn ensure_restaurant<R: RestaurantRepository>(
    restaurants: &R,
    user: &User,
) -> Result<Option<RestaurantBundle>, ApiServiceError> {
    if user.role != UserRole::Client {
        return Ok(None);
    }

    if let Some(bundle) = restaurants.load_by_owner(user.id).await? {
        return Ok(Some(bundle));
    }

    let restaurant = Restaurant::blank_for_owner(user.id);
    match restaurants
        .create_with_categories(&restaurant, &STARTER_CATEGORIES)
        .await
    {
        Ok(()) => {}
        // Lost the provisioning race; the winner's row is authoritative.
        Err(ApiServiceError::RestaurantAlreadyExists) => {}
        Err(e) => return Err(e),
    }

    let bundle = restaurants.load_by_owner(user.id).await?.ok_or_else(|| {
        ApiServiceError::Internal(anyhow!("restaurant missing right after provisioning"))
    })?;
    Ok(Some(bundle))
}
