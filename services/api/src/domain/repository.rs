#![allow(async_fn_in_trait)]

use uuid::Uuid;

use carta_domain::restaurant::RestaurantStatus;
use carta_domain::translation::TargetLanguage;

use crate::domain::types::{
    AdminRestaurant, Category, Dish, ProfileUpdate, Restaurant, RestaurantBundle, User,
    VerifiedIdentity,
};
use crate::error::ApiServiceError;

/// Repository for user accounts.
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, ApiServiceError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiServiceError>;
    async fn create(&self, user: &User) -> Result<(), ApiServiceError>;
    /// One-way role escalation. Callers only invoke this for Client records
    /// whose email has entered the superadmin allow-list.
    async fn promote_to_superadmin(&self, id: Uuid) -> Result<(), ApiServiceError>;
}

/// Repository for restaurants and their publication state.
pub trait RestaurantRepository: Send + Sync {
    async fn find_by_owner(&self, owner_id: Uuid) -> Result<Option<Restaurant>, ApiServiceError>;

    /// Load a restaurant with categories and dishes by owner.
    async fn load_by_owner(
        &self,
        owner_id: Uuid,
    ) -> Result<Option<RestaurantBundle>, ApiServiceError>;

    /// Load a restaurant with categories and dishes by id.
    async fn load_by_id(&self, id: Uuid) -> Result<Option<RestaurantBundle>, ApiServiceError>;

    /// Insert a restaurant and its starter categories in one transaction.
    ///
    /// A concurrent insert for the same owner trips the `owner_id` unique
    /// constraint and surfaces as `RestaurantAlreadyExists`; the caller
    /// re-fetches the winner's row.
    async fn create_with_categories(
        &self,
        restaurant: &Restaurant,
        category_names: &[&str],
    ) -> Result<(), ApiServiceError>;

    /// Overwrite only the fields present in `update`.
    async fn update_profile(
        &self,
        id: Uuid,
        update: &ProfileUpdate,
    ) -> Result<(), ApiServiceError>;

    /// Mark published, stamp the public link, flag setup as completed.
    async fn publish(&self, id: Uuid, menu_link: &str) -> Result<(), ApiServiceError>;

    /// Clear only the published flag; the link and setup flag survive.
    async fn unpublish(&self, id: Uuid) -> Result<(), ApiServiceError>;

    /// Reset publication state after a menu purge: unpublished, no link,
    /// setup incomplete.
    async fn clear_publication(&self, id: Uuid) -> Result<(), ApiServiceError>;

    async fn set_status(&self, id: Uuid, status: RestaurantStatus) -> Result<(), ApiServiceError>;

    async fn set_published(&self, id: Uuid, published: bool) -> Result<(), ApiServiceError>;

    /// Every restaurant with categories, dishes, and owner, newest first.
    async fn list_all(&self) -> Result<Vec<AdminRestaurant>, ApiServiceError>;
}

/// Repository for menu categories.
pub trait CategoryRepository: Send + Sync {
    async fn create(&self, category: &Category) -> Result<(), ApiServiceError>;

    /// Find a category by id scoped to one restaurant. Cross-tenant ids
    /// resolve to `None`.
    async fn find_in_restaurant(
        &self,
        id: Uuid,
        restaurant_id: Uuid,
    ) -> Result<Option<Category>, ApiServiceError>;
}

/// Repository for dishes.
pub trait DishRepository: Send + Sync {
    async fn create(&self, dish: &Dish) -> Result<(), ApiServiceError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Dish>, ApiServiceError>;
    /// Delete a dish. Returns `true` if deleted, `false` if not found.
    async fn delete(&self, id: Uuid) -> Result<bool, ApiServiceError>;
    /// Purge every dish of a restaurant. Returns the number of rows removed.
    async fn delete_by_restaurant(&self, restaurant_id: Uuid) -> Result<u64, ApiServiceError>;
}

/// Port for the external identity verifier (Google).
pub trait IdentityVerifier: Send + Sync {
    async fn verify(&self, credential: &str) -> Result<VerifiedIdentity, ApiServiceError>;
}

/// Port for the machine-translation service.
///
/// Failures never propagate to callers: usecases substitute the
/// tagged-passthrough fallback instead.
pub trait TranslationService: Send + Sync {
    async fn translate(
        &self,
        text: &str,
        target: TargetLanguage,
    ) -> Result<String, anyhow::Error>;
}
