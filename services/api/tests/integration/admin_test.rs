use chrono::Duration;
use uuid::Uuid;

use carta_domain::restaurant::RestaurantStatus;
use carta_domain::user::UserRole;

use carta_api::error::ApiServiceError;
use carta_api::usecase::admin::{
    ListRestaurantsUseCase, ToggleMenuUseCase, ToggleStatusUseCase,
};

use crate::helpers::MemStore;

// ── Role gate ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_forbid_listing_for_client_role() {
    let store = MemStore::new();
    store.seed_owner_with_restaurant("owner@example.com");

    let usecase = ListRestaurantsUseCase {
        restaurants: store.restaurant_repo(),
    };
    let result = usecase.execute(UserRole::Client).await;

    assert!(
        matches!(result, Err(ApiServiceError::Forbidden)),
        "expected Forbidden, got {result:?}"
    );
}

#[tokio::test]
async fn should_forbid_toggles_for_client_role() {
    let store = MemStore::new();
    let (_, restaurant_id, _) = store.seed_owner_with_restaurant("owner@example.com");

    let status = ToggleStatusUseCase {
        restaurants: store.restaurant_repo(),
    };
    assert!(matches!(
        status.execute(UserRole::Client, restaurant_id).await,
        Err(ApiServiceError::Forbidden)
    ));

    let menu = ToggleMenuUseCase {
        restaurants: store.restaurant_repo(),
    };
    assert!(matches!(
        menu.execute(UserRole::Client, restaurant_id).await,
        Err(ApiServiceError::Forbidden)
    ));

    // The gate fires before any store mutation.
    assert_eq!(
        store.with(|s| s.restaurants[0].status),
        RestaurantStatus::Active
    );
    assert!(!store.with(|s| s.restaurants[0].published));
}

// ── List all restaurants ─────────────────────────────────────────────────────

#[tokio::test]
async fn should_list_restaurants_newest_first_with_owners() {
    let store = MemStore::new();
    let (owner_old, old_id, _) = store.seed_owner_with_restaurant("old@example.com");
    let (owner_new, new_id, _) = store.seed_owner_with_restaurant("new@example.com");
    store.with(|s| {
        // Spread creation times so the ordering is deterministic.
        for r in s.restaurants.iter_mut() {
            if r.id == old_id {
                r.created_at = r.created_at - Duration::hours(1);
            }
        }
    });

    let usecase = ListRestaurantsUseCase {
        restaurants: store.restaurant_repo(),
    };
    let listing = usecase.execute(UserRole::Superadmin).await.unwrap();

    assert_eq!(listing.len(), 2);
    assert_eq!(listing[0].restaurant.id, new_id);
    assert_eq!(listing[0].owner.id, owner_new.id);
    assert_eq!(listing[1].restaurant.id, old_id);
    assert_eq!(listing[1].owner.id, owner_old.id);
    assert!(!listing[0].categories.is_empty());
}

// ── Toggle business status ───────────────────────────────────────────────────

#[tokio::test]
async fn should_toggle_status_without_touching_published() {
    let store = MemStore::new();
    let (_, restaurant_id, _) = store.seed_owner_with_restaurant("owner@example.com");

    let usecase = ToggleStatusUseCase {
        restaurants: store.restaurant_repo(),
    };

    let paused = usecase
        .execute(UserRole::Superadmin, restaurant_id)
        .await
        .unwrap();
    assert_eq!(paused.restaurant.status, RestaurantStatus::Paused);
    assert!(!paused.restaurant.published);

    let active = usecase
        .execute(UserRole::Superadmin, restaurant_id)
        .await
        .unwrap();
    assert_eq!(active.restaurant.status, RestaurantStatus::Active);
}

#[tokio::test]
async fn should_fail_status_toggle_for_unknown_restaurant() {
    let store = MemStore::new();

    let usecase = ToggleStatusUseCase {
        restaurants: store.restaurant_repo(),
    };
    let result = usecase.execute(UserRole::Superadmin, Uuid::now_v7()).await;

    assert!(matches!(result, Err(ApiServiceError::RestaurantNotFound)));
}

// ── Toggle menu publication ──────────────────────────────────────────────────

#[tokio::test]
async fn should_flip_published_flag_only() {
    let store = MemStore::new();
    let (_, restaurant_id, _) = store.seed_owner_with_restaurant("owner@example.com");
    store.with(|s| {
        let r = s.restaurants.iter_mut().find(|r| r.id == restaurant_id).unwrap();
        r.company_name = "Casa Paco".to_owned();
        r.tagline = Some("Cocina de siempre".to_owned());
    });

    let usecase = ToggleMenuUseCase {
        restaurants: store.restaurant_repo(),
    };
    let bundle = usecase
        .execute(UserRole::Superadmin, restaurant_id)
        .await
        .unwrap();

    // Only the flag changes; profile fields, link, and status are untouched.
    assert!(bundle.restaurant.published);
    assert_eq!(bundle.restaurant.company_name, "Casa Paco");
    assert_eq!(bundle.restaurant.tagline.as_deref(), Some("Cocina de siempre"));
    assert!(bundle.restaurant.menu_link.is_none());
    assert_eq!(bundle.restaurant.status, RestaurantStatus::Active);

    let back = usecase
        .execute(UserRole::Superadmin, restaurant_id)
        .await
        .unwrap();
    assert!(!back.restaurant.published);
}

#[tokio::test]
async fn should_fail_menu_toggle_for_unknown_restaurant() {
    let store = MemStore::new();

    let usecase = ToggleMenuUseCase {
        restaurants: store.restaurant_repo(),
    };
    let result = usecase.execute(UserRole::Superadmin, Uuid::now_v7()).await;

    assert!(matches!(result, Err(ApiServiceError::RestaurantNotFound)));
}
