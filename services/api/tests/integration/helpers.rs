//! In-memory port implementations for integration tests.
//!
//! A single `MemStore` holds all four entity collections; per-trait views
//! (`MemUserRepo`, `MemRestaurantRepo`, ...) share it so tests can inspect
//! state after a usecase runs.

use std::sync::{Arc, Mutex};

use anyhow::anyhow;
use chrono::Utc;
use uuid::Uuid;

use carta_domain::restaurant::RestaurantStatus;
use carta_domain::translation::TargetLanguage;
use carta_domain::user::UserRole;

use carta_api::domain::repository::{
    CategoryRepository, DishRepository, IdentityVerifier, RestaurantRepository,
    TranslationService, UserRepository,
};
use carta_api::domain::types::{
    AdminRestaurant, Category, Dish, ProfileUpdate, Restaurant, RestaurantBundle, User,
    VerifiedIdentity,
};
use carta_api::error::ApiServiceError;

#[derive(Default)]
pub struct MemState {
    pub users: Vec<User>,
    pub restaurants: Vec<Restaurant>,
    pub categories: Vec<Category>,
    pub dishes: Vec<Dish>,
}

/// Shared in-memory store backing every mock repository.
#[derive(Clone, Default)]
pub struct MemStore {
    inner: Arc<Mutex<MemState>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with<T>(&self, f: impl FnOnce(&mut MemState) -> T) -> T {
        f(&mut self.inner.lock().unwrap())
    }

    pub fn user_repo(&self) -> MemUserRepo {
        MemUserRepo {
            store: self.clone(),
        }
    }

    pub fn restaurant_repo(&self) -> MemRestaurantRepo {
        MemRestaurantRepo {
            store: self.clone(),
        }
    }

    pub fn category_repo(&self) -> MemCategoryRepo {
        MemCategoryRepo {
            store: self.clone(),
        }
    }

    pub fn dish_repo(&self) -> MemDishRepo {
        MemDishRepo {
            store: self.clone(),
        }
    }

    /// Seed a client user with a provisioned restaurant and one category.
    /// Returns (user, restaurant id, category id).
    pub fn seed_owner_with_restaurant(&self, email: &str) -> (User, Uuid, Uuid) {
        let user = test_user(email, UserRole::Client);
        let restaurant = Restaurant::blank_for_owner(user.id);
        let category = Category {
            id: Uuid::now_v7(),
            name: "Postres".to_owned(),
            restaurant_id: restaurant.id,
        };
        let (restaurant_id, category_id) = (restaurant.id, category.id);
        self.with(|state| {
            state.users.push(user.clone());
            state.restaurants.push(restaurant);
            state.categories.push(category);
        });
        (user, restaurant_id, category_id)
    }

    fn bundle_of(&self, state: &MemState, restaurant: &Restaurant) -> RestaurantBundle {
        RestaurantBundle {
            restaurant: restaurant.clone(),
            categories: state
                .categories
                .iter()
                .filter(|c| c.restaurant_id == restaurant.id)
                .cloned()
                .collect(),
            dishes: state
                .dishes
                .iter()
                .filter(|d| d.restaurant_id == restaurant.id)
                .cloned()
                .collect(),
        }
    }
}

// ── User repository ──────────────────────────────────────────────────────────

pub struct MemUserRepo {
    store: MemStore,
}

impl UserRepository for MemUserRepo {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, ApiServiceError> {
        Ok(self
            .store
            .with(|s| s.users.iter().find(|u| u.id == id).cloned()))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiServiceError> {
        Ok(self
            .store
            .with(|s| s.users.iter().find(|u| u.email == email).cloned()))
    }

    async fn create(&self, user: &User) -> Result<(), ApiServiceError> {
        self.store.with(|s| s.users.push(user.clone()));
        Ok(())
    }

    async fn promote_to_superadmin(&self, id: Uuid) -> Result<(), ApiServiceError> {
        self.store.with(|s| {
            if let Some(user) = s.users.iter_mut().find(|u| u.id == id) {
                user.role = UserRole::Superadmin;
            }
        });
        Ok(())
    }
}

// ── Restaurant repository ────────────────────────────────────────────────────

pub struct MemRestaurantRepo {
    store: MemStore,
}

impl RestaurantRepository for MemRestaurantRepo {
    async fn find_by_owner(&self, owner_id: Uuid) -> Result<Option<Restaurant>, ApiServiceError> {
        Ok(self
            .store
            .with(|s| s.restaurants.iter().find(|r| r.owner_id == owner_id).cloned()))
    }

    async fn load_by_owner(
        &self,
        owner_id: Uuid,
    ) -> Result<Option<RestaurantBundle>, ApiServiceError> {
        let store = self.store.clone();
        Ok(self.store.with(|s| {
            s.restaurants
                .iter()
                .find(|r| r.owner_id == owner_id)
                .map(|r| store.bundle_of(s, r))
        }))
    }

    async fn load_by_id(&self, id: Uuid) -> Result<Option<RestaurantBundle>, ApiServiceError> {
        let store = self.store.clone();
        Ok(self.store.with(|s| {
            s.restaurants
                .iter()
                .find(|r| r.id == id)
                .map(|r| store.bundle_of(s, r))
        }))
    }

    async fn create_with_categories(
        &self,
        restaurant: &Restaurant,
        category_names: &[&str],
    ) -> Result<(), ApiServiceError> {
        self.store.with(|s| {
            if s.restaurants
                .iter()
                .any(|r| r.owner_id == restaurant.owner_id)
            {
                return Err(ApiServiceError::RestaurantAlreadyExists);
            }
            s.restaurants.push(restaurant.clone());
            for name in category_names {
                s.categories.push(Category {
                    id: Uuid::now_v7(),
                    name: (*name).to_owned(),
                    restaurant_id: restaurant.id,
                });
            }
            Ok(())
        })
    }

    async fn update_profile(
        &self,
        id: Uuid,
        update: &ProfileUpdate,
    ) -> Result<(), ApiServiceError> {
        self.store.with(|s| {
            let restaurant = s
                .restaurants
                .iter_mut()
                .find(|r| r.id == id)
                .ok_or_else(|| anyhow!("no restaurant {id}"))?;
            if let Some(ref v) = update.company_name {
                restaurant.company_name = v.clone();
            }
            if let Some(ref v) = update.address {
                restaurant.address = v.clone();
            }
            if let Some(ref v) = update.phone {
                restaurant.phone = v.clone();
            }
            if let Some(ref v) = update.qr_color {
                restaurant.qr_color = v.clone();
            }
            if let Some(ref v) = update.tagline {
                restaurant.tagline = Some(v.clone());
            }
            Ok(())
        })
    }

    async fn publish(&self, id: Uuid, menu_link: &str) -> Result<(), ApiServiceError> {
        self.store.with(|s| {
            if let Some(r) = s.restaurants.iter_mut().find(|r| r.id == id) {
                r.published = true;
                r.setup_completed = true;
                r.menu_link = Some(menu_link.to_owned());
            }
        });
        Ok(())
    }

    async fn unpublish(&self, id: Uuid) -> Result<(), ApiServiceError> {
        self.store.with(|s| {
            if let Some(r) = s.restaurants.iter_mut().find(|r| r.id == id) {
                r.published = false;
            }
        });
        Ok(())
    }

    async fn clear_publication(&self, id: Uuid) -> Result<(), ApiServiceError> {
        self.store.with(|s| {
            if let Some(r) = s.restaurants.iter_mut().find(|r| r.id == id) {
                r.published = false;
                r.menu_link = None;
                r.setup_completed = false;
            }
        });
        Ok(())
    }

    async fn set_status(&self, id: Uuid, status: RestaurantStatus) -> Result<(), ApiServiceError> {
        self.store.with(|s| {
            if let Some(r) = s.restaurants.iter_mut().find(|r| r.id == id) {
                r.status = status;
            }
        });
        Ok(())
    }

    async fn set_published(&self, id: Uuid, published: bool) -> Result<(), ApiServiceError> {
        self.store.with(|s| {
            if let Some(r) = s.restaurants.iter_mut().find(|r| r.id == id) {
                r.published = published;
            }
        });
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<AdminRestaurant>, ApiServiceError> {
        let store = self.store.clone();
        self.store.with(|s| {
            let mut restaurants = s.restaurants.clone();
            restaurants.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            restaurants
                .iter()
                .map(|r| {
                    let owner = s
                        .users
                        .iter()
                        .find(|u| u.id == r.owner_id)
                        .cloned()
                        .ok_or_else(|| anyhow!("restaurant {} has no owner row", r.id))?;
                    let bundle = store.bundle_of(s, r);
                    Ok(AdminRestaurant {
                        restaurant: bundle.restaurant,
                        categories: bundle.categories,
                        dishes: bundle.dishes,
                        owner,
                    })
                })
                .collect()
        })
    }
}

// ── Category repository ──────────────────────────────────────────────────────

pub struct MemCategoryRepo {
    store: MemStore,
}

impl CategoryRepository for MemCategoryRepo {
    async fn create(&self, category: &Category) -> Result<(), ApiServiceError> {
        self.store.with(|s| s.categories.push(category.clone()));
        Ok(())
    }

    async fn find_in_restaurant(
        &self,
        id: Uuid,
        restaurant_id: Uuid,
    ) -> Result<Option<Category>, ApiServiceError> {
        Ok(self.store.with(|s| {
            s.categories
                .iter()
                .find(|c| c.id == id && c.restaurant_id == restaurant_id)
                .cloned()
        }))
    }
}

// ── Dish repository ──────────────────────────────────────────────────────────

pub struct MemDishRepo {
    store: MemStore,
}

impl DishRepository for MemDishRepo {
    async fn create(&self, dish: &Dish) -> Result<(), ApiServiceError> {
        self.store.with(|s| s.dishes.push(dish.clone()));
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Dish>, ApiServiceError> {
        Ok(self
            .store
            .with(|s| s.dishes.iter().find(|d| d.id == id).cloned()))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ApiServiceError> {
        Ok(self.store.with(|s| {
            let before = s.dishes.len();
            s.dishes.retain(|d| d.id != id);
            s.dishes.len() < before
        }))
    }

    async fn delete_by_restaurant(&self, restaurant_id: Uuid) -> Result<u64, ApiServiceError> {
        Ok(self.store.with(|s| {
            let before = s.dishes.len();
            s.dishes.retain(|d| d.restaurant_id != restaurant_id);
            (before - s.dishes.len()) as u64
        }))
    }
}

// ── External service mocks ───────────────────────────────────────────────────

/// Verifier returning a fixed payload, or rejecting when `identity` is None.
pub struct MockVerifier {
    pub identity: Option<VerifiedIdentity>,
}

impl MockVerifier {
    pub fn accepting(email: &str) -> Self {
        Self {
            identity: Some(VerifiedIdentity {
                email: Some(email.to_owned()),
                name: Some("Test User".to_owned()),
                picture: None,
            }),
        }
    }

    pub fn rejecting() -> Self {
        Self { identity: None }
    }
}

impl IdentityVerifier for MockVerifier {
    async fn verify(&self, _credential: &str) -> Result<VerifiedIdentity, ApiServiceError> {
        self.identity
            .clone()
            .ok_or_else(|| ApiServiceError::IdentityVerification(anyhow!("verifier rejected")))
    }
}

/// Deterministic translator: prefixes the language code.
pub struct EchoTranslator;

impl TranslationService for EchoTranslator {
    async fn translate(
        &self,
        text: &str,
        target: TargetLanguage,
    ) -> Result<String, anyhow::Error> {
        Ok(format!("{}:{}", target.code(), text))
    }
}

/// Translator that always fails, forcing the tagged fallback.
pub struct FailingTranslator;

impl TranslationService for FailingTranslator {
    async fn translate(
        &self,
        _text: &str,
        _target: TargetLanguage,
    ) -> Result<String, anyhow::Error> {
        Err(anyhow!("translation service unavailable"))
    }
}

// ── Fixtures ─────────────────────────────────────────────────────────────────

pub fn test_user(email: &str, role: UserRole) -> User {
    User {
        id: Uuid::now_v7(),
        email: email.to_owned(),
        name: "Test User".to_owned(),
        avatar: None,
        role,
        created_at: Utc::now(),
    }
}
