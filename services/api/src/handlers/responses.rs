//! Response DTOs shared by the handler modules.
//!
//! The public API speaks camelCase JSON; conversion from domain types
//! happens here so handlers stay thin.

use serde::Serialize;
use uuid::Uuid;

use carta_domain::restaurant::RestaurantStatus;
use carta_domain::translation::DishTranslations;
use carta_domain::user::UserRole;

use crate::domain::types::{AdminRestaurant, Category, Dish, RestaurantBundle, User};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub avatar: Option<String>,
    pub role: UserRole,
    #[serde(serialize_with = "carta_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            avatar: user.avatar,
            role: user.role,
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponse {
    pub id: Uuid,
    pub name: String,
    pub restaurant_id: Uuid,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
            restaurant_id: category.restaurant_id,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DishResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub allergens: Vec<String>,
    pub image_url: Option<String>,
    pub translations: Option<DishTranslations>,
    pub restaurant_id: Uuid,
    pub category_id: Uuid,
}

impl From<Dish> for DishResponse {
    fn from(dish: Dish) -> Self {
        Self {
            id: dish.id,
            title: dish.title,
            description: dish.description,
            price: dish.price,
            allergens: dish.allergens,
            image_url: dish.image_url,
            translations: dish.translations,
            restaurant_id: dish.restaurant_id,
            category_id: dish.category_id,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantResponse {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub company_name: String,
    pub address: String,
    pub phone: String,
    pub qr_color: String,
    pub tagline: Option<String>,
    pub status: RestaurantStatus,
    pub published: bool,
    pub menu_link: Option<String>,
    pub setup_completed: bool,
    #[serde(serialize_with = "carta_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub categories: Vec<CategoryResponse>,
    pub dishes: Vec<DishResponse>,
}

impl From<RestaurantBundle> for RestaurantResponse {
    fn from(bundle: RestaurantBundle) -> Self {
        let restaurant = bundle.restaurant;
        Self {
            id: restaurant.id,
            owner_id: restaurant.owner_id,
            company_name: restaurant.company_name,
            address: restaurant.address,
            phone: restaurant.phone,
            qr_color: restaurant.qr_color,
            tagline: restaurant.tagline,
            status: restaurant.status,
            published: restaurant.published,
            menu_link: restaurant.menu_link,
            setup_completed: restaurant.setup_completed,
            created_at: restaurant.created_at,
            categories: bundle.categories.into_iter().map(Into::into).collect(),
            dishes: bundle.dishes.into_iter().map(Into::into).collect(),
        }
    }
}

/// Admin listing entry: the restaurant bundle plus its owner.
#[derive(Debug, Serialize)]
pub struct AdminRestaurantResponse {
    #[serde(flatten)]
    pub restaurant: RestaurantResponse,
    pub owner: UserResponse,
}

impl From<AdminRestaurant> for AdminRestaurantResponse {
    fn from(entry: AdminRestaurant) -> Self {
        Self {
            restaurant: RestaurantResponse::from(RestaurantBundle {
                restaurant: entry.restaurant,
                categories: entry.categories,
                dishes: entry.dishes,
            }),
            owner: entry.owner.into(),
        }
    }
}
