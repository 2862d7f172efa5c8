use chrono::{DateTime, Utc};
use uuid::Uuid;

use carta_domain::restaurant::{DEFAULT_QR_COLOR, RestaurantStatus};
use carta_domain::translation::DishTranslations;
use carta_domain::user::UserRole;

/// Account record. Created on first successful login for an email.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub avatar: Option<String>,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

/// The single restaurant owned by a client user.
#[derive(Debug, Clone)]
pub struct Restaurant {
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
    pub created_at: DateTime<Utc>,
}

impl Restaurant {
    /// Blank restaurant provisioned for a new owner: empty company fields,
    /// default QR color, active, unpublished.
    pub fn blank_for_owner(owner_id: Uuid) -> Self {
        Self {
            id: Uuid::now_v7(),
            owner_id,
            company_name: String::new(),
            address: String::new(),
            phone: String::new(),
            qr_color: DEFAULT_QR_COLOR.to_owned(),
            tagline: None,
            status: RestaurantStatus::Active,
            published: false,
            menu_link: None,
            setup_completed: false,
            created_at: Utc::now(),
        }
    }
}

/// Menu section within one restaurant.
#[derive(Debug, Clone)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub restaurant_id: Uuid,
}

/// Menu item.
#[derive(Debug, Clone)]
pub struct Dish {
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

/// A restaurant loaded with its categories and dishes — the shape every
/// restaurant-returning endpoint responds with.
#[derive(Debug, Clone)]
pub struct RestaurantBundle {
    pub restaurant: Restaurant,
    pub categories: Vec<Category>,
    pub dishes: Vec<Dish>,
}

/// Admin listing entry: a bundle plus the owning user.
#[derive(Debug, Clone)]
pub struct AdminRestaurant {
    pub restaurant: Restaurant,
    pub categories: Vec<Category>,
    pub dishes: Vec<Dish>,
    pub owner: User,
}

/// Claims returned by the external identity verifier.
///
/// `email` stays optional here; the resolver decides how its absence fails.
#[derive(Debug, Clone)]
pub struct VerifiedIdentity {
    pub email: Option<String>,
    pub name: Option<String>,
    pub picture: Option<String>,
}

/// Partial company-profile update. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub company_name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub qr_color: Option<String>,
    pub tagline: Option<String>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self.company_name.is_none()
            && self.address.is_none()
            && self.phone.is_none()
            && self.qr_color.is_none()
            && self.tagline.is_none()
    }
}

/// Demo identities served by the development login path.
pub const DEV_CLIENT_EMAIL: &str = "propietario-demo@carta.local";
pub const DEV_CLIENT_NAME: &str = "Propietario Demo";
pub const DEV_SUPERADMIN_EMAIL: &str = "superadmin@carta.local";
pub const DEV_SUPERADMIN_NAME: &str = "Superadmin (dev)";
