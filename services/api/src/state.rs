use sea_orm::DatabaseConnection;

use carta_auth_types::identity::TokenSecret;

use crate::infra::db::{
    DbCategoryRepository, DbDishRepository, DbRestaurantRepository, DbUserRepository,
};
use crate::infra::google::GoogleTokenVerifier;
use crate::infra::translate::HttpTranslationClient;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub jwt_secret: String,
    pub superadmin_emails: Vec<String>,
    pub dev_auth_enabled: bool,
    pub public_menu_base_url: String,
    pub verifier: GoogleTokenVerifier,
    pub translator: HttpTranslationClient,
}

impl AppState {
    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn restaurant_repo(&self) -> DbRestaurantRepository {
        DbRestaurantRepository {
            db: self.db.clone(),
        }
    }

    pub fn category_repo(&self) -> DbCategoryRepository {
        DbCategoryRepository {
            db: self.db.clone(),
        }
    }

    pub fn dish_repo(&self) -> DbDishRepository {
        DbDishRepository {
            db: self.db.clone(),
        }
    }
}

impl TokenSecret for AppState {
    fn token_secret(&self) -> &str {
        &self.jwt_secret
    }
}
