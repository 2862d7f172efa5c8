//! Menu editing: company profile, categories, dishes.
//!
//! Every operation re-derives the caller's restaurant from the session's
//! user id; restaurant ids supplied by clients are never trusted.

use anyhow::anyhow;
use uuid::Uuid;

use carta_domain::translation::{DishTranslations, TargetLanguage, TranslatedText};

use crate::domain::repository::{
    CategoryRepository, DishRepository, RestaurantRepository, TranslationService,
};
use crate::domain::types::{Category, Dish, ProfileUpdate, RestaurantBundle};
use crate::error::ApiServiceError;

// ── Update company profile ───────────────────────────────────────────────────

pub struct UpdateProfileUseCase<R: RestaurantRepository> {
    pub restaurants: R,
}

impl<R: RestaurantRepository> UpdateProfileUseCase<R> {
    pub async fn execute(
        &self,
        owner_id: Uuid,
        update: ProfileUpdate,
    ) -> Result<RestaurantBundle, ApiServiceError> {
        let restaurant = self
            .restaurants
            .find_by_owner(owner_id)
            .await?
            .ok_or(ApiServiceError::RestaurantNotFound)?;

        if !update.is_empty() {
            self.restaurants
                .update_profile(restaurant.id, &update)
                .await?;
        }

        self.restaurants
            .load_by_owner(owner_id)
            .await?
            .ok_or_else(|| ApiServiceError::Internal(anyhow!("restaurant vanished during update")))
    }
}

// ── Create category ──────────────────────────────────────────────────────────

pub struct CreateCategoryInput {
    pub name: Option<String>,
}

pub struct CreateCategoryUseCase<R, C>
where
    R: RestaurantRepository,
    C: CategoryRepository,
{
    pub restaurants: R,
    pub categories: C,
}

impl<R, C> CreateCategoryUseCase<R, C>
where
    R: RestaurantRepository,
    C: CategoryRepository,
{
    pub async fn execute(
        &self,
        owner_id: Uuid,
        input: CreateCategoryInput,
    ) -> Result<Category, ApiServiceError> {
        let name = input
            .name
            .filter(|n| !n.trim().is_empty())
            .ok_or_else(|| ApiServiceError::Validation("name is required".to_owned()))?;

        let restaurant = self
            .restaurants
            .find_by_owner(owner_id)
            .await?
            .ok_or(ApiServiceError::RestaurantNotFound)?;

        let category = Category {
            id: Uuid::now_v7(),
            name,
            restaurant_id: restaurant.id,
        };
        self.categories.create(&category).await?;
        Ok(category)
    }
}

// ── Create dish ──────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct CreateDishInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category_id: Option<Uuid>,
    pub allergens: Vec<String>,
    pub image_url: Option<String>,
    pub translations: Option<DishTranslations>,
}

pub struct CreateDishUseCase<R, C, D, T>
where
    R: RestaurantRepository,
    C: CategoryRepository,
    D: DishRepository,
    T: TranslationService,
{
    pub restaurants: R,
    pub categories: C,
    pub dishes: D,
    pub translator: T,
}

impl<R, C, D, T> CreateDishUseCase<R, C, D, T>
where
    R: RestaurantRepository,
    C: CategoryRepository,
    D: DishRepository,
    T: TranslationService,
{
    pub async fn execute(
        &self,
        owner_id: Uuid,
        input: CreateDishInput,
    ) -> Result<Dish, ApiServiceError> {
        // 1. Required fields; the error names exactly what is missing.
        let mut missing = Vec::new();
        if input.title.is_none() {
            missing.push("title");
        }
        if input.description.is_none() {
            missing.push("description");
        }
        if input.price.is_none() {
            missing.push("price");
        }
        if input.category_id.is_none() {
            missing.push("categoryId");
        }
        if !missing.is_empty() {
            return Err(ApiServiceError::Validation(format!(
                "missing required fields: {}",
                missing.join(", ")
            )));
        }
        let title = input.title.unwrap_or_default();
        let description = input.description.unwrap_or_default();
        let price = input.price.unwrap_or_default();
        let category_id = input.category_id.unwrap_or_default();

        if !price.is_finite() || price < 0.0 {
            return Err(ApiServiceError::Validation(
                "price must be a non-negative number".to_owned(),
            ));
        }

        // 2. Ownership scope: the category must live in the caller's own
        // restaurant. Cross-tenant category ids resolve to not-found.
        let restaurant = self
            .restaurants
            .find_by_owner(owner_id)
            .await?
            .ok_or(ApiServiceError::RestaurantNotFound)?;
        let category = self
            .categories
            .find_in_restaurant(category_id, restaurant.id)
            .await?
            .ok_or(ApiServiceError::CategoryNotFound)?;

        // 3. Translations: client-supplied when present, best-effort machine
        // translation otherwise. Translation can never fail dish creation.
        let translations = match input.translations {
            Some(t) => Some(t),
            None => Some(
                translate_dish(&self.translator, &title, &description).await,
            ),
        };

        let dish = Dish {
            id: Uuid::now_v7(),
            title,
            description,
            price,
            allergens: input.allergens,
            image_url: input.image_url,
            translations,
            restaurant_id: restaurant.id,
            category_id: category.id,
        };
        self.dishes.create(&dish).await?;
        Ok(dish)
    }
}

/// Translate title + description into every target language, substituting
/// the tagged original on any failure.
pub async fn translate_dish<T: TranslationService>(
    translator: &T,
    title: &str,
    description: &str,
) -> DishTranslations {
    DishTranslations {
        en: TranslatedText {
            title: translate_or_tag(translator, title, TargetLanguage::En).await,
            description: translate_or_tag(translator, description, TargetLanguage::En).await,
        },
        de: TranslatedText {
            title: translate_or_tag(translator, title, TargetLanguage::De).await,
            description: translate_or_tag(translator, description, TargetLanguage::De).await,
        },
    }
}

async fn translate_or_tag<T: TranslationService>(
    translator: &T,
    text: &str,
    target: TargetLanguage,
) -> String {
    if text.is_empty() {
        return String::new();
    }
    match translator.translate(text, target).await {
        Ok(translated) => translated,
        Err(e) => {
            tracing::warn!(error = %e, lang = target.code(), "translation failed, using tagged original");
            target.fallback_text(text)
        }
    }
}

// ── Delete dish ──────────────────────────────────────────────────────────────

pub struct DeleteDishUseCase<R, D>
where
    R: RestaurantRepository,
    D: DishRepository,
{
    pub restaurants: R,
    pub dishes: D,
}

impl<R, D> DeleteDishUseCase<R, D>
where
    R: RestaurantRepository,
    D: DishRepository,
{
    pub async fn execute(&self, owner_id: Uuid, dish_id: Uuid) -> Result<(), ApiServiceError> {
        let dish = self
            .dishes
            .find_by_id(dish_id)
            .await?
            .ok_or(ApiServiceError::DishNotFound)?;

        // Ownership re-verified at delete time.
        let restaurant = self.restaurants.find_by_owner(owner_id).await?;
        let owns = restaurant
            .map(|r| r.id == dish.restaurant_id)
            .unwrap_or(false);
        if !owns {
            return Err(ApiServiceError::Forbidden);
        }

        self.dishes.delete(dish.id).await?;
        Ok(())
    }
}
