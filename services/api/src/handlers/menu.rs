use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use carta_auth_types::identity::Identity;
use carta_domain::translation::DishTranslations;

use crate::error::ApiServiceError;
use crate::handlers::responses::{CategoryResponse, DishResponse, RestaurantResponse};
use crate::state::AppState;
use crate::usecase::menu::{
    CreateCategoryInput, CreateCategoryUseCase, CreateDishInput, CreateDishUseCase,
    DeleteDishUseCase,
};
use crate::usecase::publication::{DeleteMenuUseCase, PublishMenuUseCase, UnpublishMenuUseCase};

#[derive(Serialize)]
pub struct RestaurantEnvelope {
    pub restaurant: RestaurantResponse,
}

// ── POST /categories ─────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateCategoryRequest {
    pub name: Option<String>,
}

#[derive(Serialize)]
pub struct CategoryEnvelope {
    pub category: CategoryResponse,
}

pub async fn create_category(
    identity: Identity,
    State(state): State<AppState>,
    Json(body): Json<CreateCategoryRequest>,
) -> Result<Json<CategoryEnvelope>, ApiServiceError> {
    let usecase = CreateCategoryUseCase {
        restaurants: state.restaurant_repo(),
        categories: state.category_repo(),
    };
    let category = usecase
        .execute(identity.user_id, CreateCategoryInput { name: body.name })
        .await?;
    Ok(Json(CategoryEnvelope {
        category: category.into(),
    }))
}

// ── POST /dishes ─────────────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDishRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    #[serde(default)]
    pub allergens: Vec<String>,
    pub image_url: Option<String>,
    pub category_id: Option<Uuid>,
    pub translations: Option<DishTranslations>,
}

#[derive(Serialize)]
pub struct DishEnvelope {
    pub dish: DishResponse,
}

pub async fn create_dish(
    identity: Identity,
    State(state): State<AppState>,
    Json(body): Json<CreateDishRequest>,
) -> Result<Json<DishEnvelope>, ApiServiceError> {
    let usecase = CreateDishUseCase {
        restaurants: state.restaurant_repo(),
        categories: state.category_repo(),
        dishes: state.dish_repo(),
        translator: state.translator.clone(),
    };
    let dish = usecase
        .execute(
            identity.user_id,
            CreateDishInput {
                title: body.title,
                description: body.description,
                price: body.price,
                category_id: body.category_id,
                allergens: body.allergens,
                image_url: body.image_url,
                translations: body.translations,
            },
        )
        .await?;
    Ok(Json(DishEnvelope { dish: dish.into() }))
}

// ── DELETE /dishes/{id} ──────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct OkResponse {
    pub ok: bool,
}

pub async fn delete_dish(
    identity: Identity,
    State(state): State<AppState>,
    Path(dish_id): Path<Uuid>,
) -> Result<Json<OkResponse>, ApiServiceError> {
    let usecase = DeleteDishUseCase {
        restaurants: state.restaurant_repo(),
        dishes: state.dish_repo(),
    };
    usecase.execute(identity.user_id, dish_id).await?;
    Ok(Json(OkResponse { ok: true }))
}

// ── POST /menu/publish ───────────────────────────────────────────────────────

pub async fn publish_menu(
    identity: Identity,
    State(state): State<AppState>,
) -> Result<Json<RestaurantEnvelope>, ApiServiceError> {
    let usecase = PublishMenuUseCase {
        restaurants: state.restaurant_repo(),
        public_base_url: state.public_menu_base_url.clone(),
    };
    let bundle = usecase.execute(identity.user_id).await?;
    Ok(Json(RestaurantEnvelope {
        restaurant: bundle.into(),
    }))
}

// ── POST /menu/unpublish ─────────────────────────────────────────────────────

pub async fn unpublish_menu(
    identity: Identity,
    State(state): State<AppState>,
) -> Result<Json<RestaurantEnvelope>, ApiServiceError> {
    let usecase = UnpublishMenuUseCase {
        restaurants: state.restaurant_repo(),
    };
    let bundle = usecase.execute(identity.user_id).await?;
    Ok(Json(RestaurantEnvelope {
        restaurant: bundle.into(),
    }))
}

// ── POST /menu/delete ────────────────────────────────────────────────────────

pub async fn delete_menu(
    identity: Identity,
    State(state): State<AppState>,
) -> Result<Json<RestaurantEnvelope>, ApiServiceError> {
    let usecase = DeleteMenuUseCase {
        restaurants: state.restaurant_repo(),
        dishes: state.dish_repo(),
    };
    let bundle = usecase.execute(identity.user_id).await?;
    Ok(Json(RestaurantEnvelope {
        restaurant: bundle.into(),
    }))
}
