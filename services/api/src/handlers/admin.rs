use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;
use uuid::Uuid;

use carta_auth_types::identity::Identity;
use carta_domain::user::UserRole;

use crate::error::ApiServiceError;
use crate::handlers::responses::{AdminRestaurantResponse, RestaurantResponse};
use crate::state::AppState;
use crate::usecase::admin::{ListRestaurantsUseCase, ToggleMenuUseCase, ToggleStatusUseCase};

/// A token carrying an unknown role wire value grants nothing.
fn caller_role(identity: &Identity) -> Result<UserRole, ApiServiceError> {
    UserRole::from_u8(identity.user_role).ok_or(ApiServiceError::Forbidden)
}

// ── GET /admin/restaurants ───────────────────────────────────────────────────

#[derive(Serialize)]
pub struct RestaurantsEnvelope {
    pub restaurants: Vec<AdminRestaurantResponse>,
}

pub async fn list_restaurants(
    identity: Identity,
    State(state): State<AppState>,
) -> Result<Json<RestaurantsEnvelope>, ApiServiceError> {
    let role = caller_role(&identity)?;
    let usecase = ListRestaurantsUseCase {
        restaurants: state.restaurant_repo(),
    };
    let restaurants = usecase.execute(role).await?;
    Ok(Json(RestaurantsEnvelope {
        restaurants: restaurants.into_iter().map(Into::into).collect(),
    }))
}

// ── POST /admin/restaurants/{id}/toggle-status ───────────────────────────────

#[derive(Serialize)]
pub struct RestaurantEnvelope {
    pub restaurant: RestaurantResponse,
}

pub async fn toggle_status(
    identity: Identity,
    State(state): State<AppState>,
    Path(restaurant_id): Path<Uuid>,
) -> Result<Json<RestaurantEnvelope>, ApiServiceError> {
    let role = caller_role(&identity)?;
    let usecase = ToggleStatusUseCase {
        restaurants: state.restaurant_repo(),
    };
    let bundle = usecase.execute(role, restaurant_id).await?;
    Ok(Json(RestaurantEnvelope {
        restaurant: bundle.into(),
    }))
}

// ── POST /admin/restaurants/{id}/toggle-menu ─────────────────────────────────

pub async fn toggle_menu(
    identity: Identity,
    State(state): State<AppState>,
    Path(restaurant_id): Path<Uuid>,
) -> Result<Json<RestaurantEnvelope>, ApiServiceError> {
    let role = caller_role(&identity)?;
    let usecase = ToggleMenuUseCase {
        restaurants: state.restaurant_repo(),
    };
    let bundle = usecase.execute(role, restaurant_id).await?;
    Ok(Json(RestaurantEnvelope {
        restaurant: bundle.into(),
    }))
}
