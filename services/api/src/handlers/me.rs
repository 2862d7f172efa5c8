use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use carta_auth_types::identity::Identity;

use crate::domain::types::ProfileUpdate;
use crate::error::ApiServiceError;
use crate::handlers::responses::{RestaurantResponse, UserResponse};
use crate::state::AppState;
use crate::usecase::identity::GetProfileUseCase;
use crate::usecase::menu::UpdateProfileUseCase;

#[derive(Serialize)]
pub struct ProfileResponse {
    pub user: UserResponse,
    pub restaurant: Option<RestaurantResponse>,
}

#[derive(Serialize)]
pub struct RestaurantEnvelope {
    pub restaurant: Option<RestaurantResponse>,
}

// ── GET /me ──────────────────────────────────────────────────────────────────

pub async fn get_me(
    identity: Identity,
    State(state): State<AppState>,
) -> Result<Json<ProfileResponse>, ApiServiceError> {
    let usecase = GetProfileUseCase {
        users: state.user_repo(),
        restaurants: state.restaurant_repo(),
    };
    let (user, restaurant) = usecase.execute(identity.user_id).await?;
    Ok(Json(ProfileResponse {
        user: user.into(),
        restaurant: restaurant.map(Into::into),
    }))
}

// ── GET /me/restaurant ───────────────────────────────────────────────────────

pub async fn get_my_restaurant(
    identity: Identity,
    State(state): State<AppState>,
) -> Result<Json<RestaurantEnvelope>, ApiServiceError> {
    let usecase = GetProfileUseCase {
        users: state.user_repo(),
        restaurants: state.restaurant_repo(),
    };
    let (_user, restaurant) = usecase.execute(identity.user_id).await?;
    Ok(Json(RestaurantEnvelope {
        restaurant: restaurant.map(Into::into),
    }))
}

// ── PUT /me/restaurant ───────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRestaurantRequest {
    pub company_name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub qr_color: Option<String>,
    pub tagline: Option<String>,
}

#[derive(Serialize)]
pub struct UpdatedRestaurantResponse {
    pub restaurant: RestaurantResponse,
}

pub async fn update_my_restaurant(
    identity: Identity,
    State(state): State<AppState>,
    Json(body): Json<UpdateRestaurantRequest>,
) -> Result<Json<UpdatedRestaurantResponse>, ApiServiceError> {
    let usecase = UpdateProfileUseCase {
        restaurants: state.restaurant_repo(),
    };
    let bundle = usecase
        .execute(
            identity.user_id,
            ProfileUpdate {
                company_name: body.company_name,
                address: body.address,
                phone: body.phone,
                qr_color: body.qr_color,
                tagline: body.tagline,
            },
        )
        .await?;
    Ok(Json(UpdatedRestaurantResponse {
        restaurant: bundle.into(),
    }))
}
