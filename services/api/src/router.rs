use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower_http::trace::TraceLayer;

use carta_core::health::health;
use carta_core::middleware::request_id_layer;

use crate::handlers::{
    admin::{list_restaurants, toggle_menu, toggle_status},
    auth::{dev_login, google_login},
    me::{get_me, get_my_restaurant, update_my_restaurant},
    menu::{
        create_category, create_dish, delete_dish, delete_menu, publish_menu, unpublish_menu,
    },
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let mut router = Router::new()
        // Health
        .route("/health", get(health))
        // Auth
        .route("/auth/google", post(google_login))
        // Profile
        .route("/me", get(get_me))
        .route("/me/restaurant", get(get_my_restaurant))
        .route("/me/restaurant", put(update_my_restaurant))
        // Menu editing
        .route("/categories", post(create_category))
        .route("/dishes", post(create_dish))
        .route("/dishes/{id}", delete(delete_dish))
        // Publication
        .route("/menu/publish", post(publish_menu))
        .route("/menu/unpublish", post(unpublish_menu))
        .route("/menu/delete", post(delete_menu))
        // Superadmin
        .route("/admin/restaurants", get(list_restaurants))
        .route(
            "/admin/restaurants/{id}/toggle-status",
            post(toggle_status),
        )
        .route("/admin/restaurants/{id}/toggle-menu", post(toggle_menu));

    // The dev login path only exists when explicitly enabled; production
    // deployments answer 404 for it.
    if state.dev_auth_enabled {
        router = router.route("/auth/dev", post(dev_login));
    }

    router
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
