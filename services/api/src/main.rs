use sea_orm::Database;
use tracing::{info, warn};

use carta_api::config::{ApiConfig, DEV_JWT_SECRET};
use carta_api::infra::google::GoogleTokenVerifier;
use carta_api::infra::translate::HttpTranslationClient;
use carta_api::router::build_router;
use carta_api::state::AppState;
use carta_core::tracing::init_tracing;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = ApiConfig::from_env();
    if config.jwt_secret == DEV_JWT_SECRET {
        warn!("JWT_SECRET is unset; using the development secret");
    }
    if config.dev_auth_enabled {
        warn!("dev auth is enabled; /auth/dev is reachable");
    }

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let state = AppState {
        db,
        jwt_secret: config.jwt_secret,
        superadmin_emails: config.superadmin_emails,
        dev_auth_enabled: config.dev_auth_enabled,
        public_menu_base_url: config.public_menu_base_url,
        verifier: GoogleTokenVerifier::new(config.google_client_id),
        translator: HttpTranslationClient::new(config.translate_url),
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.api_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("api service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
