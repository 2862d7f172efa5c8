/// API service configuration loaded from environment variables.
#[derive(Debug)]
pub struct ApiConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// TCP port to listen on (default 3000). Env var: `API_PORT`.
    pub api_port: u16,
    /// HMAC secret for signing session tokens. Falls back to a fixed
    /// development secret when `JWT_SECRET` is unset.
    pub jwt_secret: String,
    /// Emails granted the superadmin role at login. Env var:
    /// `SUPERADMIN_EMAILS`, comma-separated; entries are trimmed and
    /// lower-cased.
    pub superadmin_emails: Vec<String>,
    /// Expected audience for Google identity tokens. Google login is
    /// rejected while unset. Env var: `GOOGLE_CLIENT_ID`.
    pub google_client_id: Option<String>,
    /// Mount the `/auth/dev` login route. Env var: `DEV_AUTH_ENABLED`
    /// ("1" or "true"); off by default so the route does not exist in
    /// production deployments.
    pub dev_auth_enabled: bool,
    /// Base URL for published menu links (e.g. "https://carta.example").
    /// Env var: `PUBLIC_MENU_BASE_URL`.
    pub public_menu_base_url: String,
    /// Translation service endpoint. Env var: `TRANSLATE_URL`.
    pub translate_url: String,
}

/// Secret used when `JWT_SECRET` is unset. Fine for local development,
/// a deployment risk anywhere else — `main` logs a warning when active.
pub const DEV_JWT_SECRET: &str = "dev-secret";

impl ApiConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            api_port: std::env::var("API_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            jwt_secret: std::env::var("JWT_SECRET").unwrap_or_else(|_| DEV_JWT_SECRET.to_owned()),
            superadmin_emails: std::env::var("SUPERADMIN_EMAILS")
                .map(|raw| parse_email_list(&raw))
                .unwrap_or_default(),
            google_client_id: std::env::var("GOOGLE_CLIENT_ID").ok().filter(|v| !v.is_empty()),
            dev_auth_enabled: std::env::var("DEV_AUTH_ENABLED")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
            public_menu_base_url: std::env::var("PUBLIC_MENU_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_owned()),
            translate_url: std::env::var("TRANSLATE_URL")
                .unwrap_or_else(|_| "https://libretranslate.de".to_owned()),
        }
    }
}

fn parse_email_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|v| v.trim().to_lowercase())
        .filter(|v| !v.is_empty())
        .collect()
}
