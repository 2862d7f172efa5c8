use carta_auth_types::token::validate_session_token;
use carta_domain::restaurant::STARTER_CATEGORIES;
use carta_domain::user::UserRole;

use carta_api::domain::types::{DEV_CLIENT_EMAIL, DEV_SUPERADMIN_EMAIL};
use carta_api::error::ApiServiceError;
use carta_api::usecase::identity::{DevLoginUseCase, GoogleLoginUseCase};

use crate::helpers::{MemStore, MockVerifier, test_user};

const SECRET: &str = "identity-test-secret";

fn google_usecase(
    store: &MemStore,
    verifier: MockVerifier,
    superadmins: &[&str],
) -> GoogleLoginUseCase<MockVerifier, crate::helpers::MemUserRepo, crate::helpers::MemRestaurantRepo>
{
    GoogleLoginUseCase {
        verifier,
        users: store.user_repo(),
        restaurants: store.restaurant_repo(),
        superadmin_emails: superadmins.iter().map(|s| s.to_string()).collect(),
        jwt_secret: SECRET.to_owned(),
    }
}

// ── Google login ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_create_user_and_restaurant_on_first_google_login() {
    let store = MemStore::new();
    let usecase = google_usecase(&store, MockVerifier::accepting("Owner@Example.com"), &[]);

    let session = usecase.execute("credential").await.unwrap();

    // Email lower-cased, client role, restaurant provisioned with starters.
    assert_eq!(session.user.email, "owner@example.com");
    assert_eq!(session.user.role, UserRole::Client);
    let bundle = session.restaurant.expect("client gets a restaurant");
    assert_eq!(bundle.categories.len(), STARTER_CATEGORIES.len());
    assert!(bundle.dishes.is_empty());

    // Token round-trips and carries the identity.
    let info = validate_session_token(&session.token, SECRET).unwrap();
    assert_eq!(info.user_id, session.user.id);
    assert_eq!(info.user_role, UserRole::Client.as_u8());
    assert_eq!(info.email, "owner@example.com");
}

#[tokio::test]
async fn should_resolve_allowlisted_email_to_superadmin_without_restaurant() {
    let store = MemStore::new();
    let usecase = google_usecase(
        &store,
        MockVerifier::accepting("admin@example.com"),
        &["admin@example.com"],
    );

    let session = usecase.execute("credential").await.unwrap();

    assert_eq!(session.user.role, UserRole::Superadmin);
    assert!(session.restaurant.is_none());
    assert!(store.with(|s| s.restaurants.is_empty()));
}

#[tokio::test]
async fn should_upgrade_existing_client_when_email_enters_allowlist() {
    let store = MemStore::new();
    let existing = test_user("admin@example.com", UserRole::Client);
    store.with(|s| s.users.push(existing.clone()));

    let usecase = google_usecase(
        &store,
        MockVerifier::accepting("admin@example.com"),
        &["admin@example.com"],
    );
    let session = usecase.execute("credential").await.unwrap();

    // Same record, upgraded in place, no duplicate row.
    assert_eq!(session.user.id, existing.id);
    assert_eq!(session.user.role, UserRole::Superadmin);
    assert_eq!(store.with(|s| s.users.len()), 1);
    assert_eq!(
        store.with(|s| s.users[0].role),
        UserRole::Superadmin,
        "stored row should be promoted"
    );
}

#[tokio::test]
async fn should_never_downgrade_a_superadmin() {
    let store = MemStore::new();
    let existing = test_user("former-admin@example.com", UserRole::Superadmin);
    store.with(|s| s.users.push(existing.clone()));

    // Email no longer in the allow-list.
    let usecase = google_usecase(&store, MockVerifier::accepting("former-admin@example.com"), &[]);
    let session = usecase.execute("credential").await.unwrap();

    assert_eq!(session.user.role, UserRole::Superadmin);
}

#[tokio::test]
async fn should_fail_with_identity_verification_when_verifier_rejects() {
    let store = MemStore::new();
    let usecase = google_usecase(&store, MockVerifier::rejecting(), &[]);

    let result = usecase.execute("bad-credential").await;

    assert!(
        matches!(result, Err(ApiServiceError::IdentityVerification(_))),
        "expected IdentityVerification, got {result:?}"
    );
    assert!(store.with(|s| s.users.is_empty()));
}

#[tokio::test]
async fn should_fail_when_payload_has_no_email_claim() {
    let store = MemStore::new();
    let mut verifier = MockVerifier::accepting("ignored@example.com");
    verifier.identity.as_mut().unwrap().email = None;
    let usecase = google_usecase(&store, verifier, &[]);

    let result = usecase.execute("credential").await;

    assert!(
        matches!(result, Err(ApiServiceError::MissingEmailClaim)),
        "expected MissingEmailClaim, got {result:?}"
    );
}

// ── Dev login ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_synthesize_demo_client_on_dev_login() {
    let store = MemStore::new();
    let usecase = DevLoginUseCase {
        users: store.user_repo(),
        restaurants: store.restaurant_repo(),
        jwt_secret: SECRET.to_owned(),
    };

    let session = usecase.execute(UserRole::Client).await.unwrap();

    assert_eq!(session.user.email, DEV_CLIENT_EMAIL);
    assert_eq!(session.user.role, UserRole::Client);
    assert!(session.restaurant.is_some());

    // Second login reuses the synthesized row.
    let again = usecase.execute(UserRole::Client).await.unwrap();
    assert_eq!(again.user.id, session.user.id);
    assert_eq!(store.with(|s| s.users.len()), 1);
}

#[tokio::test]
async fn should_promote_demo_superadmin_if_previously_client() {
    let store = MemStore::new();
    let demoted = test_user(DEV_SUPERADMIN_EMAIL, UserRole::Client);
    store.with(|s| s.users.push(demoted));

    let usecase = DevLoginUseCase {
        users: store.user_repo(),
        restaurants: store.restaurant_repo(),
        jwt_secret: SECRET.to_owned(),
    };
    let session = usecase.execute(UserRole::Superadmin).await.unwrap();

    assert_eq!(session.user.role, UserRole::Superadmin);
    assert!(session.restaurant.is_none());
}
