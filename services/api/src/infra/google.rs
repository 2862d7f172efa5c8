//! Google identity-token verification over the tokeninfo endpoint.

use std::time::Duration;

use anyhow::anyhow;
use serde::Deserialize;

use crate::domain::repository::IdentityVerifier;
use crate::domain::types::VerifiedIdentity;
use crate::error::ApiServiceError;

const TOKENINFO_URL: &str = "https://oauth2.googleapis.com/tokeninfo";
const VERIFY_TIMEOUT: Duration = Duration::from_secs(10);

/// Verifies Google ID tokens and checks the audience against the configured
/// client id. Without a client id every verification is rejected.
#[derive(Clone)]
pub struct GoogleTokenVerifier {
    client: reqwest::Client,
    client_id: Option<String>,
}

impl GoogleTokenVerifier {
    pub fn new(client_id: Option<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(VERIFY_TIMEOUT)
            .build()
            .expect("failed to build HTTP client");
        Self { client, client_id }
    }
}

/// Claims subset returned by the tokeninfo endpoint.
#[derive(Debug, Deserialize)]
struct TokenInfoClaims {
    aud: String,
    email: Option<String>,
    name: Option<String>,
    picture: Option<String>,
}

impl IdentityVerifier for GoogleTokenVerifier {
    async fn verify(&self, credential: &str) -> Result<VerifiedIdentity, ApiServiceError> {
        let client_id = self.client_id.as_deref().ok_or_else(|| {
            ApiServiceError::IdentityVerification(anyhow!("GOOGLE_CLIENT_ID not configured"))
        })?;

        let response = self
            .client
            .get(TOKENINFO_URL)
            .query(&[("id_token", credential)])
            .send()
            .await
            .map_err(|e| ApiServiceError::IdentityVerification(anyhow!(e)))?;

        if !response.status().is_success() {
            return Err(ApiServiceError::IdentityVerification(anyhow!(
                "tokeninfo rejected the credential ({})",
                response.status()
            )));
        }

        let claims: TokenInfoClaims = response
            .json()
            .await
            .map_err(|e| ApiServiceError::IdentityVerification(anyhow!(e)))?;

        if claims.aud != client_id {
            return Err(ApiServiceError::IdentityVerification(anyhow!(
                "token audience does not match the configured client id"
            )));
        }

        Ok(VerifiedIdentity {
            email: claims.email,
            name: claims.name,
            picture: claims.picture,
        })
    }
}
