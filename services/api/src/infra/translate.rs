//! HTTP machine-translation client.
//!
//! The request timeout bounds how long dish creation can wait on the
//! translation service; callers substitute tagged fallbacks on error.

use std::time::Duration;

use anyhow::{Context as _, anyhow};
use serde::Deserialize;
use serde_json::json;

use carta_domain::translation::TargetLanguage;

use crate::domain::repository::TranslationService;

const TRANSLATE_TIMEOUT: Duration = Duration::from_secs(4);

/// Source language of all authored menu text.
const SOURCE_LANG: &str = "es";

#[derive(Clone)]
pub struct HttpTranslationClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTranslationClient {
    pub fn new(endpoint: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(TRANSLATE_TIMEOUT)
            .build()
            .expect("failed to build HTTP client");
        Self { client, endpoint }
    }
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    #[serde(rename = "translatedText")]
    translated_text: Option<String>,
}

impl TranslationService for HttpTranslationClient {
    async fn translate(
        &self,
        text: &str,
        target: TargetLanguage,
    ) -> Result<String, anyhow::Error> {
        let url = format!("{}/translate", self.endpoint.trim_end_matches('/'));
        let body = json!({
            "q": text,
            "source": SOURCE_LANG,
            "target": target.code(),
            "format": "text",
        });

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .context("translation request")?
            .error_for_status()
            .context("translation response status")?;

        let parsed: TranslateResponse = response
            .json()
            .await
            .context("translation response body")?;

        parsed
            .translated_text
            .filter(|t| !t.is_empty())
            .ok_or_else(|| anyhow!("translation response missing translatedText"))
    }
}
