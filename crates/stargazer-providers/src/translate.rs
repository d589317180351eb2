//! Google Translate web endpoint.
//!
//! The keyless `translate_a/single` endpoint answers with a nested JSON
//! array: `[[["<translated>", "<source>", ...], ...], ...]`. Long inputs come
//! back split into several segments which are joined in order.

use async_trait::async_trait;
use stargazer_core::{config::TranslateConfig, error::StargazerError, traits::Translator};
use std::time::Duration;
use tracing::debug;

/// Translator backed by translate.googleapis.com.
pub struct GoogleTranslator {
    client: reqwest::Client,
    base_url: String,
}

impl GoogleTranslator {
    /// Create from config values.
    pub fn from_config(cfg: &TranslateConfig) -> Result<Self, StargazerError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .build()
            .map_err(|e| {
                StargazerError::Config(format!("failed to build translate client: {e}"))
            })?;

        Ok(Self {
            client,
            base_url: cfg.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn request(&self, text: &str, target_lang: &str) -> reqwest::RequestBuilder {
        self.client
            .get(format!("{}/translate_a/single", self.base_url))
            .query(&[
                ("client", "gtx"),
                ("sl", "auto"),
                ("tl", target_lang),
                ("dt", "t"),
                ("q", text),
            ])
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    fn name(&self) -> &str {
        "google"
    }

    async fn translate(&self, text: &str, target_lang: &str) -> Result<String, StargazerError> {
        if text.trim().is_empty() {
            return Ok(String::new());
        }

        debug!("translate: {} chars -> {target_lang}", text.chars().count());

        let resp = self
            .request(text, target_lang)
            .send()
            .await
            .map_err(|e| StargazerError::Translate(format!("request failed: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(StargazerError::Translate(format!(
                "translate returned {status}: {body}"
            )));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| StargazerError::Translate(format!("failed to read body: {e}")))?;

        parse_translation(&body)
    }
}

/// Join the translated segments of a `translate_a/single` response.
pub(crate) fn parse_translation(body: &str) -> Result<String, StargazerError> {
    let value: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| StargazerError::Translate(format!("failed to parse response: {e}")))?;

    let segments = value
        .get(0)
        .and_then(|s| s.as_array())
        .ok_or_else(|| StargazerError::Translate("response has no segments".into()))?;

    let translated: String = segments
        .iter()
        .filter_map(|seg| seg.get(0).and_then(|t| t.as_str()))
        .collect();

    if translated.is_empty() {
        return Err(StargazerError::Translate(
            "response has no translated text".into(),
        ));
    }

    Ok(translated)
}
