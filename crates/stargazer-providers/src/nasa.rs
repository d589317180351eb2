//! NASA open data API client.
//!
//! One GET per call, JSON decoded straight into the typed payloads from
//! `stargazer_core::space`. No retries.
//! Docs: <https://api.nasa.gov>

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use stargazer_core::{
    config::NasaConfig,
    error::{FetchError, StargazerError},
    space::{Apod, MarsPhotos, NeoFeed},
    traits::SpaceApi,
};
use std::time::Duration;
use tracing::{debug, warn};

const USER_AGENT: &str = concat!("stargazer/", env!("CARGO_PKG_VERSION"));

/// Client for the three endpoints the bot serves.
pub struct NasaClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    rover: String,
    sol: u32,
}

impl NasaClient {
    /// Create from config values.
    pub fn from_config(cfg: &NasaConfig) -> Result<Self, StargazerError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| StargazerError::Config(format!("failed to build nasa client: {e}")))?;

        Ok(Self {
            client,
            base_url: cfg.base_url.trim_end_matches('/').to_string(),
            api_key: cfg.api_key.clone(),
            rover: cfg.rover.clone(),
            sol: cfg.sol,
        })
    }

    fn apod_request(&self, date: NaiveDate) -> reqwest::RequestBuilder {
        let date = date.format("%Y-%m-%d").to_string();
        self.client
            .get(format!("{}/planetary/apod", self.base_url))
            .query(&[("api_key", self.api_key.as_str()), ("date", date.as_str())])
    }

    fn neo_request(&self) -> reqwest::RequestBuilder {
        self.client
            .get(format!("{}/neo/rest/v1/feed", self.base_url))
            .query(&[("api_key", self.api_key.as_str())])
    }

    fn mars_request(&self) -> reqwest::RequestBuilder {
        let sol = self.sol.to_string();
        self.client
            .get(format!(
                "{}/mars-photos/api/v1/rovers/{}/photos",
                self.base_url, self.rover
            ))
            .query(&[
                ("sol", sol.as_str()),
                ("api_key", self.api_key.as_str()),
            ])
    }

    /// Send a prepared GET and decode the body.
    async fn get_json<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        endpoint: &str,
    ) -> Result<T, FetchError> {
        debug!("nasa: GET {endpoint}");

        // reqwest errors carry the URL, and with it the api_key query.
        let resp = request.send().await.map_err(|e| {
            let e = e.without_url();
            warn!("nasa {endpoint}: request failed: {e}");
            FetchError::Transport(e.to_string())
        })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            let e = e.without_url();
            warn!("nasa {endpoint}: failed to read body: {e}");
            FetchError::Transport(e.to_string())
        })?;

        decode_body(status, &body).inspect_err(|e| warn!("nasa {endpoint}: {e}"))
    }
}

/// Map a raw response to a payload: 200 with a well-formed body, or a
/// [`FetchError`] for everything else.
pub(crate) fn decode_body<T: DeserializeOwned>(
    status: StatusCode,
    body: &str,
) -> Result<T, FetchError> {
    if status != StatusCode::OK {
        return Err(FetchError::Status(status.as_u16()));
    }
    serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))
}

#[async_trait]
impl SpaceApi for NasaClient {
    async fn apod(&self, date: NaiveDate) -> Result<Apod, FetchError> {
        self.get_json(self.apod_request(date), "apod").await
    }

    async fn neo_feed(&self) -> Result<NeoFeed, FetchError> {
        self.get_json(self.neo_request(), "neo feed").await
    }

    async fn mars_photos(&self) -> Result<MarsPhotos, FetchError> {
        self.get_json(self.mars_request(), "mars photos").await
    }
}
