//! HTTP client for the public Guild Wars 2 API.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, info};
use url::Url;

use super::{Achievement, AchievementSource, SourceFuture};
use crate::config::SkillConfig;
use crate::error::SkillError;

/// Default API root.
pub const DEFAULT_API_BASE: &str = "https://api.guildwars2.com/";

/// Default timeout applied to every request.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// `/v2/achievements/daily` response; only the fractal category is used.
#[derive(Deserialize)]
struct DailyAchievements {
    fractals: Vec<DailyAchievement>,
}

/// A single entry in a daily category.
#[derive(Deserialize)]
struct DailyAchievement {
    id: u32,
}

/// Guild Wars 2 API client.
pub struct Gw2ApiClient {
    /// HTTP client for API requests.
    client: Client,
    /// API root, always ending in `/`.
    base_url: Url,
}

impl Gw2ApiClient {
    /// Creates a client rooted at `base_url` with a per-request timeout.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("mistlock-observatory/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: with_trailing_slash(base_url),
        })
    }

    /// Creates a client from resolved configuration.
    pub fn from_config(config: &SkillConfig) -> Result<Self> {
        Self::new(config.api_base.clone(), config.request_timeout)
    }

    /// Returns the API root this client talks to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, SkillError> {
        self.base_url
            .join(path)
            .map_err(|e| SkillError::RemoteUnavailable(format!("invalid endpoint {path}: {e}")))
    }

    async fn get_json<T: DeserializeOwned + Send>(&self, path: &str) -> Result<T> {
        let url = self.endpoint(path)?;

        info!(url = %url, "Sending request to Guild Wars 2 API");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| SkillError::RemoteUnavailable(format!("request to {url} failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_else(|e| {
                debug!("Failed to read error response body: {e}");
                String::new()
            });
            return Err(SkillError::RemoteUnavailable(format!(
                "HTTP {status} from {url}: {error_text}"
            ))
            .into());
        }

        let body = response.json::<T>().await.map_err(|e| {
            SkillError::RemoteUnavailable(format!("invalid response from {url}: {e}"))
        })?;

        debug!(url = %url, "Received Guild Wars 2 API response");

        Ok(body)
    }
}

impl AchievementSource for Gw2ApiClient {
    fn daily_fractal_ids(&self) -> SourceFuture<'_, Vec<u32>> {
        Box::pin(async move {
            let daily: DailyAchievements = self.get_json("v2/achievements/daily").await?;
            Ok(daily.fractals.into_iter().map(|a| a.id).collect())
        })
    }

    fn achievement(&self, id: u32) -> SourceFuture<'_, Achievement> {
        Box::pin(async move {
            let path = format!("v2/achievements/{id}");
            self.get_json(&path).await
        })
    }
}

/// `Url::join` replaces the last path segment unless the base ends in `/`.
fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}
