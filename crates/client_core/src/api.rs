use std::{collections::HashMap, fs};

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use shared::domain::{Profile, ProfileId};
use url::Url;

pub const DEFAULT_API_URL: &str = "http://localhost:3000";

const SETTINGS_FILE: &str = "meinbundestag.toml";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub api_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.into(),
        }
    }
}

/// Resolves the backend endpoint: defaults, then `meinbundestag.toml` in
/// the working directory, then environment variables.
pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(SETTINGS_FILE) {
        if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(&raw) {
            if let Some(v) = file_cfg.get("api_url") {
                settings.api_url = v.clone();
            }
        }
    }

    if let Ok(v) = std::env::var("API_URL") {
        settings.api_url = v;
    }
    if let Ok(v) = std::env::var("APP__API_URL") {
        settings.api_url = v;
    }

    settings
}

/// Read access to the deputies backend.
#[async_trait]
pub trait DeputiesApi: Send + Sync {
    /// Fetches the display names of all deputies.
    async fn fetch_deputies(&self) -> Result<Vec<String>>;

    /// Fetches a single profile by normalized name. A backend `null`
    /// response maps to `Ok(None)`.
    async fn fetch_profile(&self, id: &ProfileId) -> Result<Option<Profile>>;
}

pub struct HttpApi {
    http: Client,
    api_url: String,
}

impl HttpApi {
    pub fn new(api_url: impl Into<String>) -> Result<Self> {
        let api_url = api_url.into();
        let parsed = Url::parse(&api_url)
            .with_context(|| format!("invalid api url '{api_url}'"))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(anyhow!("api url must start with http:// or https://"));
        }

        Ok(Self {
            http: Client::new(),
            api_url: api_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl DeputiesApi for HttpApi {
    async fn fetch_deputies(&self) -> Result<Vec<String>> {
        let names: Vec<String> = self
            .http
            .get(format!("{}/deputies", self.api_url))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
            .context("malformed deputies response")?;
        Ok(names)
    }

    async fn fetch_profile(&self, id: &ProfileId) -> Result<Option<Profile>> {
        let profile: Option<Profile> = self
            .http
            .get(format!("{}/profile/{}", self.api_url, id))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
            .with_context(|| format!("malformed profile response for '{id}'"))?;

        Ok(profile.map(|mut profile| {
            profile.id = id.clone();
            profile
        }))
    }
}
