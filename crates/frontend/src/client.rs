use roster::models::Fighter;

use crate::error::{Result, SiteError};

/// Reads fighters from the JSON API the pages are built on.
#[derive(Debug, Clone)]
pub struct FighterApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl FighterApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self {
            base_url,
            client: reqwest::Client::builder().build()?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn fetch_fighters(&self) -> Result<Vec<Fighter>> {
        let url = format!("{}/api/fighters", self.base_url);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            tracing::warn!("GET {} returned {}", url, response.status());
            return Err(SiteError::FetchFailed);
        }

        Ok(response.json::<Vec<Fighter>>().await?)
    }

    pub async fn fetch_fighter(&self, id: &str) -> Result<Fighter> {
        let url = format!("{}/api/fighters/{}", self.base_url, urlencoding::encode(id));

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            tracing::debug!("GET {} returned {}", url, response.status());
            return Err(SiteError::FighterNotFound);
        }

        Ok(response.json::<Fighter>().await?)
    }
}
