use crate::{Result, models::PlayerSearchResponse, traits::PlayerSearch};

pub const DEFAULT_BASE_URL: &str = "https://www.thesportsdb.com/api/v1/json/3";

pub struct SportsDbClient {
    base_url: String,
    client: reqwest::Client,
}

impl SportsDbClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::builder()
                .user_agent(concat!("fighter-roster/", env!("CARGO_PKG_VERSION")))
                .build()?,
        })
    }

    pub fn search_url(&self) -> String {
        format!("{}/searchplayers.php", self.base_url)
    }
}

#[async_trait::async_trait]
impl PlayerSearch for SportsDbClient {
    async fn search_players(&self, name: &str) -> Result<PlayerSearchResponse> {
        let response = self
            .client
            .get(self.search_url())
            .query(&[("p", name)])
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        let data = serde_json::from_str::<PlayerSearchResponse>(&body)?;

        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_url() {
        let client = SportsDbClient::new("https://sports.test/api/v1/json/3/").unwrap();
        assert_eq!(
            client.search_url(),
            "https://sports.test/api/v1/json/3/searchplayers.php"
        );
    }
}
