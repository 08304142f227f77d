use anyhow::{Context, Result};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_API_URL: &str = "http://localhost:3001";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Base URL of the fighter API the pages are rendered from.
    pub api_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port = match var("PORT") {
            Some(raw) => raw.parse().context("PORT must be a number")?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host: var("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            api_url: var("API_URL")
                .filter(|url| !url.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
