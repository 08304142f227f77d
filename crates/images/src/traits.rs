use crate::{Result, models::PlayerSearchResponse};

/// A player search service queried by display name.
#[async_trait::async_trait]
pub trait PlayerSearch: Send + Sync {
    async fn search_players(&self, name: &str) -> Result<PlayerSearchResponse>;
}
