use std::time::Duration;

use roster::models::Fighter;
use tracing::{info, warn};

use crate::{models::ImageSource, traits::PlayerSearch};

/// Pause between two consecutive searches.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Found(ImageSource),
    NotFound,
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct FighterImage {
    pub fighter_id: u32,
    pub name: String,
    pub outcome: LookupOutcome,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LookupSummary {
    pub found: usize,
    pub not_found: usize,
    pub failed: usize,
}

impl LookupSummary {
    pub fn from_results(results: &[FighterImage]) -> Self {
        results
            .iter()
            .fold(Self::default(), |mut summary, result| {
                match result.outcome {
                    LookupOutcome::Found(_) => summary.found += 1,
                    LookupOutcome::NotFound => summary.not_found += 1,
                    LookupOutcome::Failed(_) => summary.failed += 1,
                }
                summary
            })
    }
}

/// Looks up one image per fighter, strictly one request at a time.
pub struct ImageLookup<S> {
    search: S,
    delay: Duration,
}

impl<S: PlayerSearch> ImageLookup<S> {
    pub fn new(search: S, delay: Duration) -> Self {
        Self { search, delay }
    }

    pub async fn lookup(&self, name: &str) -> LookupOutcome {
        match self.search.search_players(name).await {
            Ok(response) => match response.best_image() {
                Some(image) => LookupOutcome::Found(image),
                None => LookupOutcome::NotFound,
            },
            Err(e) => LookupOutcome::Failed(e.to_string()),
        }
    }

    /// Walk the fighters in order. A failed search is logged and the run
    /// moves on to the next fighter.
    pub async fn run(&self, fighters: &[Fighter]) -> Vec<FighterImage> {
        let mut results = Vec::with_capacity(fighters.len());

        for (idx, fighter) in fighters.iter().enumerate() {
            if idx > 0 && !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }

            info!("[{}/{}] Searching for {}...", idx + 1, fighters.len(), fighter.name);
            let outcome = self.lookup(&fighter.name).await;

            match &outcome {
                LookupOutcome::Found(image) => {
                    info!("  ✓ Found {} image: {}", image.kind(), image.url());
                    info!("    Update fighter {} image to: \"{}\"", fighter.id, image.url());
                }
                LookupOutcome::NotFound => info!("  ✗ No image found"),
                LookupOutcome::Failed(reason) => {
                    warn!("  ✗ Error fetching image for {}: {}", fighter.name, reason)
                }
            }

            results.push(FighterImage {
                fighter_id: fighter.id,
                name: fighter.name.clone(),
                outcome,
            });
        }

        results
    }
}
