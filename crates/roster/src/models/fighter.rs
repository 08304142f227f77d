use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::Fight;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Fighter {
    #[validate(range(min = 1, message = "Fighter id must be positive"))]
    pub id: u32,
    #[validate(length(min = 1, message = "Fighter name is required"))]
    pub name: String,
    pub nickname: String,
    pub image: String,
    #[validate(length(min = 1, message = "Weight class is required"))]
    pub weight_class: String,
    #[validate(nested)]
    pub record: FightRecord,
    #[validate(range(min = 0.0, max = 10.0, message = "Form rating must be between 0 and 10"))]
    pub current_form_rating: f64,
    pub nationality: String,
    pub age: u32,
    pub height: String,
    pub reach: String,
    pub stance: String,
    #[validate(nested)]
    pub recent_fights: Vec<Fight>,
    #[validate(nested)]
    pub stats: FighterStats,
}

/// Professional record as wins, losses and draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct FightRecord {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FighterStats {
    #[validate(range(min = 0.0))]
    pub strikes_landed_per_minute: f64,
    #[validate(range(min = 0.0, max = 100.0, message = "Accuracy is a percentage"))]
    pub striking_accuracy: f64,
    #[validate(range(min = 0.0))]
    pub takedown_average: f64,
    #[validate(range(min = 0.0, max = 100.0, message = "Accuracy is a percentage"))]
    pub takedown_accuracy: f64,
    #[validate(range(min = 0.0))]
    pub submission_average: f64,
}

/// Visual tier of a form rating, as shown on the rating badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormTier {
    Elite,
    Strong,
    Standard,
}

impl FormTier {
    pub fn from_rating(rating: f64) -> Self {
        if rating >= 9.0 {
            Self::Elite
        } else if rating >= 8.0 {
            Self::Strong
        } else {
            Self::Standard
        }
    }

    pub fn as_class(&self) -> &'static str {
        match self {
            Self::Elite => "form-elite",
            Self::Strong => "form-strong",
            Self::Standard => "form-standard",
        }
    }
}

impl Fighter {
    pub fn form_tier(&self) -> FormTier {
        FormTier::from_rating(self.current_form_rating)
    }
}

impl std::fmt::Display for FightRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}-{}", self.wins, self.losses, self.draws)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_tier_boundaries() {
        assert_eq!(FormTier::from_rating(9.0), FormTier::Elite);
        assert_eq!(FormTier::from_rating(8.99), FormTier::Strong);
        assert_eq!(FormTier::from_rating(8.0), FormTier::Strong);
        assert_eq!(FormTier::from_rating(7.9), FormTier::Standard);
        assert_eq!(FormTier::from_rating(0.0), FormTier::Standard);
    }

    #[test]
    fn test_record_display() {
        let record = FightRecord {
            wins: 26,
            losses: 1,
            draws: 0,
        };
        assert_eq!(record.to_string(), "26-1-0");
    }
}
