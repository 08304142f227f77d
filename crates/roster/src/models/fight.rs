use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Fight {
    pub opponent: String,
    pub result: FightResult,
    pub method: String,
    #[validate(range(min = 1, message = "Round must be at least 1"))]
    pub round: u32,
    pub date: NaiveDate,
    pub event: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum FightResult {
    Win,
    Loss,
    Draw,
    #[serde(rename = "NC")]
    NoContest,
}

impl FightResult {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Win => "Win",
            Self::Loss => "Loss",
            Self::Draw => "Draw",
            Self::NoContest => "NC",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_wire_names() {
        assert_eq!(serde_json::to_string(&FightResult::NoContest).unwrap(), "\"NC\"");
        assert_eq!(serde_json::to_string(&FightResult::Win).unwrap(), "\"Win\"");
    }

    #[test]
    fn test_unknown_result_is_rejected() {
        let parsed = serde_json::from_str::<FightResult>("\"DQ\"");
        assert!(parsed.is_err());
    }

    #[test]
    fn test_round_zero_fails_validation() {
        let fight = Fight {
            opponent: "Someone".to_string(),
            result: FightResult::Win,
            method: "KO/TKO".to_string(),
            round: 0,
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            event: "UFC 300".to_string(),
        };
        assert!(fight.validate().is_err());
    }
}
