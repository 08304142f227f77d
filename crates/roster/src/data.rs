use std::collections::HashSet;
use std::sync::Arc;

use validator::Validate;

use crate::error::{Result, RosterError};
use crate::models::Fighter;

const EMBEDDED_FIGHTERS: &str = include_str!("../data/fighters.json");

/// The immutable fighter dataset.
///
/// Loaded once at startup and shared by cloning; every clone points to the
/// same records. There is no way to mutate the roster after it is built.
#[derive(Debug, Clone)]
pub struct Roster {
    fighters: Arc<[Fighter]>,
}

impl Roster {
    /// Parse and validate the dataset compiled into the binary.
    pub fn load() -> Result<Self> {
        Self::from_json(EMBEDDED_FIGHTERS)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let fighters: Vec<Fighter> = serde_json::from_str(json)?;
        Self::new(fighters)
    }

    /// Build a roster from already-parsed records, enforcing the model
    /// constraints and id uniqueness.
    pub fn new(fighters: Vec<Fighter>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(fighters.len());
        for fighter in &fighters {
            fighter.validate()?;
            if !seen.insert(fighter.id) {
                return Err(RosterError::DuplicateId(fighter.id));
            }
        }

        Ok(Self {
            fighters: fighters.into(),
        })
    }

    pub fn fighters(&self) -> &[Fighter] {
        &self.fighters
    }

    pub fn len(&self) -> usize {
        self.fighters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fighters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_dataset_loads() {
        let roster = Roster::load().expect("embedded dataset must be valid");
        assert!(!roster.is_empty());
        assert!(roster.fighters().iter().any(|f| f.id == 1));
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let roster = Roster::load().unwrap();
        let mut fighters = roster.fighters().to_vec();
        let mut copy = fighters[0].clone();
        copy.name = "Someone Else".to_string();
        fighters.push(copy);

        let err = Roster::new(fighters).unwrap_err();
        assert!(matches!(err, RosterError::DuplicateId(1)));
    }

    #[test]
    fn test_out_of_range_form_rating_is_rejected() {
        let roster = Roster::load().unwrap();
        let mut fighters = roster.fighters().to_vec();
        fighters[0].current_form_rating = 11.5;

        let err = Roster::new(fighters).unwrap_err();
        assert!(matches!(err, RosterError::Validation(_)));
    }

    #[test]
    fn test_unknown_fight_result_fails_to_parse() {
        let json = EMBEDDED_FIGHTERS.replacen("\"result\": \"Win\"", "\"result\": \"Forfeit\"", 1);
        let err = Roster::from_json(&json).unwrap_err();
        assert!(matches!(err, RosterError::Dataset(_)));
    }

    #[test]
    fn test_clones_share_records() {
        let roster = Roster::load().unwrap();
        let other = roster.clone();
        assert!(std::ptr::eq(roster.fighters(), other.fighters()));
    }
}
