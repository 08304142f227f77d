use crate::error::{Result, RosterError};
use crate::models::Fighter;

pub struct FighterRepository<'a> {
    fighters: &'a [Fighter],
}

impl<'a> FighterRepository<'a> {
    pub fn new(fighters: &'a [Fighter]) -> Self {
        Self { fighters }
    }

    /// List all fighters in dataset order
    pub fn list(&self) -> &'a [Fighter] {
        self.fighters
    }

    /// Find fighter by id
    pub fn find_by_id(&self, id: u32) -> Result<&'a Fighter> {
        self.fighters
            .iter()
            .find(|fighter| fighter.id == id)
            .ok_or(RosterError::FighterNotFound(id))
    }

    /// Find fighter by an id taken verbatim from a request path. Anything that
    /// is not a non-negative integer names no fighter.
    pub fn find_by_raw_id(&self, raw_id: &str) -> Result<&'a Fighter> {
        let id = raw_id
            .parse::<u32>()
            .map_err(|_| RosterError::InvalidId(raw_id.to_string()))?;
        self.find_by_id(id)
    }

    /// Find fighters whose weight class matches `label`, ignoring case.
    /// An unknown label yields an empty list.
    pub fn find_by_weight_class(&self, label: &str) -> Vec<&'a Fighter> {
        let label = label.to_lowercase();

        self.fighters
            .iter()
            .filter(|fighter| fighter.weight_class.to_lowercase() == label)
            .collect()
    }
}
