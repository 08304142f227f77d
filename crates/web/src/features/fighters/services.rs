use roster::{Roster, error::Result, models::Fighter, repository::FighterRepository};

/// List all fighters
pub fn list_fighters(roster: &Roster) -> &[Fighter] {
    FighterRepository::new(roster.fighters()).list()
}

/// Get fighter by the id segment of the request path
pub fn get_fighter<'a>(roster: &'a Roster, raw_id: &str) -> Result<&'a Fighter> {
    FighterRepository::new(roster.fighters()).find_by_raw_id(raw_id)
}

/// List fighters in a weight class, ignoring case
pub fn list_fighters_by_weight_class<'a>(roster: &'a Roster, weight_class: &str) -> Vec<&'a Fighter> {
    let fighters = FighterRepository::new(roster.fighters()).find_by_weight_class(weight_class);
    tracing::debug!(
        "Weight class '{}' matched {} fighter(s)",
        weight_class,
        fighters.len()
    );
    fighters
}
