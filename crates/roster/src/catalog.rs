//! Filtering and ordering of the fighter list as presented in the catalog UI.
//!
//! The weight-class filter here is an exact, case-sensitive match. The API's
//! weight-class lookup in [`crate::repository::FighterRepository`] ignores
//! case. The two are deliberately left as they are.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::models::Fighter;

/// Weight-class selection meaning "no filter".
pub const ALL_WEIGHT_CLASSES: &str = "All";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SortOption {
    Name,
    #[default]
    FormRating,
    Wins,
}

impl SortOption {
    /// Options in the order they are offered in the sort selector.
    pub const ALL: [SortOption; 3] = [Self::FormRating, Self::Name, Self::Wins];

    pub fn as_param(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::FormRating => "formRating",
            Self::Wins => "wins",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name (A-Z)",
            Self::FormRating => "Form Rating",
            Self::Wins => "Total Wins",
        }
    }

    fn compare(&self, a: &Fighter, b: &Fighter) -> Ordering {
        match self {
            Self::Name => compare_names(&a.name, &b.name),
            Self::FormRating => b.current_form_rating.total_cmp(&a.current_form_rating),
            Self::Wins => b.record.wins.cmp(&a.record.wins),
        }
    }
}

/// UI state driving the catalog list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogQuery {
    #[serde(default = "default_weight_class")]
    pub weight_class: String,
    #[serde(default)]
    pub sort_by: SortOption,
}

fn default_weight_class() -> String {
    ALL_WEIGHT_CLASSES.to_string()
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self {
            weight_class: default_weight_class(),
            sort_by: SortOption::default(),
        }
    }
}

impl CatalogQuery {
    pub fn new(weight_class: impl Into<String>, sort_by: SortOption) -> Self {
        Self {
            weight_class: weight_class.into(),
            sort_by,
        }
    }

    pub fn is_unfiltered(&self) -> bool {
        self.weight_class == ALL_WEIGHT_CLASSES
    }

    /// Filter then sort. Always a full pass over `fighters`; the sort is
    /// stable so equal keys keep dataset order.
    pub fn apply<'a>(&self, fighters: &'a [Fighter]) -> Vec<&'a Fighter> {
        let mut selected: Vec<&Fighter> = fighters
            .iter()
            .filter(|fighter| self.is_unfiltered() || fighter.weight_class == self.weight_class)
            .collect();

        selected.sort_by(|a, b| self.sort_by.compare(a, b));
        selected
    }
}

/// `"All"` followed by each distinct weight class in first-appearance order.
pub fn weight_classes(fighters: &[Fighter]) -> Vec<&str> {
    let mut classes = vec![ALL_WEIGHT_CLASSES];
    for fighter in fighters {
        if !classes.contains(&fighter.weight_class.as_str()) {
            classes.push(&fighter.weight_class);
        }
    }
    classes
}

// Approximates a locale collation: case folds first, raw order breaks ties.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
