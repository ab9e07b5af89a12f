use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::OptionSet;

/// Training goals. Declaration order is the order goals are laid onto the
/// timeline, independent of the order they were selected in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingGoal {
    Potty,
    Crate,
    Basic,
    Leash,
    Socialization,
    Bite,
}

impl TrainingGoal {
    pub fn label(self) -> &'static str {
        match self {
            Self::Potty => "Potty Training",
            Self::Crate => "Crate Training",
            Self::Basic => "Basic Commands (Sit, Stay, Come)",
            Self::Leash => "Leash Training",
            Self::Socialization => "Socialization",
            Self::Bite => "Bite Inhibition",
        }
    }
}

impl OptionSet for TrainingGoal {
    const ALL: &'static [Self] =
        &[Self::Potty, Self::Crate, Self::Basic, Self::Leash, Self::Socialization, Self::Bite];
    const EXPECTED: &'static str = "potty|crate|basic|leash|socialization|bite";

    fn as_str(self) -> &'static str {
        match self {
            Self::Potty => "potty",
            Self::Crate => "crate",
            Self::Basic => "basic",
            Self::Leash => "leash",
            Self::Socialization => "socialization",
            Self::Bite => "bite",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrainingInput {
    pub current_age_weeks: u32,
    pub weekly_hours: f64,
    pub has_experience: bool,
    pub goals: BTreeSet<TrainingGoal>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingMilestone {
    /// Weeks from the start of training.
    pub week: u32,
    pub puppy_age_weeks: u32,
    pub goal: TrainingGoal,
    pub skill: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingResult {
    pub milestones: Vec<TrainingMilestone>,
    pub total_weeks: u32,
    pub daily_minutes: u32,
    pub completion_date: NaiveDate,
}
