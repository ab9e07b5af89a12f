use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{ActivityLevel, OptionSet};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeUnit {
    Weeks,
    Months,
}

impl OptionSet for AgeUnit {
    const ALL: &'static [Self] = &[Self::Weeks, Self::Months];
    const EXPECTED: &'static str = "weeks|months";

    fn as_str(self) -> &'static str {
        match self {
            Self::Weeks => "weeks",
            Self::Months => "months",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PuppyAge {
    pub value: f64,
    pub unit: AgeUnit,
}

impl PuppyAge {
    pub fn weeks(value: f64) -> Self {
        Self { value, unit: AgeUnit::Weeks }
    }

    pub fn months(value: f64) -> Self {
        Self { value, unit: AgeUnit::Months }
    }

    /// A month counts as four weeks.
    pub fn in_weeks(&self) -> f64 {
        match self.unit {
            AgeUnit::Weeks => self.value,
            AgeUnit::Months => self.value * 4.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BreedSize {
    Small,
    Medium,
    Large,
    Giant,
}

/// Adult-weight estimation constants for one breed size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GrowthProfile {
    /// Below this age, adult weight is extrapolated from the current weight.
    pub weaning_threshold_weeks: f64,
    pub adult_weight_factor: f64,
    /// Flat multiplier applied once the puppy is past the threshold.
    pub mature_multiplier: f64,
}

impl BreedSize {
    pub fn growth_profile(self) -> GrowthProfile {
        let (weaning_threshold_weeks, adult_weight_factor, mature_multiplier) = match self {
            Self::Small => (16.0, 12.0, 1.2),
            Self::Medium => (20.0, 30.0, 1.3),
            Self::Large => (24.0, 60.0, 1.4),
            Self::Giant => (28.0, 100.0, 1.5),
        };
        GrowthProfile { weaning_threshold_weeks, adult_weight_factor, mature_multiplier }
    }
}

impl OptionSet for BreedSize {
    const ALL: &'static [Self] = &[Self::Small, Self::Medium, Self::Large, Self::Giant];
    const EXPECTED: &'static str = "small|medium|large|giant";

    fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::Giant => "giant",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodType {
    Dry,
    Wet,
    Raw,
}

impl FoodType {
    pub fn calories_per_cup(self) -> f64 {
        match self {
            Self::Dry => 350.0,
            Self::Wet => 250.0,
            Self::Raw => 400.0,
        }
    }
}

impl OptionSet for FoodType {
    const ALL: &'static [Self] = &[Self::Dry, Self::Wet, Self::Raw];
    const EXPECTED: &'static str = "dry|wet|raw";

    fn as_str(self) -> &'static str {
        match self {
            Self::Dry => "dry",
            Self::Wet => "wet",
            Self::Raw => "raw",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeedingInput {
    pub age: PuppyAge,
    pub weight_lbs: f64,
    pub breed_size: BreedSize,
    pub activity_level: ActivityLevel,
    pub food_type: FoodType,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedingResult {
    pub daily_amount_cups: Decimal,
    pub meals_per_day: u32,
    pub amount_per_meal_cups: Decimal,
    pub calories_per_day: u32,
    pub expected_adult_weight_lbs: u32,
    pub suggested_meal_times: Vec<String>,
}
