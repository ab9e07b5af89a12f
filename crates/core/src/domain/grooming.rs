use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{ActivityLevel, OptionSet};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoatType {
    Straight,
    Wavy,
    Curly,
    Wire,
    Double,
}

impl OptionSet for CoatType {
    const ALL: &'static [Self] =
        &[Self::Straight, Self::Wavy, Self::Curly, Self::Wire, Self::Double];
    const EXPECTED: &'static str = "straight|wavy|curly|wire|double";

    fn as_str(self) -> &'static str {
        match self {
            Self::Straight => "straight",
            Self::Wavy => "wavy",
            Self::Curly => "curly",
            Self::Wire => "wire",
            Self::Double => "double",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoatLength {
    Short,
    Medium,
    Long,
}

impl OptionSet for CoatLength {
    const ALL: &'static [Self] = &[Self::Short, Self::Medium, Self::Long];
    const EXPECTED: &'static str = "short|medium|long";

    fn as_str(self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Medium => "medium",
            Self::Long => "long",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
    Indoor,
    Mixed,
    Outdoor,
}

impl OptionSet for Environment {
    const ALL: &'static [Self] = &[Self::Indoor, Self::Mixed, Self::Outdoor];
    const EXPECTED: &'static str = "indoor|mixed|outdoor";

    fn as_str(self) -> &'static str {
        match self {
            Self::Indoor => "indoor",
            Self::Mixed => "mixed",
            Self::Outdoor => "outdoor",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroomingInput {
    pub coat_type: CoatType,
    pub coat_length: CoatLength,
    pub activity_level: ActivityLevel,
    pub environment: Environment,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroomingTask {
    pub task: String,
    pub frequency: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfessionalGrooming {
    pub frequency: String,
    pub description: String,
    pub cost_per_visit: Decimal,
    pub visits_per_year: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroomingResult {
    pub tasks: Vec<GroomingTask>,
    pub professional: ProfessionalGrooming,
    pub annual_cost: Decimal,
    pub recommendations: Vec<String>,
}
