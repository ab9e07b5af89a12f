use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::OptionSet;
use crate::errors::InvalidInputError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BreedCategory {
    Small,
    Medium,
    Large,
    Giant,
    Brachycephalic,
}

impl OptionSet for BreedCategory {
    const ALL: &'static [Self] =
        &[Self::Small, Self::Medium, Self::Large, Self::Giant, Self::Brachycephalic];
    const EXPECTED: &'static str = "small|medium|large|giant|brachycephalic";

    fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::Giant => "giant",
            Self::Brachycephalic => "brachycephalic",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Location {
    Urban,
    Suburban,
    Rural,
}

impl OptionSet for Location {
    const ALL: &'static [Self] = &[Self::Urban, Self::Suburban, Self::Rural];
    const EXPECTED: &'static str = "urban|suburban|rural";

    fn as_str(self) -> &'static str {
        match self {
            Self::Urban => "urban",
            Self::Suburban => "suburban",
            Self::Rural => "rural",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CoverageLevel {
    Accident,
    AccidentIllness,
    Comprehensive,
}

impl CoverageLevel {
    pub fn label(self) -> &'static str {
        match self {
            Self::Accident => "Accident Only",
            Self::AccidentIllness => "Accident + Illness",
            Self::Comprehensive => "Accident + Illness + Wellness",
        }
    }
}

impl OptionSet for CoverageLevel {
    const ALL: &'static [Self] = &[Self::Accident, Self::AccidentIllness, Self::Comprehensive];
    const EXPECTED: &'static str = "accident|accident-illness|comprehensive";

    fn as_str(self) -> &'static str {
        match self {
            Self::Accident => "accident",
            Self::AccidentIllness => "accident-illness",
            Self::Comprehensive => "comprehensive",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum Deductible {
    Usd100,
    Usd250,
    Usd500,
    Usd1000,
}

impl Deductible {
    pub fn amount(self) -> u32 {
        match self {
            Self::Usd100 => 100,
            Self::Usd250 => 250,
            Self::Usd500 => 500,
            Self::Usd1000 => 1000,
        }
    }
}

impl From<Deductible> for u32 {
    fn from(value: Deductible) -> Self {
        value.amount()
    }
}

impl TryFrom<u32> for Deductible {
    type Error = InvalidInputError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::ALL.iter().copied().find(|option| option.amount() == value).ok_or_else(|| {
            InvalidInputError::UnknownOption {
                field: "deductible",
                value: value.to_string(),
                expected: Self::EXPECTED,
            }
        })
    }
}

impl OptionSet for Deductible {
    const ALL: &'static [Self] = &[Self::Usd100, Self::Usd250, Self::Usd500, Self::Usd1000];
    const EXPECTED: &'static str = "100|250|500|1000";

    fn as_str(self) -> &'static str {
        match self {
            Self::Usd100 => "100",
            Self::Usd250 => "250",
            Self::Usd500 => "500",
            Self::Usd1000 => "1000",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum Reimbursement {
    Pct70,
    Pct80,
    Pct90,
}

impl Reimbursement {
    pub fn percent(self) -> u32 {
        match self {
            Self::Pct70 => 70,
            Self::Pct80 => 80,
            Self::Pct90 => 90,
        }
    }
}

impl From<Reimbursement> for u32 {
    fn from(value: Reimbursement) -> Self {
        value.percent()
    }
}

impl TryFrom<u32> for Reimbursement {
    type Error = InvalidInputError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::ALL.iter().copied().find(|option| option.percent() == value).ok_or_else(|| {
            InvalidInputError::UnknownOption {
                field: "reimbursement_pct",
                value: value.to_string(),
                expected: Self::EXPECTED,
            }
        })
    }
}

impl OptionSet for Reimbursement {
    const ALL: &'static [Self] = &[Self::Pct70, Self::Pct80, Self::Pct90];
    const EXPECTED: &'static str = "70|80|90";

    fn as_str(self) -> &'static str {
        match self {
            Self::Pct70 => "70",
            Self::Pct80 => "80",
            Self::Pct90 => "90",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsuranceInput {
    pub age_weeks: u32,
    pub breed: BreedCategory,
    pub location: Location,
    pub coverage: CoverageLevel,
    pub deductible: Deductible,
    pub reimbursement: Reimbursement,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanTier {
    Basic,
    Standard,
    Premium,
}

impl PlanTier {
    pub fn name(self) -> &'static str {
        match self {
            Self::Basic => "Basic Plan",
            Self::Standard => "Standard Plan",
            Self::Premium => "Premium Plan",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsurancePlan {
    pub tier: PlanTier,
    pub name: String,
    pub monthly_premium: Decimal,
    pub annual_cost: Decimal,
    pub deductible: u32,
    pub reimbursement_pct: u32,
    pub coverage_label: String,
}

/// One multiplicative step of the premium calculation, in application order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PremiumFactor {
    pub stage: String,
    pub detail: String,
    pub multiplier: Decimal,
    pub premium: Decimal,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsuranceResult {
    pub plans: Vec<InsurancePlan>,
    pub breed_risks: Vec<String>,
    pub potential_savings: Decimal,
    pub savings_label: String,
    pub recommendation: String,
    pub recommended_plan: PlanTier,
    pub premium_trace: Vec<PremiumFactor>,
}
