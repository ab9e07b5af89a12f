use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::OptionSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lifestyle {
    Indoor,
    Outdoor,
    Social,
    Active,
}

impl OptionSet for Lifestyle {
    const ALL: &'static [Self] = &[Self::Indoor, Self::Outdoor, Self::Social, Self::Active];
    const EXPECTED: &'static str = "indoor|outdoor|social|active";

    fn as_str(self) -> &'static str {
        match self {
            Self::Indoor => "indoor",
            Self::Outdoor => "outdoor",
            Self::Social => "social",
            Self::Active => "active",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    Northeast,
    Southeast,
    Midwest,
    Southwest,
    West,
}

impl OptionSet for Region {
    const ALL: &'static [Self] =
        &[Self::Northeast, Self::Southeast, Self::Midwest, Self::Southwest, Self::West];
    const EXPECTED: &'static str = "northeast|southeast|midwest|southwest|west";

    fn as_str(self) -> &'static str {
        match self {
            Self::Northeast => "northeast",
            Self::Southeast => "southeast",
            Self::Midwest => "midwest",
            Self::Southwest => "southwest",
            Self::West => "west",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VaccineType {
    Core,
    NonCore,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaccinationInput {
    pub birth_date: NaiveDate,
    pub lifestyle: Lifestyle,
    pub region: Region,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaccineAppointment {
    pub week: u32,
    pub date: NaiveDate,
    pub vaccines: Vec<String>,
    pub vaccine_type: VaccineType,
    pub cost: Decimal,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status", content = "date")]
pub enum NextAppointment {
    Scheduled(NaiveDate),
    Complete,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaccinationResult {
    pub schedule: Vec<VaccineAppointment>,
    pub total_cost: Decimal,
    pub next_appointment: NextAppointment,
}
