//! Raw form submissions. Every field arrives as optional text, exactly as a
//! browser form or command line hands it over, and is turned into a typed
//! calculator input or rejected with the first offending field.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::feeding::{AgeUnit, BreedSize, FeedingInput, FoodType, PuppyAge};
use crate::domain::grooming::{CoatLength, CoatType, Environment, GroomingInput};
use crate::domain::insurance::{
    BreedCategory, CoverageLevel, Deductible, InsuranceInput, Location, Reimbursement,
};
use crate::domain::training::{TrainingGoal, TrainingInput};
use crate::domain::vaccination::{Lifestyle, Region, VaccinationInput};
use crate::domain::{ActivityLevel, OptionSet};
use crate::errors::InvalidInputError;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedingForm {
    pub age: Option<String>,
    pub age_unit: Option<String>,
    pub weight_lbs: Option<String>,
    pub breed_size: Option<String>,
    pub activity_level: Option<String>,
    pub food_type: Option<String>,
}

impl FeedingForm {
    pub fn parse(&self) -> Result<FeedingInput, InvalidInputError> {
        let value = positive_number("age", &self.age)?;
        // The form preselects weeks.
        let unit = match self.age_unit.as_deref().map(str::trim) {
            None | Some("") => AgeUnit::Weeks,
            Some(raw) => option::<AgeUnit>("age_unit", raw)?,
        };

        Ok(FeedingInput {
            age: PuppyAge { value, unit },
            weight_lbs: positive_number("weight_lbs", &self.weight_lbs)?,
            breed_size: required_option::<BreedSize>("breed_size", &self.breed_size)?,
            activity_level: required_option::<ActivityLevel>(
                "activity_level",
                &self.activity_level,
            )?,
            food_type: required_option::<FoodType>("food_type", &self.food_type)?,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingForm {
    pub current_age_weeks: Option<String>,
    pub weekly_hours: Option<String>,
    pub has_experience: Option<String>,
    /// Goal identifiers; entries may also be comma-separated lists.
    #[serde(default)]
    pub goals: Vec<String>,
}

impl TrainingForm {
    pub fn parse(&self) -> Result<TrainingInput, InvalidInputError> {
        let current_age_weeks = positive_whole("current_age_weeks", &self.current_age_weeks)?;
        let weekly_hours = positive_number("weekly_hours", &self.weekly_hours)?;
        let has_experience = match self.has_experience.as_deref().map(str::trim) {
            None | Some("") => false,
            Some(raw) => flag("has_experience", raw)?,
        };

        let mut goals = BTreeSet::new();
        for raw in self.goals.iter().flat_map(|entry| entry.split(',')) {
            let raw = raw.trim();
            if raw.is_empty() {
                continue;
            }
            goals.insert(option::<TrainingGoal>("goals", raw)?);
        }
        if goals.is_empty() {
            return Err(InvalidInputError::NoGoalsSelected);
        }

        Ok(TrainingInput { current_age_weeks, weekly_hours, has_experience, goals })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaccinationForm {
    pub birth_date: Option<String>,
    pub lifestyle: Option<String>,
    pub region: Option<String>,
}

impl VaccinationForm {
    pub fn parse(&self) -> Result<VaccinationInput, InvalidInputError> {
        let raw = required("birth_date", &self.birth_date)?;
        let birth_date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
            InvalidInputError::NotADate { field: "birth_date", value: raw.to_string() }
        })?;

        Ok(VaccinationInput {
            birth_date,
            lifestyle: required_option::<Lifestyle>("lifestyle", &self.lifestyle)?,
            region: required_option::<Region>("region", &self.region)?,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroomingForm {
    pub coat_type: Option<String>,
    pub coat_length: Option<String>,
    pub activity_level: Option<String>,
    pub environment: Option<String>,
}

impl GroomingForm {
    pub fn parse(&self) -> Result<GroomingInput, InvalidInputError> {
        Ok(GroomingInput {
            coat_type: required_option::<CoatType>("coat_type", &self.coat_type)?,
            coat_length: required_option::<CoatLength>("coat_length", &self.coat_length)?,
            activity_level: required_option::<ActivityLevel>(
                "activity_level",
                &self.activity_level,
            )?,
            environment: required_option::<Environment>("environment", &self.environment)?,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsuranceForm {
    pub age_weeks: Option<String>,
    pub breed: Option<String>,
    pub location: Option<String>,
    pub coverage: Option<String>,
    pub deductible: Option<String>,
    pub reimbursement_pct: Option<String>,
}

impl InsuranceForm {
    pub fn parse(&self) -> Result<InsuranceInput, InvalidInputError> {
        Ok(InsuranceInput {
            age_weeks: positive_whole("age_weeks", &self.age_weeks)?,
            breed: required_option::<BreedCategory>("breed", &self.breed)?,
            location: required_option::<Location>("location", &self.location)?,
            coverage: required_option::<CoverageLevel>("coverage", &self.coverage)?,
            deductible: required_option::<Deductible>("deductible", &self.deductible)?,
            reimbursement: required_option::<Reimbursement>(
                "reimbursement_pct",
                &self.reimbursement_pct,
            )?,
        })
    }
}

fn required<'a>(
    field: &'static str,
    value: &'a Option<String>,
) -> Result<&'a str, InvalidInputError> {
    match value.as_deref().map(str::trim) {
        Some(raw) if !raw.is_empty() => Ok(raw),
        _ => Err(InvalidInputError::Missing { field }),
    }
}

fn option<T: OptionSet>(field: &'static str, raw: &str) -> Result<T, InvalidInputError> {
    T::from_option(raw).ok_or_else(|| InvalidInputError::UnknownOption {
        field,
        value: raw.to_string(),
        expected: T::EXPECTED,
    })
}

fn required_option<T: OptionSet>(
    field: &'static str,
    value: &Option<String>,
) -> Result<T, InvalidInputError> {
    option(field, required(field, value)?)
}

fn positive_number(field: &'static str, value: &Option<String>) -> Result<f64, InvalidInputError> {
    let raw = required(field, value)?;
    let parsed = raw
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
        .ok_or_else(|| InvalidInputError::NotNumeric { field, value: raw.to_string() })?;
    if parsed <= 0.0 {
        return Err(InvalidInputError::NonPositive { field });
    }
    Ok(parsed)
}

/// Whole-week fields accept fractional input and drop the fraction.
fn positive_whole(field: &'static str, value: &Option<String>) -> Result<u32, InvalidInputError> {
    let whole = positive_number(field, value)?.trunc();
    if whole < 1.0 {
        return Err(InvalidInputError::NonPositive { field });
    }
    if whole > f64::from(u32::MAX) {
        return Err(InvalidInputError::OutOfRange { field });
    }
    Ok(whole as u32)
}

fn flag(field: &'static str, raw: &str) -> Result<bool, InvalidInputError> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(InvalidInputError::UnknownOption {
            field,
            value: raw.to_string(),
            expected: "true|false",
        }),
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{FeedingForm, GroomingForm, InsuranceForm, TrainingForm, VaccinationForm};
    use crate::domain::feeding::AgeUnit;
    use crate::domain::insurance::{CoverageLevel, Deductible, Reimbursement};
    use crate::domain::training::TrainingGoal;
    use crate::errors::InvalidInputError;

    fn text(value: &str) -> Option<String> {
        Some(value.to_string())
    }

    fn feeding_form() -> FeedingForm {
        FeedingForm {
            age: text("3"),
            age_unit: text("months"),
            weight_lbs: text("12.5"),
            breed_size: text("large"),
            activity_level: text("high"),
            food_type: text("raw"),
        }
    }

    #[test]
    fn feeding_form_parses_into_typed_input() {
        let input = feeding_form().parse().expect("valid form");
        assert_eq!(input.age.unit, AgeUnit::Months);
        assert_eq!(input.age.in_weeks(), 12.0);
        assert_eq!(input.weight_lbs, 12.5);
    }

    #[test]
    fn feeding_form_reports_the_first_bad_field() {
        let mut missing = feeding_form();
        missing.weight_lbs = text("   ");
        assert_eq!(missing.parse(), Err(InvalidInputError::Missing { field: "weight_lbs" }));

        let mut not_numeric = feeding_form();
        not_numeric.age = text("three");
        assert!(matches!(
            not_numeric.parse(),
            Err(InvalidInputError::NotNumeric { field: "age", .. })
        ));

        let mut infinite = feeding_form();
        infinite.weight_lbs = text("inf");
        assert!(matches!(
            infinite.parse(),
            Err(InvalidInputError::NotNumeric { field: "weight_lbs", .. })
        ));

        let mut zero = feeding_form();
        zero.age = text("0");
        assert_eq!(zero.parse(), Err(InvalidInputError::NonPositive { field: "age" }));

        let mut unknown = feeding_form();
        unknown.breed_size = text("teacup");
        assert!(matches!(
            unknown.parse(),
            Err(InvalidInputError::UnknownOption { field: "breed_size", expected, .. })
                if expected == "small|medium|large|giant"
        ));
    }

    #[test]
    fn age_unit_defaults_to_weeks() {
        let mut form = feeding_form();
        form.age_unit = None;
        assert_eq!(form.parse().expect("valid form").age.unit, AgeUnit::Weeks);
    }

    #[test]
    fn training_goals_accept_lists_and_repeat_selections() {
        let form = TrainingForm {
            current_age_weeks: text("10"),
            weekly_hours: text("5"),
            has_experience: text("yes"),
            goals: vec!["leash, potty".to_string(), "potty".to_string()],
        };

        let input = form.parse().expect("valid form");
        assert!(input.has_experience);
        assert_eq!(
            input.goals.into_iter().collect::<Vec<_>>(),
            vec![TrainingGoal::Potty, TrainingGoal::Leash]
        );
    }

    #[test]
    fn whole_week_fields_drop_the_fraction() {
        let form = TrainingForm {
            current_age_weeks: text("10.5"),
            weekly_hours: text("5"),
            has_experience: None,
            goals: vec!["potty".to_string()],
        };
        assert_eq!(form.parse().expect("fractional weeks are numeric").current_age_weeks, 10);

        let under_a_week = TrainingForm { current_age_weeks: text("0.5"), ..form };
        assert_eq!(
            under_a_week.parse(),
            Err(InvalidInputError::NonPositive { field: "current_age_weeks" })
        );
    }

    #[test]
    fn training_form_requires_a_goal() {
        let form = TrainingForm {
            current_age_weeks: text("10"),
            weekly_hours: text("5"),
            has_experience: None,
            goals: vec![" , ".to_string()],
        };
        assert_eq!(form.parse(), Err(InvalidInputError::NoGoalsSelected));
    }

    #[test]
    fn vaccination_form_rejects_malformed_dates() {
        let form = VaccinationForm {
            birth_date: text("01/01/2026"),
            lifestyle: text("indoor"),
            region: text("west"),
        };
        assert!(matches!(
            form.parse(),
            Err(InvalidInputError::NotADate { field: "birth_date", .. })
        ));

        let valid = VaccinationForm { birth_date: text("2026-01-01"), ..form };
        assert_eq!(
            valid.parse().expect("valid form").birth_date,
            NaiveDate::from_ymd_opt(2026, 1, 1).expect("date")
        );
    }

    #[test]
    fn grooming_form_requires_every_selection() {
        let form = GroomingForm {
            coat_type: text("curly"),
            coat_length: text("long"),
            activity_level: None,
            environment: text("indoor"),
        };
        assert_eq!(form.parse(), Err(InvalidInputError::Missing { field: "activity_level" }));
    }

    #[test]
    fn insurance_form_parses_enumerated_amounts() {
        let form = InsuranceForm {
            age_weeks: text("10"),
            breed: text("brachycephalic"),
            location: text("urban"),
            coverage: text("accident-illness"),
            deductible: text("500"),
            reimbursement_pct: text("80"),
        };
        let input = form.parse().expect("valid form");
        assert_eq!(input.coverage, CoverageLevel::AccidentIllness);
        assert_eq!(input.deductible, Deductible::Usd500);
        assert_eq!(input.reimbursement, Reimbursement::Pct80);

        let off_menu = InsuranceForm { deductible: text("750"), ..form.clone() };
        assert!(matches!(
            off_menu.parse(),
            Err(InvalidInputError::UnknownOption { field: "deductible", .. })
        ));

        let fractional = InsuranceForm { age_weeks: text("10.5"), ..form.clone() };
        assert_eq!(fractional.parse().expect("fractional age is numeric").age_weeks, 10);

        let negative = InsuranceForm { age_weeks: text("-4"), ..form };
        assert_eq!(negative.parse(), Err(InvalidInputError::NonPositive { field: "age_weeks" }));
    }
}
