pub mod calendar;
pub mod feeding;
pub mod grooming;
pub mod insurance;
pub mod rounding;
pub mod training;
pub mod vaccination;

use chrono::NaiveDate;

use crate::domain::feeding::{FeedingInput, FeedingResult};
use crate::domain::grooming::{GroomingInput, GroomingResult};
use crate::domain::insurance::{InsuranceInput, InsuranceResult};
use crate::domain::training::{TrainingInput, TrainingResult};
use crate::domain::vaccination::{VaccinationInput, VaccinationResult};
use crate::errors::InvalidInputError;

pub use self::feeding::compute_feeding;
pub use self::grooming::compute_grooming;
pub use self::insurance::compute_insurance;
pub use self::training::compute_training;
pub use self::vaccination::compute_vaccination;

/// One entry point per calculator. Implementations hold no state between
/// calls; the date-dependent calculators take "today" explicitly.
pub trait RecommendationEngine: Send + Sync {
    fn feeding(&self, input: &FeedingInput) -> Result<FeedingResult, InvalidInputError>;

    fn training(
        &self,
        input: &TrainingInput,
        today: NaiveDate,
    ) -> Result<TrainingResult, InvalidInputError>;

    fn vaccination(
        &self,
        input: &VaccinationInput,
        today: NaiveDate,
    ) -> Result<VaccinationResult, InvalidInputError>;

    fn grooming(&self, input: &GroomingInput) -> Result<GroomingResult, InvalidInputError>;

    fn insurance(&self, input: &InsuranceInput) -> Result<InsuranceResult, InvalidInputError>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct DeterministicRecommendationEngine;

impl RecommendationEngine for DeterministicRecommendationEngine {
    fn feeding(&self, input: &FeedingInput) -> Result<FeedingResult, InvalidInputError> {
        compute_feeding(input).map_err(|error| rejected("feeding", error))
    }

    fn training(
        &self,
        input: &TrainingInput,
        today: NaiveDate,
    ) -> Result<TrainingResult, InvalidInputError> {
        compute_training(input, today).map_err(|error| rejected("training", error))
    }

    fn vaccination(
        &self,
        input: &VaccinationInput,
        today: NaiveDate,
    ) -> Result<VaccinationResult, InvalidInputError> {
        compute_vaccination(input, today).map_err(|error| rejected("vaccination", error))
    }

    fn grooming(&self, input: &GroomingInput) -> Result<GroomingResult, InvalidInputError> {
        Ok(compute_grooming(input))
    }

    fn insurance(&self, input: &InsuranceInput) -> Result<InsuranceResult, InvalidInputError> {
        Ok(compute_insurance(input))
    }
}

fn rejected(calculator: &'static str, error: InvalidInputError) -> InvalidInputError {
    tracing::warn!(
        event_name = "engine.input.rejected",
        calculator,
        field = error.field(),
        error = %error,
        "calculator input rejected"
    );
    error
}
