pub mod config;
pub mod domain;
pub mod engine;
pub mod errors;
pub mod forms;

pub use config::{AppConfig, ConfigError, LoadOptions, LogFormat, OutputFormat};
pub use domain::feeding::{FeedingInput, FeedingResult};
pub use domain::grooming::{GroomingInput, GroomingResult};
pub use domain::insurance::{InsuranceInput, InsuranceResult};
pub use domain::training::{TrainingInput, TrainingResult};
pub use domain::vaccination::{NextAppointment, VaccinationInput, VaccinationResult};
pub use engine::calendar::{Clock, FixedClock, SystemClock};
pub use engine::{
    compute_feeding, compute_grooming, compute_insurance, compute_training, compute_vaccination,
    DeterministicRecommendationEngine, RecommendationEngine,
};
pub use errors::{ApplicationError, InterfaceError, InvalidInputError};
pub use forms::{FeedingForm, GroomingForm, InsuranceForm, TrainingForm, VaccinationForm};
