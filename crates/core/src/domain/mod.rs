pub mod feeding;
pub mod grooming;
pub mod insurance;
pub mod training;
pub mod vaccination;

use serde::{Deserialize, Serialize};

/// A closed set of form choices, addressed by the identifier a form submits.
pub trait OptionSet: Copy + Sized + 'static {
    const ALL: &'static [Self];
    /// Accepted identifiers, `|`-separated, for error messages.
    const EXPECTED: &'static str;

    fn as_str(self) -> &'static str;

    fn from_option(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL.iter().copied().find(|candidate| candidate.as_str().eq_ignore_ascii_case(value))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Low,
    Moderate,
    High,
}

impl OptionSet for ActivityLevel {
    const ALL: &'static [Self] = &[Self::Low, Self::Moderate, Self::High];
    const EXPECTED: &'static str = "low|moderate|high";

    fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ActivityLevel, OptionSet};

    #[test]
    fn option_lookup_ignores_case_and_padding() {
        assert_eq!(ActivityLevel::from_option(" High "), Some(ActivityLevel::High));
        assert_eq!(ActivityLevel::from_option("extreme"), None);
    }

    #[test]
    fn every_option_round_trips_through_its_identifier() {
        for level in ActivityLevel::ALL {
            assert_eq!(ActivityLevel::from_option(level.as_str()), Some(*level));
            assert!(ActivityLevel::EXPECTED.contains(level.as_str()));
        }
    }
}
