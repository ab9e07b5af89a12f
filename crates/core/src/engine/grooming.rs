use rust_decimal::Decimal;

use crate::domain::grooming::{
    CoatLength, CoatType, Environment, GroomingInput, GroomingResult, GroomingTask,
    ProfessionalGrooming,
};
use crate::domain::ActivityLevel;

/// First-match lookup row: `then` applies when `when` holds.
struct Tier<T> {
    when: fn(&GroomingInput) -> bool,
    then: T,
}

fn select<T: Copy>(tiers: &[Tier<T>], otherwise: T, input: &GroomingInput) -> T {
    tiers.iter().find(|tier| (tier.when)(input)).map_or(otherwise, |tier| tier.then)
}

#[derive(Clone, Copy)]
struct Frequency {
    frequency: &'static str,
    advice: Option<&'static str>,
}

#[derive(Clone, Copy)]
struct ProfessionalTier {
    frequency: &'static str,
    cost_per_visit: i64,
    visits_per_year: u32,
    advice: &'static str,
}

fn is_curly(input: &GroomingInput) -> bool {
    input.coat_type == CoatType::Curly
}

fn is_long(input: &GroomingInput) -> bool {
    input.coat_length == CoatLength::Long
}

fn is_medium(input: &GroomingInput) -> bool {
    input.coat_length == CoatLength::Medium
}

fn is_outdoor(input: &GroomingInput) -> bool {
    input.environment == Environment::Outdoor
}

fn is_high_activity(input: &GroomingInput) -> bool {
    input.activity_level == ActivityLevel::High
}

fn long_or_curly(input: &GroomingInput) -> bool {
    is_long(input) || is_curly(input)
}

fn outdoor_or_high_activity(input: &GroomingInput) -> bool {
    is_outdoor(input) || is_high_activity(input)
}

fn curly_or_outdoor(input: &GroomingInput) -> bool {
    is_curly(input) || is_outdoor(input)
}

fn needs_regular_cuts(input: &GroomingInput) -> bool {
    is_curly(input) || (is_long(input) && input.coat_type == CoatType::Straight)
}

const BRUSHING: &[Tier<Frequency>] = &[
    Tier {
        when: long_or_curly,
        then: Frequency {
            frequency: "Daily",
            advice: Some("Invest in a quality slicker brush and metal comb"),
        },
    },
    Tier {
        when: is_medium,
        then: Frequency {
            frequency: "2-3 times per week",
            advice: Some("Use a bristle brush or deshedding tool"),
        },
    },
];

const BRUSHING_DEFAULT: Frequency = Frequency {
    frequency: "Weekly",
    advice: Some("A rubber curry brush works well for short coats"),
};

const BATHING: &[Tier<Frequency>] = &[
    Tier {
        when: outdoor_or_high_activity,
        then: Frequency { frequency: "Every 2-3 weeks", advice: None },
    },
    Tier { when: long_or_curly, then: Frequency { frequency: "Every 3-4 weeks", advice: None } },
];

const BATHING_DEFAULT: Frequency = Frequency { frequency: "Every 4-6 weeks", advice: None };

const EAR_CLEANING: &[Tier<Frequency>] = &[Tier {
    when: curly_or_outdoor,
    then: Frequency {
        frequency: "Weekly",
        advice: Some("Check ears regularly for signs of infection"),
    },
}];

const EAR_CLEANING_DEFAULT: Frequency = Frequency { frequency: "Every 2 weeks", advice: None };

const PROFESSIONAL: &[Tier<ProfessionalTier>] = &[
    Tier {
        when: needs_regular_cuts,
        then: ProfessionalTier {
            frequency: "Every 6-8 weeks",
            cost_per_visit: 75,
            visits_per_year: 7,
            advice: "Professional grooming is essential for coat health and comfort",
        },
    },
    Tier {
        when: is_long,
        then: ProfessionalTier {
            frequency: "Every 8-12 weeks",
            cost_per_visit: 60,
            visits_per_year: 5,
            advice: "Consider professional grooming for seasonal coat changes",
        },
    },
    Tier {
        when: is_medium,
        then: ProfessionalTier {
            frequency: "Every 12-16 weeks (optional)",
            cost_per_visit: 50,
            visits_per_year: 3,
            advice: "Professional grooming can help with shedding management",
        },
    },
];

const PROFESSIONAL_DEFAULT: ProfessionalTier = ProfessionalTier {
    frequency: "As needed (1-2 times per year)",
    cost_per_visit: 45,
    visits_per_year: 2,
    advice: "Short coats typically need minimal professional grooming",
};

/// Advisories that fire independently of each other, after the task rules.
const ADVISORIES: &[Tier<&str>] = &[
    Tier {
        when: is_high_activity,
        then: "Check paws and coat for debris after outdoor activities",
    },
    Tier {
        when: is_curly,
        then: "Regular trimming prevents matting and keeps your puppy comfortable",
    },
];

fn task(task: &str, frequency: &str, description: &str) -> GroomingTask {
    GroomingTask {
        task: task.to_string(),
        frequency: frequency.to_string(),
        description: description.to_string(),
    }
}

pub fn compute_grooming(input: &GroomingInput) -> GroomingResult {
    let mut recommendations = Vec::new();

    let brushing = select(BRUSHING, BRUSHING_DEFAULT, input);
    let bathing = select(BATHING, BATHING_DEFAULT, input);
    let ears = select(EAR_CLEANING, EAR_CLEANING_DEFAULT, input);
    let professional = select(PROFESSIONAL, PROFESSIONAL_DEFAULT, input);

    recommendations.extend(brushing.advice.map(str::to_string));
    recommendations.extend(ears.advice.map(str::to_string));
    recommendations.push(professional.advice.to_string());
    recommendations.extend(
        ADVISORIES.iter().filter(|tier| (tier.when)(input)).map(|tier| tier.then.to_string()),
    );

    let tasks = vec![
        task(
            "Brushing",
            brushing.frequency,
            "Prevents matting, reduces shedding, distributes natural oils",
        ),
        task(
            "Bathing",
            bathing.frequency,
            "Use puppy-specific shampoo, avoid over-bathing to preserve coat oils",
        ),
        task(
            "Nail Trimming",
            "Every 2-3 weeks",
            "Start early to build comfort, trim just before the quick",
        ),
        task(
            "Ear Cleaning",
            ears.frequency,
            "Use vet-approved ear cleaner, never insert anything into ear canal",
        ),
        task(
            "Teeth Brushing",
            "Daily (ideal) or 3-4 times per week",
            "Use dog-specific toothpaste, start early for best results",
        ),
    ];

    let cost_per_visit = Decimal::from(professional.cost_per_visit);
    let annual_cost = cost_per_visit * Decimal::from(professional.visits_per_year);

    tracing::debug!(
        event_name = "engine.grooming.computed",
        professional_frequency = professional.frequency,
        annual_cost = %annual_cost,
        recommendations = recommendations.len(),
        "grooming plan computed"
    );

    GroomingResult {
        tasks,
        professional: ProfessionalGrooming {
            frequency: professional.frequency.to_string(),
            description: "Includes full bath, haircut, nail trim, and ear cleaning".to_string(),
            cost_per_visit,
            visits_per_year: professional.visits_per_year,
        },
        annual_cost,
        recommendations,
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::compute_grooming;
    use crate::domain::grooming::{
        CoatLength, CoatType, Environment, GroomingInput, GroomingResult,
    };
    use crate::domain::ActivityLevel;

    fn input(
        coat_type: CoatType,
        coat_length: CoatLength,
        activity_level: ActivityLevel,
        environment: Environment,
    ) -> GroomingInput {
        GroomingInput { coat_type, coat_length, activity_level, environment }
    }

    fn frequency_of<'a>(result: &'a GroomingResult, task: &str) -> &'a str {
        result
            .tasks
            .iter()
            .find(|candidate| candidate.task == task)
            .map(|candidate| candidate.frequency.as_str())
            .unwrap_or("<missing>")
    }

    #[test]
    fn short_straight_indoor_coat_is_low_maintenance() {
        let result = compute_grooming(&input(
            CoatType::Straight,
            CoatLength::Short,
            ActivityLevel::Low,
            Environment::Indoor,
        ));

        assert_eq!(result.tasks.len(), 5);
        assert_eq!(frequency_of(&result, "Brushing"), "Weekly");
        assert_eq!(frequency_of(&result, "Bathing"), "Every 4-6 weeks");
        assert_eq!(frequency_of(&result, "Ear Cleaning"), "Every 2 weeks");
        assert_eq!(result.professional.frequency, "As needed (1-2 times per year)");
        assert_eq!(result.annual_cost, Decimal::from(90));
        assert_eq!(
            result.recommendations,
            vec![
                "A rubber curry brush works well for short coats",
                "Short coats typically need minimal professional grooming"
            ]
        );
    }

    #[test]
    fn curly_coat_fires_every_curly_rule() {
        let result = compute_grooming(&input(
            CoatType::Curly,
            CoatLength::Medium,
            ActivityLevel::High,
            Environment::Mixed,
        ));

        assert_eq!(frequency_of(&result, "Brushing"), "Daily");
        assert_eq!(frequency_of(&result, "Bathing"), "Every 2-3 weeks");
        assert_eq!(frequency_of(&result, "Ear Cleaning"), "Weekly");
        assert_eq!(result.professional.cost_per_visit, Decimal::from(75));
        assert_eq!(result.professional.visits_per_year, 7);
        assert_eq!(result.annual_cost, Decimal::from(525));
        assert_eq!(result.recommendations.len(), 5);
        assert_eq!(
            result.recommendations.last().map(String::as_str),
            Some("Regular trimming prevents matting and keeps your puppy comfortable")
        );
    }

    #[test]
    fn long_coat_tier_depends_on_coat_type() {
        let straight = compute_grooming(&input(
            CoatType::Straight,
            CoatLength::Long,
            ActivityLevel::Moderate,
            Environment::Indoor,
        ));
        let double = compute_grooming(&input(
            CoatType::Double,
            CoatLength::Long,
            ActivityLevel::Moderate,
            Environment::Indoor,
        ));

        assert_eq!(straight.professional.frequency, "Every 6-8 weeks");
        assert_eq!(double.professional.frequency, "Every 8-12 weeks");
        assert_eq!(double.annual_cost, Decimal::from(300));
        assert_eq!(frequency_of(&double, "Bathing"), "Every 3-4 weeks");
    }

    #[test]
    fn outdoor_environment_drives_bathing_and_ears() {
        let result = compute_grooming(&input(
            CoatType::Wire,
            CoatLength::Medium,
            ActivityLevel::Moderate,
            Environment::Outdoor,
        ));

        assert_eq!(frequency_of(&result, "Brushing"), "2-3 times per week");
        assert_eq!(frequency_of(&result, "Bathing"), "Every 2-3 weeks");
        assert_eq!(frequency_of(&result, "Ear Cleaning"), "Weekly");
        assert_eq!(result.professional.frequency, "Every 12-16 weeks (optional)");
        assert_eq!(result.annual_cost, Decimal::from(150));
        assert!(result
            .recommendations
            .contains(&"Check ears regularly for signs of infection".to_string()));
    }
}
