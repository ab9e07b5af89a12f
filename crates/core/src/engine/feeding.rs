use rust_decimal::Decimal;

use super::rounding::{round_hundredths, saturating_decimal, saturating_whole};
use crate::domain::feeding::{FeedingInput, FeedingResult};
use crate::domain::ActivityLevel;
use crate::errors::InvalidInputError;

const LBS_TO_KG: f64 = 0.453592;

pub fn compute_feeding(input: &FeedingInput) -> Result<FeedingResult, InvalidInputError> {
    validate(input)?;

    let age_weeks = input.age.in_weeks();
    let weight = input.weight_lbs;

    let expected_adult_weight = estimate_adult_weight(input, age_weeks);
    let rer = resting_energy_requirement(weight);
    let daily_calories = rer * growth_factor(age_weeks, input.activity_level);
    let daily_amount = daily_calories / input.food_type.calories_per_cup();
    let meals_per_day = meals_per_day(age_weeks);
    let amount_per_meal = daily_amount / f64::from(meals_per_day);

    let result = FeedingResult {
        daily_amount_cups: round_hundredths(saturating_decimal(daily_amount)),
        meals_per_day,
        amount_per_meal_cups: round_hundredths(saturating_decimal(amount_per_meal)),
        calories_per_day: saturating_whole(daily_calories),
        expected_adult_weight_lbs: saturating_whole(expected_adult_weight),
        suggested_meal_times: suggested_meal_times(meals_per_day)
            .iter()
            .map(|time| (*time).to_string())
            .collect(),
    };

    tracing::debug!(
        event_name = "engine.feeding.computed",
        age_weeks,
        calories = result.calories_per_day,
        meals_per_day,
        "feeding recommendation computed"
    );

    Ok(result)
}

fn validate(input: &FeedingInput) -> Result<(), InvalidInputError> {
    if !input.age.value.is_finite() {
        return Err(InvalidInputError::NotNumeric {
            field: "age",
            value: input.age.value.to_string(),
        });
    }
    if input.age.value <= 0.0 {
        return Err(InvalidInputError::NonPositive { field: "age" });
    }
    if !input.weight_lbs.is_finite() {
        return Err(InvalidInputError::NotNumeric {
            field: "weight_lbs",
            value: input.weight_lbs.to_string(),
        });
    }
    if input.weight_lbs <= 0.0 {
        return Err(InvalidInputError::NonPositive { field: "weight_lbs" });
    }
    Ok(())
}

/// Young puppies extrapolate linearly from current weight; older ones get
/// the breed's flat growth multiplier.
pub fn estimate_adult_weight(input: &FeedingInput, age_weeks: f64) -> f64 {
    let profile = input.breed_size.growth_profile();
    if age_weeks < profile.weaning_threshold_weeks {
        input.weight_lbs * (profile.adult_weight_factor / age_weeks)
    } else {
        input.weight_lbs * profile.mature_multiplier
    }
}

/// RER = 70 × kg^0.75, in kcal/day.
pub fn resting_energy_requirement(weight_lbs: f64) -> f64 {
    70.0 * (weight_lbs * LBS_TO_KG).powf(0.75)
}

pub fn growth_factor(age_weeks: f64, activity_level: ActivityLevel) -> f64 {
    let base = if age_weeks < 16.0 {
        3.0
    } else if age_weeks < 40.0 {
        2.5
    } else {
        2.0
    };

    match activity_level {
        ActivityLevel::High => base * 1.2,
        ActivityLevel::Moderate => base,
        ActivityLevel::Low => base * 0.9,
    }
}

pub fn meals_per_day(age_weeks: f64) -> u32 {
    if age_weeks < 12.0 {
        4
    } else if age_weeks < 24.0 {
        3
    } else {
        2
    }
}

fn suggested_meal_times(meals_per_day: u32) -> &'static [&'static str] {
    match meals_per_day {
        4 => &["7am", "12pm", "5pm", "9pm"],
        3 => &["7am", "1pm", "7pm"],
        _ => &["8am", "6pm"],
    }
}

/// `daily` and `per_meal` are rounded independently, so their product can
/// drift by up to half a hundredth per meal.
pub fn meal_split_tolerance(meals_per_day: u32) -> Decimal {
    Decimal::new(5, 3) * Decimal::from(meals_per_day + 1)
}
