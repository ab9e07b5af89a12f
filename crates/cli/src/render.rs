//! Human-readable rendering of calculator results.

use chrono::NaiveDate;
use puppyparent_core::domain::vaccination::VaccineType;
use puppyparent_core::{
    FeedingResult, GroomingResult, InsuranceResult, NextAppointment, TrainingResult,
    VaccinationResult,
};
use rust_decimal::Decimal;

/// "October 16, 2026"
pub fn long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// "Oct 16, 2026"
pub fn short_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

fn dollars(amount: Decimal) -> String {
    format!("${}", amount.normalize())
}

pub fn feeding(result: &FeedingResult) -> String {
    let mut lines = vec!["feeding plan:".to_string()];
    lines.push(format!("- daily amount: {} cups", result.daily_amount_cups));
    lines.push(format!(
        "- meals per day: {} ({})",
        result.meals_per_day,
        result.suggested_meal_times.join(", ")
    ));
    lines.push(format!("- per meal: {} cups", result.amount_per_meal_cups));
    lines.push(format!("- calories: {} kcal/day", result.calories_per_day));
    lines.push(format!("- expected adult weight: {} lbs", result.expected_adult_weight_lbs));
    lines.join("\n")
}

pub fn training(result: &TrainingResult) -> String {
    let mut lines = vec![format!(
        "training timeline: {} weeks, {} minutes/day",
        result.total_weeks, result.daily_minutes
    )];
    for milestone in &result.milestones {
        lines.push(format!(
            "- week {} (age {} weeks) [{}] {}: {}",
            milestone.week,
            milestone.puppy_age_weeks,
            milestone.goal.label(),
            milestone.skill,
            milestone.description
        ));
    }
    lines.push(format!("estimated completion: {}", long_date(result.completion_date)));
    lines.join("\n")
}

pub fn vaccination(result: &VaccinationResult) -> String {
    let mut lines = vec!["vaccination schedule:".to_string()];
    for appointment in &result.schedule {
        let kind = match appointment.vaccine_type {
            VaccineType::Core => "core",
            VaccineType::NonCore => "non-core",
        };
        lines.push(format!(
            "- week {} ({}) [{kind}] {} {}",
            appointment.week,
            short_date(appointment.date),
            appointment.vaccines.join("; "),
            dollars(appointment.cost)
        ));
    }
    lines.push(format!("total cost: {}", dollars(result.total_cost)));
    let next = match result.next_appointment {
        NextAppointment::Scheduled(date) => short_date(date),
        NextAppointment::Complete => "All appointments complete".to_string(),
    };
    lines.push(format!("next appointment: {next}"));
    lines.join("\n")
}

pub fn grooming(result: &GroomingResult) -> String {
    let mut lines = vec!["grooming routine:".to_string()];
    for task in &result.tasks {
        lines.push(format!("- {}: {} ({})", task.task, task.frequency, task.description));
    }
    lines.push(format!(
        "professional grooming: {} at {} per visit ({} visits/year)",
        result.professional.frequency,
        dollars(result.professional.cost_per_visit),
        result.professional.visits_per_year
    ));
    lines.push(format!("annual professional cost: {}", dollars(result.annual_cost)));
    if !result.recommendations.is_empty() {
        lines.push("recommendations:".to_string());
        lines.extend(result.recommendations.iter().map(|tip| format!("- {tip}")));
    }
    lines.join("\n")
}

pub fn insurance(result: &InsuranceResult) -> String {
    let mut lines = vec!["insurance estimate:".to_string()];
    for plan in &result.plans {
        let marker = if plan.tier == result.recommended_plan { " (recommended)" } else { "" };
        lines.push(format!(
            "- {}{marker}: {}/month, {}/year, ${} deductible, {}% reimbursement, {}",
            plan.name,
            dollars(plan.monthly_premium),
            dollars(plan.annual_cost),
            plan.deductible,
            plan.reimbursement_pct,
            plan.coverage_label
        ));
    }
    lines.push(format!("breed risks: {}", result.breed_risks.join(", ")));
    lines.push(format!("potential savings: {}", result.savings_label));
    lines.push(result.recommendation.clone());
    lines.join("\n")
}
