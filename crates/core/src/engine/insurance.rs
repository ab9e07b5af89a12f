use rust_decimal::Decimal;

use super::rounding::{round_half_up, round_hundredths};
use crate::domain::insurance::{
    BreedCategory, CoverageLevel, Deductible, InsuranceInput, InsurancePlan, InsuranceResult,
    Location, PlanTier, PremiumFactor, Reimbursement,
};

const BASE_MONTHLY_PREMIUM: i64 = 30;
const AVERAGE_FIRST_YEAR_VET_COST: i64 = 1500;

pub fn age_multiplier(age_weeks: u32) -> Decimal {
    if age_weeks < 12 {
        Decimal::new(9, 1)
    } else if age_weeks < 24 {
        Decimal::ONE
    } else {
        Decimal::new(11, 1)
    }
}

pub fn breed_multiplier(breed: BreedCategory) -> Decimal {
    match breed {
        BreedCategory::Small => Decimal::new(9, 1),
        BreedCategory::Medium => Decimal::ONE,
        BreedCategory::Large => Decimal::new(13, 1),
        BreedCategory::Giant => Decimal::new(15, 1),
        BreedCategory::Brachycephalic => Decimal::new(14, 1),
    }
}

pub fn breed_risks(breed: BreedCategory) -> &'static [&'static str] {
    match breed {
        BreedCategory::Small => &["Dental issues", "Patellar luxation", "Tracheal collapse"],
        BreedCategory::Medium => &["General health monitoring recommended"],
        BreedCategory::Large => &["Hip dysplasia", "Bloat/GDV", "Joint issues"],
        BreedCategory::Giant => &["Hip dysplasia", "Heart conditions", "Bloat/GDV", "Bone cancer"],
        BreedCategory::Brachycephalic => {
            &["Breathing problems", "Eye issues", "Heat sensitivity", "Dental problems"]
        }
    }
}

pub fn location_multiplier(location: Location) -> Decimal {
    match location {
        Location::Urban => Decimal::new(12, 1),
        Location::Suburban => Decimal::ONE,
        Location::Rural => Decimal::new(9, 1),
    }
}

pub fn coverage_multiplier(coverage: CoverageLevel) -> Decimal {
    match coverage {
        CoverageLevel::Accident => Decimal::new(4, 1),
        CoverageLevel::AccidentIllness => Decimal::ONE,
        CoverageLevel::Comprehensive => Decimal::new(13, 1),
    }
}

pub fn deductible_multiplier(deductible: Deductible) -> Decimal {
    match deductible {
        Deductible::Usd100 => Decimal::new(12, 1),
        Deductible::Usd250 => Decimal::ONE,
        Deductible::Usd500 => Decimal::new(85, 2),
        Deductible::Usd1000 => Decimal::new(75, 2),
    }
}

pub fn reimbursement_multiplier(reimbursement: Reimbursement) -> Decimal {
    match reimbursement {
        Reimbursement::Pct70 => Decimal::new(85, 2),
        Reimbursement::Pct80 => Decimal::new(95, 2),
        Reimbursement::Pct90 => Decimal::ONE,
    }
}

fn tier_multiplier(tier: PlanTier) -> Decimal {
    match tier {
        PlanTier::Basic => Decimal::new(8, 1),
        PlanTier::Standard => Decimal::ONE,
        PlanTier::Premium => Decimal::new(13, 1),
    }
}

/// Applies the rating factors in their fixed order and records each step.
pub fn rate_premium(input: &InsuranceInput) -> (Decimal, Vec<PremiumFactor>) {
    let factors = [
        ("age", format!("{} weeks", input.age_weeks), age_multiplier(input.age_weeks)),
        ("breed", input.breed_label().to_string(), breed_multiplier(input.breed)),
        ("location", input.location_label().to_string(), location_multiplier(input.location)),
        ("coverage", input.coverage.label().to_string(), coverage_multiplier(input.coverage)),
        (
            "deductible",
            format!("${}", input.deductible.amount()),
            deductible_multiplier(input.deductible),
        ),
        (
            "reimbursement",
            format!("{}%", input.reimbursement.percent()),
            reimbursement_multiplier(input.reimbursement),
        ),
    ];

    let mut premium = Decimal::from(BASE_MONTHLY_PREMIUM);
    let mut trace = Vec::with_capacity(factors.len());
    for (stage, detail, multiplier) in factors {
        premium *= multiplier;
        trace.push(PremiumFactor { stage: stage.to_string(), detail, multiplier, premium });
    }

    (premium, trace)
}

fn plan(tier: PlanTier, base: Decimal, input: &InsuranceInput) -> InsurancePlan {
    let monthly = base * tier_multiplier(tier);
    let deductible = input.deductible.amount();
    let reimbursement_pct = input.reimbursement.percent();

    let (deductible, reimbursement_pct, coverage_label) = match tier {
        PlanTier::Premium => (
            deductible.saturating_sub(150).max(100),
            (reimbursement_pct + 10).min(90),
            match input.coverage {
                CoverageLevel::Accident => CoverageLevel::AccidentIllness.label(),
                other => other.label(),
            },
        ),
        PlanTier::Basic | PlanTier::Standard => {
            (deductible, reimbursement_pct, input.coverage.label())
        }
    };

    InsurancePlan {
        tier,
        name: tier.name().to_string(),
        monthly_premium: round_half_up(monthly),
        annual_cost: round_half_up(monthly * Decimal::from(12)),
        deductible,
        reimbursement_pct,
        coverage_label: coverage_label.to_string(),
    }
}

/// Expected first-year reimbursement minus a year of Standard premiums.
/// Negative when the premiums outweigh the payout.
pub fn potential_savings(base: Decimal, input: &InsuranceInput) -> Decimal {
    let covered = Decimal::from(AVERAGE_FIRST_YEAR_VET_COST - i64::from(input.deductible.amount()));
    let payout = covered * Decimal::from(input.reimbursement.percent()) / Decimal::from(100);
    round_half_up(payout - base * Decimal::from(12))
}

fn recommendation(risk_count: usize, age_weeks: u32) -> &'static str {
    if risk_count >= 3 {
        "Given your breed's health risks, we strongly recommend comprehensive coverage with accident + illness protection."
    } else if age_weeks < 12 {
        "Enrolling while your puppy is young locks in lower rates and ensures pre-existing conditions don't exclude future coverage."
    } else {
        "Consider starting with accident + illness coverage to protect against unexpected health issues."
    }
}

pub fn compute_insurance(input: &InsuranceInput) -> InsuranceResult {
    let (base, premium_trace) = rate_premium(input);
    let plans: Vec<InsurancePlan> = [PlanTier::Basic, PlanTier::Standard, PlanTier::Premium]
        .into_iter()
        .map(|tier| plan(tier, base, input))
        .collect();

    let breed_risks: Vec<String> =
        breed_risks(input.breed).iter().map(|risk| (*risk).to_string()).collect();
    let potential_savings = potential_savings(base, input);
    let savings_label = if potential_savings > Decimal::ZERO {
        format!("${potential_savings}")
    } else {
        "Variable".to_string()
    };

    tracing::debug!(
        event_name = "engine.insurance.computed",
        base_premium = %round_hundredths(base),
        breed_risks = breed_risks.len(),
        potential_savings = %potential_savings,
        "insurance estimate computed"
    );

    InsuranceResult {
        plans,
        recommendation: recommendation(breed_risks.len(), input.age_weeks).to_string(),
        breed_risks,
        potential_savings,
        savings_label,
        recommended_plan: PlanTier::Standard,
        premium_trace,
    }
}

impl InsuranceInput {
    fn breed_label(&self) -> &'static str {
        match self.breed {
            BreedCategory::Small => "Small Breed (under 20 lbs)",
            BreedCategory::Medium => "Medium Breed (20-50 lbs)",
            BreedCategory::Large => "Large Breed (50-90 lbs)",
            BreedCategory::Giant => "Giant Breed (over 90 lbs)",
            BreedCategory::Brachycephalic => "Brachycephalic (flat-faced)",
        }
    }

    fn location_label(&self) -> &'static str {
        match self.location {
            Location::Urban => "Urban",
            Location::Suburban => "Suburban",
            Location::Rural => "Rural",
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::{compute_insurance, rate_premium};
    use crate::domain::insurance::{
        BreedCategory, CoverageLevel, Deductible, InsuranceInput, Location, PlanTier,
        Reimbursement,
    };

    fn giant_accident_only() -> InsuranceInput {
        InsuranceInput {
            age_weeks: 10,
            breed: BreedCategory::Giant,
            location: Location::Suburban,
            coverage: CoverageLevel::Accident,
            deductible: Deductible::Usd1000,
            reimbursement: Reimbursement::Pct70,
        }
    }

    #[test]
    fn giant_breed_accident_only_estimate() {
        let result = compute_insurance(&giant_accident_only());

        assert_eq!(result.breed_risks.len(), 4);
        let monthly: Vec<Decimal> = result.plans.iter().map(|p| p.monthly_premium).collect();
        let annual: Vec<Decimal> = result.plans.iter().map(|p| p.annual_cost).collect();
        assert_eq!(monthly, [8_i64, 10, 13].map(Decimal::from).to_vec());
        assert_eq!(annual, [99_i64, 124, 161].map(Decimal::from).to_vec());

        let premium = &result.plans[2];
        assert_eq!(premium.tier, PlanTier::Premium);
        assert_eq!(premium.deductible, 850);
        assert_eq!(premium.reimbursement_pct, 80);
        assert_eq!(premium.coverage_label, "Accident + Illness");
        assert_eq!(result.plans[0].coverage_label, "Accident Only");

        assert_eq!(result.potential_savings, Decimal::from(226));
        assert_eq!(result.savings_label, "$226");
        assert!(result.recommendation.starts_with("Given your breed's health risks"));
        assert_eq!(result.recommended_plan, PlanTier::Standard);
    }

    #[test]
    fn coverage_factor_is_applied_before_deductible_and_reimbursement() {
        let (base, trace) = rate_premium(&giant_accident_only());

        let stages: Vec<&str> = trace.iter().map(|step| step.stage.as_str()).collect();
        assert_eq!(
            stages,
            vec!["age", "breed", "location", "coverage", "deductible", "reimbursement"]
        );
        assert_eq!(trace[3].multiplier, Decimal::new(4, 1));
        assert_eq!(trace[3].premium, Decimal::new(162, 1));
        assert_eq!(trace[4].premium, Decimal::new(1215, 2));
        assert_eq!(base, Decimal::new(103_275, 4));
        assert_eq!(trace.last().map(|step| step.premium), Some(base));
    }

    #[test]
    fn premium_tier_caps_reimbursement_and_floors_deductible() {
        let mut input = giant_accident_only();
        input.deductible = Deductible::Usd100;
        input.reimbursement = Reimbursement::Pct90;
        input.coverage = CoverageLevel::Comprehensive;

        let result = compute_insurance(&input);
        let premium = &result.plans[2];
        assert_eq!(premium.deductible, 100);
        assert_eq!(premium.reimbursement_pct, 90);
        assert_eq!(premium.coverage_label, "Accident + Illness + Wellness");
    }

    #[test]
    fn savings_subtract_a_year_of_standard_premiums() {
        let input = InsuranceInput {
            age_weeks: 30,
            breed: BreedCategory::Brachycephalic,
            location: Location::Urban,
            coverage: CoverageLevel::Comprehensive,
            deductible: Deductible::Usd100,
            reimbursement: Reimbursement::Pct90,
        };

        let result = compute_insurance(&input);
        // 30 × 1.1 × 1.4 × 1.2 × 1.3 × 1.2 × 1.0 = 86.4864; 1260 − 1037.8368
        assert_eq!(result.potential_savings, Decimal::from(222));

        let mut costly = input.clone();
        costly.breed = BreedCategory::Giant;
        let costly = compute_insurance(&costly);
        // 30 × 1.1 × 1.5 × 1.2 × 1.3 × 1.2 = 92.664; 1260 − 1111.968
        assert_eq!(costly.potential_savings, Decimal::from(148));
    }

    #[test]
    fn recommendation_priority_follows_risk_then_age() {
        let mut young_medium = giant_accident_only();
        young_medium.breed = BreedCategory::Medium;
        let young = compute_insurance(&young_medium);
        assert_eq!(young.breed_risks, vec!["General health monitoring recommended"]);
        assert!(young.recommendation.starts_with("Enrolling while your puppy is young"));

        let mut older_medium = young_medium.clone();
        older_medium.age_weeks = 12;
        let older = compute_insurance(&older_medium);
        assert!(older.recommendation.starts_with("Consider starting with accident + illness"));

        let mut young_small = young_medium;
        young_small.breed = BreedCategory::Small;
        let small = compute_insurance(&young_small);
        assert!(small.recommendation.starts_with("Given your breed's health risks"));
    }

    #[test]
    fn expensive_plans_report_variable_savings() {
        let input = InsuranceInput {
            age_weeks: 52,
            breed: BreedCategory::Giant,
            location: Location::Urban,
            coverage: CoverageLevel::Comprehensive,
            deductible: Deductible::Usd1000,
            reimbursement: Reimbursement::Pct70,
        };

        let result = compute_insurance(&input);
        // 30 × 1.1 × 1.5 × 1.2 × 1.3 × 0.75 × 0.85 = 49.22775; 350 − 590.733
        assert_eq!(result.potential_savings, Decimal::from(-241));
        assert_eq!(result.savings_label, "Variable");
    }
}
