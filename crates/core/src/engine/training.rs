use chrono::NaiveDate;

use super::calendar::add_weeks;
use super::rounding::scale_weeks;
use crate::domain::training::{TrainingGoal, TrainingInput, TrainingMilestone, TrainingResult};
use crate::errors::InvalidInputError;

/// Where a goal's first milestone lands relative to the running cursor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Anchor {
    /// Starts at the cursor.
    Cursor,
    /// Overlaps earlier goals: `max(cursor - lead, floor)`.
    Overlap { lead: u32, floor: u32 },
}

#[derive(Clone, Copy, Debug)]
struct MilestoneTemplate {
    offset_weeks: u32,
    /// Fixed offsets are not shortened by prior experience.
    fixed: bool,
    skill: &'static str,
    description: &'static str,
}

const fn fixed(
    offset_weeks: u32,
    skill: &'static str,
    description: &'static str,
) -> MilestoneTemplate {
    MilestoneTemplate { offset_weeks, fixed: true, skill, description }
}

const fn scaled(
    offset_weeks: u32,
    skill: &'static str,
    description: &'static str,
) -> MilestoneTemplate {
    MilestoneTemplate { offset_weeks, fixed: false, skill, description }
}

struct GoalPlan {
    anchor: Anchor,
    milestones: &'static [MilestoneTemplate],
}

const POTTY_MILESTONES: &[MilestoneTemplate] = &[
    fixed(2, "Potty Training Begins", "Establish routine, take puppy out frequently"),
    scaled(6, "Daytime Consistency", "Puppy understands outdoor potty routine"),
    scaled(12, "Fully Potty Trained", "Reliable indoor/outdoor distinction"),
];

const CRATE_MILESTONES: &[MilestoneTemplate] = &[
    fixed(0, "Crate Introduction", "Make crate comfortable and inviting"),
    scaled(3, "Short Stays", "Puppy comfortable for 30-60 minutes"),
    scaled(6, "Overnight Comfort", "Sleeps through the night in crate"),
];

const BASIC_MILESTONES: &[MilestoneTemplate] = &[
    fixed(0, "Name Recognition", "Puppy responds to their name"),
    scaled(2, "Sit Command", "Reliable sit on command"),
    scaled(4, "Stay & Come", "Basic impulse control established"),
    scaled(8, "Advanced Commands", "Down, leave it, drop it mastered"),
];

const LEASH_MILESTONES: &[MilestoneTemplate] = &[
    fixed(0, "Leash Introduction", "Get comfortable wearing collar and leash"),
    scaled(3, "Loose Leash Walking", "Walks without pulling"),
    scaled(6, "Distraction Training", "Maintains focus during walks"),
];

const SOCIALIZATION_MILESTONES: &[MilestoneTemplate] = &[
    fixed(0, "Early Socialization", "Safe exposure to new sights and sounds"),
    scaled(4, "Dog Interactions", "Positive experiences with other dogs"),
    scaled(8, "Public Confidence", "Comfortable in various environments"),
];

const BITE_MILESTONES: &[MilestoneTemplate] = &[
    fixed(0, "Bite Inhibition Starts", "Redirect biting to appropriate toys"),
    scaled(4, "Gentle Mouth", "Reduced biting intensity"),
    scaled(8, "No Biting", "Puppy understands not to bite humans"),
];

fn goal_plan(goal: TrainingGoal) -> GoalPlan {
    match goal {
        TrainingGoal::Potty => GoalPlan { anchor: Anchor::Cursor, milestones: POTTY_MILESTONES },
        TrainingGoal::Crate => {
            GoalPlan { anchor: Anchor::Overlap { lead: 10, floor: 1 }, milestones: CRATE_MILESTONES }
        }
        TrainingGoal::Basic => {
            GoalPlan { anchor: Anchor::Overlap { lead: 8, floor: 2 }, milestones: BASIC_MILESTONES }
        }
        TrainingGoal::Leash => {
            GoalPlan { anchor: Anchor::Overlap { lead: 6, floor: 3 }, milestones: LEASH_MILESTONES }
        }
        TrainingGoal::Socialization => {
            GoalPlan {
                anchor: Anchor::Overlap { lead: 10, floor: 1 },
                milestones: SOCIALIZATION_MILESTONES,
            }
        }
        TrainingGoal::Bite => {
            GoalPlan { anchor: Anchor::Overlap { lead: 8, floor: 1 }, milestones: BITE_MILESTONES }
        }
    }
}

pub fn compute_training(
    input: &TrainingInput,
    today: NaiveDate,
) -> Result<TrainingResult, InvalidInputError> {
    validate(input)?;

    let pace_percent = if input.has_experience { 80 } else { 100 };
    let mut cursor = 0_u32;
    let mut milestones = Vec::new();

    // BTreeSet iteration yields goals in their fixed timeline order.
    for goal in &input.goals {
        let plan = goal_plan(*goal);
        let start = match plan.anchor {
            Anchor::Cursor => cursor,
            Anchor::Overlap { lead, floor } => cursor.saturating_sub(lead).max(floor),
        };

        let mut end = start;
        for template in plan.milestones {
            let offset = if template.fixed {
                template.offset_weeks
            } else {
                scale_weeks(template.offset_weeks, pace_percent)
            };
            let week = start + offset;
            end = end.max(week);
            milestones.push(TrainingMilestone {
                week,
                puppy_age_weeks: input.current_age_weeks.saturating_add(week),
                goal: *goal,
                skill: template.skill.to_string(),
                description: template.description.to_string(),
            });
        }

        cursor = cursor.max(end);
    }

    milestones.sort_by_key(|milestone| milestone.week);

    let daily_minutes = (input.weekly_hours * 60.0 / 7.0).round() as u32;
    let completion_date = add_weeks(today, cursor, "goals")?;

    tracing::debug!(
        event_name = "engine.training.computed",
        goals = input.goals.len(),
        total_weeks = cursor,
        daily_minutes,
        "training timeline computed"
    );

    Ok(TrainingResult { milestones, total_weeks: cursor, daily_minutes, completion_date })
}

fn validate(input: &TrainingInput) -> Result<(), InvalidInputError> {
    if input.goals.is_empty() {
        return Err(InvalidInputError::NoGoalsSelected);
    }
    if input.current_age_weeks == 0 {
        return Err(InvalidInputError::NonPositive { field: "current_age_weeks" });
    }
    if !input.weekly_hours.is_finite() {
        return Err(InvalidInputError::NotNumeric {
            field: "weekly_hours",
            value: input.weekly_hours.to_string(),
        });
    }
    if input.weekly_hours <= 0.0 {
        return Err(InvalidInputError::NonPositive { field: "weekly_hours" });
    }
    Ok(())
}
