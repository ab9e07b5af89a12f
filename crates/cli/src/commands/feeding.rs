use puppyparent_core::{FeedingForm, RecommendationEngine};

use super::{CommandContext, CommandResult};
use crate::render;

pub fn run(context: &CommandContext, form: &FeedingForm) -> CommandResult {
    let outcome = form.parse().and_then(|input| context.engine.feeding(&input));
    context.respond("feeding", outcome, render::feeding)
}
