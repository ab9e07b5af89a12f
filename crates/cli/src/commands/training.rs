use puppyparent_core::{RecommendationEngine, TrainingForm};

use super::{CommandContext, CommandResult};
use crate::render;

pub fn run(context: &CommandContext, form: &TrainingForm) -> CommandResult {
    let outcome = form.parse().and_then(|input| context.engine.training(&input, context.today));
    context.respond("training", outcome, render::training)
}
