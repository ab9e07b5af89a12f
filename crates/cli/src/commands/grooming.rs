use puppyparent_core::{GroomingForm, RecommendationEngine};

use super::{CommandContext, CommandResult};
use crate::render;

pub fn run(context: &CommandContext, form: &GroomingForm) -> CommandResult {
    let outcome = form.parse().and_then(|input| context.engine.grooming(&input));
    context.respond("grooming", outcome, render::grooming)
}
