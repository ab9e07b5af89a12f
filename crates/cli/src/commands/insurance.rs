use puppyparent_core::{InsuranceForm, RecommendationEngine};

use super::{CommandContext, CommandResult};
use crate::render;

pub fn run(context: &CommandContext, form: &InsuranceForm) -> CommandResult {
    let outcome = form.parse().and_then(|input| context.engine.insurance(&input));
    context.respond("insurance", outcome, render::insurance)
}
