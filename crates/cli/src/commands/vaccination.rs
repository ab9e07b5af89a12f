use puppyparent_core::{RecommendationEngine, VaccinationForm};

use super::{CommandContext, CommandResult};
use crate::render;

pub fn run(context: &CommandContext, form: &VaccinationForm) -> CommandResult {
    let outcome =
        form.parse().and_then(|input| context.engine.vaccination(&input, context.today));
    context.respond("vaccination", outcome, render::vaccination)
}
