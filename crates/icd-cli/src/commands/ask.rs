use tracing::warn;

use icd_llm::OpenAiGenerator;
use icd_retrieval::{GroundingGuard, SearchEngine};

use crate::context::AppContext;
use crate::output;

/// Search, then explain the results with the configured generator when allowed.
/// A generator that cannot be built (e.g. no API key) degrades to database-only.
pub fn run(ctx: &AppContext, query: &str, no_llm: bool, json: bool) -> anyhow::Result<String> {
    let engine = SearchEngine::from_config(&ctx.store, ctx.config.retrieval.clone())?;

    let generator = if no_llm || !ctx.config.generation.enabled {
        None
    } else {
        match OpenAiGenerator::from_config(ctx.config.generation.clone()) {
            Ok(generator) => Some(generator),
            Err(e) => {
                warn!(error = %e, "generation unavailable, answering from database only");
                None
            }
        }
    };

    let mut guard = GroundingGuard::new(&engine);
    if let Some(generator) = &generator {
        guard = guard.with_generator(generator);
    }
    let answer = if no_llm {
        guard.answer_database_only(query)
    } else {
        guard.answer(query)
    };

    if json {
        output::to_json(&answer)
    } else {
        Ok(output::render_answer(&answer))
    }
}
