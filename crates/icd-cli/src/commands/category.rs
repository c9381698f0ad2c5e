use icd_retrieval::SearchEngine;

use super::read_failure;
use crate::context::AppContext;
use crate::output;

pub fn run(ctx: &AppContext, term: &str, json: bool) -> anyhow::Result<String> {
    let engine = SearchEngine::new(&ctx.store, ctx.config.retrieval.clone());
    let views = engine
        .codes_in_category(term)
        .map_err(|e| read_failure("category", e))?;
    if json {
        output::to_json(&views)
    } else {
        Ok(output::render_codes(&views))
    }
}
