use icd_retrieval::SearchEngine;

use super::read_failure;
use crate::context::AppContext;
use crate::output;

pub fn run(ctx: &AppContext, query: &str, limit: Option<usize>, json: bool) -> anyhow::Result<String> {
    let engine = SearchEngine::from_config(&ctx.store, ctx.config.retrieval.clone())?;
    let views = engine
        .search_views(query, limit)
        .map_err(|e| read_failure("search", e))?;
    if json {
        output::to_json(&views)
    } else {
        Ok(output::render_codes(&views))
    }
}
