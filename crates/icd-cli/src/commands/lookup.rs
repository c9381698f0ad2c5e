use icd_retrieval::SearchEngine;

use super::read_failure;
use crate::context::AppContext;
use crate::output;

pub fn run(ctx: &AppContext, code: &str, json: bool) -> anyhow::Result<String> {
    let engine = SearchEngine::new(&ctx.store, ctx.config.retrieval.clone());
    let found = engine.lookup(code).map_err(|e| read_failure("lookup", e))?;

    match (found, json) {
        (Some(view), true) => output::to_json(&view),
        (Some(view), false) => Ok(output::render_lookup(&view)),
        (None, true) => Ok("null".to_string()),
        (None, false) => Ok(format!("No code {code} in the database.")),
    }
}
