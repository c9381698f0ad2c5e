use icd_core::traits::ICodeStore;

use super::read_failure;
use crate::context::AppContext;
use crate::output;

pub fn run(ctx: &AppContext, json: bool) -> anyhow::Result<String> {
    let counts = ctx.store.counts().map_err(|e| read_failure("stats", e))?;
    if json {
        output::to_json(&counts)
    } else {
        Ok(output::render_counts(&counts))
    }
}
