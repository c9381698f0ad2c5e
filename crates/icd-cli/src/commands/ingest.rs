use std::path::Path;

use anyhow::Context;

use icd_ingest::Ingestor;

use crate::context::AppContext;
use crate::output;

pub fn run(ctx: &AppContext, csv_path: &Path, json: bool) -> anyhow::Result<String> {
    let summary = Ingestor::new(&ctx.store)
        .ingest_path(csv_path)
        .with_context(|| format!("cannot ingest {}", csv_path.display()))?;
    if json {
        output::to_json(&summary)
    } else {
        Ok(output::render_summary(&summary))
    }
}
