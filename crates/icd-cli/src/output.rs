//! Human-readable and JSON rendering of command results.

use serde::Serialize;

use icd_core::models::{CodeView, EdgeKind, GraphCounts, GroundedAnswer};
use icd_ingest::IngestSummary;
use icd_retrieval::LookupView;

/// Shown instead of internal errors when a read fails.
pub const READ_FAILURE_MESSAGE: &str =
    "The code database could not answer this request. Please try again.";

pub fn to_json<T: Serialize>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn code_line(view: &CodeView) -> String {
    format!("{:<9} {}", view.display_code, view.short_desc)
}

pub fn render_codes(views: &[CodeView]) -> String {
    if views.is_empty() {
        return "No matching codes.".to_string();
    }
    views.iter().map(code_line).collect::<Vec<_>>().join("\n")
}

pub fn render_lookup(view: &LookupView) -> String {
    let code = &view.code;
    let mut lines = vec![
        format!("{}  {}", code.display_code, code.short_desc),
        format!("  {}", code.long_desc),
    ];
    match &code.category_name {
        Some(name) => lines.push(format!("  category: {} ({})", name, code.category_code)),
        None => lines.push(format!("  category: {}", code.category_code)),
    }
    if !view.parents.is_empty() {
        lines.push(format!("  parents:  {}", view.parents.join(", ")));
    }
    if !view.children.is_empty() {
        lines.push(format!("  children: {}", view.children.join(", ")));
    }
    lines.join("\n")
}

pub fn render_answer(answer: &GroundedAnswer) -> String {
    let mut out = String::new();
    if !answer.codes.is_empty() {
        out.push_str(&render_codes(&answer.codes));
        out.push_str("\n\n");
    }
    out.push_str(&answer.explanation);
    out.push_str(&format!("\n\n[source: {}]", answer.source));
    if !answer.ungrounded_mentions.is_empty() {
        out.push_str(&format!(
            "\n[not in database results: {}]",
            answer.ungrounded_mentions.join(", ")
        ));
    }
    out
}

pub fn render_summary(summary: &IngestSummary) -> String {
    let mut lines = vec![format!(
        "Ingested {}: {} rows, {} upserted, {} skipped, {} failed ({} ms)",
        summary.source,
        summary.total_rows,
        summary.upserted,
        summary.skipped,
        summary.failed,
        summary.elapsed_ms
    )];
    for failure in &summary.failures {
        lines.push(format!("  line {}: {}", failure.line, failure.reason));
    }
    let recorded = summary.failures.len() as u64;
    let total = summary.skipped + summary.failed;
    if total > recorded {
        lines.push(format!("  ... and {} more", total - recorded));
    }
    lines.join("\n")
}

pub fn render_counts(counts: &GraphCounts) -> String {
    [
        ("categories", counts.categories),
        ("codes", counts.codes),
        (EdgeKind::Contains.as_str(), counts.contains_edges),
        (EdgeKind::HasSubcategory.as_str(), counts.hierarchy_edges),
    ]
    .iter()
    .map(|(label, n)| format!("{label:<16} {n}"))
    .collect::<Vec<_>>()
    .join("\n")
}
