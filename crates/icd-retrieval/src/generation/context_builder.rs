//! Candidate context and system prompt for the generation call.

use icd_core::models::CodeView;

const PROMPT_HEADER: &str = "You are a medical coding assistant specialized in ICD-10 codes.
IMPORTANT RULES:
1. ONLY suggest codes that are present in the database results below.
2. DO NOT make up or suggest codes that are not in the database results.
3. If you are not sure about a code, say so.
4. Explain why each suggested code is relevant.
5. If the database results do not match the query well, acknowledge this.

Current database results:
";

/// One line per candidate: code, short description, long description. Nothing else.
pub fn build_context(codes: &[CodeView]) -> String {
    codes
        .iter()
        .map(|c| {
            format!(
                "{}: {} | Long description: {}",
                c.code,
                single_line(&c.short_desc),
                single_line(&c.long_desc)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// The system prompt with the candidate context embedded.
pub fn system_prompt(codes: &[CodeView]) -> String {
    let mut prompt = String::from(PROMPT_HEADER);
    prompt.push_str(&build_context(codes));
    prompt.push('\n');
    prompt
}

fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
