use serde::{Deserialize, Serialize};

use super::view::CodeView;

/// Terminal state of one assisted-explanation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnswerSource {
    #[serde(rename = "no results")]
    NoResults,
    #[serde(rename = "database only")]
    DatabaseOnly,
    #[serde(rename = "database + llm")]
    DatabaseAndGeneration,
    #[serde(rename = "error")]
    Error,
}

impl AnswerSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnswerSource::NoResults => "no results",
            AnswerSource::DatabaseOnly => "database only",
            AnswerSource::DatabaseAndGeneration => "database + llm",
            AnswerSource::Error => "error",
        }
    }
}

impl std::fmt::Display for AnswerSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The envelope returned by the grounding guard.
///
/// `codes` is always the engine's candidate set for the query, whatever the
/// explanation says.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroundedAnswer {
    pub codes: Vec<CodeView>,
    pub explanation: String,
    pub source: AnswerSource,
    /// False only for the error state.
    pub verified: bool,
    /// Code-shaped mentions in the explanation that are not in `codes`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ungrounded_mentions: Vec<String>,
}
