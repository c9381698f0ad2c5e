//! Grounded explanation: the candidate set is the only source of codes.
//!
//! One request moves through a single transition into one of four terminal
//! states (see [`AnswerSource`]). Generation failures, including a panicking
//! generator, land in `DatabaseOnly`; search failures land in `Error`. No retries
//! happen here; the generator owns its own timeout and retry.

pub mod context_builder;
pub mod validation;

use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};

use tracing::{debug, info, warn};

use icd_core::errors::{GenerationError, IcdResult};
use icd_core::models::{AnswerSource, CodeView, GroundedAnswer};
use icd_core::traits::IExplanationGenerator;

use crate::engine::SearchEngine;

pub const NO_MATCH_MESSAGE: &str = "I couldn't find any matching ICD-10 codes in the database. \
Please try rephrasing your query or provide more specific medical terms.";

pub const FALLBACK_MESSAGE: &str = "Here are the relevant codes found in our database. \
For detailed explanations, please consult official ICD-10 documentation.";

pub const ERROR_MESSAGE: &str =
    "I apologize, but I encountered an error processing your request. Please try again.";

/// Pairs generated text with exactly the codes the engine found.
pub struct GroundingGuard<'a> {
    engine: &'a SearchEngine<'a>,
    generator: Option<&'a dyn IExplanationGenerator>,
}

impl<'a> GroundingGuard<'a> {
    /// A guard with no generator: answers are database-only.
    pub fn new(engine: &'a SearchEngine<'a>) -> Self {
        Self {
            engine,
            generator: None,
        }
    }

    pub fn with_generator(mut self, generator: &'a dyn IExplanationGenerator) -> Self {
        self.generator = Some(generator);
        self
    }

    /// Search and, when a generator is configured, ask it to explain the results.
    pub fn answer(&self, query: &str) -> GroundedAnswer {
        self.process(query, true)
    }

    /// Search only; the caller opted out of generation.
    pub fn answer_database_only(&self, query: &str) -> GroundedAnswer {
        self.process(query, false)
    }

    fn process(&self, query: &str, use_generation: bool) -> GroundedAnswer {
        let search = catch_unwind(AssertUnwindSafe(|| self.engine.search_views(query, None)));
        let codes = match search {
            Ok(Ok(codes)) => codes,
            Ok(Err(e)) => {
                warn!(error = %e, "search failed while answering query");
                return error_answer();
            }
            Err(payload) => {
                warn!(reason = %panic_message(&*payload), "search panicked while answering query");
                return error_answer();
            }
        };

        if codes.is_empty() {
            info!(query, "no candidate codes");
            return GroundedAnswer {
                codes,
                explanation: NO_MATCH_MESSAGE.to_string(),
                source: AnswerSource::NoResults,
                verified: true,
                ungrounded_mentions: Vec::new(),
            };
        }

        let generator = match self.generator {
            Some(g) if use_generation => g,
            _ => {
                debug!(candidates = codes.len(), "generation skipped");
                return database_only(codes);
            }
        };

        let prompt = context_builder::system_prompt(&codes);
        match call_generator(generator, &prompt, query) {
            Ok(text) => {
                let ungrounded = validation::ungrounded_mentions(&text, &codes);
                if !ungrounded.is_empty() {
                    warn!(
                        generator = generator.name(),
                        mentions = ?ungrounded,
                        "explanation mentions codes outside the candidate set"
                    );
                }
                GroundedAnswer {
                    codes,
                    explanation: text,
                    source: AnswerSource::DatabaseAndGeneration,
                    verified: true,
                    ungrounded_mentions: ungrounded,
                }
            }
            Err(e) => {
                warn!(generator = generator.name(), error = %e, "generation failed, answering from database only");
                database_only(codes)
            }
        }
    }
}

/// Run the generator, turning a panic or an empty reply into a failure.
fn call_generator(
    generator: &dyn IExplanationGenerator,
    system_prompt: &str,
    query: &str,
) -> IcdResult<String> {
    let text = catch_unwind(AssertUnwindSafe(|| generator.generate(system_prompt, query)))
        .map_err(|payload| GenerationError::Panicked {
            reason: panic_message(&*payload),
        })??;

    if text.trim().is_empty() {
        return Err(GenerationError::ParseError {
            reason: "empty explanation".to_string(),
        }
        .into());
    }
    Ok(text)
}

fn database_only(codes: Vec<CodeView>) -> GroundedAnswer {
    GroundedAnswer {
        codes,
        explanation: FALLBACK_MESSAGE.to_string(),
        source: AnswerSource::DatabaseOnly,
        verified: true,
        ungrounded_mentions: Vec::new(),
    }
}

fn error_answer() -> GroundedAnswer {
    GroundedAnswer {
        codes: Vec::new(),
        explanation: ERROR_MESSAGE.to_string(),
        source: AnswerSource::Error,
        verified: false,
        ungrounded_mentions: Vec::new(),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
