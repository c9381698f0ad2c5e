//! Candidate scoring and ordering.

pub mod scorer;

pub use scorer::{rank, score, ScoredCode, SCORE_DESCRIPTION_MATCH, SCORE_EXACT_CODE, SCORE_TERM_MATCH};
