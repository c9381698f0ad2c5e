//! # icd-llm
//!
//! [`OpenAiGenerator`] implements `IExplanationGenerator` against any
//! OpenAI-compatible chat completions endpoint. Every failure maps to a
//! `GenerationError`; the grounding guard turns those into a database-only answer.

pub mod client;
pub mod protocol;

pub use client::OpenAiGenerator;
