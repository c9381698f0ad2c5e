use crate::errors::IcdResult;

/// Text-generation collaborator used by the grounding guard.
pub trait IExplanationGenerator: Send + Sync {
    /// Produce an explanation for `user_query`. `system_prompt` already embeds the
    /// candidate context. Any failure is reported as `Err`, never by panicking.
    fn generate(&self, system_prompt: &str, user_query: &str) -> IcdResult<String>;

    /// Short name for logs.
    fn name(&self) -> &str {
        "generator"
    }
}
