//! Error types for the agent.

use thiserror::Error;

/// Errors that can occur in agent operations.
///
/// Both variants are transparent so the underlying fetch or request error is
/// reported as-is.
#[derive(Debug, Error)]
pub enum AgentError {
    /// Completion request or stream failed.
    #[error(transparent)]
    Pollinations(#[from] moltbook_pollinations::PollinationsError),

    /// Skill documents could not be loaded.
    #[error(transparent)]
    Skills(#[from] moltbook_skills::SkillError),
}
