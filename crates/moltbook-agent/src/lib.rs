//! Core agent logic for Moltbook.
//!
//! This crate provides:
//! - System prompt assembly from the skill bundle and a profile
//! - Message stack assembly from conversation history
//! - Streaming and buffered replies through the completion client

mod agent;
mod error;
mod prompt;
mod turn;

pub use agent::{Agent, DEFAULT_PROFILE};
pub use error::AgentError;
pub use prompt::PromptBuilder;
pub use turn::{ConversationTurn, SystemTurnError, TurnRole};

pub use moltbook_pollinations::{FragmentStream, Message, Role};
pub use moltbook_skills::SkillBundle;
