//! Skill documents for the Moltbook agent.
//!
//! The agent's instructions live in a small set of remote documents: a
//! required skill document, optional heartbeat and messaging guides, and an
//! optional JSON metadata record. [`SkillCache`] fetches them once and keeps
//! the resulting [`SkillBundle`] until it is explicitly refreshed.

mod bundle;
mod cache;
mod error;
mod sources;

pub use bundle::{SkillBundle, SkillDocument};
pub use cache::SkillCache;
pub use error::SkillError;
pub use sources::{
    DEFAULT_BASE_URL, DEFAULT_FETCH_TIMEOUT, HEARTBEAT_NAME, MESSAGING_NAME, PRIMARY_NAME,
    SkillSources,
};
