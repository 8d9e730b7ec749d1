//! Externally supplied conversation history.

use moltbook_pollinations::{Message, Role};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Author of a history turn. System turns cannot be supplied as history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    User,
    Assistant,
}

impl From<TurnRole> for Role {
    fn from(role: TurnRole) -> Self {
        match role {
            TurnRole::User => Role::User,
            TurnRole::Assistant => Role::Assistant,
        }
    }
}

/// A previous user or assistant turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: TurnRole,
    pub content: String,
}

impl ConversationTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: TurnRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: TurnRole::Assistant,
            content: content.into(),
        }
    }
}

impl From<ConversationTurn> for Message {
    fn from(turn: ConversationTurn) -> Self {
        Message::new(turn.role.into(), turn.content)
    }
}

impl From<&ConversationTurn> for Message {
    fn from(turn: &ConversationTurn) -> Self {
        Message::new(turn.role.into(), turn.content.clone())
    }
}

/// A system message was offered where only history turns are accepted.
#[derive(Debug, Error)]
#[error("system messages cannot be used as conversation turns")]
pub struct SystemTurnError;

impl TryFrom<Message> for ConversationTurn {
    type Error = SystemTurnError;

    fn try_from(message: Message) -> Result<Self, Self::Error> {
        let role = match message.role {
            Role::User => TurnRole::User,
            Role::Assistant => TurnRole::Assistant,
            Role::System => return Err(SystemTurnError),
        };
        Ok(Self {
            role,
            content: message.content,
        })
    }
}
