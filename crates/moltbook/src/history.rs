//! Parsing of `--history` arguments.

use moltbook_agent::{ConversationTurn, TurnRole};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("history is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("history must be a JSON array of turns")]
    NotArray,

    #[error("history entry {index} is not an object")]
    NotObject { index: usize },

    #[error("history entry {index} has role {role}, expected \"user\" or \"assistant\"")]
    InvalidRole { index: usize, role: String },

    #[error("history entry {index} has no string content")]
    InvalidContent { index: usize },
}

/// Parse a JSON array of `{"role": ..., "content": ...}` objects.
pub fn parse_history(raw: &str) -> Result<Vec<ConversationTurn>, HistoryError> {
    let value: Value = serde_json::from_str(raw)?;
    let Value::Array(entries) = value else {
        return Err(HistoryError::NotArray);
    };

    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| parse_turn(index, entry))
        .collect()
}

fn parse_turn(index: usize, entry: Value) -> Result<ConversationTurn, HistoryError> {
    let Value::Object(mut fields) = entry else {
        return Err(HistoryError::NotObject { index });
    };

    let role = match fields.get("role") {
        Some(Value::String(role)) if role == "user" => TurnRole::User,
        Some(Value::String(role)) if role == "assistant" => TurnRole::Assistant,
        Some(other) => {
            return Err(HistoryError::InvalidRole {
                index,
                role: other.to_string(),
            });
        }
        None => {
            return Err(HistoryError::InvalidRole {
                index,
                role: "null".to_string(),
            });
        }
    };

    match fields.remove("content") {
        Some(Value::String(content)) => Ok(ConversationTurn { role, content }),
        _ => Err(HistoryError::InvalidContent { index }),
    }
}
