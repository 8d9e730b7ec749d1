//! System prompt builder for Moltbook.

use moltbook_pollinations::{Message, Role};
use moltbook_skills::SkillBundle;

/// Builds system prompts from a profile and the skill bundle.
pub struct PromptBuilder;

impl PromptBuilder {
    /// Build the full system prompt.
    ///
    /// Sections, separated by blank lines: the profile, the interaction
    /// contract, a metadata summary, then the skill documents.
    pub fn build(profile: &str, bundle: &SkillBundle) -> String {
        let mut prompt = String::new();

        prompt.push_str(profile);
        prompt.push_str("\n\n");

        prompt.push_str(INTERACTION_CONTRACT);
        prompt.push_str("\n\n");

        prompt.push_str(&Self::metadata_summary(bundle));
        prompt.push_str("\n\n");

        prompt.push_str(&bundle.prompt_context());

        prompt
    }

    /// Assemble `[system, history..., user]`.
    ///
    /// System-role entries in `history` are dropped, so `system_prompt` is
    /// always the only system message.
    pub fn message_stack<I>(system_prompt: String, user_prompt: &str, history: I) -> Vec<Message>
    where
        I: IntoIterator,
        I::Item: Into<Message>,
    {
        let mut messages = vec![Message::system(system_prompt)];

        messages.extend(
            history
                .into_iter()
                .map(Into::into)
                .filter(|message: &Message| message.role != Role::System),
        );

        messages.push(Message::user(user_prompt));
        messages
    }

    /// One-line summary of the skill metadata.
    pub fn metadata_summary(bundle: &SkillBundle) -> String {
        match &bundle.metadata {
            Some(metadata) if !metadata.is_empty() => {
                format!("Skill metadata: {}", serde_json::Value::Object(metadata.clone()))
            }
            _ => METADATA_UNAVAILABLE.to_string(),
        }
    }
}

const METADATA_UNAVAILABLE: &str = "Skill metadata unavailable.";

const INTERACTION_CONTRACT: &str = "Follow the Moltbook interaction contract described in the provided \
skill documents. Always respect cooldown limits, security warnings, and heartbeat guidance. \
When crafting API requests, use the exact endpoints and HTTP methods from the docs. \
If you need to post or comment, ensure the action is justified and mention any required \
cooldown management.";

#[cfg(test)]
mod tests {
    use super::*;
    use moltbook_skills::SkillDocument;
    use pretty_assertions::assert_eq;

    fn bundle(metadata: Option<serde_json::Value>) -> SkillBundle {
        SkillBundle {
            primary: SkillDocument {
                name: "Moltbook Skill".to_string(),
                source: "https://www.moltbook.com/skill.md".to_string(),
                content: "Register first.\n".to_string(),
            },
            heartbeat: Some(SkillDocument {
                name: "Moltbook Heartbeat".to_string(),
                source: "https://www.moltbook.com/heartbeat.md".to_string(),
                content: "Check the feed.".to_string(),
            }),
            messaging: None,
            metadata: metadata.and_then(|value| value.as_object().cloned()),
        }
    }

    #[test]
    fn test_build_orders_sections() {
        let prompt = PromptBuilder::build("You are a test agent.", &bundle(None));

        let expected = format!(
            "You are a test agent.\n\n{INTERACTION_CONTRACT}\n\nSkill metadata unavailable.\n\n\
             # Moltbook Skill\n\nRegister first.\n\n# Moltbook Heartbeat\n\nCheck the feed."
        );
        assert_eq!(prompt, expected);
    }

    #[test]
    fn test_contract_mentions_constraints() {
        for phrase in [
            "cooldown limits",
            "security warnings",
            "heartbeat guidance",
            "exact endpoints and HTTP methods",
        ] {
            assert!(INTERACTION_CONTRACT.contains(phrase), "missing {phrase}");
        }
    }

    #[test]
    fn test_metadata_summary_renders_json() {
        let summary = PromptBuilder::metadata_summary(&bundle(Some(serde_json::json!({
            "version": "1.0.0"
        }))));
        assert_eq!(summary, r#"Skill metadata: {"version":"1.0.0"}"#);
    }

    #[test]
    fn test_empty_metadata_counts_as_unavailable() {
        let summary = PromptBuilder::metadata_summary(&bundle(Some(serde_json::json!({}))));
        assert_eq!(summary, "Skill metadata unavailable.");
    }
}
