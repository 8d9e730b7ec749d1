//! Fetched skill documents.

use serde::Serialize;
use serde_json::{Map, Value};

/// A single fetched skill document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillDocument {
    pub name: String,
    /// URL the content was fetched from.
    pub source: String,
    pub content: String,
}

impl SkillDocument {
    /// Render as a markdown section headed by the document name.
    pub fn section(&self) -> String {
        format!("# {}\n\n{}", self.name, self.content.trim())
    }
}

/// Every document that parameterizes the agent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillBundle {
    pub primary: SkillDocument,
    pub heartbeat: Option<SkillDocument>,
    pub messaging: Option<SkillDocument>,
    pub metadata: Option<Map<String, Value>>,
}

impl SkillBundle {
    /// Documents in prompt order: primary, heartbeat, messaging.
    pub fn documents(&self) -> impl Iterator<Item = &SkillDocument> {
        std::iter::once(&self.primary)
            .chain(self.heartbeat.as_ref())
            .chain(self.messaging.as_ref())
    }

    /// Concatenated document sections for conditioning the model.
    pub fn prompt_context(&self) -> String {
        self.documents()
            .map(SkillDocument::section)
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(name: &str, content: &str) -> SkillDocument {
        SkillDocument {
            name: name.to_string(),
            source: format!("https://example.com/{name}"),
            content: content.to_string(),
        }
    }

    #[test]
    fn test_prompt_context_primary_only() {
        let bundle = SkillBundle {
            primary: doc("Moltbook Skill", "\n  Use the API.  \n"),
            heartbeat: None,
            messaging: None,
            metadata: None,
        };

        assert_eq!(bundle.prompt_context(), "# Moltbook Skill\n\nUse the API.");
    }

    #[test]
    fn test_prompt_context_orders_sections() {
        let bundle = SkillBundle {
            primary: doc("Moltbook Skill", "skill"),
            heartbeat: Some(doc("Moltbook Heartbeat", "beat")),
            messaging: Some(doc("Moltbook Messaging", "dm")),
            metadata: None,
        };

        assert_eq!(
            bundle.prompt_context(),
            "# Moltbook Skill\n\nskill\n\n# Moltbook Heartbeat\n\nbeat\n\n# Moltbook Messaging\n\ndm"
        );
    }

    #[test]
    fn test_prompt_context_skips_missing_heartbeat() {
        let bundle = SkillBundle {
            primary: doc("Moltbook Skill", "skill"),
            heartbeat: None,
            messaging: Some(doc("Moltbook Messaging", "dm")),
            metadata: None,
        };

        assert_eq!(
            bundle.prompt_context(),
            "# Moltbook Skill\n\nskill\n\n# Moltbook Messaging\n\ndm"
        );
    }
}
