//! Agent that couples the skill bundle with the completion client.

use std::sync::Arc;

use moltbook_pollinations::{FragmentStream, Message, PollinationsClient};
use moltbook_skills::{SkillBundle, SkillCache};
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::{AgentError, PromptBuilder};

/// Profile used when the caller does not supply one.
pub const DEFAULT_PROFILE: &str =
    "You are an autonomous assistant that helps maintain a Moltbook agent.";

/// Agent that answers prompts with the Moltbook skills as system context.
pub struct Agent {
    client: PollinationsClient,
    skills: SkillCache,
    bundle: Arc<SkillBundle>,
    profile: String,
}

impl Agent {
    /// Create an agent, loading the skill bundle through the cache.
    pub async fn new(
        client: PollinationsClient,
        mut skills: SkillCache,
        profile: Option<String>,
    ) -> Result<Self, AgentError> {
        let bundle = skills.load().await?;

        Ok(Self {
            client,
            skills,
            bundle,
            profile: profile.unwrap_or_else(|| DEFAULT_PROFILE.to_string()),
        })
    }

    pub fn skill_bundle(&self) -> &Arc<SkillBundle> {
        &self.bundle
    }

    pub fn profile(&self) -> &str {
        &self.profile
    }

    /// Re-fetch the skill documents and use them for subsequent replies.
    pub async fn refresh_skills(&mut self) -> Result<Arc<SkillBundle>, AgentError> {
        let bundle = self.skills.refresh().await?;
        info!("skill documents refreshed");
        self.bundle = Arc::clone(&bundle);
        Ok(bundle)
    }

    pub fn build_system_prompt(&self) -> String {
        PromptBuilder::build(&self.profile, &self.bundle)
    }

    /// Assemble the request messages around a freshly built system prompt.
    pub fn build_message_stack<I>(&self, user_prompt: &str, history: I) -> Vec<Message>
    where
        I: IntoIterator,
        I::Item: Into<Message>,
    {
        PromptBuilder::message_stack(self.build_system_prompt(), user_prompt, history)
    }

    /// Stream a reply as it is generated.
    #[tracing::instrument(skip_all)]
    pub async fn stream_reply<I>(
        &self,
        user_prompt: &str,
        history: I,
        extra: Option<&Map<String, Value>>,
    ) -> Result<FragmentStream, AgentError>
    where
        I: IntoIterator,
        I::Item: Into<Message>,
    {
        let messages = self.build_message_stack(user_prompt, history);
        debug!(messages = messages.len(), "streaming reply");

        Ok(self.client.stream_complete(&messages, extra).await?)
    }

    /// Return the full reply once generation finishes.
    #[tracing::instrument(skip_all)]
    pub async fn generate_reply<I>(
        &self,
        user_prompt: &str,
        history: I,
        extra: Option<&Map<String, Value>>,
    ) -> Result<String, AgentError>
    where
        I: IntoIterator,
        I::Item: Into<Message>,
    {
        let messages = self.build_message_stack(user_prompt, history);
        debug!(messages = messages.len(), "generating reply");

        let reply = self.client.complete(&messages, extra).await?;
        debug!(reply_len = reply.len(), "reply generated");

        Ok(reply)
    }
}
