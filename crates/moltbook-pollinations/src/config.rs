use std::time::Duration;

/// Default chat-completion endpoint.
pub const DEFAULT_API_URL: &str = "https://gen.pollinations.ai/v1/chat/completions";
/// Default model identifier.
pub const DEFAULT_MODEL: &str = "gemini";
/// Default sampling temperature.
pub const DEFAULT_TEMPERATURE: f64 = 0.6;
/// Default reasoning-effort hint.
pub const DEFAULT_REASONING_EFFORT: &str = "minimal";
/// Default connect and read timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Request settings fixed when a [`crate::PollinationsClient`] is built.
#[derive(Debug, Clone, PartialEq)]
pub struct PollinationsConfig {
    /// Chat-completion endpoint URL.
    pub api_url: String,
    /// Model identifier sent as `model`.
    pub model: String,
    /// Sampling temperature sent as `temperature`.
    pub temperature: f64,
    /// Hint sent as `reasoning_effort`.
    pub reasoning_effort: String,
    /// Applied to connecting and to each body read, not to the whole stream.
    pub timeout: Duration,
}

impl Default for PollinationsConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            reasoning_effort: DEFAULT_REASONING_EFFORT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl PollinationsConfig {
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_reasoning_effort(mut self, reasoning_effort: impl Into<String>) -> Self {
        self.reasoning_effort = reasoning_effort.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
