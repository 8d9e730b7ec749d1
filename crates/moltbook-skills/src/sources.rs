use std::time::Duration;

/// Host serving the published Moltbook skill documents.
pub const DEFAULT_BASE_URL: &str = "https://www.moltbook.com";
/// Per-request timeout for document fetches.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(30);

pub const PRIMARY_NAME: &str = "Moltbook Skill";
pub const HEARTBEAT_NAME: &str = "Moltbook Heartbeat";
pub const MESSAGING_NAME: &str = "Moltbook Messaging";

/// Where each skill document is fetched from.
///
/// An optional document with no URL is left out of the bundle without a
/// request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillSources {
    pub primary: String,
    pub heartbeat: Option<String>,
    pub messaging: Option<String>,
    /// JSON metadata document.
    pub metadata: Option<String>,
    pub timeout: Duration,
}

impl Default for SkillSources {
    fn default() -> Self {
        Self::from_base_url(DEFAULT_BASE_URL)
    }
}

impl SkillSources {
    /// Point every document at its standard path under `base_url`.
    pub fn from_base_url(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            primary: format!("{base}/skill.md"),
            heartbeat: Some(format!("{base}/heartbeat.md")),
            messaging: Some(format!("{base}/messaging.md")),
            metadata: Some(format!("{base}/skill.json")),
            timeout: DEFAULT_FETCH_TIMEOUT,
        }
    }

    pub fn with_primary(mut self, url: impl Into<String>) -> Self {
        self.primary = url.into();
        self
    }

    pub fn with_heartbeat(mut self, url: Option<String>) -> Self {
        self.heartbeat = url;
        self
    }

    pub fn with_messaging(mut self, url: Option<String>) -> Self {
        self.messaging = url;
        self
    }

    pub fn with_metadata(mut self, url: Option<String>) -> Self {
        self.metadata = url;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sources() {
        let sources = SkillSources::default();
        assert_eq!(sources.primary, "https://www.moltbook.com/skill.md");
        assert_eq!(
            sources.heartbeat.as_deref(),
            Some("https://www.moltbook.com/heartbeat.md")
        );
        assert_eq!(
            sources.messaging.as_deref(),
            Some("https://www.moltbook.com/messaging.md")
        );
        assert_eq!(
            sources.metadata.as_deref(),
            Some("https://www.moltbook.com/skill.json")
        );
        assert_eq!(sources.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let sources = SkillSources::from_base_url("http://localhost:8080/");
        assert_eq!(sources.primary, "http://localhost:8080/skill.md");
    }
}
