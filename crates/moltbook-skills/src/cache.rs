//! Single-slot cache for the skill bundle.

use std::sync::Arc;

use reqwest::Client;
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use crate::{
    HEARTBEAT_NAME, MESSAGING_NAME, PRIMARY_NAME, SkillBundle, SkillDocument, SkillError,
    SkillSources,
};

/// Fetches the skill documents once and memoizes the bundle.
///
/// `load` and `refresh` are the only mutators. Callers sharing a cache
/// between tasks must serialize access themselves.
#[derive(Debug)]
pub struct SkillCache {
    http: Client,
    sources: SkillSources,
    slot: Option<Arc<SkillBundle>>,
}

impl SkillCache {
    /// Create an empty cache for the given sources.
    pub fn new(sources: SkillSources) -> Result<Self, SkillError> {
        let http = Client::builder()
            .timeout(sources.timeout)
            .build()
            .map_err(SkillError::Client)?;

        Ok(Self {
            http,
            sources,
            slot: None,
        })
    }

    pub fn sources(&self) -> &SkillSources {
        &self.sources
    }

    /// The cached bundle, if one has been loaded.
    pub fn cached(&self) -> Option<Arc<SkillBundle>> {
        self.slot.clone()
    }

    /// Return the cached bundle, fetching it first if the slot is empty.
    pub async fn load(&mut self) -> Result<Arc<SkillBundle>, SkillError> {
        if let Some(bundle) = &self.slot {
            debug!("skill bundle served from cache");
            return Ok(Arc::clone(bundle));
        }

        let bundle = Arc::new(self.fetch_bundle().await?);
        self.slot = Some(Arc::clone(&bundle));
        Ok(bundle)
    }

    /// Discard any cached bundle and fetch a fresh one.
    pub async fn refresh(&mut self) -> Result<Arc<SkillBundle>, SkillError> {
        self.slot = None;
        self.load().await
    }

    #[tracing::instrument(skip(self), fields(primary = %self.sources.primary))]
    async fn fetch_bundle(&self) -> Result<SkillBundle, SkillError> {
        let primary = self.fetch_document(PRIMARY_NAME, &self.sources.primary).await?;

        let heartbeat = match &self.sources.heartbeat {
            Some(url) => Some(self.fetch_document(HEARTBEAT_NAME, url).await?),
            None => None,
        };

        let messaging = match &self.sources.messaging {
            Some(url) => Some(self.fetch_document(MESSAGING_NAME, url).await?),
            None => None,
        };

        let metadata = match &self.sources.metadata {
            Some(url) => self.fetch_metadata(url).await,
            None => None,
        };

        info!(
            heartbeat = heartbeat.is_some(),
            messaging = messaging.is_some(),
            metadata = metadata.is_some(),
            "loaded skill bundle"
        );

        Ok(SkillBundle {
            primary,
            heartbeat,
            messaging,
            metadata,
        })
    }

    async fn fetch_document(&self, name: &str, url: &str) -> Result<SkillDocument, SkillError> {
        let fetch_error = |source| SkillError::Fetch {
            name: name.to_string(),
            url: url.to_string(),
            source,
        };

        let response = self.http.get(url).send().await.map_err(fetch_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SkillError::Status {
                name: name.to_string(),
                url: url.to_string(),
                status,
            });
        }

        let content = response.text().await.map_err(fetch_error)?;
        debug!(document = name, url, content_len = content.len(), "fetched skill document");

        Ok(SkillDocument {
            name: name.to_string(),
            source: url.to_string(),
            content,
        })
    }

    /// Fetch the metadata object. Any failure degrades to `None`.
    async fn fetch_metadata(&self, url: &str) -> Option<Map<String, Value>> {
        let response = match self.http.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(url, error = %e, "skill metadata unavailable");
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!(url, %status, "skill metadata unavailable");
            return None;
        }

        match response.json::<Value>().await {
            Ok(Value::Object(metadata)) => Some(metadata),
            Ok(other) => {
                warn!(url, kind = json_kind(&other), "skill metadata is not a JSON object");
                None
            }
            Err(e) => {
                warn!(url, error = %e, "skill metadata is not valid JSON");
                None
            }
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
