//! Pollinations chat-completion client.

use std::collections::VecDeque;
use std::pin::Pin;

use futures_util::stream::{self, BoxStream};
use futures_util::{Stream, StreamExt};
use reqwest::Client;
use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::event::{EventLine, EventLineDecoder, parse_event_line};
use crate::{Message, PollinationsConfig, PollinationsError};

/// Lazily produced text fragments of a completion.
///
/// Each item becomes available once the network read carrying it completes.
/// Dropping the stream drops the underlying response and closes the
/// connection.
pub type FragmentStream = BoxStream<'static, Result<String, PollinationsError>>;

/// Client for an OpenAI-style streaming chat-completion endpoint.
#[derive(Debug, Clone)]
pub struct PollinationsClient {
    http: Client,
    config: PollinationsConfig,
}

impl PollinationsClient {
    /// Create a client from the given configuration.
    pub fn new(config: PollinationsConfig) -> Result<Self, PollinationsError> {
        let http = Client::builder()
            .connect_timeout(config.timeout)
            .read_timeout(config.timeout)
            .build()?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &PollinationsConfig {
        &self.config
    }

    /// Build the JSON request body. Keys in `extra` replace the defaults.
    pub fn request_body(&self, messages: &[Message], extra: Option<&Map<String, Value>>) -> Value {
        let mut body = Map::new();
        body.insert("model".into(), Value::from(self.config.model.as_str()));
        body.insert("messages".into(), serde_json::json!(messages));
        body.insert("temperature".into(), Value::from(self.config.temperature));
        body.insert(
            "reasoning_effort".into(),
            Value::from(self.config.reasoning_effort.as_str()),
        );
        body.insert("stream".into(), Value::Bool(true));

        if let Some(extra) = extra {
            body.extend(extra.iter().map(|(key, value)| (key.clone(), value.clone())));
        }

        Value::Object(body)
    }

    /// Send a completion request and stream the reply fragments.
    ///
    /// Transport failures and non-success statuses are returned before any
    /// fragment is produced. Failures while reading the body surface as an
    /// `Err` item and end the stream.
    #[tracing::instrument(skip_all, fields(model = %self.config.model, messages = messages.len()))]
    pub async fn stream_complete(
        &self,
        messages: &[Message],
        extra: Option<&Map<String, Value>>,
    ) -> Result<FragmentStream, PollinationsError> {
        let body = self.request_body(messages, extra);

        debug!(url = %self.config.api_url, "sending completion request");
        let response = self
            .http
            .post(&self.config.api_url)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PollinationsError::Status { status, body });
        }

        debug!(%status, "completion stream opened");
        Ok(decode_fragments(response.bytes_stream()))
    }

    /// Request a completion and return the concatenated reply.
    pub async fn complete(
        &self,
        messages: &[Message],
        extra: Option<&Map<String, Value>>,
    ) -> Result<String, PollinationsError> {
        let mut fragments = self.stream_complete(messages, extra).await?;

        let mut reply = String::new();
        while let Some(fragment) = fragments.next().await {
            reply.push_str(&fragment?);
        }

        debug!(reply_len = reply.len(), "completion finished");
        Ok(reply)
    }
}

struct FragmentState<S> {
    body: Pin<Box<S>>,
    decoder: EventLineDecoder,
    pending: VecDeque<String>,
    finished: bool,
}

impl<S> FragmentState<S> {
    fn absorb(&mut self, lines: impl IntoIterator<Item = String>) {
        for line in lines {
            match parse_event_line(&line) {
                EventLine::Ignored => {}
                EventLine::Done => {
                    trace!("received done sentinel");
                    self.finished = true;
                    return;
                }
                EventLine::Fragments(fragments) => self.pending.extend(fragments),
            }
        }
    }
}

/// Turn a chunked response body into a stream of delta-content fragments.
///
/// Reading stops at the `[DONE]` sentinel, at the end of the body, or after
/// the first read error, which is yielded as the final item.
pub fn decode_fragments<S, B, E>(body: S) -> FragmentStream
where
    S: Stream<Item = Result<B, E>> + Send + 'static,
    B: AsRef<[u8]> + Send + 'static,
    E: Into<PollinationsError> + Send + 'static,
{
    let state = FragmentState {
        body: Box::pin(body),
        decoder: EventLineDecoder::default(),
        pending: VecDeque::new(),
        finished: false,
    };

    stream::unfold(state, |mut state| async move {
        loop {
            if let Some(fragment) = state.pending.pop_front() {
                return Some((Ok(fragment), state));
            }
            if state.finished {
                return None;
            }

            match state.body.next().await {
                Some(Ok(chunk)) => {
                    let lines = state.decoder.feed(chunk.as_ref());
                    state.absorb(lines);
                }
                Some(Err(e)) => {
                    state.finished = true;
                    return Some((Err(e.into()), state));
                }
                None => {
                    let tail = state.decoder.finish();
                    state.absorb(tail);
                    state.finished = true;
                }
            }
        }
    })
    .boxed()
}
