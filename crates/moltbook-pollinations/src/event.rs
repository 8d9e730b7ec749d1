//! Event-stream line decoding.
//!
//! Completion responses arrive as newline-separated lines. Only lines of the
//! form `data: <payload>` carry information; the payload is either the
//! `[DONE]` sentinel or a JSON chunk whose `choices[].delta.content` values are
//! the text fragments of the reply.

use serde::Deserialize;
use serde_json::Value;
use tracing::trace;

/// Prefix carried by every payload line.
pub const DATA_PREFIX: &str = "data: ";

/// Payload that terminates the stream.
pub const DONE_SENTINEL: &str = "[DONE]";

/// Classification of a single event-stream line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventLine {
    /// Blank, non-data, malformed, or content-free line.
    Ignored,
    /// The `[DONE]` sentinel; nothing after it is read.
    Done,
    /// Non-empty delta contents, in `choices` order.
    Fragments(Vec<String>),
}

#[derive(Debug, Deserialize)]
struct ChunkPayload {
    #[serde(default)]
    choices: Option<Vec<Value>>,
}

impl ChunkPayload {
    /// Entries without a string `delta.content` are skipped individually.
    fn into_fragments(self) -> Vec<String> {
        self.choices
            .unwrap_or_default()
            .iter()
            .filter_map(|choice| choice.get("delta")?.get("content")?.as_str())
            .filter(|content| !content.is_empty())
            .map(str::to_owned)
            .collect()
    }
}

/// Classify one line of a completion event stream.
pub fn parse_event_line(line: &str) -> EventLine {
    if line.is_empty() {
        return EventLine::Ignored;
    }
    let Some(data) = line.strip_prefix(DATA_PREFIX) else {
        return EventLine::Ignored;
    };

    let data = data.trim();
    if data == DONE_SENTINEL {
        return EventLine::Done;
    }

    match serde_json::from_str::<ChunkPayload>(data) {
        Ok(payload) => {
            let fragments = payload.into_fragments();
            if fragments.is_empty() {
                EventLine::Ignored
            } else {
                EventLine::Fragments(fragments)
            }
        }
        Err(e) => {
            trace!(error = %e, "skipping malformed event line");
            EventLine::Ignored
        }
    }
}

/// Splits an arbitrarily chunked byte stream into lines.
///
/// Bytes are buffered until a `\n` arrives, so multi-byte characters and
/// lines split across network reads decode intact. A trailing `\r` is dropped.
#[derive(Debug, Default)]
pub struct EventLineDecoder {
    buffer: Vec<u8>,
    /// Length of the buffered prefix already known to hold no `\n`.
    scanned: usize,
}

impl EventLineDecoder {
    /// Feed bytes and drain every line completed by them.
    pub fn feed(&mut self, bytes: &[u8]) -> Vec<String> {
        self.buffer.extend_from_slice(bytes);

        let mut lines = Vec::new();
        let mut start = 0;
        let mut search_from = self.scanned;
        while let Some(offset) = self.buffer[search_from..].iter().position(|byte| *byte == b'\n') {
            let newline = search_from + offset;
            lines.push(decode_line(&self.buffer[start..newline]));
            start = newline + 1;
            search_from = start;
        }

        self.buffer.drain(..start);
        self.scanned = self.buffer.len();
        lines
    }

    /// Flush a final line that was not newline-terminated.
    pub fn finish(&mut self) -> Option<String> {
        if self.buffer.is_empty() {
            return None;
        }
        let rest = std::mem::take(&mut self.buffer);
        self.scanned = 0;
        Some(decode_line(&rest))
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

fn decode_line(raw: &[u8]) -> String {
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    String::from_utf8_lossy(raw).into_owned()
}
