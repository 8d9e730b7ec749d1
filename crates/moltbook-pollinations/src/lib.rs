//! Streaming chat-completion client for Moltbook.
//!
//! This crate provides:
//! - Chat message types sent to the completion endpoint
//! - Incremental decoding of `data:` event-stream lines into text fragments
//! - An HTTP client that exposes a completion as a lazy fragment stream

mod client;
mod config;
mod error;
pub mod event;
mod message;

pub use client::{FragmentStream, PollinationsClient, decode_fragments};
pub use config::{
    DEFAULT_API_URL, DEFAULT_MODEL, DEFAULT_REASONING_EFFORT, DEFAULT_TEMPERATURE,
    DEFAULT_TIMEOUT, PollinationsConfig,
};
pub use error::PollinationsError;
pub use event::{EventLine, EventLineDecoder, parse_event_line};
pub use message::{Message, Role};
