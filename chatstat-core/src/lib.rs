//! # chatstat-core
//!
//! Shared types for the chat export analyzer: [`RawMessage`], [`Message`], [`UserMessages`],
//! [`RankedEntry`], the error enums, and tracing initialization.

pub mod error;
pub mod logger;
pub mod types;

pub use error::{ChatStatError, ParseError, Result, SourceError, TextRepairError};
pub use logger::init_tracing;
pub use types::{Message, RankedEntry, RawMessage, UserMessages};
