//! Everything a front-end shows for one loaded export.

use chatstat_core::{Message, RankedEntry};
use serde::Serialize;

use super::{Chart, Summary};

/// A titled, ordered list of messages for the message list renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageList {
    pub title: String,
    pub messages: Vec<Message>,
}

impl MessageList {
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub summary: Summary,
    pub top_senders: Vec<RankedEntry>,
    pub top_messages: Vec<RankedEntry>,
    pub sender_chart: Chart,
    pub message_chart: Chart,
    pub earliest: MessageList,
    pub latest: MessageList,
}
