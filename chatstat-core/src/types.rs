//! Core types: raw and canonical messages, the per-sender dataset, and ranked entries.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

/// One message as found in the export. Untrusted: any field may be missing or have the wrong
/// JSON type, in which case it is `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawMessage {
    pub sender_name: Option<String>,
    pub content: Option<String>,
    pub timestamp_ms: Option<i64>,
}

impl RawMessage {
    /// Reads the known fields out of one element of the `messages` array. Non-objects give an
    /// all-absent record.
    pub fn from_value(value: &Value) -> Self {
        let field_str = |key: &str| value.get(key).and_then(Value::as_str).map(str::to_owned);
        Self {
            sender_name: field_str("sender_name"),
            content: field_str("content"),
            timestamp_ms: value.get("timestamp_ms").and_then(Value::as_i64),
        }
    }
}

/// A normalized, repaired message. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    sender_name: String,
    content: String,
    timestamp_ms: Option<i64>,
}

impl Message {
    pub fn new(sender_name: String, content: String, timestamp_ms: Option<i64>) -> Self {
        Self {
            sender_name,
            content,
            timestamp_ms,
        }
    }

    pub fn sender_name(&self) -> &str {
        &self.sender_name
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn timestamp_ms(&self) -> Option<i64> {
        self.timestamp_ms
    }

    /// Timestamp as a UTC datetime; `None` when absent or out of chrono's range.
    pub fn sent_at(&self) -> Option<DateTime<Utc>> {
        self.timestamp_ms.and_then(DateTime::from_timestamp_millis)
    }
}

/// Messages grouped by sender. Senders keep the order in which they first appeared in the
/// export; each sender's messages keep encounter order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct UserMessages {
    by_sender: IndexMap<String, Vec<Message>>,
}

impl UserMessages {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends to the sender's sequence, creating it on first sight.
    pub fn push(&mut self, message: Message) {
        self.by_sender
            .entry(message.sender_name.clone())
            .or_default()
            .push(message);
    }

    pub fn get(&self, sender_name: &str) -> Option<&[Message]> {
        self.by_sender.get(sender_name).map(Vec::as_slice)
    }

    /// `(sender, messages)` pairs in first-appearance order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Message])> {
        self.by_sender
            .iter()
            .map(|(sender, messages)| (sender.as_str(), messages.as_slice()))
    }

    /// Every message, sender by sender.
    pub fn all_messages(&self) -> Vec<&Message> {
        self.by_sender.values().flatten().collect()
    }

    pub fn sender_count(&self) -> usize {
        self.by_sender.len()
    }

    pub fn total_messages(&self) -> usize {
        self.by_sender.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_sender.is_empty()
    }
}

impl FromIterator<Message> for UserMessages {
    fn from_iter<I: IntoIterator<Item = Message>>(iter: I) -> Self {
        let mut data = Self::new();
        for message in iter {
            data.push(message);
        }
        data
    }
}

/// A `(label, value)` leaderboard row used by both the sender and message rankings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedEntry {
    pub label: String,
    pub value: u64,
}

impl RankedEntry {
    pub fn new(label: impl Into<String>, value: u64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}
