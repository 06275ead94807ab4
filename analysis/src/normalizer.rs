//! Raw export records to the canonical per-sender dataset.

use chatstat_core::{Message, RawMessage, UserMessages};
use tracing::{debug, warn};

use crate::repair::repair;

/// Builds [`UserMessages`] from raw records. Every record becomes exactly one message; a field
/// whose repair fails keeps its original text.
pub fn normalize(raw_messages: Vec<RawMessage>) -> UserMessages {
    let mut data = UserMessages::new();
    let mut fallbacks = 0usize;

    for (index, raw) in raw_messages.into_iter().enumerate() {
        let sender_name = repair_field(
            raw.sender_name.unwrap_or_default(),
            "sender_name",
            index,
            &mut fallbacks,
        );
        let content = repair_field(
            raw.content.unwrap_or_default(),
            "content",
            index,
            &mut fallbacks,
        );
        data.push(Message::new(sender_name, content, raw.timestamp_ms));
    }

    debug!(
        senders = data.sender_count(),
        messages = data.total_messages(),
        fallbacks,
        "Normalized export"
    );
    data
}

fn repair_field(original: String, field: &str, index: usize, fallbacks: &mut usize) -> String {
    match repair(&original) {
        Ok(repaired) => repaired,
        Err(e) => {
            warn!(field, index, error = %e, "Text repair failed, keeping original value");
            *fallbacks += 1;
            original
        }
    }
}
