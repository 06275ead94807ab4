//! Export bytes to the canonical dataset, synchronously.

use chatstat_core::{ParseError, RawMessage, UserMessages};
use serde_json::Value;
use tracing::info;

use crate::normalizer::normalize;

/// Parses an export and normalizes its messages.
///
/// A leading BOM and surrounding whitespace are ignored. Fails only when the bytes are not
/// JSON or there is no `messages` array; individual odd records never fail the load.
pub fn load_pipeline(bytes: &[u8]) -> Result<UserMessages, ParseError> {
    let raw_messages = parse_export(bytes)?;
    let data = normalize(raw_messages);
    info!(
        senders = data.sender_count(),
        messages = data.total_messages(),
        "Loaded chat export"
    );
    Ok(data)
}

/// Reads the `messages` array into untyped-boundary records.
pub fn parse_export(bytes: &[u8]) -> Result<Vec<RawMessage>, ParseError> {
    let bytes = bytes.strip_prefix("\u{feff}".as_bytes()).unwrap_or(bytes);
    let root: Value = serde_json::from_slice(bytes)?;
    let messages = root
        .get("messages")
        .and_then(Value::as_array)
        .ok_or(ParseError::MissingMessages)?;
    Ok(messages.iter().map(RawMessage::from_value).collect())
}
