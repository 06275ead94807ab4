//! Aggregate counts for a loaded export.

use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total_messages: u64,
    pub unique_senders: u64,
    pub timestamped_messages: u64,
    pub first_timestamp_ms: Option<i64>,
    pub last_timestamp_ms: Option<i64>,
}
