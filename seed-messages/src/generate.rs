//! Generate export-shaped seed messages, optionally mis-encoded the way real exports are.

use analysis::mangle;
use anyhow::Result;
use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

/// One element of the export's `messages` array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedMessage {
    pub sender_name: String,
    pub content: String,
    pub timestamp_ms: i64,
}

/// Top-level export document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedExport {
    pub participants: Vec<Participant>,
    pub messages: Vec<SeedMessage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participant {
    pub name: String,
}

const SENDERS: [&str; 4] = ["Alice", "Bob", "Zo\u{eb}", "Ren\u{e9}e"];

const CONTENTS: [&str; 10] = [
    "hi",
    "lol",
    "see you tomorrow",
    "ok",
    "Liked a message",
    "You sent an attachment.",
    "\u{e7}a va?",
    "\u{1F602}",
    "haha",
    "ok",
];

/// Builds the export from env:
/// - SEED_MESSAGES_COUNT: number of messages (default 100)
/// - SEED_MANGLE: "1" (default) = write text the way the exporter does, "0" = clean UTF-8
pub fn generate_export() -> Result<SeedExport> {
    let count = std::env::var("SEED_MESSAGES_COUNT")
        .ok()
        .and_then(|s| s.trim().parse::<usize>().ok())
        .unwrap_or(100);
    let mangled = std::env::var("SEED_MANGLE")
        .unwrap_or_else(|_| "1".into())
        .trim()
        == "1";

    Ok(build_export(count, mangled))
}

/// Deterministic content and sender rotation; timestamps 15s apart ending now, newest first
/// like real exports.
pub fn build_export(count: usize, mangled: bool) -> SeedExport {
    let encode = |s: &str| if mangled { mangle(s) } else { s.to_string() };
    let base_time = Utc::now() - Duration::seconds(15 * count as i64);

    let mut messages: Vec<SeedMessage> = (0..count)
        .map(|i| SeedMessage {
            // Uneven rotation so senders get different totals.
            sender_name: encode(SENDERS[(i * i + i / 3) % SENDERS.len()]),
            content: encode(CONTENTS[(i * 7 + i / 5) % CONTENTS.len()]),
            timestamp_ms: (base_time + Duration::seconds(15 * i as i64)).timestamp_millis(),
        })
        .collect();
    messages.reverse();

    SeedExport {
        participants: SENDERS
            .iter()
            .map(|name| Participant { name: encode(*name) })
            .collect(),
        messages,
    }
}
