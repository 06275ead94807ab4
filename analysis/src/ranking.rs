//! Leaderboards: most repeated message contents and most active senders.

use chatstat_core::{Message, RankedEntry, UserMessages};
use indexmap::IndexMap;
use tracing::debug;

/// Leaderboard size used when the caller has no preference.
pub const DEFAULT_TOP_LIMIT: usize = 7;

/// Lowercase substrings that mark reactions, attachments and likes rather than typed text.
const EXCLUDED_SUBSTRINGS: [&str; 3] = ["liked a message", "attachment", "like"];

/// Whether a (trimmed) content string takes part in the message frequency ranking.
///
/// Non-ASCII content is excluded, which also drops emoji and non-Latin scripts. Those messages
/// still count towards their sender's total.
pub fn is_rankable_content(content: &str) -> bool {
    if content.is_empty() || !content.is_ascii() {
        return false;
    }
    let lowered = content.to_ascii_lowercase();
    !EXCLUDED_SUBSTRINGS
        .iter()
        .any(|needle| lowered.contains(needle))
}

/// Most frequent message contents, at most `limit`, ties in first-seen order.
pub fn top_messages<'a, I>(all_messages: I, limit: usize) -> Vec<RankedEntry>
where
    I: IntoIterator<Item = &'a Message>,
{
    let mut counts: IndexMap<&str, u64> = IndexMap::new();
    for message in all_messages {
        let content = message.content().trim();
        if is_rankable_content(content) {
            *counts.entry(content).or_insert(0) += 1;
        }
    }
    debug!(distinct = counts.len(), limit, "Ranking message contents");

    rank(counts.into_iter().map(|(label, value)| RankedEntry::new(label, value)), limit)
}

/// Senders by total message count (unfiltered), at most `limit`, ties in first-appearance order.
pub fn top_senders(data: &UserMessages, limit: usize) -> Vec<RankedEntry> {
    rank(
        data.iter()
            .map(|(sender, messages)| RankedEntry::new(sender, messages.len() as u64)),
        limit,
    )
}

fn rank(entries: impl Iterator<Item = RankedEntry>, limit: usize) -> Vec<RankedEntry> {
    let mut items: Vec<RankedEntry> = entries.collect();
    // `sort_by_key` is stable, so equal counts keep encounter order.
    items.sort_by_key(|entry| std::cmp::Reverse(entry.value));
    items.truncate(limit);
    items
}
