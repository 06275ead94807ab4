//! Oldest and newest timestamped messages.

use chatstat_core::Message;

/// Timestamped messages in ascending time order; equal timestamps keep input order.
fn timeline<'a, I>(all_messages: I) -> Vec<&'a Message>
where
    I: IntoIterator<Item = &'a Message>,
{
    let mut dated: Vec<&Message> = all_messages
        .into_iter()
        .filter(|m| m.timestamp_ms().is_some())
        .collect();
    dated.sort_by_key(|m| m.timestamp_ms());
    dated
}

/// The `n` earliest timestamped messages, ascending. Fewer are returned if fewer exist.
pub fn earliest<'a, I>(all_messages: I, n: usize) -> Vec<Message>
where
    I: IntoIterator<Item = &'a Message>,
{
    timeline(all_messages)
        .into_iter()
        .take(n)
        .cloned()
        .collect()
}

/// The `n` latest timestamped messages, still ascending.
pub fn latest<'a, I>(all_messages: I, n: usize) -> Vec<Message>
where
    I: IntoIterator<Item = &'a Message>,
{
    let dated = timeline(all_messages);
    let start = dated.len().saturating_sub(n);
    dated.into_iter().skip(start).cloned().collect()
}
