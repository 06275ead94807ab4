//! Assembles every derived view from a loaded dataset.
//!
//! Nothing is cached: each call recomputes from [`UserMessages`].

use chatstat_core::UserMessages;

use crate::chart::{bar_chart, pie_chart};
use crate::chronology::{earliest, latest};
use crate::models::{MessageList, Report, Summary};
use crate::ranking::{top_messages, top_senders, DEFAULT_TOP_LIMIT};

/// Default size of the earliest/latest message lists.
pub const DEFAULT_CHRONO_COUNT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    /// Leaderboard size for both rankings.
    pub top_limit: usize,
    /// Number of messages in each of the earliest/latest lists.
    pub chrono_count: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            top_limit: DEFAULT_TOP_LIMIT,
            chrono_count: DEFAULT_CHRONO_COUNT,
        }
    }
}

pub fn summarize(data: &UserMessages) -> Summary {
    let all = data.all_messages();
    let timestamps = all.iter().filter_map(|m| m.timestamp_ms());
    let (first, last, dated) = timestamps.fold((None, None, 0u64), |(lo, hi, n), ts| {
        (
            Some(lo.map_or(ts, |lo: i64| lo.min(ts))),
            Some(hi.map_or(ts, |hi: i64| hi.max(ts))),
            n + 1,
        )
    });

    Summary {
        total_messages: all.len() as u64,
        unique_senders: data.sender_count() as u64,
        timestamped_messages: dated,
        first_timestamp_ms: first,
        last_timestamp_ms: last,
    }
}

pub fn build_report(data: &UserMessages, options: &ReportOptions) -> Report {
    let all = data.all_messages();
    let senders = top_senders(data, options.top_limit);
    let messages = top_messages(all.iter().copied(), options.top_limit);

    Report {
        summary: summarize(data),
        sender_chart: pie_chart("Top senders", &senders),
        message_chart: bar_chart("Most repeated messages", &messages),
        top_senders: senders,
        top_messages: messages,
        earliest: MessageList {
            title: "First messages".to_string(),
            messages: earliest(all.iter().copied(), options.chrono_count),
        },
        latest: MessageList {
            title: "Latest messages".to_string(),
            messages: latest(all.iter().copied(), options.chrono_count),
        },
    }
}
