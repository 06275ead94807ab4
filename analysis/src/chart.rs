//! Turns leaderboards into chart data with deterministic colors.

use chatstat_core::RankedEntry;

use crate::models::{Chart, ChartDatum, ChartKind};

/// Cycled by rank position.
pub const PALETTE: [&str; 7] = [
    "#ff6384", "#36a2eb", "#ffce56", "#4bc0c0", "#9966ff", "#ff9f40", "#c9cbcf",
];

pub fn color_for(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// Each sender's share of the ranked total.
pub fn pie_chart(title: &str, entries: &[RankedEntry]) -> Chart {
    build(ChartKind::Pie, title, entries)
}

/// Message contents against their counts.
pub fn bar_chart(title: &str, entries: &[RankedEntry]) -> Chart {
    build(ChartKind::Bar, title, entries)
}

fn build(kind: ChartKind, title: &str, entries: &[RankedEntry]) -> Chart {
    let total: u64 = entries.iter().map(|e| e.value).sum();
    let data = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| ChartDatum {
            label: entry.label.clone(),
            value: entry.value,
            share: if total == 0 {
                0.0
            } else {
                entry.value as f64 / total as f64
            },
            color: color_for(index).to_string(),
        })
        .collect();

    Chart {
        kind,
        title: title.to_string(),
        data,
    }
}
