//! Chart model shared by the sender and message leaderboards.

use serde::Serialize;

/// How a renderer should present the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    /// Each datum is a share of the whole.
    Pie,
    /// Categorical axis of labels against a count axis.
    Bar,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartDatum {
    pub label: String,
    pub value: u64,
    /// Fraction of the chart total, in `0.0..=1.0`. Zero when the total is zero.
    pub share: f64,
    /// `#rrggbb`, picked by rank position.
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub kind: ChartKind,
    pub title: String,
    pub data: Vec<ChartDatum>,
}

impl Chart {
    pub fn total(&self) -> u64 {
        self.data.iter().map(|d| d.value).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
