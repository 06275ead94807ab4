//! Analysis crate: decoding and aggregation pipeline for chat exports.
//!
//! ## Modules
//!
//! - [`repair`] – Text repair for byte-per-character strings and literal escapes
//! - [`normalizer`] – Raw records to [`UserMessages`](chatstat_core::UserMessages)
//! - [`pipeline`] – Export bytes to the normalized dataset
//! - [`ranking`] – Message frequency and sender leaderboards
//! - [`chronology`] – Earliest and latest timestamped messages
//! - [`chart`] – Chart data with palette colors
//! - [`report`] – Summary and full report assembly
//! - [`models`] – Chart, MessageList, Report, Summary
//! - [`source`] – ExportSource trait (async read)
//! - [`session`] – Current dataset holder

pub mod chart;
pub mod chronology;
pub mod models;
pub mod normalizer;
pub mod pipeline;
pub mod ranking;
pub mod repair;
pub mod report;
pub mod session;
pub mod source;


pub use chronology::{earliest, latest};
pub use models::{Chart, ChartDatum, ChartKind, MessageList, Report, Summary};
pub use normalizer::normalize;
pub use pipeline::{load_pipeline, parse_export};
pub use ranking::{is_rankable_content, top_messages, top_senders, DEFAULT_TOP_LIMIT};
pub use repair::{mangle, repair};
pub use report::{build_report, summarize, ReportOptions, DEFAULT_CHRONO_COUNT};
pub use session::Session;
pub use source::{BytesSource, ExportSource, FileSource};
