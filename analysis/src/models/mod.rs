//! Display-ready structures handed to renderers.

mod chart;
mod report;
mod summary;

pub use chart::{Chart, ChartDatum, ChartKind};
pub use report::{MessageList, Report};
pub use summary::Summary;
