//! The currently loaded export.
//!
//! A [`Session`] owns at most one [`UserMessages`]. A successful load replaces it wholesale;
//! a failed read or parse leaves the previous dataset in place.

use chatstat_core::{ChatStatError, UserMessages};
use tracing::{error, instrument};

use crate::models::Report;
use crate::pipeline::load_pipeline;
use crate::report::{build_report, ReportOptions};
use crate::source::ExportSource;

#[derive(Debug, Default)]
pub struct Session {
    current: Option<UserMessages>,
    loaded_from: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&UserMessages> {
        self.current.as_ref()
    }

    /// Name of the source behind the current dataset.
    pub fn loaded_from(&self) -> Option<&str> {
        self.loaded_from.as_deref()
    }

    /// Parses `bytes` and, on success, makes them the current dataset.
    pub fn load_bytes(
        &mut self,
        name: &str,
        bytes: &[u8],
    ) -> Result<&UserMessages, ChatStatError> {
        let data = load_pipeline(bytes).inspect_err(|e| {
            error!(source = name, error = %e, "Failed to parse export, keeping previous data");
        })?;
        self.loaded_from = Some(name.to_string());
        Ok(&*self.current.insert(data))
    }

    /// Reads from `source`, then runs the synchronous pipeline to completion.
    #[instrument(skip_all, fields(source = source.name()))]
    pub async fn load(
        &mut self,
        source: &dyn ExportSource,
    ) -> Result<&UserMessages, ChatStatError> {
        let bytes = source.read().await.inspect_err(|e| {
            error!(error = %e, "Failed to read export, keeping previous data");
        })?;
        self.load_bytes(source.name(), &bytes)
    }

    /// Recomputes every view from the current dataset.
    pub fn report(&self, options: &ReportOptions) -> Option<Report> {
        self.current
            .as_ref()
            .map(|data| build_report(data, options))
    }
}
