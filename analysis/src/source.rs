//! Where export bytes come from.
//!
//! [`ExportSource`] is the only asynchronous step; everything after the read is synchronous.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chatstat_core::SourceError;

/// A selected export that can be read into memory.
#[async_trait]
pub trait ExportSource: Send + Sync {
    /// Display name used in logs and report headers.
    fn name(&self) -> &str;
    /// Reads the whole export.
    async fn read(&self) -> Result<Vec<u8>, SourceError>;
}

/// An export file on disk. Only `.json` files are accepted.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    name: String,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path.display().to_string();
        Self { path, name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn is_json(&self) -> bool {
        self.path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
    }
}

#[async_trait]
impl ExportSource for FileSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn read(&self) -> Result<Vec<u8>, SourceError> {
        if !self.is_json() {
            return Err(SourceError::NotJson(self.name.clone()));
        }
        tokio::fs::read(&self.path)
            .await
            .map_err(|source| SourceError::Io {
                name: self.name.clone(),
                source,
            })
    }
}

/// In-memory export, for tests and piped input.
#[derive(Debug, Clone)]
pub struct BytesSource {
    name: String,
    bytes: Vec<u8>,
}

impl BytesSource {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }
}

#[async_trait]
impl ExportSource for BytesSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn read(&self) -> Result<Vec<u8>, SourceError> {
        Ok(self.bytes.clone())
    }
}
