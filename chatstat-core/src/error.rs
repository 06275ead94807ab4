use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChatStatError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    #[error("Text repair error: {0}")]
    TextRepair(#[from] TextRepairError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// The uploaded content could not be turned into a list of raw messages.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Export has no `messages` array")]
    MissingMessages,
}

/// Decode failure for a single field. Never aborts a whole load.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TextRepairError {
    #[error("Code unit U+{unit:04X} at position {position} does not fit in a byte")]
    WideCodeUnit { unit: u32, position: usize },

    #[error("Byte stream is not valid UTF-8 (valid up to byte {valid_up_to})")]
    InvalidUtf8 { valid_up_to: usize },
}

/// Reading the export bytes failed before parsing started.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Cannot read {name}: {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Not a .json file: {0}")]
    NotJson(String),
}

pub type Result<T> = std::result::Result<T, ChatStatError>;
