use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Order file has no header row")]
    MissingHeader,

    #[error("Row {line} has {found} columns, expected at least {expected}")]
    ShortRow {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("Could not parse file {}: {reason}", path.display())]
    UnparseableFile { path: PathBuf, reason: String },

    #[error("Cannot read orders directory {}: {source}", path.display())]
    OrdersDirError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Clipboard error: {message}")]
    ClipboardError { message: String },

    #[error("No valid LCSC part number found in clipboard: {content:?}")]
    InvalidPartNumber { content: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Parse,
    Io,
    Config,
    Query,
    External,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl LookupError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            LookupError::CsvError(_)
            | LookupError::MissingHeader
            | LookupError::ShortRow { .. }
            | LookupError::UnparseableFile { .. } => ErrorCategory::Parse,
            LookupError::IoError(_) | LookupError::OrdersDirError { .. } => ErrorCategory::Io,
            LookupError::InvalidConfigValueError { .. } => ErrorCategory::Config,
            LookupError::InvalidPartNumber { .. } => ErrorCategory::Query,
            LookupError::ClipboardError { .. } => ErrorCategory::External,
        }
    }

    /// Drives the process exit code: `Low` still exits successfully.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            LookupError::InvalidPartNumber { .. } | LookupError::UnparseableFile { .. } => {
                ErrorSeverity::Low
            }
            LookupError::CsvError(_)
            | LookupError::MissingHeader
            | LookupError::ShortRow { .. }
            | LookupError::ClipboardError { .. } => ErrorSeverity::Medium,
            LookupError::InvalidConfigValueError { .. } | LookupError::OrdersDirError { .. } => {
                ErrorSeverity::High
            }
            LookupError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            LookupError::InvalidPartNumber { .. } => {
                "No valid LCSC part number found in clipboard.".to_string()
            }
            LookupError::UnparseableFile { path, .. } => {
                format!("Could not parse file: {}", path.display())
            }
            LookupError::OrdersDirError { path, .. } => {
                format!("Cannot read orders directory: {}", path.display())
            }
            LookupError::ClipboardError { .. } => "Could not read the clipboard.".to_string(),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Parse => "Check that the file is an LCSC or DigiKey order export",
            ErrorCategory::Io => "Check that the path exists and is readable",
            ErrorCategory::Config => "Check the command-line arguments (see --help)",
            ErrorCategory::Query => {
                "Copy an LCSC part number (e.g. C123456) or pass the query as an argument"
            }
            ErrorCategory::External => {
                "Install a clipboard helper (pbpaste, wl-paste, xclip or xsel) or pass the query as an argument"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, LookupError>;
