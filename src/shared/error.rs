use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// The free-style JSON passed to `validate` did not parse
    InvalidJson = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (missing data, unreadable file, write error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidJson => write!(f, "Invalid JSON (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for the content preview.
#[derive(Debug, Error)]
pub enum PreviewError {
    #[error("Content data directory not found: {path}\n\n💡 Hint: Pass --data-dir or set data_dir in content-preview.config.yml")]
    DataDirNotFound { path: PathBuf },

    #[error("Failed to read {what}: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    ContentReadError {
        what: String,
        path: PathBuf,
        details: String,
    },

    #[error("Failed to parse {what}: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file contains valid JSON")]
    ContentParseError {
        what: String,
        path: PathBuf,
        details: String,
    },

    #[error("Rule not found: {rule_id}\n\n💡 Hint: Run the `table` command to list the available rule ids")]
    RuleNotFound { rule_id: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid sort column: {column}\n\n💡 Hint: Use one of status, plugin, error_key, product_code, role, category")]
    InvalidSortColumn { column: String },
}
