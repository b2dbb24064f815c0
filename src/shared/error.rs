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
    /// Success - the report was produced
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (API error, network error, file I/O error, etc.)
    ApplicationError = 3,
    /// The requested package does not exist or has no data
    PackageNotFound = 4,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Maps an application error to the exit code reported to the shell
    pub fn from_error(error: &anyhow::Error) -> Self {
        match error.downcast_ref::<StatsError>() {
            Some(StatsError::PackageNotFound { .. }) => ExitCode::PackageNotFound,
            _ => ExitCode::ApplicationError,
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
            ExitCode::PackageNotFound => write!(f, "Package Not Found (4)"),
        }
    }
}

/// Application-specific errors for npm statistics reports.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// keeping the user-facing messages next to the variants.
#[derive(Debug, Error)]
pub enum StatsError {
    #[error("Package \"{name}\" not found\n\n💡 Hint: Check the spelling, scoped packages need the @scope/ prefix")]
    PackageNotFound { name: String },

    #[error("Invalid package name: \"{name}\"\nReason: {reason}\n\n💡 Hint: npm package names are URL-safe, scoped names look like @scope/name (e.g. \"react\" or \"@types/node\")")]
    InvalidPackageName { name: String, reason: String },

    #[error("Invalid date range: {reason}\n\n💡 Hint: Dates use the YYYY-MM-DD format and may span at most {max_days} days")]
    InvalidDateRange { reason: String, max_days: i64 },

    /// Validation error for requests and builders
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("{service} request failed: {url}\nDetails: {details}\n\n💡 Hint: Please check your internet connection or try again later")]
    ApiError {
        service: String,
        url: String,
        details: String,
    },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid configuration: {message}\n\n💡 Hint: {hint}")]
    ConfigError { message: String, hint: String },
}
