use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Scripts can tell a missing match apart from a broken invocation
/// or an unreadable catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// The command completed and produced a result
    Success = 0,
    /// No brand matched the serial number or the requested id
    NoMatch = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (file I/O, parse error, invalid catalog, etc.)
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
            ExitCode::NoMatch => write!(f, "No Match (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Errors raised while building or loading a brand catalog.
///
/// Lookups themselves never fail; a missing match is `None`.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog file not found: {path}\n\n💡 Hint: {suggestion}")]
    CatalogNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse catalog file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file follows the catalog schema (a top-level 'brands' list)")]
    CatalogParseError { path: PathBuf, details: String },

    #[error("Unsupported catalog format: {path}\n\n💡 Hint: Use a .yml, .yaml, .json or .toml file")]
    UnsupportedCatalogFormat { path: PathBuf },

    #[error("Invalid brand '{id}': {reason}")]
    InvalidBrand { id: String, reason: String },

    #[error("Duplicate brand id '{id}'\n\n💡 Hint: Brand ids must be unique across the catalog")]
    DuplicateBrandId { id: String },

    #[error("Catalog contains no brands\n\n💡 Hint: Add at least one entry to the 'brands' list")]
    EmptyCatalog,

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}
