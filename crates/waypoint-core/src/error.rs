//! Error types for the waypoint library.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Comprehensive error type for all plan operations.
#[derive(Error, Debug)]
pub enum PlanError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// No record is stored under the given plan name
    #[error("Plan '{name}' not found")]
    PlanNotFound { name: String },
    /// A record already exists under the given plan name
    #[error("Plan '{name}' already exists")]
    PlanAlreadyExists { name: String },
    /// Step not found in the plan
    #[error("Step '{id}' not found in plan")]
    StepNotFound { id: String },
    /// A step with the same id already exists in the plan
    #[error("Step '{id}' already exists in plan")]
    DuplicateStep { id: String },
    /// Stored bytes could not be parsed into a plan
    #[error("Malformed record for plan '{name}': {source}")]
    MalformedRecord {
        name: String,
        #[source]
        source: serde_json::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Precondition violations and invalid arguments
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> PlanError {
        PlanError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> PlanError {
        PlanError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl PlanError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Shorthand for a missing plan.
    pub fn plan_not_found(name: impl Into<String>) -> Self {
        Self::PlanNotFound { name: name.into() }
    }

    /// True for both missing plans and missing steps.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::PlanNotFound { .. } | Self::StepNotFound { .. })
    }

    /// True when the underlying storage medium failed.
    pub fn is_io_failure(&self) -> bool {
        matches!(
            self,
            Self::Database { .. } | Self::FileSystem { .. } | Self::XdgDirectory(_)
        )
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| PlanError::database(message).with_source(e))
    }
}

/// Specialized extension trait for file system Results.
pub trait FsResultExt<T> {
    /// Map I/O errors to a file system error at `path`.
    fn fs_context(self, path: &Path) -> Result<T>;
}

impl<T> FsResultExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, path: &Path) -> Result<T> {
        self.map_err(|source| PlanError::FileSystem {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Result type alias for plan operations
pub type Result<T> = std::result::Result<T, PlanError>;
