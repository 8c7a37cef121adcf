//! Error types for org-folders
//!
//! This module defines the closed error taxonomy for the crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//! Callers branch on [`Error::code`], never on message text.

use std::fmt;
use thiserror::Error;

/// Message used for raw codes outside the known taxonomy
pub const UNKNOWN_ERROR_MESSAGE: &str = "unknown error";

// ============================================================================
// Error Codes
// ============================================================================

/// Machine-readable error kinds with stable numeric codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// The request value itself was absent
    InvalidRequest,
    /// The organization identifier was the nil UUID
    InvalidOrganizationId,
    /// The page limit was zero or negative
    InvalidLimit,
    /// The cursor was non-empty and could not be decoded
    InvalidCursor,
    /// The backing folder source could not be read
    DataSourceUnavailable,
    /// Process configuration was missing or malformed
    Config,
}

impl ErrorCode {
    /// Every defined code, in numeric order
    pub const ALL: [ErrorCode; 6] = [
        ErrorCode::InvalidRequest,
        ErrorCode::InvalidOrganizationId,
        ErrorCode::InvalidLimit,
        ErrorCode::InvalidCursor,
        ErrorCode::DataSourceUnavailable,
        ErrorCode::Config,
    ];

    /// Stable numeric value of this code
    pub fn as_u16(self) -> u16 {
        match self {
            ErrorCode::InvalidRequest => 0,
            ErrorCode::InvalidOrganizationId => 1,
            ErrorCode::InvalidLimit => 2,
            ErrorCode::InvalidCursor => 3,
            ErrorCode::DataSourceUnavailable => 4,
            ErrorCode::Config => 5,
        }
    }

    /// Look up a code by its numeric value
    pub fn from_u16(raw: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|code| code.as_u16() == raw)
    }

    /// Human-readable message for this code
    pub fn message(self) -> &'static str {
        match self {
            ErrorCode::InvalidRequest => "invalid request, request cannot be absent",
            ErrorCode::InvalidOrganizationId => "invalid organization id, id cannot be nil",
            ErrorCode::InvalidLimit => "invalid limit, limit must be greater than 0",
            ErrorCode::InvalidCursor => "invalid cursor, cursor was not issued by this service",
            ErrorCode::DataSourceUnavailable => "folder data source unavailable",
            ErrorCode::Config => "invalid configuration",
        }
    }

    /// Message for a raw numeric code, falling back to a generic message
    pub fn describe(raw: u16) -> &'static str {
        Self::from_u16(raw).map_or(UNKNOWN_ERROR_MESSAGE, Self::message)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error code {}: {}", self.as_u16(), self.message())
    }
}

// ============================================================================
// Error
// ============================================================================

/// The main error type for org-folders
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Validation Errors
    // ============================================================================
    #[error("invalid request, request cannot be absent")]
    InvalidRequest,

    #[error("invalid organization id, id cannot be nil")]
    InvalidOrganizationId,

    #[error("invalid limit {limit}, limit must be greater than 0")]
    InvalidLimit { limit: i64 },

    #[error("invalid cursor, cursor was not issued by this service")]
    InvalidCursor,

    // ============================================================================
    // Data Source Errors
    // ============================================================================
    #[error("Folder data source unavailable: {message}")]
    DataSourceUnavailable { message: String },

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl Error {
    /// Build an error from a code; always succeeds
    pub fn from_code(code: ErrorCode) -> Self {
        match code {
            ErrorCode::InvalidRequest => Self::InvalidRequest,
            ErrorCode::InvalidOrganizationId => Self::InvalidOrganizationId,
            ErrorCode::InvalidLimit => Self::InvalidLimit { limit: 0 },
            ErrorCode::InvalidCursor => Self::InvalidCursor,
            ErrorCode::DataSourceUnavailable => Self::unavailable(code.message()),
            ErrorCode::Config => Self::config(code.message()),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a data source unavailable error
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::DataSourceUnavailable {
            message: message.into(),
        }
    }

    /// Machine-readable kind of this error
    pub fn code(&self) -> ErrorCode {
        match self {
            Error::InvalidRequest => ErrorCode::InvalidRequest,
            Error::InvalidOrganizationId => ErrorCode::InvalidOrganizationId,
            Error::InvalidLimit { .. } => ErrorCode::InvalidLimit,
            Error::InvalidCursor => ErrorCode::InvalidCursor,
            Error::DataSourceUnavailable { .. }
            | Error::JsonParse(_)
            | Error::YamlParse(_)
            | Error::Io(_) => ErrorCode::DataSourceUnavailable,
            Error::Config { .. } => ErrorCode::Config,
        }
    }

    /// Check if this error is a rejected caller input
    pub fn is_validation(&self) -> bool {
        matches!(
            self.code(),
            ErrorCode::InvalidRequest
                | ErrorCode::InvalidOrganizationId
                | ErrorCode::InvalidLimit
                | ErrorCode::InvalidCursor
        )
    }

    /// Check if this error is retryable
    pub fn is_retryable(&self) -> bool {
        self.code() == ErrorCode::DataSourceUnavailable
    }
}

/// Result type alias for org-folders
pub type Result<T> = std::result::Result<T, Error>;
