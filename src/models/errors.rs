//! Centralized Error Handling Module
//!
//! Every failure carries a unique error code so logs stay greppable.
//!
//! Error codes follow pattern: CATEGORY_SPECIFIC_ERROR
//! - OUT_xxx: stdout rendering errors
//! - PROBE_xxx: live endpoint probe errors
//! - CFG_xxx: Configuration errors

use std::fmt;

/// Application-wide error type
#[derive(Debug)]
pub struct AppError {
    /// Unique error code for logging
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Optional underlying error
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new AppError
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Create AppError with source error
    pub fn with_source(
        code: ErrorCode,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Unique error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // ============================================
    // Output Errors
    // ============================================
    /// Writing the target lines failed (closed pipe, full disk)
    OutputWriteFailed,

    // ============================================
    // Probe Errors
    // ============================================
    /// Could not connect to the endpoint
    ProbeConnectionFailed,
    /// Probe request timed out
    ProbeTimeout,
    /// Probe request failed for another reason
    ProbeRequestFailed,
    /// Endpoint answered with an unexpected status
    StatusMismatch,

    // ============================================
    // Configuration Errors
    // ============================================
    /// Invalid configuration value
    ConfigInvalidValue,
}

impl ErrorCode {
    /// Get string representation of error code
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OutputWriteFailed => "OUT_WRITE_FAILED",

            Self::ProbeConnectionFailed => "PROBE_CONNECTION_FAILED",
            Self::ProbeTimeout => "PROBE_TIMEOUT",
            Self::ProbeRequestFailed => "PROBE_REQUEST_FAILED",
            Self::StatusMismatch => "PROBE_STATUS_MISMATCH",

            Self::ConfigInvalidValue => "CFG_INVALID_VALUE",
        }
    }

    /// Check if error is retryable
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::ProbeTimeout | Self::ProbeConnectionFailed)
    }
}

// ============================================
// Convenience constructors
// ============================================

impl AppError {
    /// Invalid configuration value
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalidValue, msg)
    }

    /// Endpoint answered with an unexpected status
    pub fn status_mismatch(url: &str, expected: u16, actual: u16) -> Self {
        Self::new(
            ErrorCode::StatusMismatch,
            format!("{} returned {} (expected {})", url, actual, expected),
        )
    }
}

// ============================================
// Result type alias
// ============================================

/// Application Result type
pub type AppResult<T> = Result<T, AppError>;

// ============================================
// Conversion from common error types
// ============================================

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::with_source(ErrorCode::OutputWriteFailed, "Failed to write output", err)
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::with_source(ErrorCode::ProbeTimeout, "Request timeout", err)
        } else if err.is_connect() {
            Self::with_source(ErrorCode::ProbeConnectionFailed, "Connection failed", err)
        } else {
            let message = err.to_string();
            Self::with_source(ErrorCode::ProbeRequestFailed, message, err)
        }
    }
}
