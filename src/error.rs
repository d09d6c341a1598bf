//! Error types for drumgen.
//!
//! Defines all error codes and types used throughout the generator for
//! consistent error handling and reporting.

use std::fmt;

/// Error codes returned by the generator.
///
/// These codes let callers (and the CLI summary) programmatically
/// distinguish error conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Audio format parameters are unsupported.
    /// Trigger: bits per sample other than 16, or zero channels.
    InvalidFormat,

    /// Voice descriptor fails validation.
    /// Trigger: negative or non-finite duration, zero sample rate.
    InvalidDescriptor,

    /// Output file or directory could not be created or written.
    /// Trigger: permission denied, missing parent, disk full.
    IoFailure,
}

impl ErrorCode {
    /// Returns the string representation of the error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidFormat => "INVALID_FORMAT",
            ErrorCode::InvalidDescriptor => "INVALID_DESCRIPTOR",
            ErrorCode::IoFailure => "IO_FAILURE",
        }
    }

    /// Returns a human-readable description of the error.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::InvalidFormat => "Unsupported audio format parameters",
            ErrorCode::InvalidDescriptor => "Voice descriptor failed validation",
            ErrorCode::IoFailure => "Output file or directory could not be written",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Main error type for generator operations.
#[derive(Debug)]
pub struct GenError {
    /// The error code identifying the type of error.
    pub code: ErrorCode,
    /// Human-readable error message with context.
    pub message: String,
    /// Optional underlying cause of the error.
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl GenError {
    /// Creates a new GenError with the given code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new GenError with an underlying cause.
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

    /// Creates an INVALID_FORMAT error.
    pub fn invalid_format(reason: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::InvalidFormat,
            format!("Unsupported format: {}", reason.into()),
        )
    }

    /// Creates an INVALID_DESCRIPTOR error.
    pub fn invalid_descriptor(reason: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::InvalidDescriptor,
            format!("Invalid voice descriptor: {}", reason.into()),
        )
    }

    /// Creates an IO_FAILURE error wrapping a std::io::Error.
    pub fn io_failure(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::with_source(
            ErrorCode::IoFailure,
            format!("I/O failure: {}", context.into()),
            source,
        )
    }
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for GenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Result type alias using GenError.
pub type Result<T> = std::result::Result<T, GenError>;
