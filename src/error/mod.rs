//! Centralized error handling for ReadWalk
//! Defines common error types, severity levels, and error codes
//!
//! Only adapters (clipboard, flag storage, terminal host) produce these.
//! The engine logs and swallows them: a failed command leaves state untouched.

use std::fmt;

/// Severity level of an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// Warning - something might be wrong but operation can continue
    Warning,
    /// Standard error - operation failed but navigation can continue
    Error,
    /// Critical error - the host cannot keep running
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
            Self::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Category of the error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorType {
    /// File system or I/O errors
    Io,
    /// System clipboard errors
    Clipboard,
    /// Persisted flag storage errors
    Storage,
    /// Malformed persisted values
    Parse,
    /// Terminal host errors
    Terminal,
    /// Internal logic or invariant violations
    Internal,
    /// Errors that don't fit other categories
    Other,
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io => write!(f, "IO"),
            Self::Clipboard => write!(f, "Clipboard"),
            Self::Storage => write!(f, "Storage"),
            Self::Parse => write!(f, "Parse"),
            Self::Terminal => write!(f, "Terminal"),
            Self::Internal => write!(f, "Internal"),
            Self::Other => write!(f, "Other"),
        }
    }
}

/// A structured error raised by a ReadWalk adapter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkError {
    /// How serious the error is
    pub severity: ErrorSeverity,
    /// What kind of error occurred
    pub kind: ErrorType,
    /// Machine-readable error code (e.g., "CLIPBOARD_WRITE_FAILED")
    pub code: String,
    /// Human-readable description
    pub message: String,
}

impl WalkError {
    /// Create a new standard error (Severity: Error)
    pub fn new(kind: ErrorType, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: ErrorSeverity::Error,
            kind,
            code: code.into(),
            message: message.into(),
        }
    }

    /// Create a new critical error (Severity: Critical)
    pub fn critical(kind: ErrorType, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: ErrorSeverity::Critical,
            kind,
            code: code.into(),
            message: message.into(),
        }
    }

    /// Create a new warning (Severity: Warning)
    pub fn warning(kind: ErrorType, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: ErrorSeverity::Warning,
            kind,
            code: code.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for WalkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}({}): {}",
            self.severity, self.kind, self.code, self.message
        )
    }
}

impl std::error::Error for WalkError {}

impl From<String> for WalkError {
    fn from(msg: String) -> Self {
        Self::new(ErrorType::Other, "GENERIC_ERROR", msg)
    }
}

impl From<&str> for WalkError {
    fn from(msg: &str) -> Self {
        Self::new(ErrorType::Other, "GENERIC_ERROR", msg)
    }
}

impl From<std::io::Error> for WalkError {
    fn from(err: std::io::Error) -> Self {
        Self::new(ErrorType::Io, "IO_ERROR", err.to_string())
    }
}

impl From<arboard::Error> for WalkError {
    fn from(err: arboard::Error) -> Self {
        Self::new(
            ErrorType::Clipboard,
            crate::constants::errors::CLIPBOARD_WRITE_FAILED,
            err.to_string(),
        )
    }
}

/// Result alias for ReadWalk adapter operations
pub type Result<T> = std::result::Result<T, WalkError>;
