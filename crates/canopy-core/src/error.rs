//! Error types for canopy operations.
//!
//! Every error carries a structured [`ErrorCode`] so callers can branch on the
//! kind of failure without matching on display strings.

use thiserror::Error;

/// Result type alias for canopy operations.
pub type CanopyResult<T> = Result<T, CanopyError>;

/// Main error type for all canopy operations.
#[derive(Error, Debug)]
pub enum CanopyError {
    /// A history index that is not currently populated.
    #[error("History index {index} out of range (length {len})")]
    IndexOutOfRange {
        index: isize,
        len: usize,
        code: ErrorCode,
    },

    /// A key label that cannot be encoded or decoded with the separator.
    #[error("Malformed key {field:?} (separator {separator:?})")]
    MalformedKey {
        field: String,
        separator: char,
        code: ErrorCode,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error codes for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // History (HIST_xxx)
    HistIndexOutOfRange,

    // Keys (KEY_xxx)
    KeyContainsSeparator,
    KeyArityMismatch,

    // Configuration (CFG_xxx)
    CfgInvalid,

    // IO
    Io,
}

impl ErrorCode {
    /// Get the string representation of the error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::HistIndexOutOfRange => "HIST_001",
            ErrorCode::KeyContainsSeparator => "KEY_001",
            ErrorCode::KeyArityMismatch => "KEY_002",
            ErrorCode::CfgInvalid => "CFG_001",
            ErrorCode::Io => "IO_001",
        }
    }
}

impl CanopyError {
    /// Create an out-of-range error for a history lookup.
    pub fn index_out_of_range(index: isize, len: usize) -> Self {
        Self::IndexOutOfRange {
            index,
            len,
            code: ErrorCode::HistIndexOutOfRange,
        }
    }

    /// Create a malformed key error for a field containing the separator.
    pub fn malformed_key(field: impl Into<String>, separator: char) -> Self {
        Self::MalformedKey {
            field: field.into(),
            separator,
            code: ErrorCode::KeyContainsSeparator,
        }
    }

    /// Create a malformed key error for a label with the wrong number of fields.
    pub fn key_arity(label: impl Into<String>, separator: char) -> Self {
        Self::MalformedKey {
            field: label.into(),
            separator,
            code: ErrorCode::KeyArityMismatch,
        }
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Get the error code.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::IndexOutOfRange { code, .. } => *code,
            Self::MalformedKey { code, .. } => *code,
            Self::Configuration(_) => ErrorCode::CfgInvalid,
            Self::Io(_) => ErrorCode::Io,
        }
    }

    /// Get a user-friendly suggestion for resolving this error.
    pub fn suggestion(&self) -> Option<&str> {
        match self {
            Self::IndexOutOfRange { .. } => {
                Some("Treat the index as \"no such version\" or check the history length first")
            }
            Self::MalformedKey { .. } => {
                Some("Pick a key separator that does not appear in any field value")
            }
            Self::Configuration(_) => Some("Use a .toml, .json or .yaml config file"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_out_of_range_error() {
        let err = CanopyError::index_out_of_range(-1, 2);
        assert_eq!(err.code(), ErrorCode::HistIndexOutOfRange);
        assert!(err.to_string().contains("-1"));
        assert!(err.suggestion().is_some());
    }

    #[test]
    fn test_malformed_key_error() {
        let err = CanopyError::malformed_key("Dark-Green", '-');
        assert_eq!(err.code(), ErrorCode::KeyContainsSeparator);
        assert!(err.to_string().contains("Dark-Green"));
    }

    #[test]
    fn test_error_code_as_str() {
        assert_eq!(ErrorCode::HistIndexOutOfRange.as_str(), "HIST_001");
        assert_eq!(ErrorCode::KeyContainsSeparator.as_str(), "KEY_001");
        assert_eq!(CanopyError::configuration("bad").code().as_str(), "CFG_001");
    }
}
