//! Error types for OxiSWF decoding.
//!
//! Every failure carries the classification code supplied by the caller,
//! the byte offset at which it was detected and the full path of the field
//! being decoded. Errors are raised once at the point of origin and
//! propagated unchanged with `?`.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Opaque error classification attached to a decode call site.
///
/// The engine never interprets the value; it is meaningful only to the
/// table that assigned it and to diagnostics consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct ErrorCode(pub u32);

impl ErrorCode {
    /// Code used for raw cursor reads that were issued without a call site.
    pub const UNCLASSIFIED: Self = Self(0);

    /// Get the raw numeric code.
    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#07X}", self.0)
    }
}

/// The main error type for OxiSWF operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SwfError {
    /// Fewer bits or bytes remain than the current read requires.
    #[error("Read beyond file while parsing {field} ({offset:08X})")]
    Truncated {
        /// Classification code of the failing call site.
        code: ErrorCode,
        /// Byte offset of the cursor when the read was attempted.
        offset: u64,
        /// Full path of the field being decoded.
        field: String,
    },

    /// The input could be read but describes an impossible structure.
    #[error("Malformed structure while parsing {field} ({offset:08X}): {message}")]
    Malformed {
        /// Classification code of the failing call site.
        code: ErrorCode,
        /// Byte offset where the problem was detected.
        offset: u64,
        /// Full path of the field being decoded.
        field: String,
        /// Description of the problem.
        message: String,
    },

    /// The decoder API was used incorrectly by the caller.
    #[error("Invalid argument `{argument}`: {message}")]
    InvalidArgument {
        /// Name of the offending argument.
        argument: &'static str,
        /// Description of the misuse.
        message: String,
    },
}

/// Result type alias for OxiSWF operations.
pub type Result<T> = std::result::Result<T, SwfError>;

impl SwfError {
    /// Create a truncated-input error.
    pub fn truncated(code: ErrorCode, offset: u64, field: impl Into<String>) -> Self {
        Self::Truncated {
            code,
            offset,
            field: field.into(),
        }
    }

    /// Create a malformed-structure error.
    pub fn malformed(
        code: ErrorCode,
        offset: u64,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::Malformed {
            code,
            offset,
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an invalid-argument error.
    pub fn invalid_argument(argument: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument,
            message: message.into(),
        }
    }

    /// Classification code, if the error came from a decode call site.
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            Self::Truncated { code, .. } | Self::Malformed { code, .. } => Some(*code),
            Self::InvalidArgument { .. } => None,
        }
    }

    /// Byte offset at which the failure was detected.
    pub fn offset(&self) -> Option<u64> {
        match self {
            Self::Truncated { offset, .. } | Self::Malformed { offset, .. } => Some(*offset),
            Self::InvalidArgument { .. } => None,
        }
    }

    /// Path of the field being decoded.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Truncated { field, .. } | Self::Malformed { field, .. } => Some(field),
            Self::InvalidArgument { .. } => None,
        }
    }

    /// Check whether this is a truncated-input error.
    pub fn is_truncated(&self) -> bool {
        matches!(self, Self::Truncated { .. })
    }

    /// Check whether this is a malformed-structure error.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed { .. })
    }
}
