//! Error types for bit-string ingestion.

use hamclust_core::BitVectorParseError;
use thiserror::Error;

/// Errors surfaced while loading a bit-string source.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum BitstringSourceError {
    /// Reading from the underlying source failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    /// A line failed to parse under [`crate::MalformedLinePolicy::Reject`].
    ///
    /// Line numbers are 1-based and count the header line.
    #[error("line {line}: {reason}")]
    MalformedLine {
        /// 1-based line number within the input.
        line: usize,
        /// Why the line failed to parse.
        #[source]
        reason: BitVectorParseError,
    },
}

impl BitstringSourceError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> BitstringSourceErrorCode {
        match self {
            Self::Io(_) => BitstringSourceErrorCode::Io,
            Self::MalformedLine { .. } => BitstringSourceErrorCode::MalformedLine,
        }
    }
}

/// Machine-readable error codes for [`BitstringSourceError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum BitstringSourceErrorCode {
    /// Reading from the underlying source failed.
    Io,
    /// A line failed to parse under the reject policy.
    MalformedLine,
}

impl BitstringSourceErrorCode {
    /// Returns the symbolic identifier for logging and metrics surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Io => "BITSTRING_IO",
            Self::MalformedLine => "BITSTRING_MALFORMED_LINE",
        }
    }
}
