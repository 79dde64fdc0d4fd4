//! Error types for the hamclust core library.
//!
//! Defines the error enums exposed by the public API, their stable
//! machine-readable codes, and a convenient result alias.

use std::sync::Arc;

use thiserror::Error;

use crate::builder::ExecutionStrategy;

/// An error produced by [`crate::VectorSource`] operations.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum VectorSourceError {
    /// Requested index was outside the source's bounds.
    #[error("index {index} is out of bounds")]
    OutOfBounds {
        /// The requested row that exceeded the source bounds.
        index: usize,
    },
}

impl VectorSourceError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> VectorSourceErrorCode {
        match self {
            Self::OutOfBounds { .. } => VectorSourceErrorCode::OutOfBounds,
        }
    }
}

/// Machine-readable error codes for [`VectorSourceError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum VectorSourceErrorCode {
    /// Requested index was outside the source's bounds.
    OutOfBounds,
}

impl VectorSourceErrorCode {
    /// Returns the symbolic identifier for logging and metrics surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OutOfBounds => "VECTOR_SOURCE_OUT_OF_BOUNDS",
        }
    }
}

/// Error type produced when constructing or running [`crate::Hamclust`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum HamclustError {
    /// Vector width must be greater than zero.
    #[error("width must be at least 1 (got {got})")]
    InvalidWidth {
        /// The invalid width supplied by the caller.
        got: usize,
    },
    /// Separation threshold must be greater than zero.
    #[error("separation must be at least 1 (got {got})")]
    InvalidSeparation {
        /// The invalid separation supplied by the caller.
        got: usize,
    },
    /// A source vector did not match the configured width.
    #[error(
        "data source `{data_source}` row {index} has width {got} but {expected} was configured"
    )]
    WidthMismatch {
        /// Identifier for the data source that yielded the vector.
        data_source: Arc<str>,
        /// Row index of the offending vector.
        index: usize,
        /// Width the engine was configured with.
        expected: usize,
        /// Width the source actually produced.
        got: usize,
    },
    /// The requested execution strategy is unavailable in the current build.
    #[error("the requested execution strategy {requested:?} is not available in this build")]
    BackendUnavailable {
        /// Strategy that could not be satisfied by the current build.
        requested: ExecutionStrategy,
    },
    /// A [`crate::VectorSource`] operation failed while loading vectors.
    #[error("data source `{data_source}` failed: {error}")]
    Source {
        /// Identifier for the data source that produced the error.
        data_source: Arc<str>,
        /// Underlying source error bubbled up by the loader.
        #[source]
        error: VectorSourceError,
    },
    /// A synchronisation primitive became poisoned after a panic.
    #[error("lock for {resource} is poisoned")]
    LockPoisoned {
        /// Name of the locked resource that was poisoned.
        resource: &'static str,
    },
    /// An internal invariant was violated, indicating a logic error.
    #[error("engine invariant violated: {invariant} (index {index}, lock_count {lock_count})")]
    InvariantViolation {
        /// Name of the violated invariant to assist debugging.
        invariant: &'static str,
        /// The index that violated the invariant.
        index: usize,
        /// The number of locks available.
        lock_count: usize,
    },
}

impl HamclustError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> HamclustErrorCode {
        match self {
            Self::InvalidWidth { .. } => HamclustErrorCode::InvalidWidth,
            Self::InvalidSeparation { .. } => HamclustErrorCode::InvalidSeparation,
            Self::WidthMismatch { .. } => HamclustErrorCode::WidthMismatch,
            Self::BackendUnavailable { .. } => HamclustErrorCode::BackendUnavailable,
            Self::Source { .. } => HamclustErrorCode::SourceFailure,
            Self::LockPoisoned { .. } => HamclustErrorCode::LockPoisoned,
            Self::InvariantViolation { .. } => HamclustErrorCode::InvariantViolation,
        }
    }
}

/// Machine-readable error codes for [`HamclustError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum HamclustErrorCode {
    /// Vector width must be greater than zero.
    InvalidWidth,
    /// Separation threshold must be greater than zero.
    InvalidSeparation,
    /// A source vector did not match the configured width.
    WidthMismatch,
    /// The requested execution strategy is unavailable in the current build.
    BackendUnavailable,
    /// A vector source operation failed.
    SourceFailure,
    /// A synchronisation primitive became poisoned after a panic.
    LockPoisoned,
    /// An internal invariant was violated.
    InvariantViolation,
}

impl HamclustErrorCode {
    /// Returns the symbolic identifier for logging and metrics surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidWidth => "HAMCLUST_INVALID_WIDTH",
            Self::InvalidSeparation => "HAMCLUST_INVALID_SEPARATION",
            Self::WidthMismatch => "HAMCLUST_WIDTH_MISMATCH",
            Self::BackendUnavailable => "HAMCLUST_BACKEND_UNAVAILABLE",
            Self::SourceFailure => "HAMCLUST_SOURCE_FAILURE",
            Self::LockPoisoned => "HAMCLUST_LOCK_POISONED",
            Self::InvariantViolation => "HAMCLUST_INVARIANT_VIOLATION",
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, HamclustError>;
