//! Builder utilities for configuring the clustering engine.
//!
//! Exposes the execution strategy selection surface and builder validation
//! used before constructing [`Hamclust`] instances.

use std::num::NonZeroUsize;

use crate::{Result, error::HamclustError, hamclust::Hamclust};

/// Default vector width in bits.
pub const DEFAULT_WIDTH: usize = 24;

/// Default minimum Hamming distance between distinct clusters.
pub const DEFAULT_SEPARATION: usize = 3;

/// Indicates how [`Hamclust`] executes the merge phases when
/// [`Hamclust::run`] is invoked.
///
/// `Auto` resolves deterministically: it selects the parallel path when the
/// `parallel` feature is compiled in and falls back to the sequential path
/// otherwise, so behaviour stays stable across builds. Both paths produce the
/// same cluster count.
///
/// # Examples
/// ```
/// use hamclust_core::ExecutionStrategy;
///
/// let strategy = ExecutionStrategy::Auto;
/// assert!(matches!(strategy, ExecutionStrategy::Auto));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionStrategy {
    /// Allow the library to select an appropriate execution path.
    Auto,
    /// Restrict execution to the single-threaded implementation.
    Sequential,
    /// Run each weight class on a thread pool (requires the `parallel`
    /// feature).
    Parallel,
}

/// Configures and constructs [`Hamclust`] instances.
///
/// # Examples
/// ```
/// use hamclust_core::{ExecutionStrategy, HamclustBuilder};
///
/// let hamclust = HamclustBuilder::new()
///     .with_width(8)
///     .with_separation(3)
///     .with_execution_strategy(ExecutionStrategy::Sequential)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(hamclust.width().get(), 8);
/// assert_eq!(hamclust.separation().get(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct HamclustBuilder {
    width: usize,
    separation: usize,
    execution_strategy: ExecutionStrategy,
}

impl Default for HamclustBuilder {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            separation: DEFAULT_SEPARATION,
            execution_strategy: ExecutionStrategy::Auto,
        }
    }
}

impl HamclustBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use hamclust_core::{ExecutionStrategy, HamclustBuilder};
    ///
    /// let builder = HamclustBuilder::new();
    /// assert_eq!(builder.width(), 24);
    /// assert_eq!(builder.separation(), 3);
    /// assert_eq!(builder.execution_strategy(), ExecutionStrategy::Auto);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the vector width in bits.
    #[must_use]
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Returns the configured vector width.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Overrides the minimum Hamming distance required between clusters.
    ///
    /// The engine merges every implicit edge of weight strictly below this
    /// threshold. A separation of 1 merges nothing and reports the distinct
    /// vector count.
    #[must_use]
    pub fn with_separation(mut self, separation: usize) -> Self {
        self.separation = separation;
        self
    }

    /// Returns the configured separation threshold.
    #[must_use]
    pub fn separation(&self) -> usize {
        self.separation
    }

    /// Sets the execution strategy to use when running the merge phases.
    ///
    /// # Examples
    /// ```
    /// use hamclust_core::{ExecutionStrategy, HamclustBuilder};
    ///
    /// let builder =
    ///     HamclustBuilder::new().with_execution_strategy(ExecutionStrategy::Sequential);
    /// assert_eq!(builder.execution_strategy(), ExecutionStrategy::Sequential);
    /// ```
    #[must_use]
    pub fn with_execution_strategy(mut self, strategy: ExecutionStrategy) -> Self {
        self.execution_strategy = strategy;
        self
    }

    /// Returns the currently configured execution strategy.
    #[must_use]
    pub fn execution_strategy(&self) -> ExecutionStrategy {
        self.execution_strategy
    }

    /// Validates the configuration and constructs a [`Hamclust`] instance.
    ///
    /// # Errors
    /// Returns [`HamclustError::InvalidWidth`] when the width is zero and
    /// [`HamclustError::InvalidSeparation`] when the separation is zero.
    ///
    /// # Examples
    /// ```
    /// use hamclust_core::HamclustBuilder;
    ///
    /// let hamclust = HamclustBuilder::new().build().expect("configuration is valid");
    /// assert_eq!(hamclust.width().get(), 24);
    /// ```
    pub fn build(self) -> Result<Hamclust> {
        let width = NonZeroUsize::new(self.width)
            .ok_or(HamclustError::InvalidWidth { got: self.width })?;
        let separation = NonZeroUsize::new(self.separation).ok_or(
            HamclustError::InvalidSeparation {
                got: self.separation,
            },
        )?;

        Ok(Hamclust::new(width, separation, self.execution_strategy))
    }
}
