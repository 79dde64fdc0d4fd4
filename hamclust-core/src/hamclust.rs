//! Core clustering orchestration for the hamclust library.
//!
//! Provides the [`Hamclust`] runtime entry point: loading vectors from a
//! [`VectorSource`] into the deduplicating store, selecting an execution
//! path, and running the greedy merge phases.

use std::{num::NonZeroUsize, sync::Arc};

use tracing::{info, instrument, warn};

use crate::{
    Result,
    builder::ExecutionStrategy,
    engine::{self, VertexStore},
    error::HamclustError,
    report::ClusterReport,
    source::VectorSource,
};

/// Entry point for running the clustering pipeline.
///
/// # Examples
/// ```
/// use hamclust_core::{BitVector, HamclustBuilder, VectorSource, VectorSourceError};
///
/// struct Codes(Vec<BitVector>);
///
/// impl VectorSource for Codes {
///     fn len(&self) -> usize { self.0.len() }
///     fn name(&self) -> &str { "codes" }
///     fn width(&self) -> usize { 4 }
///     fn vector(&self, index: usize) -> Result<BitVector, VectorSourceError> {
///         self.0
///             .get(index)
///             .cloned()
///             .ok_or(VectorSourceError::OutOfBounds { index })
///     }
/// }
///
/// let source = Codes(vec![
///     BitVector::parse("0000", 4)?,
///     BitVector::parse("0001", 4)?,
///     BitVector::parse("1111", 4)?,
/// ]);
/// let hamclust = HamclustBuilder::new().with_width(4).build()?;
/// let report = hamclust.run(&source)?;
/// assert_eq!(report.distinct_vectors(), 3);
/// assert_eq!(report.cluster_count(), 2);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Hamclust {
    width: NonZeroUsize,
    separation: NonZeroUsize,
    execution_strategy: ExecutionStrategy,
}

impl Hamclust {
    pub(crate) fn new(
        width: NonZeroUsize,
        separation: NonZeroUsize,
        execution_strategy: ExecutionStrategy,
    ) -> Self {
        Self {
            width,
            separation,
            execution_strategy,
        }
    }

    /// Returns the vector width configured for this instance.
    #[must_use]
    pub fn width(&self) -> NonZeroUsize {
        self.width
    }

    /// Returns the configured minimum inter-cluster Hamming distance.
    #[must_use]
    pub fn separation(&self) -> NonZeroUsize {
        self.separation
    }

    /// Returns the execution strategy that will be used when running.
    #[must_use]
    pub fn execution_strategy(&self) -> ExecutionStrategy {
        self.execution_strategy
    }

    /// Executes the clustering pipeline against the provided [`VectorSource`].
    ///
    /// An empty source is not an error: the report simply carries a cluster
    /// count of zero.
    ///
    /// # Errors
    /// Returns [`HamclustError::Source`] when the source fails to yield a
    /// vector, [`HamclustError::WidthMismatch`] when a yielded vector does
    /// not match the configured width, and
    /// [`HamclustError::BackendUnavailable`] when the requested execution
    /// strategy is not compiled into the current build.
    #[instrument(
        name = "core.run",
        err,
        skip(self, source),
        fields(
            data_source = %source.name(),
            items = source.len(),
            width = %self.width,
            separation = %self.separation,
            strategy = ?self.execution_strategy
        ),
    )]
    pub fn run<S: VectorSource>(&self, source: &S) -> Result<ClusterReport> {
        if source.is_empty() {
            warn!(
                data_source = source.name(),
                "data source is empty, reporting zero clusters"
            );
        }

        let store = self.load(source)?;
        let report = self.run_engine(&store)?;
        info!(
            distinct_vectors = report.distinct_vectors(),
            clusters = report.cluster_count(),
            "clustering completed"
        );
        Ok(report)
    }

    fn load<S: VectorSource>(&self, source: &S) -> Result<VertexStore> {
        let mut store = VertexStore::new();
        for index in 0..source.len() {
            let vector = source
                .vector(index)
                .map_err(|error| HamclustError::Source {
                    data_source: Arc::from(source.name()),
                    error,
                })?;
            if vector.width() != self.width.get() {
                return Err(HamclustError::WidthMismatch {
                    data_source: Arc::from(source.name()),
                    index,
                    expected: self.width.get(),
                    got: vector.width(),
                });
            }
            store.insert(vector);
        }
        Ok(store)
    }

    fn run_engine(&self, store: &VertexStore) -> Result<ClusterReport> {
        match self.execution_strategy {
            #[cfg(feature = "parallel")]
            ExecutionStrategy::Auto | ExecutionStrategy::Parallel => {
                engine::cluster_parallel(store, self.separation)
            }
            #[cfg(not(feature = "parallel"))]
            ExecutionStrategy::Auto => Ok(engine::cluster(store, self.separation)),
            ExecutionStrategy::Sequential => Ok(engine::cluster(store, self.separation)),
            #[cfg(not(feature = "parallel"))]
            ExecutionStrategy::Parallel => Err(HamclustError::BackendUnavailable {
                requested: ExecutionStrategy::Parallel,
            }),
        }
    }
}
