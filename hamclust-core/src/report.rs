//! Result types for clustering runs.

/// Represents the output of a [`crate::Hamclust::run`] invocation.
///
/// The cluster structure itself is not retained; the run reports only the
/// counts needed to answer "how many clusters".
///
/// # Examples
/// ```
/// use hamclust_core::ClusterReport;
///
/// let report = ClusterReport::new(5, 2);
/// assert_eq!(report.distinct_vectors(), 5);
/// assert_eq!(report.tree_edges(), 2);
/// assert_eq!(report.cluster_count(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClusterReport {
    distinct_vectors: usize,
    tree_edges: usize,
}

impl ClusterReport {
    /// Builds a report from the vertex count and the number of merges
    /// performed.
    ///
    /// # Panics
    /// Panics when `tree_edges` exceeds `distinct_vectors`; every merge joins
    /// two previously distinct components, so a spanning forest can never
    /// contain more edges than vertices.
    #[must_use]
    pub fn new(distinct_vectors: usize, tree_edges: usize) -> Self {
        assert!(
            tree_edges <= distinct_vectors,
            "a spanning forest has at most one edge per vertex"
        );
        Self {
            distinct_vectors,
            tree_edges,
        }
    }

    /// Returns the number of distinct vectors seen during loading.
    #[must_use]
    pub const fn distinct_vectors(&self) -> usize {
        self.distinct_vectors
    }

    /// Returns the number of merges performed across all weight classes.
    #[must_use]
    pub const fn tree_edges(&self) -> usize {
        self.tree_edges
    }

    /// Returns the number of clusters remaining after the greedy merge.
    ///
    /// Every merge reduces the component count by exactly one, so the count
    /// is `distinct_vectors - tree_edges`. An empty input yields zero.
    #[must_use]
    pub const fn cluster_count(&self) -> usize {
        self.distinct_vectors - self.tree_edges
    }
}
