//! Greedy minimum-spanning-forest clustering over implicit Hamming edges.
//!
//! This is Kruskal's algorithm specialised to the discrete edge weights
//! `1..separation`, with all heavier edges implicitly discarded. Weight
//! classes are processed strictly in increasing order and each runs to
//! completion before the next begins; stopping once every edge of weight
//! below the separation threshold has been considered leaves the remaining
//! components pairwise separated by at least that threshold.

#[cfg(feature = "parallel")]
mod concurrent;
mod neighbors;
mod store;
mod union_find;

use std::num::NonZeroUsize;

use tracing::debug;

use crate::report::ClusterReport;

#[cfg(feature = "parallel")]
pub(crate) use concurrent::cluster_parallel;
pub(crate) use neighbors::Neighbors;
pub(crate) use store::VertexStore;
pub(crate) use union_find::DisjointSetForest;

/// Runs the two-phase greedy merge sequentially and reports the final
/// component count.
pub(crate) fn cluster(store: &VertexStore, separation: NonZeroUsize) -> ClusterReport {
    let mut forest = DisjointSetForest::new(store.len());
    let mut tree_edges = 0usize;

    for distance in 1..separation.get() {
        let merged = merge_weight_class(store, &mut forest, distance);
        debug!(distance, merged, "weight class merged");
        tree_edges += merged;
    }

    ClusterReport::new(store.len(), tree_edges)
}

/// Considers every implicit edge of weight `distance` once, merging distinct
/// components, and returns the number of merges performed.
fn merge_weight_class(
    store: &VertexStore,
    forest: &mut DisjointSetForest,
    distance: usize,
) -> usize {
    let mut merged = 0usize;
    for vertex in store.ids() {
        for candidate in Neighbors::new(store.label(vertex), distance) {
            let Some(other) = store.lookup(&candidate) else {
                continue;
            };
            if forest.find(vertex.index()) != forest.find(other.index()) {
                forest.union(vertex.index(), other.index());
                merged += 1;
            }
        }
    }
    merged
}
