//! Parallel merge phases backed by a concurrent union-find.
//!
//! Neighbour generation and store lookups are read-only and run freely on the
//! Rayon pool; only unions into the forest synchronise. The union-find uses
//! one lock per node id (acquired by root id), locking `(min_root, max_root)`
//! to remain deadlock-free. Each union re-validates that the roots used to
//! derive the lock order are still current after acquiring locks; if they
//! change, the attempt is retried.
//!
//! The final cluster count is identical to the sequential path: the count is
//! invariant to the order in which same-weight edges are processed.

use std::num::NonZeroUsize;
use std::sync::{
    Mutex,
    atomic::{AtomicUsize, Ordering},
};

use rayon::prelude::*;
use tracing::debug;

use crate::{error::HamclustError, report::ClusterReport};

use super::store::{VertexId, VertexStore};
use super::Neighbors;

/// Runs the weight-class phases in parallel and reports the final component
/// count.
pub(crate) fn cluster_parallel(
    store: &VertexStore,
    separation: NonZeroUsize,
) -> Result<ClusterReport, HamclustError> {
    let union_find = ConcurrentUnionFind::new(store.len());
    let ids: Vec<VertexId> = store.ids().collect();

    for distance in 1..separation.get() {
        // The phase boundary is a hard barrier: no weight-(d+1) union may
        // start while weight-d edges remain unconsidered.
        ids.par_iter().try_for_each(|&vertex| {
            for candidate in Neighbors::new(store.label(vertex), distance) {
                let Some(other) = store.lookup(&candidate) else {
                    continue;
                };
                union_find.try_union(vertex.index(), other.index())?;
            }
            Ok(())
        })?;
        debug!(
            distance,
            components = union_find.components(),
            "weight class merged"
        );
    }

    let tree_edges = store.len() - union_find.components();
    Ok(ClusterReport::new(store.len(), tree_edges))
}

struct ConcurrentUnionFind {
    parents: Vec<AtomicUsize>,
    ranks: Vec<AtomicUsize>,
    components: AtomicUsize,
    locks: Vec<Mutex<()>>,
}

impl ConcurrentUnionFind {
    fn new(node_count: usize) -> Self {
        let mut parents = Vec::with_capacity(node_count);
        let mut ranks = Vec::with_capacity(node_count);
        for id in 0..node_count {
            parents.push(AtomicUsize::new(id));
            ranks.push(AtomicUsize::new(0));
        }

        let locks = (0..node_count).map(|_| Mutex::new(())).collect();

        Self {
            parents,
            ranks,
            components: AtomicUsize::new(node_count),
            locks,
        }
    }

    fn components(&self) -> usize {
        self.components.load(Ordering::Acquire)
    }

    fn try_union(&self, left: usize, right: usize) -> Result<bool, HamclustError> {
        loop {
            let left_root = self.find(left);
            let right_root = self.find(right);

            if left_root == right_root {
                return Ok(false);
            }

            let lock_pair = lock_order(left_root, right_root);
            let (first_lock, second_lock) = lock_pair;
            let _first_guard = self.lock_root(first_lock)?;
            let _second_guard = (second_lock != first_lock)
                .then(|| self.lock_root(second_lock))
                .transpose()?;

            let left_root = self.find(left);
            let right_root = self.find(right);

            if left_root == right_root {
                return Ok(false);
            }

            if lock_order(left_root, right_root) != lock_pair {
                continue;
            }

            if !self.is_root(left_root) || !self.is_root(right_root) {
                continue;
            }

            return self.union_roots(left_root, right_root);
        }
    }

    fn lock_root(&self, index: usize) -> Result<std::sync::MutexGuard<'_, ()>, HamclustError> {
        let lock = self
            .locks
            .get(index)
            .ok_or(HamclustError::InvariantViolation {
                invariant: "root lock index must be within the lock table",
                index,
                lock_count: self.locks.len(),
            })?;

        lock.lock().map_err(|_| HamclustError::LockPoisoned {
            resource: "union-find root lock",
        })
    }

    fn union_roots(&self, left_root: usize, right_root: usize) -> Result<bool, HamclustError> {
        let left_rank = self.ranks[left_root].load(Ordering::Relaxed);
        let right_rank = self.ranks[right_root].load(Ordering::Relaxed);

        let (parent, child) = choose_parent_child(left_root, right_root, left_rank, right_rank);

        self.parents[child].store(parent, Ordering::Release);

        if left_rank == right_rank {
            self.ranks[parent].fetch_add(1, Ordering::Relaxed);
        }

        self.components.fetch_sub(1, Ordering::AcqRel);
        Ok(true)
    }

    fn is_root(&self, node: usize) -> bool {
        self.parents[node].load(Ordering::Acquire) == node
    }

    fn find(&self, node: usize) -> usize {
        let mut current = node;
        loop {
            let parent = self.parents[current].load(Ordering::Acquire);

            if parent == current {
                return current;
            }

            let grandparent = self.parents[parent].load(Ordering::Acquire);

            if grandparent != parent {
                self.parents[current].store(grandparent, Ordering::Release);
            }

            current = parent;
        }
    }
}

fn lock_order(first: usize, second: usize) -> (usize, usize) {
    if first <= second {
        (first, second)
    } else {
        (second, first)
    }
}

fn choose_parent_child(
    left_root: usize,
    right_root: usize,
    left_rank: usize,
    right_rank: usize,
) -> (usize, usize) {
    if left_rank > right_rank {
        return (left_root, right_root);
    }
    if right_rank > left_rank {
        return (right_root, left_root);
    }

    lock_order(left_root, right_root)
}
