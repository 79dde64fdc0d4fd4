//! Deduplicating vertex store for the clustering engine.
//!
//! Assigns each distinct vector a dense identity in insertion order. The
//! dense identity space doubles as the index space of the disjoint-set
//! forest, replacing the pointer-linked vertices of a naive design.

use std::collections::HashMap;

use crate::vector::BitVector;

/// Dense identity of a distinct vector.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct VertexId(usize);

impl VertexId {
    /// Returns the dense index backing this identity.
    pub(crate) const fn index(self) -> usize {
        self.0
    }
}

/// Owns the set of distinct vectors and their identities.
#[derive(Debug, Default)]
pub(crate) struct VertexStore {
    index: HashMap<BitVector, VertexId>,
    labels: Vec<BitVector>,
}

impl VertexStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Inserts `label`, returning the existing identity when the vector has
    /// been seen before.
    pub(crate) fn insert(&mut self, label: BitVector) -> VertexId {
        if let Some(&existing) = self.index.get(&label) {
            return existing;
        }
        let id = VertexId(self.labels.len());
        self.index.insert(label.clone(), id);
        self.labels.push(label);
        id
    }

    /// Looks up the identity of `label` without side effects.
    pub(crate) fn lookup(&self, label: &BitVector) -> Option<VertexId> {
        self.index.get(label).copied()
    }

    /// Returns the label of a previously inserted vertex.
    pub(crate) fn label(&self, id: VertexId) -> &BitVector {
        &self.labels[id.0]
    }

    /// Returns the number of distinct vectors inserted so far.
    pub(crate) fn len(&self) -> usize {
        self.labels.len()
    }

    /// Yields all identities in insertion order.
    ///
    /// Insertion order does not affect the final cluster count, but keeping
    /// the merge order deterministic makes test failures reproducible.
    pub(crate) fn ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        (0..self.labels.len()).map(VertexId)
    }
}
