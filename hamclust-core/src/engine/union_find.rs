//! Disjoint-set forest over dense vertex identities.
//!
//! Vertices are addressed by the dense ids handed out by the vertex store, so
//! the forest is a pair of parallel arrays rather than pointer-linked nodes.
//! `find` compresses paths iteratively; recursion depth must not scale with
//! the vertex count.

#[derive(Clone, Debug)]
pub(crate) struct DisjointSetForest {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl DisjointSetForest {
    /// Creates a forest of `n` singleton components.
    pub(crate) fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    /// Returns the representative of `node`'s component, compressing every
    /// visited node onto the root.
    pub(crate) fn find(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[node] != node {
            let parent = self.parent[node];
            self.parent[node] = root;
            node = parent;
        }

        root
    }

    /// Merges the components containing `left` and `right` by rank.
    ///
    /// Precondition: `find(left) != find(right)`. Callers check before
    /// merging; joining a component with itself is a logic error, not a
    /// runtime fault.
    pub(crate) fn union(&mut self, left: usize, right: usize) {
        let mut left_root = self.find(left);
        let mut right_root = self.find(right);
        debug_assert_ne!(
            left_root, right_root,
            "union requires distinct components"
        );
        let left_rank = self.rank[left_root];
        let right_rank = self.rank[right_root];
        if left_rank < right_rank {
            std::mem::swap(&mut left_root, &mut right_root);
        }
        self.parent[right_root] = left_root;
        if left_rank == right_rank {
            self.rank[left_root] = left_rank.saturating_add(1);
        }
    }
}
