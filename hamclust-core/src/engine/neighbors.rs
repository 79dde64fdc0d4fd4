//! Implicit-edge generation: lazy enumeration of Hamming neighbours.
//!
//! The clustering graph is never materialised. For a vector of width `L` and
//! a target distance `d`, every neighbour is obtained by flipping one
//! distinct `d`-combination of bit positions, yielding `C(L, d)` candidates.
//! All candidates within one call are distinct vectors, so no deduplication
//! is required.

use crate::vector::BitVector;

/// Lazy iterator over all vectors at exactly `distance` bit flips from a
/// label.
///
/// Combinations are advanced in lexicographic order over ascending position
/// tuples `(p_0 < p_1 < … < p_{d-1})`.
pub(crate) struct Neighbors<'a> {
    label: &'a BitVector,
    positions: Vec<usize>,
    exhausted: bool,
}

impl<'a> Neighbors<'a> {
    /// Creates the neighbour sequence for `label` at the given distance.
    ///
    /// A distance of zero or one exceeding the label width yields an empty
    /// sequence; the engine only ever asks for distances in
    /// `1..separation`.
    pub(crate) fn new(label: &'a BitVector, distance: usize) -> Self {
        let exhausted = distance == 0 || distance > label.width();
        Self {
            label,
            positions: (0..distance).collect(),
            exhausted,
        }
    }

    fn flip_current(&self) -> BitVector {
        let mut candidate = self.label.clone();
        for &position in &self.positions {
            candidate = candidate.flipped(position);
        }
        candidate
    }

    /// Advances `positions` to the next combination, returning `false` when
    /// the sequence is exhausted.
    fn advance(&mut self) -> bool {
        let width = self.label.width();
        let count = self.positions.len();
        for offset in (0..count).rev() {
            // The rightmost slot may run up to width-1, the one before it to
            // width-2, and so on.
            let limit = width - (count - offset);
            if self.positions[offset] < limit {
                self.positions[offset] += 1;
                for follow in (offset + 1)..count {
                    self.positions[follow] = self.positions[follow - 1] + 1;
                }
                return true;
            }
        }
        false
    }
}

impl Iterator for Neighbors<'_> {
    type Item = BitVector;

    fn next(&mut self) -> Option<BitVector> {
        if self.exhausted {
            return None;
        }
        let candidate = self.flip_current();
        self.exhausted = !self.advance();
        Some(candidate)
    }
}
