//! Vector source abstraction for the hamclust core runtime.

use crate::{error::VectorSourceError, vector::BitVector};

/// Abstraction over a collection of fixed-width binary vectors.
///
/// The engine pulls every vector once during loading, deduplicates repeats,
/// and never touches the source again. Implementations therefore only need
/// cheap indexed access.
///
/// # Examples
/// ```
/// use hamclust_core::{BitVector, VectorSource, VectorSourceError};
///
/// struct Codes(Vec<BitVector>);
///
/// impl VectorSource for Codes {
///     fn len(&self) -> usize { self.0.len() }
///     fn name(&self) -> &str { "codes" }
///     fn width(&self) -> usize { 3 }
///     fn vector(&self, index: usize) -> Result<BitVector, VectorSourceError> {
///         self.0
///             .get(index)
///             .cloned()
///             .ok_or(VectorSourceError::OutOfBounds { index })
///     }
/// }
///
/// let source = Codes(vec![BitVector::parse("010", 3)?]);
/// assert_eq!(source.len(), 1);
/// assert!(!source.is_empty());
/// assert_eq!(source.vector(0)?.to_string(), "010");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait VectorSource {
    /// Returns number of vectors in the source, counting duplicates.
    fn len(&self) -> usize;

    /// Returns whether the source contains no vectors.
    #[must_use]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a human-readable name.
    fn name(&self) -> &str;

    /// Returns the width in bits of every vector in the source.
    fn width(&self) -> usize;

    /// Returns the vector at `index`.
    ///
    /// # Errors
    /// Implementations must return [`VectorSourceError::OutOfBounds`] for
    /// invalid indices.
    fn vector(&self, index: usize) -> Result<BitVector, VectorSourceError>;
}
