//! Fixed-width binary vectors packed into 64-bit words.
//!
//! [`BitVector`] is the value type every other component keys on. Bits are
//! packed little-endian into `u64` words and the unused tail of the last word
//! is kept zeroed, so equality and hashing depend only on the logical bit
//! pattern, never on the in-memory representation.

use std::fmt;

use thiserror::Error;

const WORD_BITS: usize = 64;

/// Errors produced when parsing a [`BitVector`] from text.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum BitVectorParseError {
    /// The text had the wrong number of bit characters.
    #[error("expected {expected} bit characters but found {got}")]
    BadLength {
        /// Width the caller asked for.
        expected: usize,
        /// Number of characters actually present.
        got: usize,
    },
    /// The text contained a character outside `{'0','1'}`.
    #[error("invalid character `{ch}` at position {position}")]
    BadChar {
        /// The offending character.
        ch: char,
        /// Zero-based position of the character within the text.
        position: usize,
    },
}

/// An immutable fixed-width sequence of bits.
///
/// # Examples
/// ```
/// use hamclust_core::BitVector;
///
/// let a = BitVector::parse("0101", 4)?;
/// let b = BitVector::parse("0001", 4)?;
/// assert_eq!(a.hamming(&b), 1);
/// assert_eq!(a.to_string(), "0101");
/// # Ok::<(), hamclust_core::BitVectorParseError>(())
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BitVector {
    width: usize,
    words: Box<[u64]>,
}

impl BitVector {
    /// Creates the all-zero vector of the given width.
    #[must_use]
    pub fn zeroed(width: usize) -> Self {
        let word_count = width.div_ceil(WORD_BITS);
        Self {
            width,
            words: vec![0; word_count].into_boxed_slice(),
        }
    }

    /// Parses a vector from a string of `'0'` and `'1'` characters.
    ///
    /// The leftmost character becomes bit position `0`. The text must contain
    /// exactly `width` characters; callers strip whitespace beforehand.
    ///
    /// # Errors
    /// Returns [`BitVectorParseError::BadLength`] when the character count
    /// differs from `width` and [`BitVectorParseError::BadChar`] on the first
    /// character outside `{'0','1'}`.
    pub fn parse(text: &str, width: usize) -> Result<Self, BitVectorParseError> {
        let mut vector = Self::zeroed(width);
        let mut count = 0usize;
        for (position, ch) in text.chars().enumerate() {
            match ch {
                '0' => {}
                '1' => {
                    if position < width {
                        vector.set(position);
                    }
                }
                other => return Err(BitVectorParseError::BadChar {
                    ch: other,
                    position,
                }),
            }
            count += 1;
        }
        if count != width {
            return Err(BitVectorParseError::BadLength {
                expected: width,
                got: count,
            });
        }
        Ok(vector)
    }

    /// Returns the number of bits in the vector.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the bit at `position`.
    ///
    /// # Panics
    /// Panics when `position >= self.width()`.
    #[must_use]
    pub fn bit(&self, position: usize) -> bool {
        assert!(position < self.width, "bit position out of range");
        (self.words[position / WORD_BITS] >> (position % WORD_BITS)) & 1 == 1
    }

    /// Returns a copy of the vector with the bit at `position` toggled.
    ///
    /// # Panics
    /// Panics when `position >= self.width()`.
    #[must_use]
    pub fn flipped(&self, position: usize) -> Self {
        assert!(position < self.width, "bit position out of range");
        let mut copy = self.clone();
        copy.words[position / WORD_BITS] ^= 1 << (position % WORD_BITS);
        copy
    }

    /// Counts the bit positions at which `self` and `other` differ.
    ///
    /// Both vectors must have the same width; vectors of differing widths are
    /// never compared by the clustering engine.
    #[must_use]
    pub fn hamming(&self, other: &Self) -> usize {
        debug_assert_eq!(self.width, other.width, "hamming requires equal widths");
        self.words
            .iter()
            .zip(other.words.iter())
            .map(|(left, right)| (left ^ right).count_ones() as usize)
            .sum()
    }

    fn set(&mut self, position: usize) {
        self.words[position / WORD_BITS] |= 1 << (position % WORD_BITS);
    }
}

impl fmt::Display for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for position in 0..self.width {
            f.write_str(if self.bit(position) { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl fmt::Debug for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitVector({self})")
    }
}
