//! Line-based bit-string source.

use std::io::BufRead;
use std::num::NonZeroUsize;

use hamclust_core::{BitVector, VectorSource, VectorSourceError};
use tracing::{instrument, warn};

use crate::errors::BitstringSourceError;

/// Policy applied to lines that fail to parse as a bit string.
///
/// The reference input format leaves malformed lines unspecified; this
/// provider makes the choice explicit rather than mis-parsing silently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MalformedLinePolicy {
    /// Fail the whole load on the first malformed line.
    #[default]
    Reject,
    /// Drop malformed lines, logging a warning for each.
    Skip,
}

/// Bit-string vector source backed by an in-memory vector list.
///
/// Duplicate lines are retained here; the clustering engine deduplicates on
/// insertion.
///
/// # Examples
/// ```
/// use std::io::Cursor;
/// use std::num::NonZeroUsize;
///
/// use hamclust_core::VectorSource;
/// use hamclust_providers_bitstring::{BitstringSource, MalformedLinePolicy};
///
/// let input = Cursor::new("2 vectors of width 3\n000\n0 1 1\n");
/// let source = BitstringSource::try_from_reader(
///     "demo",
///     input,
///     NonZeroUsize::new(3).expect("width is non-zero"),
///     MalformedLinePolicy::Reject,
/// )?;
/// assert_eq!(source.len(), 2);
/// assert_eq!(source.vector(1)?.to_string(), "011");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct BitstringSource {
    name: String,
    width: NonZeroUsize,
    vectors: Vec<BitVector>,
}

impl BitstringSource {
    /// Reads bit strings from `reader`, discarding the first line unread.
    ///
    /// Each subsequent line is stripped of whitespace; lines that are empty
    /// after stripping are skipped silently. Remaining lines must be exactly
    /// `width` characters from `{'0','1'}`.
    ///
    /// # Errors
    /// Returns [`BitstringSourceError::Io`] when reading fails and
    /// [`BitstringSourceError::MalformedLine`] when a line fails to parse
    /// under [`MalformedLinePolicy::Reject`].
    #[instrument(
        name = "bitstring.load",
        err,
        skip(name, reader),
        fields(width = %width, policy = ?policy),
    )]
    pub fn try_from_reader(
        name: impl Into<String>,
        reader: impl BufRead,
        width: NonZeroUsize,
        policy: MalformedLinePolicy,
    ) -> Result<Self, BitstringSourceError> {
        let mut vectors = Vec::new();
        let mut lines = reader.lines();

        // Header line: metadata only, discarded unread.
        if let Some(header) = lines.next() {
            drop(header?);
        }

        // The header was line 1.
        for (offset, line) in lines.enumerate() {
            let line = line?;
            let line_number = offset + 2;
            let stripped: String = line.chars().filter(|ch| !ch.is_whitespace()).collect();
            if stripped.is_empty() {
                continue;
            }
            match BitVector::parse(&stripped, width.get()) {
                Ok(vector) => vectors.push(vector),
                Err(reason) => match policy {
                    MalformedLinePolicy::Reject => {
                        return Err(BitstringSourceError::MalformedLine {
                            line: line_number,
                            reason,
                        });
                    }
                    MalformedLinePolicy::Skip => {
                        warn!(line = line_number, %reason, "skipping malformed line");
                    }
                },
            }
        }

        Ok(Self {
            name: name.into(),
            width,
            vectors,
        })
    }
}

impl VectorSource for BitstringSource {
    fn len(&self) -> usize {
        self.vectors.len()
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn width(&self) -> usize {
        self.width.get()
    }

    fn vector(&self, index: usize) -> Result<BitVector, VectorSourceError> {
        self.vectors
            .get(index)
            .cloned()
            .ok_or(VectorSourceError::OutOfBounds { index })
    }
}
