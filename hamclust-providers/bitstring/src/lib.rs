//! Bit-string file provider implementing [`hamclust_core::VectorSource`].
//!
//! Parses the line-based input format: the first line is a header and is
//! discarded unread; every subsequent line carries one bit string of the
//! configured width, with embedded whitespace stripped before parsing.

mod errors;
mod source;

pub use errors::{BitstringSourceError, BitstringSourceErrorCode};
pub use source::{BitstringSource, MalformedLinePolicy};

#[cfg(test)]
mod tests;
