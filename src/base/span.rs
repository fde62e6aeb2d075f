//! Source text positions and ranges.

use std::fmt;

use super::FileId;

// Re-export from text-size
pub use text_size::{TextRange, TextSize};

/// A byte range within a specific file.
///
/// Every element in the semantic model carries one of these so downstream
/// consumers (diagnostics, navigation) can point back into source text.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Span {
    /// The file the range applies to.
    pub file: FileId,
    /// Byte range within that file.
    pub range: TextRange,
}

impl Span {
    /// Create a span from a file and byte range.
    #[inline]
    pub const fn new(file: FileId, range: TextRange) -> Self {
        Self { file, range }
    }

    /// Create a zero-length span at a byte offset.
    #[inline]
    pub fn at(file: FileId, offset: TextSize) -> Self {
        Self {
            file,
            range: TextRange::empty(offset),
        }
    }

    /// Byte offset where the span starts.
    #[inline]
    pub fn start(self) -> TextSize {
        self.range.start()
    }

    /// Byte offset where the span ends.
    #[inline]
    pub fn end(self) -> TextSize {
        self.range.end()
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}@{}..{}",
            self.file,
            u32::from(self.range.start()),
            u32::from(self.range.end())
        )
    }
}
