//! Foundation types for the Marl analyzer.
//!
//! This module provides the primitives the semantic model builds on:
//! - [`FileId`] - Interned file identifiers
//! - [`Span`], [`TextRange`], [`TextSize`] - Source positions
//! - [`Name`], [`Interner`] - String interning
//!
//! This module has NO dependencies on other marl modules.

mod file_id;
mod intern;
mod span;

pub use file_id::FileId;
pub use intern::{Interner, Name};
pub use span::{Span, TextRange, TextSize};

// Re-export text-size types for convenience
pub use text_size;
