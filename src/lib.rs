//! # marl-resolve
//!
//! Reference resolution core for the Marl language analyzer.
//!
//! This crate models the *outcome* of resolving a textual reference to a
//! declaration: the [`hir::ResolveResult`] record plus its two lazily
//! computed verdicts, accessibility and static-context consistency. The
//! resolution search itself, the visibility rule engine, and the generic
//! substitution engine are external collaborators — they construct results
//! and plug in through the [`hir::check`] capabilities.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! hir     → Semantic model: elements, resolve results, diagnostics
//!   ↓
//! base    → Primitives (FileId, Span, Name interning)
//! ```

/// Foundation types: FileId, Span, Name interning
pub mod base;

/// Semantic model: element kinds, substitutions, resolve results
pub mod hir;

// Re-export commonly needed items
pub use base::{FileId, Interner, Name, Span, TextRange, TextSize};
pub use hir::{Checkers, Element, ElementKind, ResolveResult, ResolveState, Substitution};
