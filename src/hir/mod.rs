//! Semantic model for reference resolution.
//!
//! The pieces, in the order the resolution search uses them:
//!
//! - [`element`] - The declaration/element model with kind predicates
//! - [`subst`] - Type parameter substitutions at a use site
//! - [`spread`] - Collection-spread context markers
//! - [`state`] - The ambient state threaded through candidate processing
//! - [`check`] - Injected accessibility / static-consistency capabilities
//! - [`resolve_result`] - The resolution outcome record
//! - [`diagnostics`] - Turning failing results into located reports

pub mod check;
pub mod diagnostics;
pub mod element;
pub mod resolve_result;
pub mod spread;
pub mod state;
pub mod subst;

pub use check::{AccessibilityChecker, Checkers, StaticConsistencyChecker};
pub use diagnostics::{Diagnostic, ResolveProblem, Severity};
pub use element::{Element, ElementId, ElementKind, LocalElementId, Modifiers};
pub use resolve_result::ResolveResult;
pub use spread::SpreadState;
pub use state::ResolveState;
pub use subst::{Substitution, Ty};
