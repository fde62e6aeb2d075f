//! Injected checker capabilities.
//!
//! The visibility rule engine and the static-context rule engine live
//! outside this crate. A [`ResolveResult`](super::ResolveResult) borrows
//! both through [`Checkers`] at construction and consults each at most
//! once, so implementations must be referentially pure: same inputs, same
//! verdict, no side effects.
//!
//! The `Send + Sync` bounds exist because a result's first derived-field
//! read may come from any thread.

use super::element::Element;

/// Verdict source for member visibility.
pub trait AccessibilityChecker: Send + Sync {
    /// Is `declaration` accessible from `site` under the language's
    /// visibility rules?
    ///
    /// Only consulted for member declarations; non-members are accessible
    /// by definition and never reach the checker.
    fn is_accessible(&self, site: &Element, declaration: &Element) -> bool;
}

/// Verdict source for static-context consistency.
pub trait StaticConsistencyChecker: Send + Sync {
    /// Is referencing `declaration` from `site` consistent with the
    /// static/instance nature of both?
    ///
    /// `context` is the mediating construct, if any. `strict = false`
    /// selects the lenient mode: ambiguous or unknown contexts count as
    /// acceptable rather than rejected.
    fn is_statics_ok(
        &self,
        declaration: &Element,
        site: &Element,
        context: Option<&Element>,
        strict: bool,
    ) -> bool;
}

/// The pair of checkers a resolution query hands to every result it
/// constructs.
#[derive(Copy, Clone)]
pub struct Checkers<'a> {
    accessibility: &'a dyn AccessibilityChecker,
    statics: &'a dyn StaticConsistencyChecker,
}

impl<'a> Checkers<'a> {
    /// Bundle the two checkers.
    pub fn new(
        accessibility: &'a dyn AccessibilityChecker,
        statics: &'a dyn StaticConsistencyChecker,
    ) -> Self {
        Self {
            accessibility,
            statics,
        }
    }

    /// The visibility checker.
    pub fn accessibility(&self) -> &'a dyn AccessibilityChecker {
        self.accessibility
    }

    /// The static-context checker.
    pub fn statics(&self) -> &'a dyn StaticConsistencyChecker {
        self.statics
    }
}
