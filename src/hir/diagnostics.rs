//! Turning failing resolve results into located reports.
//!
//! The resolution core itself never rejects a candidate; it only records
//! verdicts. This module is the bridge downstream consumers use to report
//! a resolved-but-unusable candidate at the reference site.

use smol_str::SmolStr;
use thiserror::Error;

use super::resolve_result::ResolveResult;
use crate::base::{Interner, Span};

/// The ways a resolved candidate can fail to be usable.
///
/// Ordering matters and mirrors the verdict order on the result:
/// accessibility is reported before static-context consistency.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ResolveProblem {
    #[error("'{name}' is not accessible from the reference site")]
    Inaccessible { name: SmolStr },
    #[error("'{name}' cannot be referenced from this static context")]
    StaticContextMismatch { name: SmolStr },
}

impl ResolveProblem {
    /// Classify a result, or `None` when the candidate is usable.
    pub fn classify(result: &ResolveResult<'_>, interner: &Interner) -> Option<Self> {
        let name = interner.text(result.declaration().name());
        if !result.is_accessible() {
            Some(Self::Inaccessible { name })
        } else if !result.is_statics_ok() {
            Some(Self::StaticContextMismatch { name })
        } else {
            None
        }
    }

    /// Stable diagnostic code for the problem.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Inaccessible { .. } => "E0401",
            Self::StaticContextMismatch { .. } => "E0402",
        }
    }
}

/// Severity level of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Warning,
    Info,
    Hint,
}

/// A diagnostic message anchored to a source span.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Where the diagnostic points.
    pub span: Span,
    /// Severity level.
    pub severity: Severity,
    /// Stable code (e.g. "E0401").
    pub code: Option<SmolStr>,
    /// The diagnostic message.
    pub message: SmolStr,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    pub fn error(span: Span, message: impl Into<SmolStr>) -> Self {
        Self {
            span,
            severity: Severity::Error,
            code: None,
            message: message.into(),
        }
    }

    /// Create a new warning diagnostic.
    pub fn warning(span: Span, message: impl Into<SmolStr>) -> Self {
        Self {
            span,
            severity: Severity::Warning,
            code: None,
            message: message.into(),
        }
    }

    /// Set the diagnostic code.
    pub fn with_code(mut self, code: impl Into<SmolStr>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Report a failing result at its reference site.
    ///
    /// Returns `None` for a usable candidate. The diagnostic carries the
    /// problem's message and stable code.
    pub fn from_result(result: &ResolveResult<'_>, interner: &Interner) -> Option<Self> {
        let problem = ResolveProblem::classify(result, interner)?;
        Some(
            Self::error(result.reference_site().span(), problem.to_string())
                .with_code(problem.code()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::{FileId, TextRange};
    use crate::hir::check::{AccessibilityChecker, Checkers, StaticConsistencyChecker};
    use crate::hir::element::{Element, ElementId, ElementKind, LocalElementId};

    struct Always(bool);

    impl AccessibilityChecker for Always {
        fn is_accessible(&self, _site: &Element, _declaration: &Element) -> bool {
            self.0
        }
    }

    impl StaticConsistencyChecker for Always {
        fn is_statics_ok(
            &self,
            _declaration: &Element,
            _site: &Element,
            _context: Option<&Element>,
            _strict: bool,
        ) -> bool {
            self.0
        }
    }

    fn make_element(local: u32, name: &str, kind: ElementKind, interner: &Interner) -> Element {
        Element::new(
            ElementId::new(FileId::new(0), LocalElementId::new(local)),
            interner.intern(name),
            kind,
            Span::new(FileId::new(0), TextRange::new(10.into(), 15.into())),
        )
    }

    #[test]
    fn test_usable_result_has_no_diagnostic() {
        let interner = Interner::new();
        let field = make_element(0, "speed", ElementKind::Field, &interner);
        let site = make_element(1, "speed", ElementKind::Method, &interner);
        let yes = Always(true);

        let result = ResolveResult::new(&field, &site, Checkers::new(&yes, &yes));
        assert_eq!(Diagnostic::from_result(&result, &interner), None);
    }

    #[test]
    fn test_inaccessible_reported_first() {
        let interner = Interner::new();
        let field = make_element(0, "speed", ElementKind::Field, &interner);
        let site = make_element(1, "speed", ElementKind::Method, &interner);
        let no = Always(false);

        let result = ResolveResult::new(&field, &site, Checkers::new(&no, &no));
        let diagnostic = Diagnostic::from_result(&result, &interner).unwrap();

        assert_eq!(diagnostic.severity, Severity::Error);
        assert_eq!(diagnostic.code.as_deref(), Some("E0401"));
        assert_eq!(diagnostic.span, site.span());
        assert!(diagnostic.message.contains("speed"));
    }

    #[test]
    fn test_static_mismatch_reported_when_accessible() {
        let interner = Interner::new();
        let method = make_element(0, "start", ElementKind::Method, &interner);
        let site = make_element(1, "start", ElementKind::Method, &interner);
        let yes = Always(true);
        let no = Always(false);

        let result = ResolveResult::new(&method, &site, Checkers::new(&yes, &no));
        let diagnostic = Diagnostic::from_result(&result, &interner).unwrap();

        assert_eq!(diagnostic.code.as_deref(), Some("E0402"));
        assert!(diagnostic.message.contains("static context"));
    }
}
