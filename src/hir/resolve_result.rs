//! The outcome of resolving one reference to one declaration.
//!
//! A [`ResolveResult`] is constructed once per successful candidate match
//! during a resolution search and read many times by downstream consumers
//! (type checking, completion, navigation, refactoring). It is a snapshot:
//! the record fields never change, and the two derived verdicts are
//! computed at most once and cached for the life of the result.
//! Re-resolution produces a new result, never a mutation of an old one.

use once_cell::sync::OnceCell;
use tracing::trace;

use super::check::Checkers;
use super::element::{Element, ElementId};
use super::spread::SpreadState;
use super::state::ResolveState;
use super::subst::Substitution;

/// A resolved reference: the declaration it denotes, the site it was
/// resolved from, and the contextual facts a consumer needs to use it.
///
/// # Derived verdicts
///
/// [`is_accessible`](Self::is_accessible) and
/// [`is_statics_ok`](Self::is_statics_ok) are computed lazily on first
/// read and cached. First reads racing from several threads are safe: the
/// underlying checker runs once and every reader observes the same fully
/// initialized value.
///
/// The record borrows the declaration and reference site from the issuing
/// query; it neither extends their lifetime nor tracks mutations made to
/// the underlying model after construction.
pub struct ResolveResult<'a> {
    declaration: &'a Element,
    site: &'a Element,
    resolve_context: Option<&'a Element>,
    substitutor: Substitution,
    spread_state: Option<SpreadState>,
    checkers: Checkers<'a>,
    accessible: OnceCell<bool>,
    statics_ok: OnceCell<bool>,
}

impl<'a> ResolveResult<'a> {
    /// Create a result with direct resolution: no mediating context,
    /// identity substitution, no spread context.
    ///
    /// Use the `with_*` builders for the optional fields, before the first
    /// derived-verdict read.
    pub fn new(declaration: &'a Element, site: &'a Element, checkers: Checkers<'a>) -> Self {
        Self {
            declaration,
            site,
            resolve_context: None,
            substitutor: Substitution::identity(),
            spread_state: None,
            checkers,
            accessible: OnceCell::new(),
            statics_ok: OnceCell::new(),
        }
    }

    /// Create a result from the ambient resolution state, reading the
    /// well-known slots and defaulting exactly as [`Self::new`] does for
    /// absent ones.
    pub fn from_state(
        declaration: &'a Element,
        site: &'a Element,
        state: &ResolveState<'a>,
        checkers: Checkers<'a>,
    ) -> Self {
        let mut result = Self::new(declaration, site, checkers);
        if let Some(context) = state.resolve_context() {
            result = result.with_resolve_context(context);
        }
        if let Some(substitutor) = state.substitutor() {
            result = result.with_substitutor(substitutor.clone());
        }
        if let Some(spread_state) = state.spread_state() {
            result = result.with_spread_state(spread_state.clone());
        }
        result
    }

    /// Set the construct that mediated resolution (e.g. an import).
    pub fn with_resolve_context(mut self, context: &'a Element) -> Self {
        self.resolve_context = Some(context);
        self
    }

    /// Set the substitution for the declaration's type parameters.
    pub fn with_substitutor(mut self, substitutor: Substitution) -> Self {
        self.substitutor = substitutor;
        self
    }

    /// Set the spread context the reference sits inside.
    pub fn with_spread_state(mut self, spread_state: SpreadState) -> Self {
        self.spread_state = Some(spread_state);
        self
    }

    /// The resolved declaration.
    pub fn declaration(&self) -> &'a Element {
        self.declaration
    }

    /// The AST node the reference was resolved from.
    pub fn reference_site(&self) -> &'a Element {
        self.site
    }

    /// The construct that mediated resolution, or `None` for direct
    /// resolution (local scope, inheritance chain).
    pub fn resolve_context(&self) -> Option<&'a Element> {
        self.resolve_context
    }

    /// The substitution for the declaration's type parameters at this use
    /// site. Identity for non-generic declarations.
    pub fn substitutor(&self) -> &Substitution {
        &self.substitutor
    }

    /// The spread context wrapping the reference, or `None` when the
    /// reference is not inside a spread expansion.
    pub fn spread_state(&self) -> Option<&SpreadState> {
        self.spread_state.as_ref()
    }

    /// Identity of the resolved declaration.
    pub fn element_id(&self) -> ElementId {
        self.declaration.id()
    }

    /// Is the declaration accessible from the reference site?
    ///
    /// Non-member declarations (locals, parameters, classes, ...) are
    /// accessible unconditionally; the visibility checker is consulted
    /// only for members, and at most once per result.
    pub fn is_accessible(&self) -> bool {
        *self.accessible.get_or_init(|| {
            let verdict = !self.declaration.is_member()
                || self
                    .checkers
                    .accessibility()
                    .is_accessible(self.site, self.declaration);
            trace!(
                declaration = ?self.declaration.id(),
                kind = ?self.declaration.kind(),
                verdict,
                "computed accessibility"
            );
            verdict
        })
    }

    /// Is referencing the declaration here consistent with static/instance
    /// context?
    ///
    /// First matching rule wins:
    /// 1. import-mediated resolution is exempt;
    /// 2. declarations that cannot carry modifiers are exempt;
    /// 3. otherwise the static-context checker decides, in lenient mode
    ///    (`strict = false`): a misleading-but-available candidate is more
    ///    useful downstream than no candidate.
    pub fn is_statics_ok(&self) -> bool {
        *self.statics_ok.get_or_init(|| {
            let verdict = self.resolve_context.is_some_and(Element::is_import)
                || !self.declaration.is_modifier_list_owner()
                || self.checkers.statics().is_statics_ok(
                    self.declaration,
                    self.site,
                    self.resolve_context,
                    false,
                );
            trace!(
                declaration = ?self.declaration.id(),
                kind = ?self.declaration.kind(),
                verdict,
                "computed static-context consistency"
            );
            verdict
        })
    }

    /// Both verdicts at once: the candidate is usable as resolved.
    pub fn is_valid(&self) -> bool {
        self.is_accessible() && self.is_statics_ok()
    }
}

impl std::fmt::Debug for ResolveResult<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolveResult")
            .field("declaration", &self.declaration.id())
            .field("site", &self.site.id())
            .field("resolve_context", &self.resolve_context.map(Element::id))
            .field("substitutor", &self.substitutor)
            .field("spread_state", &self.spread_state)
            .field("accessible", &self.accessible.get())
            .field("statics_ok", &self.statics_ok.get())
            .finish()
    }
}
