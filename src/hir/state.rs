//! Ambient resolution state.
//!
//! The resolution search threads a read-only state record through
//! candidate processing. Scope processors deposit values under the
//! well-known slots as they descend (an import being crossed, the
//! substitution computed so far, a spread level being entered), and
//! [`ResolveResult::from_state`](super::ResolveResult::from_state) reads
//! them back when a candidate matches.

use super::element::Element;
use super::spread::SpreadState;
use super::subst::Substitution;

/// Read-only state at one point of a resolution search.
///
/// All slots start absent; `put_*` returns an updated copy, leaving the
/// original untouched so sibling scopes never observe each other's values.
#[derive(Clone, Debug, Default)]
pub struct ResolveState<'a> {
    resolve_context: Option<&'a Element>,
    substitutor: Option<Substitution>,
    spread_state: Option<SpreadState>,
}

impl<'a> ResolveState<'a> {
    /// The initial state: every slot absent.
    pub fn initial() -> Self {
        Self::default()
    }

    /// Record the construct that mediated resolution (e.g. an import).
    pub fn put_resolve_context(mut self, context: &'a Element) -> Self {
        self.resolve_context = Some(context);
        self
    }

    /// Record the substitution accumulated so far.
    pub fn put_substitutor(mut self, substitutor: Substitution) -> Self {
        self.substitutor = Some(substitutor);
        self
    }

    /// Record the spread level the search is currently inside.
    pub fn put_spread_state(mut self, spread_state: SpreadState) -> Self {
        self.spread_state = Some(spread_state);
        self
    }

    /// The mediating construct, if one was recorded.
    pub fn resolve_context(&self) -> Option<&'a Element> {
        self.resolve_context
    }

    /// The accumulated substitution, if one was recorded.
    pub fn substitutor(&self) -> Option<&Substitution> {
        self.substitutor.as_ref()
    }

    /// The current spread level, if one was recorded.
    pub fn spread_state(&self) -> Option<&SpreadState> {
        self.spread_state.as_ref()
    }
}
