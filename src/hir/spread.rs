//! Collection-spread context markers.
//!
//! When a reference occurs inside a spread-expanded argument or list
//! (`f(*xs)` in Marl surface syntax), the resolution search records how
//! many spread levels wrap it. One [`SpreadState`] per level, linked
//! outward to the enclosing level.

use smol_str::SmolStr;
use std::sync::Arc;

/// One level of collection-spread context around a reference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpreadState {
    /// Textual form of the collection type being spread at this level.
    container: SmolStr,
    /// The enclosing spread level, if the spread is itself nested.
    outer: Option<Arc<SpreadState>>,
}

impl SpreadState {
    /// A single spread level with no enclosing spread.
    pub fn new(container: impl Into<SmolStr>) -> Self {
        Self {
            container: container.into(),
            outer: None,
        }
    }

    /// Nest a new spread level inside an enclosing one.
    pub fn wrap(container: impl Into<SmolStr>, outer: SpreadState) -> Self {
        Self {
            container: container.into(),
            outer: Some(Arc::new(outer)),
        }
    }

    /// Textual form of the collection type spread at this level.
    pub fn container(&self) -> &str {
        &self.container
    }

    /// The enclosing spread level, if any.
    pub fn outer(&self) -> Option<&SpreadState> {
        self.outer.as_deref()
    }

    /// Number of spread levels wrapping the reference, this one included.
    pub fn depth(&self) -> usize {
        let mut depth = 1;
        let mut current = self.outer.as_deref();
        while let Some(state) = current {
            depth += 1;
            current = state.outer.as_deref();
        }
        depth
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_level() {
        let state = SpreadState::new("List<Car>");
        assert_eq!(state.container(), "List<Car>");
        assert_eq!(state.depth(), 1);
        assert!(state.outer().is_none());
    }

    #[test]
    fn test_nested_levels() {
        let outer = SpreadState::new("List<List<Car>>");
        let inner = SpreadState::wrap("List<Car>", outer);

        assert_eq!(inner.depth(), 2);
        assert_eq!(inner.container(), "List<Car>");
        assert_eq!(inner.outer().unwrap().container(), "List<List<Car>>");
    }
}
