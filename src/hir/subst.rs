//! Type substitutions at a reference site.
//!
//! When a generic declaration is referenced, the substitution engine (an
//! external collaborator) computes the mapping from its type parameters to
//! concrete types at that use site. This crate only carries the mapping.

use indexmap::IndexMap;
use smol_str::SmolStr;
use std::fmt;

use crate::base::Name;

/// A reference to a concrete type, in interned text form.
///
/// The resolution core never inspects type structure; the text form is
/// enough to carry the substitution to downstream consumers.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Ty(SmolStr);

impl Ty {
    /// Create a type reference from its text.
    pub fn new(text: impl Into<SmolStr>) -> Self {
        Self(text.into())
    }

    /// The textual form of the type.
    pub fn text(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Ty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Ty {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

/// Mapping from a generic declaration's type parameters to concrete types
/// at a specific use site.
///
/// Entries keep the declaration order of the type parameters. The empty
/// mapping is the identity substitution, the default for non-generic
/// declarations.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Substitution {
    bindings: IndexMap<Name, Ty>,
}

impl Substitution {
    /// The identity substitution: no type parameters bound.
    pub fn identity() -> Self {
        Self::default()
    }

    /// Check whether this is the identity substitution.
    pub fn is_identity(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Bind a type parameter to a concrete type.
    ///
    /// Rebinding a parameter keeps its original position and replaces the
    /// type.
    pub fn bind(mut self, param: Name, ty: Ty) -> Self {
        self.bindings.insert(param, ty);
        self
    }

    /// Look up the concrete type bound to a type parameter.
    pub fn apply(&self, param: Name) -> Option<&Ty> {
        self.bindings.get(&param)
    }

    /// Iterate over bindings in type parameter declaration order.
    pub fn bindings(&self) -> impl Iterator<Item = (Name, &Ty)> {
        self.bindings.iter().map(|(&param, ty)| (param, ty))
    }

    /// Number of bound type parameters.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Check if no parameters are bound (same as [`Self::is_identity`]).
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::Interner;

    #[test]
    fn test_identity_is_empty() {
        let subst = Substitution::identity();
        assert!(subst.is_identity());
        assert_eq!(subst.len(), 0);
    }

    #[test]
    fn test_bind_and_apply() {
        let interner = Interner::new();
        let t = interner.intern("T");
        let u = interner.intern("U");

        let subst = Substitution::identity()
            .bind(t, Ty::from("Int"))
            .bind(u, Ty::from("List<String>"));

        assert!(!subst.is_identity());
        assert_eq!(subst.apply(t), Some(&Ty::from("Int")));
        assert_eq!(subst.apply(u), Some(&Ty::from("List<String>")));
        assert_eq!(subst.apply(interner.intern("V")), None);
    }

    #[test]
    fn test_bindings_keep_declaration_order() {
        let interner = Interner::new();
        let k = interner.intern("K");
        let v = interner.intern("V");

        let subst = Substitution::identity()
            .bind(k, Ty::from("String"))
            .bind(v, Ty::from("Int"))
            .bind(k, Ty::from("Name")); // rebind keeps position

        let order: Vec<Name> = subst.bindings().map(|(param, _)| param).collect();
        assert_eq!(order, vec![k, v]);
        assert_eq!(subst.apply(k), Some(&Ty::from("Name")));
    }
}
