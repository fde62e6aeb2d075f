//! The declaration/element model the resolution core reads.
//!
//! The resolution search and the checker engines work on a much richer
//! tree; this crate only needs identity, location, and the kind
//! predicates that drive the resolve-result rules:
//!
//! - [`ElementKind::is_member`] - subject to visibility rules
//! - [`ElementKind::is_modifier_list_owner`] - can carry static/instance
//!   (and other) modifiers
//! - [`ElementKind::is_import`] - mediates import-exempted resolution

use bitflags::bitflags;
use std::fmt;

use crate::base::{FileId, Name, Span};

/// A globally unique identifier for an element.
///
/// Combines the file where the element lives with a file-local ID, so
/// per-file invalidation stays cheap while identifiers remain globally
/// unique.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct ElementId {
    /// The file containing this element
    pub file: FileId,
    /// The local ID within the file
    pub local: LocalElementId,
}

impl ElementId {
    /// Create a new ElementId.
    #[inline]
    pub const fn new(file: FileId, local: LocalElementId) -> Self {
        Self { file, local }
    }
}

impl fmt::Debug for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ElementId({:?}:{})", self.file, self.local.0)
    }
}

/// A file-local element identifier.
///
/// Assigned sequentially as elements are discovered in a file.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct LocalElementId(pub u32);

impl LocalElementId {
    /// Create a new LocalElementId.
    #[inline]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Debug for LocalElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LocalElementId({})", self.0)
    }
}

bitflags! {
    /// Modifier set carried by modifier-list owners.
    ///
    /// The resolution core never interprets these itself; checker
    /// implementations consult them.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        const STATIC = 1 << 0;
        const PUBLIC = 1 << 1;
        const PROTECTED = 1 << 2;
        const PRIVATE = 1 << 3;
        const FINAL = 1 << 4;
        const ABSTRACT = 1 << 5;
    }
}

/// What kind of declaration or construct an element is.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Package,
    Class,
    Trait,
    Enum,
    Field,
    Method,
    Property,
    Constructor,
    LocalVariable,
    Parameter,
    TypeParameter,
    Import,
}

impl ElementKind {
    /// Check if this kind is a member of a type, subject to
    /// member-visibility rules.
    pub fn is_member(&self) -> bool {
        matches!(
            self,
            ElementKind::Field
                | ElementKind::Method
                | ElementKind::Property
                | ElementKind::Constructor
        )
    }

    /// Check if this kind can carry a modifier list (static, visibility,
    /// and friends). Locals, parameters, type parameters, imports, and
    /// packages cannot.
    pub fn is_modifier_list_owner(&self) -> bool {
        matches!(
            self,
            ElementKind::Class
                | ElementKind::Trait
                | ElementKind::Enum
                | ElementKind::Field
                | ElementKind::Method
                | ElementKind::Property
                | ElementKind::Constructor
        )
    }

    /// Check if this kind is an import statement.
    pub fn is_import(&self) -> bool {
        matches!(self, ElementKind::Import)
    }
}

/// A node of the analyzed program: a declaration, a reference site, or a
/// mediating construct such as an import.
///
/// Elements are owned by the component that produced them (parser, index);
/// the resolution core only ever borrows them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    id: ElementId,
    name: Name,
    kind: ElementKind,
    span: Span,
    modifiers: Modifiers,
}

impl Element {
    /// Create an element with an empty modifier set.
    pub fn new(id: ElementId, name: Name, kind: ElementKind, span: Span) -> Self {
        Self {
            id,
            name,
            kind,
            span,
            modifiers: Modifiers::empty(),
        }
    }

    /// Set the modifier set.
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Globally unique identity, for equality and caching.
    pub fn id(&self) -> ElementId {
        self.id
    }

    /// The element's name handle.
    pub fn name(&self) -> Name {
        self.name
    }

    /// The element's kind.
    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    /// Where the element sits in source text.
    pub fn span(&self) -> Span {
        self.span
    }

    /// The element's modifier set.
    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// See [`ElementKind::is_member`].
    pub fn is_member(&self) -> bool {
        self.kind.is_member()
    }

    /// See [`ElementKind::is_modifier_list_owner`].
    pub fn is_modifier_list_owner(&self) -> bool {
        self.kind.is_modifier_list_owner()
    }

    /// See [`ElementKind::is_import`].
    pub fn is_import(&self) -> bool {
        self.kind.is_import()
    }

    /// Check if the element carries the `static` modifier.
    pub fn is_static(&self) -> bool {
        self.modifiers.contains(Modifiers::STATIC)
    }
}
