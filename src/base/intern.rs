//! String interning for identifiers.

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use smol_str::SmolStr;
use std::fmt;

/// An interned identifier name.
///
/// `Name` is a 4-byte handle into an [`Interner`]. Elements and type
/// parameters carry names as handles so identity comparison and hashing
/// stay O(1) no matter how long the identifier text is.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Name(u32);

impl Name {
    #[inline]
    pub(crate) const fn from_raw(index: u32) -> Self {
        Self(index)
    }

    /// Get the raw index.
    #[inline]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({})", self.0)
    }
}

/// Deduplicating store for identifier strings.
///
/// Thread-safe: interning takes a read lock on the fast path and upgrades
/// to a write lock only when the string is new.
#[derive(Default)]
pub struct Interner {
    inner: RwLock<Storage>,
}

#[derive(Default)]
struct Storage {
    index: FxHashMap<SmolStr, u32>,
    texts: Vec<SmolStr>,
}

impl Interner {
    /// Create a new empty interner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a string, returning its `Name` handle.
    ///
    /// Interning the same string twice yields the same handle.
    pub fn intern(&self, text: &str) -> Name {
        {
            let storage = self.inner.read();
            if let Some(&index) = storage.index.get(text) {
                return Name::from_raw(index);
            }
        }

        let mut storage = self.inner.write();

        // Another writer may have gotten here first
        if let Some(&index) = storage.index.get(text) {
            return Name::from_raw(index);
        }

        let text = SmolStr::new(text);
        let index = storage.texts.len() as u32;
        storage.texts.push(text.clone());
        storage.index.insert(text, index);

        Name::from_raw(index)
    }

    /// Look up the text for a `Name`.
    ///
    /// Returns `None` if the handle came from a different interner.
    pub fn lookup(&self, name: Name) -> Option<SmolStr> {
        self.inner.read().texts.get(name.0 as usize).cloned()
    }

    /// Look up the text for a `Name`.
    ///
    /// # Panics
    /// Panics if the handle came from a different interner.
    pub fn text(&self, name: Name) -> SmolStr {
        self.lookup(name).expect("Name not found in interner")
    }

    /// Number of distinct strings interned.
    pub fn len(&self) -> usize {
        self.inner.read().texts.len()
    }

    /// Check if nothing has been interned yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for Interner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Interner")
            .field("count", &self.len())
            .finish()
    }
}
