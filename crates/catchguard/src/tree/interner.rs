//! Identifier interning.
//!
//! Every name in the syntax tree (classes, methods, variables, type
//! references) is stored once in an [`Interner`] and referred to by a
//! 4-byte [`Symbol`]. Rules resolve symbols back to text through the
//! interner handed to them in their lint context.

use rustc_hash::FxHashMap;
use std::num::NonZeroU32;

/// An interned identifier (32-bit index).
///
/// Symbols are small and `Copy`. Use [`Interner::resolve`] or
/// [`Interner::get`] to get the text back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Symbol(NonZeroU32);

impl Symbol {
    #[inline]
    fn from_raw(raw: u32) -> Self {
        Symbol(NonZeroU32::MIN.saturating_add(raw))
    }

    #[inline]
    fn to_raw(self) -> usize {
        (self.0.get() - 1) as usize
    }
}

/// Deduplicating string store for identifiers.
#[derive(Debug, Clone, Default)]
pub struct Interner {
    map: FxHashMap<String, Symbol>,
    strings: Vec<String>,
}

impl Interner {
    /// Create an empty interner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an interner with room for `capacity` distinct names.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            map: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            strings: Vec::with_capacity(capacity),
        }
    }

    /// Intern a name, returning the existing symbol if it was seen before.
    pub fn intern(&mut self, s: &str) -> Symbol {
        if let Some(&sym) = self.map.get(s) {
            return sym;
        }

        let sym = Symbol::from_raw(self.strings.len() as u32);
        self.strings.push(s.to_string());
        self.map.insert(s.to_string(), sym);
        sym
    }

    /// Resolve a symbol, or `None` if it was not produced by this interner.
    #[inline]
    pub fn get(&self, sym: Symbol) -> Option<&str> {
        self.strings.get(sym.to_raw()).map(String::as_str)
    }

    /// Resolve a symbol back to its text.
    ///
    /// # Panics
    ///
    /// Panics if the symbol was not produced by this interner.
    #[inline]
    pub fn resolve(&self, sym: Symbol) -> &str {
        &self.strings[sym.to_raw()]
    }

    /// Number of distinct names interned.
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}
