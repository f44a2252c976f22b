//! String interner for identifier and string-literal payloads.
//!
//! Tokens and AST nodes carry compact [`Symbol`] handles instead of owned
//! strings. Interning deduplicates, so comparing two identifiers is a
//! `u32` comparison and scope sets can hash handles instead of text.

use rustc_hash::FxHashMap;
use std::num::NonZeroU32;

/// Handle to an interned string.
///
/// Backed by `NonZeroU32` so `Option<Symbol>` costs no extra space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Symbol(NonZeroU32);

impl Symbol {
    /// Placeholder symbol for error reporting (e.g. "expected an
    /// identifier here"). Never resolves to real text.
    pub const fn dummy() -> Self {
        Symbol(NonZeroU32::MIN)
    }

    fn from_index(index: usize) -> Self {
        // Index 0 maps to the raw value 1, keeping the niche free.
        match NonZeroU32::new(index as u32 + 1) {
            Some(raw) => Symbol(raw),
            None => unreachable!("interner index overflowed u32"),
        }
    }

    fn index(self) -> usize {
        self.0.get() as usize - 1
    }
}

/// Deduplicating string arena.
#[derive(Debug, Default)]
pub struct Interner {
    map: FxHashMap<String, Symbol>,
    strings: Vec<String>,
}

impl Interner {
    /// Create an empty interner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a string, returning the existing handle if it was seen
    /// before.
    pub fn intern(&mut self, text: &str) -> Symbol {
        if let Some(&symbol) = self.map.get(text) {
            return symbol;
        }
        let symbol = Symbol::from_index(self.strings.len());
        self.strings.push(text.to_string());
        self.map.insert(text.to_string(), symbol);
        symbol
    }

    /// Resolve a handle back to its text.
    ///
    /// Panics if the symbol came from a different interner.
    pub fn resolve(&self, symbol: Symbol) -> &str {
        &self.strings[symbol.index()]
    }

    /// Number of distinct strings interned.
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// True if nothing has been interned yet.
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intern_returns_same_symbol_for_same_text() {
        let mut interner = Interner::new();
        let a = interner.intern("repeat");
        let b = interner.intern("repeat");
        assert_eq!(a, b);
        assert_eq!(interner.len(), 1);
    }

    #[test]
    fn test_intern_distinct_text_distinct_symbols() {
        let mut interner = Interner::new();
        let a = interner.intern("Symbol");
        let b = interner.intern("iterator");
        assert_ne!(a, b);
        assert_eq!(interner.resolve(a), "Symbol");
        assert_eq!(interner.resolve(b), "iterator");
    }

    #[test]
    fn test_empty_interner() {
        let interner = Interner::new();
        assert!(interner.is_empty());
        assert_eq!(interner.len(), 0);
    }
}
