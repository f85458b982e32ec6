//! String interner for identifier storage.
//!
//! O(1) interning and lookup. Single-threaded by design: evaluation of a
//! tree is a plain recursive call sequence, so the interner needs no
//! sharding or locking.

use rustc_hash::FxHashMap;

use super::Name;

/// String interner mapping identifier text to compact `Name` ids.
///
/// The empty string is pre-interned at index 0 (`Name::EMPTY`).
pub struct StringInterner {
    /// Map from string content to index (`FxHashMap` for faster hashing).
    map: FxHashMap<String, u32>,
    /// Storage for string contents, indexed by `Name`.
    strings: Vec<String>,
}

impl StringInterner {
    /// Create a new interner with the empty string pre-interned.
    pub fn new() -> Self {
        let mut interner = StringInterner {
            map: FxHashMap::default(),
            strings: Vec::with_capacity(16),
        };
        interner.map.insert(String::new(), 0);
        interner.strings.push(String::new());
        interner
    }

    /// Intern a string, returning its `Name`.
    ///
    /// Interning the same string twice returns the same `Name`.
    pub fn intern(&mut self, s: &str) -> Name {
        if let Some(&idx) = self.map.get(s) {
            return Name::from_raw(idx);
        }
        let idx = u32::try_from(self.strings.len()).unwrap_or_else(|_| {
            // 4 billion identifiers in an API-built tree is unreachable
            // without exhausting memory first.
            unreachable!("interner overflow")
        });
        self.map.insert(s.to_string(), idx);
        self.strings.push(s.to_string());
        Name::from_raw(idx)
    }

    /// Look up the text of an interned `Name`.
    ///
    /// # Panics
    /// Panics if `name` was not produced by this interner.
    #[inline]
    #[track_caller]
    pub fn lookup(&self, name: Name) -> &str {
        &self.strings[name.index()]
    }

    /// Number of interned strings (including the pre-interned empty string).
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Check if only the empty string is interned.
    pub fn is_empty(&self) -> bool {
        self.strings.len() == 1
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_intern_dedupes() {
        let mut interner = StringInterner::new();
        let a = interner.intern("value");
        let b = interner.intern("value");
        assert_eq!(a, b);
        assert_eq!(interner.lookup(a), "value");
    }

    #[test]
    fn test_intern_distinct() {
        let mut interner = StringInterner::new();
        let a = interner.intern("value");
        let b = interner.intern("result");
        assert_ne!(a, b);
        assert_eq!(interner.lookup(b), "result");
    }

    #[test]
    fn test_empty_pre_interned() {
        let mut interner = StringInterner::new();
        assert_eq!(interner.intern(""), Name::EMPTY);
        assert_eq!(interner.lookup(Name::EMPTY), "");
    }
}
