//! Named indeterminates.
//!
//! Symbols are identified by name alone, so the same name produced by two
//! unrelated computations denotes the same indeterminate. Hermite
//! placeholders rely on this to line up across different (n, m).

use std::fmt;
use std::sync::Arc;

/// A named symbolic indeterminate.
///
/// Symbols order by name; the polynomial term order is derived from it.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(Arc<str>);

impl Symbol {
    /// Creates a symbol from a name known to be valid.
    ///
    /// Names that come from outside the program go through
    /// [`Symbol::try_new`] instead.
    ///
    /// # Panics
    ///
    /// Panics if `name` is not an identifier (see [`Symbol::is_identifier`]).
    #[must_use]
    pub fn new(name: &str) -> Self {
        assert!(Self::is_identifier(name), "invalid symbol name '{name}'");
        Self(Arc::from(name))
    }

    /// Creates a symbol, or returns `None` if `name` is not an identifier.
    #[must_use]
    pub fn try_new(name: &str) -> Option<Self> {
        Self::is_identifier(name).then(|| Self(Arc::from(name)))
    }

    /// Returns true for `[A-Za-z_][A-Za-z0-9_]*`.
    #[must_use]
    pub fn is_identifier(name: &str) -> bool {
        let mut chars = name.chars();
        match chars.next() {
            Some(c) if c.is_ascii_alphabetic() || c == '_' => {
                chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
            }
            _ => false,
        }
    }

    /// Returns the symbol's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.0)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
