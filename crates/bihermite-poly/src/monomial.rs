//! Sparse monomials over named symbols.
//!
//! A monomial is a power product `s1^e1 * s2^e2 * ...` stored as
//! `(symbol, exponent)` pairs sorted by symbol with every exponent positive.
//! Most monomials in a Hermite polynomial have at most four factors
//! (y1, y2 and one or two moments), which fit inline.

use std::cmp::Ordering;
use std::fmt;

use smallvec::SmallVec;

use crate::symbol::Symbol;

/// A power product of symbols.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Monomial(SmallVec<[(Symbol, u32); 4]>);

impl Monomial {
    /// Creates the monomial 1 (no factors).
    #[must_use]
    pub fn one() -> Self {
        Self(SmallVec::new())
    }

    /// Creates the monomial `s`.
    #[must_use]
    pub fn var(s: Symbol) -> Self {
        Self(smallvec::smallvec![(s, 1)])
    }

    /// Creates a monomial from arbitrary `(symbol, exponent)` pairs.
    ///
    /// Repeated symbols are merged and zero exponents dropped.
    #[must_use]
    pub fn from_powers(powers: impl IntoIterator<Item = (Symbol, u32)>) -> Self {
        let mut factors: SmallVec<[(Symbol, u32); 4]> =
            powers.into_iter().filter(|(_, e)| *e > 0).collect();
        factors.sort_by(|a, b| a.0.cmp(&b.0));

        let mut merged: SmallVec<[(Symbol, u32); 4]> = SmallVec::with_capacity(factors.len());
        for (s, e) in factors {
            match merged.last_mut() {
                Some((last, acc)) if *last == s => *acc += e,
                _ => merged.push((s, e)),
            }
        }
        Self(merged)
    }

    /// Returns the `(symbol, exponent)` factors in symbol order.
    #[must_use]
    pub fn powers(&self) -> &[(Symbol, u32)] {
        &self.0
    }

    /// Returns the exponent of `s` (zero if absent).
    #[must_use]
    pub fn exponent(&self, s: &Symbol) -> u32 {
        self.0
            .binary_search_by(|(x, _)| x.cmp(s))
            .map_or(0, |i| self.0[i].1)
    }

    /// Returns true if `s` occurs in this monomial.
    #[must_use]
    pub fn contains(&self, s: &Symbol) -> bool {
        self.exponent(s) > 0
    }

    /// Returns true if this is the monomial 1.
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.0.is_empty()
    }

    /// Multiplies two monomials (adds exponents).
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        let (a, b) = (&self.0, &other.0);
        let mut out = SmallVec::with_capacity(a.len() + b.len());
        let (mut i, mut j) = (0, 0);

        while i < a.len() && j < b.len() {
            match a[i].0.cmp(&b[j].0) {
                Ordering::Less => {
                    out.push(a[i].clone());
                    i += 1;
                }
                Ordering::Greater => {
                    out.push(b[j].clone());
                    j += 1;
                }
                Ordering::Equal => {
                    out.push((a[i].0.clone(), a[i].1 + b[j].1));
                    i += 1;
                    j += 1;
                }
            }
        }
        out.extend(a[i..].iter().cloned());
        out.extend(b[j..].iter().cloned());

        Self(out)
    }

    /// Computes the total degree.
    #[must_use]
    pub fn total_degree(&self) -> u32 {
        self.0.iter().map(|(_, e)| e).sum()
    }
}

impl fmt::Display for Monomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_one() {
            return write!(f, "1");
        }
        for (i, (s, e)) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "*")?;
            }
            if *e == 1 {
                write!(f, "{s}")?;
            } else {
                write!(f, "{s}^{e}")?;
            }
        }
        Ok(())
    }
}

/// Compares two monomials lexicographically.
///
/// Symbols earlier in name order are the more significant variables.
#[must_use]
pub fn cmp_lex(a: &Monomial, b: &Monomial) -> Ordering {
    for (x, y) in a.0.iter().zip(b.0.iter()) {
        match x.0.cmp(&y.0) {
            // `a` has a positive power of a variable `b` lacks.
            Ordering::Less => return Ordering::Greater,
            Ordering::Greater => return Ordering::Less,
            Ordering::Equal => match x.1.cmp(&y.1) {
                Ordering::Equal => {}
                ord => return ord,
            },
        }
    }
    a.0.len().cmp(&b.0.len())
}

/// Compares two monomials by graded lexicographic order.
#[must_use]
pub fn cmp_grlex(a: &Monomial, b: &Monomial) -> Ordering {
    a.total_degree()
        .cmp(&b.total_degree())
        .then_with(|| cmp_lex(a, b))
}
