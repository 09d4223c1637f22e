//! Sparse multivariate polynomials over named symbols.
//!
//! Terms are kept in canonical form at all times: sorted by descending
//! graded lexicographic order, like terms combined, zero terms dropped.
//! Two polynomials are therefore equal exactly when their term vectors are.

use std::collections::BTreeSet;
use std::fmt;

use bihermite_rings::traits::{CommutativeRing, OrderedRing};
use rustc_hash::FxHashMap;

use crate::monomial::{cmp_grlex, Monomial};
use crate::symbol::Symbol;

/// A sparse multivariate polynomial.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct SparsePoly<R: CommutativeRing> {
    /// Terms in descending graded lexicographic order.
    terms: Vec<(Monomial, R)>,
}

impl<R: CommutativeRing> SparsePoly<R> {
    /// Creates a new polynomial from terms.
    ///
    /// Terms are automatically sorted and combined.
    #[must_use]
    pub fn new(terms: Vec<(Monomial, R)>) -> Self {
        let mut poly = Self { terms };
        poly.normalize();
        poly
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self { terms: Vec::new() }
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub fn one() -> Self {
        Self::constant(R::one())
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: R) -> Self {
        if c.is_zero() {
            Self::zero()
        } else {
            Self {
                terms: vec![(Monomial::one(), c)],
            }
        }
    }

    /// Creates the polynomial consisting of the single symbol `s`.
    #[must_use]
    pub fn var(s: Symbol) -> Self {
        Self {
            terms: vec![(Monomial::var(s), R::one())],
        }
    }

    /// Creates the single term `c * m`.
    #[must_use]
    pub fn term(m: Monomial, c: R) -> Self {
        if c.is_zero() {
            Self::zero()
        } else {
            Self { terms: vec![(m, c)] }
        }
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the number of terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if there are no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns true if no symbol occurs in the polynomial.
    #[must_use]
    pub fn is_constant(&self) -> bool {
        self.terms.iter().all(|(m, _)| m.is_one())
    }

    /// Returns the value of a constant polynomial, `None` otherwise.
    #[must_use]
    pub fn constant_value(&self) -> Option<R> {
        match self.terms.as_slice() {
            [] => Some(R::zero()),
            [(m, c)] if m.is_one() => Some(c.clone()),
            _ => None,
        }
    }

    /// Returns every symbol occurring in the polynomial.
    #[must_use]
    pub fn free_symbols(&self) -> BTreeSet<Symbol> {
        self.terms
            .iter()
            .flat_map(|(m, _)| m.powers().iter().map(|(s, _)| s.clone()))
            .collect()
    }

    /// Returns true if `s` occurs in the polynomial.
    #[must_use]
    pub fn contains_symbol(&self, s: &Symbol) -> bool {
        self.terms.iter().any(|(m, _)| m.contains(s))
    }

    /// Sorts terms and combines like terms.
    fn normalize(&mut self) {
        self.terms.sort_by(|a, b| cmp_grlex(&b.0, &a.0));

        let mut merged: Vec<(Monomial, R)> = Vec::with_capacity(self.terms.len());
        for (m, c) in self.terms.drain(..) {
            match merged.last_mut() {
                Some((last, acc)) if *last == m => {
                    let prev = std::mem::replace(acc, R::zero());
                    *acc = prev + c;
                }
                _ => merged.push((m, c)),
            }
        }
        merged.retain(|(_, c)| !c.is_zero());

        self.terms = merged;
    }

    /// Adds two polynomials.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        if other.is_zero() {
            return self.clone();
        }
        if self.is_zero() {
            return other.clone();
        }

        let mut terms = Vec::with_capacity(self.len() + other.len());
        terms.extend(self.terms.iter().cloned());
        terms.extend(other.terms.iter().cloned());

        Self::new(terms)
    }

    /// Negates a polynomial.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self {
            terms: self.terms.iter().map(|(m, c)| (m.clone(), -c.clone())).collect(),
        }
    }

    /// Subtracts two polynomials.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Multiplies two polynomials (schoolbook algorithm).
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }

        let mut terms = Vec::with_capacity(self.len() * other.len());

        for (m1, c1) in &self.terms {
            for (m2, c2) in &other.terms {
                terms.push((m1.mul(m2), c1.clone() * c2.clone()));
            }
        }

        Self::new(terms)
    }

    /// Computes self^n by repeated squaring.
    #[must_use]
    pub fn pow(&self, n: u32) -> Self {
        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result.mul(&base);
            }
            exp >>= 1;
            if exp > 0 {
                base = base.mul(&base);
            }
        }

        result
    }

    /// Substitutes symbols by polynomials, simultaneously.
    ///
    /// Symbols without an entry in `replacements` are left in place. Every
    /// replacement is applied to the original polynomial, so a replacement
    /// that itself mentions a replaced symbol is not substituted again.
    #[must_use]
    pub fn substitute(&self, replacements: &FxHashMap<Symbol, SparsePoly<R>>) -> Self {
        let mut power_cache: FxHashMap<(Symbol, u32), SparsePoly<R>> = FxHashMap::default();
        let mut result = Self::zero();

        for (m, c) in &self.terms {
            let mut kept = Vec::new();
            let mut product = Self::constant(c.clone());

            for (s, e) in m.powers() {
                match replacements.get(s) {
                    Some(r) => {
                        let power = power_cache
                            .entry((s.clone(), *e))
                            .or_insert_with(|| r.pow(*e));
                        product = product.mul(power);
                    }
                    None => kept.push((s.clone(), *e)),
                }
            }

            if !kept.is_empty() {
                product = product.mul(&Self::term(Monomial::from_powers(kept), R::one()));
            }
            result = result.add(&product);
        }

        result
    }
}

impl<R: CommutativeRing + OrderedRing + fmt::Display> fmt::Display for SparsePoly<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        for (i, (m, c)) in self.terms.iter().enumerate() {
            let negative = c.signum() < 0;
            match (i, negative) {
                (0, true) => write!(f, "-")?,
                (0, false) => {}
                (_, true) => write!(f, " - ")?,
                (_, false) => write!(f, " + ")?,
            }

            let magnitude = c.abs();
            if m.is_one() {
                write!(f, "{magnitude}")?;
            } else if magnitude.is_one() {
                write!(f, "{m}")?;
            } else {
                write!(f, "{magnitude}*{m}")?;
            }
        }
        Ok(())
    }
}
