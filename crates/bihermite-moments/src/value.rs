//! The dual numeric/symbolic value type.
//!
//! A [`Value`] is a polynomial with exact rational coefficients over named
//! symbols. A rational number is just a constant polynomial, so numeric and
//! symbolic computations run through exactly the same code. Values are
//! always fully expanded; `==` is mathematical equality.

use std::collections::BTreeSet;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use bihermite_integers::{Integer, Rational};
use bihermite_poly::{SparsePoly, Symbol};
use bihermite_rings::Q;
use rustc_hash::FxHashMap;

use crate::error::{MomentError, Result};

/// An exact rational number or a polynomial expression over named symbols.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Value(SparsePoly<Q>);

impl Value {
    /// The value 0.
    #[must_use]
    pub fn zero() -> Self {
        Self(SparsePoly::zero())
    }

    /// The value 1.
    #[must_use]
    pub fn one() -> Self {
        Self(SparsePoly::one())
    }

    /// An integer constant.
    #[must_use]
    pub fn integer(n: i64) -> Self {
        Self(SparsePoly::constant(Q::from_integer(n)))
    }

    /// A rational constant.
    #[must_use]
    pub fn rational(r: Rational) -> Self {
        Self(SparsePoly::constant(Q(r)))
    }

    /// A free symbolic indeterminate.
    ///
    /// # Errors
    ///
    /// Returns [`MomentError::InvalidSymbol`] unless `name` is an identifier.
    pub fn symbol(name: &str) -> Result<Self> {
        Symbol::try_new(name)
            .map(Self::from)
            .ok_or_else(|| MomentError::InvalidSymbol(name.to_string()))
    }

    /// Parses a rational literal (`3`, `-2/3`) or a symbol name (`mu20`).
    ///
    /// # Errors
    ///
    /// Returns [`MomentError::InvalidRational`] for malformed numeric
    /// literals and [`MomentError::InvalidSymbol`] for anything else that is
    /// not an identifier.
    pub fn parse(text: &str) -> Result<Self> {
        let text = text.trim();
        let numeric = text
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_digit() || c == '-' || c == '+');

        if numeric || text.is_empty() {
            Ok(Self::rational(text.parse::<Rational>()?))
        } else {
            Self::symbol(text)
        }
    }

    /// Returns true if this is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns true if no free symbol remains.
    #[must_use]
    pub fn is_fully_numeric(&self) -> bool {
        self.0.is_constant()
    }

    /// Returns the exact rational value of a fully numeric value.
    #[must_use]
    pub fn to_rational(&self) -> Option<Rational> {
        self.0.constant_value().map(Q::into_inner)
    }

    /// Returns a floating point approximation of a fully numeric value.
    ///
    /// Intended for display next to the exact form only.
    #[must_use]
    pub fn approximate(&self) -> Option<f64> {
        self.to_rational().map(|r| r.approximate())
    }

    /// Returns every free symbol.
    #[must_use]
    pub fn free_symbols(&self) -> BTreeSet<Symbol> {
        self.0.free_symbols()
    }

    /// Returns true if a symbol named `name` occurs in this value.
    #[must_use]
    pub fn references(&self, name: &str) -> bool {
        Symbol::try_new(name).is_some_and(|s| self.0.contains_symbol(&s))
    }

    /// Returns the number of terms in the expanded form.
    #[must_use]
    pub fn term_count(&self) -> usize {
        self.0.len()
    }

    /// Computes self^n.
    #[must_use]
    pub fn pow(&self, n: u32) -> Self {
        Self(self.0.pow(n))
    }

    /// Replaces symbols by values, simultaneously, and re-expands.
    #[must_use]
    pub fn substitute(&self, replacements: &FxHashMap<Symbol, Value>) -> Self {
        let polys: FxHashMap<Symbol, SparsePoly<Q>> = replacements
            .iter()
            .map(|(s, v)| (s.clone(), v.0.clone()))
            .collect();
        Self(self.0.substitute(&polys))
    }
}

impl Default for Value {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<Symbol> for Value {
    fn from(s: Symbol) -> Self {
        Self(SparsePoly::var(s))
    }
}

impl From<Rational> for Value {
    fn from(r: Rational) -> Self {
        Self::rational(r)
    }
}

impl From<Integer> for Value {
    fn from(n: Integer) -> Self {
        Self(SparsePoly::constant(Q::from(n)))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::integer(n)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for Value {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.add(&rhs.0))
    }
}

impl Add for &Value {
    type Output = Value;

    fn add(self, rhs: Self) -> Self::Output {
        Value(self.0.add(&rhs.0))
    }
}

impl Sub for Value {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0.sub(&rhs.0))
    }
}

impl Sub for &Value {
    type Output = Value;

    fn sub(self, rhs: Self) -> Self::Output {
        Value(self.0.sub(&rhs.0))
    }
}

impl Mul for Value {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0.mul(&rhs.0))
    }
}

impl Mul for &Value {
    type Output = Value;

    fn mul(self, rhs: Self) -> Self::Output {
        Value(self.0.mul(&rhs.0))
    }
}

impl Neg for Value {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(self.0.neg())
    }
}

impl Neg for &Value {
    type Output = Value;

    fn neg(self) -> Self::Output {
        Value(self.0.neg())
    }
}
