//! Session configuration: the base second moments and engine options.

use bihermite_integers::Rational;

use crate::error::{MomentError, Result};
use crate::label::Label;
use crate::value::Value;

/// Conventional symbol names of the base moments.
pub const MU20: &str = "mu20";
/// See [`MU20`].
pub const MU02: &str = "mu02";
/// See [`MU20`].
pub const MU11: &str = "mu11";

/// The three second-order central moments every computation is
/// parameterized by: `mu20 = E[Y1²]`, `mu02 = E[Y2²]`, `mu11 = E[Y1·Y2]`.
///
/// Each may be a rational number or a free symbol. They are read-only once
/// handed to a session.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct BaseMoments {
    mu20: Value,
    mu02: Value,
    mu11: Value,
}

impl BaseMoments {
    /// Creates base moments from arbitrary values.
    #[must_use]
    pub fn new(mu20: Value, mu02: Value, mu11: Value) -> Self {
        Self { mu20, mu02, mu11 }
    }

    /// Free symbols named `mu20`, `mu02` and `mu11`.
    #[must_use]
    pub fn symbolic() -> Self {
        let named = |name: &str| Value::from(bihermite_poly::Symbol::new(name));
        Self::new(named(MU20), named(MU02), named(MU11))
    }

    /// Exact rational base moments.
    #[must_use]
    pub fn rational(mu20: Rational, mu02: Rational, mu11: Rational) -> Self {
        Self::new(mu20.into(), mu02.into(), mu11.into())
    }

    /// Parses each base moment as a rational literal or a symbol name.
    ///
    /// # Errors
    ///
    /// Returns [`MomentError::MalformedBaseMoment`] naming the first entry
    /// that is neither.
    pub fn parse(mu20: &str, mu02: &str, mu11: &str) -> Result<Self> {
        let field = |name: &'static str, text: &str| {
            Value::parse(text).map_err(|e| MomentError::MalformedBaseMoment {
                name,
                reason: e.to_string(),
            })
        };
        Ok(Self::new(
            field(MU20, mu20)?,
            field(MU02, mu02)?,
            field(MU11, mu11)?,
        ))
    }

    /// `E[Y1²]`.
    #[must_use]
    pub fn mu20(&self) -> &Value {
        &self.mu20
    }

    /// `E[Y2²]`.
    #[must_use]
    pub fn mu02(&self) -> &Value {
        &self.mu02
    }

    /// `E[Y1·Y2]`.
    #[must_use]
    pub fn mu11(&self) -> &Value {
        &self.mu11
    }

    /// The second moment of a pair of labels.
    #[must_use]
    pub fn pair(&self, a: Label, b: Label) -> &Value {
        match (a, b) {
            (Label::First, Label::First) => &self.mu20,
            (Label::Second, Label::Second) => &self.mu02,
            _ => &self.mu11,
        }
    }

    /// Returns true if all three base moments are rational numbers.
    #[must_use]
    pub fn is_fully_numeric(&self) -> bool {
        self.mu20.is_fully_numeric() && self.mu02.is_fully_numeric() && self.mu11.is_fully_numeric()
    }
}

/// Engine options for a session.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct SessionConfig {
    /// Cache sub-moments by label counts. Changes cost, never results.
    pub memoize: bool,
    /// Reject moments of total order above this before recursing.
    pub max_order: Option<u32>,
}

impl SessionConfig {
    /// Enables or disables memoization.
    #[must_use]
    pub fn with_memoize(mut self, memoize: bool) -> Self {
        self.memoize = memoize;
        self
    }

    /// Sets the maximum total moment order.
    #[must_use]
    pub fn with_max_order(mut self, max_order: u32) -> Self {
        self.max_order = Some(max_order);
        self
    }

    /// Checks a total order against `max_order`.
    ///
    /// # Errors
    ///
    /// Returns [`MomentError::OrderLimitExceeded`] if the limit is set and
    /// `order` exceeds it.
    pub fn check_order(&self, order: u64) -> Result<()> {
        match self.max_order {
            Some(limit) if order > u64::from(limit) => {
                Err(MomentError::OrderLimitExceeded { order, limit })
            }
            _ => Ok(()),
        }
    }
}
