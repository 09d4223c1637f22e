//! Bivariate Hermite polynomials via the complex binomial expansion.
//!
//! `H_{n,m}(y1, y2)` is the real part of
//! `E[(y1 + iY1)^n (y2 + iY2)^m]`. Expanding both binomials formally gives
//! terms `C(n,k) C(m,j) i^(k+j) y1^(n-k) y2^(m-j) Y1^k Y2^j`; the power of
//! `i` is real exactly when `k + j` is even, where it equals
//! `(-1)^((k+j)/2)`. Odd terms are purely imaginary and dropped. What is
//! left of `Y1^k Y2^j` is either resolved to `mu_{k,j}` by the pairing
//! recursion or kept as a placeholder symbol.

use bihermite_integers::Integer;
use bihermite_poly::Symbol;

use crate::engine::MomentEngine;
use crate::value::Value;

/// One term `C(n,k) y^(n-k) Y^k` of a univariate binomial `(y + iY)^n`,
/// without its power of `i`.
#[derive(Clone, PartialEq, Eq, Debug)]
struct BinomialTerm {
    coefficient: Integer,
    point_power: u32,
    variable_power: u32,
}

fn binomial_expansion(n: u32) -> impl Iterator<Item = BinomialTerm> {
    (0..=n).map(move |k| BinomialTerm {
        coefficient: Integer::binomial(n, k),
        point_power: n - k,
        variable_power: k,
    })
}

/// Returns `i^power` when it is real (±1), `None` when it is ±i.
#[must_use]
pub fn real_unit_power(power: u32) -> Option<i64> {
    match power % 4 {
        0 => Some(1),
        2 => Some(-1),
        _ => None,
    }
}

/// A real-coefficient term of `H_{n,m}`:
/// `coefficient * y1^y1_power * y2^y2_power * mu_{moment}`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct HermiteTerm {
    /// Integer coefficient, sign of `i^(k+j)` included.
    pub coefficient: Integer,
    /// Power of the evaluation point `y1`.
    pub y1_power: u32,
    /// Power of the evaluation point `y2`.
    pub y2_power: u32,
    /// Indices `(k, j)` of the moment `E[Y1^k Y2^j]` this term carries.
    pub moment: (u32, u32),
}

impl HermiteTerm {
    /// Returns true if the term carries no moment (k = j = 0).
    #[must_use]
    pub fn is_pure(&self) -> bool {
        self.moment == (0, 0)
    }
}

/// Lists the terms of `H_{n,m}` that survive taking the real part, in
/// expansion order (k outer, j inner).
#[must_use]
pub fn hermite_terms(n: u32, m: u32) -> Vec<HermiteTerm> {
    let second: Vec<BinomialTerm> = binomial_expansion(m).collect();

    binomial_expansion(n)
        .flat_map(|t1| {
            second.iter().filter_map(move |t2| {
                let sign = real_unit_power(t1.variable_power + t2.variable_power)?;
                Some(HermiteTerm {
                    coefficient: &(&t1.coefficient * &t2.coefficient) * &Integer::new(sign),
                    y1_power: t1.point_power,
                    y2_power: t2.point_power,
                    moment: (t1.variable_power, t2.variable_power),
                })
            })
        })
        .collect()
}

/// Name of the placeholder for `mu_{k,j}`.
///
/// `mu{k}{j}` when both indices are single digits, so the placeholders for
/// second moments are exactly `mu20`, `mu02` and `mu11`; `mu{k}_{j}`
/// otherwise, so that e.g. `(1, 10)` and `(11, 0)` stay distinct.
#[must_use]
pub fn placeholder_name(k: u32, j: u32) -> String {
    if k < 10 && j < 10 {
        format!("mu{k}{j}")
    } else {
        format!("mu{k}_{j}")
    }
}

/// The placeholder symbol for `mu_{k,j}`.
#[must_use]
pub fn placeholder_symbol(k: u32, j: u32) -> Symbol {
    Symbol::new(&placeholder_name(k, j))
}

/// Recovers `(k, j)` from a placeholder name produced by
/// [`placeholder_name`]. Any other name yields `None`.
#[must_use]
pub fn parse_placeholder(name: &str) -> Option<(u32, u32)> {
    let digits = name.strip_prefix("mu")?;
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());

    let (k, j) = match digits.split_once('_') {
        Some((k, j)) if all_digits(k) && all_digits(j) => (k.parse().ok()?, j.parse().ok()?),
        None if digits.len() == 2 && all_digits(digits) => {
            let (k, j) = digits.split_at(1);
            (k.parse().ok()?, j.parse().ok()?)
        }
        _ => return None,
    };

    // Only canonical spellings: "mu2_0" and "mu020" are not placeholders.
    (placeholder_name(k, j) == name).then_some((k, j))
}

impl MomentEngine<'_> {
    /// Builds `H_{n,m}(y1, y2)`.
    ///
    /// With `resolve` every moment is expanded into the base moments;
    /// without it, each `mu_{k,j}` with `k + j > 0` stays a placeholder
    /// symbol (see [`placeholder_name`]).
    pub fn hermite(&mut self, n: u32, m: u32, y1: &Value, y2: &Value, resolve: bool) -> Value {
        let y1_powers: Vec<Value> = (0..=n).map(|e| y1.pow(e)).collect();
        let y2_powers: Vec<Value> = (0..=m).map(|e| y2.pow(e)).collect();

        let mut total = Value::zero();
        for term in hermite_terms(n, m) {
            let (k, j) = term.moment;
            let pure = term.is_pure();
            let point = Value::from(term.coefficient)
                * (&y1_powers[term.y1_power as usize] * &y2_powers[term.y2_power as usize]);

            let moment = if resolve {
                self.joint_moment(k, j)
            } else if pure {
                Value::one()
            } else {
                Value::from(placeholder_symbol(k, j))
            };

            total = total + point * moment;
        }
        total
    }
}
