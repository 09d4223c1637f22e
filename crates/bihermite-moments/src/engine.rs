//! The Wick/Isserlis pairing recursion.
//!
//! For a product of jointly Gaussian factors, the expectation is the sum
//! over the ways of pairing one fixed factor (the pivot) with each other
//! factor, weighted by the expectation of what remains:
//!
//! ```text
//! E[X1 ... Xk] = Σ_{i<k} E[Xi Xk] · E[X1 ... X̂i ... X(k-1)]
//! ```
//!
//! The recursion bottoms out at the three base second moments. Its cost is
//! `(k-1)!!` leaves for `k` factors; that is accepted, and memoization is
//! available only on request through [`SessionConfig`].

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use tracing::trace;

use crate::config::{BaseMoments, SessionConfig};
use crate::error::Result;
use crate::label::{label_counts, Label};
use crate::value::Value;

/// Evaluates joint moments against one set of base moments.
///
/// An engine is cheap to create and is meant to live for a single top-level
/// request; the optional memo table goes away with it.
#[derive(Debug)]
pub struct MomentEngine<'a> {
    base: &'a BaseMoments,
    memo: Option<FxHashMap<(u32, u32), Value>>,
    evaluations: u64,
}

impl<'a> MomentEngine<'a> {
    /// Creates an engine without memoization.
    #[must_use]
    pub fn new(base: &'a BaseMoments) -> Self {
        Self {
            base,
            memo: None,
            evaluations: 0,
        }
    }

    /// Creates an engine that caches sub-moments by label counts.
    #[must_use]
    pub fn with_memo(base: &'a BaseMoments) -> Self {
        Self {
            base,
            memo: Some(FxHashMap::default()),
            evaluations: 0,
        }
    }

    /// Creates an engine honouring a session configuration.
    #[must_use]
    pub fn from_config(base: &'a BaseMoments, config: &SessionConfig) -> Self {
        if config.memoize {
            Self::with_memo(base)
        } else {
            Self::new(base)
        }
    }

    /// Returns the base moments this engine evaluates against.
    #[must_use]
    pub fn base(&self) -> &'a BaseMoments {
        self.base
    }

    /// Returns the number of `moment_of` evaluations performed so far,
    /// including recursive ones and memo hits.
    #[must_use]
    pub fn evaluations(&self) -> u64 {
        self.evaluations
    }

    /// Computes the joint moment of the product of the labelled variables.
    ///
    /// - `[]` is 1
    /// - a single label is 0 (no partner to pair with)
    /// - two labels are `mu20`, `mu02` or `mu11`
    /// - longer sequences pair the last label with each of the others
    pub fn moment_of(&mut self, labels: &[Label]) -> Value {
        self.evaluations += 1;
        let base = self.base;

        match labels {
            [] => Value::one(),
            [_] => Value::zero(),
            [a, b] => base.pair(*a, *b).clone(),
            [rest @ .., pivot] => {
                let key = label_counts(labels);
                if let Some(hit) = self.memo.as_ref().and_then(|m| m.get(&key)) {
                    trace!(n1 = key.0, n2 = key.1, "moment memo hit");
                    return hit.clone();
                }

                let mut total = Value::zero();
                for i in 0..rest.len() {
                    let remainder: SmallVec<[Label; 16]> = rest[..i]
                        .iter()
                        .chain(&rest[i + 1..])
                        .copied()
                        .collect();
                    let pair = base.pair(rest[i], *pivot);
                    total = total + pair * &self.moment_of(&remainder);
                }

                if let Some(memo) = self.memo.as_mut() {
                    memo.insert(key, total.clone());
                }
                total
            }
        }
    }

    /// Like [`moment_of`](Self::moment_of), for raw numeric labels.
    ///
    /// # Errors
    ///
    /// Returns [`MomentError::UnsupportedLabel`](crate::MomentError::UnsupportedLabel)
    /// for any label other than 1 or 2, before recursing.
    pub fn moment_of_labels(&mut self, raw: &[i64]) -> Result<Value> {
        let labels = raw
            .iter()
            .map(|&l| Label::try_from(l))
            .collect::<Result<Vec<_>>>()?;
        Ok(self.moment_of(&labels))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::labels_for;
    use crate::MomentError;
    use bihermite_integers::Rational;

    fn sym(name: &str) -> Value {
        Value::symbol(name).unwrap()
    }

    fn int(n: i64) -> Value {
        Value::integer(n)
    }

    #[test]
    fn test_base_cases() {
        let base = BaseMoments::symbolic();
        let mut engine = MomentEngine::new(&base);

        assert_eq!(engine.moment_of(&[]), Value::one());
        assert_eq!(engine.moment_of(&[Label::First, Label::First]), sym("mu20"));
        assert_eq!(engine.moment_of(&[Label::Second, Label::Second]), sym("mu02"));
        assert_eq!(engine.moment_of(&[Label::First, Label::Second]), sym("mu11"));
        assert_eq!(engine.moment_of(&[Label::Second, Label::First]), sym("mu11"));
    }

    #[test]
    fn test_fourth_order_closed_forms() {
        let base = BaseMoments::symbolic();
        let mut engine = MomentEngine::new(&base);
        let (mu20, mu02, mu11) = (sym("mu20"), sym("mu02"), sym("mu11"));

        // E[Y1^4] = 3 mu20^2
        assert_eq!(engine.moment_of(&labels_for(4, 0)), int(3) * mu20.pow(2));
        // E[Y1^2 Y2^2] = mu20 mu02 + 2 mu11^2
        assert_eq!(
            engine.moment_of(&labels_for(2, 2)),
            &mu20 * &mu02 + int(2) * mu11.pow(2)
        );
        // E[Y1^3 Y2] = 3 mu20 mu11
        assert_eq!(engine.moment_of(&labels_for(3, 1)), int(3) * mu20 * mu11);
    }

    #[test]
    fn test_sixth_order_univariate() {
        // E[Y^6] = 15 sigma^6, the double factorial 5!! = 15
        let base = BaseMoments::symbolic();
        let mut engine = MomentEngine::new(&base);
        assert_eq!(engine.moment_of(&labels_for(6, 0)), int(15) * sym("mu20").pow(3));
    }

    #[test]
    fn test_odd_orders_vanish() {
        let base = BaseMoments::symbolic();
        let mut engine = MomentEngine::new(&base);
        assert!(engine.moment_of(&[Label::First]).is_zero());
        assert!(engine.moment_of(&labels_for(2, 1)).is_zero());
        assert!(engine.moment_of(&labels_for(3, 2)).is_zero());
    }

    #[test]
    fn test_order_independence() {
        use Label::{First as A, Second as B};
        let base = BaseMoments::symbolic();
        let mut engine = MomentEngine::new(&base);

        let reference = engine.moment_of(&[A, A, A, B, B, B]);
        for ordering in [
            [B, B, B, A, A, A],
            [A, B, A, B, A, B],
            [B, A, A, B, B, A],
            [A, A, B, B, B, A],
        ] {
            assert_eq!(engine.moment_of(&ordering), reference);
        }
    }

    #[test]
    fn test_rational_base() {
        let base = BaseMoments::rational(
            Rational::from_i64(2, 3),
            Rational::from_i64(2, 3),
            Rational::from_i64(-1, 3),
        );
        let mut engine = MomentEngine::new(&base);

        // mu20 mu02 + 2 mu11^2 = 4/9 + 2/9 = 2/3
        let v = engine.moment_of(&labels_for(2, 2));
        assert_eq!(v.to_rational(), Some(Rational::from_i64(2, 3)));
    }

    #[test]
    fn test_memo_matches_plain_and_saves_work() {
        let base = BaseMoments::symbolic();
        let mut plain = MomentEngine::new(&base);
        let mut memo = MomentEngine::with_memo(&base);

        let labels = labels_for(4, 4);
        assert_eq!(plain.moment_of(&labels), memo.moment_of(&labels));
        assert!(memo.evaluations() < plain.evaluations());
    }

    #[test]
    fn test_raw_labels() {
        let base = BaseMoments::symbolic();
        let mut engine = MomentEngine::new(&base);

        assert_eq!(engine.moment_of_labels(&[2, 1]), Ok(sym("mu11")));
        assert_eq!(
            engine.moment_of_labels(&[1, 3, 2, 1]),
            Err(MomentError::UnsupportedLabel(3))
        );
        assert_eq!(engine.evaluations(), 1);
    }
}
