//! Property-based tests for sparse polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rustc_hash::FxHashMap;

    use crate::{Monomial, SparsePoly, Symbol};
    use bihermite_rings::rationals::Q;

    const NAMES: [&str; 3] = ["a", "b", "c"];

    fn small_coeff() -> impl Strategy<Value = Q> {
        (-6i64..6i64, 1i64..4i64).prop_map(|(n, d)| Q::new(n, d))
    }

    fn small_monomial() -> impl Strategy<Value = Monomial> {
        proptest::collection::vec(0u32..3, NAMES.len()).prop_map(|exps| {
            Monomial::from_powers(NAMES.iter().zip(exps).map(|(n, e)| (Symbol::new(n), e)))
        })
    }

    // Up to four terms of degree at most 6 in a, b, c.
    fn small_poly() -> impl Strategy<Value = SparsePoly<Q>> {
        proptest::collection::vec((small_monomial(), small_coeff()), 0..=4).prop_map(SparsePoly::new)
    }

    fn constant_map() -> impl Strategy<Value = FxHashMap<Symbol, SparsePoly<Q>>> {
        proptest::collection::vec(small_coeff(), NAMES.len()).prop_map(|values| {
            NAMES
                .iter()
                .zip(values)
                .map(|(n, v)| (Symbol::new(n), SparsePoly::constant(v)))
                .collect()
        })
    }

    proptest! {
        // Polynomial ring axioms

        #[test]
        fn poly_add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn poly_mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.mul(&b), b.mul(&a));
        }

        #[test]
        fn poly_mul_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(a.mul(&b).mul(&c), a.mul(&b.mul(&c)));
        }

        #[test]
        fn poly_distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            // a * (b + c) = a * b + a * c
            let left = a.mul(&b.add(&c));
            let right = a.mul(&b).add(&a.mul(&c));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn poly_additive_inverse(a in small_poly()) {
            prop_assert!(a.add(&a.neg()).is_zero());
        }

        #[test]
        fn poly_mul_identity(a in small_poly()) {
            prop_assert_eq!(a.mul(&SparsePoly::one()), a.clone());
            prop_assert!(a.mul(&SparsePoly::zero()).is_zero());
        }

        #[test]
        fn poly_pow_matches_repeated_mul(a in small_poly(), e in 0u32..4) {
            let repeated = (0..e).fold(SparsePoly::one(), |acc, _| acc.mul(&a));
            prop_assert_eq!(a.pow(e), repeated);
        }

        // Substitution is a ring homomorphism

        #[test]
        fn substitute_respects_mul(a in small_poly(), b in small_poly(), map in constant_map()) {
            prop_assert_eq!(
                a.mul(&b).substitute(&map),
                a.substitute(&map).mul(&b.substitute(&map))
            );
        }

        #[test]
        fn substitute_respects_add(a in small_poly(), b in small_poly(), map in constant_map()) {
            prop_assert_eq!(
                a.add(&b).substitute(&map),
                a.substitute(&map).add(&b.substitute(&map))
            );
        }

        #[test]
        fn substitute_all_symbols_gives_constant(a in small_poly(), map in constant_map()) {
            prop_assert!(a.substitute(&map).is_constant());
        }

        #[test]
        fn substitute_identity_is_noop(a in small_poly()) {
            let identity: FxHashMap<_, _> = NAMES
                .iter()
                .map(|n| (Symbol::new(n), SparsePoly::var(Symbol::new(n))))
                .collect();
            prop_assert_eq!(a.substitute(&identity), a);
        }
    }
}
