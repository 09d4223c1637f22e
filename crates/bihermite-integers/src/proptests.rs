//! Property-based tests for exact arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{Integer, Rational};

    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn small_rational() -> impl Strategy<Value = Rational> {
        (small_int(), non_zero_int()).prop_map(|(n, d)| Rational::from_i64(n, d))
    }

    proptest! {
        // Binomial coefficients

        #[test]
        fn binomial_symmetry(n in 0u32..60, k in 0u32..60) {
            prop_assume!(k <= n);
            prop_assert_eq!(Integer::binomial(n, k), Integer::binomial(n, n - k));
        }

        #[test]
        fn binomial_pascal(n in 1u32..60, k in 1u32..60) {
            prop_assume!(k <= n);
            prop_assert_eq!(
                Integer::binomial(n, k),
                Integer::binomial(n - 1, k - 1) + Integer::binomial(n - 1, k)
            );
        }

        #[test]
        fn binomial_row_sum(n in 0u32..40) {
            // Σ_k C(n, k) = 2^n
            let sum = (0..=n).fold(Integer::new(0), |acc, k| acc + Integer::binomial(n, k));
            let power = (0..n).fold(Integer::new(1), |acc, _| acc * Integer::new(2));
            prop_assert_eq!(sum, power);
        }

        // Rational field axioms

        #[test]
        fn rational_add_commutative(a in small_rational(), b in small_rational()) {
            prop_assert_eq!(a.clone() + b.clone(), b + a);
        }

        #[test]
        fn rational_mul_associative(
            a in small_rational(),
            b in small_rational(),
            c in small_rational()
        ) {
            prop_assert_eq!(
                (a.clone() * b.clone()) * c.clone(),
                a * (b * c)
            );
        }

        #[test]
        fn rational_distributive(
            a in small_rational(),
            b in small_rational(),
            c in small_rational()
        ) {
            prop_assert_eq!(
                a.clone() * (b.clone() + c.clone()),
                a.clone() * b + a * c
            );
        }

        #[test]
        fn rational_additive_inverse(a in small_rational()) {
            use num_traits::Zero;
            prop_assert!((a.clone() + -a).is_zero());
        }

        #[test]
        fn rational_multiplicative_inverse(a in small_rational()) {
            use num_traits::{One, Zero};
            prop_assume!(!a.is_zero());
            let inverse = Rational::new(a.denominator(), a.numerator());
            prop_assert!((a * inverse).is_one());
        }

        #[test]
        fn rational_display_parses_back(a in small_rational()) {
            prop_assert_eq!(a.to_string().parse::<Rational>(), Ok(a));
        }

        #[test]
        fn rational_approximation_is_close(n in small_int(), d in non_zero_int()) {
            #[allow(clippy::cast_precision_loss)]
            let expected = n as f64 / d as f64;
            let approx = Rational::from_i64(n, d).approximate();
            prop_assert!((approx - expected).abs() <= 1e-12 * expected.abs().max(1.0));
        }
    }
}
