//! Property-based tests for the moment recursion and Hermite generator.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::config::{BaseMoments, SessionConfig};
    use crate::engine::MomentEngine;
    use crate::label::{labels_for, Label};
    use crate::session::MomentSession;
    use crate::value::Value;
    use bihermite_integers::Rational;

    fn label() -> impl Strategy<Value = Label> {
        prop_oneof![Just(Label::First), Just(Label::Second)]
    }

    // Sequences of up to eight labels; 7!! = 105 leaves at most.
    fn labels() -> impl Strategy<Value = Vec<Label>> {
        proptest::collection::vec(label(), 0..=8)
    }

    fn small_rational() -> impl Strategy<Value = Rational> {
        (-5i64..=5, 1i64..=4).prop_map(|(n, d)| Rational::from_i64(n, d))
    }

    fn numeric_base() -> impl Strategy<Value = BaseMoments> {
        (small_rational(), small_rational(), small_rational())
            .prop_map(|(a, b, c)| BaseMoments::rational(a, b, c))
    }

    fn sym(name: &str) -> Value {
        Value::symbol(name).unwrap()
    }

    proptest! {
        #[test]
        fn moment_is_permutation_invariant(
            labels in labels(),
            shuffled in labels().prop_flat_map(|l| Just(l).prop_shuffle()),
        ) {
            let base = BaseMoments::symbolic();
            let mut engine = MomentEngine::new(&base);

            let reversed: Vec<Label> = labels.iter().rev().copied().collect();
            prop_assert_eq!(engine.moment_of(&labels), engine.moment_of(&reversed));

            let mut sorted = shuffled.clone();
            sorted.sort();
            prop_assert_eq!(engine.moment_of(&shuffled), engine.moment_of(&sorted));
        }

        #[test]
        fn odd_order_moments_vanish(a in 0u32..6, b in 0u32..6) {
            prop_assume!((a + b) % 2 == 1);
            let base = BaseMoments::symbolic();
            prop_assert!(MomentEngine::new(&base).joint_moment(a, b).is_zero());
        }

        #[test]
        fn memo_agrees_with_plain(a in 0u32..6, b in 0u32..6) {
            let base = BaseMoments::symbolic();
            let plain = MomentEngine::new(&base).joint_moment(a, b);
            let memo = MomentEngine::with_memo(&base).joint_moment(a, b);
            prop_assert_eq!(plain, memo);
        }

        #[test]
        fn numeric_base_gives_constant(base in numeric_base(), a in 0u32..5, b in 0u32..5) {
            let v = MomentEngine::new(&base).joint_moment(a, b);
            prop_assert!(v.is_fully_numeric());
        }

        #[test]
        fn resolving_placeholders_matches_resolved_form(n in 0i64..=4, m in 0i64..=4) {
            let session = MomentSession::with_base_moments(BaseMoments::symbolic());
            let (y1, y2) = (sym("y1"), sym("y2"));

            let unresolved = session.hermite(n, m, &y1, &y2, false).unwrap();
            let resolved = session.hermite(n, m, &y1, &y2, true).unwrap();
            prop_assert_eq!(session.resolve_placeholders(&unresolved).unwrap(), resolved);
        }

        #[test]
        fn resolving_placeholders_numeric(
            base in numeric_base(),
            n in 0i64..=4,
            m in 0i64..=4,
            y1 in small_rational(),
            y2 in small_rational(),
        ) {
            let session = MomentSession::with_base_moments(base);
            let (y1, y2) = (Value::from(y1), Value::from(y2));

            let unresolved = session.hermite(n, m, &y1, &y2, false).unwrap();
            let resolved = session.hermite(n, m, &y1, &y2, true).unwrap();
            prop_assert!(resolved.is_fully_numeric());
            prop_assert_eq!(session.resolve_placeholders(&unresolved).unwrap(), resolved);
        }

        #[test]
        fn hermite_degenerate_in_second_variable(n in 0u32..=7) {
            let base = BaseMoments::symbolic();
            let mut engine = MomentEngine::new(&base);
            let h = engine.hermite(n, 0, &sym("y1"), &sym("y2"), true);

            for name in ["y2", "mu02", "mu11"] {
                prop_assert!(!h.references(name));
            }
        }

        #[test]
        fn hermite_symmetric_under_swap(n in 0u32..=4, m in 0u32..=4) {
            // H_{n,m}(y1, y2) with the variables and base moments swapped
            // is H_{m,n}(y2, y1).
            let base = BaseMoments::symbolic();
            let swapped = BaseMoments::new(sym("mu02"), sym("mu20"), sym("mu11"));
            let (y1, y2) = (sym("y1"), sym("y2"));

            let direct = MomentEngine::new(&base).hermite(n, m, &y1, &y2, true);
            let mirrored = MomentEngine::new(&swapped).hermite(m, n, &y2, &y1, true);
            prop_assert_eq!(direct, mirrored);
        }

        #[test]
        fn memoized_session_changes_nothing(n in 0i64..=4, m in 0i64..=4) {
            let plain = MomentSession::with_base_moments(BaseMoments::symbolic());
            let mut memo = MomentSession::new(SessionConfig::default().with_memoize(true));
            memo.set_base_moments(BaseMoments::symbolic());

            let (y1, y2) = (sym("y1"), sym("y2"));
            prop_assert_eq!(
                plain.hermite(n, m, &y1, &y2, true),
                memo.hermite(n, m, &y1, &y2, true)
            );
        }
    }

    #[test]
    fn resolve_consistency_exhaustive_up_to_order_six() {
        let symbolic = MomentSession::with_base_moments(BaseMoments::symbolic());
        let numeric = MomentSession::with_base_moments(BaseMoments::rational(
            Rational::from_i64(2, 3),
            Rational::from_i64(2, 3),
            Rational::from_i64(-1, 3),
        ));
        let (y1, y2) = (sym("y1"), sym("y2"));

        for session in [&symbolic, &numeric] {
            for n in 0..=6 {
                for m in 0..=(6 - n) {
                    let unresolved = session.hermite(n, m, &y1, &y2, false).unwrap();
                    let resolved = session.hermite(n, m, &y1, &y2, true).unwrap();
                    assert_eq!(
                        session.resolve_placeholders(&unresolved).unwrap(),
                        resolved,
                        "H_{{{n},{m}}}"
                    );
                }
            }
        }
    }

    #[test]
    fn joint_moment_matches_label_sequence() {
        let base = BaseMoments::symbolic();
        let mut engine = MomentEngine::new(&base);
        for a in 0..5 {
            for b in 0..5 {
                let labels = labels_for(a, b);
                assert_eq!(engine.joint_moment(a, b), engine.moment_of(&labels));
            }
        }
    }
}
