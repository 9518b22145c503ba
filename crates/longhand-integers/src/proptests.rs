//! Property-based tests for arbitrary precision arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::algorithms::karatsuba::{karatsuba_mul, schoolbook_mul};
    use crate::digit::Digit;
    use crate::{Integer, Natural, Sign};

    // Strategy for generating naturals a few digits wide
    fn natural() -> impl Strategy<Value = Natural> {
        prop::collection::vec(any::<Digit>(), 0..6).prop_map(Natural::from_digits)
    }

    // Strategy for generating non-zero naturals
    fn non_zero_natural() -> impl Strategy<Value = Natural> {
        natural().prop_filter("non-zero", |n| !n.is_zero())
    }

    // Strategy for generating signed integers
    fn integer() -> impl Strategy<Value = Integer> {
        (any::<bool>(), natural()).prop_map(|(neg, mag)| {
            let sign = if neg { Sign::Negative } else { Sign::Positive };
            Integer::new(sign, mag)
        })
    }

    proptest! {
        // Natural semiring axioms

        #[test]
        fn natural_add_commutative(a in natural(), b in natural()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn natural_add_associative(a in natural(), b in natural(), c in natural()) {
            prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
        }

        #[test]
        fn natural_mul_commutative(a in natural(), b in natural()) {
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn natural_distributive(a in natural(), b in natural(), c in natural()) {
            prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
        }

        #[test]
        fn natural_add_sub_round_trip(a in natural(), b in natural()) {
            prop_assert_eq!(&(&a + &b) - &b, a);
        }

        #[test]
        fn natural_results_canonical(a in natural(), b in non_zero_natural()) {
            let (q, r) = a.divmod(&b);
            prop_assert!((&a + &b).is_canonical());
            prop_assert!((&a * &b).is_canonical());
            prop_assert!(q.is_canonical() && r.is_canonical());
        }

        // Division

        #[test]
        fn divmod_invariant(a in natural(), b in non_zero_natural()) {
            let (q, r) = a.divmod(&b);
            prop_assert_eq!(&(&q * &b) + &r, a);
            prop_assert!(r < b);
        }

        // Multiplication algorithms agree

        #[test]
        fn karatsuba_matches_schoolbook(a in natural(), b in natural()) {
            prop_assert_eq!(karatsuba_mul(&a, &b), schoolbook_mul(&a, &b));
        }

        // Digit shifts

        #[test]
        fn shift_round_trip(a in natural(), k in 0usize..8) {
            prop_assert_eq!(a.shl_digits(k).shr_digits(k), a.clone());
            let (high, low) = a.split_at_digit(k);
            prop_assert_eq!(high.shl_digits(k) + low, a);
        }

        // Decimal conversion

        #[test]
        fn decimal_round_trip(a in natural()) {
            let s = a.to_string();
            prop_assert_eq!(s.parse::<Natural>().unwrap(), a);
        }

        #[test]
        fn integer_decimal_round_trip(a in integer()) {
            let s = a.to_string();
            prop_assert_eq!(s.parse::<Integer>().unwrap(), a);
        }

        // Ordering consistent with numeric value: padding both operands
        // with the same number of trailing decimal zeros must not change
        // any comparison.

        #[test]
        fn ordering_survives_equal_padding(a in any::<Digit>(), b in any::<Digit>(), pad in 0usize..50) {
            let zeros = "0".repeat(pad);
            let an: Natural = format!("{a}{zeros}").parse().unwrap();
            let bn: Natural = format!("{b}{zeros}").parse().unwrap();
            prop_assert_eq!(a.cmp(&b), an.cmp(&bn));
        }

        // Integer sign laws

        #[test]
        fn integer_add_commutative(a in integer(), b in integer()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn integer_additive_inverse(a in integer()) {
            prop_assert_eq!(&a + &(-&a), Integer::default());
        }

        #[test]
        fn integer_sub_is_add_neg(a in integer(), b in integer()) {
            prop_assert_eq!(&a - &b, &a + &(-&b));
        }

        #[test]
        fn integer_mul_sign(a in integer(), b in integer()) {
            let p = &a * &b;
            prop_assert_eq!(p.magnitude(), &(a.magnitude() * b.magnitude()));
            if !p.is_zero() {
                prop_assert_eq!(p.sign(), a.sign().combine(b.sign()));
            }
        }

        #[test]
        fn integer_div_truncates_toward_zero(a in integer(), b in integer()) {
            prop_assume!(!b.is_zero());
            let q = &a / &b;
            // |q| == |a| / |b| and sign(q) == sign(a) xor sign(b)
            prop_assert_eq!(
                q.magnitude(),
                &(a.magnitude() / b.magnitude())
            );
            prop_assert!(&q.abs() * &b.abs() <= a.abs());
        }

        #[test]
        fn integer_zero_is_positive(a in integer()) {
            let z = &a - &a;
            prop_assert!(z.is_zero());
            prop_assert_eq!(z.sign(), Sign::Positive);
        }
    }
}
