//! Property-based tests for `bigi`.
//!
//! Every operation is cross-checked against native `i128` arithmetic on
//! operands small enough that the native result cannot overflow:
//! 1. Radix round trips and agreement with native formatting
//! 2. Ring laws for add, subtract and multiply
//! 3. The truncating division identity
//! 4. Exponentiation and modular exponentiation
//!
//! Operands drawn as decimal text of up to a few hundred digits check the
//! division identity and radix round trips past the native range.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::uninlined_format_args,
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use std::cmp::Ordering;

use bigi::BigInt;
use proptest::prelude::*;

fn big(v: impl Into<i128>) -> BigInt {
    BigInt::from(v.into())
}

/// Non-zero decimal operand of `1..=max_digits + 1` digits.
fn long_operand(max_digits: usize) -> impl Strategy<Value = BigInt> {
    prop::string::string_regex(&format!("-?[1-9][0-9]{{0,{max_digits}}}"))
        .expect("valid regex")
        .prop_map(|text| BigInt::parse_radix(&text, 10).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    // -- Parsing and Formatting --

    #[test]
    fn decimal_text_matches_native(v in any::<i128>()) {
        let value = big(v);
        prop_assert_eq!(value.to_string(), v.to_string());
        prop_assert_eq!(BigInt::parse_radix(&v.to_string(), 10).unwrap(), value);
    }

    #[test]
    fn radix_round_trip(v in any::<i128>(), radix in 2u32..=36) {
        let value = big(v);
        let text = value.to_string_radix(radix).unwrap();
        prop_assert_eq!(BigInt::parse_radix(&text, radix).unwrap(), value);
    }

    #[test]
    fn radix_round_trip_long(x in long_operand(200), radix in 2u32..=36) {
        let text = x.to_string_radix(radix).unwrap();
        prop_assert_eq!(BigInt::parse_radix(&text, radix).unwrap(), x.clone());
        prop_assert_eq!(BigInt::parse(&x.to_string()).unwrap(), x);
    }

    #[test]
    fn lowercase_input_parses_like_uppercase(v in any::<i64>(), radix in 11u32..=36) {
        let text = big(v).to_string_radix(radix).unwrap();
        prop_assert_eq!(
            BigInt::parse_radix(&text.to_lowercase(), radix).unwrap(),
            big(v)
        );
    }

    #[test]
    fn hex_matches_native(v in any::<i64>()) {
        let expected = if v < 0 {
            format!("-{:X}", v.unsigned_abs())
        } else {
            format!("{:X}", v)
        };
        prop_assert_eq!(big(v).to_string_radix(16).unwrap(), expected);
    }

    #[test]
    fn prefixed_input_infers_radix(v in any::<u64>()) {
        prop_assert_eq!(BigInt::parse(&format!("0x{:x}", v)).unwrap(), big(v));
        prop_assert_eq!(BigInt::parse(&format!("0b{:b}", v)).unwrap(), big(v));
        prop_assert_eq!(BigInt::parse(&format!("-0{:o}", v)).unwrap(), big(v).negate());
    }

    #[test]
    fn from_f64_truncates_toward_zero(f in -1.0e15f64..1.0e15) {
        #[allow(clippy::cast_possible_truncation, reason = "range fits i64")]
        let expected = f.trunc() as i64;
        prop_assert_eq!(BigInt::from_f64(f).unwrap(), big(expected));
    }

    // -- Comparison --

    #[test]
    fn compare_matches_native(a in any::<i128>(), b in any::<i128>()) {
        prop_assert_eq!(big(a).compare(&big(b)), a.cmp(&b));
        prop_assert_eq!(
            big(a).compare_abs(&big(b)),
            a.unsigned_abs().cmp(&b.unsigned_abs())
        );
    }

    #[test]
    fn compare_is_antisymmetric(a in any::<i64>(), b in any::<i64>()) {
        prop_assert_eq!(big(a).compare(&big(b)), big(b).compare(&big(a)).reverse());
    }

    // -- Ring Laws --

    #[test]
    fn add_sub_match_native(a in any::<i64>(), b in any::<i64>()) {
        let (x, y) = (big(a), big(b));
        prop_assert_eq!(x.add(&y), big(i128::from(a) + i128::from(b)));
        prop_assert_eq!(x.subtract(&y), big(i128::from(a) - i128::from(b)));
        prop_assert_eq!(x.subtract(&y).add(&y), x);
    }

    #[test]
    fn add_is_commutative_and_associative(a in any::<i64>(), b in any::<i64>(), c in any::<i64>()) {
        let (x, y, z) = (big(a), big(b), big(c));
        prop_assert_eq!(x.add(&y), y.add(&x));
        prop_assert_eq!(x.add(&y).add(&z), x.add(&y.add(&z)));
    }

    #[test]
    fn mul_matches_native(a in any::<i64>(), b in any::<i64>()) {
        let (x, y) = (big(a), big(b));
        prop_assert_eq!(x.multiply(&y), big(i128::from(a) * i128::from(b)));
        prop_assert_eq!(x.multiply(&y), y.multiply(&x));
    }

    #[test]
    fn mul_distributes_over_add(a in any::<i32>(), b in any::<i32>(), c in any::<i32>()) {
        let (x, y, z) = (big(a), big(b), big(c));
        prop_assert_eq!(x.multiply(&y.add(&z)), x.multiply(&y).add(&x.multiply(&z)));
    }

    #[test]
    fn square_is_self_product(a in any::<i64>()) {
        prop_assert_eq!(big(a).square(), big(a).multiply(&big(a)));
    }

    #[test]
    fn negate_and_abs(a in any::<i128>()) {
        let x = big(a);
        prop_assert_eq!(x.negate().negate(), x.clone());
        prop_assert_eq!(x.add(&x.negate()), BigInt::zero());
        prop_assert!(!x.abs().is_negative());
        prop_assert_eq!(x.abs().to_string(), a.unsigned_abs().to_string());
    }

    // -- Division --

    #[test]
    fn div_mod_matches_native(a in (i128::MIN + 1)..=i128::MAX, b in any::<i64>().prop_filter("non-zero", |b| *b != 0)) {
        let b = i128::from(b);
        let (q, r) = big(a).div_mod(&big(b)).unwrap();
        prop_assert_eq!(q.clone(), big(a / b));
        prop_assert_eq!(r.clone(), big(a % b));
        prop_assert_eq!(q.multiply(&big(b)).add(&r), big(a));
        prop_assert_eq!(r.compare_abs(&big(b)), Ordering::Less);
    }

    #[test]
    fn remainder_takes_dividend_sign(a in any::<i64>(), b in any::<i64>().prop_filter("non-zero", |b| *b != 0)) {
        let r = big(a).modulo(&big(b)).unwrap();
        prop_assert!(r.is_zero() || r.sign() == big(a).sign());
    }

    #[test]
    fn div_mod_identity_on_long_operands(a in long_operand(200), b in long_operand(80)) {
        let (q, r) = a.div_mod(&b).unwrap();
        prop_assert_eq!(q.multiply(&b).add(&r), a.clone());
        prop_assert_eq!(r.compare_abs(&b), Ordering::Less);
        prop_assert!(r.is_zero() || r.sign() == a.sign());
        prop_assert_eq!(a.divide(&b).unwrap(), q);
        prop_assert_eq!(a.modulo(&b).unwrap(), r);
    }

    #[test]
    fn long_divisor_exceeding_dividend(a in long_operand(40), b in long_operand(80)) {
        let (q, r) = a.div_mod(&b).unwrap();
        if a.compare_abs(&b) == Ordering::Less {
            prop_assert!(q.is_zero());
            prop_assert_eq!(r, a);
        } else {
            prop_assert_eq!(q.multiply(&b).add(&r), a);
        }
    }

    // -- Exponentiation --

    #[test]
    fn pow_matches_native(base in -50i128..=50, exp in 0u32..=20) {
        prop_assert_eq!(big(base).pow_u32(exp).unwrap(), big(base.pow(exp)));
    }

    #[test]
    fn pow_adds_exponents(base in -9i64..=9, m in 0u32..=12, n in 0u32..=12) {
        let x = big(base);
        prop_assert_eq!(
            x.pow_u32(m).unwrap().multiply(&x.pow_u32(n).unwrap()),
            x.pow_u32(m + n).unwrap()
        );
    }

    #[test]
    fn mod_pow_matches_reduced_pow(
        base in -30i128..=30,
        exp in 0u32..=25,
        modulus in (-1000i128..=1000).prop_filter("non-zero", |m| *m != 0),
    ) {
        let expected = big(base.pow(exp) % modulus);
        prop_assert_eq!(big(base).mod_pow(&big(exp), &big(modulus)).unwrap(), expected.clone());
        prop_assert_eq!(
            big(base).pow_u32(exp).unwrap().modulo(&big(modulus)).unwrap(),
            expected
        );
    }
}
