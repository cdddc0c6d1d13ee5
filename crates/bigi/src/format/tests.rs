use pretty_assertions::assert_eq;

use crate::{BigInt, BigIntError};

fn radix(value: &BigInt, radix: u32) -> String {
    match value.to_string_radix(radix) {
        Ok(text) => text,
        Err(e) => panic!("formatting {value} in radix {radix}: {e}"),
    }
}

#[test]
fn zero_in_every_radix() {
    for r in 2..=36 {
        assert_eq!(radix(&BigInt::zero(), r), "0");
    }
}

#[test]
fn decimal_matches_display() {
    let value = BigInt::from(-1_234_567_890_123_i64);
    assert_eq!(radix(&value, 10), "-1234567890123");
    assert_eq!(radix(&value, 10), value.to_string());
}

#[test]
fn hex_and_binary() {
    assert_eq!(radix(&BigInt::from(255), 16), "FF");
    assert_eq!(radix(&BigInt::from(-255), 16), "-FF");
    assert_eq!(radix(&BigInt::from(31), 16), "1F");
    assert_eq!(radix(&BigInt::from(5), 2), "101");
    assert_eq!(radix(&BigInt::from(1), 2), "1");
    assert_eq!(radix(&BigInt::from(8), 8), "10");
}

#[test]
fn base_36_uses_full_alphabet() {
    assert_eq!(radix(&BigInt::from(35), 36), "Z");
    assert_eq!(radix(&BigInt::from(36), 36), "10");
    assert_eq!(radix(&BigInt::from(1295), 36), "ZZ");
}

#[test]
fn matches_native_formatting() {
    let value = u128::MAX;
    assert_eq!(radix(&BigInt::from(value), 16), format!("{value:X}"));
    assert_eq!(radix(&BigInt::from(value), 2), format!("{value:b}"));
    assert_eq!(radix(&BigInt::from(value), 8), format!("{value:o}"));
}

#[test]
fn rejects_bad_radix() {
    let value = BigInt::from(10);
    assert_eq!(
        value.to_string_radix(1),
        Err(BigIntError::InvalidRadix { radix: 1 })
    );
    assert_eq!(
        value.to_string_radix(37),
        Err(BigIntError::InvalidRadix { radix: 37 })
    );
    assert_eq!(
        BigInt::zero().to_string_radix(0),
        Err(BigIntError::InvalidRadix { radix: 0 })
    );
}

#[test]
fn round_trips_through_parser() {
    let value = BigInt::from(-987_654_321_987_654_321_i64);
    for r in [2, 3, 7, 16, 20, 36] {
        let text = radix(&value, r);
        assert_eq!(BigInt::parse_radix(&text, r), Ok(value.clone()), "radix {r}");
    }
}
