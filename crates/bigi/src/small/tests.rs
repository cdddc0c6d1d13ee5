use super::*;
use crate::Sign;
use pretty_assertions::assert_eq;

#[test]
fn zero_entry_has_zero_sign() {
    let zero = small(0);
    assert!(zero.is_zero());
    assert_eq!(zero.sign(), Sign::Zero);
}

#[test]
fn entries_match_their_index() {
    for n in 1..=SMALL_MAX {
        let value = small(n);
        assert_eq!(value, &BigInt::from(n));
        assert_eq!(value.sign(), Sign::Positive);
    }
    assert_eq!(small(36).digits(), &[6, 3]);
}

#[test]
fn entries_are_shared() {
    assert!(std::ptr::eq(small(7), small(7)));
    assert!(std::ptr::eq(small(7), BigInt::small(7).unwrap_or(&BigInt::zero())));
}

#[test]
fn public_lookup_is_bounded() {
    assert_eq!(BigInt::small(36), Some(&BigInt::from(36)));
    assert_eq!(BigInt::small(37), None);
    assert_eq!(BigInt::small(u32::MAX), None);
}

#[test]
fn table_is_readable_across_threads() {
    let handles: Vec<_> = (0..4u8)
        .map(|t| std::thread::spawn(move || small(t * 9).to_string()))
        .collect();
    let values: Vec<String> = handles
        .into_iter()
        .map(|h| h.join().unwrap_or_default())
        .collect();
    assert_eq!(values, vec!["0", "9", "18", "27"]);
}
