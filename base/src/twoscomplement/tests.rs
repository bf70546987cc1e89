use test_strategy::proptest;

use super::{add, checked_encode, decode, encode, ones_complement, twos_complement};
use crate::bitvector::BitVector;
use crate::error::RangeError;

#[test]
fn test_add_basic() {
    assert_eq!(add(crate::bits!("0101"), crate::bits!("0011")), crate::bits!("1000"));
    assert_eq!(add(crate::bits!("0001"), crate::bits!("0001")), crate::bits!("0010"));
    assert_eq!(
        add(BitVector::zero(4), crate::bits!("1010")),
        crate::bits!("1010")
    );
}

#[test]
fn test_add_discards_carry_out() {
    assert_eq!(add(crate::bits!("1111"), crate::bits!("0001")), crate::bits!("0000"));
    assert_eq!(add(crate::bits!("1010"), crate::bits!("0110")), crate::bits!("0000"));
    assert_eq!(add(crate::bits!("1111"), crate::bits!("1111")), crate::bits!("1110"));
}

#[test]
fn test_add_pads_shorter_operand() {
    // The shorter operand is right-aligned against the longer.
    assert_eq!(add(crate::bits!("1"), crate::bits!("0011")), crate::bits!("0100"));
    assert_eq!(add(crate::bits!("0011"), crate::bits!("1")), crate::bits!("0100"));
    assert_eq!(add(crate::bits!("1"), crate::bits!("0011")).width(), 4);
}

#[test]
fn test_add_commutes_exhaustively() {
    for a in 0..16_u128 {
        for b in 0..16_u128 {
            let left = BitVector::from_unsigned(a, 4);
            let right = BitVector::from_unsigned(b, 4);
            assert_eq!(
                add(left, right),
                add(right, left),
                "addition of {a} and {b} should commute"
            );
        }
    }
}

#[test]
fn test_ones_complement() {
    assert_eq!(ones_complement(crate::bits!("1010")), crate::bits!("0101"));
    assert_eq!(ones_complement(crate::bits!("0000")), crate::bits!("1111"));
}

#[test]
fn test_twos_complement() {
    assert_eq!(twos_complement(crate::bits!("0011")), crate::bits!("1101"));
    assert_eq!(twos_complement(crate::bits!("0001")), crate::bits!("1111"));
    assert_eq!(twos_complement(crate::bits!("0000")), crate::bits!("0000"));
}

#[test]
fn test_twos_complement_minimum_negative_maps_to_itself() {
    // -8 has no 4-bit positive counterpart, so negation wraps back to
    // the same bit pattern.
    assert_eq!(twos_complement(crate::bits!("1000")), crate::bits!("1000"));
}

#[test]
fn test_double_negation_is_identity() {
    for raw in 0..16_u128 {
        let v = BitVector::from_unsigned(raw, 4);
        assert_eq!(
            twos_complement(twos_complement(v)),
            v,
            "double negation of {v} should be the identity"
        );
    }
}

#[test]
fn test_decode() {
    assert_eq!(decode(&crate::bits!("1111"), false), 15);
    assert_eq!(decode(&crate::bits!("1111"), true), -1);
    assert_eq!(decode(&crate::bits!("1000"), true), -8);
    assert_eq!(decode(&crate::bits!("1000"), false), 8);
    assert_eq!(decode(&crate::bits!("0111"), true), 7);
    assert_eq!(decode(&BitVector::zero(8), true), 0);
}

#[test]
fn test_encode() {
    assert_eq!(encode(5, 4), crate::bits!("0101"));
    assert_eq!(encode(-4, 4), crate::bits!("1100"));
    assert_eq!(encode(-1, 4), crate::bits!("1111"));
    assert_eq!(encode(0, 4), crate::bits!("0000"));
}

#[test]
fn test_encode_wraps_out_of_range_values() {
    // Register semantics: out-of-range values silently wrap.
    assert_eq!(encode(16, 4), crate::bits!("0000"));
    assert_eq!(encode(17, 4), crate::bits!("0001"));
    assert_eq!(encode(-9, 4), crate::bits!("0111"));
}

#[test]
fn test_signed_round_trip_exhaustive() {
    for width in 1..=8_u32 {
        let half = 1i128 << (width - 1);
        for value in -half..half {
            let bits = encode(value, width);
            assert_eq!(
                decode(&bits, true),
                value,
                "round trip failed for {value} at width {width}"
            );
        }
    }
}

#[test]
fn test_unsigned_round_trip_exhaustive() {
    for width in 1..=8_u32 {
        for value in 0..(1i128 << width) {
            let bits = encode(value, width);
            assert_eq!(
                decode(&bits, false),
                value,
                "round trip failed for {value} at width {width}"
            );
        }
    }
}

#[test]
fn test_checked_encode() {
    assert_eq!(checked_encode(-8, 4), Ok(crate::bits!("1000")));
    assert_eq!(checked_encode(15, 4), Ok(crate::bits!("1111")));
    assert_eq!(checked_encode(0, 4), Ok(crate::bits!("0000")));

    assert_eq!(checked_encode(-9, 4), Err(RangeError::TooSmall));
    assert_eq!(checked_encode(16, 4), Err(RangeError::TooLarge));
    assert_eq!(checked_encode(2, 1), Err(RangeError::TooLarge));
    assert_eq!(checked_encode(-2, 1), Err(RangeError::TooSmall));
}

#[proptest]
fn signed_round_trip(
    #[strategy(1u32..=64)] width: u32,
    #[strategy(-(1i128 << (#width - 1))..(1i128 << (#width - 1)))] value: i128,
) {
    assert_eq!(decode(&encode(value, width), true), value);
}

#[proptest]
fn unsigned_round_trip(
    #[strategy(1u32..=64)] width: u32,
    #[strategy(0i128..(1i128 << #width))] value: i128,
) {
    assert_eq!(decode(&encode(value, width), false), value);
}

#[proptest]
fn add_commutes(#[strategy(1u32..=64)] width: u32, a: u128, b: u128) {
    let a = BitVector::from_unsigned(a, width);
    let b = BitVector::from_unsigned(b, width);
    assert_eq!(add(a, b), add(b, a));
}

#[proptest]
fn double_negation_is_identity(#[strategy(1u32..=64)] width: u32, raw: u128) {
    let v = BitVector::from_unsigned(raw, width);
    assert_eq!(twos_complement(twos_complement(v)), v);
}
