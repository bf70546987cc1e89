//! Conversions between decimal values and fixed-width two's-complement
//! words, together with the addition and complement primitives the
//! register algorithms are built from.
//!
//! Addition here has register semantics: the result has the width of
//! the wider operand and any carry out of the most-significant
//! position is discarded.  That wraparound is the intended behaviour
//! of fixed-width register arithmetic, not an accident; callers who
//! want to reject out-of-range values use [`checked_encode`] before
//! the value ever reaches a register.

use crate::bitvector::BitVector;
use crate::error::RangeError;

#[cfg(test)]
mod tests;

/// Adds two words.  Operands are right-aligned: the shorter one is
/// zero-padded to the width of the longer before the addition, and
/// the carry out of the top bit (if any) is lost.
pub fn add(a: BitVector, b: BitVector) -> BitVector {
    let width = a.width().max(b.width());
    let a = a.pad_to(width);
    let b = b.pad_to(width);
    BitVector::from_unsigned(a.to_unsigned().wrapping_add(b.to_unsigned()), width)
}

/// Flips every bit.
pub fn ones_complement(a: BitVector) -> BitVector {
    !a
}

/// Negates a word under two's complement: invert, then add one.  The
/// minimum representable negative value maps to itself.
pub fn twos_complement(a: BitVector) -> BitVector {
    add(ones_complement(a), BitVector::one(a.width()))
}

/// Reads a word as a decimal integer.  An unsigned reading yields the
/// plain binary value; a signed reading subtracts `2^width` when the
/// most-significant bit is set.
pub fn decode(bits: &BitVector, signed: bool) -> i128 {
    if signed {
        bits.to_signed()
    } else {
        i128::try_from(bits.to_unsigned())
            .expect("unsigned words wider than 127 bits should never be decoded")
    }
}

/// Writes a decimal value into a word of the given width.  A negative
/// value is first wrapped to `2^width + value` (two's complement); a
/// value too wide for the word is truncated to its low `width` bits.
/// Use [`checked_encode`] where truncation must be an error instead.
pub fn encode(value: i128, width: u32) -> BitVector {
    BitVector::from_unsigned(value as u128, width)
}

/// As [`encode`], but fails instead of wrapping when `value` lies
/// outside `[-2^(width-1), 2^width - 1]` (the union of the signed and
/// unsigned ranges of the word).
pub fn checked_encode(value: i128, width: u32) -> Result<BitVector, RangeError> {
    if value < 0 {
        // The signed range allows magnitudes up to 2^(width-1).
        if value.unsigned_abs() > 1u128 << (width - 1) {
            return Err(RangeError::TooSmall);
        }
    } else if width < 127 && value > (1i128 << width) - 1 {
        return Err(RangeError::TooLarge);
    }
    Ok(encode(value, width))
}
