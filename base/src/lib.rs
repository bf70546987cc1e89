//! The `base` crate defines the fixed-width binary words and the
//! two's-complement arithmetic which are useful both in the
//! arithmetic-unit simulation and in associated front-end tools.  The
//! idea is that if you want to write a front-end (an interactive form,
//! say), it would depend on the base crate but would not need to
//! depend on the simulator library itself.

mod bitvector;
mod error;

pub mod prelude;
pub mod twoscomplement;

pub use crate::bitvector::BitVector;
pub use crate::error::{ParseBitsError, RangeError};

#[macro_export]
macro_rules! bits {
    ($s:expr) => {
        $s.parse::<$crate::prelude::BitVector>()
            .expect("bit-string literal should be non-empty and contain only 0 and 1")
    };
}

#[test]
fn test_bits_macro() {
    use prelude::BitVector;
    let m: BitVector = bits!("0101");
    let n: BitVector = BitVector::from_unsigned(0b0101, 4);
    assert_eq!(m, n);
    assert_eq!(m.width(), 4);

    let wide: BitVector = bits!("10000000");
    assert_eq!(wide.width(), 8);
    assert_eq!(wide.to_unsigned(), 128);
}
