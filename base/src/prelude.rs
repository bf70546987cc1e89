//! The prelude exports the names which are useful in nearly every
//! user of the base crate.  Providing this prelude is the main
//! purpose of the crate.
pub use super::bitvector::BitVector;
pub use super::error::{ParseBitsError, RangeError};
pub use super::twoscomplement::{
    add, checked_encode, decode, encode, ones_complement, twos_complement,
};
pub use super::bits;
