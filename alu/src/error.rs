//! Calculation failures.  Every failure is reported to the caller as
//! a value; a failing call produces no trace at all.

use std::error::Error;
use std::fmt::{self, Display, Formatter};

use base::prelude::ParseBitsError;

use crate::types::MAX_REGISTER_WIDTH;

/// Why a calculation could not run.  These are deterministic: the
/// same inputs always fail the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculationError {
    /// An operand was not a well-formed binary string.
    InvalidOperand(ParseBitsError),
    /// An operand's width disagrees with the configured register
    /// width.  Operands are never silently padded or truncated.
    WidthMismatch { expected: u32, actual: u32 },
    /// The requested register width itself is unusable.
    UnsupportedWidth(u32),
    /// The divisor decodes to zero.
    DivisionByZero,
}

impl Error for CalculationError {}

impl Display for CalculationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            CalculationError::InvalidOperand(e) => {
                write!(f, "invalid operand: {e}")
            }
            CalculationError::WidthMismatch { expected, actual } => write!(
                f,
                "operand is {actual} bits wide but the registers are configured for {expected}"
            ),
            CalculationError::UnsupportedWidth(width) => write!(
                f,
                "register width {width} is not supported (expected 1 to {MAX_REGISTER_WIDTH})"
            ),
            CalculationError::DivisionByZero => f.write_str("division by zero"),
        }
    }
}

impl From<ParseBitsError> for CalculationError {
    fn from(e: ParseBitsError) -> CalculationError {
        CalculationError::InvalidOperand(e)
    }
}
