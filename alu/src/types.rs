//! The shared vocabulary of the arithmetic unit: operand and
//! operation descriptions, and the structured trace records emitted
//! by the register algorithms.
//!
//! Trace entries are deliberately language-neutral.  A register
//! snapshot names the register values and the step that produced
//! them; whatever presents the trace (a command-line table, a web
//! form) chooses the wording.

use std::fmt::{self, Display, Formatter};

use serde::Serialize;

use base::prelude::*;

use crate::error::CalculationError;

/// The widest operand register the algorithms accept.  The A:Q
/// product pair of a multiplication is up to twice this wide, which
/// is what [`BitVector::MAX_WIDTH`] allows for.
pub const MAX_REGISTER_WIDTH: u32 = 64;

/// How the bit pattern of an operand is to be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Interpretation {
    /// Two's-complement: a set top bit makes the value negative.
    Signed,
    /// Plain binary.
    Unsigned,
}

impl Display for Interpretation {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        f.write_str(match self {
            Interpretation::Signed => "signed",
            Interpretation::Unsigned => "unsigned",
        })
    }
}

/// The operations the unit can perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Display for Operation {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        f.write_str(match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
        })
    }
}

/// An operand: a bit pattern together with how to read it.  The
/// decimal value is always derived from the bits, never stored, so
/// the two cannot disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Operand {
    pub bits: BitVector,
    pub interpretation: Interpretation,
}

impl Operand {
    pub fn new(bits: BitVector, interpretation: Interpretation) -> Operand {
        Operand {
            bits,
            interpretation,
        }
    }

    /// Parses a '0'/'1' string into an operand.  The string's length
    /// becomes the operand width.
    pub fn from_binary(
        s: &str,
        interpretation: Interpretation,
    ) -> Result<Operand, CalculationError> {
        let bits = s
            .parse::<BitVector>()
            .map_err(CalculationError::InvalidOperand)?;
        Ok(Operand {
            bits,
            interpretation,
        })
    }

    /// The decimal reading of the operand.
    pub fn decimal(&self) -> i128 {
        decode(&self.bits, self.interpretation == Interpretation::Signed)
    }
}

/// What a single trace step did to the registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Action {
    /// The registers as loaded, before the first iteration.
    Initial,
    /// A := A + M.
    AddMultiplicand,
    /// A := A + twos_complement(M).
    SubtractMultiplicand,
    /// Multiplier bit pair 00 or 11: the accumulator is untouched.
    NoChange,
    /// Arithmetic right shift of the A:Q pair, sign of A preserved.
    ShiftRight,
    /// Left shift of A:Q followed by the trial subtraction A := A - M.
    TrialSubtract,
    /// The trial went negative: the divisor was added back and the
    /// new quotient bit is 0.
    Restore,
    /// The trial stayed non-negative: the new quotient bit is 1.
    SetQuotientBit,
    /// Single-step decimal addition re-encoded into the register.
    Add,
    /// Single-step decimal subtraction re-encoded into the register.
    Subtract,
}

/// One snapshot of register state.  Registers a particular algorithm
/// does not have are `None`: the multiplier fills `q_guard`, the
/// divider does not, and the single-step add/subtract path records
/// only the result register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TraceEntry {
    pub action: Action,
    pub a: BitVector,
    pub q: Option<BitVector>,
    pub q_guard: Option<bool>,
    pub m: Option<BitVector>,
    pub count: Option<u32>,
}

/// The normalised result of a dispatched operation.  Division fills
/// the remainder fields; the other operations leave them `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationOutcome {
    pub result: BitVector,
    pub result_decimal: i128,
    pub remainder: Option<BitVector>,
    pub remainder_decimal: Option<i128>,
    pub trace: Vec<TraceEntry>,
}
