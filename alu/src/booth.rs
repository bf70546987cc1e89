//! Booth's multiplication algorithm over a simulated register
//! machine.
//!
//! This is the magnitude-based variant: both factors are loaded as
//! absolute values and the sign of the product is forced after the
//! loop when exactly one factor was negative.  The variant must be
//! preserved as-is for compatibility with existing traces; a fully
//! general signed Booth multiplier would produce different register
//! contents step for step.

use serde::Serialize;
use tracing::{event, Level};

use base::prelude::*;

use crate::error::CalculationError;
use crate::types::{Action, TraceEntry, MAX_REGISTER_WIDTH};


/// The registers of the multiplier: accumulator A, multiplier Q, the
/// guard bit Q₋₁ examined together with the low bit of Q, the
/// multiplicand M, and the remaining iteration count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BoothState {
    a: BitVector,
    q: BitVector,
    q_guard: bool,
    m: BitVector,
    count: u32,
}

impl BoothState {
    fn initial(multiplicand: BitVector, multiplier: BitVector, width: u32) -> BoothState {
        BoothState {
            a: BitVector::zero(width),
            q: multiplier,
            q_guard: false,
            m: multiplicand,
            count: width,
        }
    }

    fn snapshot(&self, action: Action) -> TraceEntry {
        TraceEntry {
            action,
            a: self.a,
            q: Some(self.q),
            q_guard: Some(self.q_guard),
            m: Some(self.m),
            count: Some(self.count),
        }
    }

    /// One full iteration: the add/subtract decision on (Q₀, Q₋₁),
    /// then the arithmetic right shift of the A:Q pair.
    fn step(self) -> (BoothState, [TraceEntry; 2]) {
        let (a, action) = match (self.q.lsb(), self.q_guard) {
            (true, false) => (
                add(self.a, twos_complement(self.m)),
                Action::SubtractMultiplicand,
            ),
            (false, true) => (add(self.a, self.m), Action::AddMultiplicand),
            _ => (self.a, Action::NoChange),
        };
        let decided = BoothState { a, ..self };
        let before_shift = decided.snapshot(action);

        // Q₋₁ takes the retiring low bit of Q; A:Q then shifts right
        // one place with the sign of A preserved and the bit falling
        // out of A landing in the top of Q.
        let width = decided.q.width();
        let shifted = BoothState {
            a: decided.a.arithmetic_shr1(),
            q: decided
                .q
                .logical_shr1()
                .with_bit(width - 1, decided.a.lsb()),
            q_guard: decided.q.lsb(),
            m: decided.m,
            count: decided.count - 1,
        };
        let after_shift = shifted.snapshot(Action::ShiftRight);
        (shifted, [before_shift, after_shift])
    }
}

/// The product of a multiplication: the 2×width-bit A:Q register
/// pair, its decimal reading, and the step-by-step trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    pub bits: BitVector,
    pub value: i128,
    pub trace: Vec<TraceEntry>,
}

/// Multiplies two decimal factors in `width`-bit registers.  The
/// trace holds the initial register load plus two entries per
/// iteration: the state after the add/subtract decision and the state
/// after the shift.
pub fn multiply(
    multiplicand: i128,
    multiplier: i128,
    width: u32,
) -> Result<Product, CalculationError> {
    if width == 0 || width > MAX_REGISTER_WIDTH {
        return Err(CalculationError::UnsupportedWidth(width));
    }
    event!(
        Level::DEBUG,
        "multiplying {} by {} in {}-bit registers",
        multiplicand,
        multiplier,
        width
    );

    let m = BitVector::from_unsigned(multiplicand.unsigned_abs(), width);
    let q = BitVector::from_unsigned(multiplier.unsigned_abs(), width);
    let mut state = BoothState::initial(m, q, width);
    let mut trace = Vec::with_capacity(2 * width as usize + 1);
    trace.push(state.snapshot(Action::Initial));
    while state.count > 0 {
        let (next, entries) = state.step();
        trace.extend(entries);
        state = next;
    }

    let bits = state.a.concat(state.q);
    let mut value = decode(&bits, true);
    // The loop ran on magnitudes; exactly one negative factor forces
    // the product negative.
    if (multiplicand < 0) != (multiplier < 0) {
        value = -value.abs();
    }
    Ok(Product { bits, value, trace })
}
