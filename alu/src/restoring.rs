//! Restoring binary division over a simulated register machine.
//!
//! Unlike the multiplier, the divider takes its operands as
//! two's-complement bit patterns: a set sign bit selects the
//! magnitude conversion at load time, whatever interpretation the
//! caller had in mind.  The asymmetry with the multiplier's
//! decimal-magnitude inputs is deliberate; unifying the two would
//! change the traces.

use serde::Serialize;
use tracing::{event, Level};

use base::prelude::*;

use crate::error::CalculationError;
use crate::types::{Action, TraceEntry, MAX_REGISTER_WIDTH};


/// The registers of the divider: remainder accumulator A, the
/// dividend-then-quotient register Q, the divisor M, and the
/// remaining iteration count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DividerState {
    a: BitVector,
    q: BitVector,
    m: BitVector,
    count: u32,
}

impl DividerState {
    fn snapshot(&self, action: Action) -> TraceEntry {
        TraceEntry {
            action,
            a: self.a,
            q: Some(self.q),
            q_guard: None,
            m: Some(self.m),
            count: Some(self.count),
        }
    }

    /// One full iteration: shift A:Q left one place, subtract the
    /// divisor on trial, then either confirm the quotient bit or
    /// restore the accumulator.
    fn step(self) -> (DividerState, [TraceEntry; 2]) {
        // The bit leaving the top of Q enters the bottom of A; the
        // vacated low bit of Q is zero until the decision below.
        let a = self.a.shl1().with_bit(0, self.q.msb());
        let q = self.q.shl1();
        let trial = DividerState {
            a: add(a, twos_complement(self.m)),
            q,
            ..self
        };
        let after_subtract = trial.snapshot(Action::TrialSubtract);

        let (a, q, action) = if trial.a.msb() {
            // Negative: undo the subtraction; the quotient bit stays 0.
            (add(trial.a, self.m), q, Action::Restore)
        } else {
            (trial.a, q.with_bit(0, true), Action::SetQuotientBit)
        };
        let done = DividerState {
            a,
            q,
            m: self.m,
            count: self.count - 1,
        };
        let after_decision = done.snapshot(action);
        (done, [after_subtract, after_decision])
    }
}

/// The result of a division: quotient and remainder as bit patterns
/// and decimal readings, plus the step-by-step trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Division {
    pub quotient: BitVector,
    pub quotient_value: i128,
    pub remainder: BitVector,
    pub remainder_value: i128,
    pub trace: Vec<TraceEntry>,
}

/// Divides `dividend` by `divisor`, both given as equal-width
/// two's-complement bit patterns.  The quotient is negated when the
/// operand signs differ; the remainder takes the dividend's sign.  A
/// zero divisor fails before the loop runs, producing no trace.
pub fn divide(dividend: BitVector, divisor: BitVector) -> Result<Division, CalculationError> {
    let width = dividend.width();
    if width > MAX_REGISTER_WIDTH {
        return Err(CalculationError::UnsupportedWidth(width));
    }
    if divisor.width() != width {
        return Err(CalculationError::WidthMismatch {
            expected: width,
            actual: divisor.width(),
        });
    }
    if divisor.is_zero() {
        return Err(CalculationError::DivisionByZero);
    }
    event!(
        Level::DEBUG,
        "dividing {} by {} in {}-bit registers",
        dividend,
        divisor,
        width
    );

    let dividend_negative = dividend.msb();
    let divisor_negative = divisor.msb();
    let q = if dividend_negative {
        twos_complement(dividend)
    } else {
        dividend
    };
    let m = if divisor_negative {
        twos_complement(divisor)
    } else {
        divisor
    };

    let mut state = DividerState {
        a: BitVector::zero(width),
        q,
        m,
        count: width,
    };
    let mut trace = Vec::with_capacity(2 * width as usize + 1);
    trace.push(state.snapshot(Action::Initial));
    while state.count > 0 {
        let (next, entries) = state.step();
        trace.extend(entries);
        state = next;
    }

    let mut quotient = state.q;
    let mut remainder = state.a;
    if dividend_negative != divisor_negative {
        quotient = twos_complement(quotient);
    }
    if dividend_negative {
        remainder = twos_complement(remainder);
    }
    Ok(Division {
        quotient,
        quotient_value: decode(&quotient, true),
        remainder,
        remainder_value: decode(&remainder, true),
        trace,
    })
}
