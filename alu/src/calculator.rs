//! Dispatches a requested operation to the register algorithms and
//! normalises the results into a single outcome shape.

use tracing::{event, Level};

use base::prelude::*;

use crate::booth;
use crate::error::CalculationError;
use crate::restoring;
use crate::types::{
    Action, Interpretation, Operand, Operation, OperationOutcome, TraceEntry, MAX_REGISTER_WIDTH,
};


/// Runs one operation on two `width`-bit operands.  Every call is an
/// independent, deterministic function of its inputs; identical calls
/// yield identical outcomes, traces included.
///
/// Addition and subtraction report the true integer result in
/// `result_decimal` while the binary result wraps to the register
/// width; the two disagree exactly when the operation overflowed the
/// register.
pub fn calculate(
    a: BitVector,
    b: BitVector,
    operation: Operation,
    interpretation: Interpretation,
    width: u32,
) -> Result<OperationOutcome, CalculationError> {
    if width == 0 || width > MAX_REGISTER_WIDTH {
        return Err(CalculationError::UnsupportedWidth(width));
    }
    for operand in [&a, &b] {
        if operand.width() != width {
            return Err(CalculationError::WidthMismatch {
                expected: width,
                actual: operand.width(),
            });
        }
    }
    let lhs = Operand::new(a, interpretation);
    let rhs = Operand::new(b, interpretation);
    event!(
        Level::DEBUG,
        "dispatching {} {} {} at width {}",
        lhs.decimal(),
        operation,
        rhs.decimal(),
        width
    );

    match operation {
        Operation::Add | Operation::Subtract => {
            let (value, action) = match operation {
                Operation::Add => (lhs.decimal() + rhs.decimal(), Action::Add),
                _ => (lhs.decimal() - rhs.decimal(), Action::Subtract),
            };
            let result = encode(value, width);
            let trace = vec![TraceEntry {
                action,
                a: result,
                q: None,
                q_guard: None,
                m: None,
                count: None,
            }];
            Ok(OperationOutcome {
                result,
                result_decimal: value,
                remainder: None,
                remainder_decimal: None,
                trace,
            })
        }
        Operation::Multiply => {
            let product = booth::multiply(lhs.decimal(), rhs.decimal(), width)?;
            Ok(OperationOutcome {
                result: product.bits,
                result_decimal: product.value,
                remainder: None,
                remainder_decimal: None,
                trace: product.trace,
            })
        }
        Operation::Divide => {
            // Checked on the decoded value so the divider never runs
            // and no trace is produced.
            if rhs.decimal() == 0 {
                return Err(CalculationError::DivisionByZero);
            }
            let division = restoring::divide(a, b)?;
            Ok(OperationOutcome {
                result: division.quotient,
                result_decimal: division.quotient_value,
                remainder: Some(division.remainder),
                remainder_decimal: Some(division.remainder_value),
                trace: division.trace,
            })
        }
    }
}
