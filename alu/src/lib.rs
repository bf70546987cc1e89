//! This crate emulates the arithmetic unit of a simple register
//! machine: Booth multiplication and restoring division as iterative
//! register-transfer algorithms, plus a dispatcher which also covers
//! addition and subtraction.  Every algorithm emits a structured
//! trace of its register states, one snapshot per defined step.
#![crate_name = "alu"]

mod booth;
mod calculator;
mod error;
mod restoring;
mod types;

pub use booth::{multiply, Product};
pub use calculator::calculate;
pub use error::CalculationError;
pub use restoring::{divide, Division};
pub use types::*;
