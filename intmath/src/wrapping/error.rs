//! Basic error reporting.

use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

use serde::Serialize;

use super::operand::OperandKind;

/// Represents a failure of one of the arithmetic operations.  Note
/// that overflow is never a failure; results silently wrap around.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ArithmeticError {
    /// An operand was not an integer of the selected width.  The
    /// payload describes what it was instead.
    InvalidArgument(OperandKind),
    DivisionByZero,
}

impl Error for ArithmeticError {}

impl Display for ArithmeticError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            ArithmeticError::InvalidArgument(kind) => {
                write!(f, "Expected an integer, but got \"{kind}\"")
            }
            ArithmeticError::DivisionByZero => f.write_str("Division by zero."),
        }
    }
}
