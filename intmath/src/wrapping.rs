//! This module implements wrap-around arithmetic on fixed-width
//! two's-complement signed integers, plus the error and operand types
//! which go with it.
use std::fmt::Debug;

pub mod error;
pub mod operand;
pub(crate) mod signed;

use error::ArithmeticError;
use operand::Operand;

/// Wrap-around arithmetic for one integer width.
///
/// Results are the low-order bits of the true mathematical result,
/// as if it had been computed in a sufficiently wide two's-complement
/// register and then truncated to `BITS` bits.  Overflow is never an
/// error.  The only failures are division by zero and (for the
/// `try_*` functions) operands which are not integers of this width.
///
/// Implementations are provided for 8, 16, 32 and 64 bits (see
/// [`IntMath8`](signed::IntMath8) and friends).
pub trait IntMath {
    /// The native type holding values of this width.
    type Int: Copy + Debug + Eq + Ord + TryFrom<i128>;

    const BITS: u32;
    /// The largest representable value.
    const MAX_INT: Self::Int;
    /// The smallest representable value, `-MAX_INT - 1`.
    const MIN_INT: Self::Int;

    /// Returns `-a`, except that the negation of `MIN_INT` is
    /// `MIN_INT` itself.
    fn negate(a: Self::Int) -> Self::Int;

    /// Returns `a + b`, wrapped.
    fn add(a: Self::Int, b: Self::Int) -> Self::Int;

    /// Returns `a - b`, wrapped.  This is `add(a, negate(b))`.
    fn subtract(a: Self::Int, b: Self::Int) -> Self::Int;

    /// Returns `a * b`, wrapped.
    fn multiply(a: Self::Int, b: Self::Int) -> Self::Int;

    /// Returns `a / b` rounded towards zero.  `MIN_INT / -1`
    /// overflows to `MIN_INT`.
    fn divide(a: Self::Int, b: Self::Int) -> Result<Self::Int, ArithmeticError>;

    fn try_negate(a: &Operand) -> Result<Self::Int, ArithmeticError> {
        let a = a.to_integer::<Self::Int>()?;
        Ok(Self::negate(a))
    }

    fn try_add(a: &Operand, b: &Operand) -> Result<Self::Int, ArithmeticError> {
        let a = a.to_integer::<Self::Int>()?;
        let b = b.to_integer::<Self::Int>()?;
        Ok(Self::add(a, b))
    }

    fn try_subtract(a: &Operand, b: &Operand) -> Result<Self::Int, ArithmeticError> {
        let a = a.to_integer::<Self::Int>()?;
        let b = b.to_integer::<Self::Int>()?;
        Ok(Self::subtract(a, b))
    }

    fn try_multiply(a: &Operand, b: &Operand) -> Result<Self::Int, ArithmeticError> {
        let a = a.to_integer::<Self::Int>()?;
        let b = b.to_integer::<Self::Int>()?;
        Ok(Self::multiply(a, b))
    }

    /// Both operands are validated before the divisor is checked
    /// for zero.
    fn try_divide(a: &Operand, b: &Operand) -> Result<Self::Int, ArithmeticError> {
        let a = a.to_integer::<Self::Int>()?;
        let b = b.to_integer::<Self::Int>()?;
        Self::divide(a, b)
    }
}
