//! The `intmath` crate provides integer arithmetic which wraps around
//! on overflow, in the way a fixed-width two's-complement register
//! does, rather than failing or widening.  That behaviour is what
//! you want for things like sequence numbers and hash calculations.
//!
//! The arithmetic for each width lives in a zero-sized type
//! implementing [`IntMath`] ([`IntMath8`],
//! [`IntMath16`], [`IntMath32`] and [`IntMath64`]).  The free
//! functions at the top level of the crate use the width selected at
//! build time: 64 bits, or 32 bits when the `width-32` feature is
//! enabled.
//!
//! ```
//! use intmath::{add, multiply, MAX_INT, MIN_INT};
//!
//! assert_eq!(add(MAX_INT, 1), MIN_INT);
//! assert_eq!(multiply(MAX_INT, MAX_INT), 1);
//! ```

mod wrapping;

pub mod prelude;
pub use crate::wrapping::error::ArithmeticError;
pub use crate::wrapping::operand::{Operand, OperandKind};
pub use crate::wrapping::signed::*;
pub use crate::wrapping::IntMath;

/// The arithmetic used by the top-level functions of this crate.
#[cfg(not(feature = "width-32"))]
pub type NativeIntMath = IntMath64;
#[cfg(feature = "width-32")]
pub type NativeIntMath = IntMath32;

/// The integer type used by the top-level functions of this crate.
#[cfg(not(feature = "width-32"))]
pub type Int = i64;
#[cfg(feature = "width-32")]
pub type Int = i32;

/// The largest supported integer.
pub const MAX_INT: Int = NativeIntMath::MAX_INT;

/// The smallest supported integer.
pub const MIN_INT: Int = NativeIntMath::MIN_INT;

/// Returns the negation of `a`.  `negate(MIN_INT)` is `MIN_INT`.
pub fn negate(a: Int) -> Int {
    NativeIntMath::negate(a)
}

/// Returns `a + b`, wrapping around on overflow.
pub fn add(a: Int, b: Int) -> Int {
    NativeIntMath::add(a, b)
}

/// Returns `a - b`, wrapping around on overflow.
pub fn subtract(a: Int, b: Int) -> Int {
    NativeIntMath::subtract(a, b)
}

/// Returns `a * b`, wrapping around on overflow.
pub fn multiply(a: Int, b: Int) -> Int {
    NativeIntMath::multiply(a, b)
}

/// Returns `a / b`, rounded towards zero.  `divide(MIN_INT, -1)` is
/// `MIN_INT`.
///
/// # Errors
///
/// [`ArithmeticError::DivisionByZero`] if `b` is zero.
pub fn divide(a: Int, b: Int) -> Result<Int, ArithmeticError> {
    NativeIntMath::divide(a, b)
}

#[test]
fn test_boundary_wrap_regressions() {
    assert_eq!(negate(MIN_INT), MIN_INT);
    assert_eq!(add(MAX_INT, 1), MIN_INT);
    assert_eq!(multiply(MAX_INT, MAX_INT), 1);
    assert_eq!(divide(MIN_INT, -1), Ok(MIN_INT));
    assert_eq!(divide(1, 0), Err(ArithmeticError::DivisionByZero));
}

#[test]
fn test_native_width() {
    assert_eq!(MIN_INT, -MAX_INT - 1);
    assert_eq!(Int::BITS, <NativeIntMath as IntMath>::BITS);
    assert_eq!(subtract(MIN_INT, 1), MAX_INT);
}
