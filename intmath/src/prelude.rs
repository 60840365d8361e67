//! The prelude exports the arithmetic types, the [`IntMath`] trait
//! (which provides the operand-validating `try_*` functions) and the
//! error and operand types.
pub use super::wrapping::error::*;
pub use super::wrapping::operand::*;
pub use super::wrapping::signed::*;
pub use super::wrapping::IntMath;
pub use super::{Int, NativeIntMath, MAX_INT, MIN_INT};
