use tracing::{event, Level};

use super::error::ArithmeticError;
use super::IntMath;

#[cfg(test)]
mod tests32;
#[cfg(test)]
mod tests8;

/// This macro implements wrap-around arithmetic for one width.
/// `SelfT` is the (zero-sized) type we are defining, `IntT` is the
/// native signed type of that width and `BITS` is its width in bits.
///
/// None of the native operators used here can overflow, so the
/// results do not depend on whether the build has overflow checks
/// enabled.  Where the native result would overflow, the fallback
/// paths work on the bits directly, using only operators of the same
/// width.
macro_rules! wrapping_int_math_impl {
    ($SelfT:ident, $IntT:ty, $BITS:expr) => {
        const _: () = assert!(<$IntT>::MIN == -<$IntT>::MAX - 1);
        const _: () = assert!(<$IntT>::BITS == $BITS);

        impl $SelfT {
            pub const BITS: u32 = $BITS;
            pub const MAX_INT: $IntT = <$IntT>::MAX;
            pub const MIN_INT: $IntT = <$IntT>::MIN;

            /// Returns the negation of `a`.
            ///
            /// The two's-complement range is not symmetric, so
            /// negating `MIN_INT` overflows back to `MIN_INT`.  For
            /// all `a`, `negate(a)` equals `(!a) + 1` (wrapped).
            pub fn negate(a: $IntT) -> $IntT {
                if a == Self::MIN_INT {
                    return a;
                }
                -a
            }

            /// Returns the sum of `a` and `b`.
            ///
            /// If overflow occurs the sign of the result may differ
            /// from the sign of the mathematical sum.
            pub fn add(a: $IntT, b: $IntT) -> $IntT {
                if b > 0 && a <= Self::MAX_INT - b {
                    return a + b;
                }
                if b < 0 && a >= Self::MIN_INT - b {
                    return a + b;
                }
                if b != 0 {
                    event!(
                        Level::TRACE,
                        "{} + {} overflows {} bits, using carry propagation",
                        a,
                        b,
                        $BITS
                    );
                }

                let mut a = a;
                let mut b = b;
                while b != 0 {
                    // The carry is the set bits common to both addends.
                    let carry: $IntT = a & b;
                    a ^= b;
                    b = carry << 1;
                }
                a
            }

            /// Returns the difference of `a` and `b`.  Subtracting
            /// from zero is the same as negation.
            pub fn subtract(a: $IntT, b: $IntT) -> $IntT {
                Self::add(a, Self::negate(b))
            }

            /// Returns the product of `a` and `b`.
            pub fn multiply(a: $IntT, b: $IntT) -> $IntT {
                // This has to happen before the division below.
                if a == 0 || b == 0 {
                    return 0;
                }

                // MIN_INT times an odd number keeps only the sign
                // bit; times an even number it shifts out entirely.
                if a == Self::MIN_INT {
                    return if b & 1 != 0 { a } else { 0 };
                }
                if b == Self::MIN_INT {
                    return if a & 1 != 0 { b } else { 0 };
                }

                let bound: $IntT = if (a < 0) == (b < 0) {
                    Self::MAX_INT
                } else {
                    Self::MIN_INT
                };
                let fits = match bound.checked_div(a) {
                    Some(limit) if b > 0 => b <= limit,
                    Some(limit) => b >= limit,
                    // MIN_INT / -1: every positive multiplier fits.
                    None => true,
                };
                if fits {
                    return a * b;
                }
                event!(
                    Level::TRACE,
                    "{} * {} overflows {} bits, using shift-and-add",
                    a,
                    b,
                    $BITS
                );

                // Multiply the magnitudes and fix up the sign
                // afterwards.  Neither operand is MIN_INT here, so
                // negation gives a positive value.
                let mut negative = false;
                let mut multiplicand = a;
                let mut multiplier = b;
                if multiplicand < 0 {
                    negative = !negative;
                    multiplicand = Self::negate(multiplicand);
                }
                if multiplier < 0 {
                    negative = !negative;
                    multiplier = Self::negate(multiplier);
                }

                let mut product: $IntT = 0;
                while multiplicand != 0 {
                    if multiplicand & 1 != 0 {
                        product = Self::add(product, multiplier);
                    }
                    multiplicand >>= 1;
                    multiplier <<= 1;
                }

                if negative {
                    Self::negate(product)
                } else {
                    product
                }
            }

            /// Returns the quotient of `a` and `b`, rounded towards
            /// zero.
            ///
            /// The one case which overflows is `MIN_INT / -1`; the
            /// result is then `MIN_INT`.  A zero divisor is an error.
            pub fn divide(a: $IntT, b: $IntT) -> Result<$IntT, ArithmeticError> {
                if b == 0 {
                    event!(Level::DEBUG, "refusing to divide {} by zero", a);
                    return Err(ArithmeticError::DivisionByZero);
                }
                if a == Self::MIN_INT && b == -1 {
                    return Ok(a);
                }
                Ok((a - a % b) / b)
            }
        }

        impl IntMath for $SelfT {
            type Int = $IntT;

            const BITS: u32 = $BITS;
            const MAX_INT: $IntT = <$IntT>::MAX;
            const MIN_INT: $IntT = <$IntT>::MIN;

            fn negate(a: $IntT) -> $IntT {
                <$SelfT>::negate(a)
            }

            fn add(a: $IntT, b: $IntT) -> $IntT {
                <$SelfT>::add(a, b)
            }

            fn subtract(a: $IntT, b: $IntT) -> $IntT {
                <$SelfT>::subtract(a, b)
            }

            fn multiply(a: $IntT, b: $IntT) -> $IntT {
                <$SelfT>::multiply(a, b)
            }

            fn divide(a: $IntT, b: $IntT) -> Result<$IntT, ArithmeticError> {
                <$SelfT>::divide(a, b)
            }
        }
    };
}

////////////////////////////////////////////////////////////////////////
// IntMath8
////////////////////////////////////////////////////////////////////////

/// Wrap-around arithmetic on 8-bit values.  This is mostly useful
/// because its whole domain can be tested exhaustively.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct IntMath8;

wrapping_int_math_impl!(IntMath8, i8, 8);

////////////////////////////////////////////////////////////////////////
// IntMath16
////////////////////////////////////////////////////////////////////////

/// Wrap-around arithmetic on 16-bit values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct IntMath16;

wrapping_int_math_impl!(IntMath16, i16, 16);

////////////////////////////////////////////////////////////////////////
// IntMath32
////////////////////////////////////////////////////////////////////////

/// Wrap-around arithmetic on 32-bit values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct IntMath32;

wrapping_int_math_impl!(IntMath32, i32, 32);

////////////////////////////////////////////////////////////////////////
// IntMath64
////////////////////////////////////////////////////////////////////////

/// Wrap-around arithmetic on 64-bit values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct IntMath64;

wrapping_int_math_impl!(IntMath64, i64, 64);
