use super::super::error::ArithmeticError;
use super::IntMath8;

// Every 8-bit operand pair is checked against the standard library's
// wrapping operations, which have the same semantics.

#[test]
fn test_negate_all_values() {
    for a in i8::MIN..=i8::MAX {
        assert_eq!(
            IntMath8::negate(a),
            a.wrapping_neg(),
            "negate({}) is wrong",
            a
        );
    }
}

#[test]
fn test_add_all_pairs() {
    for a in i8::MIN..=i8::MAX {
        for b in i8::MIN..=i8::MAX {
            assert_eq!(
                IntMath8::add(a, b),
                a.wrapping_add(b),
                "add({}, {}) is wrong",
                a,
                b
            );
        }
    }
}

#[test]
fn test_subtract_all_pairs() {
    for a in i8::MIN..=i8::MAX {
        for b in i8::MIN..=i8::MAX {
            assert_eq!(
                IntMath8::subtract(a, b),
                a.wrapping_sub(b),
                "subtract({}, {}) is wrong",
                a,
                b
            );
        }
    }
}

#[test]
fn test_multiply_all_pairs() {
    for a in i8::MIN..=i8::MAX {
        for b in i8::MIN..=i8::MAX {
            assert_eq!(
                IntMath8::multiply(a, b),
                a.wrapping_mul(b),
                "multiply({}, {}) is wrong",
                a,
                b
            );
        }
    }
}

#[test]
fn test_divide_all_pairs() {
    for a in i8::MIN..=i8::MAX {
        for b in i8::MIN..=i8::MAX {
            let expected = if b == 0 {
                Err(ArithmeticError::DivisionByZero)
            } else {
                Ok(a.wrapping_div(b))
            };
            assert_eq!(
                IntMath8::divide(a, b),
                expected,
                "divide({}, {}) is wrong",
                a,
                b
            );
        }
    }
}

#[test]
fn test_negate_is_complement_plus_one() {
    for a in i8::MIN..=i8::MAX {
        assert_eq!(IntMath8::negate(a), IntMath8::add(!a, 1));
    }
}

#[test]
fn test_bounds() {
    assert_eq!(IntMath8::MAX_INT, 127);
    assert_eq!(IntMath8::MIN_INT, -128);
    assert_eq!(IntMath8::add(IntMath8::MAX_INT, 1), IntMath8::MIN_INT);
    assert_eq!(IntMath8::multiply(IntMath8::MAX_INT, 2), -2);
    assert_eq!(IntMath8::multiply(IntMath8::MAX_INT, IntMath8::MAX_INT), 1);
}
