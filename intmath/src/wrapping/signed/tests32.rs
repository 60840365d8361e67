use super::super::error::ArithmeticError;
use super::IntMath32;

const MAX: i32 = IntMath32::MAX_INT;
const MIN: i32 = IntMath32::MIN_INT;

#[test]
fn test_signed32_bounds() {
    assert_eq!(MAX, 2_147_483_647);
    assert_eq!(MIN, -2_147_483_648);
}

#[test]
fn test_negate() {
    assert_eq!(IntMath32::negate(0), 0);
    assert_eq!(IntMath32::negate(100), -100);
    assert_eq!(IntMath32::negate(-100), 100);
    assert_eq!(IntMath32::negate(MAX), -MAX);
    assert_eq!(IntMath32::negate(-MAX), MAX);
    assert_eq!(IntMath32::negate(MIN), MIN);
}

#[test]
fn test_add_wraps_around() {
    assert_eq!(IntMath32::add(MAX, 1), MIN);
    assert_eq!(IntMath32::add(MIN, -1), MAX);
    assert_eq!(IntMath32::add(MAX, MAX), -2);
    assert_eq!(IntMath32::add(MIN, MIN), 0);
}

#[test]
fn test_subtract_wraps_around() {
    assert_eq!(IntMath32::subtract(MIN, 1), MAX);
    assert_eq!(IntMath32::subtract(MAX, -1), MIN);
    assert_eq!(IntMath32::subtract(MAX, MIN), -1);
    assert_eq!(IntMath32::subtract(0, MIN), MIN);
}

#[test]
fn test_multiply_wraps_around() {
    assert_eq!(IntMath32::multiply(MAX, 2), -2);
    assert_eq!(IntMath32::multiply(2, -MAX), 2);
    assert_eq!(IntMath32::multiply(MAX, 3), MAX - 2);
    assert_eq!(IntMath32::multiply(MAX, MAX), 1);
    assert_eq!(IntMath32::multiply(MIN, 3), MIN);
    assert_eq!(IntMath32::multiply(-3, MIN), MIN);
    assert_eq!(IntMath32::multiply(MIN, 2), 0);
    assert_eq!(IntMath32::multiply(65_536, 65_536), 0);
    assert_eq!(IntMath32::multiply(-1, MAX), -MAX);
}

#[test]
fn test_divide() {
    assert_eq!(IntMath32::divide(7, 2), Ok(3));
    assert_eq!(IntMath32::divide(-7, 2), Ok(-3));
    assert_eq!(IntMath32::divide(7, -2), Ok(-3));
    assert_eq!(IntMath32::divide(-7, -2), Ok(3));
    assert_eq!(IntMath32::divide(MIN, -1), Ok(MIN));
    assert_eq!(IntMath32::divide(MIN, 1), Ok(MIN));
    assert_eq!(IntMath32::divide(MIN, MIN), Ok(1));
    assert_eq!(IntMath32::divide(0, 0), Err(ArithmeticError::DivisionByZero));
}

#[cfg(test)]
mod i32_proptests {
    use super::super::IntMath32;
    use test_strategy::proptest;

    #[proptest]
    fn add_matches_wrapping_add(a: i32, b: i32) {
        assert_eq!(IntMath32::add(a, b), a.wrapping_add(b));
    }

    #[proptest]
    fn subtract_matches_wrapping_sub(a: i32, b: i32) {
        assert_eq!(IntMath32::subtract(a, b), a.wrapping_sub(b));
    }

    #[proptest]
    fn multiply_matches_wrapping_mul(a: i32, b: i32) {
        assert_eq!(IntMath32::multiply(a, b), a.wrapping_mul(b));
    }

    #[proptest]
    fn divide_matches_wrapping_div(a: i32, #[filter(#b != 0)] b: i32) {
        assert_eq!(IntMath32::divide(a, b), Ok(a.wrapping_div(b)));
    }
}
