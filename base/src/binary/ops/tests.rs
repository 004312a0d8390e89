use super::*;

#[test]
fn test_add() {
    assert_eq!(add("11", "10"), Ok("101".to_string()));
    assert_eq!(add("0", "0"), Ok("0".to_string()));
    assert_eq!(add("1", "0"), Ok("1".to_string()));
}

#[test]
fn test_add_overflow() {
    let max = "1".repeat(32);
    assert_eq!(add(&max, "1"), Err(MathError::ResultOverflow));
    assert_eq!(add(&max, "0"), Ok(max.clone()));
}

#[test]
fn test_malformed_operand_fails_the_same_way_in_either_position() {
    assert_eq!(
        add("12", "1"),
        Err(MathError::InvalidFormat("12".to_string()))
    );
    assert_eq!(
        add("1", "12"),
        Err(MathError::InvalidFormat("12".to_string()))
    );
    assert_eq!(
        multiply("", "1"),
        Err(MathError::InvalidFormat("".to_string()))
    );
    assert_eq!(
        divide("1", ""),
        Err(MathError::InvalidFormat("".to_string()))
    );
}

#[test]
fn test_subtract() {
    assert_eq!(subtract("101", "10"), Ok("11".to_string()));
    assert_eq!(subtract("101", "101"), Ok("0".to_string()));
}

#[test]
fn test_subtract_wraps_below_zero() {
    // 0 - 1 comes out as the two's-complement pattern of -1.
    assert_eq!(subtract("0", "1"), Ok("1".repeat(32)));
    assert_eq!(subtract("1", "11"), Ok("1".repeat(31) + "0"));
}

#[test]
fn test_multiply() {
    assert_eq!(multiply("11", "10"), Ok("110".to_string()));
    assert_eq!(multiply("101", "0"), Ok("0".to_string()));
    let max = "1".repeat(32);
    assert_eq!(multiply(&max, "1"), Ok(max.clone()));
    assert_eq!(multiply(&max, "10"), Err(MathError::ResultOverflow));
}

#[test]
fn test_divide() {
    assert_eq!(divide("101", "10"), Ok("10".to_string())); // floor(5/2) = 2
    assert_eq!(divide("0", "101"), Ok("0".to_string()));
    assert_eq!(divide("1100100", "1010"), Ok("1010".to_string())); // 100/10 = 10
}

#[test]
fn test_divide_by_zero() {
    assert_eq!(divide("101", "0"), Err(MathError::DivisionByZero));
    assert_eq!(divide("101", "000"), Err(MathError::DivisionByZero));
    assert_eq!(divide("0", "0"), Err(MathError::DivisionByZero));
}

#[test]
fn test_bitwise_and() {
    assert_eq!(bitwise_and("1100", "1010"), Ok("1000".to_string()));
    assert_eq!(bitwise_and("1111", "0"), Ok("0".to_string()));
}

#[test]
fn test_bitwise_or() {
    assert_eq!(bitwise_or("1100", "1010"), Ok("1110".to_string()));
    assert_eq!(bitwise_or("1111", "0"), Ok("1111".to_string()));
}

#[test]
fn test_bitwise_xor() {
    assert_eq!(bitwise_xor("1100", "1010"), Ok("110".to_string()));
    assert_eq!(bitwise_xor("1111", "1111"), Ok("0".to_string()));
}

#[test]
fn test_bitwise_not_covers_the_full_word() {
    assert_eq!(bitwise_not("0"), Ok("1".repeat(32)));
    assert_eq!(bitwise_not(&"1".repeat(32)), Ok("0".to_string()));
    // !1 = 31 one-bits followed by a zero.
    assert_eq!(bitwise_not("1"), Ok("1".repeat(31) + "0"));
}

#[test]
fn test_shift_left() {
    assert_eq!(shift_left("1", 3), Ok("1000".to_string()));
    assert_eq!(shift_left("101", 0), Ok("101".to_string()));
    assert_eq!(shift_left("0", 5), Ok("0".to_string()));
}

#[test]
fn test_shift_left_discards_high_bits() {
    let max = "1".repeat(32);
    assert_eq!(shift_left(&max, 1), Ok("1".repeat(31) + "0"));
    assert_eq!(shift_left(&max, 32), Ok("0".to_string()));
    assert_eq!(shift_left("1", 40), Ok("0".to_string()));
}

#[test]
fn test_shift_right() {
    assert_eq!(shift_right("1000", 3), Ok("1".to_string()));
    assert_eq!(shift_right("101", 0), Ok("101".to_string()));
    assert_eq!(shift_right("1", 1), Ok("0".to_string()));
    assert_eq!(shift_right(&"1".repeat(32), 32), Ok("0".to_string()));
}

#[test]
fn test_negative_shift_amounts_are_rejected() {
    assert_eq!(shift_left("1", -1), Err(MathError::InvalidShiftAmount(-1)));
    assert_eq!(shift_right("1", -3), Err(MathError::InvalidShiftAmount(-3)));
}

#[test]
fn test_power() {
    assert_eq!(power("10", 10), Ok(format!("1{}", "0".repeat(10)))); // 2^10
    assert_eq!(power("101", 2), Ok("11001".to_string())); // 5^2 = 25
    assert_eq!(power("101", 0), Ok("1".to_string()));
    assert_eq!(power("0", 0), Ok("1".to_string()));
    assert_eq!(power("0", 3), Ok("0".to_string()));
}

#[test]
fn test_power_overflow() {
    assert_eq!(power("10", 31), Ok(format!("1{}", "0".repeat(31))));
    assert_eq!(power("10", 32), Err(MathError::ResultOverflow));
    assert_eq!(power("11", 21), Err(MathError::ResultOverflow)); // 3^21 > 2^32
}

#[test]
fn test_square_root() {
    assert_eq!(square_root("0"), Ok("0".to_string()));
    assert_eq!(square_root("1"), Ok("1".to_string()));
    assert_eq!(square_root("100"), Ok("10".to_string())); // sqrt(4) = 2
    assert_eq!(square_root("11001"), Ok("101".to_string())); // sqrt(25) = 5
    // Non-squares round down: sqrt(8) = 2.
    assert_eq!(square_root("1000"), Ok("10".to_string()));
    // Largest representable input.
    assert_eq!(
        square_root(&"1".repeat(32)),
        Ok("1111111111111111".to_string()) // 65535
    );
}

mod arithmetic_proptests {
    use super::super::super::convert::{decode, encode};
    use super::super::{add, divide, multiply, subtract};
    use test_strategy::{proptest, Arbitrary};

    #[derive(Debug, Arbitrary)]
    struct OperandPair {
        a: u32,
        b: u32,
    }

    fn bin(n: u32) -> String {
        encode(i64::from(n)).unwrap()
    }

    #[proptest]
    fn add_matches_native_arithmetic_in_range(input: OperandPair) {
        match u32::try_from(u64::from(input.a) + u64::from(input.b)) {
            Ok(expected) => {
                let sum = add(&bin(input.a), &bin(input.b)).unwrap();
                assert_eq!(decode(&sum), Ok(expected));
            }
            Err(_) => {
                assert!(add(&bin(input.a), &bin(input.b)).is_err());
            }
        }
    }

    #[proptest]
    fn subtract_matches_native_arithmetic_in_range(input: OperandPair) {
        if input.a >= input.b {
            let difference = subtract(&bin(input.a), &bin(input.b)).unwrap();
            assert_eq!(decode(&difference), Ok(input.a - input.b));
        }
    }

    #[proptest]
    fn multiply_matches_native_arithmetic_in_range(input: OperandPair) {
        match input.a.checked_mul(input.b) {
            Some(expected) => {
                let product = multiply(&bin(input.a), &bin(input.b)).unwrap();
                assert_eq!(decode(&product), Ok(expected));
            }
            None => {
                assert!(multiply(&bin(input.a), &bin(input.b)).is_err());
            }
        }
    }

    #[derive(Debug, Arbitrary)]
    struct DivisionTestInput {
        dividend: u32,
        #[strategy(1..=u32::MAX)]
        divisor: u32,
    }

    #[proptest]
    fn division_is_floor_division(input: DivisionTestInput) {
        let quotient = divide(&bin(input.dividend), &bin(input.divisor)).unwrap();
        assert_eq!(decode(&quotient), Ok(input.dividend / input.divisor));
    }
}

mod shift_proptests {
    use super::super::super::convert::{decode, encode};
    use super::super::{shift_left, shift_right};
    use test_strategy::{proptest, Arbitrary};

    #[derive(Debug, Arbitrary)]
    struct ShiftTestInput {
        #[strategy(0u32..32)]
        amount: u32,
        // Keep the value narrow enough that no bits leave the word.
        #[strategy(0..=(u32::MAX >> #amount))]
        value: u32,
    }

    #[proptest]
    fn shift_right_reverses_a_lossless_shift_left(input: ShiftTestInput) {
        let text = encode(i64::from(input.value)).unwrap();
        let shifted = shift_left(&text, i64::from(input.amount)).unwrap();
        let restored = shift_right(&shifted, i64::from(input.amount)).unwrap();
        assert_eq!(decode(&restored), Ok(input.value));
    }
}

mod square_root_proptests {
    use super::super::super::convert::{decode, encode};
    use super::super::square_root;
    use test_strategy::proptest;

    #[proptest]
    fn root_squared_brackets_the_operand(n: u32) {
        let text = encode(i64::from(n)).unwrap();
        let root = u64::from(decode(&square_root(&text).unwrap()).unwrap());
        let n = u64::from(n);
        assert!(root * root <= n, "{root}^2 should not exceed {n}");
        assert!((root + 1) * (root + 1) > n, "{root} is too small for {n}");
    }
}
