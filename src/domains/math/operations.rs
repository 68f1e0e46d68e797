//! Arithmetic operations.
//!
//! Integers are `i64` and reals are `f64`. Reductions use checked arithmetic
//! and report overflow as [`MathError::LimitExceeded`] instead of wrapping.

use num_bigint::BigUint;

use super::error::{MathError, MathResult};

/// Largest value accepted by [`prime_factorization`].
pub const MAX_FACTORIZATION_INPUT: i64 = 1_000_000;

/// Largest value accepted by [`factorial`].
pub const MAX_FACTORIAL_INPUT: i64 = 1000;

/// Smallest positive subnormal `f64`; divisors below it in magnitude are zero.
const SMALLEST_POSITIVE: f64 = f64::from_bits(1);

/// Prime factors of `n` in ascending order, with multiplicity.
pub fn prime_factorization(n: i64) -> MathResult<Vec<i64>> {
    if n <= 1 {
        return Err(MathError::invalid_argument("Number must be greater than 1"));
    }
    if n > MAX_FACTORIZATION_INPUT {
        return Err(MathError::limit_exceeded(format!(
            "Prime factorization limit exceeded (maximum: {})",
            MAX_FACTORIZATION_INPUT
        )));
    }

    let mut factors = Vec::new();
    let mut rest = n;
    let mut divisor = 2;
    while divisor * divisor <= rest {
        while rest % divisor == 0 {
            factors.push(divisor);
            rest /= divisor;
        }
        divisor += 1;
    }
    if rest > 1 {
        factors.push(rest);
    }
    Ok(factors)
}

/// Sum of a list. The empty list sums to 0.
pub fn sum(numbers: &[i64]) -> MathResult<i64> {
    numbers
        .iter()
        .try_fold(0i64, |acc, &n| acc.checked_add(n))
        .ok_or_else(|| MathError::overflow("Sum"))
}

/// Product of a list.
///
/// The empty list yields 0, not the empty-product identity. Callers rely on
/// this, so it is kept as-is.
pub fn multiply(numbers: &[i64]) -> MathResult<i64> {
    if numbers.is_empty() {
        return Ok(0);
    }
    numbers
        .iter()
        .try_fold(1i64, |acc, &n| acc.checked_mul(n))
        .ok_or_else(|| MathError::overflow("Product"))
}

/// Real division.
pub fn divide(dividend: f64, divisor: f64) -> MathResult<f64> {
    if divisor.abs() < SMALLEST_POSITIVE {
        return Err(MathError::division_by_zero("Cannot divide by zero"));
    }
    Ok(dividend / divisor)
}

/// `base` raised to `exponent`. NaN and infinities pass through.
pub fn power(base: f64, exponent: f64) -> f64 {
    base.powf(exponent)
}

/// Decimal representation of `n!`, computed with arbitrary precision.
pub fn factorial(n: i64) -> MathResult<String> {
    if n < 0 {
        return Err(MathError::invalid_argument(
            "Factorial is not defined for negative numbers",
        ));
    }
    if n > MAX_FACTORIAL_INPUT {
        return Err(MathError::limit_exceeded(format!(
            "Factorial calculation limit exceeded (maximum: {})",
            MAX_FACTORIAL_INPUT
        )));
    }

    // n is within 0..=1000 here.
    let result = (2..=n as u32).fold(BigUint::from(1u32), |acc, i| acc * i);
    Ok(result.to_string())
}

/// Greatest common divisor of |a| and |b| (Euclid). `gcd(0, 0) == 0`.
pub fn gcd(a: i64, b: i64) -> u64 {
    let mut a = a.unsigned_abs();
    let mut b = b.unsigned_abs();
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Least common multiple, `|a * b| / gcd(a, b)`. Zero if either input is zero.
pub fn lcm(a: i64, b: i64) -> MathResult<u64> {
    if a == 0 || b == 0 {
        return Ok(0);
    }
    (a.unsigned_abs() / gcd(a, b))
        .checked_mul(b.unsigned_abs())
        .ok_or_else(|| MathError::overflow("LCM"))
}

/// Primality by trial division over 6k ± 1 candidates.
pub fn is_prime(n: i64) -> bool {
    if n <= 1 {
        return false;
    }
    if n <= 3 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }

    let mut i = 5;
    while i <= n / i {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

/// Square root of a non-negative real.
pub fn square_root(number: f64) -> MathResult<f64> {
    if number < 0.0 {
        return Err(MathError::invalid_argument(
            "Cannot calculate square root of negative number",
        ));
    }
    Ok(number.sqrt())
}

/// Absolute value.
pub fn abs(number: f64) -> f64 {
    number.abs()
}

/// Remainder whose sign follows the dividend.
pub fn modulo(dividend: i64, divisor: i64) -> MathResult<i64> {
    if divisor == 0 {
        return Err(MathError::division_by_zero(
            "Cannot perform modulo with zero divisor",
        ));
    }
    // i64::MIN % -1 overflows; its remainder is 0.
    Ok(dividend.wrapping_rem(divisor))
}

/// Largest element of a non-empty list.
pub fn max(numbers: &[i64]) -> MathResult<i64> {
    numbers.iter().copied().max().ok_or_else(empty_list)
}

/// Smallest element of a non-empty list.
pub fn min(numbers: &[i64]) -> MathResult<i64> {
    numbers.iter().copied().min().ok_or_else(empty_list)
}

/// Arithmetic mean of a non-empty list.
pub fn average(numbers: &[i64]) -> MathResult<f64> {
    if numbers.is_empty() {
        return Err(empty_list());
    }
    let total: i128 = numbers.iter().map(|&n| n as i128).sum();
    Ok(total as f64 / numbers.len() as f64)
}

fn empty_list() -> MathError {
    MathError::invalid_argument("List cannot be empty")
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prime_factorization() {
        assert_eq!(prime_factorization(12).unwrap(), vec![2, 2, 3]);
        assert_eq!(prime_factorization(2).unwrap(), vec![2]);
        assert_eq!(prime_factorization(97).unwrap(), vec![97]);
        assert_eq!(
            prime_factorization(1_000_000).unwrap(),
            vec![2, 2, 2, 2, 2, 2, 5, 5, 5, 5, 5, 5]
        );
    }

    #[test]
    fn test_prime_factorization_rejects_small_and_large() {
        assert!(matches!(
            prime_factorization(1),
            Err(MathError::InvalidArgument(_))
        ));
        assert!(matches!(
            prime_factorization(-12),
            Err(MathError::InvalidArgument(_))
        ));
        assert!(matches!(
            prime_factorization(1_000_001),
            Err(MathError::LimitExceeded(_))
        ));
    }

    #[test]
    fn test_sum_and_multiply() {
        assert_eq!(sum(&[1, 2, 3, 4, 5]).unwrap(), 15);
        assert_eq!(sum(&[]).unwrap(), 0);
        assert_eq!(multiply(&[2, 3, 4]).unwrap(), 24);
        assert_eq!(multiply(&[]).unwrap(), 0);
        assert_eq!(multiply(&[-2, 5]).unwrap(), -10);
    }

    #[test]
    fn test_reduction_overflow() {
        assert!(matches!(
            sum(&[i64::MAX, 1]),
            Err(MathError::LimitExceeded(_))
        ));
        assert!(matches!(
            multiply(&[i64::MAX, 2]),
            Err(MathError::LimitExceeded(_))
        ));
    }

    #[test]
    fn test_divide() {
        assert_eq!(divide(10.0, 4.0).unwrap(), 2.5);
        assert_eq!(
            divide(1.0, 0.0),
            Err(MathError::DivisionByZero("Cannot divide by zero".into()))
        );
        assert!(divide(1.0, -0.0).is_err());
        assert!(divide(1.0, f64::from_bits(1)).is_ok());
    }

    #[test]
    fn test_power_passes_through_non_finite() {
        assert_eq!(power(2.0, 10.0), 1024.0);
        assert!(power(-8.0, 0.5).is_nan());
        assert!(power(0.0, -1.0).is_infinite());
    }

    #[test]
    fn test_factorial() {
        assert_eq!(factorial(0).unwrap(), "1");
        assert_eq!(factorial(1).unwrap(), "1");
        assert_eq!(factorial(5).unwrap(), "120");
        assert_eq!(factorial(20).unwrap(), "2432902008176640000");

        let hundred = factorial(100).unwrap();
        assert_eq!(hundred.len(), 158);
        assert!(hundred.starts_with("93326215443944152681699"));

        assert!(factorial(1000).is_ok());
        assert!(matches!(factorial(1001), Err(MathError::LimitExceeded(_))));
        assert!(matches!(factorial(-1), Err(MathError::InvalidArgument(_))));
    }

    #[test]
    fn test_gcd_lcm() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(-12, 18), 6);
        assert_eq!(gcd(0, 0), 0);
        assert_eq!(gcd(0, 7), 7);
        assert_eq!(gcd(i64::MIN, 0), 1u64 << 63);

        assert_eq!(lcm(4, 6).unwrap(), 12);
        assert_eq!(lcm(-4, 6).unwrap(), 12);
        assert_eq!(lcm(0, 6).unwrap(), 0);
        assert!(matches!(
            lcm(i64::MAX, i64::MAX - 1),
            Err(MathError::LimitExceeded(_))
        ));
    }

    #[test]
    fn test_is_prime_against_sieve() {
        const LIMIT: usize = 10_000;
        let mut sieve = vec![true; LIMIT + 1];
        sieve[0] = false;
        sieve[1] = false;
        let mut i = 2;
        while i * i <= LIMIT {
            if sieve[i] {
                let mut j = i * i;
                while j <= LIMIT {
                    sieve[j] = false;
                    j += i;
                }
            }
            i += 1;
        }

        for n in -5i64..=LIMIT as i64 {
            let expected = n >= 0 && sieve[n as usize];
            assert_eq!(is_prime(n), expected, "is_prime({})", n);
        }
    }

    #[test]
    fn test_is_prime_large() {
        assert!(is_prime(2_147_483_647));
        assert!(!is_prime(2_147_483_649));
    }

    #[test]
    fn test_square_root_and_abs() {
        assert_eq!(square_root(4.0).unwrap(), 2.0);
        assert_eq!(square_root(0.0).unwrap(), 0.0);
        assert!(matches!(
            square_root(-1.0),
            Err(MathError::InvalidArgument(_))
        ));
        assert_eq!(abs(-3.5), 3.5);
        assert_eq!(abs(2.0), 2.0);
    }

    #[test]
    fn test_modulo() {
        assert_eq!(modulo(10, 3).unwrap(), 1);
        assert_eq!(modulo(-10, 3).unwrap(), -1);
        assert_eq!(modulo(10, -3).unwrap(), 1);
        assert_eq!(modulo(i64::MIN, -1).unwrap(), 0);
        assert!(matches!(modulo(5, 0), Err(MathError::DivisionByZero(_))));
    }

    #[test]
    fn test_extrema_and_average() {
        let list = [10, 20, 30, 40, 50];
        assert_eq!(max(&list).unwrap(), 50);
        assert_eq!(min(&list).unwrap(), 10);
        assert_eq!(average(&list).unwrap(), 30.0);
        assert_eq!(average(&[1, 2]).unwrap(), 1.5);
        assert_eq!(average(&[i64::MAX, i64::MAX]).unwrap(), i64::MAX as f64);
    }

    #[test]
    fn test_empty_list_reductions() {
        assert!(matches!(max(&[]), Err(MathError::InvalidArgument(_))));
        assert!(matches!(min(&[]), Err(MathError::InvalidArgument(_))));
        assert!(matches!(average(&[]), Err(MathError::InvalidArgument(_))));
    }
}
