//! Integer tools: prime_factorization, factorial, gcd, lcm, is_prime, modulo.

use serde_json::Value;

use super::FunctionTool;
use crate::domains::math;
use crate::domains::tools::error::ToolResult;
use crate::domains::tools::params::{
    Arguments, FIRST_OPERAND_ALIASES, NUMBER_ALIASES, ParamKind, ParamSpec, SECOND_OPERAND_ALIASES,
};

const FIRST_INTEGER: ParamSpec = ParamSpec {
    kind: ParamKind::Integer,
    description: "The first integer",
    aliases: FIRST_OPERAND_ALIASES,
};

const SECOND_INTEGER: ParamSpec = ParamSpec {
    kind: ParamKind::Integer,
    description: "The second integer",
    aliases: SECOND_OPERAND_ALIASES,
};

// ============================================================================
// prime_factorization
// ============================================================================

/// Prime factorization of a single integer.
pub struct PrimeFactorizationTool;

impl PrimeFactorizationTool {
    const NUMBER: ParamSpec = ParamSpec {
        kind: ParamKind::Integer,
        description: "A single positive integer to factorize (2 to 1,000,000)",
        aliases: &["number", "n", "num", "value", "integer"],
    };
}

impl FunctionTool for PrimeFactorizationTool {
    const NAME: &'static str = "prime_factorization";
    const DESCRIPTION: &'static str = "Factorize a single integer into primes.

Constraints:
- Arrays or several numbers cannot be processed at once
- For several numbers, call this function once per number
- The input must be an integer greater than 1
- Maximum supported value: 1,000,000

Examples:
- Correct: prime_factorization(12) -> [2, 2, 3]
- Wrong: prime_factorization([12, 15, 18]) -> error";
    const PARAMS: &'static [ParamSpec] = &[Self::NUMBER];

    fn run(args: &Arguments<'_>) -> ToolResult<Value> {
        let number = args.integer(&Self::NUMBER)?;
        Ok(math::prime_factorization(number)?.into())
    }
}

// ============================================================================
// factorial
// ============================================================================

/// Factorial as a decimal string.
pub struct FactorialTool;

impl FactorialTool {
    const N: ParamSpec = ParamSpec {
        kind: ParamKind::Integer,
        description: "A non-negative integer (0 to 1000)",
        aliases: &["n", "number", "num", "value"],
    };
}

impl FunctionTool for FactorialTool {
    const NAME: &'static str = "factorial";
    const DESCRIPTION: &'static str = "Calculate the factorial of a non-negative integer.

Limits:
- Maximum input: 1000 (computed with arbitrary precision)
- Negative numbers are not supported
- factorial(0) returns 1

Result type:
- The result is returned as a decimal string because it can be very large
- 100! has 158 digits

Examples:
- factorial(5) -> \"120\"
- factorial(100) -> \"93326215443944152681699...\"

Errors:
- n > 1000: limit exceeded
- n < 0: negative input";
    const PARAMS: &'static [ParamSpec] = &[Self::N];

    fn run(args: &Arguments<'_>) -> ToolResult<Value> {
        let n = args.integer(&Self::N)?;
        Ok(math::factorial(n)?.into())
    }
}

// ============================================================================
// gcd / lcm
// ============================================================================

/// Greatest common divisor.
pub struct GcdTool;

impl FunctionTool for GcdTool {
    const NAME: &'static str = "gcd";
    const DESCRIPTION: &'static str = "Calculate the greatest common divisor of two integers.";
    const PARAMS: &'static [ParamSpec] = &[FIRST_INTEGER, SECOND_INTEGER];

    fn run(args: &Arguments<'_>) -> ToolResult<Value> {
        let a = args.integer(&FIRST_INTEGER)?;
        let b = args.integer(&SECOND_INTEGER)?;
        Ok(math::gcd(a, b).into())
    }
}

/// Least common multiple.
pub struct LcmTool;

impl FunctionTool for LcmTool {
    const NAME: &'static str = "lcm";
    const DESCRIPTION: &'static str = "Calculate the least common multiple of two integers.";
    const PARAMS: &'static [ParamSpec] = &[FIRST_INTEGER, SECOND_INTEGER];

    fn run(args: &Arguments<'_>) -> ToolResult<Value> {
        let a = args.integer(&FIRST_INTEGER)?;
        let b = args.integer(&SECOND_INTEGER)?;
        Ok(math::lcm(a, b)?.into())
    }
}

// ============================================================================
// is_prime
// ============================================================================

/// Primality test.
pub struct IsPrimeTool;

impl IsPrimeTool {
    const NUMBER: ParamSpec = ParamSpec {
        kind: ParamKind::Integer,
        description: "The integer to test",
        aliases: NUMBER_ALIASES,
    };
}

impl FunctionTool for IsPrimeTool {
    const NAME: &'static str = "is_prime";
    const DESCRIPTION: &'static str = "Determine whether an integer is prime.";
    const PARAMS: &'static [ParamSpec] = &[Self::NUMBER];

    fn run(args: &Arguments<'_>) -> ToolResult<Value> {
        let number = args.integer(&Self::NUMBER)?;
        Ok(math::is_prime(number).into())
    }
}

// ============================================================================
// modulo
// ============================================================================

/// Integer remainder.
pub struct ModuloTool;

impl ModuloTool {
    const DIVIDEND: ParamSpec = ParamSpec {
        kind: ParamKind::Integer,
        description: "The dividend",
        aliases: &["dividend", "a", "first", "num1"],
    };

    const DIVISOR: ParamSpec = ParamSpec {
        kind: ParamKind::Integer,
        description: "The divisor (must not be zero)",
        aliases: &["divisor", "b", "second", "num2"],
    };
}

impl FunctionTool for ModuloTool {
    const NAME: &'static str = "modulo";
    const DESCRIPTION: &'static str =
        "Calculate the remainder of an integer division. The sign follows the dividend.";
    const PARAMS: &'static [ParamSpec] = &[Self::DIVIDEND, Self::DIVISOR];

    fn run(args: &Arguments<'_>) -> ToolResult<Value> {
        let dividend = args.integer(&Self::DIVIDEND)?;
        let divisor = args.integer(&Self::DIVISOR)?;
        Ok(math::modulo(dividend, divisor)?.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::{ArgumentMap, ErrorKind};
    use serde_json::json;

    fn args(v: Value) -> ArgumentMap {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn test_prime_factorization_integer_alias() {
        assert_eq!(
            PrimeFactorizationTool::call(&args(json!({ "integer": 12 }))).unwrap(),
            json!([2, 2, 3])
        );
    }

    #[test]
    fn test_prime_factorization_rejects_array() {
        let err = PrimeFactorizationTool::call(&args(json!({ "number": [12, 15] }))).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_factorial_result_is_string() {
        assert_eq!(
            FactorialTool::call(&args(json!({ "n": 5 }))).unwrap(),
            json!("120")
        );
        let err = FactorialTool::call(&args(json!({ "number": 1001 }))).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::LimitExceeded);
        assert_eq!(
            err.to_string(),
            "Factorial calculation limit exceeded (maximum: 1000)"
        );
    }

    #[test]
    fn test_gcd_lcm_aliases() {
        assert_eq!(
            GcdTool::call(&args(json!({ "num1": 12, "num2": 18 }))).unwrap(),
            json!(6)
        );
        assert_eq!(
            LcmTool::call(&args(json!({ "x": 4, "y": 6 }))).unwrap(),
            json!(12)
        );
        assert_eq!(
            GcdTool::call(&args(json!({ "a": 0, "b": 0 }))).unwrap(),
            json!(0)
        );
    }

    #[test]
    fn test_is_prime() {
        assert_eq!(IsPrimeTool::call(&args(json!({ "n": 97 }))).unwrap(), json!(true));
        assert_eq!(IsPrimeTool::call(&args(json!({ "n": -7 }))).unwrap(), json!(false));
    }

    #[test]
    fn test_modulo() {
        assert_eq!(
            ModuloTool::call(&args(json!({ "dividend": -7, "divisor": 3 }))).unwrap(),
            json!(-1)
        );
        let err = ModuloTool::call(&args(json!({ "a": 7, "b": 0 }))).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DivisionByZero);
    }

    #[test]
    fn test_integer_parameter_rejects_fraction() {
        let err = ModuloTool::call(&args(json!({ "a": 7.5, "b": 2 }))).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }
}
