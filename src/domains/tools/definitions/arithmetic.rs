//! Real-valued arithmetic tools: divide, power, square_root, abs.

use serde_json::Value;

use super::FunctionTool;
use crate::domains::math;
use crate::domains::tools::error::ToolResult;
use crate::domains::tools::params::{Arguments, NUMBER_ALIASES, ParamKind, ParamSpec};

// ============================================================================
// divide
// ============================================================================

/// Real division of two numbers.
pub struct DivideTool;

impl DivideTool {
    const DIVIDEND: ParamSpec = ParamSpec {
        kind: ParamKind::Number,
        description: "The dividend",
        aliases: &["dividend", "numerator", "a", "first"],
    };

    const DIVISOR: ParamSpec = ParamSpec {
        kind: ParamKind::Number,
        description: "The divisor (must not be zero)",
        aliases: &["divisor", "denominator", "b", "second"],
    };
}

impl FunctionTool for DivideTool {
    const NAME: &'static str = "divide";
    const DESCRIPTION: &'static str = "Divide one number by another. Fails when the divisor is zero.";
    const PARAMS: &'static [ParamSpec] = &[Self::DIVIDEND, Self::DIVISOR];

    fn run(args: &Arguments<'_>) -> ToolResult<Value> {
        let dividend = args.real(&Self::DIVIDEND)?;
        let divisor = args.real(&Self::DIVISOR)?;
        Ok(math::divide(dividend, divisor)?.into())
    }
}

// ============================================================================
// power
// ============================================================================

/// `base` raised to `exponent`.
pub struct PowerTool;

impl PowerTool {
    const BASE: ParamSpec = ParamSpec {
        kind: ParamKind::Number,
        description: "The base",
        aliases: &["base", "number", "n", "x"],
    };

    const EXPONENT: ParamSpec = ParamSpec {
        kind: ParamKind::Number,
        description: "The exponent",
        aliases: &["exponent", "exp", "power", "p"],
    };
}

impl FunctionTool for PowerTool {
    const NAME: &'static str = "power";
    const DESCRIPTION: &'static str = "Raise a number to a power.";
    const PARAMS: &'static [ParamSpec] = &[Self::BASE, Self::EXPONENT];

    fn run(args: &Arguments<'_>) -> ToolResult<Value> {
        let base = args.real(&Self::BASE)?;
        let exponent = args.real(&Self::EXPONENT)?;
        Ok(math::power(base, exponent).into())
    }
}

// ============================================================================
// square_root
// ============================================================================

/// Square root of a non-negative number.
pub struct SquareRootTool;

impl SquareRootTool {
    const NUMBER: ParamSpec = ParamSpec {
        kind: ParamKind::Number,
        description: "A non-negative number",
        aliases: NUMBER_ALIASES,
    };
}

impl FunctionTool for SquareRootTool {
    const NAME: &'static str = "square_root";
    const DESCRIPTION: &'static str =
        "Calculate the square root of a non-negative number. Negative input is an error.";
    const PARAMS: &'static [ParamSpec] = &[Self::NUMBER];

    fn run(args: &Arguments<'_>) -> ToolResult<Value> {
        let number = args.real(&Self::NUMBER)?;
        Ok(math::square_root(number)?.into())
    }
}

// ============================================================================
// abs
// ============================================================================

/// Absolute value.
pub struct AbsTool;

impl AbsTool {
    const NUMBER: ParamSpec = ParamSpec {
        kind: ParamKind::Number,
        description: "The number whose absolute value to take",
        aliases: NUMBER_ALIASES,
    };
}

impl FunctionTool for AbsTool {
    const NAME: &'static str = "abs";
    const DESCRIPTION: &'static str = "Calculate the absolute value of a number.";
    const PARAMS: &'static [ParamSpec] = &[Self::NUMBER];

    fn run(args: &Arguments<'_>) -> ToolResult<Value> {
        let number = args.real(&Self::NUMBER)?;
        Ok(math::abs(number).into())
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
    fn test_divide_aliases() {
        let result = DivideTool::call(&args(json!({ "numerator": 9, "denominator": 2 })));
        assert_eq!(result.unwrap(), json!(4.5));
    }

    #[test]
    fn test_divide_by_zero() {
        let err = DivideTool::call(&args(json!({ "a": 1, "b": 0 }))).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DivisionByZero);
        assert_eq!(err.to_string(), "Cannot divide by zero");
    }

    #[test]
    fn test_divide_missing_divisor() {
        let err = DivideTool::call(&args(json!({ "dividend": 1 }))).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingArgument);
        assert!(err.to_string().starts_with("Missing divisor argument"));
    }

    #[test]
    fn test_power_non_finite_is_null() {
        assert_eq!(
            PowerTool::call(&args(json!({ "base": 2, "exp": 3 }))).unwrap(),
            json!(8.0)
        );
        assert_eq!(
            PowerTool::call(&args(json!({ "x": -8, "p": 0.5 }))).unwrap(),
            Value::Null
        );
    }

    #[test]
    fn test_square_root() {
        assert_eq!(
            SquareRootTool::call(&args(json!({ "number": 4 }))).unwrap(),
            json!(2.0)
        );
        let err = SquareRootTool::call(&args(json!({ "n": -1 }))).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_abs_accepts_numeric_string() {
        assert_eq!(
            AbsTool::call(&args(json!({ "value": "-2.5" }))).unwrap(),
            json!(2.5)
        );
    }

    #[test]
    fn test_abs_rejects_non_numeric() {
        let err = AbsTool::call(&args(json!({ "number": [1] }))).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }
}
