//! List reduction tools: sum, multiply, max, min, average.

use serde_json::Value;

use super::FunctionTool;
use crate::domains::math;
use crate::domains::tools::error::ToolResult;
use crate::domains::tools::params::{Arguments, LIST_ALIASES, ParamKind, ParamSpec};

const fn list_param(description: &'static str) -> ParamSpec {
    ParamSpec {
        kind: ParamKind::IntegerList,
        description,
        aliases: LIST_ALIASES,
    }
}

/// Sum of a list of integers.
pub struct SumTool;

impl SumTool {
    const LIST: ParamSpec = list_param("The integers to add up");
}

impl FunctionTool for SumTool {
    const NAME: &'static str = "sum";
    const DESCRIPTION: &'static str = "Calculate the sum of a list of integers.";
    const PARAMS: &'static [ParamSpec] = &[Self::LIST];

    fn run(args: &Arguments<'_>) -> ToolResult<Value> {
        let numbers = args.integer_list(&Self::LIST)?;
        Ok(math::sum(&numbers)?.into())
    }
}

/// Product of a list of integers.
pub struct MultiplyTool;

impl MultiplyTool {
    const LIST: ParamSpec = list_param("The integers to multiply");
}

impl FunctionTool for MultiplyTool {
    const NAME: &'static str = "multiply";
    const DESCRIPTION: &'static str =
        "Calculate the product of a list of integers. An empty list yields 0.";
    const PARAMS: &'static [ParamSpec] = &[Self::LIST];

    fn run(args: &Arguments<'_>) -> ToolResult<Value> {
        let numbers = args.integer_list(&Self::LIST)?;
        Ok(math::multiply(&numbers)?.into())
    }
}

/// Largest element of a list.
pub struct MaxTool;

impl MaxTool {
    const LIST: ParamSpec = list_param("A non-empty list of integers");
}

impl FunctionTool for MaxTool {
    const NAME: &'static str = "max";
    const DESCRIPTION: &'static str = "Get the maximum value of a non-empty list of integers.";
    const PARAMS: &'static [ParamSpec] = &[Self::LIST];

    fn run(args: &Arguments<'_>) -> ToolResult<Value> {
        let numbers = args.integer_list(&Self::LIST)?;
        Ok(math::max(&numbers)?.into())
    }
}

/// Smallest element of a list.
pub struct MinTool;

impl MinTool {
    const LIST: ParamSpec = list_param("A non-empty list of integers");
}

impl FunctionTool for MinTool {
    const NAME: &'static str = "min";
    const DESCRIPTION: &'static str = "Get the minimum value of a non-empty list of integers.";
    const PARAMS: &'static [ParamSpec] = &[Self::LIST];

    fn run(args: &Arguments<'_>) -> ToolResult<Value> {
        let numbers = args.integer_list(&Self::LIST)?;
        Ok(math::min(&numbers)?.into())
    }
}

/// Arithmetic mean of a list.
pub struct AverageTool;

impl AverageTool {
    const LIST: ParamSpec = list_param("A non-empty list of integers");
}

impl FunctionTool for AverageTool {
    const NAME: &'static str = "average";
    const DESCRIPTION: &'static str = "Calculate the average of a non-empty list of integers.";
    const PARAMS: &'static [ParamSpec] = &[Self::LIST];

    fn run(args: &Arguments<'_>) -> ToolResult<Value> {
        let numbers = args.integer_list(&Self::LIST)?;
        Ok(math::average(&numbers)?.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::{ArgumentMap, ErrorKind, ToolError};
    use serde_json::json;

    fn args(v: Value) -> ArgumentMap {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn test_sum_alias_equivalence() {
        let canonical = SumTool::call(&args(json!({ "list": [1, 2, 3, 4, 5] }))).unwrap();
        let alias = SumTool::call(&args(json!({ "numbers": [1, 2, 3, 4, 5] }))).unwrap();
        assert_eq!(canonical, json!(15));
        assert_eq!(canonical, alias);
    }

    #[test]
    fn test_multiply_empty_is_zero() {
        assert_eq!(MultiplyTool::call(&args(json!({ "items": [] }))).unwrap(), json!(0));
        assert_eq!(
            MultiplyTool::call(&args(json!({ "data": [2, 3, 4] }))).unwrap(),
            json!(24)
        );
    }

    #[test]
    fn test_extrema_and_average() {
        let list = json!({ "values": [10, 20, 30, 40, 50] });
        assert_eq!(MaxTool::call(&args(list.clone())).unwrap(), json!(50));
        assert_eq!(MinTool::call(&args(list.clone())).unwrap(), json!(10));
        assert_eq!(AverageTool::call(&args(list)).unwrap(), json!(30.0));
    }

    #[test]
    fn test_empty_list_rejected() {
        let err = AverageTool::call(&args(json!({ "list": [] }))).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(err.to_string(), "List cannot be empty");
    }

    #[test]
    fn test_malformed_list() {
        let err = SumTool::call(&args(json!({ "list": [1, "two", 3] }))).unwrap_err();
        assert_eq!(err, ToolError::MalformedList);

        let err = MaxTool::call(&args(json!({ "arr": { "a": 1 } }))).unwrap_err();
        assert_eq!(err, ToolError::MalformedList);
    }

    #[test]
    fn test_missing_list_argument() {
        let err = SumTool::call(&args(json!({ "nums": [1] }))).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing list argument. Expected: 'list', 'numbers', 'values', 'arr', 'data', or 'items'. Received: nums"
        );
    }
}
