//! Tool definitions module.
//!
//! Each tool is a unit struct implementing [`FunctionTool`]: its name,
//! description, parameter table (with accepted aliases), and a `run` body
//! that coerces arguments and calls into the math domain.
//!
//! ## Adding a New Tool
//!
//! 1. Implement `FunctionTool` in the matching file (or a new one)
//! 2. Export it here
//! 3. Register it in `registry.rs` (catalogue and dispatch match)

pub mod arithmetic;
pub mod lists;
pub mod number_theory;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::error::ToolResult;
use super::params::{ArgumentMap, Arguments, ParamSpec};

pub use arithmetic::{AbsTool, DivideTool, PowerTool, SquareRootTool};
pub use lists::{AverageTool, MaxTool, MinTool, MultiplyTool, SumTool};
pub use number_theory::{
    FactorialTool, GcdTool, IsPrimeTool, LcmTool, ModuloTool, PrimeFactorizationTool,
};

// ============================================================================
// Catalogue Model
// ============================================================================

/// An advertised tool as serialized in the catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub parameters: ParametersSchema,
}

/// JSON-schema object describing a tool's parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParametersSchema {
    #[serde(rename = "type")]
    pub schema_type: String,
    /// Parameters in declaration order.
    pub properties: IndexMap<String, PropertySchema>,
    pub required: Vec<String>,
}

/// JSON-schema entry for one parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertySchema {
    #[serde(rename = "type")]
    pub schema_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<PropertySchema>>,
}

impl PropertySchema {
    /// A bare schema carrying only a type tag.
    pub fn of_type(schema_type: impl Into<String>) -> Self {
        Self {
            schema_type: schema_type.into(),
            description: None,
            items: None,
        }
    }
}

// ============================================================================
// Tool Trait
// ============================================================================

/// Trait for tool definitions.
pub trait FunctionTool {
    /// Name the tool is advertised and dispatched under.
    const NAME: &'static str;

    /// Description shown to the model, including usage constraints.
    const DESCRIPTION: &'static str;

    /// Parameters in declaration order. All are required.
    const PARAMS: &'static [ParamSpec];

    /// Coerce arguments and invoke the operation.
    fn run(args: &Arguments<'_>) -> ToolResult<serde_json::Value>;

    /// Catalogue entry for this tool.
    fn to_definition() -> ToolDefinition {
        ToolDefinition {
            name: Self::NAME.to_string(),
            description: Self::DESCRIPTION.to_string(),
            parameters: ParametersSchema {
                schema_type: "object".to_string(),
                properties: Self::PARAMS
                    .iter()
                    .map(|p| (p.name().to_string(), p.to_schema()))
                    .collect(),
                required: Self::PARAMS.iter().map(|p| p.name().to_string()).collect(),
            },
        }
    }

    /// Resolve every parameter, then run.
    ///
    /// No coercion or operation call happens unless all parameters resolve.
    fn call(arguments: &ArgumentMap) -> ToolResult<serde_json::Value> {
        let args = Arguments::new(arguments);
        args.ensure_present(Self::PARAMS)?;

        info!("  → {}({})", Self::NAME, args.render(Self::PARAMS));
        let result = Self::run(&args)?;
        debug!("  → Result: {}", result);

        Ok(result)
    }
}
