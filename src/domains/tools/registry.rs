//! Tool Registry - catalogue and routing for all tools.
//!
//! This module provides:
//! - The ordered tool catalogue, built once at startup
//! - Name-based routing of calls to the matching tool

use serde_json::Value;
use tracing::warn;

use super::definitions::{
    AbsTool, AverageTool, DivideTool, FactorialTool, FunctionTool, GcdTool, IsPrimeTool, LcmTool,
    MaxTool, MinTool, ModuloTool, MultiplyTool, PowerTool, PrimeFactorizationTool, SquareRootTool,
    SumTool, ToolDefinition,
};
use super::error::{ToolError, ToolResult};
use super::params::ArgumentMap;

/// Tool registry - owns the immutable catalogue and routes calls.
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    catalogue: Vec<ToolDefinition>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new() -> Self {
        Self {
            catalogue: Self::get_all_tools(),
        }
    }

    /// Get all tool names, in catalogue order.
    pub fn tool_names() -> Vec<&'static str> {
        vec![
            PrimeFactorizationTool::NAME,
            SumTool::NAME,
            MultiplyTool::NAME,
            DivideTool::NAME,
            PowerTool::NAME,
            FactorialTool::NAME,
            GcdTool::NAME,
            LcmTool::NAME,
            IsPrimeTool::NAME,
            SquareRootTool::NAME,
            AbsTool::NAME,
            ModuloTool::NAME,
            MaxTool::NAME,
            MinTool::NAME,
            AverageTool::NAME,
        ]
    }

    /// Build every tool definition, in catalogue order.
    pub fn get_all_tools() -> Vec<ToolDefinition> {
        vec![
            PrimeFactorizationTool::to_definition(),
            SumTool::to_definition(),
            MultiplyTool::to_definition(),
            DivideTool::to_definition(),
            PowerTool::to_definition(),
            FactorialTool::to_definition(),
            GcdTool::to_definition(),
            LcmTool::to_definition(),
            IsPrimeTool::to_definition(),
            SquareRootTool::to_definition(),
            AbsTool::to_definition(),
            ModuloTool::to_definition(),
            MaxTool::to_definition(),
            MinTool::to_definition(),
            AverageTool::to_definition(),
        ]
    }

    /// The catalogue built at construction.
    pub fn catalogue(&self) -> &[ToolDefinition] {
        &self.catalogue
    }

    /// Route a call to the tool with this name (case-insensitive).
    pub fn call_tool(&self, name: &str, arguments: &ArgumentMap) -> ToolResult<Value> {
        match name.to_lowercase().as_str() {
            PrimeFactorizationTool::NAME => PrimeFactorizationTool::call(arguments),
            SumTool::NAME => SumTool::call(arguments),
            MultiplyTool::NAME => MultiplyTool::call(arguments),
            DivideTool::NAME => DivideTool::call(arguments),
            PowerTool::NAME => PowerTool::call(arguments),
            FactorialTool::NAME => FactorialTool::call(arguments),
            GcdTool::NAME => GcdTool::call(arguments),
            LcmTool::NAME => LcmTool::call(arguments),
            IsPrimeTool::NAME => IsPrimeTool::call(arguments),
            SquareRootTool::NAME => SquareRootTool::call(arguments),
            AbsTool::NAME => AbsTool::call(arguments),
            ModuloTool::NAME => ModuloTool::call(arguments),
            MaxTool::NAME => MaxTool::call(arguments),
            MinTool::NAME => MinTool::call(arguments),
            AverageTool::NAME => AverageTool::call(arguments),
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::unknown_operation(name))
            }
        }
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
