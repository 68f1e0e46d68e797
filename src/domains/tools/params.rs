//! Parameter specifications and alias resolution.
//!
//! Each tool declares its parameters as static [`ParamSpec`]s. A spec carries
//! the ordered list of names a caller may use for it; the first name is the
//! canonical one advertised in the catalogue. Resolution picks the first alias
//! present in the request, and extra keys are ignored.

use indexmap::IndexMap;

use super::definitions::PropertySchema;
use super::error::{ToolError, ToolResult};
use super::value::ArgValue;

/// Argument mapping as decoded from a request, in the caller's key order.
pub type ArgumentMap = IndexMap<String, ArgValue>;

/// Semantic type of a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// 64-bit signed integer.
    Integer,
    /// 64-bit float.
    Number,
    /// List of 64-bit signed integers.
    IntegerList,
}

impl ParamKind {
    /// JSON-schema type tag.
    pub fn schema_type(&self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Number => "number",
            Self::IntegerList => "array",
        }
    }
}

/// A single tool parameter.
#[derive(Debug, Clone, Copy)]
pub struct ParamSpec {
    pub kind: ParamKind,
    pub description: &'static str,
    /// Accepted names in lookup order. The first is the canonical name.
    pub aliases: &'static [&'static str],
}

impl ParamSpec {
    /// Canonical parameter name.
    pub fn name(&self) -> &'static str {
        self.aliases.first().copied().unwrap_or_default()
    }

    /// Schema entry for the tool catalogue.
    pub fn to_schema(&self) -> PropertySchema {
        PropertySchema {
            schema_type: self.kind.schema_type().to_string(),
            description: Some(self.description.to_string()),
            items: match self.kind {
                ParamKind::IntegerList => Some(Box::new(PropertySchema::of_type("integer"))),
                _ => None,
            },
        }
    }
}

// Shared alias tables.
pub const NUMBER_ALIASES: &[&str] = &["number", "n", "num", "value"];
pub const LIST_ALIASES: &[&str] = &["list", "numbers", "values", "arr", "data", "items"];
pub const FIRST_OPERAND_ALIASES: &[&str] = &["a", "first", "x", "num1"];
pub const SECOND_OPERAND_ALIASES: &[&str] = &["b", "second", "y", "num2"];

/// Read-only view over a request's arguments.
#[derive(Debug, Clone, Copy)]
pub struct Arguments<'a> {
    map: &'a ArgumentMap,
}

impl<'a> Arguments<'a> {
    pub fn new(map: &'a ArgumentMap) -> Self {
        Self { map }
    }

    /// Value of the first alias present, if any.
    pub fn lookup(&self, spec: &ParamSpec) -> Option<&'a ArgValue> {
        spec.aliases.iter().find_map(|alias| self.map.get(*alias))
    }

    /// Resolve a parameter or report which aliases were expected.
    pub fn resolve(&self, spec: &ParamSpec) -> ToolResult<&'a ArgValue> {
        self.lookup(spec)
            .ok_or_else(|| ToolError::missing_argument(spec.name(), spec.aliases, self.map.keys()))
    }

    /// Check that every parameter resolves, in declaration order.
    pub fn ensure_present(&self, specs: &[ParamSpec]) -> ToolResult<()> {
        specs.iter().try_for_each(|spec| self.resolve(spec).map(|_| ()))
    }

    /// Render resolved parameters under their canonical names.
    pub fn render(&self, specs: &[ParamSpec]) -> String {
        specs
            .iter()
            .filter_map(|spec| self.lookup(spec).map(|v| format!("{}={}", spec.name(), v)))
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn integer(&self, spec: &ParamSpec) -> ToolResult<i64> {
        self.resolve(spec)?
            .to_integer()
            .map_err(|e| ToolError::invalid_argument(spec.name(), e.expected, e.actual))
    }

    pub fn real(&self, spec: &ParamSpec) -> ToolResult<f64> {
        self.resolve(spec)?
            .to_real()
            .map_err(|e| ToolError::invalid_argument(spec.name(), e.expected, e.actual))
    }

    pub fn integer_list(&self, spec: &ParamSpec) -> ToolResult<Vec<i64>> {
        self.resolve(spec)?
            .to_integer_list()
            .map_err(|_| ToolError::MalformedList)
    }
}
