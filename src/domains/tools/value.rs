//! Loosely-typed argument values and their coercions.
//!
//! Callers send arguments as arbitrary JSON. [`ArgValue`] keeps the shape the
//! caller used; the `to_*` methods convert to the types the operations need
//! and fail instead of truncating.

use serde::{Deserialize, Serialize};
use indexmap::IndexMap;
use std::fmt;

/// Exclusive upper bound of `i64` as an `f64` (2^63).
const I64_UPPER: f64 = 9_223_372_036_854_775_808.0;

/// An untyped argument value as decoded from a request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArgValue {
    Null,
    Bool(bool),
    Integer(i64),
    Real(f64),
    String(String),
    Sequence(Vec<ArgValue>),
    Map(IndexMap<String, ArgValue>),
}

/// Why a value could not be coerced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoercionError {
    pub expected: &'static str,
    pub actual: String,
}

impl CoercionError {
    fn new(expected: &'static str, value: &ArgValue) -> Self {
        Self {
            expected,
            actual: value.describe(),
        }
    }
}

impl ArgValue {
    /// Short description used in error messages.
    pub fn describe(&self) -> String {
        match self {
            Self::Null => "null".to_string(),
            Self::Bool(b) => format!("boolean {}", b),
            Self::Integer(i) => format!("integer {}", i),
            Self::Real(r) => format!("number {}", r),
            Self::String(s) => format!("string {:?}", s),
            Self::Sequence(items) => format!("array of {} elements", items.len()),
            Self::Map(_) => "object".to_string(),
        }
    }

    /// Coerce to a 64-bit integer.
    ///
    /// Accepts integers, reals without a fractional part, and numeric strings.
    pub fn to_integer(&self) -> Result<i64, CoercionError> {
        match self {
            Self::Integer(i) => Ok(*i),
            Self::Real(r) => real_to_integer(*r).ok_or_else(|| CoercionError::new("integer", self)),
            Self::String(s) => {
                let trimmed = s.trim();
                trimmed
                    .parse::<i64>()
                    .ok()
                    .or_else(|| trimmed.parse::<f64>().ok().and_then(real_to_integer))
                    .ok_or_else(|| CoercionError::new("integer", self))
            }
            _ => Err(CoercionError::new("integer", self)),
        }
    }

    /// Coerce to a real number.
    pub fn to_real(&self) -> Result<f64, CoercionError> {
        match self {
            Self::Integer(i) => Ok(*i as f64),
            Self::Real(r) => Ok(*r),
            Self::String(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| CoercionError::new("number", self)),
            _ => Err(CoercionError::new("number", self)),
        }
    }

    /// Coerce to a list of integers. Every element must coerce.
    pub fn to_integer_list(&self) -> Result<Vec<i64>, CoercionError> {
        match self {
            Self::Sequence(items) => items
                .iter()
                .map(ArgValue::to_integer)
                .collect::<Result<Vec<_>, _>>()
                .map_err(|_| CoercionError::new("array of integers", self)),
            _ => Err(CoercionError::new("array of integers", self)),
        }
    }
}

fn real_to_integer(r: f64) -> Option<i64> {
    if r.is_finite() && r.fract() == 0.0 && r >= -I64_UPPER && r < I64_UPPER {
        Some(r as i64)
    } else {
        None
    }
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Bool(b) => write!(f, "{}", b),
            Self::Integer(i) => write!(f, "{}", i),
            Self::Real(r) => write!(f, "{}", r),
            Self::String(s) => write!(f, "{:?}", s),
            Self::Sequence(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Self::Map(map) => {
                write!(f, "{{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                write!(f, "}}")
            }
        }
    }
}
