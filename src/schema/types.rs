// Shared type vocabulary for the jsonshape schema system
//
// This module defines the primitive category classification used by both
// the inference engine and the validator, ensuring the two engines agree
// on what "the type of a JSON value" means.

use std::fmt;

use serde_json::Value;

/// A structural type label produced by the inference engine.
///
/// Labels are opaque strings: a primitive name (`string`, `number`,
/// `boolean`), `Array<T>`, `Record<string,T>`, a `|`-joined union, or an
/// inline nested-shape literal. Equality is plain string equality.
pub type TypeLabel = String;

/// The runtime category of a JSON value.
///
/// The validator compares data values against schema samples at this
/// granularity; it never distinguishes integer from float or inspects
/// string contents beyond the regex role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// JSON null
    Null,
    /// JSON true/false
    Boolean,
    /// Any JSON number
    Number,
    /// JSON string
    String,
    /// JSON array
    Array,
    /// JSON object
    Object,
}

impl ValueKind {
    /// Classifies a JSON value into its primitive category.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Boolean,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
        }
    }

    /// Returns the category name as used in type labels and diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Boolean => "boolean",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        }
    }

    /// Returns true for the scalar categories (string, number, boolean).
    ///
    /// Null is deliberately not primitive here: a null leaf is never a
    /// usable type sample.
    pub fn is_primitive(&self) -> bool {
        matches!(
            self,
            ValueKind::String | ValueKind::Number | ValueKind::Boolean
        )
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
