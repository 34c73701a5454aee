// Type inference for the jsonshape schema system
//
// This module turns a sample JSON value into a structural type label,
// unifying heterogeneous collection element types into ordered unions and
// deciding whether an object is a homogeneous string-keyed record or a
// fixed-shape struct.

use serde_json::{Map, Value};

use crate::internal::error::{Error, Result};
use crate::schema::key::sanitize_identifier;
use crate::schema::types::{TypeLabel, ValueKind};

/// Configuration for type inference
#[derive(Debug, Clone)]
pub struct InferenceConfig {
    /// Number of spaces per nesting level in inline nested-shape labels
    pub indent_width: usize,

    /// Objects with more members than this are always treated as records
    pub record_member_threshold: usize,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            indent_width: 4,
            record_member_threshold: 5,
        }
    }
}

/// Structural type inference engine
#[derive(Debug, Default)]
pub struct TypeInferencer {
    config: InferenceConfig,
}

impl TypeInferencer {
    /// Creates a new inference engine with default configuration
    pub fn new() -> Self {
        Self {
            config: InferenceConfig::default(),
        }
    }

    /// Creates a new inference engine with custom configuration
    pub fn with_config(config: InferenceConfig) -> Self {
        Self { config }
    }

    /// Number of spaces per nesting level, as configured. The emitter
    /// reuses this so member lines align with nested-shape braces.
    pub(crate) fn indent_width(&self) -> usize {
        self.config.indent_width
    }

    /// Infers the structural type label for a sample value.
    ///
    /// A literal null is rejected: nullability is declared through schema
    /// key syntax, never sampled from data.
    pub fn infer(&self, value: &Value) -> Result<TypeLabel> {
        self.infer_at_depth(value, 0)
    }

    /// Infers a label at a given nesting depth. The depth only affects the
    /// indentation of inline nested-shape literals; the emitter starts its
    /// members at depth 1.
    pub(crate) fn infer_at_depth(&self, value: &Value, depth: usize) -> Result<TypeLabel> {
        match value {
            Value::Null => Err(Error::NullNotAllowed),
            Value::Bool(_) | Value::Number(_) | Value::String(_) => {
                Ok(ValueKind::of(value).name().to_string())
            }
            Value::Array(items) => {
                if items.is_empty() {
                    return Ok("Array<unknown>".to_string());
                }
                let element = self.unify(items.iter(), depth)?;
                Ok(format!("Array<{}>", element))
            }
            Value::Object(members) => self.infer_object(members, depth),
        }
    }

    fn infer_object(&self, members: &Map<String, Value>, depth: usize) -> Result<TypeLabel> {
        if members.is_empty() {
            return Ok("Record<string,unknown>".to_string());
        }

        if self.is_record_like(members) {
            let element = self.unify(members.values(), depth)?;
            return Ok(format!("Record<string,{}>", element));
        }

        // Struct-like: inline nested shape, one line per member, closing
        // brace back at the current depth
        let inner = " ".repeat(self.config.indent_width * (depth + 1));
        let outer = " ".repeat(self.config.indent_width * depth);
        let mut shape = String::from("{\n");
        for (name, member) in members {
            let label = self.infer_at_depth(member, depth + 1)?;
            shape.push_str(&format!("{}{}: {}\n", inner, sanitize_identifier(name), label));
        }
        shape.push_str(&outer);
        shape.push('}');
        Ok(shape)
    }

    /// The record heuristic: objects above the member threshold are always
    /// records; at or below it, only an object carrying an empty-string key
    /// whose values are all primitive qualifies.
    pub(crate) fn is_record_like(&self, members: &Map<String, Value>) -> bool {
        if members.len() > self.config.record_member_threshold {
            return true;
        }
        members.contains_key("")
            && members.values().all(|v| ValueKind::of(v).is_primitive())
    }

    /// Unifies the labels of a collection of values: inferred in order,
    /// deduplicated preserving first appearance, joined with '|'.
    fn unify<'a>(
        &self,
        values: impl Iterator<Item = &'a Value>,
        depth: usize,
    ) -> Result<TypeLabel> {
        let mut labels: Vec<TypeLabel> = Vec::new();
        for value in values {
            let label = self.infer_at_depth(value, depth)?;
            if !labels.contains(&label) {
                labels.push(label);
            }
        }
        Ok(labels.join("|"))
    }
}
