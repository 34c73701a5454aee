// Interface declaration emitter for the jsonshape schema system
//
// Walks a sample object, asks the inference engine for each member's type
// and renders an indented `interface _<Name> { ... }` body. Optionality is
// purely syntactic: a raw member key ending in '?' unions the rendered
// type with null no matter what was sampled.

use serde_json::Value;

use crate::internal::error::{Error, Result};
use crate::schema::inference::TypeInferencer;
use crate::schema::key::sanitize_identifier;

/// Interface name used when the caller does not supply one.
pub const DEFAULT_INTERFACE_NAME: &str = "Generated";

/// Declaration emitter
#[derive(Debug, Default)]
pub struct DeclarationEmitter {
    inference: TypeInferencer,
}

impl DeclarationEmitter {
    /// Creates a new emitter with a default inference engine
    pub fn new() -> Self {
        Self {
            inference: TypeInferencer::new(),
        }
    }

    /// Creates an emitter backed by a custom inference engine
    pub fn with_inferencer(inference: TypeInferencer) -> Self {
        Self { inference }
    }

    /// Renders an interface declaration for a sample object.
    ///
    /// Fails with [`Error::InvalidInput`] unless the sample is a non-null
    /// JSON object.
    pub fn generate_declaration(&self, sample: &Value, interface_name: &str) -> Result<String> {
        let members = sample.as_object().ok_or_else(|| {
            Error::InvalidInput("declaration sample must be a JSON object".to_string())
        })?;

        // Member lines use the inference engine's indent unit so they
        // align with the braces of any nested shapes it renders
        let indent = " ".repeat(self.inference.indent_width());
        let mut out = format!("interface _{} {{\n", sanitize_identifier(interface_name));
        for (raw, value) in members {
            // Member lines sit at depth 1; nested shapes indent from there
            let label = self.inference.infer_at_depth(value, 1)?;
            let rendered = if raw.ends_with('?') {
                format!("{} | null", label)
            } else {
                label
            };
            out.push_str(&format!(
                "{}{}: {}\n",
                indent,
                sanitize_identifier(raw),
                rendered
            ));
        }
        out.push('}');
        Ok(out)
    }

    /// Parses JSON text and renders its declaration. Malformed input is
    /// wrapped in [`Error::InvalidInput`].
    pub fn from_json_string(&self, text: &str, name: Option<&str>) -> Result<String> {
        let sample: Value = serde_json::from_str(text)
            .map_err(|e| Error::InvalidInput(format!("malformed JSON: {}", e)))?;
        self.generate_declaration(&sample, name.unwrap_or(DEFAULT_INTERFACE_NAME))
    }

    /// Renders the declaration for an already-parsed value.
    pub fn from_object(&self, sample: &Value, name: Option<&str>) -> Result<String> {
        self.generate_declaration(sample, name.unwrap_or(DEFAULT_INTERFACE_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn renders_flat_sample() {
        let emitter = DeclarationEmitter::new();
        let sample = json!({"name": "Ann", "tags": ["a", "b"]});
        let decl = emitter.generate_declaration(&sample, "P").unwrap();
        assert_eq!(
            decl,
            "interface _P {\n    name: string\n    tags: Array<string>\n}"
        );
    }

    #[test]
    fn rejects_non_object_samples() {
        let emitter = DeclarationEmitter::new();
        assert!(matches!(
            emitter.generate_declaration(&json!([1, 2]), "A"),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            emitter.generate_declaration(&json!(null), "A"),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            emitter.generate_declaration(&json!("x"), "A"),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn optional_member_key_unions_with_null() {
        let emitter = DeclarationEmitter::new();
        let decl = emitter
            .generate_declaration(&json!({"age?": 30}), "P")
            .unwrap();
        assert_eq!(decl, "interface _P {\n    age: number | null\n}");
    }

    #[test]
    fn nested_struct_members_indent_by_depth() {
        let emitter = DeclarationEmitter::new();
        let sample = json!({"person": {"name": "Ann", "address": {"city": "X"}}});
        let decl = emitter.generate_declaration(&sample, "Doc").unwrap();
        assert_eq!(
            decl,
            "interface _Doc {\n    person: {\n        name: string\n        address: {\n            city: string\n        }\n    }\n}"
        );
    }

    #[test]
    fn member_count_matches_sample_at_top_level() {
        let emitter = DeclarationEmitter::new();
        let sample = json!({"a": 1, "b": "x", "c": true, "d": [1]});
        let decl = emitter.generate_declaration(&sample, "N").unwrap();
        // One line per member plus header and closing brace
        assert_eq!(decl.lines().count(), 2 + 4);
        let opens = decl.matches('{').count();
        let closes = decl.matches('}').count();
        assert_eq!(opens, closes);
    }

    #[test]
    fn from_object_is_idempotent() {
        let emitter = DeclarationEmitter::new();
        let sample = json!({"a": {"b": [1, "x"]}, "c?": false});
        let first = emitter.from_object(&sample, Some("T")).unwrap();
        let second = emitter.from_object(&sample, Some("T")).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn from_json_string_wraps_parse_errors() {
        let emitter = DeclarationEmitter::new();
        let err = emitter.from_json_string("{not json", None).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn from_json_string_uses_default_name() {
        let emitter = DeclarationEmitter::new();
        let decl = emitter.from_json_string(r#"{"a": 1}"#, None).unwrap();
        assert!(decl.starts_with("interface _Generated {"));
    }

    #[test]
    fn custom_indent_width_keeps_members_and_braces_aligned() {
        use crate::schema::inference::InferenceConfig;

        let emitter = DeclarationEmitter::with_inferencer(TypeInferencer::with_config(
            InferenceConfig {
                indent_width: 2,
                record_member_threshold: 5,
            },
        ));
        let decl = emitter
            .generate_declaration(&json!({"outer": {"inner": 1}}), "T")
            .unwrap();
        assert_eq!(
            decl,
            "interface _T {\n  outer: {\n    inner: number\n  }\n}"
        );
    }

    #[test]
    fn awkward_member_names_are_quoted() {
        let emitter = DeclarationEmitter::new();
        let decl = emitter
            .generate_declaration(&json!({"first-name": "Ann"}), "P")
            .unwrap();
        assert_eq!(decl, "interface _P {\n    \"first-name\": string\n}");
    }
}
