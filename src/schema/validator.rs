// Schema validator for the jsonshape schema system
//
// Validates a data object against a collection's schema document, whose
// leaves double as type samples, regex patterns and fallback defaults.
// Validation is fail-fast and two-pass per object level: unknown-key
// rejection first, then the per-key checks in schema declaration order.
// The validator owns its schema cache and the injected source; there is
// no process-wide registry.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use regex::Regex;
use serde_json::{Map, Value};
use tracing::debug;

use crate::internal::error::{Error, Result};
use crate::schema::key::{sanitize_identifier, SchemaKey};
use crate::schema::source::{DirectorySource, SchemaSource};
use crate::schema::types::ValueKind;

/// Schema validator with a per-instance, append-only schema cache
#[derive(Debug)]
pub struct SchemaValidator<S: SchemaSource> {
    source: S,
    cache: RwLock<HashMap<String, Arc<Value>>>,
}

impl SchemaValidator<DirectorySource> {
    /// Creates a validator reading schemas from the given directory
    pub fn with_source_dir(dir: impl Into<std::path::PathBuf>) -> Self {
        Self::new(DirectorySource::new(dir))
    }

    /// Creates a validator reading schemas from the directory named by
    /// the `JSONSHAPE_SCHEMA_DIR` environment variable.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(DirectorySource::from_env()?))
    }
}

impl<S: SchemaSource> SchemaValidator<S> {
    /// Creates a validator over an injected schema source
    pub fn new(source: S) -> Self {
        Self {
            source,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Validates a data object against the schema for `collection` and
    /// returns a defaulted copy of it. The caller's value is never
    /// mutated; keys are only ever added, never removed.
    pub fn validate(&self, collection: &str, data: &Value) -> Result<Value> {
        let schema = self.schema_for(collection)?;
        let schema_members = schema.as_object().ok_or_else(|| {
            Error::InvalidInput("schema document must be a JSON object".to_string())
        })?;

        let mut result = data.clone();
        let members = result.as_object_mut().ok_or_else(|| {
            Error::InvalidInput("validation data must be a JSON object".to_string())
        })?;

        validate_level(schema_members, members, "")?;
        Ok(result)
    }

    /// Resolves the schema for a collection, fetching through the source
    /// on first reference and caching for the validator's lifetime.
    /// Concurrent first fetches may load redundantly; the first insert
    /// wins and the contents are identical either way.
    fn schema_for(&self, collection: &str) -> Result<Arc<Value>> {
        if let Some(schema) = self
            .cache
            .read()
            .expect("schema cache poisoned")
            .get(collection)
        {
            return Ok(Arc::clone(schema));
        }

        debug!(collection, "loading schema through source");
        let loaded = Arc::new(self.source.load(collection)?);
        let mut cache = self.cache.write().expect("schema cache poisoned");
        let entry = cache
            .entry(collection.to_string())
            .or_insert_with(|| loaded);
        Ok(Arc::clone(entry))
    }
}

fn child_path(path: &str, name: &str) -> String {
    let segment = sanitize_identifier(name);
    if path.is_empty() {
        segment
    } else {
        format!("{}.{}", path, segment)
    }
}

/// Validates one object level: pass 1 rejects data keys the schema does
/// not declare, pass 2 walks the schema keys in declaration order.
fn validate_level(
    schema: &Map<String, Value>,
    data: &mut Map<String, Value>,
    path: &str,
) -> Result<()> {
    // Pass 1: every data key must address some schema key, either by its
    // raw text or with the '?' / '^...$' markers stripped
    for name in data.keys() {
        let known = schema
            .keys()
            .any(|raw| SchemaKey::parse(raw).matches(name));
        if !known {
            return Err(Error::UnknownProperty {
                path: child_path(path, name),
            });
        }
    }

    // Pass 2: schema keys in declaration order
    for (raw, leaf) in schema {
        let key = SchemaKey::parse(raw);
        let path_to = child_path(path, &key.canonical);

        // The regex role needs both the key wrapper and a string leaf;
        // a non-string leaf under a wrapped key stays a plain sample
        let regex_role = key.has_regex && leaf.is_string();
        let pattern = if regex_role {
            let text = leaf.as_str().unwrap_or_default();
            Some(Regex::new(text).map_err(|e| Error::InvalidPattern {
                path: path_to.clone(),
                pattern: text.to_string(),
                source: e,
            })?)
        } else {
            None
        };
        // Every non-regex leaf is default-eligible, whatever its value
        let has_default = !regex_role;

        let present = data
            .get(&key.canonical)
            .map_or(false, |value| !value.is_null());

        // Type check: primitive category of data against the schema
        // sample; skipped entirely for optional keys
        if present && !key.optional {
            let expected = ValueKind::of(leaf);
            let actual = ValueKind::of(&data[key.canonical.as_str()]);
            if expected != actual {
                return Err(Error::TypeMismatch {
                    path: path_to,
                    expected: expected.name().to_string(),
                    actual: actual.name().to_string(),
                });
            }
        }

        if !present && !key.optional {
            return Err(Error::MissingRequired { path: path_to });
        }

        if present {
            if let Some(re) = &pattern {
                let matched = data[key.canonical.as_str()]
                    .as_str()
                    .map_or(false, |s| re.is_match(s));
                if !matched {
                    return Err(Error::PatternMismatch {
                        path: path_to,
                        pattern: re.as_str().to_string(),
                    });
                }
            }
        }

        // Default injection for absent optional fields
        if !present && key.optional && has_default {
            data.insert(key.canonical.clone(), leaf.clone());
        }

        if !present {
            continue;
        }

        if let Some(nested_schema) = leaf.as_object() {
            if data[key.canonical.as_str()].is_object() {
                if let Some(sample) = nested_schema.get("") {
                    // Record signal: shallow check, every entry must share
                    // the sampled value's primitive category
                    let expected = ValueKind::of(sample);
                    let entries = data[key.canonical.as_str()]
                        .as_object()
                        .expect("presence checked above");
                    for (name, value) in entries {
                        let actual = ValueKind::of(value);
                        if actual != expected {
                            return Err(Error::TypeMismatch {
                                path: child_path(&path_to, name),
                                expected: expected.name().to_string(),
                                actual: actual.name().to_string(),
                            });
                        }
                    }
                } else {
                    let entries = data
                        .get_mut(&key.canonical)
                        .and_then(Value::as_object_mut)
                        .expect("presence checked above");
                    validate_level(nested_schema, entries, &path_to)?;
                }
            }
        } else if let Some(schema_items) = leaf.as_array() {
            if let Some(data_items) = data[key.canonical.as_str()].as_array() {
                let mut allowed: Vec<ValueKind> = Vec::new();
                for item in schema_items {
                    let kind = ValueKind::of(item);
                    if !allowed.contains(&kind) {
                        allowed.push(kind);
                    }
                }
                for item in data_items {
                    let kind = ValueKind::of(item);
                    if !allowed.contains(&kind) {
                        let names: Vec<&str> =
                            allowed.iter().map(ValueKind::name).collect();
                        return Err(Error::TypeMismatch {
                            path: path_to,
                            expected: format!("one of [{}]", names.join(", ")),
                            actual: kind.name().to_string(),
                        });
                    }
                }
            }
        }
    }

    Ok(())
}
