// Schema module for jsonshape
//
// This module provides type inference, declaration emission and schema
// validation for JSON documents. It includes:
//
// 1. A primitive category vocabulary shared by both engines
// 2. A schema key codec for the '?' / '^...$' marker encoding
// 3. Structural type inference over sample values
// 4. An interface declaration emitter
// 5. A two-pass recursive schema validator with default injection
// 6. Schema document sources and per-validator caching

// Re-export public types and functions
pub use self::declaration::{DeclarationEmitter, DEFAULT_INTERFACE_NAME};
pub use self::inference::{InferenceConfig, TypeInferencer};
pub use self::key::{sanitize_identifier, SchemaKey};
pub use self::source::{DirectorySource, SchemaSource, SCHEMA_DIR_ENV};
pub use self::types::{TypeLabel, ValueKind};
pub use self::validator::SchemaValidator;

// Sub-modules
pub mod declaration;
pub mod inference;
pub mod key;
pub mod source;
pub mod types;
pub mod validator;
