use thiserror::Error;

/// Unified error type for the jsonshape library.
///
/// Every failure is fail-fast: the first violation aborts the whole
/// generation or validation call. Validation errors carry the dotted
/// path to the offending property so callers can report it verbatim.
#[derive(Error, Debug)]
pub enum Error {
    /// The sample or JSON text handed to the emitter was unusable.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A literal null appeared as a sample leaf. Nullability must be
    /// declared through the schema key syntax, never sampled.
    #[error("Null is not a valid type sample; mark the key optional instead")]
    NullNotAllowed,

    /// The data object carries a key the schema does not declare.
    #[error("Unknown property '{path}'")]
    UnknownProperty { path: String },

    /// A regex-role schema leaf failed to compile.
    #[error("Invalid pattern '{pattern}' at '{path}': {source}")]
    InvalidPattern {
        path: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// The data value's primitive category does not match the schema sample.
    #[error("Type mismatch at '{path}': expected {expected}, got {actual}")]
    TypeMismatch {
        path: String,
        expected: String,
        actual: String,
    },

    /// A non-optional schema key has no usable value in the data.
    #[error("Missing required property '{path}'")]
    MissingRequired { path: String },

    /// A string value did not match its regex-role pattern.
    #[error("Value at '{path}' does not match pattern '{pattern}'")]
    PatternMismatch { path: String, pattern: String },

    /// The schema document for a collection could not be obtained.
    #[error("Failed to load schema for collection '{collection}': {source}")]
    SchemaLoadFailure {
        collection: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// A specialized `Result` type for jsonshape operations.
pub type Result<T> = std::result::Result<T, Error>;
